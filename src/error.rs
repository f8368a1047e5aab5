// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Error types for the browse engine.
//!
//! The engine never turns these into user-facing prose; the CLI layer adds
//! context and prints them.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BrowseError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BrowseError {
    /// The initial full-ledger fetch failed. Nothing can be browsed until a
    /// retry succeeds.
    #[error("Failed to load ledger: {0}")]
    LoadFailed(String),

    /// The remote search service could not be reached, timed out, or
    /// answered with a non-success status.
    #[error("Search service unavailable: {0}")]
    SearchUnavailable(String),

    /// The remote search service answered, but the payload did not decode
    /// into contribution records.
    #[error("Malformed search response: {0}")]
    SearchMalformedResponse(String),

    /// A record violates a store invariant (duplicate id, negative amount).
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

impl BrowseError {
    /// Search failures leave the session usable; load failures do not.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            BrowseError::SearchUnavailable(_) | BrowseError::SearchMalformedResponse(_)
        )
    }
}
