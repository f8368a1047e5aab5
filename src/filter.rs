// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Record matching.
//!
//! Three predicates (text, amount bucket, date range) are ANDed together and
//! applied as a stable filter: survivors keep their input order.

use tracing::debug;

use crate::models::{ContributionRecord, QueryState};

/// Where matching for a query happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Empty search term: scan the local store.
    LocalScan,
    /// Non-empty search term: the remote index owns text matching.
    RemoteDelegated(String),
}

impl MatchStrategy {
    pub fn for_query(query: &QueryState) -> Self {
        let term = query.search_term();
        let strategy = if term.is_empty() {
            MatchStrategy::LocalScan
        } else {
            MatchStrategy::RemoteDelegated(term.to_string())
        };
        debug!(?strategy, "match strategy chosen");
        strategy
    }
}

/// Case-insensitive substring match on `detail`. An empty term matches all.
pub fn matches_text(record: &ContributionRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    record.detail.to_lowercase().contains(&term.to_lowercase())
}

pub fn matches_amount(record: &ContributionRecord, query: &QueryState) -> bool {
    query.amount_bucket().admits(record.credit)
}

/// Inclusive at both bounds. An unparseable date only fails when a bound is set.
pub fn matches_date(record: &ContributionRecord, query: &QueryState) -> bool {
    if !query.has_date_bound() {
        return true;
    }
    let Some(date) = record.date() else {
        return false;
    };
    query.start_date().is_none_or(|start| date >= start)
        && query.end_date().is_none_or(|end| date <= end)
}

/// Apply all three predicates to `records`.
pub fn filter(records: &[ContributionRecord], query: &QueryState) -> Vec<ContributionRecord> {
    let term = query.search_term();
    records
        .iter()
        .filter(|r| matches_text(r, term) && matches_amount(r, query) && matches_date(r, query))
        .cloned()
        .collect()
}

/// Narrow records returned by the remote index. Text matching already
/// happened remotely and is not repeated here.
pub fn filter_candidates(
    candidates: &[ContributionRecord],
    query: &QueryState,
) -> Vec<ContributionRecord> {
    candidates
        .iter()
        .filter(|r| matches_amount(r, query) && matches_date(r, query))
        .cloned()
        .collect()
}
