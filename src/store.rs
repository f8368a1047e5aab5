// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::error::{BrowseError, Result};
use crate::models::ContributionRecord;

/// The full, unfiltered ledger for the published period. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<ContributionRecord>,
}

impl RecordStore {
    /// Build a store, rejecting duplicate transaction ids and negative amounts.
    /// Input order is kept.
    pub fn from_records(records: Vec<ContributionRecord>) -> Result<Self> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(records.len());
        for r in &records {
            if !seen.insert(r.transaction_id.as_str()) {
                return Err(BrowseError::InvalidRecord(format!(
                    "duplicate transaction id '{}'",
                    r.transaction_id
                )));
            }
            if r.credit < Decimal::ZERO || r.debit < Decimal::ZERO {
                return Err(BrowseError::InvalidRecord(format!(
                    "negative amount on transaction '{}'",
                    r.transaction_id
                )));
            }
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[ContributionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
