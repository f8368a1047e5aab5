// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::ContributionRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub count: usize,
    pub credit: Decimal,
    pub debit: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub total_credit: Decimal,
    pub total_debit: Decimal,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    pub by_day: Vec<DaySummary>,
    /// Records whose timestamp has no parseable date; counted in the totals
    /// but not in `by_day`.
    pub undated: usize,
}

/// Totals over a match set, with a per-day breakdown in date order.
pub fn summarize(records: &[ContributionRecord]) -> Summary {
    let mut days: BTreeMap<NaiveDate, DaySummary> = BTreeMap::new();
    let mut total_credit = Decimal::ZERO;
    let mut total_debit = Decimal::ZERO;
    let mut undated = 0;

    for r in records {
        total_credit += r.credit;
        total_debit += r.debit;
        let Some(date) = r.date() else {
            undated += 1;
            continue;
        };
        let day = days.entry(date).or_insert_with(|| DaySummary {
            date,
            count: 0,
            credit: Decimal::ZERO,
            debit: Decimal::ZERO,
        });
        day.count += 1;
        day.credit += r.credit;
        day.debit += r.debit;
    }

    Summary {
        count: records.len(),
        total_credit,
        total_debit,
        first_date: days.keys().next().copied(),
        last_date: days.keys().next_back().copied(),
        by_day: days.into_values().collect(),
        undated,
    }
}
