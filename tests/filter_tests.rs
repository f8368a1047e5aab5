// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use saoke::filter::{MatchStrategy, filter, filter_candidates};
use saoke::models::{AmountBucket, ContributionRecord, QueryState};

fn rec(ts: &str, id: &str, credit: i64, debit: i64, detail: &str) -> ContributionRecord {
    ContributionRecord {
        timestamp: ts.to_string(),
        transaction_id: id.to_string(),
        credit: Decimal::from(credit),
        debit: Decimal::from(debit),
        detail: detail.to_string(),
    }
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn store() -> Vec<ContributionRecord> {
    vec![
        rec("01/09/2024_1", "T1", 3000, 0, "Nguyen Van A"),
        rec("02/09/2024_2", "T2", 1_200_000, 0, "Tran Thi B"),
    ]
}

fn ids(records: &[ContributionRecord]) -> Vec<&str> {
    records.iter().map(|r| r.transaction_id.as_str()).collect()
}

#[test]
fn default_query_keeps_every_record() {
    let records = vec![
        rec("01/09/2024_1", "A", 0, 0, ""),
        rec("not a date", "B", 10, 0, "x"),
        rec("31/02/2024_9", "C", 9_000_000, 5, "y"),
    ];
    for r in &records {
        let single = vec![r.clone()];
        assert_eq!(filter(&single, &QueryState::default()), single);
    }
}

#[test]
fn low_bucket_and_date_range_scenario() {
    let q = QueryState::default()
        .with_amount_bucket(AmountBucket::Low)
        .with_start_date(Some(day(2024, 9, 1)))
        .with_end_date(Some(day(2024, 9, 1)));
    assert_eq!(ids(&filter(&store(), &q)), vec!["T1"]);
}

#[test]
fn low_bucket_excludes_zero_and_above_one_million() {
    let records = vec![
        rec("01/09/2024_1", "zero", 0, 250_000, "debit only"),
        rec("01/09/2024_2", "one", 1, 0, ""),
        rec("01/09/2024_3", "edge", 1_000_000, 0, ""),
        rec("01/09/2024_4", "over", 1_000_001, 0, ""),
    ];
    let q = QueryState::default().with_amount_bucket(AmountBucket::Low);
    let out = filter(&records, &q);
    assert_eq!(ids(&out), vec!["one", "edge"]);
    assert!(out
        .iter()
        .all(|r| r.credit > Decimal::ZERO && r.credit <= Decimal::from(1_000_000)));
}

#[test]
fn mid_bucket_bounds_and_debit_is_ignored() {
    let records = vec![
        rec("01/09/2024_1", "a", 1_000_000, 0, ""),
        rec("01/09/2024_2", "b", 1_000_001, 0, ""),
        rec("01/09/2024_3", "c", 5_000_000, 0, ""),
        rec("01/09/2024_4", "d", 5_000_001, 0, ""),
        rec("01/09/2024_5", "e", 0, 2_000_000, "large debit"),
    ];
    let q = QueryState::default().with_amount_bucket(AmountBucket::Mid);
    assert_eq!(ids(&filter(&records, &q)), vec!["b", "c"]);
}

#[test]
fn fractional_credit_is_compared_exactly() {
    let mut r = rec("01/09/2024_1", "frac", 0, 0, "");
    r.credit = "1000000.01".parse().unwrap();
    let records = vec![r];
    let low = QueryState::default().with_amount_bucket(AmountBucket::Low);
    let mid = QueryState::default().with_amount_bucket(AmountBucket::Mid);
    assert!(filter(&records, &low).is_empty());
    assert_eq!(filter(&records, &mid).len(), 1);
}

#[test]
fn date_bounds_are_inclusive() {
    let records = vec![
        rec("31/08/2024_1", "before", 1, 0, ""),
        rec("01/09/2024_1", "start", 1, 0, ""),
        rec("05/09/2024_1", "inside", 1, 0, ""),
        rec("10/09/2024_1", "end", 1, 0, ""),
        rec("11/09/2024_1", "after", 1, 0, ""),
    ];
    let q = QueryState::default()
        .with_start_date(Some(day(2024, 9, 1)))
        .with_end_date(Some(day(2024, 9, 10)));
    assert_eq!(ids(&filter(&records, &q)), vec!["start", "inside", "end"]);
}

#[test]
fn open_ended_date_ranges() {
    let records = vec![
        rec("01/09/2024_1", "a", 1, 0, ""),
        rec("05/09/2024_1", "b", 1, 0, ""),
    ];
    let from = QueryState::default().with_start_date(Some(day(2024, 9, 2)));
    let until = QueryState::default().with_end_date(Some(day(2024, 9, 2)));
    assert_eq!(ids(&filter(&records, &from)), vec!["b"]);
    assert_eq!(ids(&filter(&records, &until)), vec!["a"]);
}

#[test]
fn malformed_timestamp_only_fails_when_a_bound_is_set() {
    let records = vec![
        rec("2024-09-01_1", "iso", 1, 0, ""),
        rec("", "empty", 1, 0, ""),
        rec("32/09/2024_1", "bad-day", 1, 0, ""),
        rec("03/09/2024", "no-suffix", 1, 0, ""),
    ];
    assert_eq!(filter(&records, &QueryState::default()).len(), 4);

    let q = QueryState::default().with_start_date(Some(day(2024, 1, 1)));
    assert_eq!(ids(&filter(&records, &q)), vec!["no-suffix"]);
}

#[test]
fn text_match_is_case_insensitive_substring() {
    let records = vec![
        rec("01/09/2024_1", "1", 1, 0, "267515.010924.122904.NGUYEN THI MAO Chuyen tien"),
        rec("01/09/2024_2", "2", 1, 0, "Ung Ho Nha Nuoc Viet Nam"),
        rec("01/09/2024_3", "3", 1, 0, "ủng hộ đồng bào NGUYỄN"),
    ];
    let q = QueryState::default().with_search_term("thi mao");
    assert_eq!(ids(&filter(&records, &q)), vec!["1"]);

    let q = QueryState::default().with_search_term("Nguyễn");
    assert_eq!(ids(&filter(&records, &q)), vec!["3"]);

    let q = QueryState::default().with_search_term("ỦNG HỘ");
    assert_eq!(ids(&filter(&records, &q)), vec!["3"]);
}

#[test]
fn filter_preserves_input_order() {
    let records = vec![
        rec("03/09/2024_1", "c", 10, 0, "x"),
        rec("01/09/2024_1", "a", 10, 0, "x"),
        rec("02/09/2024_1", "b", 10, 0, "x"),
    ];
    let q = QueryState::default().with_amount_bucket(AmountBucket::Low);
    assert_eq!(ids(&filter(&records, &q)), vec!["c", "a", "b"]);
}

#[test]
fn strategy_follows_search_term() {
    assert_eq!(
        MatchStrategy::for_query(&QueryState::default()),
        MatchStrategy::LocalScan
    );
    assert_eq!(
        MatchStrategy::for_query(&QueryState::default().with_search_term("Tran")),
        MatchStrategy::RemoteDelegated("Tran".to_string())
    );
}

#[test]
fn remote_candidates_skip_text_predicate() {
    // The remote index may match on prefixes the local substring test would miss.
    let candidates = vec![rec("02/09/2024_2", "T2", 1_200_000, 0, "TTB")];
    let q = QueryState::default()
        .with_search_term("Tran")
        .with_amount_bucket(AmountBucket::Mid);
    assert_eq!(ids(&filter_candidates(&candidates, &q)), vec!["T2"]);

    let low = q.with_amount_bucket(AmountBucket::Low);
    assert!(filter_candidates(&candidates, &low).is_empty());
}
