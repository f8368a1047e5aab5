// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use saoke::commands::export::write_records;
use saoke::models::ContributionRecord;
use serde_json::Value;
use tempfile::tempdir;

fn records() -> Vec<ContributionRecord> {
    vec![
        ContributionRecord {
            timestamp: "01/09/2024_5215.97152".into(),
            transaction_id: "1".into(),
            credit: Decimal::from(3000),
            debit: Decimal::ZERO,
            detail: "NGUYEN THI MAO, Chuyen tien".into(),
        },
        ContributionRecord {
            timestamp: "02/09/2024_5212.22965".into(),
            transaction_id: "2".into(),
            credit: "10000.5".parse().unwrap(),
            debit: Decimal::ZERO,
            detail: "Ung Ho (by TPBank ChatPay)".into(),
        },
    ]
}

#[test]
fn csv_export_writes_header_and_quotes_commas() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("matches.csv");
    write_records(&records(), "csv", &out).unwrap();

    let text = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "date_time,trans_no,credit,debit,detail");
    assert_eq!(
        lines[1],
        "01/09/2024_5215.97152,1,3000,0,\"NGUYEN THI MAO, Chuyen tien\""
    );
    assert_eq!(lines.len(), 3);
}

#[test]
fn json_export_uses_wire_field_names() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("matches.json");
    write_records(&records(), "json", &out).unwrap();

    let v: Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    let arr = v.as_array().unwrap();
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[1]["trans_no"], "2");
    assert_eq!(arr[1]["date_time"], "02/09/2024_5212.22965");
    assert_eq!(arr[1]["credit"], "10000.5");

    let back: Vec<ContributionRecord> = serde_json::from_value(v).unwrap();
    assert_eq!(back, records());
}

#[test]
fn unknown_format_is_an_error() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("matches.xml");
    let err = write_records(&records(), "xml", &out).unwrap_err();
    assert!(err.to_string().contains("Unknown format"));
    assert!(!out.exists());
}
