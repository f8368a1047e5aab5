// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use super::{gateway, query_from_matches, run_query};
use crate::config::Settings;
use crate::summary::{Summary, summarize};
use crate::utils::{fmt_vnd, maybe_print_json, pretty_table};

pub async fn handle(settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let query = query_from_matches(sub, settings.page_size)?;
    let source = gateway(settings)?;
    let session = run_query(&source, query).await?;
    let summary = summarize(session.matches());

    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if jsonl_flag {
        maybe_print_json(false, true, &summary.by_day)?;
    } else if !maybe_print_json(json_flag, false, &summary)? {
        print_summary(&summary);
    }
    Ok(())
}

pub fn day_rows(summary: &Summary) -> Vec<Vec<String>> {
    summary
        .by_day
        .iter()
        .map(|d| {
            vec![
                d.date.format("%d/%m/%Y").to_string(),
                d.count.to_string(),
                fmt_vnd(&d.credit),
                fmt_vnd(&d.debit),
            ]
        })
        .collect()
}

fn print_summary(summary: &Summary) {
    println!(
        "{}",
        pretty_table(&["Date", "Records", "Credit", "Debit"], day_rows(summary))
    );
    println!(
        "{} records, credit {}, debit {}",
        summary.count,
        fmt_vnd(&summary.total_credit),
        fmt_vnd(&summary.total_debit)
    );
    if summary.undated > 0 {
        println!("{} records have no readable date", summary.undated);
    }
}
