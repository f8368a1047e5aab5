// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use super::{gateway, query_from_matches, run_query};
use crate::config::Settings;
use crate::models::ContributionRecord;
use crate::session::BrowseSession;
use crate::summary::summarize;
use crate::utils::{maybe_print_json, record_table};

pub async fn handle(settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let query = query_from_matches(sub, settings.page_size)?;
    let source = gateway(settings)?;
    let session = run_query(&source, query).await?;
    print_page(&session, sub.get_flag("json"), sub.get_flag("jsonl"))
}

#[derive(Serialize)]
pub struct PageOutput<'a> {
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_count: usize,
    pub records: &'a [ContributionRecord],
}

pub fn page_output(session: &BrowseSession) -> PageOutput<'_> {
    let view = session.page_view();
    PageOutput {
        page: view.page,
        page_size: session.query().page_size().get(),
        total_pages: view.total_pages,
        total_count: view.total_count,
        records: view.slice,
    }
}

fn print_page(session: &BrowseSession, json_flag: bool, jsonl_flag: bool) -> Result<()> {
    let out = page_output(session);
    if jsonl_flag {
        return maybe_print_json(false, true, &out.records).map(|_| ());
    }
    if maybe_print_json(json_flag, false, &out)? {
        return Ok(());
    }

    let span = summarize(session.store().records());
    if let (Some(first), Some(last)) = (span.first_date, span.last_date) {
        println!(
            "Published period: {} to {}",
            first.format("%d/%m/%Y"),
            last.format("%d/%m/%Y")
        );
    }
    println!("{}", record_table(out.records));

    let view = session.page_view();
    match view.range(session.query().page_size()) {
        Some((first, last)) => println!(
            "Showing {}-{} of {} (page {} of {})",
            first, last, view.total_count, view.page, view.total_pages
        ),
        None => println!(
            "No records on this page ({} total, page {} of {})",
            view.total_count, view.page, view.total_pages
        ),
    }
    Ok(())
}
