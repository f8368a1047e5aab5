// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod config;
pub mod export;
pub mod search;
pub mod stats;

use anyhow::{Context, Result};

use crate::config::Settings;
use crate::gateway::{HttpGateway, LedgerSource};
use crate::models::{AmountBucket, PageSize, QueryState};
use crate::session::BrowseSession;
use crate::utils::parse_date;

/// Build the query described by the shared filter flags. Commands without
/// paging flags get page 1 at `default_page_size`.
pub fn query_from_matches(sub: &clap::ArgMatches, default_page_size: PageSize) -> Result<QueryState> {
    let term = sub
        .get_one::<String>("query")
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    let bucket = match sub.get_one::<String>("bucket") {
        Some(b) => b.parse::<AmountBucket>()?,
        None => AmountBucket::None,
    };
    let start = sub
        .get_one::<String>("from")
        .map(|s| parse_date(s))
        .transpose()?;
    let end = sub
        .get_one::<String>("to")
        .map(|s| parse_date(s))
        .transpose()?;
    let page_size = match sub.try_get_one::<String>("page-size").ok().flatten() {
        Some(s) => s.parse::<PageSize>()?,
        None => default_page_size,
    };
    let page = sub
        .try_get_one::<usize>("page")
        .ok()
        .flatten()
        .copied()
        .unwrap_or(1);

    Ok(QueryState::default()
        .with_search_term(term)
        .with_amount_bucket(bucket)
        .with_start_date(start)
        .with_end_date(end)
        .with_page_size(page_size)
        .with_page(page))
}

/// Load the ledger from `source` and bring a session to `query`.
pub async fn run_query<S: LedgerSource>(source: &S, query: QueryState) -> Result<BrowseSession> {
    let mut session = BrowseSession::load(source)
        .await
        .context("Could not load the ledger; try again later")?;
    session
        .refresh(source, query.clone())
        .await
        .with_context(|| format!("Search for '{}' failed", query.search_term()))?;
    // Filter changes land on page 1; step to the page that was asked for.
    session.set_page(query.page());
    Ok(session)
}

pub fn gateway(settings: &Settings) -> Result<HttpGateway> {
    HttpGateway::new(&settings.base_url, settings.timeout())
        .with_context(|| format!("Ledger service at '{}'", settings.base_url))
}
