// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Remote ledger endpoints.
//!
//! `GET {base}/api/trie/all` returns `{ "data": [...] }`;
//! `GET {base}/api/trie/search/{term}` returns a bare array.

use std::time::Duration;

use reqwest::{Client, Url, header::ACCEPT};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::{BrowseError, Result};
use crate::models::ContributionRecord;

/// Something that can hand out ledger records: the full set, or the records
/// matching a text term.
#[allow(async_fn_in_trait)]
pub trait LedgerSource {
    async fn load_all(&self) -> Result<Vec<ContributionRecord>>;

    /// `term` must be non-empty; callers scan the local store otherwise.
    async fn search(&self, term: &str) -> Result<Vec<ContributionRecord>>;
}

#[derive(Debug, Deserialize)]
struct AllRecords {
    data: Vec<ContributionRecord>,
}

pub fn decode_all_payload(body: &str) -> Result<Vec<ContributionRecord>> {
    serde_json::from_str::<AllRecords>(body)
        .map(|all| all.data)
        .map_err(|e| BrowseError::LoadFailed(format!("could not decode ledger: {}", e)))
}

pub fn decode_search_payload(body: &str) -> Result<Vec<ContributionRecord>> {
    serde_json::from_str::<Vec<ContributionRecord>>(body)
        .map_err(|e| BrowseError::SearchMalformedResponse(e.to_string()))
}

pub struct HttpGateway {
    client: Client,
    base_url: Url,
}

impl HttpGateway {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| BrowseError::LoadFailed(format!("invalid base url '{}': {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(BrowseError::LoadFailed(format!(
                "base url '{}' cannot carry a path",
                base_url
            )));
        }
        let client = crate::utils::http_client(timeout)
            .map_err(|e| BrowseError::LoadFailed(format!("http client: {}", e)))?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was ruled out in `new`, so the segments are mutable.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub fn all_url(&self) -> Url {
        self.endpoint(&["api", "trie", "all"])
    }

    /// The term becomes one percent-encoded path segment, so `/` and `?` in
    /// it cannot change the route.
    pub fn search_url(&self, term: &str) -> Url {
        self.endpoint(&["api", "trie", "search", term])
    }
}

impl LedgerSource for HttpGateway {
    async fn load_all(&self) -> Result<Vec<ContributionRecord>> {
        let url = self.all_url();
        debug!(%url, "loading full ledger");
        let resp = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| BrowseError::LoadFailed(e.to_string()))?;
        let body = resp
            .text()
            .await
            .map_err(|e| BrowseError::LoadFailed(e.to_string()))?;
        let records = decode_all_payload(&body)?;
        info!(count = records.len(), "ledger loaded");
        Ok(records)
    }

    async fn search(&self, term: &str) -> Result<Vec<ContributionRecord>> {
        let url = self.search_url(term);
        debug!(%url, "remote search");
        let resp = match self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .and_then(|r| r.error_for_status())
        {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "search service unavailable");
                return Err(BrowseError::SearchUnavailable(e.to_string()));
            }
        };
        let body = resp.text().await.map_err(|e| {
            warn!(error = %e, "search response body unreadable");
            BrowseError::SearchUnavailable(e.to_string())
        })?;
        decode_search_payload(&body).inspect_err(|e| {
            warn!(error = %e, "search response did not decode");
        })
    }
}
