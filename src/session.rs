// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Query state management.
//!
//! A `BrowseSession` owns the record store, the committed query and the match
//! set derived from them. Every change to the filters bumps a generation
//! counter; a remote search is dispatched with a ticket carrying the
//! generation it was started for, and its result is dropped on arrival if the
//! generation has moved on since.

use tracing::{debug, info, warn};

use crate::error::{BrowseError, Result};
use crate::filter::{self, MatchStrategy};
use crate::gateway::LedgerSource;
use crate::models::{ContributionRecord, QueryState};
use crate::paginate::{PageView, paginate};
use crate::store::RecordStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    Idle,
    Loading,
}

/// Proof of a dispatched remote search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub generation: u64,
    pub term: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The result belonged to the current generation and is now the match set.
    Applied,
    /// A newer query was issued after dispatch; the result was dropped.
    Stale,
}

#[derive(Debug)]
pub struct BrowseSession {
    store: RecordStore,
    /// Query that produced `matches`.
    committed: QueryState,
    /// Query awaiting a remote result, if any.
    pending: Option<QueryState>,
    matches: Vec<ContributionRecord>,
    generation: u64,
    status: SearchStatus,
}

impl BrowseSession {
    pub fn new(store: RecordStore) -> Self {
        let matches = store.records().to_vec();
        Self {
            store,
            committed: QueryState::default(),
            pending: None,
            matches,
            generation: 0,
            status: SearchStatus::Idle,
        }
    }

    /// Fetch the full ledger and start a session over it.
    pub async fn load<S: LedgerSource>(source: &S) -> Result<Self> {
        let records = source.load_all().await.map_err(|e| match e {
            BrowseError::LoadFailed(_) => e,
            other => BrowseError::LoadFailed(other.to_string()),
        })?;
        let store = RecordStore::from_records(records)
            .map_err(|e| BrowseError::LoadFailed(e.to_string()))?;
        info!(records = store.len(), "browse session ready");
        Ok(Self::new(store))
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// The query behind the visible matches.
    pub fn query(&self) -> &QueryState {
        &self.committed
    }

    /// The most recent query the user asked for: the one awaiting a remote
    /// result if a search is in flight, the visible one otherwise. Filter and
    /// page-size edits passed to [`BrowseSession::apply`] should start here.
    pub fn latest_query(&self) -> &QueryState {
        self.pending.as_ref().unwrap_or(&self.committed)
    }

    pub fn matches(&self) -> &[ContributionRecord] {
        &self.matches
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == SearchStatus::Loading
    }

    /// The current page, derived fresh from the match set.
    pub fn page_view(&self) -> PageView<'_> {
        paginate(&self.matches, self.committed.page(), self.committed.page_size())
    }

    /// Replace the query with `next`, compared against [`Self::latest_query`].
    ///
    /// A change that only moves between pages is committed immediately and
    /// returns `None`. Filters that differ from the latest query (including a
    /// revert to the visible query while a search is in flight) supersede any
    /// pending search. A change to the filters or the page size starts a new
    /// generation and lands on page 1. Local scans finish synchronously; a
    /// non-empty search term returns a ticket that the caller must resolve
    /// through [`BrowseSession::complete`].
    pub fn apply(&mut self, next: QueryState) -> Option<SearchTicket> {
        let base = self.latest_query();
        let refilter = base.filters_differ(&next);
        let resized = base.page_size() != next.page_size();

        if !refilter && !resized {
            self.set_page(next.page());
            return None;
        }

        let next = next.with_page(1);
        self.generation += 1;

        if !refilter {
            // Page size only: same matches, new generation, back to page 1.
            if let Some(pending) = self.pending.take() {
                return self.dispatch(pending.with_page_size(next.page_size()).with_page(1));
            }
            self.committed = next;
            return None;
        }

        match MatchStrategy::for_query(&next) {
            MatchStrategy::LocalScan => {
                self.matches = filter::filter(self.store.records(), &next);
                self.committed = next;
                self.pending = None;
                self.status = SearchStatus::Idle;
                None
            }
            MatchStrategy::RemoteDelegated(_) => self.dispatch(next),
        }
    }

    /// Move through the visible matches, clamped to the last page. A search
    /// in flight is left alone and still lands on page 1.
    pub fn set_page(&mut self, page: usize) {
        let total = self.page_view().total_pages;
        self.committed = self.committed.clone().with_page(page).clamp_page(total);
    }

    fn dispatch(&mut self, next: QueryState) -> Option<SearchTicket> {
        let ticket = SearchTicket {
            generation: self.generation,
            term: next.search_term().to_string(),
        };
        debug!(generation = ticket.generation, term = %ticket.term, "remote search dispatched");
        self.pending = Some(next);
        self.status = SearchStatus::Loading;
        Some(ticket)
    }

    /// Settle a remote search.
    ///
    /// A result for an outdated generation is dropped without touching any
    /// state. A failure for the current generation abandons the pending
    /// query, keeps the current matches, and is returned to the caller.
    pub fn complete(
        &mut self,
        ticket: &SearchTicket,
        result: Result<Vec<ContributionRecord>>,
    ) -> Result<Completion> {
        if ticket.generation != self.generation {
            debug!(
                ticket = ticket.generation,
                current = self.generation,
                "discarding stale search result"
            );
            return Ok(Completion::Stale);
        }
        let pending = self.pending.take();
        self.status = SearchStatus::Idle;
        match (result, pending) {
            (Ok(candidates), Some(query)) => {
                self.matches = filter::filter_candidates(&candidates, &query);
                self.committed = query;
                Ok(Completion::Applied)
            }
            (Ok(_), None) => Ok(Completion::Stale),
            (Err(e), _) => {
                match &e {
                    BrowseError::SearchMalformedResponse(msg) => {
                        warn!(term = %ticket.term, %msg, "search response malformed; query reverted")
                    }
                    other => warn!(term = %ticket.term, error = %other, "search failed; query reverted"),
                }
                Err(e)
            }
        }
    }

    /// Apply `next` and, if it needs the remote index, run the search to
    /// completion.
    pub async fn refresh<S: LedgerSource>(
        &mut self,
        source: &S,
        next: QueryState,
    ) -> Result<Completion> {
        match self.apply(next) {
            None => Ok(Completion::Applied),
            Some(ticket) => {
                let result = source.search(&ticket.term).await;
                self.complete(&ticket, result)
            }
        }
    }

    /// Back to the default query with the whole store as the match set.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.committed = QueryState::default();
        self.pending = None;
        self.status = SearchStatus::Idle;
        self.matches = self.store.records().to_vec();
    }
}
