// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::Serialize;

use crate::models::{ContributionRecord, PageSize};

/// The visible slice of a match set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView<'a> {
    pub slice: &'a [ContributionRecord],
    pub page: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

impl PageView<'_> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// 1-based inclusive positions of the slice within the match set, for
    /// "showing 21-40 of 45". `None` for an empty slice.
    pub fn range(&self, page_size: PageSize) -> Option<(usize, usize)> {
        if self.slice.is_empty() {
            return None;
        }
        let first = (self.page - 1) * page_size.get() + 1;
        Some((first, first + self.slice.len() - 1))
    }
}

/// Cut page `page` (1-based) out of `matches`. A page past the end yields an
/// empty slice; `total_pages` is never below 1.
pub fn paginate(matches: &[ContributionRecord], page: usize, page_size: PageSize) -> PageView<'_> {
    let size = page_size.get();
    let total_count = matches.len();
    let total_pages = total_count.div_ceil(size).max(1);
    let page = page.max(1);
    let start = (page - 1).saturating_mul(size).min(total_count);
    let end = start.saturating_add(size).min(total_count);
    PageView {
        slice: &matches[start..end],
        page,
        total_pages,
        total_count,
    }
}
