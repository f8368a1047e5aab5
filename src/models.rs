// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::BrowseError;

/// Separator between the display date and the fractional id in a timestamp.
pub const TIMESTAMP_SEPARATOR: char = '_';
pub const TIMESTAMP_DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionRecord {
    #[serde(rename = "date_time", alias = "timestamp")]
    pub timestamp: String,
    #[serde(
        rename = "trans_no",
        alias = "transactionId",
        deserialize_with = "id_from_string_or_number"
    )]
    pub transaction_id: String,
    pub credit: Decimal,
    pub debit: Decimal,
    pub detail: String,
}

impl ContributionRecord {
    /// Date prefix of the timestamp (`01/09/2024_5215.97152` -> 2024-09-01).
    /// `None` when the prefix is not a valid `DD/MM/YYYY` date.
    pub fn date(&self) -> Option<NaiveDate> {
        let prefix = self
            .timestamp
            .split(TIMESTAMP_SEPARATOR)
            .next()
            .unwrap_or_default()
            .trim();
        NaiveDate::parse_from_str(prefix, TIMESTAMP_DATE_FORMAT).ok()
    }
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
        Uint(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Int(n) => n.to_string(),
        RawId::Uint(n) => n.to_string(),
    })
}

/// Coarse credit-amount range selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmountBucket {
    #[default]
    None,
    /// (0, 1_000_000]
    Low,
    /// (1_000_000, 5_000_000]
    Mid,
}

impl AmountBucket {
    /// Only `credit` is inspected; debit never participates.
    pub fn admits(&self, credit: Decimal) -> bool {
        let one_million = Decimal::from(1_000_000u32);
        let five_million = Decimal::from(5_000_000u32);
        match self {
            AmountBucket::None => true,
            AmountBucket::Low => credit > Decimal::ZERO && credit <= one_million,
            AmountBucket::Mid => credit > one_million && credit <= five_million,
        }
    }
}

impl FromStr for AmountBucket {
    type Err = BrowseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "none" | "all" => Ok(AmountBucket::None),
            "low" | "1" => Ok(AmountBucket::Low),
            "mid" | "2" => Ok(AmountBucket::Mid),
            other => Err(BrowseError::InvalidQuery(format!(
                "unknown amount bucket '{}' (use none|low|mid)",
                other
            ))),
        }
    }
}

impl fmt::Display for AmountBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AmountBucket::None => "none",
            AmountBucket::Low => "low",
            AmountBucket::Mid => "mid",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PageSize {
    #[default]
    Twenty,
    Fifty,
    Hundred,
}

impl PageSize {
    pub fn get(self) -> usize {
        match self {
            PageSize::Twenty => 20,
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
        }
    }
}

impl TryFrom<usize> for PageSize {
    type Error = BrowseError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        match n {
            20 => Ok(PageSize::Twenty),
            50 => Ok(PageSize::Fifty),
            100 => Ok(PageSize::Hundred),
            other => Err(BrowseError::InvalidQuery(format!(
                "page size {} not supported (use 20, 50 or 100)",
                other
            ))),
        }
    }
}

impl From<PageSize> for usize {
    fn from(p: PageSize) -> usize {
        p.get()
    }
}

impl FromStr for PageSize {
    type Err = BrowseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: usize = s
            .trim()
            .parse()
            .map_err(|_| BrowseError::InvalidQuery(format!("invalid page size '{}'", s)))?;
        PageSize::try_from(n)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// What the user is currently asking for.
///
/// Values are immutable: every user action builds a new `QueryState` through
/// the `with_*` methods and the session swaps it in as a whole. There is no
/// serde impl, so the page always comes through `with_page` and is at least 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    search_term: String,
    amount_bucket: AmountBucket,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    page: usize,
    page_size: PageSize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            amount_bucket: AmountBucket::None,
            start_date: None,
            end_date: None,
            page: 1,
            page_size: PageSize::Twenty,
        }
    }
}

impl QueryState {
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn amount_bucket(&self) -> AmountBucket {
        self.amount_bucket
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn has_date_bound(&self) -> bool {
        self.start_date.is_some() || self.end_date.is_some()
    }

    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_amount_bucket(mut self, bucket: AmountBucket) -> Self {
        self.amount_bucket = bucket;
        self
    }

    pub fn with_start_date(mut self, date: Option<NaiveDate>) -> Self {
        self.start_date = date;
        self
    }

    pub fn with_end_date(mut self, date: Option<NaiveDate>) -> Self {
        self.end_date = date;
        self
    }

    /// Pages are 1-based; zero is treated as the first page.
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Pull `page` back into `[1, total_pages]`.
    pub fn clamp_page(self, total_pages: usize) -> Self {
        let last = total_pages.max(1);
        let page = self.page.clamp(1, last);
        self.with_page(page)
    }

    /// True when `other` selects a different set of records than `self`,
    /// ignoring which page of them is shown.
    pub fn filters_differ(&self, other: &QueryState) -> bool {
        self.search_term != other.search_term
            || self.amount_bucket != other.amount_bucket
            || self.start_date != other.start_date
            || self.end_date != other.end_date
    }
}
