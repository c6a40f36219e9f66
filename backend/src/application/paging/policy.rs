use super::source::{PageKey, FIRST_PAGE};
use std::collections::HashSet;
use std::hash::Hash;
use std::str::FromStr;

/// Page size used by the news feeds
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// How a loader decides that the last page has been reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EndOfPaginationPolicy {
    /// Stop once the running fetched count equals the server reported total.
    /// A total that changes between calls can make this overshoot forever.
    #[default]
    TotalResults,
    /// Also stop on an empty or short page, or once the running count reaches the total
    ShortPage,
}

impl EndOfPaginationPolicy {
    /// Key of the page after `page`, or `None` when there is nothing more to load
    pub fn next_key(
        &self,
        page: PageKey,
        fetched_in_page: usize,
        fetched_total: usize,
        total_results: usize,
        load_size: usize,
    ) -> Option<PageKey> {
        let exhausted = match self {
            EndOfPaginationPolicy::TotalResults => fetched_total == total_results,
            EndOfPaginationPolicy::ShortPage => {
                fetched_in_page == 0
                    || fetched_in_page < load_size
                    || fetched_total >= total_results
            }
        };

        if exhausted {
            None
        } else {
            Some(page + 1)
        }
    }
}

impl FromStr for EndOfPaginationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "total-results" => Ok(EndOfPaginationPolicy::TotalResults),
            "short-page" => Ok(EndOfPaginationPolicy::ShortPage),
            other => Err(format!(
                "unknown end-of-pagination policy '{}', expected 'total-results' or 'short-page'",
                other
            )),
        }
    }
}

/// Pager settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagingConfig {
    pub page_size: usize,
    pub end_of_pagination: EndOfPaginationPolicy,
}

impl Default for PagingConfig {
    fn default() -> Self {
        PagingConfig {
            page_size: DEFAULT_PAGE_SIZE,
            end_of_pagination: EndOfPaginationPolicy::default(),
        }
    }
}

/// Running count of raw items a single loader instance has fetched.
///
/// A loader whose first request is for page `k > 1` (a refresh from the middle
/// of a list) assumes the `k - 1` earlier pages were full.
#[derive(Debug, Clone)]
pub struct PageCounter {
    policy: EndOfPaginationPolicy,
    fetched: Option<usize>,
}

impl PageCounter {
    pub fn new(policy: EndOfPaginationPolicy) -> Self {
        PageCounter {
            policy,
            fetched: None,
        }
    }

    pub fn fetched(&self) -> usize {
        self.fetched.unwrap_or(0)
    }

    /// Account for a fetched page and return the next page key
    pub fn record(
        &mut self,
        page: PageKey,
        fetched_in_page: usize,
        total_results: usize,
        load_size: usize,
    ) -> Option<PageKey> {
        let before = *self
            .fetched
            .get_or_insert_with(|| (page.saturating_sub(FIRST_PAGE) as usize) * load_size);
        let fetched_total = before + fetched_in_page;
        self.fetched = Some(fetched_total);

        self.policy
            .next_key(page, fetched_in_page, fetched_total, total_results, load_size)
    }
}

/// Keep the first item for each key, preserving order
pub fn distinct_by<T, K, F>(items: Vec<T>, mut key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(key(item)))
        .collect()
}
