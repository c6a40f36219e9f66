/// Contract between the pager and the loaders that fetch individual pages
use async_trait::async_trait;
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Page numbers start at 1
pub type PageKey = u32;

/// The first page requested when no key is given
pub const FIRST_PAGE: PageKey = 1;

/// Parameters for a single page load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadParams {
    /// `None` requests the first page
    pub key: Option<PageKey>,
    /// Number of items the pager asks for
    pub load_size: usize,
}

impl LoadParams {
    pub fn page(&self) -> PageKey {
        self.key.unwrap_or(FIRST_PAGE)
    }
}

/// Outcome of one page load
#[derive(Debug)]
pub enum LoadResult<T> {
    Page {
        data: Vec<T>,
        prev_key: Option<PageKey>,
        next_key: Option<PageKey>,
    },
    Error(PageLoadError),
}

/// Coarse classification of a failed load, used for user facing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
    /// The server did not answer in time
    ServerUnavailable,
    /// No connection could be established
    InternetUnavailable,
    Unknown,
}

impl fmt::Display for LoadErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadErrorKind::ServerUnavailable => write!(f, "server unavailable"),
            LoadErrorKind::InternetUnavailable => write!(f, "internet unavailable"),
            LoadErrorKind::Unknown => write!(f, "unknown error"),
        }
    }
}

/// A page load failure. Keeps the error that triggered it.
#[derive(Error, Debug)]
#[error("Page load failed ({kind}): {source}")]
pub struct PageLoadError {
    kind: LoadErrorKind,
    #[source]
    source: Box<dyn StdError + Send + Sync>,
}

impl PageLoadError {
    pub fn new(kind: LoadErrorKind, source: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        PageLoadError {
            kind,
            source: source.into(),
        }
    }

    pub fn kind(&self) -> LoadErrorKind {
        self.kind
    }

    /// The original error as a concrete type, e.g. the transport error
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.source.downcast_ref::<E>()
    }
}

/// A page that has been handed to the pager
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedPage<T> {
    pub data: Vec<T>,
    pub prev_key: Option<PageKey>,
    pub next_key: Option<PageKey>,
}

/// Snapshot of what the pager holds, given to a loader when choosing a refresh key
#[derive(Debug)]
pub struct PagingState<'a, T> {
    pub pages: &'a [LoadedPage<T>],
    /// Index of the item the user was last looking at
    pub anchor_position: Option<usize>,
}

impl<'a, T> PagingState<'a, T> {
    /// Page containing the item at `position`. Positions past the end map to the last page.
    pub fn closest_page_to_position(&self, position: usize) -> Option<&'a LoadedPage<T>> {
        let mut start = 0;
        for page in self.pages {
            let end = start + page.data.len();
            if position < end {
                return Some(page);
            }
            start = end;
        }
        self.pages.last()
    }
}

/// A loader producing successive pages of one feed.
///
/// Instances carry per-generation state, so the pager builds a new one each
/// time the list is refreshed.
#[async_trait]
pub trait PagingSource: Send {
    type Item: Send;

    /// Fetch one page. Failures are reported as `LoadResult::Error`, never as an empty page.
    async fn load(&mut self, params: LoadParams) -> LoadResult<Self::Item>;

    /// Page to reload from after an invalidation, or `None` to start over
    fn refresh_key(&self, state: &PagingState<'_, Self::Item>) -> Option<PageKey>;
}
