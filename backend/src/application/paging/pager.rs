/// Consumer side of pagination: drives a `PagingSource` one page at a time
use super::policy::PagingConfig;
use super::source::{
    LoadParams, LoadResult, LoadedPage, PageKey, PageLoadError, PagingSource, PagingState,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Builds a fresh loader for each generation of the list
pub type PagingSourceFactory<T> =
    Box<dyn Fn() -> Box<dyn PagingSource<Item = T>> + Send + Sync>;

/// Loading status of a paged list
#[derive(Debug, Clone)]
pub enum LoadState {
    NotLoading { end_of_pagination_reached: bool },
    Loading,
    Error(Arc<PageLoadError>),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&Arc<PageLoadError>> {
        match self {
            LoadState::Error(e) => Some(e),
            _ => None,
        }
    }

    pub fn end_of_pagination_reached(&self) -> bool {
        matches!(
            self,
            LoadState::NotLoading {
                end_of_pagination_reached: true
            }
        )
    }
}

/// Items loaded so far plus the current load state
#[derive(Debug, Clone)]
pub struct PagedItems<T> {
    pub items: Vec<T>,
    pub load_state: LoadState,
}

impl<T> PagedItems<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// A failure before anything was shown replaces the whole list
    pub fn is_error_screen(&self) -> bool {
        self.items.is_empty() && self.load_state.error().is_some()
    }
}

impl<T> Default for PagedItems<T> {
    fn default() -> Self {
        PagedItems {
            items: Vec::new(),
            load_state: LoadState::NotLoading {
                end_of_pagination_reached: false,
            },
        }
    }
}

/// A lazily loaded, restartable, forward-only list of pages.
///
/// Nothing is fetched until `load_next` is called. Loads are sequential since
/// every operation takes `&mut self`. A failed load halts pagination until
/// `retry` or `refresh`.
pub struct Pager<T> {
    config: PagingConfig,
    factory: PagingSourceFactory<T>,
    source: Option<Box<dyn PagingSource<Item = T>>>,
    generation: u64,
    pages: Vec<LoadedPage<T>>,
    initial_key: Option<PageKey>,
    next_key: Option<PageKey>,
    failed_key: Option<Option<PageKey>>,
    anchor_position: Option<usize>,
    load_state: LoadState,
}

impl<T: Send> Pager<T> {
    pub fn new(config: PagingConfig, factory: PagingSourceFactory<T>) -> Self {
        Pager {
            config,
            factory,
            source: None,
            generation: 0,
            pages: Vec::new(),
            initial_key: None,
            next_key: None,
            failed_key: None,
            anchor_position: None,
            load_state: LoadState::NotLoading {
                end_of_pagination_reached: false,
            },
        }
    }

    pub fn config(&self) -> &PagingConfig {
        &self.config
    }

    /// Number of loaders built so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn pages(&self) -> &[LoadedPage<T>] {
        &self.pages
    }

    pub fn items(&self) -> impl Iterator<Item = &T> {
        self.pages.iter().flat_map(|page| page.data.iter())
    }

    pub fn item_count(&self) -> usize {
        self.pages.iter().map(|page| page.data.len()).sum()
    }

    /// Record the item the user is looking at; used to pick the refresh page
    pub fn set_anchor(&mut self, position: usize) {
        self.anchor_position = Some(position);
    }

    /// Whether `load_next` would issue a request
    pub fn has_more(&self) -> bool {
        match self.load_state {
            LoadState::Error(_) => false,
            _ => self.pages.is_empty() || self.next_key.is_some(),
        }
    }

    /// Load the next page if one is expected. Returns true when a page was appended.
    pub async fn load_next(&mut self) -> bool {
        if !self.has_more() {
            return false;
        }

        let key = if self.pages.is_empty() {
            self.initial_key
        } else {
            self.next_key
        };
        self.load_page(key).await
    }

    /// Load up to `max_pages` further pages, stopping early at the end or on failure
    pub async fn load_pages(&mut self, max_pages: usize) -> usize {
        let mut loaded = 0;
        while loaded < max_pages && self.load_next().await {
            loaded += 1;
        }
        loaded
    }

    /// Re-issue the load that last failed
    pub async fn retry(&mut self) -> bool {
        match self.failed_key.take() {
            Some(key) => self.load_page(key).await,
            None => false,
        }
    }

    /// Drop loaded pages and start a new generation near the anchor position
    pub async fn refresh(&mut self) -> bool {
        let refresh_key = match (&self.source, self.pages.is_empty()) {
            (Some(source), false) => {
                let state = PagingState {
                    pages: &self.pages,
                    anchor_position: self.anchor_position,
                };
                source.refresh_key(&state)
            }
            _ => None,
        };

        debug!(
            generation = self.generation,
            ?refresh_key,
            "Invalidating paged list"
        );

        self.source = None;
        self.pages.clear();
        self.next_key = None;
        self.failed_key = None;
        self.initial_key = refresh_key;
        self.load_state = LoadState::NotLoading {
            end_of_pagination_reached: false,
        };

        self.load_page(refresh_key).await
    }

    async fn load_page(&mut self, key: Option<PageKey>) -> bool {
        self.load_state = LoadState::Loading;

        let generation = &mut self.generation;
        let factory = &self.factory;
        let source = self.source.get_or_insert_with(|| {
            *generation += 1;
            factory()
        });

        let params = LoadParams {
            key,
            load_size: self.config.page_size,
        };

        match source.load(params).await {
            LoadResult::Page {
                data,
                prev_key,
                next_key,
            } => {
                debug!(
                    page = params.page(),
                    items = data.len(),
                    ?next_key,
                    "Page appended"
                );
                self.next_key = next_key;
                self.pages.push(LoadedPage {
                    data,
                    prev_key,
                    next_key,
                });
                self.load_state = LoadState::NotLoading {
                    end_of_pagination_reached: next_key.is_none(),
                };
                true
            }
            LoadResult::Error(error) => {
                warn!(page = params.page(), "Pagination halted: {}", error);
                self.failed_key = Some(key);
                self.load_state = LoadState::Error(Arc::new(error));
                false
            }
        }
    }
}

impl<T: Clone + Send> Pager<T> {
    /// Copy of the loaded items and current state for presentation
    pub fn snapshot(&self) -> PagedItems<T> {
        PagedItems {
            items: self.items().cloned().collect(),
            load_state: self.load_state.clone(),
        }
    }
}
