use super::state::StateHolder;
use crate::application::paging::{PagedItems, Pager};
use crate::application::repositories::NewsRepository;
use crate::application::use_cases::NewsUseCases;
use crate::domain::{
    entities::Article,
    value_objects::{SearchQuery, SourceSet},
};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    UpdateSearchQuery(String),
    SearchNews,
    LoadMore,
}

#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub search_query: String,
    /// `None` until the first search is run
    pub articles: Option<PagedItems<Article>>,
}

pub struct SearchViewModel<R: NewsRepository + ?Sized> {
    use_cases: Arc<NewsUseCases<R>>,
    pager: Option<Pager<Article>>,
    state: StateHolder<SearchState>,
}

impl<R: NewsRepository + ?Sized> SearchViewModel<R> {
    pub fn new(use_cases: Arc<NewsUseCases<R>>) -> Self {
        SearchViewModel {
            use_cases,
            pager: None,
            state: StateHolder::new(SearchState::default()),
        }
    }

    pub fn state(&self) -> SearchState {
        self.state.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }

    /// `SearchNews` replaces any previous results and loads their first page.
    /// A blank query is ignored.
    pub async fn on_event(&mut self, event: SearchEvent) {
        match event {
            SearchEvent::UpdateSearchQuery(query) => {
                self.state.update(|s| s.search_query = query);
            }
            SearchEvent::SearchNews => {
                let query = match SearchQuery::new(self.state.snapshot().search_query) {
                    Ok(query) => query,
                    Err(e) => {
                        debug!("Search skipped: {}", e);
                        return;
                    }
                };
                let mut pager = self
                    .use_cases
                    .search_news
                    .execute(query, SourceSet::headlines());
                pager.load_next().await;
                self.pager = Some(pager);
                self.publish();
            }
            SearchEvent::LoadMore => {
                if let Some(pager) = self.pager.as_mut() {
                    pager.load_next().await;
                    self.publish();
                }
            }
        }
    }

    fn publish(&self) {
        let articles = self.pager.as_ref().map(Pager::snapshot);
        self.state.update(|s| s.articles = articles);
    }
}
