use super::state::StateHolder;
use crate::application::paging::{PagedItems, Pager};
use crate::application::repositories::NewsRepository;
use crate::application::use_cases::NewsUseCases;
use crate::domain::{entities::Article, value_objects::SourceSet};
use std::sync::Arc;
use tokio::sync::watch;

/// Separator between headlines in the scrolling ticker
pub const TITLE_SEPARATOR: &str = "\u{1F7E5}";
const TICKER_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeEvent {
    LoadMore,
    Refresh,
    Retry,
    ScrollTo(usize),
}

#[derive(Debug, Clone, Default)]
pub struct HomeState {
    pub articles: PagedItems<Article>,
    pub titles: String,
}

/// Ticker text: the first ten titles, once more than ten articles are loaded
pub fn ticker_titles(articles: &[Article]) -> String {
    if articles.len() > TICKER_SIZE {
        articles[..TICKER_SIZE]
            .iter()
            .map(|article| article.title.as_str())
            .collect::<Vec<_>>()
            .join(TITLE_SEPARATOR)
    } else {
        String::new()
    }
}

/// Headline feed. Nothing is fetched until the first `LoadMore`.
pub struct HomeViewModel {
    pager: Pager<Article>,
    state: StateHolder<HomeState>,
}

impl HomeViewModel {
    pub fn new<R: NewsRepository + ?Sized>(use_cases: Arc<NewsUseCases<R>>) -> Self {
        HomeViewModel {
            pager: use_cases.get_news.execute(SourceSet::headlines()),
            state: StateHolder::new(HomeState::default()),
        }
    }

    pub fn state(&self) -> HomeState {
        self.state.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<HomeState> {
        self.state.subscribe()
    }

    pub async fn on_event(&mut self, event: HomeEvent) {
        match event {
            HomeEvent::LoadMore => {
                self.pager.load_next().await;
            }
            HomeEvent::Refresh => {
                self.pager.refresh().await;
            }
            HomeEvent::Retry => {
                self.pager.retry().await;
            }
            HomeEvent::ScrollTo(position) => {
                self.pager.set_anchor(position);
                return;
            }
        }
        self.publish();
    }

    fn publish(&self) {
        let articles = self.pager.snapshot();
        let titles = ticker_titles(&articles.items);
        self.state.update(|s| {
            s.articles = articles;
            s.titles = titles;
        });
    }
}
