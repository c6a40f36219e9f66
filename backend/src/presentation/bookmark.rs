use super::messages::NO_SAVED_NEWS;
use super::state::StateHolder;
use crate::application::repositories::NewsRepository;
use crate::application::use_cases::NewsUseCases;
use crate::domain::entities::Article;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookmarkState {
    /// Most recently saved first
    pub articles: Vec<Article>,
}

impl BookmarkState {
    pub fn empty_message(&self) -> Option<&'static str> {
        self.articles.is_empty().then_some(NO_SAVED_NEWS)
    }
}

fn newest_first(saved: &[Article]) -> Vec<Article> {
    saved.iter().rev().cloned().collect()
}

/// Saved articles, kept in sync with the store while the view model lives
pub struct BookmarkViewModel {
    state: StateHolder<BookmarkState>,
    watcher: JoinHandle<()>,
}

impl BookmarkViewModel {
    pub fn new<R: NewsRepository + ?Sized>(use_cases: Arc<NewsUseCases<R>>) -> Self {
        let mut saved = use_cases.select_articles.execute();
        let state = StateHolder::new(BookmarkState {
            articles: newest_first(&saved.borrow_and_update()),
        });
        let holder = state.clone();

        let watcher = tokio::spawn(async move {
            while saved.changed().await.is_ok() {
                let articles = newest_first(&saved.borrow_and_update());
                holder.update(|s| s.articles = articles);
            }
        });

        BookmarkViewModel { state, watcher }
    }

    pub fn state(&self) -> BookmarkState {
        self.state.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<BookmarkState> {
        self.state.subscribe()
    }
}

impl Drop for BookmarkViewModel {
    fn drop(&mut self) {
        self.watcher.abort();
    }
}
