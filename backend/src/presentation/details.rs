use super::state::StateHolder;
use crate::application::repositories::NewsRepository;
use crate::application::use_cases::NewsUseCases;
use crate::domain::{entities::Article, DomainResult};
use std::sync::Arc;
use tokio::sync::watch;

pub const ARTICLE_SAVED: &str = "Article Saved";
pub const ARTICLE_DELETED: &str = "Article Deleted";

#[derive(Debug, Clone, PartialEq)]
pub enum DetailsEvent {
    /// Save the article, or delete it if it is already saved
    UpsertDeleteArticle(Article),
    RemoveSideEffect,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailsState {
    /// One-off notice for the user, cleared with `RemoveSideEffect`
    pub side_effect: Option<String>,
}

pub struct DetailsViewModel<R: NewsRepository + ?Sized> {
    use_cases: Arc<NewsUseCases<R>>,
    state: StateHolder<DetailsState>,
}

impl<R: NewsRepository + ?Sized> DetailsViewModel<R> {
    pub fn new(use_cases: Arc<NewsUseCases<R>>) -> Self {
        DetailsViewModel {
            use_cases,
            state: StateHolder::new(DetailsState::default()),
        }
    }

    pub fn state(&self) -> DetailsState {
        self.state.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<DetailsState> {
        self.state.subscribe()
    }

    pub async fn on_event(&self, event: DetailsEvent) -> DomainResult<()> {
        match event {
            DetailsEvent::UpsertDeleteArticle(article) => {
                let saved = self.use_cases.select_article.execute(article.url()).await?;
                let notice = if saved.is_none() {
                    self.use_cases.upsert_article.execute(article).await?;
                    ARTICLE_SAVED
                } else {
                    self.use_cases.delete_article.execute(&article).await?;
                    ARTICLE_DELETED
                };
                self.state
                    .update(|s| s.side_effect = Some(notice.to_string()));
            }
            DetailsEvent::RemoveSideEffect => {
                self.state.update(|s| s.side_effect = None);
            }
        }
        Ok(())
    }
}
