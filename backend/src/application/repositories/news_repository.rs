use crate::application::paging::Pager;
use crate::domain::{
    entities::Article,
    value_objects::{ArticleUrl, SearchQuery, SourceSet},
    DomainResult,
};
use async_trait::async_trait;
use tokio::sync::watch;

/// Single entry point for remote news pages and locally saved articles
#[async_trait]
pub trait NewsRepository: Send + Sync {
    /// Paged headlines for the given sources
    fn get_news(&self, sources: SourceSet) -> Pager<Article>;

    /// Paged search results for `query` within the given sources
    fn search_news(&self, query: SearchQuery, sources: SourceSet) -> Pager<Article>;

    /// Save an article, replacing any stored copy with the same URL
    async fn upsert_article(&self, article: Article) -> DomainResult<()>;

    /// Remove a saved article. Removing an unsaved article is a no-op.
    async fn delete_article(&self, article: &Article) -> DomainResult<()>;

    /// Live list of saved articles, re-sent after every change
    fn select_articles(&self) -> watch::Receiver<Vec<Article>>;

    /// A saved article, if any
    async fn select_article(&self, url: &ArticleUrl) -> DomainResult<Option<Article>>;
}
