use crate::domain::{entities::Article, value_objects::ArticleUrl, DomainResult};

/// Repository trait for bookmarked articles.
///
/// This trait defines the contract for persisting and retrieving the articles a
/// user has saved. Implementations can be backed by different storage
/// mechanisms (in-memory, database, etc.).
pub trait ArticleStore {
    /// Saves an article.
    ///
    /// If an article with the same URL already exists, it is replaced.
    fn upsert(&mut self, article: Article) -> DomainResult<()>;

    /// Deletes the article with the given URL.
    ///
    /// Returns `Ok(true)` if a row was removed and `Ok(false)` if the article
    /// was not stored.
    fn delete(&mut self, url: &ArticleUrl) -> DomainResult<bool>;

    /// Returns all stored articles in the order they were first saved.
    fn find_all(&self) -> DomainResult<Vec<Article>>;

    /// Finds an article by its URL.
    fn find_by_url(&self, url: &ArticleUrl) -> DomainResult<Option<Article>>;
}
