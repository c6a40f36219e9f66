use crate::application::{paging::Pager, repositories::NewsRepository};
use crate::domain::{
    entities::Article,
    value_objects::{ArticleUrl, SearchQuery, SourceSet},
    DomainResult,
};
use std::sync::Arc;
use tokio::sync::watch;

/// Use case for the paged headline feed
pub struct GetNews<R: NewsRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: NewsRepository + ?Sized> GetNews<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub fn execute(&self, sources: SourceSet) -> Pager<Article> {
        self.repository.get_news(sources)
    }
}

/// Use case for paged search results
pub struct SearchNews<R: NewsRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: NewsRepository + ?Sized> SearchNews<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub fn execute(&self, query: SearchQuery, sources: SourceSet) -> Pager<Article> {
        self.repository.search_news(query, sources)
    }
}

/// Use case for bookmarking an article
pub struct UpsertArticle<R: NewsRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: NewsRepository + ?Sized> UpsertArticle<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, article: Article) -> DomainResult<()> {
        self.repository.upsert_article(article).await
    }
}

/// Use case for removing a bookmark
pub struct DeleteArticle<R: NewsRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: NewsRepository + ?Sized> DeleteArticle<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, article: &Article) -> DomainResult<()> {
        self.repository.delete_article(article).await
    }
}

/// Use case for following the list of bookmarks
pub struct SelectArticles<R: NewsRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: NewsRepository + ?Sized> SelectArticles<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub fn execute(&self) -> watch::Receiver<Vec<Article>> {
        self.repository.select_articles()
    }
}

/// Use case for looking up one bookmark
pub struct SelectArticle<R: NewsRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: NewsRepository + ?Sized> SelectArticle<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, url: &ArticleUrl) -> DomainResult<Option<Article>> {
        self.repository.select_article(url).await
    }
}

/// All news use cases, sharing one repository
pub struct NewsUseCases<R: NewsRepository + ?Sized> {
    pub get_news: GetNews<R>,
    pub search_news: SearchNews<R>,
    pub upsert_article: UpsertArticle<R>,
    pub delete_article: DeleteArticle<R>,
    pub select_articles: SelectArticles<R>,
    pub select_article: SelectArticle<R>,
}

impl<R: NewsRepository + ?Sized> NewsUseCases<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            get_news: GetNews::new(repository.clone()),
            search_news: SearchNews::new(repository.clone()),
            upsert_article: UpsertArticle::new(repository.clone()),
            delete_article: DeleteArticle::new(repository.clone()),
            select_articles: SelectArticles::new(repository.clone()),
            select_article: SelectArticle::new(repository),
        }
    }
}
