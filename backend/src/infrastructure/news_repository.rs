/// Repository combining the remote news API with the local bookmark store
use crate::application::paging::{Pager, PagingConfig, PagingSource};
use crate::application::repositories::{ArticleStore, NewsRepository};
use crate::domain::{
    entities::Article,
    value_objects::{ArticleUrl, SearchQuery, SourceSet},
    DomainResult,
};
use crate::infrastructure::remote::{NewsApi, NewsPagingSource, SearchNewsPagingSource};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::{watch, Mutex};
use tracing::debug;

pub struct NewsRepositoryImpl<A: NewsApi + ?Sized, S: ArticleStore> {
    api: Arc<A>,
    store: Mutex<S>,
    saved: watch::Sender<Vec<Article>>,
    paging: PagingConfig,
}

impl<A: NewsApi + ?Sized + 'static, S: ArticleStore + Send> NewsRepositoryImpl<A, S> {
    pub fn new(api: Arc<A>, store: S) -> DomainResult<Self> {
        Self::with_paging(api, store, PagingConfig::default())
    }

    pub fn with_paging(api: Arc<A>, store: S, paging: PagingConfig) -> DomainResult<Self> {
        let saved = store.find_all()?;
        Ok(NewsRepositoryImpl {
            api,
            store: Mutex::new(store),
            saved: watch::channel(saved).0,
            paging,
        })
    }

    /// Re-read the store and push the new list to every subscriber
    fn publish(&self, store: &S) -> DomainResult<()> {
        let saved = store.find_all()?;
        debug!(count = saved.len(), "Saved articles changed");
        self.saved.send_replace(saved);
        Ok(())
    }
}

#[async_trait]
impl<A, S> NewsRepository for NewsRepositoryImpl<A, S>
where
    A: NewsApi + ?Sized + 'static,
    S: ArticleStore + Send,
{
    fn get_news(&self, sources: SourceSet) -> Pager<Article> {
        let api = self.api.clone();
        let policy = self.paging.end_of_pagination;
        Pager::new(
            self.paging,
            Box::new(move || -> Box<dyn PagingSource<Item = Article>> {
                Box::new(NewsPagingSource::new(api.clone(), sources.clone(), policy))
            }),
        )
    }

    fn search_news(&self, query: SearchQuery, sources: SourceSet) -> Pager<Article> {
        let api = self.api.clone();
        let policy = self.paging.end_of_pagination;
        Pager::new(
            self.paging,
            Box::new(move || -> Box<dyn PagingSource<Item = Article>> {
                Box::new(SearchNewsPagingSource::new(
                    api.clone(),
                    query.clone(),
                    sources.clone(),
                    policy,
                ))
            }),
        )
    }

    async fn upsert_article(&self, article: Article) -> DomainResult<()> {
        let mut store = self.store.lock().await;
        debug!(url = %article.url(), "Saving article");
        store.upsert(article)?;
        self.publish(&store)
    }

    async fn delete_article(&self, article: &Article) -> DomainResult<()> {
        let mut store = self.store.lock().await;
        if store.delete(article.url())? {
            debug!(url = %article.url(), "Deleted article");
            self.publish(&store)?;
        }
        Ok(())
    }

    fn select_articles(&self) -> watch::Receiver<Vec<Article>> {
        self.saved.subscribe()
    }

    async fn select_article(&self, url: &ArticleUrl) -> DomainResult<Option<Article>> {
        self.store.lock().await.find_by_url(url)
    }
}
