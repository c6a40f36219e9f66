/// Page loaders for the headline feed and for search results
use super::dto::{ArticleDto, NewsResponse};
use super::news_api::{NewsApi, RemoteResult};
use crate::application::paging::{
    distinct_by, EndOfPaginationPolicy, LoadParams, LoadResult, PageCounter, PageKey,
    PagingSource, PagingState,
};
use crate::domain::{
    entities::Article,
    value_objects::{SearchQuery, SourceSet},
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

/// Turn one API response into a page: count raw items, keep the first article per title
fn to_page(
    counter: &mut PageCounter,
    params: LoadParams,
    response: RemoteResult<NewsResponse>,
) -> LoadResult<Article> {
    let page = params.page();
    match response {
        Ok(response) => {
            let fetched = response.articles.len();
            let next_key = counter.record(page, fetched, response.total_results, params.load_size);

            let articles: Vec<Article> = distinct_by(response.articles, |dto| dto.title.clone())
                .into_iter()
                .map(ArticleDto::into_article)
                .collect();

            debug!(
                page,
                fetched,
                kept = articles.len(),
                fetched_total = counter.fetched(),
                total_results = response.total_results,
                "Loaded news page"
            );

            LoadResult::Page {
                data: articles,
                prev_key: None,
                next_key,
            }
        }
        Err(e) => {
            warn!(page, "Failed to load news page: {}", e);
            LoadResult::Error(e.into())
        }
    }
}

/// Headlines from a fixed set of sources
pub struct NewsPagingSource<A: NewsApi + ?Sized> {
    api: Arc<A>,
    sources: SourceSet,
    counter: PageCounter,
}

impl<A: NewsApi + ?Sized> NewsPagingSource<A> {
    pub fn new(api: Arc<A>, sources: SourceSet, policy: EndOfPaginationPolicy) -> Self {
        Self {
            api,
            sources,
            counter: PageCounter::new(policy),
        }
    }
}

#[async_trait]
impl<A: NewsApi + ?Sized> PagingSource for NewsPagingSource<A> {
    type Item = Article;

    async fn load(&mut self, params: LoadParams) -> LoadResult<Article> {
        let response = self
            .api
            .get_news(&self.sources, params.page(), params.load_size)
            .await;
        to_page(&mut self.counter, params, response)
    }

    fn refresh_key(&self, state: &PagingState<'_, Article>) -> Option<PageKey> {
        let anchor = state.anchor_position?;
        let page = state.closest_page_to_position(anchor)?;
        page.prev_key
            .map(|key| key + 1)
            .or_else(|| page.next_key.map(|key| key - 1))
    }
}

/// Search results for a query within a fixed set of sources
pub struct SearchNewsPagingSource<A: NewsApi + ?Sized> {
    api: Arc<A>,
    query: SearchQuery,
    sources: SourceSet,
    counter: PageCounter,
}

impl<A: NewsApi + ?Sized> SearchNewsPagingSource<A> {
    pub fn new(
        api: Arc<A>,
        query: SearchQuery,
        sources: SourceSet,
        policy: EndOfPaginationPolicy,
    ) -> Self {
        Self {
            api,
            query,
            sources,
            counter: PageCounter::new(policy),
        }
    }
}

#[async_trait]
impl<A: NewsApi + ?Sized> PagingSource for SearchNewsPagingSource<A> {
    type Item = Article;

    async fn load(&mut self, params: LoadParams) -> LoadResult<Article> {
        let response = self
            .api
            .search_news(&self.query, &self.sources, params.page(), params.load_size)
            .await;
        to_page(&mut self.counter, params, response)
    }

    fn refresh_key(&self, state: &PagingState<'_, Article>) -> Option<PageKey> {
        let anchor = state.anchor_position?;
        let page = state.closest_page_to_position(anchor)?;
        page.next_key
            .map(|key| key - 1)
            .or_else(|| page.prev_key.map(|key| key + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::paging::{LoadErrorKind, LoadedPage};
    use crate::infrastructure::remote::dto::{ArticleDto, SourceDto};
    use crate::infrastructure::remote::news_api::RemoteError;
    use std::collections::HashSet;
    use std::sync::Mutex;

    /// Serves canned pages, keyed by page number
    struct ScriptedApi {
        total_results: usize,
        pages: Vec<Vec<String>>,
        fail_with_status: Option<u16>,
        calls: Mutex<Vec<(String, PageKey)>>,
    }

    impl ScriptedApi {
        fn new(total_results: usize, pages: Vec<Vec<String>>) -> Self {
            Self {
                total_results,
                pages,
                fail_with_status: None,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn respond(&self, label: String, page: PageKey) -> RemoteResult<NewsResponse> {
            self.calls.lock().unwrap().push((label, page));
            if let Some(status) = self.fail_with_status {
                return Err(RemoteError::Status {
                    status,
                    message: "unavailable".to_string(),
                });
            }
            let titles = self
                .pages
                .get(page as usize - 1)
                .cloned()
                .unwrap_or_default();
            let articles = titles
                .iter()
                .enumerate()
                .map(|(i, title)| ArticleDto {
                    source: SourceDto {
                        id: Some("bbc-news".to_string()),
                        name: Some("BBC News".to_string()),
                    },
                    title: Some(title.clone()),
                    url: format!("https://www.bbc.co.uk/news/{}-{}", page, i),
                    ..ArticleDto::default()
                })
                .collect();
            Ok(NewsResponse {
                articles,
                status: "ok".to_string(),
                total_results: self.total_results,
            })
        }
    }

    #[async_trait]
    impl NewsApi for ScriptedApi {
        async fn get_news(
            &self,
            sources: &SourceSet,
            page: PageKey,
            _page_size: usize,
        ) -> RemoteResult<NewsResponse> {
            self.respond(sources.joined(), page)
        }

        async fn search_news(
            &self,
            query: &SearchQuery,
            _sources: &SourceSet,
            page: PageKey,
            _page_size: usize,
        ) -> RemoteResult<NewsResponse> {
            self.respond(query.to_string(), page)
        }
    }

    fn titles(prefix: &str, n: usize) -> Vec<String> {
        (0..n).map(|i| format!("{} {}", prefix, i)).collect()
    }

    fn named(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn params(key: Option<PageKey>) -> LoadParams {
        LoadParams { key, load_size: 10 }
    }

    fn unwrap_page(result: LoadResult<Article>) -> (Vec<Article>, Option<PageKey>, Option<PageKey>) {
        match result {
            LoadResult::Page {
                data,
                prev_key,
                next_key,
            } => (data, prev_key, next_key),
            LoadResult::Error(e) => panic!("expected a page, got {}", e),
        }
    }

    #[tokio::test]
    async fn test_three_pages_of_twenty_five() {
        let api = Arc::new(ScriptedApi::new(
            25,
            vec![titles("a", 10), titles("b", 10), titles("c", 5)],
        ));
        let mut source =
            NewsPagingSource::new(api.clone(), SourceSet::headlines(), EndOfPaginationPolicy::TotalResults);

        let (data, prev, next) = unwrap_page(source.load(params(None)).await);
        assert_eq!((data.len(), prev, next), (10, None, Some(2)));

        let (data, prev, next) = unwrap_page(source.load(params(Some(2))).await);
        assert_eq!((data.len(), prev, next), (10, None, Some(3)));

        let (data, prev, next) = unwrap_page(source.load(params(Some(3))).await);
        assert_eq!((data.len(), prev, next), (5, None, None));

        let calls = api.calls.lock().unwrap().clone();
        assert_eq!(
            calls,
            vec![
                ("bbc-news,abc-news,al-jazeera-english".to_string(), 1),
                ("bbc-news,abc-news,al-jazeera-english".to_string(), 2),
                ("bbc-news,abc-news,al-jazeera-english".to_string(), 3),
            ]
        );
    }

    #[tokio::test]
    async fn test_duplicates_removed_within_page_only() {
        let api = Arc::new(ScriptedApi::new(
            100,
            vec![
                named(&["Same", "Other", "Same", "Third", "Other"]),
                named(&["Same", "Fresh"]),
            ],
        ));
        let mut source =
            NewsPagingSource::new(api, SourceSet::headlines(), EndOfPaginationPolicy::TotalResults);

        let (first, _, next) = unwrap_page(source.load(params(None)).await);
        let first_titles: Vec<_> = first.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(first_titles, vec!["Same", "Other", "Third"]);
        // Raw count (5) is what advances the counter, not the deduplicated count
        assert_eq!(next, Some(2));

        let (second, _, _) = unwrap_page(source.load(params(Some(2))).await);
        let second_titles: Vec<_> = second.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(second_titles, vec!["Same", "Fresh"]);

        let unique: HashSet<_> = first_titles.iter().collect();
        assert_eq!(unique.len(), first_titles.len());
    }

    /// Serves one page of (title, link) pairs as given
    struct LinksApi {
        articles: Vec<(String, String)>,
    }

    impl LinksApi {
        fn page(&self) -> RemoteResult<NewsResponse> {
            Ok(NewsResponse {
                articles: self
                    .articles
                    .iter()
                    .map(|(title, url)| ArticleDto {
                        title: Some(title.clone()),
                        url: url.clone(),
                        ..ArticleDto::default()
                    })
                    .collect(),
                status: "ok".to_string(),
                total_results: self.articles.len(),
            })
        }
    }

    #[async_trait]
    impl NewsApi for LinksApi {
        async fn get_news(
            &self,
            _sources: &SourceSet,
            _page: PageKey,
            _page_size: usize,
        ) -> RemoteResult<NewsResponse> {
            self.page()
        }

        async fn search_news(
            &self,
            _query: &SearchQuery,
            _sources: &SourceSet,
            _page: PageKey,
            _page_size: usize,
        ) -> RemoteResult<NewsResponse> {
            self.page()
        }
    }

    #[tokio::test]
    async fn test_relative_and_empty_links_are_kept() {
        let api = Arc::new(LinksApi {
            articles: vec![
                ("Same".to_string(), "news/relative-1".to_string()),
                ("Same".to_string(), "https://example.com/2".to_string()),
                ("Other".to_string(), String::new()),
            ],
        });
        let mut source =
            NewsPagingSource::new(api, SourceSet::headlines(), EndOfPaginationPolicy::TotalResults);

        let (data, _, next) = unwrap_page(source.load(params(None)).await);
        let items: Vec<_> = data
            .iter()
            .map(|a| (a.title.as_str(), a.url().as_str()))
            .collect();
        assert_eq!(items, vec![("Same", "news/relative-1"), ("Other", "")]);
        assert_eq!(next, None);
    }

    #[tokio::test]
    async fn test_dedup_does_not_change_termination() {
        // 4 raw items with a duplicate; the raw count reaches the total
        let api = Arc::new(ScriptedApi::new(4, vec![named(&["x", "y", "x", "z"])]));
        let mut source =
            NewsPagingSource::new(api, SourceSet::headlines(), EndOfPaginationPolicy::TotalResults);

        let (data, _, next) = unwrap_page(source.load(params(None)).await);
        assert_eq!(data.len(), 3);
        assert_eq!(next, None);
    }

    #[tokio::test]
    async fn test_failure_carries_original_error() {
        let mut api = ScriptedApi::new(25, vec![titles("a", 10)]);
        api.fail_with_status = Some(503);
        let mut source = NewsPagingSource::new(
            Arc::new(api),
            SourceSet::headlines(),
            EndOfPaginationPolicy::TotalResults,
        );

        match source.load(params(None)).await {
            LoadResult::Error(e) => {
                assert_eq!(e.kind(), LoadErrorKind::Unknown);
                assert!(matches!(
                    e.downcast_ref::<RemoteError>(),
                    Some(RemoteError::Status { status: 503, .. })
                ));
            }
            LoadResult::Page { .. } => panic!("a failed fetch must not produce a page"),
        }
    }

    #[tokio::test]
    async fn test_new_instance_resets_counter() {
        let api = Arc::new(ScriptedApi::new(20, vec![titles("a", 10), titles("b", 10)]));

        let mut first =
            NewsPagingSource::new(api.clone(), SourceSet::headlines(), EndOfPaginationPolicy::TotalResults);
        unwrap_page(first.load(params(None)).await);
        let (_, _, next) = unwrap_page(first.load(params(Some(2))).await);
        assert_eq!(next, None);

        let mut second =
            NewsPagingSource::new(api, SourceSet::headlines(), EndOfPaginationPolicy::TotalResults);
        let (_, _, next) = unwrap_page(second.load(params(None)).await);
        assert_eq!(next, Some(2));
    }

    #[tokio::test]
    async fn test_resumed_instance_seeds_counter() {
        let api = Arc::new(ScriptedApi::new(25, vec![titles("a", 10), titles("b", 10), titles("c", 5)]));
        let mut source =
            NewsPagingSource::new(api, SourceSet::headlines(), EndOfPaginationPolicy::TotalResults);

        let (_, _, next) = unwrap_page(source.load(params(Some(3))).await);
        assert_eq!(next, None);
    }

    #[tokio::test]
    async fn test_short_page_policy_stops_on_empty_page() {
        // Server total drifted upwards; equality never holds
        let api = Arc::new(ScriptedApi::new(40, vec![titles("a", 10), Vec::new()]));
        let mut source =
            NewsPagingSource::new(api, SourceSet::headlines(), EndOfPaginationPolicy::ShortPage);

        let (_, _, next) = unwrap_page(source.load(params(None)).await);
        assert_eq!(next, Some(2));
        let (data, _, next) = unwrap_page(source.load(params(Some(2))).await);
        assert!(data.is_empty());
        assert_eq!(next, None);
    }

    #[tokio::test]
    async fn test_search_source_passes_query() {
        let api = Arc::new(ScriptedApi::new(3, vec![named(&["one", "two", "three"])]));
        let mut source = SearchNewsPagingSource::new(
            api.clone(),
            SearchQuery::new("floods").unwrap(),
            SourceSet::headlines(),
            EndOfPaginationPolicy::TotalResults,
        );

        let (data, prev, next) = unwrap_page(source.load(params(None)).await);
        assert_eq!((data.len(), prev, next), (3, None, None));
        assert_eq!(api.calls.lock().unwrap()[0], ("floods".to_string(), 1));
    }

    #[test]
    fn test_refresh_key_both_variants() {
        let api = Arc::new(ScriptedApi::new(0, vec![]));
        let listing =
            NewsPagingSource::new(api.clone(), SourceSet::headlines(), EndOfPaginationPolicy::TotalResults);
        let search = SearchNewsPagingSource::new(
            api,
            SearchQuery::new("q").unwrap(),
            SourceSet::headlines(),
            EndOfPaginationPolicy::TotalResults,
        );

        let article = |i: usize| Article::new(format!("https://example.com/{}", i), "t");
        let pages = vec![
            LoadedPage {
                data: (0..10).map(article).collect(),
                prev_key: None,
                next_key: Some(2),
            },
            LoadedPage {
                data: (10..20).map(article).collect(),
                prev_key: None,
                next_key: Some(3),
            },
        ];

        let anchored = PagingState {
            pages: &pages,
            anchor_position: Some(12),
        };
        assert_eq!(listing.refresh_key(&anchored), Some(2));
        assert_eq!(search.refresh_key(&anchored), Some(2));

        let unanchored = PagingState {
            pages: &pages,
            anchor_position: None,
        };
        assert_eq!(listing.refresh_key(&unanchored), None);
        assert_eq!(search.refresh_key(&unanchored), None);
    }
}
