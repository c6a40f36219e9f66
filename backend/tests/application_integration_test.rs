use async_trait::async_trait;
use headlines::application::paging::{LoadErrorKind, PageKey, PagingConfig};
use headlines::application::repositories::NewsRepository;
use headlines::application::use_cases::{AppEntryUseCases, NewsUseCases};
use headlines::domain::{Article, SearchQuery, SourceSet};
use headlines::infrastructure::persistence::{SqliteArticleStore, SqliteLocalUserManager};
use headlines::infrastructure::remote::{
    ArticleDto, NewsApi, NewsResponse, RemoteError, RemoteResult, SourceDto,
};
use headlines::infrastructure::NewsRepositoryImpl;
use headlines::presentation::{
    BookmarkViewModel, DetailsEvent, DetailsViewModel, HomeEvent, HomeViewModel, MainViewModel,
    OnBoardingEvent, OnBoardingViewModel, Route, SearchEvent, SearchViewModel,
};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::timeout;

/// News API double serving `total_results` items in pages of ten
struct ScriptedApi {
    total_results: usize,
    duplicate_first_title: bool,
    failing_pages: Mutex<HashSet<PageKey>>,
    requests: Mutex<Vec<(Option<String>, PageKey)>>,
}

impl ScriptedApi {
    fn new(total_results: usize) -> Self {
        Self {
            total_results,
            duplicate_first_title: false,
            failing_pages: Mutex::new(HashSet::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// The next request for `page` fails with a 503
    fn fail_once(self, page: PageKey) -> Self {
        self.failing_pages.lock().unwrap().insert(page);
        self
    }

    fn requested_pages(&self) -> Vec<PageKey> {
        self.requests.lock().unwrap().iter().map(|(_, p)| *p).collect()
    }

    fn respond(&self, query: Option<&str>, page: PageKey) -> RemoteResult<NewsResponse> {
        self.requests
            .lock()
            .unwrap()
            .push((query.map(str::to_string), page));
        if self.failing_pages.lock().unwrap().remove(&page) {
            return Err(RemoteError::Status {
                status: 503,
                message: "maintenance".to_string(),
            });
        }

        let prefix = query.unwrap_or("Headline");
        let start = (page as usize - 1) * 10;
        let end = (start + 10).min(self.total_results);
        let articles = (start..end)
            .map(|i| {
                let title = if self.duplicate_first_title && i == start + 1 {
                    format!("{} {}", prefix, start)
                } else {
                    format!("{} {}", prefix, i)
                };
                ArticleDto {
                    source: SourceDto {
                        id: Some("abc-news".to_string()),
                        name: Some("ABC News".to_string()),
                    },
                    title: Some(title),
                    url: format!("https://abcnews.go.com/story/{}", i),
                    ..ArticleDto::default()
                }
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
        _sources: &SourceSet,
        page: PageKey,
        _page_size: usize,
    ) -> RemoteResult<NewsResponse> {
        self.respond(None, page)
    }

    async fn search_news(
        &self,
        query: &SearchQuery,
        _sources: &SourceSet,
        page: PageKey,
        _page_size: usize,
    ) -> RemoteResult<NewsResponse> {
        self.respond(Some(query.as_str()), page)
    }
}

type Repository = NewsRepositoryImpl<ScriptedApi, SqliteArticleStore>;

fn repository(api: ScriptedApi) -> (Arc<ScriptedApi>, Arc<Repository>) {
    let api = Arc::new(api);
    let store = SqliteArticleStore::new_in_memory().unwrap();
    let repo = NewsRepositoryImpl::with_paging(api.clone(), store, PagingConfig::default()).unwrap();
    (api, Arc::new(repo))
}

fn news_use_cases(api: ScriptedApi) -> (Arc<ScriptedApi>, Arc<NewsUseCases<Repository>>) {
    let (api, repo) = repository(api);
    (api, Arc::new(NewsUseCases::new(repo)))
}

fn article(n: u32) -> Article {
    Article::new(format!("https://abcnews.go.com/saved/{}", n), format!("Saved {}", n))
}

#[tokio::test]
async fn test_feed_of_25_results_loads_three_pages() {
    let (api, repo) = repository(ScriptedApi::new(25));
    let mut pager = repo.get_news(SourceSet::headlines());

    assert_eq!(pager.load_pages(5).await, 3);

    let next_keys: Vec<_> = pager.pages().iter().map(|p| p.next_key).collect();
    assert_eq!(next_keys, vec![Some(2), Some(3), None]);
    assert_eq!(pager.item_count(), 25);
    assert_eq!(api.requested_pages(), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_duplicate_titles_dropped_within_page() {
    let mut api = ScriptedApi::new(20);
    api.duplicate_first_title = true;
    let (_, repo) = repository(api);
    let mut pager = repo.get_news(SourceSet::headlines());

    pager.load_pages(5).await;

    for page in pager.pages() {
        let titles: HashSet<_> = page.data.iter().map(|a| a.title.clone()).collect();
        assert_eq!(titles.len(), page.data.len());
        assert_eq!(page.data.len(), 9);
    }
    // raw counts still reach the total
    assert!(pager.load_state().end_of_pagination_reached());
}

#[tokio::test]
async fn test_failure_keeps_original_error_and_retry_resumes() {
    let (api, repo) = repository(ScriptedApi::new(25).fail_once(2));
    let mut pager = repo.get_news(SourceSet::headlines());

    assert!(pager.load_next().await);
    assert!(!pager.load_next().await);

    let error = pager.load_state().error().unwrap().clone();
    assert_eq!(error.kind(), LoadErrorKind::Unknown);
    assert!(matches!(
        error.downcast_ref::<RemoteError>(),
        Some(RemoteError::Status { status: 503, .. })
    ));
    assert!(!pager.snapshot().is_error_screen());
    assert!(!pager.load_next().await);

    assert!(pager.retry().await);
    assert!(pager.load_next().await);
    assert_eq!(pager.item_count(), 25);
    assert_eq!(api.requested_pages(), vec![1, 2, 2, 3]);
}

#[tokio::test]
async fn test_first_page_failure_shows_error_screen() {
    let (_, use_cases) = news_use_cases(ScriptedApi::new(25).fail_once(1));
    let mut home = HomeViewModel::new(use_cases);

    home.on_event(HomeEvent::LoadMore).await;
    assert!(home.state().articles.is_error_screen());

    home.on_event(HomeEvent::Retry).await;
    let state = home.state();
    assert!(!state.articles.is_error_screen());
    assert_eq!(state.articles.len(), 10);
}

#[tokio::test]
async fn test_home_ticker_and_refresh() {
    let (api, use_cases) = news_use_cases(ScriptedApi::new(25));
    let mut home = HomeViewModel::new(use_cases);

    home.on_event(HomeEvent::LoadMore).await;
    assert_eq!(home.state().titles, "");

    home.on_event(HomeEvent::LoadMore).await;
    let state = home.state();
    assert_eq!(state.articles.len(), 20);
    assert!(state.titles.starts_with("Headline 0\u{1F7E5}Headline 1"));
    assert!(!state.titles.contains("Headline 10"));

    home.on_event(HomeEvent::ScrollTo(15)).await;
    home.on_event(HomeEvent::Refresh).await;

    // reloads the page around the anchor with a fresh loader
    assert_eq!(api.requested_pages(), vec![1, 2, 2]);
    assert_eq!(home.state().articles.len(), 10);
}

#[tokio::test]
async fn test_search_flow() {
    let (api, use_cases) = news_use_cases(ScriptedApi::new(15));
    let mut search = SearchViewModel::new(use_cases);

    search.on_event(SearchEvent::SearchNews).await;
    assert!(search.state().articles.is_none());
    assert!(api.requested_pages().is_empty());

    search
        .on_event(SearchEvent::UpdateSearchQuery("election".to_string()))
        .await;
    search.on_event(SearchEvent::SearchNews).await;

    let results = search.state().articles.unwrap();
    assert_eq!(results.len(), 10);
    assert_eq!(results.items[0].title, "election 0");

    search.on_event(SearchEvent::LoadMore).await;
    let results = search.state().articles.unwrap();
    assert_eq!(results.len(), 15);
    assert!(results.load_state.end_of_pagination_reached());
    assert_eq!(search.state().search_query, "election");
}

#[tokio::test]
async fn test_details_toggle_and_bookmarks() {
    let (_, use_cases) = news_use_cases(ScriptedApi::new(0));
    let details = DetailsViewModel::new(use_cases.clone());
    let bookmarks = BookmarkViewModel::new(use_cases);
    assert_eq!(
        bookmarks.state().empty_message(),
        Some("You have not saved news so far !")
    );

    details
        .on_event(DetailsEvent::UpsertDeleteArticle(article(1)))
        .await
        .unwrap();
    assert_eq!(details.state().side_effect.as_deref(), Some("Article Saved"));
    details
        .on_event(DetailsEvent::UpsertDeleteArticle(article(2)))
        .await
        .unwrap();

    let mut rx = bookmarks.subscribe();
    let state = timeout(Duration::from_secs(2), rx.wait_for(|s| s.articles.len() == 2))
        .await
        .unwrap()
        .unwrap()
        .clone();
    assert_eq!(state.articles[0], article(2));
    assert_eq!(state.articles[1], article(1));

    details.on_event(DetailsEvent::RemoveSideEffect).await.unwrap();
    assert_eq!(details.state().side_effect, None);

    details
        .on_event(DetailsEvent::UpsertDeleteArticle(article(1)))
        .await
        .unwrap();
    assert_eq!(details.state().side_effect.as_deref(), Some("Article Deleted"));

    timeout(Duration::from_secs(2), rx.wait_for(|s| s.articles == vec![article(2)]))
        .await
        .unwrap()
        .unwrap();
}

#[tokio::test]
async fn test_news_screens_share_one_use_case_bundle() {
    let (api, use_cases) = news_use_cases(ScriptedApi::new(12));
    let mut home = HomeViewModel::new(use_cases.clone());
    let mut search = SearchViewModel::new(use_cases.clone());
    let details = DetailsViewModel::new(use_cases.clone());
    let bookmarks = BookmarkViewModel::new(use_cases);

    home.on_event(HomeEvent::LoadMore).await;
    let first = home.state().articles.items[0].clone();
    assert_eq!(first.title, "Headline 0");

    search
        .on_event(SearchEvent::UpdateSearchQuery("rust".to_string()))
        .await;
    search.on_event(SearchEvent::SearchNews).await;
    assert_eq!(search.state().articles.unwrap().len(), 10);
    assert_eq!(api.requested_pages(), vec![1, 1]);

    details
        .on_event(DetailsEvent::UpsertDeleteArticle(first.clone()))
        .await
        .unwrap();
    let mut rx = bookmarks.subscribe();
    timeout(Duration::from_secs(2), rx.wait_for(|s| s.articles == vec![first.clone()]))
        .await
        .unwrap()
        .unwrap();
}

#[tokio::test]
async fn test_onboarding_changes_start_destination() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("news_db.sqlite");
    let manager = Arc::new(SqliteLocalUserManager::new_with_path(&path).unwrap());
    let use_cases = Arc::new(AppEntryUseCases::new(manager));

    let main = MainViewModel::with_splash_delay(use_cases.clone(), Duration::from_millis(1));
    let mut rx = main.subscribe();
    let first = timeout(Duration::from_secs(2), rx.wait_for(|s| !s.splash_condition))
        .await
        .unwrap()
        .unwrap()
        .clone();
    assert_eq!(first.start_destination, Route::AppStartNavigation);

    let onboarding = OnBoardingViewModel::new(use_cases.clone());
    onboarding.on_event(OnBoardingEvent::SaveAppEntry).await.unwrap();

    timeout(
        Duration::from_secs(2),
        rx.wait_for(|s| s.start_destination == Route::NewsNavigation),
    )
    .await
    .unwrap()
    .unwrap();
    drop(main);

    let reopened = Arc::new(SqliteLocalUserManager::new_with_path(&path).unwrap());
    let main = MainViewModel::with_splash_delay(
        Arc::new(AppEntryUseCases::new(reopened)),
        Duration::from_millis(1),
    );
    let mut rx = main.subscribe();
    let state = timeout(Duration::from_secs(2), rx.wait_for(|s| !s.splash_condition))
        .await
        .unwrap()
        .unwrap()
        .clone();
    assert_eq!(state.start_destination, Route::NewsNavigation);
}
