use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use headlines::application::paging::PagedItems;
use headlines::application::use_cases::{AppEntryUseCases, NewsUseCases};
use headlines::domain::{Article, ArticleUrl};
use headlines::infrastructure::{
    NewsRepositoryImpl, ReqwestNewsApi, SqliteArticleStore, SqliteLocalUserManager,
};
use headlines::presentation::{
    empty_screen_message, BookmarkViewModel, DetailsEvent, DetailsViewModel, HomeEvent,
    HomeViewModel, MainViewModel, OnBoardingEvent, OnBoardingViewModel, SearchEvent,
    SearchViewModel,
};
use headlines::{telemetry, AppConfig};
use std::sync::Arc;
use tracing::info;

type Repository = NewsRepositoryImpl<ReqwestNewsApi, SqliteArticleStore>;

#[derive(Parser, Debug)]
#[command(name = "headlines", version, about = "Read, search and bookmark news headlines")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Walk through onboarding and remember it
    Onboard,
    /// Show where the app would start and how many articles are saved
    Status,
    /// List headlines from the default sources
    Headlines {
        /// Number of pages to load
        #[arg(long, default_value_t = 1)]
        pages: usize,
        /// Save or unsave the article with this number
        #[arg(long)]
        save: Option<usize>,
    },
    /// Search the default sources
    Search {
        query: String,
        #[arg(long, default_value_t = 1)]
        pages: usize,
        #[arg(long)]
        save: Option<usize>,
    },
    /// List saved articles, newest first
    Bookmarks,
    /// Show a saved article
    Details { url: String },
}

struct App {
    news: Arc<NewsUseCases<Repository>>,
    app_entry: Arc<AppEntryUseCases<SqliteLocalUserManager>>,
}

impl App {
    fn open(config: &AppConfig) -> Result<Self> {
        let api = ReqwestNewsApi::new(&config.base_url, &config.api_key, config.request_timeout)
            .context("Failed to build HTTP client")?;
        let store = SqliteArticleStore::new_with_path(&config.database_path).with_context(|| {
            format!("Failed to open database {}", config.database_path.display())
        })?;
        let repository = NewsRepositoryImpl::with_paging(Arc::new(api), store, config.paging)?;
        let user_manager = SqliteLocalUserManager::new_with_path(&config.database_path)
            .context("Failed to open user settings")?;

        Ok(App {
            news: Arc::new(NewsUseCases::new(Arc::new(repository))),
            app_entry: Arc::new(AppEntryUseCases::new(Arc::new(user_manager))),
        })
    }
}

fn print_articles(articles: &[Article]) {
    for (i, article) in articles.iter().enumerate() {
        println!("{:>3}. {}", i + 1, article.title);
        println!("     {} | {}", article.source.name, article.url());
    }
}

fn print_page(items: &PagedItems<Article>) {
    if items.is_error_screen() {
        println!("{}", empty_screen_message(items.load_state.error().map(|e| e.as_ref())));
        return;
    }
    print_articles(&items.items);
    if let Some(error) = items.load_state.error() {
        println!("Stopped early: {}", error);
    } else if items.load_state.end_of_pagination_reached() {
        println!("-- end of results --");
    }
}

async fn toggle_saved(app: &App, items: &PagedItems<Article>, number: usize) -> Result<()> {
    let article = number
        .checked_sub(1)
        .and_then(|index| items.items.get(index))
        .with_context(|| format!("No article number {}", number))?;
    let details = DetailsViewModel::new(app.news.clone());
    details
        .on_event(DetailsEvent::UpsertDeleteArticle(article.clone()))
        .await?;
    if let Some(notice) = details.state().side_effect {
        println!("{}", notice);
    }
    Ok(())
}

async fn run(app: App, command: Command) -> Result<()> {
    match command {
        Command::Onboard => {
            let onboarding = OnBoardingViewModel::new(app.app_entry.clone());
            loop {
                let state = onboarding.state();
                let (back, next) = state.buttons();
                println!("Page {}/{} [{}] [{}]", state.current_page + 1, state.page_count, back, next);
                if state.is_last_page() {
                    break;
                }
                onboarding.on_event(OnBoardingEvent::NextPage).await?;
            }
            onboarding.on_event(OnBoardingEvent::NextPage).await?;
            println!("Onboarding complete");
        }
        Command::Status => {
            let main = MainViewModel::new(app.app_entry.clone());
            let mut state = main.subscribe();
            let state = state.wait_for(|s| !s.splash_condition).await?.clone();
            println!("Start destination: {}", state.start_destination);
            println!("Saved articles: {}", app.news.select_articles.execute().borrow().len());
        }
        Command::Headlines { pages, save } => {
            let mut home = HomeViewModel::new(app.news.clone());
            for _ in 0..pages.max(1) {
                home.on_event(HomeEvent::LoadMore).await;
            }
            let state = home.state();
            if !state.titles.is_empty() {
                println!("{}\n", state.titles);
            }
            print_page(&state.articles);
            if let Some(number) = save {
                toggle_saved(&app, &state.articles, number).await?;
            }
        }
        Command::Search { query, pages, save } => {
            let mut search = SearchViewModel::new(app.news.clone());
            search.on_event(SearchEvent::UpdateSearchQuery(query)).await;
            search.on_event(SearchEvent::SearchNews).await;
            for _ in 1..pages {
                search.on_event(SearchEvent::LoadMore).await;
            }
            match search.state().articles {
                Some(articles) => {
                    print_page(&articles);
                    if let Some(number) = save {
                        toggle_saved(&app, &articles, number).await?;
                    }
                }
                None => println!("Nothing to search for"),
            }
        }
        Command::Bookmarks => {
            let bookmarks = BookmarkViewModel::new(app.news.clone());
            let state = bookmarks.state();
            match state.empty_message() {
                Some(message) => println!("{}", message),
                None => print_articles(&state.articles),
            }
        }
        Command::Details { url } => {
            let url = ArticleUrl::new(url);
            match app.news.select_article.execute(&url).await? {
                Some(article) => {
                    println!("{}", article.title);
                    println!("{} | {} | {}", article.source.name, article.author, article.published_at);
                    println!("{}\n", url);
                    println!("{}", article.description);
                    println!("{}", article.content);
                }
                None => println!("{} is not saved", url),
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    telemetry::init_tracing();

    let cli = Cli::parse();
    let config = AppConfig::from_env()?;
    info!(database = %config.database_path.display(), "Starting news reader");

    let app = App::open(&config)?;
    run(app, cli.command).await
}
