pub mod paging;
pub mod repositories;
pub mod use_cases;

// Re-export key types to avoid naming conflicts
pub use paging::{
    EndOfPaginationPolicy, LoadErrorKind, LoadState, PageLoadError, PagedItems, Pager,
    PagingConfig, PagingSource,
};
pub use repositories::{ArticleStore, LocalUserManager, NewsRepository};
pub use use_cases::{
    AppEntryUseCases, DeleteArticle, GetNews, NewsUseCases, ReadAppEntry, SaveAppEntry,
    SearchNews, SelectArticle, SelectArticles, UpsertArticle,
};
