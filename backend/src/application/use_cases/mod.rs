pub mod app_entry;
pub mod news;

pub use app_entry::{AppEntryUseCases, ReadAppEntry, SaveAppEntry};
pub use news::{
    DeleteArticle, GetNews, NewsUseCases, SearchNews, SelectArticle, SelectArticles,
    UpsertArticle,
};
