pub mod news_repository;
pub mod persistence;
pub mod remote;

pub use news_repository::NewsRepositoryImpl;
pub use persistence::{SqliteArticleStore, SqliteLocalUserManager};
pub use remote::{NewsApi, RemoteError, ReqwestNewsApi};
