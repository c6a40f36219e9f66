mod schema;
mod sqlite_article_store;
mod sqlite_local_user_manager;

pub use schema::initialize_database;
pub use sqlite_article_store::SqliteArticleStore;
pub use sqlite_local_user_manager::SqliteLocalUserManager;
