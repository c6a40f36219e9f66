pub mod article_store;
pub mod local_user_manager;
pub mod news_repository;

pub use article_store::ArticleStore;
pub use local_user_manager::LocalUserManager;
pub use news_repository::NewsRepository;
