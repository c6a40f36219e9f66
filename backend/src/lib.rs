// News reader core: domain model, paging, persistence and screen state
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod telemetry;

pub use config::{AppConfig, ConfigError};
pub use domain::{Article, ArticleUrl, DomainError, DomainResult, SearchQuery, SourceSet};
