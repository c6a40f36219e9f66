// Remote news API access
pub mod dto;
mod news_api;
mod paging_sources;

pub use dto::{ArticleDto, NewsResponse, SourceDto};
pub use news_api::{NewsApi, RemoteError, RemoteResult, ReqwestNewsApi};
pub use paging_sources::{NewsPagingSource, SearchNewsPagingSource};
