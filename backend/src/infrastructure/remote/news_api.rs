/// HTTP client for the news API
use super::dto::{ApiErrorBody, NewsResponse};
use crate::application::paging::{LoadErrorKind, PageKey, PageLoadError};
use crate::domain::value_objects::{SearchQuery, SourceSet};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl RemoteError {
    pub fn kind(&self) -> LoadErrorKind {
        match self {
            RemoteError::Request(e) if e.is_timeout() => LoadErrorKind::ServerUnavailable,
            RemoteError::Request(e) if e.is_connect() => LoadErrorKind::InternetUnavailable,
            _ => LoadErrorKind::Unknown,
        }
    }
}

impl From<RemoteError> for PageLoadError {
    fn from(error: RemoteError) -> Self {
        PageLoadError::new(error.kind(), error)
    }
}

pub type RemoteResult<T> = Result<T, RemoteError>;

/// The two queries the app issues against the news API
#[async_trait]
pub trait NewsApi: Send + Sync {
    /// Articles from the given sources, page `page`
    async fn get_news(
        &self,
        sources: &SourceSet,
        page: PageKey,
        page_size: usize,
    ) -> RemoteResult<NewsResponse>;

    /// Articles matching `query` from the given sources, page `page`
    async fn search_news(
        &self,
        query: &SearchQuery,
        sources: &SourceSet,
        page: PageKey,
        page_size: usize,
    ) -> RemoteResult<NewsResponse>;
}

/// `reqwest` based implementation talking to a NewsAPI compatible server
pub struct ReqwestNewsApi {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ReqwestNewsApi {
    /// # Arguments
    /// * `base_url` - Server root, e.g. "https://newsapi.org/"
    /// * `api_key` - Key sent with every request
    /// * `timeout` - Per-request timeout
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> RemoteResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Ok(ReqwestNewsApi {
            client,
            base_url,
            api_key: api_key.into(),
        })
    }

    fn everything_url(&self) -> String {
        format!("{}v2/everything", self.base_url)
    }

    async fn fetch(&self, query: &[(&str, String)]) -> RemoteResult<NewsResponse> {
        let response = self
            .client
            .get(self.everything_url())
            .query(query)
            .query(&[("apiKey", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = match serde_json::from_str::<ApiErrorBody>(&body) {
                Ok(ApiErrorBody {
                    code: Some(code),
                    message: Some(message),
                }) => format!("{}: {}", code, message),
                Ok(ApiErrorBody {
                    message: Some(message),
                    ..
                }) => message,
                _ => status.canonical_reason().unwrap_or("unexpected status").to_string(),
            };
            return Err(RemoteError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl NewsApi for ReqwestNewsApi {
    async fn get_news(
        &self,
        sources: &SourceSet,
        page: PageKey,
        page_size: usize,
    ) -> RemoteResult<NewsResponse> {
        debug!(sources = %sources, page, "Fetching headlines");
        self.fetch(&[
            ("sources", sources.joined()),
            ("page", page.to_string()),
            ("pageSize", page_size.to_string()),
        ])
        .await
    }

    async fn search_news(
        &self,
        query: &SearchQuery,
        sources: &SourceSet,
        page: PageKey,
        page_size: usize,
    ) -> RemoteResult<NewsResponse> {
        debug!(query = %query, sources = %sources, page, "Searching news");
        self.fetch(&[
            ("q", query.as_str().to_string()),
            ("sources", sources.joined()),
            ("page", page.to_string()),
            ("pageSize", page_size.to_string()),
        ])
        .await
    }
}
