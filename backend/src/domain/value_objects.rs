/// Value objects for the domain layer
use super::base::{DomainError, DomainResult, ValueObject};
use std::fmt;

/// Identity of an article: its link exactly as the news API sent it.
///
/// Links are not validated; feeds occasionally carry relative or empty ones
/// and those articles are still listed and can be saved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleUrl {
    value: String,
}

impl ArticleUrl {
    pub fn new(url: impl Into<String>) -> Self {
        ArticleUrl { value: url.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl ValueObject for ArticleUrl {}

impl fmt::Display for ArticleUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// The news sources a feed is restricted to, e.g. `bbc-news`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSet(Vec<String>);

impl SourceSet {
    pub fn new<I, S>(sources: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sources: Vec<String> = sources
            .into_iter()
            .map(|s| s.into().trim().to_string())
            .collect();

        if sources.is_empty() {
            return Err(DomainError::InvalidValue(
                "At least one news source is required".to_string(),
            ));
        }
        if let Some(bad) = sources.iter().find(|s| s.is_empty() || s.contains(',')) {
            return Err(DomainError::InvalidValue(format!(
                "Invalid news source identifier: {:?}",
                bad
            )));
        }

        Ok(SourceSet(sources))
    }

    /// The sources the home feed shows
    pub fn headlines() -> Self {
        SourceSet(
            ["bbc-news", "abc-news", "al-jazeera-english"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }

    /// Comma joined form expected by the remote API
    pub fn joined(&self) -> String {
        self.0.join(",")
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl ValueObject for SourceSet {}

impl fmt::Display for SourceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.joined())
    }
}

/// Free text query for article search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> DomainResult<Self> {
        let query = query.into().trim().to_string();
        if query.is_empty() {
            return Err(DomainError::InvalidValue(
                "Search query cannot be empty".to_string(),
            ));
        }
        Ok(SearchQuery(query))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for SearchQuery {}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
