/// Domain entities
use super::base::Entity;
use super::value_objects::ArticleUrl;

/// Where an article was published
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArticleSource {
    pub id: Option<String>,
    pub name: String,
}

/// A news article, shared by the remote feeds and the bookmark store.
///
/// Two articles are the same entity when their `url` matches. Within a single
/// fetched page, articles are additionally deduplicated by `title`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    url: ArticleUrl,
    pub title: String,
    pub description: String,
    pub content: String,
    pub author: String,
    pub published_at: String,
    pub source: ArticleSource,
    pub url_to_image: String,
}

impl Article {
    /// Create an article with only the identifying fields set
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Article {
            url: ArticleUrl::new(url),
            title: title.into(),
            description: String::new(),
            content: String::new(),
            author: String::new(),
            published_at: String::new(),
            source: ArticleSource::default(),
            url_to_image: String::new(),
        }
    }

    pub fn url(&self) -> &ArticleUrl {
        &self.url
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_published_at(mut self, published_at: impl Into<String>) -> Self {
        self.published_at = published_at.into();
        self
    }

    pub fn with_source(mut self, source: ArticleSource) -> Self {
        self.source = source;
        self
    }

    pub fn with_image(mut self, url_to_image: impl Into<String>) -> Self {
        self.url_to_image = url_to_image.into();
        self
    }
}

impl Entity for Article {
    type Id = ArticleUrl;

    fn id(&self) -> &Self::Id {
        &self.url
    }
}
