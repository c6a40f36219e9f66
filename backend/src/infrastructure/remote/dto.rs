/// Wire format of the news API
use crate::domain::entities::{Article, ArticleSource};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsResponse {
    pub articles: Vec<ArticleDto>,
    pub status: String,
    pub total_results: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceDto {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// An article as sent by the API; most fields may be null
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    #[serde(default)]
    pub source: SourceDto,
    pub author: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: String,
    pub url_to_image: Option<String>,
    pub published_at: Option<String>,
    pub content: Option<String>,
}

/// Error body returned alongside non-2xx statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub code: Option<String>,
    pub message: Option<String>,
}

impl ArticleDto {
    pub fn into_article(self) -> Article {
        Article::new(self.url, self.title.unwrap_or_default())
            .with_author(self.author.unwrap_or_default())
            .with_description(self.description.unwrap_or_default())
            .with_content(self.content.unwrap_or_default())
            .with_published_at(self.published_at.unwrap_or_default())
            .with_image(self.url_to_image.unwrap_or_default())
            .with_source(ArticleSource {
                id: self.source.id,
                name: self.source.name.unwrap_or_default(),
            })
    }
}
