use crate::application::repositories::ArticleStore;
use crate::domain::base::DomainError;
use crate::domain::entities::{Article, ArticleSource};
use crate::domain::value_objects::ArticleUrl;
use crate::domain::DomainResult;
use rusqlite::{params, Connection, OptionalExtension, Result as SqliteResult, Row};

const SELECT_COLUMNS: &str = "SELECT url, title, description, content, author, published_at,
        source_id, source_name, url_to_image
     FROM articles";

/// SQLite-based implementation of the ArticleStore trait
pub struct SqliteArticleStore {
    conn: Connection,
}

impl SqliteArticleStore {
    /// Create a new SQLite store with the given connection
    pub fn new(conn: Connection) -> SqliteResult<Self> {
        super::schema::initialize_database(&conn)?;
        Ok(SqliteArticleStore { conn })
    }

    /// Create a new in-memory SQLite store (useful for testing)
    pub fn new_in_memory() -> SqliteResult<Self> {
        Self::new(Connection::open_in_memory()?)
    }

    /// Create a new file-based SQLite store
    pub fn new_with_path(path: impl AsRef<std::path::Path>) -> SqliteResult<Self> {
        Self::new(Connection::open(path)?)
    }

    fn article_from_row(row: &Row<'_>) -> SqliteResult<Article> {
        Ok(Article::new(row.get::<_, String>(0)?, row.get::<_, String>(1)?)
            .with_description(row.get::<_, String>(2)?)
            .with_content(row.get::<_, String>(3)?)
            .with_author(row.get::<_, String>(4)?)
            .with_published_at(row.get::<_, String>(5)?)
            .with_source(ArticleSource {
                id: row.get(6)?,
                name: row.get(7)?,
            })
            .with_image(row.get::<_, String>(8)?))
    }
}

fn database_error(e: rusqlite::Error) -> DomainError {
    DomainError::InvalidOperation(format!("Database error: {}", e))
}

impl ArticleStore for SqliteArticleStore {
    fn upsert(&mut self, article: Article) -> DomainResult<()> {
        // ON CONFLICT keeps the original row, so list order stays the save order
        self.conn
            .execute(
                "INSERT INTO articles (url, title, description, content, author, published_at,
                    source_id, source_name, url_to_image)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
                 ON CONFLICT(url) DO UPDATE SET
                    title = excluded.title,
                    description = excluded.description,
                    content = excluded.content,
                    author = excluded.author,
                    published_at = excluded.published_at,
                    source_id = excluded.source_id,
                    source_name = excluded.source_name,
                    url_to_image = excluded.url_to_image",
                params![
                    article.url().as_str(),
                    article.title,
                    article.description,
                    article.content,
                    article.author,
                    article.published_at,
                    article.source.id,
                    article.source.name,
                    article.url_to_image,
                ],
            )
            .map_err(database_error)?;
        Ok(())
    }

    fn delete(&mut self, url: &ArticleUrl) -> DomainResult<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM articles WHERE url = ?1", params![url.as_str()])
            .map_err(database_error)?;

        Ok(rows_affected > 0)
    }

    fn find_all(&self) -> DomainResult<Vec<Article>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} ORDER BY rowid", SELECT_COLUMNS))
            .map_err(database_error)?;

        let articles = stmt
            .query_map([], Self::article_from_row)
            .map_err(database_error)?
            .collect::<SqliteResult<Vec<_>>>()
            .map_err(database_error)?;

        Ok(articles)
    }

    fn find_by_url(&self, url: &ArticleUrl) -> DomainResult<Option<Article>> {
        self.conn
            .query_row(
                &format!("{} WHERE url = ?1", SELECT_COLUMNS),
                params![url.as_str()],
                Self::article_from_row,
            )
            .optional()
            .map_err(database_error)
    }
}
