use crate::application::repositories::LocalUserManager;
use crate::domain::base::DomainError;
use crate::domain::DomainResult;
use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension, Result as SqliteResult};
use tokio::sync::{watch, Mutex};
use tracing::info;

const APP_ENTRY: &str = "appEntry";

/// User settings stored in the `user_settings` table
pub struct SqliteLocalUserManager {
    conn: Mutex<Connection>,
    app_entry: watch::Sender<bool>,
}

impl SqliteLocalUserManager {
    pub fn new(conn: Connection) -> SqliteResult<Self> {
        super::schema::initialize_database(&conn)?;
        let stored: Option<String> = conn
            .query_row(
                "SELECT value FROM user_settings WHERE key = ?1",
                params![APP_ENTRY],
                |row| row.get(0),
            )
            .optional()?;
        let app_entry = stored.as_deref() == Some("true");

        Ok(SqliteLocalUserManager {
            conn: Mutex::new(conn),
            app_entry: watch::channel(app_entry).0,
        })
    }

    /// Create a new in-memory store (useful for testing)
    pub fn new_in_memory() -> SqliteResult<Self> {
        Self::new(Connection::open_in_memory()?)
    }

    pub fn new_with_path(path: impl AsRef<std::path::Path>) -> SqliteResult<Self> {
        Self::new(Connection::open(path)?)
    }
}

#[async_trait]
impl LocalUserManager for SqliteLocalUserManager {
    async fn save_app_entry(&self) -> DomainResult<()> {
        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO user_settings (key, value) VALUES (?1, 'true')
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![APP_ENTRY],
        )
        .map_err(|e| DomainError::InvalidOperation(format!("Database error: {}", e)))?;

        if !self.app_entry.send_replace(true) {
            info!("Onboarding completed");
        }
        Ok(())
    }

    fn read_app_entry(&self) -> watch::Receiver<bool> {
        self.app_entry.subscribe()
    }
}
