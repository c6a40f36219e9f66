use rusqlite::{Connection, Result};

/// Initialize the SQLite database with the required schema.
/// This function is idempotent and can be safely called multiple times.
pub fn initialize_database(conn: &Connection) -> Result<()> {
    // Saved articles, keyed by their link
    conn.execute(
        "CREATE TABLE IF NOT EXISTS articles (
            url TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            content TEXT NOT NULL,
            author TEXT NOT NULL,
            published_at TEXT NOT NULL,
            source_id TEXT,
            source_name TEXT NOT NULL,
            url_to_image TEXT NOT NULL
        )",
        [],
    )?;

    // Key/value user settings (onboarding flag)
    conn.execute(
        "CREATE TABLE IF NOT EXISTS user_settings (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        [],
    )?;

    Ok(())
}
