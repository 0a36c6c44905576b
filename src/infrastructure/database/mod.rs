pub mod repositories;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// Open the SQLite pool for `database_url`, creating the file if missing.
///
/// In-memory databases live per connection, so they get a single
/// never-recycled connection.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    if is_memory_url(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
    } else {
        SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
    }
}

/// Normalize a `DATABASE_URL`/`DB_PATH` value to a `sqlite:` URL
pub fn normalize_url(db_path: &str) -> String {
    if db_path.starts_with("sqlite:") {
        db_path.to_string()
    } else {
        format!("sqlite:{}", db_path)
    }
}

/// Filesystem path of a file-backed URL, `None` for in-memory databases
pub fn file_path(database_url: &str) -> Option<&str> {
    if is_memory_url(database_url) {
        return None;
    }
    let path = database_url.strip_prefix("sqlite:").unwrap_or(database_url);
    let path = path.strip_prefix("//").unwrap_or(path);
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        None
    } else {
        Some(path)
    }
}

fn is_memory_url(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_url() {
        assert_eq!(normalize_url("./data/r.db"), "sqlite:./data/r.db");
        assert_eq!(normalize_url("sqlite::memory:"), "sqlite::memory:");
    }

    #[test]
    fn test_file_path() {
        assert_eq!(file_path("sqlite:./data/r.db"), Some("./data/r.db"));
        assert_eq!(file_path("sqlite://data/r.db?mode=rwc"), Some("data/r.db"));
        assert_eq!(file_path("sqlite::memory:"), None);
    }
}
