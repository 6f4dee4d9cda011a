//! Database location.
//!
//! The whole application lives in one SQLite file. `DATABASE_URL` accepts any
//! SQLite connection string; the default keeps the file under `data/`.

use std::env;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/hms.sqlite";

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self {
            url: env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5),
        }
    }

    /// File path of the database, if the URL points at a file.
    pub fn file_path(&self) -> Option<&str> {
        let path = self
            .url
            .strip_prefix("sqlite://")
            .or_else(|| self.url.strip_prefix("sqlite:"))?;
        let path = path.split('?').next().unwrap_or(path);
        if path.is_empty() || path == ":memory:" {
            None
        } else {
            Some(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str) -> DatabaseConfig {
        DatabaseConfig {
            url: url.to_string(),
            max_connections: 1,
        }
    }

    #[test]
    fn test_file_path() {
        assert_eq!(config(DEFAULT_DATABASE_URL).file_path(), Some("data/hms.sqlite"));
        assert_eq!(config("sqlite:hms.db?mode=rwc").file_path(), Some("hms.db"));
        assert_eq!(config("sqlite::memory:").file_path(), None);
        assert_eq!(config("postgres://localhost/hms").file_path(), None);
    }
}
