use std::env;

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    /// Default filter level when `RUST_LOG` is unset.
    pub level: String,
    /// Directory for daily rolling JSON log files. Console only when unset.
    pub log_dir: Option<String>,
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            log_dir: env::var("LOG_DIR").ok().filter(|s| !s.trim().is_empty()),
        }
    }
}
