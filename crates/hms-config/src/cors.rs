//! Cross-origin configuration for the browser client.
//!
//! # Environment Variables
//!
//! - `ALLOWED_ORIGINS`: comma-separated origins allowed to call the API with
//!   credentials (default: [`DEFAULT_ALLOWED_ORIGIN`], the dev frontend)

use std::env;

pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";

#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn from_env() -> Self {
        let raw = env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGIN.to_string());
        Self::from_list(&raw)
    }

    /// Parses a comma-separated origin list, skipping blank entries.
    pub fn from_list(raw: &str) -> Self {
        let allowed_origins = raw
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        Self { allowed_origins }
    }
}
