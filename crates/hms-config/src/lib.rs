//! # HMS Config
//!
//! Configuration types for the HMS API.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`jwt`]: Token signing secret and lifetime
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`database`]: SQLite database location and pool size
//! - [`server`]: Listen address and deployment environment
//! - [`logging`]: Log level and optional log directory
//!
//! # Example
//!
//! ```ignore
//! use hms_config::{CorsConfig, DatabaseConfig, JwtConfig, ServerConfig};
//!
//! let server = ServerConfig::from_env();
//! let jwt_config = JwtConfig::from_env();
//! jwt_config.check_secret(&server)?;
//! ```

pub mod cors;
pub mod database;
pub mod jwt;
pub mod logging;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use jwt::JwtConfig;
pub use logging::LoggingConfig;
pub use server::ServerConfig;
