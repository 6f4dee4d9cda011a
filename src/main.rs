use anyhow::Context;
use dotenvy::dotenv;

use hms::hms_config::{CorsConfig, DatabaseConfig, JwtConfig, LoggingConfig, ServerConfig};
use hms::logging::init_tracing;
use hms::router::init_router;
use hms::state::init_app_state;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let _log_guard = init_tracing(&LoggingConfig::from_env())?;

    let server_config = ServerConfig::from_env();
    let jwt_config = JwtConfig::from_env();
    jwt_config.check_secret(&server_config)?;

    let state = init_app_state(
        &DatabaseConfig::from_env(),
        jwt_config,
        CorsConfig::from_env(),
    )
    .await?;
    let app = init_router(state);

    let address = server_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    tracing::info!(
        address = %address,
        environment = %server_config.environment,
        "Server running; docs at /swagger-ui and /scalar"
    );

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
