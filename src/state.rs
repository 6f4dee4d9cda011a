use hms_config::{CorsConfig, DatabaseConfig, JwtConfig};
use hms_db::{SqlitePool, init_db_pool, run_migrations, seed_default_admin};

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: SqlitePool,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(db: SqlitePool, jwt_config: JwtConfig, cors_config: CorsConfig) -> Self {
        Self {
            db,
            jwt_config,
            cors_config,
        }
    }
}

/// Opens and migrates the database, seeds the default admin and assembles
/// the shared state. Any failure here aborts startup.
pub async fn init_app_state(
    database_config: &DatabaseConfig,
    jwt_config: JwtConfig,
    cors_config: CorsConfig,
) -> anyhow::Result<AppState> {
    let db = init_db_pool(database_config).await?;
    run_migrations(&db).await?;
    seed_default_admin(&db).await?;

    Ok(AppState::new(db, jwt_config, cors_config))
}
