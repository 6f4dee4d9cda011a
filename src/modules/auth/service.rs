use std::sync::LazyLock;

use anyhow::anyhow;
use hms_auth::create_access_token;
use hms_config::JwtConfig;
use hms_core::{AppError, hash_password, verify_password};
use hms_models::{LoginRequest, LoginResponse, RegisterRequest, User};
use sqlx::SqlitePool;
use tracing::instrument;

use crate::modules::users::service::{EMAIL_TAKEN_MESSAGE, UserService};

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

/// Digest checked against when the email is unknown, so that a miss costs
/// the same as a wrong password.
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("hms-timing-equalizer").ok());

fn invalid_credentials() -> AppError {
    AppError::unauthorized(anyhow!(INVALID_CREDENTIALS_MESSAGE))
}

pub struct AuthService;

impl AuthService {
    #[instrument(skip(db, dto, jwt_config), fields(email = %dto.email))]
    pub async fn login(
        db: &SqlitePool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        let Some(credentials) = UserService::find_credentials_by_email(db, &dto.email).await?
        else {
            if let Some(dummy) = DUMMY_HASH.as_deref() {
                let _ = verify_password(&dto.password, dummy);
            }
            tracing::warn!("Login failed: unknown email");
            return Err(invalid_credentials());
        };

        if !verify_password(&dto.password, &credentials.password_hash)? {
            tracing::warn!(user_id = credentials.user.id, "Login failed: wrong password");
            return Err(invalid_credentials());
        }

        let user = credentials.user;
        let token = create_access_token(user.id, user.role, jwt_config)?;

        tracing::info!(user_id = user.id, role = %user.role, "User logged in");
        Ok(LoginResponse { user, token })
    }

    /// Creates an identity. The caller must already be authorized as admin.
    #[instrument(skip(db, dto), fields(email = %dto.email, role = %dto.role))]
    pub async fn register(db: &SqlitePool, dto: RegisterRequest) -> Result<User, AppError> {
        if UserService::email_exists(db, &dto.email).await? {
            return Err(AppError::conflict(anyhow!(EMAIL_TAKEN_MESSAGE)));
        }

        let password_hash = hash_password(&dto.password)?;
        let user =
            UserService::create_user(db, &dto.name, &dto.email, &password_hash, dto.role).await?;

        tracing::info!(user_id = user.id, "User registered");
        Ok(user)
    }

    #[instrument(skip(db))]
    pub async fn current_user(db: &SqlitePool, user_id: i64) -> Result<User, AppError> {
        UserService::find_by_id(db, user_id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("User not found")))
    }
}
