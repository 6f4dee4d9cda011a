#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use hms::hms_auth::{create_access_token, create_token_with_lifetime};
use hms::hms_config::{CorsConfig, JwtConfig};
use hms::hms_core::{Role, hash_password};
use hms::hms_db::{
    DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD, SqlitePool, init_in_memory_pool, run_migrations,
    seed_default_admin,
};
use hms::router::init_router;
use hms::state::AppState;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

pub const TEST_PASSWORD: &str = "testpass123";

pub struct TestApp {
    pub router: Router,
    pub db: SqlitePool,
    pub jwt_config: JwtConfig,
}

pub struct TestUser {
    pub id: i64,
    pub email: String,
    pub role: Role,
    pub token: String,
}

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "integration-test-secret".to_string(),
        access_token_expiry: 3600,
    }
}

/// Fresh in-memory database with the schema applied and the default admin seeded.
pub async fn setup_test_app() -> TestApp {
    let db = init_in_memory_pool().await.unwrap();
    run_migrations(&db).await.unwrap();
    seed_default_admin(&db).await.unwrap();

    let jwt_config = test_jwt_config();
    let state = AppState::new(
        db.clone(),
        jwt_config.clone(),
        CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        },
    );

    TestApp {
        router: init_router(state),
        db,
        jwt_config,
    }
}

impl TestApp {
    /// Inserts a user directly and signs a token for it.
    pub async fn create_user(&self, role: Role) -> TestUser {
        let email = format!("{}-{}@test.com", role.as_str(), uuid::Uuid::new_v4());
        let hashed = hash_password(TEST_PASSWORD).unwrap();

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO users (name, email, password_hash, role) VALUES (?, ?, ?, ?) RETURNING id",
        )
        .bind("Test User")
        .bind(&email)
        .bind(&hashed)
        .bind(role.as_str())
        .fetch_one(&self.db)
        .await
        .unwrap();

        TestUser {
            id,
            email,
            role,
            token: create_access_token(id, role, &self.jwt_config).unwrap(),
        }
    }

    pub fn token_for(&self, user_id: i64, role: Role) -> String {
        create_access_token(user_id, role, &self.jwt_config).unwrap()
    }

    pub fn expired_token_for(&self, user_id: i64, role: Role) -> String {
        create_token_with_lifetime(user_id, role, -60, &self.jwt_config).unwrap()
    }

    pub async fn admin_token(&self) -> String {
        let (status, body) = self
            .request(
                Method::POST,
                "/api/auth/login",
                None,
                Some(json!({
                    "email": DEFAULT_ADMIN_EMAIL,
                    "password": DEFAULT_ADMIN_PASSWORD
                })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        body["token"].as_str().unwrap().to_string()
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }

        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&body).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, body)
    }

    pub async fn get(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, Some(token), None).await
    }

    pub async fn post(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(token), Some(body)).await
    }

    pub async fn put(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, Some(token), Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, Some(token), None).await
    }
}
