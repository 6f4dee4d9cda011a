mod common;

use std::collections::HashMap;

use axum::http::{Method, StatusCode};
use common::setup_test_app;
use hms::hms_core::{Role, permissions};
use serde_json::json;

#[tokio::test]
async fn test_gate_enforces_role_table() {
    let app = setup_test_app().await;

    let mut tokens = HashMap::new();
    for role in Role::ALL {
        tokens.insert(role, app.create_user(role).await.token);
    }

    for entry in permissions::table().entries() {
        let uri = entry.path.replace("{id}", "1");
        let body = matches!(entry.method, Method::POST | Method::PUT).then(|| json!({}));

        for role in Role::ALL {
            let (status, response) = app
                .request(entry.method.clone(), &uri, Some(tokens[&role].as_str()), body.clone())
                .await;

            if entry.roles.contains(&role) {
                assert_ne!(
                    status,
                    StatusCode::FORBIDDEN,
                    "{} {} should admit {}",
                    entry.method,
                    uri,
                    role
                );
                assert_ne!(status, StatusCode::UNAUTHORIZED);
            } else {
                assert_eq!(
                    status,
                    StatusCode::FORBIDDEN,
                    "{} {} should refuse {}",
                    entry.method,
                    uri,
                    role
                );
                assert_eq!(
                    response["error"],
                    format!("Forbidden: role '{}' may not access this resource", role)
                );
            }
        }
    }
}

#[tokio::test]
async fn test_every_protected_route_requires_token() {
    let app = setup_test_app().await;

    for entry in permissions::table().entries() {
        let uri = entry.path.replace("{id}", "1");
        let (status, body) = app.request(entry.method.clone(), &uri, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{} {}", entry.method, uri);
        assert_eq!(body, json!({ "error": "Unauthorized" }));
    }
}

#[tokio::test]
async fn test_denied_request_has_no_side_effects() {
    let app = setup_test_app().await;
    let pharmacist = app.create_user(Role::Pharmacist).await;

    let (status, _) = app
        .post("/api/patients", &pharmacist.token, json!({ "name": "Sneaky" }))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM patients")
        .fetch_one(&app.db)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_health_is_public() {
    let app = setup_test_app().await;

    let (status, body) = app.request(Method::GET, "/api/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true }));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = setup_test_app().await;

    let (status, body) = app.request(Method::GET, "/api/unknown", None, None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Route not found");
}

#[tokio::test]
async fn test_navigation_follows_role() {
    let app = setup_test_app().await;
    let nurse = app.create_user(Role::Nurse).await;

    let (status, body) = app.get("/api/navigation", &nurse.token).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "nurse");
    assert_eq!(body["fallback"], "/login");
    let targets: Vec<&str> = body["links"]
        .as_array()
        .unwrap()
        .iter()
        .map(|link| link["to"].as_str().unwrap())
        .collect();
    assert!(targets.contains(&"/patients"));
    assert!(!targets.contains(&"/staff"));
    assert!(!targets.contains(&"/register"));
}

#[tokio::test]
async fn test_admin_navigation_includes_account_creation() {
    let app = setup_test_app().await;
    let token = app.admin_token().await;

    let (status, body) = app.get("/api/navigation", &token).await;

    assert_eq!(status, StatusCode::OK);
    assert!(
        body["links"]
            .as_array()
            .unwrap()
            .iter()
            .any(|link| link["to"] == "/register" && link["label"] == "Create Account")
    );
}

#[tokio::test]
async fn test_reports_are_admin_only() {
    let app = setup_test_app().await;
    let doctor = app.create_user(Role::Doctor).await;

    let (status, _) = app.get("/api/reports/summary", &doctor.token).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}
