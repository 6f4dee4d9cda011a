mod common;

use axum::http::StatusCode;
use common::{TestApp, setup_test_app};
use hms::hms_core::Role;
use serde_json::{Value, json};

async fn patient_and_doctor(app: &TestApp, token: &str) -> (Value, Value) {
    let (_, patient) = app
        .post("/api/patients", token, json!({ "name": "Jane Roe" }))
        .await;
    let (_, doctor) = app
        .post("/api/doctors", token, json!({ "name": "Dr. House" }))
        .await;
    (patient["id"].clone(), doctor["id"].clone())
}

#[tokio::test]
async fn test_create_applies_defaults() {
    let app = setup_test_app().await;
    let admin = app.create_user(Role::Admin).await;
    let (patient_id, doctor_id) = patient_and_doctor(&app, &admin.token).await;

    let (status, appointment) = app
        .post(
            "/api/appointments",
            &admin.token,
            json!({ "patient_id": patient_id, "doctor_id": doctor_id, "date": "2026-11-02" }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(appointment["status"], "scheduled");
    assert_eq!(appointment["time"], "");
    assert_eq!(appointment["notes"], "");
}

#[tokio::test]
async fn test_list_and_get_include_names() {
    let app = setup_test_app().await;
    let receptionist = app.create_user(Role::Receptionist).await;
    let admin = app.create_user(Role::Admin).await;
    let (patient_id, doctor_id) = patient_and_doctor(&app, &admin.token).await;

    let (_, created) = app
        .post(
            "/api/appointments",
            &receptionist.token,
            json!({
                "patient_id": patient_id,
                "doctor_id": doctor_id,
                "date": "2026-11-02",
                "time": "09:30"
            }),
        )
        .await;

    let (status, list) = app.get("/api/appointments", &receptionist.token).await;
    assert_eq!(status, StatusCode::OK);
    let first = &list.as_array().unwrap()[0];
    assert_eq!(first["patient_name"], "Jane Roe");
    assert_eq!(first["doctor_name"], "Dr. House");
    assert_eq!(first["time"], "09:30");

    let (status, fetched) = app
        .get(
            &format!("/api/appointments/{}", created["id"]),
            &receptionist.token,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], created["id"]);
    assert_eq!(fetched["doctor_name"], "Dr. House");
}

#[tokio::test]
async fn test_update_and_delete() {
    let app = setup_test_app().await;
    let admin = app.create_user(Role::Admin).await;
    let (patient_id, doctor_id) = patient_and_doctor(&app, &admin.token).await;

    let (_, created) = app
        .post(
            "/api/appointments",
            &admin.token,
            json!({ "patient_id": patient_id, "doctor_id": doctor_id, "date": "2026-11-02" }),
        )
        .await;
    let uri = format!("/api/appointments/{}", created["id"]);

    let (status, updated) = app
        .put(
            &uri,
            &admin.token,
            json!({
                "patient_id": patient_id,
                "doctor_id": doctor_id,
                "date": "2026-11-03",
                "status": "completed",
                "notes": "Follow up in a month"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["date"], "2026-11-03");
    assert_eq!(updated["status"], "completed");

    let (status, body) = app.delete(&uri, &admin.token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));

    let (status, body) = app.get(&uri, &admin.token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Appointment not found");

    let (status, _) = app.delete(&uri, &admin.token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_references_are_rejected() {
    let app = setup_test_app().await;
    let admin = app.create_user(Role::Admin).await;

    let (status, body) = app
        .post(
            "/api/appointments",
            &admin.token,
            json!({ "patient_id": 77, "doctor_id": 88, "date": "2026-11-02" }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Referenced record does not exist");
}

#[tokio::test]
async fn test_required_fields() {
    let app = setup_test_app().await;
    let admin = app.create_user(Role::Admin).await;

    let (status, body) = app
        .post(
            "/api/appointments",
            &admin.token,
            json!({ "doctor_id": 1, "date": "2026-11-02" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "patient_id is required");

    let (status, body) = app
        .post(
            "/api/appointments",
            &admin.token,
            json!({ "patient_id": 1, "doctor_id": 1, "date": "" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "date is required");
}

#[tokio::test]
async fn test_deleting_patient_cascades() {
    let app = setup_test_app().await;
    let admin = app.create_user(Role::Admin).await;
    let (patient_id, doctor_id) = patient_and_doctor(&app, &admin.token).await;

    app.post(
        "/api/appointments",
        &admin.token,
        json!({ "patient_id": patient_id, "doctor_id": doctor_id, "date": "2026-11-02" }),
    )
    .await;

    app.delete(&format!("/api/patients/{}", patient_id), &admin.token)
        .await;

    let (_, list) = app.get("/api/appointments", &admin.token).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_patient_may_book_but_not_cancel() {
    let app = setup_test_app().await;
    let admin = app.create_user(Role::Admin).await;
    let patient = app.create_user(Role::Patient).await;
    let (patient_id, doctor_id) = patient_and_doctor(&app, &admin.token).await;

    let (status, created) = app
        .post(
            "/api/appointments",
            &patient.token,
            json!({ "patient_id": patient_id, "doctor_id": doctor_id, "date": "2026-11-02" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = app
        .delete(
            &format!("/api/appointments/{}", created["id"]),
            &patient.token,
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_malformed_id_is_bad_request() {
    let app = setup_test_app().await;
    let receptionist = app.create_user(Role::Receptionist).await;

    let (status, body) = app.get("/api/appointments/abc", &receptionist.token).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Invalid id" }));

    let (status, body) = app
        .put(
            "/api/appointments/-",
            &receptionist.token,
            json!({ "patient_id": 1, "doctor_id": 1, "date": "2026-11-02" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid id");

    let (status, body) = app
        .delete("/api/appointments/99999999999999999999", &receptionist.token)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid id");
}

#[tokio::test]
async fn test_malformed_id_is_still_gated() {
    let app = setup_test_app().await;
    let patient = app.create_user(Role::Patient).await;

    let (status, _) = app.delete("/api/appointments/abc", &patient.token).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = app
        .request(axum::http::Method::GET, "/api/appointments/abc", None, None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "Unauthorized" }));
}
