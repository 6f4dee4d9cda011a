mod common;

use axum::http::StatusCode;
use common::setup_test_app;
use hms::hms_core::Role;
use serde_json::json;

#[tokio::test]
async fn test_patient_crud() {
    let app = setup_test_app().await;
    let nurse = app.create_user(Role::Nurse).await;

    let (status, created) = app
        .post(
            "/api/patients",
            &nurse.token,
            json!({ "name": "Ada Lovelace", "age": 36, "gender": "female", "contact": "555-0100" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Ada Lovelace");
    assert_eq!(created["age"], 36);
    let id = created["id"].as_i64().unwrap();

    let (status, list) = app.get("/api/patients", &nurse.token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, updated) = app
        .put(
            &format!("/api/patients/{}", id),
            &nurse.token,
            json!({ "name": "Ada King", "age": 37 }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Ada King");
    assert_eq!(updated["age"], 37);
    assert!(updated["contact"].is_null());

    let (status, fetched) = app.get(&format!("/api/patients/{}", id), &nurse.token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Ada King");

    let (status, deleted) = app
        .delete(&format!("/api/patients/{}", id), &nurse.token)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, json!({ "success": true }));

    let (status, body) = app.get(&format!("/api/patients/{}", id), &nurse.token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Patient not found");
}

#[tokio::test]
async fn test_list_is_newest_first() {
    let app = setup_test_app().await;
    let admin = app.create_user(Role::Admin).await;

    for name in ["First", "Second", "Third"] {
        app.post("/api/doctors", &admin.token, json!({ "name": name }))
            .await;
    }

    let (status, list) = app.get("/api/doctors", &admin.token).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Third", "Second", "First"]);
}

#[tokio::test]
async fn test_missing_records_are_not_found() {
    let app = setup_test_app().await;
    let admin = app.create_user(Role::Admin).await;

    let (status, body) = app.get("/api/medicines/999", &admin.token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Medicine not found");

    let (status, _) = app
        .put("/api/staff/999", &admin.token, json!({ "name": "Ghost", "role": "Porter" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = app.delete("/api/lab-tests/999", &admin.token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Lab test not found");
}

#[tokio::test]
async fn test_malformed_id_is_bad_request() {
    let app = setup_test_app().await;
    let admin = app.create_user(Role::Admin).await;

    let (status, body) = app.get("/api/patients/abc", &admin.token).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
    assert_eq!(body, json!({ "error": "Invalid id" }));

    let (status, body) = app
        .put("/api/doctors/1.5", &admin.token, json!({ "name": "Dr. Who" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid id");

    let (status, body) = app
        .delete("/api/invoices/99999999999999999999", &admin.token)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid id");
}

#[tokio::test]
async fn test_medicine_defaults_and_validation() {
    let app = setup_test_app().await;
    let pharmacist = app.create_user(Role::Pharmacist).await;

    let (status, medicine) = app
        .post("/api/medicines", &pharmacist.token, json!({ "name": "Aspirin" }))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(medicine["stock"], 0);
    assert_eq!(medicine["price"], 0.0);

    let (status, body) = app
        .post(
            "/api/medicines",
            &pharmacist.token,
            json!({ "name": "Aspirin", "stock": -1 }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "stock cannot be negative");

    let (status, body) = app
        .post("/api/medicines", &pharmacist.token, json!({ "stock": 5 }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "name is required");
}

#[tokio::test]
async fn test_lab_test_with_unknown_patient_is_rejected() {
    let app = setup_test_app().await;
    let technician = app.create_user(Role::LabTechnician).await;

    let (status, body) = app
        .post(
            "/api/lab-tests",
            &technician.token,
            json!({ "name": "CBC", "status": "pending", "patient_id": 4242 }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Referenced record does not exist");
}

#[tokio::test]
async fn test_lab_test_report_url_must_be_valid() {
    let app = setup_test_app().await;
    let doctor = app.create_user(Role::Doctor).await;

    let (status, _) = app
        .post(
            "/api/lab-tests",
            &doctor.token,
            json!({ "name": "X-ray", "status": "done", "report_url": "not a url" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, created) = app
        .post(
            "/api/lab-tests",
            &doctor.token,
            json!({
                "name": "X-ray",
                "status": "done",
                "report_url": "https://reports.hms.local/xray/1.pdf"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(created["patient_id"].is_null());
}

#[tokio::test]
async fn test_invoice_and_staff_crud() {
    let app = setup_test_app().await;
    let admin = app.create_user(Role::Admin).await;

    let (_, patient) = app
        .post("/api/patients", &admin.token, json!({ "name": "Billed" }))
        .await;

    let (status, invoice) = app
        .post(
            "/api/invoices",
            &admin.token,
            json!({ "patient_id": patient["id"], "total": 120.5, "status": "pending" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(invoice["total"], 120.5);

    let (status, invoice) = app
        .put(
            &format!("/api/invoices/{}", invoice["id"]),
            &admin.token,
            json!({ "patient_id": patient["id"], "total": 120.5, "status": "paid" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(invoice["status"], "paid");

    let (status, member) = app
        .post(
            "/api/staff",
            &admin.token,
            json!({ "name": "Sam", "role": "Porter", "shift": "night" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(member["shift"], "night");
}

#[tokio::test]
async fn test_deleting_patient_detaches_invoices() {
    let app = setup_test_app().await;
    let admin = app.create_user(Role::Admin).await;

    let (_, patient) = app
        .post("/api/patients", &admin.token, json!({ "name": "Leaving" }))
        .await;
    let (_, invoice) = app
        .post(
            "/api/invoices",
            &admin.token,
            json!({ "patient_id": patient["id"], "total": 10.0, "status": "pending" }),
        )
        .await;

    app.delete(&format!("/api/patients/{}", patient["id"]), &admin.token)
        .await;

    let (status, invoice) = app
        .get(&format!("/api/invoices/{}", invoice["id"]), &admin.token)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(invoice["patient_id"].is_null());
}

#[tokio::test]
async fn test_report_summary() {
    let app = setup_test_app().await;
    let admin = app.create_user(Role::Admin).await;

    app.post("/api/patients", &admin.token, json!({ "name": "One" }))
        .await;
    app.post(
        "/api/invoices",
        &admin.token,
        json!({ "total": 50.0, "status": "paid" }),
    )
    .await;
    app.post(
        "/api/invoices",
        &admin.token,
        json!({ "total": 20.0, "status": "pending" }),
    )
    .await;

    let (status, summary) = app.get("/api/reports/summary", &admin.token).await;

    assert_eq!(status, StatusCode::OK);
    // Seeded admin plus the test admin.
    assert_eq!(summary["users"], 2);
    assert_eq!(summary["patients"], 1);
    assert_eq!(summary["invoices"], 2);
    assert_eq!(summary["billed_total"], 70.0);
    assert_eq!(summary["outstanding_total"], 20.0);
}
