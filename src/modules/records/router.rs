use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{doctors, invoices, lab_tests, medicines, patients, staff};

macro_rules! record_router {
    ($module:ident) => {
        Router::new()
            .route("/", get($module::list).post($module::create))
            .route(
                "/{id}",
                get($module::get_one)
                    .put($module::update)
                    .delete($module::delete),
            )
    };
}

pub fn init_patients_router() -> Router<AppState> {
    record_router!(patients)
}

pub fn init_doctors_router() -> Router<AppState> {
    record_router!(doctors)
}

pub fn init_medicines_router() -> Router<AppState> {
    record_router!(medicines)
}

pub fn init_staff_router() -> Router<AppState> {
    record_router!(staff)
}

pub fn init_lab_tests_router() -> Router<AppState> {
    record_router!(lab_tests)
}

pub fn init_invoices_router() -> Router<AppState> {
    record_router!(invoices)
}
