use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{
    create_appointment, delete_appointment, get_appointment, get_appointments, update_appointment,
};

pub fn init_appointments_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_appointments).post(create_appointment))
        .route(
            "/{id}",
            get(get_appointment)
                .put(update_appointment)
                .delete(delete_appointment),
        )
}
