use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::get_summary;

pub fn init_reports_router() -> Router<AppState> {
    Router::new().route("/summary", get(get_summary))
}
