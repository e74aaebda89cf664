//! Router for the departments API

use axum::{Json, Router, routing::get};

use super::public::DepartmentsResponse;
use crate::ai::departments::DEPARTMENTS;
use crate::api::state::SharedState;

async fn departments_list() -> Json<DepartmentsResponse> {
    Json(DepartmentsResponse {
        departments: DEPARTMENTS.to_vec(),
    })
}

/// Create the departments router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", get(departments_list))
}
