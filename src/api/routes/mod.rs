//! API routes module

pub mod chat;
pub mod departments;

use axum::Router;

use crate::api::state::SharedState;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        .nest("/chat", chat::router())
        .nest("/departments", departments::router())
}
