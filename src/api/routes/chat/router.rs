//! Router for the chat API

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};

use super::public;
use crate::ai::chat::is_submittable;
use crate::api::public::ApiError;
use crate::api::state::SharedState;

/// Start a new chat session
async fn chat_session_create(State(state): State<SharedState>) -> impl IntoResponse {
    let (session_id, session) = state
        .write()
        .expect("Unable to write shared state")
        .sessions
        .create();
    let transcript = session.lock().await.transcript().to_vec();

    (
        StatusCode::CREATED,
        Json(public::ChatTranscriptResponse {
            session_id,
            transcript,
        }),
    )
}

/// Get the transcript of a chat session
async fn chat_session(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Response {
    let session = state
        .write()
        .expect("Unable to write shared state")
        .sessions
        .get(&id);

    let Some(session) = session else {
        return (StatusCode::NOT_FOUND, format!("Chat session {} not found", id)).into_response();
    };
    let transcript = session.lock().await.transcript().to_vec();

    Json(public::ChatTranscriptResponse {
        session_id: id,
        transcript,
    })
    .into_response()
}

/// End a chat session and discard its transcript
async fn chat_session_delete(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> StatusCode {
    let removed = state
        .write()
        .expect("Unable to write shared state")
        .sessions
        .remove(&id);

    if removed {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

/// Send the next message in a chat session, creating the session on
/// first contact
async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<public::ChatRequest>,
) -> Result<Response, ApiError> {
    if !is_submittable(&payload.message) {
        return Ok((StatusCode::BAD_REQUEST, "Message must not be empty").into_response());
    }

    let (session_id, session) = state
        .write()
        .expect("Unable to write shared state")
        .sessions
        .get_or_create(payload.session_id.as_deref());

    // Only one turn per session at a time. The next message has to
    // wait for the reply rather than queue behind it.
    let Ok(mut turn) = session.try_lock_owned() else {
        tracing::warn!("Rejected message for busy chat session {}", session_id);
        return Ok((
            StatusCode::CONFLICT,
            format!("Chat session {} is still processing a message", session_id),
        )
            .into_response());
    };

    // Turns always run to completion, even if the client goes away
    let resp = tokio::spawn(async move {
        let reply = turn.next_msg(&payload.message).await;
        public::ChatResponse {
            session_id: turn.id.clone(),
            reply: reply.content().to_string(),
            transcript: turn.transcript().to_vec(),
        }
    })
    .await?;

    Ok(Json(resp).into_response())
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", post(chat_handler))
        .route("/sessions", post(chat_session_create))
        .route("/{id}", get(chat_session).delete(chat_session_delete))
}
