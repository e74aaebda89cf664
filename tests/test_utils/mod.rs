//! Test utilities for integration tests
#![allow(dead_code)]
use std::sync::{Arc, Mutex, RwLock};

use async_trait::async_trait;
use axum::{Router, body::Body};

use medibot::api::{AppState, SharedState, app};
use medibot::openai::{InferenceGateway, Message, RemoteCallFailure, SharedGateway};

/// Always replies with the same text and records each prompt.
pub struct StubGateway {
    reply: Option<String>,
    pub prompts: Mutex<Vec<Vec<Message>>>,
}

impl StubGateway {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(reply.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    /// Every call fails as if the upstream request timed out.
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl InferenceGateway for StubGateway {
    async fn send(&self, prompt: &[Message]) -> Result<String, RemoteCallFailure> {
        self.prompts.lock().unwrap().push(prompt.to_vec());
        match &self.reply {
            Some(reply) => Ok(reply.clone()),
            None => Err(RemoteCallFailure::new("operation timed out")),
        }
    }
}

/// Creates a test application router backed by `gateway`. The shared
/// state is returned too so tests can inspect sessions directly.
pub fn test_app(gateway: SharedGateway) -> (Router, SharedState) {
    let app_state = AppState::new(gateway, "You are a medical assistant.");
    let shared_state = Arc::new(RwLock::new(app_state));
    (app(Arc::clone(&shared_state)), shared_state)
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not utf8")
}

pub async fn body_to_json(body: Body) -> serde_json::Value {
    serde_json::from_str(&body_to_string(body).await).expect("Body is not json")
}
