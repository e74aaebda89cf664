//! The boundary to the hosted model. Everything that can go wrong on
//! the other side of it collapses into one error type.
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use super::core::{Message, completion, completion_content};
use crate::core::AppConfig;

/// Any failure to get a reply: network, auth, quota, timeout, or a
/// response without content.
#[derive(Debug, Error)]
#[error("Remote call failed: {0}")]
pub struct RemoteCallFailure(String);

impl RemoteCallFailure {
    pub fn new(reason: &str) -> Self {
        Self(reason.to_string())
    }
}

impl From<anyhow::Error> for RemoteCallFailure {
    fn from(err: anyhow::Error) -> Self {
        Self(format!("{:#}", err))
    }
}

/// Sends a fully rendered prompt and returns the generated reply.
/// Implementations make exactly one attempt per call.
#[async_trait]
pub trait InferenceGateway: Send + Sync {
    async fn send(&self, prompt: &[Message]) -> Result<String, RemoteCallFailure>;
}

pub type SharedGateway = Arc<dyn InferenceGateway>;

#[derive(Clone, Debug)]
pub struct OpenAiGateway {
    api_hostname: String,
    api_key: String,
    model: String,
    timeout: Duration,
}

impl OpenAiGateway {
    pub fn new(api_hostname: &str, api_key: &str, model: &str, timeout: Duration) -> Self {
        Self {
            api_hostname: api_hostname.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            timeout,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            &config.llm_api_hostname,
            &config.llm_api_key,
            &config.llm_model,
            config.llm_timeout,
        )
    }
}

#[async_trait]
impl InferenceGateway for OpenAiGateway {
    async fn send(&self, prompt: &[Message]) -> Result<String, RemoteCallFailure> {
        let resp = completion(
            prompt,
            &self.api_hostname,
            &self.api_key,
            &self.model,
            self.timeout,
        )
        .await?;
        Ok(completion_content(&resp)?)
    }
}
