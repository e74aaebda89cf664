use std::time::Duration;

use anyhow::{Error, Result, anyhow};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Sampling temperature sent with every completion request. Held
/// constant so replies stay consistent across sessions.
pub const TEMPERATURE: f64 = 0.3;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Role {
    #[serde(rename = "system")]
    System,
    #[serde(rename = "assistant")]
    Assistant,
    #[serde(rename = "user")]
    User,
}

/// A role tagged message. Messages are never edited after they are
/// created so the fields are only readable.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Self {
        Message {
            role,
            content: content.to_string(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Request a single chat completion from an OpenAI compatible API.
/// Exactly one request is made; a non-2xx status is an error.
pub async fn completion(
    messages: &[Message],
    api_hostname: &str,
    api_key: &str,
    model: &str,
    timeout: Duration,
) -> Result<Value, Error> {
    let payload = json!({
        "model": model,
        "messages": messages,
        "temperature": TEMPERATURE,
    });
    let url = format!("{}/chat/completions", api_hostname.trim_end_matches("/"));
    let response = reqwest::Client::new()
        .post(url)
        .bearer_auth(api_key)
        .header("Content-Type", "application/json")
        .timeout(timeout)
        .json(&payload)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(response)
}

/// Pull the reply text out of a completion response.
pub fn completion_content(resp: &Value) -> Result<String, Error> {
    resp["choices"][0]["message"]["content"]
        .as_str()
        .map(String::from)
        .ok_or(anyhow!("No message received. Resp:\n\n {}", resp))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_serializes_with_lowercase_role() {
        let msg = Message::new(Role::Assistant, "Hi");
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value, json!({"role": "assistant", "content": "Hi"}));
    }

    #[test]
    fn test_completion_content() {
        let resp = json!({
            "choices": [{"index": 0, "message": {"role": "assistant", "content": "See Dermatology."}}]
        });
        assert_eq!(completion_content(&resp).unwrap(), "See Dermatology.");
    }

    #[test]
    fn test_completion_content_missing() {
        let resp = json!({"error": {"message": "quota exceeded"}});
        let err = completion_content(&resp).unwrap_err();
        assert!(err.to_string().contains("No message received"));
    }
}
