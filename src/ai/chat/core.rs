use uuid::Uuid;

use super::models::Transcript;
use crate::ai::prompt::build_prompt;
use crate::openai::{Message, Role, SharedGateway};

pub const GREETING: &str = "Hello! I'm here to help you determine which medical department you should consult based on your symptoms. Could you please describe how you're feeling?";

pub const FALLBACK_REPLY: &str =
    "I'm having trouble processing your request. Please try again later.";

/// Only the empty string is dropped. Anything else, whitespace
/// included, is sent to the model as typed.
pub fn is_submittable(input: &str) -> bool {
    !input.is_empty()
}

/// One user's conversation with the assistant.
///
/// A session owns its transcript and its gateway binding. Each call
/// to `next_msg` runs one turn: the utterance is appended, the model
/// is called once, and exactly one assistant message is appended
/// whether or not the call succeeded.
///
/// Use `Session::builder()` to construct a valid `Session`.
pub struct Session {
    pub id: String,
    system_prompt: String,
    gateway: SharedGateway,
    transcript: Transcript,
}

impl Session {
    pub fn builder(gateway: SharedGateway, system_prompt: &str) -> SessionBuilder {
        SessionBuilder::new(gateway, system_prompt)
    }

    pub fn transcript(&self) -> &[Message] {
        self.transcript.all()
    }

    /// Runs the next turn and returns the assistant message that was
    /// appended. The future must be driven to completion, dropping it
    /// mid-call leaves the turn without a reply.
    pub async fn next_msg(&mut self, input: &str) -> Message {
        let prompt = build_prompt(&self.system_prompt, self.transcript.all(), input);
        self.transcript.append(Message::new(Role::User, input));

        let reply = match self.gateway.send(&prompt).await {
            Ok(reply) => {
                tracing::debug!(session_id = %self.id, "Received reply");
                reply
            }
            Err(e) => {
                tracing::error!("Chat session {} turn failed: {}", self.id, e);
                FALLBACK_REPLY.to_string()
            }
        };

        let msg = Message::new(Role::Assistant, &reply);
        self.transcript.append(msg.clone());
        msg
    }
}

pub struct SessionBuilder {
    id: Option<String>,
    system_prompt: String,
    gateway: SharedGateway,
}

impl SessionBuilder {
    pub fn new(gateway: SharedGateway, system_prompt: &str) -> Self {
        Self {
            id: None,
            system_prompt: system_prompt.to_string(),
            gateway,
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Every session starts with the greeting as its only message.
    pub fn build(self) -> Session {
        let mut transcript = Transcript::new();
        transcript.append(Message::new(Role::Assistant, GREETING));

        Session {
            id: self.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            system_prompt: self.system_prompt,
            gateway: self.gateway,
            transcript,
        }
    }
}
