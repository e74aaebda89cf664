//! The core models for managing a stateful chat with an LLM.
use crate::openai::Message;

/// Append-only, insertion ordered log of messages for one session.
#[derive(Default, Debug, Clone)]
pub struct Transcript(Vec<Message>);

impl Transcript {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn append(&mut self, msg: Message) {
        self.0.push(msg)
    }

    pub fn all(&self) -> &[Message] {
        &self.0
    }

    pub fn last(&self) -> Option<&Message> {
        self.0.last()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openai::Role;

    #[test]
    fn test_append_keeps_insertion_order() {
        let mut transcript = Transcript::new();
        transcript.append(Message::new(Role::Assistant, "first"));
        transcript.append(Message::new(Role::User, "second"));
        transcript.append(Message::new(Role::Assistant, "third"));

        let contents: Vec<&str> = transcript.iter().map(|m| m.content()).collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
        assert_eq!(transcript.last().unwrap().content(), "third");
    }

    #[test]
    fn test_append_does_not_deduplicate() {
        let mut transcript = Transcript::new();
        transcript.append(Message::new(Role::User, "same"));
        transcript.append(Message::new(Role::User, "same"));

        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.all()[0], transcript.all()[1]);
    }

    #[test]
    fn test_new_transcript_is_empty() {
        let transcript = Transcript::default();
        assert!(transcript.is_empty());
        assert!(transcript.last().is_none());
    }
}
