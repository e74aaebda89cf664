//! Reusable prompts using Handlebars for templating. Handlebars adds
//! additional security controls since it can't do much out of the box
//! without registering your own helpers.

use std::fmt;

use anyhow::{Error, Result};
use handlebars::Handlebars;
use serde_json::json;

use crate::ai::departments::DEPARTMENTS;
use crate::openai::{Message, Role};

#[derive(Debug)]
pub enum Prompt {
    SymptomTriage,
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl From<Prompt> for String {
    fn from(item: Prompt) -> String {
        format!("{:?}", item)
    }
}

const SYMPTOM_TRIAGE_PROMPT: &str = r"You are a medical assistant chatbot designed to help patients identify which medical department
they should consult based on their symptoms. Your task is to:

1. Ask clarifying questions if symptoms are vague
2. Analyze the described symptoms
3. Recommend the most appropriate medical department(s)
4. Briefly explain your reasoning

Departments include:
{{#each departments}}
- {{name}} ({{focus}})
{{/each}}

Be professional and empathetic. If symptoms suggest an emergency, advise immediate medical attention.
";

pub fn templates<'a>() -> Result<Handlebars<'a>, Error> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    // Prompts are plain text, not HTML
    registry.register_escape_fn(handlebars::no_escape);
    registry.register_template_string(&Prompt::SymptomTriage.to_string(), SYMPTOM_TRIAGE_PROMPT)?;
    Ok(registry)
}

/// Render the system instruction with the department taxonomy.
pub fn render_system_prompt() -> Result<String, Error> {
    let rendered = templates()?.render(
        &Prompt::SymptomTriage.to_string(),
        &json!({ "departments": DEPARTMENTS }),
    )?;
    Ok(rendered)
}

/// Assemble the messages for the next completion: the system
/// instruction, every prior turn in order, then the new utterance.
pub fn build_prompt(system: &str, history: &[Message], input: &str) -> Vec<Message> {
    let mut prompt = Vec::with_capacity(history.len() + 2);
    prompt.push(Message::new(Role::System, system));
    prompt.extend_from_slice(history);
    prompt.push(Message::new(Role::User, input));
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_lists_every_department() {
        let prompt = render_system_prompt().unwrap();
        for dept in DEPARTMENTS.iter() {
            let line = format!("- {} ({})", dept.name, dept.focus);
            assert!(prompt.contains(&line), "Missing {}", line);
        }
        assert!(prompt.starts_with("You are a medical assistant chatbot"));
        assert!(prompt.contains("advise immediate medical attention"));
    }

    #[test]
    fn test_build_prompt_without_history() {
        let prompt = build_prompt("sys", &[], "my skin is itchy");

        assert_eq!(prompt.len(), 2);
        assert_eq!(prompt[0], Message::new(Role::System, "sys"));
        assert_eq!(prompt[1], Message::new(Role::User, "my skin is itchy"));
    }

    #[test]
    fn test_build_prompt_keeps_history_order() {
        let history = vec![
            Message::new(Role::Assistant, "Hello!"),
            Message::new(Role::User, "I have a headache"),
            Message::new(Role::Assistant, "How long has it lasted?"),
        ];
        let prompt = build_prompt("sys", &history, "Two days");

        assert_eq!(prompt.len(), 5);
        assert_eq!(prompt[0].role(), Role::System);
        assert_eq!(&prompt[1..4], history.as_slice());
        assert_eq!(prompt[4], Message::new(Role::User, "Two days"));
        let system_count = prompt.iter().filter(|m| m.role() == Role::System).count();
        assert_eq!(system_count, 1);
    }
}
