pub mod chat;
pub mod departments;
pub mod prompt;
