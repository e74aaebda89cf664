mod core;
mod gateway;

pub use self::core::{Message, Role, TEMPERATURE, completion, completion_content};
pub use self::gateway::{InferenceGateway, OpenAiGateway, RemoteCallFailure, SharedGateway};
