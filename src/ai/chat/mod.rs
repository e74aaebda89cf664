mod core;
mod models;
mod registry;

pub use self::core::{FALLBACK_REPLY, GREETING, Session, SessionBuilder, is_submittable};
pub use self::models::Transcript;
pub use self::registry::{SessionRegistry, SharedSession};
