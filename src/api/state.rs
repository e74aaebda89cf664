use std::sync::{Arc, RwLock};

use crate::ai::chat::SessionRegistry;
use crate::openai::SharedGateway;

pub type SharedState = Arc<RwLock<AppState>>;

pub struct AppState {
    pub sessions: SessionRegistry,
}

impl AppState {
    pub fn new(gateway: SharedGateway, system_prompt: &str) -> Self {
        Self {
            sessions: SessionRegistry::new(gateway, system_prompt),
        }
    }
}
