//! Live sessions keyed by session ID. Nothing here outlives the
//! process. Sessions idle for longer than the TTL are evicted.
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use super::core::Session;
use crate::openai::SharedGateway;

/// A session guarded for the duration of a turn. Holding the lock is
/// what makes a session "processing"; a second turn must not wait on
/// it.
pub type SharedSession = Arc<Mutex<Session>>;

struct Entry {
    session: SharedSession,
    last_active: Instant,
}

pub struct SessionRegistry {
    gateway: SharedGateway,
    system_prompt: String,
    sessions: HashMap<String, Entry>,
}

impl SessionRegistry {
    pub fn new(gateway: SharedGateway, system_prompt: &str) -> Self {
        Self {
            gateway,
            system_prompt: system_prompt.to_string(),
            sessions: HashMap::new(),
        }
    }

    fn insert(&mut self, session: Session) -> (String, SharedSession) {
        let id = session.id.clone();
        let shared = Arc::new(Mutex::new(session));
        self.sessions.insert(
            id.clone(),
            Entry {
                session: Arc::clone(&shared),
                last_active: Instant::now(),
            },
        );
        tracing::info!("Created chat session {}", id);
        (id, shared)
    }

    /// Start a new session with a generated ID.
    pub fn create(&mut self) -> (String, SharedSession) {
        let session = Session::builder(Arc::clone(&self.gateway), &self.system_prompt).build();
        self.insert(session)
    }

    /// Look up a session and mark it as active.
    pub fn get(&mut self, id: &str) -> Option<SharedSession> {
        self.sessions.get_mut(id).map(|entry| {
            entry.last_active = Instant::now();
            Arc::clone(&entry.session)
        })
    }

    /// Look up the session or construct it on first contact. An
    /// unknown ID is kept so the caller can keep using it.
    pub fn get_or_create(&mut self, id: Option<&str>) -> (String, SharedSession) {
        match id {
            Some(id) => {
                if let Some(session) = self.get(id) {
                    return (id.to_string(), session);
                }
                let session = Session::builder(Arc::clone(&self.gateway), &self.system_prompt)
                    .id(id)
                    .build();
                self.insert(session)
            }
            None => self.create(),
        }
    }

    /// End a session. Its transcript is dropped once no turn holds it.
    pub fn remove(&mut self, id: &str) -> bool {
        let removed = self.sessions.remove(id).is_some();
        if removed {
            tracing::info!("Ended chat session {}", id);
        }
        removed
    }

    /// End every session that has been inactive for longer than `ttl`
    /// as of `now`. Sessions with a turn in flight are kept. Returns
    /// the number of sessions ended.
    pub fn evict_idle(&mut self, now: Instant, ttl: Duration) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|id, entry| {
            let idle = now.saturating_duration_since(entry.last_active) > ttl;
            let in_flight = entry.session.try_lock().is_err();
            if idle && !in_flight {
                tracing::info!("Ended idle chat session {}", id);
                return false;
            }
            true
        });
        before - self.sessions.len()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
