//! Session manager for handling multiple sessions

use super::store::{ChatMessage, Role, Session};
use parking_lot::Mutex;
use std::collections::HashMap;

/// Manages conversation sessions keyed by session identifier.
///
/// Sessions live in memory only; they are created on first use and
/// dropped when the process exits. If two requests for the same key
/// race, last-write-wins.
#[derive(Debug)]
pub struct SessionManager {
    sessions: Mutex<HashMap<String, Session>>,
    max_history: usize,
}

impl SessionManager {
    /// Create a new session manager with the given per-session cap
    pub fn new(max_history: usize) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            max_history,
        }
    }

    /// Append a message to a session, creating the session if needed
    pub fn append(&self, key: &str, role: Role, content: impl Into<String>) {
        let mut sessions = self.sessions.lock();
        let session = sessions
            .entry(key.to_string())
            .or_insert_with(|| Session::new(key, self.max_history));
        session.push(role, content);
    }

    /// Ordered copy of a session's messages; empty if the session is unknown
    pub fn snapshot(&self, key: &str) -> Vec<ChatMessage> {
        let sessions = self.sessions.lock();
        sessions
            .get(key)
            .map(|s| s.snapshot().to_vec())
            .unwrap_or_default()
    }

    /// Number of messages in a session
    pub fn len(&self, key: &str) -> usize {
        let sessions = self.sessions.lock();
        sessions.get(key).map(|s| s.len()).unwrap_or(0)
    }

    /// Whether a session has no messages
    pub fn is_empty(&self, key: &str) -> bool {
        self.len(key) == 0
    }

    /// Clear a session's messages
    pub fn clear(&self, key: &str) {
        let mut sessions = self.sessions.lock();
        if let Some(session) = sessions.get_mut(key) {
            session.clear();
        }
    }
}
