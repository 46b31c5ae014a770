//! Session data structures

use serde::{Deserialize, Serialize};

/// Role of a message sender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Label used when rendering a message into a prompt
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A chat message, immutable once created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role (user, assistant)
    pub role: Role,
    /// Message content
    pub content: String,
}

impl ChatMessage {
    /// Create a new chat message
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// A conversation session holding a bounded message log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Session key
    pub key: String,
    /// Messages in the session, oldest first
    messages: Vec<ChatMessage>,
    /// Maximum messages retained; oldest are evicted first
    max_history: usize,
}

impl Session {
    /// Create a new empty session
    pub fn new(key: impl Into<String>, max_history: usize) -> Self {
        Self {
            key: key.into(),
            messages: Vec::new(),
            max_history,
        }
    }

    /// Append a message, evicting from the front once over the cap
    pub fn push(&mut self, role: Role, content: impl Into<String>) {
        self.messages.push(ChatMessage::new(role, content));
        if self.messages.len() > self.max_history {
            let excess = self.messages.len() - self.max_history;
            self.messages.drain(..excess);
        }
    }

    /// Current ordered messages (read-only view)
    pub fn snapshot(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Number of messages currently held
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the session holds no messages
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Clear all messages
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}
