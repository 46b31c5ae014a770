//! Session-scoped conversation history
//!
//! Each session keeps a bounded, ordered log of role-tagged messages
//! used to give the provider conversational context.

pub mod manager;
pub mod store;

pub use manager::SessionManager;
pub use store::{ChatMessage, Role, Session};
