//! Core types and state for the AstraAI gateway
//!
//! This crate provides the error taxonomy, configuration, logging setup,
//! and session-scoped conversation history used by the other crates.

pub mod config;
pub mod error;
pub mod logging;
pub mod session;

pub use error::{Error, Result};
