//! Shared domain types for Chatline.
//!
//! Conversation turns, prompt history hints, inference outcomes, global
//! configuration, and the error enums shared by every layer.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod config;
pub mod conversation;
pub mod error;
pub mod llm;
