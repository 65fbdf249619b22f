//! Infrastructure layer for Chatline.
//!
//! Contains implementations of the port traits defined in `chatline-core`:
//! SQLite conversation storage and the Ollama inference client, plus the
//! configuration loader.

pub mod config;
pub mod llm;
pub mod sqlite;
