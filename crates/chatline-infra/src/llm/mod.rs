//! Inference backend clients.

pub mod ollama;
