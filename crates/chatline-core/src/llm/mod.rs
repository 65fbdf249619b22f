//! Inference backend abstraction.

pub mod client;
