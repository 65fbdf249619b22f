//! Chat turn pipeline: prompt construction and the orchestrating service.

pub mod prompt;
pub mod service;
