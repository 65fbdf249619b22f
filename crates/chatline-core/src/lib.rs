//! Business logic and port trait definitions for Chatline.
//!
//! This crate defines the "ports" (inference and conversation storage traits)
//! that the infrastructure layer implements, plus the prompt builder and chat
//! service that drive them. It depends only on `chatline-types` -- never on
//! `chatline-infra` or any database/IO crate.

pub mod chat;
pub mod llm;
pub mod repository;
