//! HTTP/REST API layer for Chatline.
//!
//! Axum-based API under `/api/` with CORS, request tracing, and panic
//! containment. Response bodies follow the web client's flat JSON shapes.

pub mod error;
pub mod handlers;
pub mod router;
