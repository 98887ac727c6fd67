//! HTTP/REST API layer for the personas service.
//!
//! Axum-based JSON API under `/api/` with permissive CORS.

pub mod error;
pub mod handlers;
pub mod router;
