//! Infrastructure layer for the personas service.
//!
//! Contains implementations of the repository traits defined in
//! `personas-core` (SQLite via sqlx) and the configuration loader.

pub mod config;
pub mod sqlite;
