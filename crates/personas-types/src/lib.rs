//! Shared domain types for the personas service.
//!
//! Company, Persona and Message records, the request/response shapes the HTTP
//! layer exchanges, configuration types, and the error enums used across the
//! workspace.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

#[macro_use]
mod id;

pub mod company;
pub mod config;
pub mod error;
pub mod message;
pub mod persona;
pub mod timestamp;
