//! Business logic and repository trait definitions for the personas service.
//!
//! This crate defines the "ports" (repository traits) that the infrastructure
//! layer implements, plus the services that validate input and assign ids and
//! timestamps. It depends only on `personas-types` -- never on
//! `personas-infra` or any database/IO crate.

pub mod repository;
pub mod service;
