//! Repository trait definitions (ports).
//!
//! These traits define the storage interface that the infrastructure layer
//! (personas-infra) implements. The core crate never depends on any
//! specific storage technology.

pub mod company;
pub mod message;
pub mod persona;
