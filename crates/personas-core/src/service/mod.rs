//! Domain services.
//!
//! Each service is generic over its repository trait, validates incoming
//! requests, assigns ids and timestamps, and maps repository failures into
//! the domain error for its entity.

pub mod company;
pub mod message;
pub mod persona;
