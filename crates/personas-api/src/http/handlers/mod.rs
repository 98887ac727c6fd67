//! HTTP request handlers for the REST API.

pub mod company;
pub mod message;
pub mod persona;
