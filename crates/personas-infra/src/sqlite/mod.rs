//! SQLite storage layer.
//!
//! Repository implementations backed by SQLite with WAL mode and split
//! read/write connection pools.

mod codec;

pub mod company;
pub mod message;
pub mod persona;
pub mod pool;
