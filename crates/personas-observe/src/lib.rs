//! Observability setup for the personas service.

pub mod tracing_setup;
