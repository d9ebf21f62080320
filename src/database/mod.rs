//! Database access.
//!
//! Handles migrations and the single PostgreSQL connection the demo runs on.

pub mod connection;

pub use connection::{close, connect, run_migrations};
