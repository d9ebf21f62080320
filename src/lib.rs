//! Demonstration client for a car-dealership schema.
//!
//! Runs the schema migrations, opens a single PostgreSQL connection and
//! executes a fixed six-step insert/select/update/delete sequence inside one
//! transaction: commit when every step succeeds, full rollback on the first
//! failure.

pub mod config;
pub mod database;
pub mod demo;
pub mod models;
pub mod utils;
