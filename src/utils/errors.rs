//! Error types of the demo runner.
//!
//! The taxonomy is deliberately small: configuration errors abort before the
//! migration phase, migration errors before the connection phase, and any
//! database error rolls back the whole demo transaction. Everything bubbles
//! up to `main`, which logs and exits non-zero; there is no per-step
//! recovery.

use thiserror::Error;

/// Errors surfaced by the demo runner.
#[derive(Error, Debug)]
pub enum DemoError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Typed result for operations that can fail.
pub type DemoResult<T> = Result<T, DemoError>;
