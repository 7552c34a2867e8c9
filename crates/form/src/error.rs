//! Error types.
//!
//! Field validation failures are not errors: they are
//! [`ValidationResult`](crate::result::ValidationResult) values. The enums here
//! cover configuration loading, the persistence port, runtime wiring, and
//! logging setup.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or checking a [`PolicyConfig`](crate::config::PolicyConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The policy file could not be read.
    #[error("failed to read policy file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The policy document is not valid JSON for a `PolicyConfig`.
    #[error("invalid policy document: {0}")]
    Json(#[from] serde_json::Error),

    /// A preset name that is neither `strict` nor `lenient`.
    #[error("unknown policy preset '{0}' (expected 'strict' or 'lenient')")]
    UnknownPreset(String),

    /// The policy parsed but breaks a constraint.
    #[error("invalid policy: {0}")]
    Invalid(String),
}

/// Errors from a [`KeyValueStore`](crate::ports::KeyValueStore).
///
/// The submission path logs these and carries on; they never reach the user.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Storage is disabled or absent in this environment.
    #[error("storage is unavailable")]
    Unavailable,

    /// The backing file could not be read or written.
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file holds something other than a JSON string map.
    #[error("storage file is corrupt: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors wiring a session to its runtime.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The redirect scheduler was created outside a tokio runtime.
    #[error("redirect scheduler needs a tokio runtime: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
}

/// Errors installing the tracing subscriber.
#[derive(Debug, Error)]
pub enum LogError {
    /// The filter directive did not parse.
    #[error("invalid log filter '{filter}': {reason}")]
    Filter { filter: String, reason: String },

    /// A global subscriber is already installed.
    #[error("a global tracing subscriber is already installed")]
    AlreadyInstalled,
}
