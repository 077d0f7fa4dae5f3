//! Error types for the Inertia environment abstraction.

use thiserror::Error;

/// Errors that can occur in the environment abstraction layer.
#[derive(Debug, Error)]
pub enum EnvError {
    /// Registering an OS signal handler failed
    #[error("Failed to install {signal} handler: {reason}")]
    SignalHandler {
        signal: &'static str,
        reason: String,
    },
}

impl EnvError {
    /// Creates a signal handler error.
    pub fn signal(signal: &'static str, err: impl std::fmt::Display) -> Self {
        Self::SignalHandler {
            signal,
            reason: err.to_string(),
        }
    }
}
