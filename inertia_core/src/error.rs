//! Errors raised by the agent runtime.

use thiserror::Error;

/// Errors that stop the tick loop.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The report sink rejected a write (e.g. stdout closed)
    #[error("Failed to write tick report: {0}")]
    Io(#[from] std::io::Error),
    
    /// A report could not be encoded as JSON
    #[error("Failed to encode tick report: {0}")]
    Encode(#[from] serde_json::Error),
}
