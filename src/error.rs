// src/error.rs

use thiserror::Error;

/// Failures at the transport boundary. The command handler itself cannot fail.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("failed to decode client frame: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to encode server message: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("invalid listen address: {0}")]
    InvalidAddress(String),
}
