use thiserror::Error;

use std::io;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[cfg(feature = "json")]
    #[error("serde_json error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("calldata token {index}: {message}")]
    Calldata { index: usize, message: String },

    #[error("expected at least {expected} calldata arguments, found {found}")]
    ArgumentCount { expected: usize, found: usize },

    #[error("{0}")]
    Message(String),
}

pub type Result<T> = core::result::Result<T, Error>;
