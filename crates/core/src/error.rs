//! Error types shared across the workspace

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Input is empty")]
    EmptyInput,

    #[error("Unknown location: {0}")]
    UnknownLocation(String),

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
