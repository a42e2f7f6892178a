// src/error.rs

//! Crate-wide error type

use thiserror::Error;

/// Errors produced by the recipe library
#[derive(Error, Debug)]
pub enum Error {
    /// Local file could not be read
    #[error("I/O error: {0}")]
    IoError(String),

    /// Remote dataset could not be fetched
    #[error("Download error: {0}")]
    DownloadError(String),

    /// Dataset or event text could not be decoded
    #[error("Parse error: {0}")]
    ParseError(String),

    /// A client or other long-lived resource failed to initialize
    #[error("Initialization error: {0}")]
    InitError(String),

    /// Configuration file problem
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Recipe output could not be written
    #[error("Render error: {0}")]
    RenderError(String),

    /// A session event line could not be understood
    #[error("Invalid event: {0}")]
    InvalidEvent(String),
}

/// Result alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;
