//! Error types for the YellowBridge client.
//!
//! Uses `thiserror` for structured error definitions. Internally every
//! failure is a [`ScraperError`]; the public lookup operations collapse it
//! into a [`LookupError`] that only carries a message.

use thiserror::Error;

/// Internal error type for session, fetch and parse operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScraperError {
    /// The landing page did not hand out a session cookie
    #[error("{0}")]
    Session(String),

    /// HTTP request failed (transport error, timeout or non-2xx status)
    #[error("HTTP request failed: {0}")]
    Fetch(String),

    /// URL parsing or building failed
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A CSS selector could not be compiled
    #[error("Invalid selector: {0}")]
    Selector(String),
}

impl ScraperError {
    /// The landing page response carried no usable cookie.
    pub fn no_cookie() -> Self {
        ScraperError::Session("No YellowBridge cookie".to_string())
    }
}

impl From<reqwest::Error> for ScraperError {
    fn from(err: reqwest::Error) -> Self {
        ScraperError::Fetch(err.to_string())
    }
}

impl From<url::ParseError> for ScraperError {
    fn from(err: url::ParseError) -> Self {
        ScraperError::InvalidUrl(err.to_string())
    }
}

/// Error returned by every public lookup.
///
/// Only the human-readable message survives; callers cannot tell a network
/// outage from a missing cookie without inspecting the text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct LookupError {
    pub message: String,
}

impl LookupError {
    /// Creates an error from a message, substituting a placeholder for empty ones.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.is_empty() {
            Self {
                message: "Unknown error".to_string(),
            }
        } else {
            Self { message }
        }
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ScraperError> for LookupError {
    fn from(err: ScraperError) -> Self {
        LookupError::new(err.to_string())
    }
}

/// Error type for configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse config file
    #[error("Failed to parse config: {0}")]
    ParseError(String),

    /// Invalid configuration value
    #[error("Invalid config value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Config directory not found
    #[error("Could not determine config directory")]
    NoConfigDir,
}
