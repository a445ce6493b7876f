/*!
 * Error types for the emojimd application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when fetching the emoji table
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure (DNS, timeout, connection refused)
    #[error("Emoji table request failed: {0}")]
    RequestFailed(String),

    /// Endpoint answered with a non-200 status
    #[error("Emoji endpoint responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the endpoint
        message: String,
    },

    /// Response body was not a flat string-to-string JSON object
    #[error("Failed to parse emoji table response: {0}")]
    ParseError(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error fetching the emoji table
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
