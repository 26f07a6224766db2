//! Error handling for choreography sheet ingestion.
//!
//! Only fatal conditions live here: configuration problems and failures to
//! retrieve the source text. Rows that fail validation are not errors; they
//! are reported as [`Rejection`](crate::app::models::Rejection) values.

use thiserror::Error;

/// Result type alias for trip_sync operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Configuration is missing or malformed
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Transport failure while talking to the source (DNS, connection, body read)
    #[error("Failed to fetch '{url}': {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The source answered with a non-success status
    #[error("Source '{url}' responded with HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A report could not be rendered as JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a transport error for the given URL
    pub fn fetch(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Fetch {
            url: url.into(),
            source,
        }
    }

    /// Create a non-success status error
    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }
}
