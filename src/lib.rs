//! Utility Knowledge Library
//!
//! A Rust library for serving read-only equipment and maintenance records
//! loaded from a CSV equipment inventory and a JSON maintenance log.
//!
//! This library provides tools for:
//! - Loading and normalizing both record sets (column renames, flexible date
//!   formats, missing-value markers) with fail-fast validation
//! - Listing, looking up and free-text searching the loaded records
//! - Extracting distinct metadata (equipment models, locations, maintenance types)
//! - Joining equipment with its maintenance history and exporting to JSON or CSV

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod exporter;
        pub mod knowledge_base;
        pub mod record_loader;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Equipment, MaintenanceLog};
pub use app::services::exporter::{ExportFormat, ExportPayload, ExportRecord};
pub use app::services::knowledge_base::{KnowledgeBase, KnowledgeInfo, SearchResults};
pub use config::Config;

/// Result type alias for utility knowledge operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for loading, querying and exporting records
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A record failed validation while loading
    #[error("Validation error in {record}, field '{field}': {message}")]
    Validation {
        record: String,
        field: String,
        message: String,
    },

    /// A listing or query produced no results
    #[error("Not found: {what}")]
    NotFound { what: String },

    /// Unsupported export format
    #[error("Invalid format '{format}'. Use 'json' or 'csv'")]
    InvalidFormat { format: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Tabular source could not be read
    #[error("CSV reading error: {message}")]
    Polars {
        message: String,
        #[source]
        source: polars::error::PolarsError,
    },

    /// JSON decoding or encoding failed
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// CSV writing failed
    #[error("CSV writing error: {message}")]
    Csv {
        message: String,
        #[source]
        source: csv::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create a validation error for a field of a record
    pub fn validation(
        record: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Validation {
            record: record.into(),
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Create an invalid export format error
    pub fn invalid_format(format: impl Into<String>) -> Self {
        Self::InvalidFormat {
            format: format.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a tabular reading error with context
    pub fn polars(message: impl Into<String>, source: polars::error::PolarsError) -> Self {
        Self::Polars {
            message: message.into(),
            source,
        }
    }

    /// Create a JSON error with context
    pub fn json(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV writing error with context
    pub fn csv(message: impl Into<String>, source: csv::Error) -> Self {
        Self::Csv {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// True when a query or listing simply had nothing to return
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// True for outcomes caused by the caller's input rather than an internal failure
    ///
    /// An HTTP adapter maps these to 4xx responses (404 for not found, 400 for
    /// an invalid export format); everything else is a server-side failure.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::InvalidFormat { .. })
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<polars::error::PolarsError> for Error {
    fn from(error: polars::error::PolarsError) -> Self {
        Self::Polars {
            message: "Reading tabular data failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json {
            message: "JSON processing failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::Csv {
            message: "CSV writing failed".to_string(),
            source: error,
        }
    }
}
