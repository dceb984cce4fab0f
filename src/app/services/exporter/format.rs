//! Export formats and the serialized payload

use crate::constants::EXPORT_FILE_STEM;
use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Supported export serializations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    /// Format name as accepted by `from_str`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }

    /// MIME type of the serialized payload
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Csv => "text/csv",
        }
    }

    /// Attachment file name for a download of this format
    pub fn file_name(&self) -> String {
        format!("{}.{}", EXPORT_FILE_STEM, self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    /// Parse a format name; names are matched exactly
    fn from_str(format: &str) -> Result<Self> {
        match format {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(Error::invalid_format(other)),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serialized export ready to be written or sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    pub format: ExportFormat,
    pub bytes: Vec<u8>,
}

impl ExportPayload {
    pub fn content_type(&self) -> &'static str {
        self.format.content_type()
    }

    pub fn file_name(&self) -> String {
        self.format.file_name()
    }

    /// Payload size in bytes
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    /// Take ownership of the serialized bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
