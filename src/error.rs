//! Unified error types for chatlens.
//!
//! Parsing a transcript can fail in exactly two ways: the text contains no
//! timestamp delimiter at all ([`ChatlensError::EmptyInput`]), or the
//! timestamps cannot be read under either supported date order
//! ([`ChatlensError::Format`]). Both are fatal for the whole ingestion.
//!
//! The remaining variants come from the edges of the crate (file reading in
//! the CLI, output writers) and never from the analysis functions, which are
//! infallible over a parsed [`Transcript`](crate::Transcript).

use std::io;

use thiserror::Error;

use crate::parsing::DateOrder;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::Transcript;
///
/// fn load(text: &str) -> Result<Transcript> {
///     chatlens::parse_transcript(text)
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// The timestamps of the transcript could not be parsed.
    ///
    /// Raised when at least one timestamp fails under month-first order and at
    /// least one (possibly different) timestamp fails under day-first order.
    /// Transcripts mixing both conventions end up here.
    #[error(
        "Date format not recognized: '{timestamp}' is not a valid {order_tried} timestamp. \
         Please ensure the chat export is in a standard format"
    )]
    Format {
        /// The last date order attempted
        order_tried: DateOrder,
        /// The first timestamp that failed under that order
        timestamp: String,
    },

    /// No timestamp delimiter was found anywhere in the input.
    ///
    /// Callers should treat this as "nothing to analyze".
    #[error("No messages found: the input contains no '<date>, <time> - ' delimiters")]
    EmptyInput,

    /// An I/O error occurred (CLI and file writers only).
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input file is not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// A sender-share threshold outside `0.0..=1.0`.
    #[error("Invalid threshold {value}: expected a fraction between 0.0 and 1.0")]
    InvalidThreshold {
        /// The rejected value
        value: f64,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::string::FromUtf8Error> for ChatlensError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatlensError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Creates a format error for a timestamp rejected under `order`.
    pub fn format(order_tried: DateOrder, timestamp: impl Into<String>) -> Self {
        ChatlensError::Format {
            order_tried,
            timestamp: timestamp.into(),
        }
    }

    /// Creates a UTF-8 error with context.
    pub fn utf8(context: impl Into<String>, source: std::string::FromUtf8Error) -> Self {
        ChatlensError::Utf8 {
            context: context.into(),
            source,
        }
    }

    /// Creates an invalid threshold error.
    pub fn invalid_threshold(value: f64) -> Self {
        ChatlensError::InvalidThreshold { value }
    }

    /// Returns `true` if this is a date format error.
    pub fn is_format(&self) -> bool {
        matches!(self, ChatlensError::Format { .. })
    }

    /// Returns `true` if the input contained no messages.
    pub fn is_empty_input(&self) -> bool {
        matches!(self, ChatlensError::EmptyInput)
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_display() {
        let err = ChatlensError::format(DateOrder::DayFirst, "13/13/24, 10:00");
        let display = err.to_string();
        assert!(display.contains("Date format not recognized"));
        assert!(display.contains("13/13/24, 10:00"));
        assert!(display.contains("day-first"));
    }

    #[test]
    fn test_empty_input_display() {
        let err = ChatlensError::EmptyInput;
        assert!(err.to_string().contains("No messages found"));
    }

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = ChatlensError::from(io_err);
        let display = err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_utf8_error_display() {
        let utf8_err = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err = ChatlensError::utf8("reading chat.txt", utf8_err);
        let display = err.to_string();
        assert!(display.contains("UTF-8"));
        assert!(display.contains("chat.txt"));
    }

    #[test]
    fn test_invalid_threshold_display() {
        let err = ChatlensError::invalid_threshold(1.5);
        assert!(err.to_string().contains("1.5"));
    }

    #[test]
    fn test_is_methods() {
        let err = ChatlensError::format(DateOrder::MonthFirst, "x");
        assert!(err.is_format());
        assert!(!err.is_empty_input());
        assert!(!err.is_io());

        let err = ChatlensError::EmptyInput;
        assert!(err.is_empty_input());
        assert!(!err.is_format());

        let err = ChatlensError::Io(io::Error::new(io::ErrorKind::NotFound, ""));
        assert!(err.is_io());
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err = ChatlensError::from(io_err);
        assert!(err.source().is_some());
        assert!(ChatlensError::EmptyInput.source().is_none());
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: ChatlensError = json_err.into();
        assert!(err.to_string().contains("JSON error"));
    }

    #[cfg(feature = "csv-output")]
    #[test]
    fn test_from_csv_error() {
        let csv_err = csv::Error::from(io::Error::other("test"));
        let err: ChatlensError = csv_err.into();
        assert!(err.to_string().contains("CSV error"));
    }
}
