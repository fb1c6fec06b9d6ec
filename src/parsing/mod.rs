//! Transcript parsing: tokenizer, timestamp normalizer and message classifier.
//!
//! [`TranscriptParser`] runs the three stages in order and builds the
//! [`Transcript`]:
//!
//! 1. [`tokenize`] splits the text at every `D/M/YY, H:MM - ` delimiter
//! 2. [`normalize_timestamps`] parses all timestamps under one [`DateOrder`]
//! 3. [`classify`] separates sender from content in every body
//!
//! # Example
//!
//! ```rust
//! use chatlens::parsing::{DateOrder, TranscriptParser};
//!
//! let text = "31/01/24, 10:00 - Alice: Hi\n31/01/24, 10:01 - Bob: Hello";
//! let transcript = TranscriptParser::new().parse_str(text)?;
//!
//! assert_eq!(transcript.len(), 2);
//! assert_eq!(transcript.date_order(), DateOrder::DayFirst);
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

mod classifier;
mod timestamp;
mod tokenizer;

pub use classifier::{
    Classified, GROUP_NOTIFICATION, MEDIA_PLACEHOLDER, MediaMatch, classify, contains_link,
    is_media_placeholder, mentions_media_placeholder,
};
pub use timestamp::{DateOrder, normalize_timestamps};
pub use tokenizer::{DELIMITER_PATTERN, RawEntry, tokenize};

use crate::config::ParserConfig;
use crate::error::{ChatlensError, Result};
use crate::record::Record;
use crate::transcript::Transcript;

/// Parser for exported chat transcripts.
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    config: ParserConfig,
}

impl TranscriptParser {
    /// Creates a parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses a whole transcript held in memory.
    ///
    /// # Errors
    ///
    /// - [`ChatlensError::EmptyInput`] if no delimiter occurs in `text`
    /// - [`ChatlensError::Format`] if the timestamps fit neither date order
    pub fn parse_str(&self, text: &str) -> Result<Transcript> {
        let entries = tokenize(text);
        if entries.is_empty() {
            return Err(ChatlensError::EmptyInput);
        }

        let raw_timestamps: Vec<&str> = entries.iter().map(|e| e.timestamp).collect();
        let (order, timestamps) = normalize_timestamps(&raw_timestamps)?;

        let records: Vec<Record> = entries
            .iter()
            .zip(timestamps)
            .map(|(entry, timestamp)| {
                let classified = classify(entry.body);
                Record::new(
                    timestamp,
                    classified.sender_or_sentinel(),
                    classified.content,
                    self.config.media_match,
                )
            })
            .collect();

        tracing::info!(
            records = records.len(),
            date_order = %order,
            notifications = records.iter().filter(|r| r.is_notification()).count(),
            "parsed transcript"
        );

        Ok(Transcript::from_records(records, order))
    }
}

/// Parses `text` with the default configuration.
///
/// Shorthand for `TranscriptParser::new().parse_str(text)`.
pub fn parse_transcript(text: &str) -> Result<Transcript> {
    TranscriptParser::new().parse_str(text)
}
