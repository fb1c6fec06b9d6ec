//! Configuration types for parsing and analysis.
//!
//! Plain structs with builder methods, usable without the CLI.
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::{AnalysisConfig, ParserConfig};
//! use chatlens::analysis::SenderFilter;
//! use chatlens::parsing::MediaMatch;
//!
//! let parser = ParserConfig::new().with_media_match(MediaMatch::Exact);
//!
//! let analysis = AnalysisConfig::new()
//!     .with_filter(SenderFilter::only("Alice"))
//!     .with_top_k(10)
//!     .with_exclude_common(0.5)?;
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::analysis::SenderFilter;
use crate::error::{ChatlensError, Result};
use crate::parsing::MediaMatch;

/// Default size of the busiest-sender ranking.
pub const DEFAULT_TOP_K: usize = 5;

/// Default number of rows in the common-words table.
pub const DEFAULT_TOP_WORDS: usize = 20;

/// Configuration for transcript parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// How the media placeholder is matched (default: contains)
    pub media_match: MediaMatch,
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the media placeholder matching policy.
    #[must_use]
    pub fn with_media_match(mut self, media_match: MediaMatch) -> Self {
        self.media_match = media_match;
        self
    }
}

/// Caller-selected scope and knobs for one analysis request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Whose messages are analyzed (default: everyone)
    #[serde(default)]
    pub filter: SenderFilter,

    /// Size of the busiest-sender ranking (default: 5)
    pub top_k: usize,

    /// Size of the common-words table (default: 20)
    pub top_words: usize,

    /// Drop words used by more than this fraction of senders (default: none)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_common: Option<f64>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            filter: SenderFilter::All,
            top_k: DEFAULT_TOP_K,
            top_words: DEFAULT_TOP_WORDS,
            exclude_common: None,
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sender filter.
    #[must_use]
    pub fn with_filter(mut self, filter: SenderFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Sets the busiest-sender ranking size.
    #[must_use]
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Sets the common-words table size.
    #[must_use]
    pub fn with_top_words(mut self, top_words: usize) -> Self {
        self.top_words = top_words;
        self
    }

    /// Sets the common-word exclusion threshold.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidThreshold`] unless `0.0 <= fraction <= 1.0`.
    pub fn with_exclude_common(mut self, fraction: f64) -> Result<Self> {
        self.exclude_common = Some(validate_threshold(fraction)?);
        Ok(self)
    }
}

/// Checks that `fraction` lies in `0.0..=1.0`.
pub(crate) fn validate_threshold(fraction: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&fraction) {
        Ok(fraction)
    } else {
        Err(ChatlensError::invalid_threshold(fraction))
    }
}
