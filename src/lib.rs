//! # Chatlens
//!
//! A Rust library for parsing exported WhatsApp chat transcripts and
//! computing activity statistics over them.
//!
//! ## Overview
//!
//! A WhatsApp "export chat" file is one text blob of messages, each starting
//! with a `date, time - ` prefix, optionally followed by `Sender: `. Chatlens
//! turns that blob into an ordered [`Transcript`] of [`Record`]s and then
//! answers questions about it for the whole chat or for one sender:
//!
//! - message, word, media and link counts
//! - busiest senders and each sender's share
//! - monthly, daily, weekday and hourly timelines, plus a weekday/hour heatmap
//! - emoji frequency and common words
//!
//! The parser detects whether dates are written month-first or day-first,
//! keeps multi-line messages together and maps system lines ("X joined",
//! "Messages are end-to-end encrypted") to a `group_notification` sender.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let text = "\
//! 1/15/24, 10:30 - Alice: Hello everyone!
//! 1/15/24, 10:31 - Bob: <Media omitted>
//! 1/15/24, 10:32 - Alice: see https://example.com";
//!
//!     let session = Session::from_text(text)?;
//!     let analysis = session.analyze()?;
//!
//!     assert_eq!(analysis.stats.messages, 3);
//!     assert_eq!(analysis.stats.media, 1);
//!     assert_eq!(analysis.stats.links, 1);
//!
//!     // Narrow everything to one sender
//!     let alice = session.select(SenderFilter::only("Alice")).analyze()?;
//!     assert_eq!(alice.stats.messages, 2);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parsing`] - tokenizer, timestamp normalizer, classifier, [`TranscriptParser`](parsing::TranscriptParser)
//! - [`record`] - [`Record`] with derived calendar fields
//! - [`transcript`] - [`Transcript`], the read-only record table
//! - [`analysis`] - pure aggregations over a transcript
//! - [`session`] - [`Session`] and the bundled [`Analysis`]
//! - [`output`] - text report, JSON and CSV writers
//! - [`config`] - [`ParserConfig`](config::ParserConfig), [`AnalysisConfig`](config::AnalysisConfig)
//! - [`error`] - [`ChatlensError`], [`Result`]
//! - [`prelude`] - Convenient re-exports
//!
//! ## Logging
//!
//! The library emits [`tracing`] events (parse summaries at `info`, date-order
//! decisions at `debug`) and never installs a subscriber itself.

#[cfg(feature = "cli")]
pub mod cli;
pub mod analysis;
pub mod config;
pub mod error;
pub mod output;
pub mod parsing;
pub mod record;
pub mod session;
pub mod transcript;

// Re-export the main types at the crate root for convenience
pub use error::{ChatlensError, Result};
pub use parsing::parse_transcript;
pub use record::Record;
pub use session::{Analysis, Session};
pub use transcript::Transcript;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::{Analysis, Record, Session, Transcript, parse_transcript};

    // Error types
    pub use crate::error::{ChatlensError, Result};

    // Parsing
    pub use crate::parsing::{DateOrder, MediaMatch, TranscriptParser};

    // Configs
    pub use crate::config::{AnalysisConfig, ParserConfig};

    // Analysis
    pub use crate::analysis::{
        FixedSymbols, SenderFilter, SymbolSet, UnicodePictographic, basic_stats, busiest_senders,
        daily_counts, hourly_counts, monthly_counts, sender_contribution, sender_list,
        symbol_frequency, top_senders, weekday_counts, weekday_hour_grid, word_frequency,
    };

    // Output
    pub use crate::output::render_report;
    #[cfg(feature = "csv-output")]
    pub use crate::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::output::{to_json, write_json};
}
