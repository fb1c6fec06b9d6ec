//! Headline counts for a selection.

use serde::Serialize;

use super::SenderFilter;
use crate::transcript::Transcript;

/// Message, word, media and link totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BasicStats {
    pub messages: usize,
    /// Whitespace-delimited tokens across all contents
    pub words: usize,
    /// Records flagged as media placeholders
    pub media: usize,
    /// Records whose content contains a link marker
    pub links: usize,
}

/// Computes [`BasicStats`] for the records selected by `filter`.
///
/// Media placeholders are ordinary messages here: `<Media omitted>`
/// contributes its two tokens to `words`.
pub fn basic_stats(table: &Transcript, filter: &SenderFilter) -> BasicStats {
    table
        .filtered(filter)
        .fold(BasicStats::default(), |mut stats, record| {
            stats.messages += 1;
            stats.words += record.word_count();
            stats.media += usize::from(record.is_media());
            stats.links += usize::from(record.has_link());
            stats
        })
}
