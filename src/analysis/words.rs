//! Word frequency and per-sender spread of words and symbols.
//!
//! A word here is a lowercased whitespace-delimited token. Media placeholder
//! records and group notifications are skipped: neither carries text a user
//! typed.
//!
//! Spread rows count, for every word or symbol, how many distinct senders used
//! it. [`exclude_common`] uses that to drop keys that nearly everyone uses
//! ("ok", "the", 😂) so that the remaining table says something about the
//! selected sender.

use std::collections::HashSet;
use std::hash::Hash;

use serde::Serialize;

use super::{SenderFilter, SymbolSet, Tally};
use crate::config::validate_threshold;
use crate::error::Result;
use crate::record::Record;
use crate::transcript::Transcript;

/// Occurrences of one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Total occurrences of a key and the number of senders who used it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpreadRow<K> {
    pub key: K,
    pub count: usize,
    /// Distinct non-notification senders
    pub senders: usize,
}

impl<K> SpreadRow<K> {
    /// Fraction of `total_senders` that used this key. Zero when there are
    /// no senders at all.
    pub fn share(&self, total_senders: usize) -> f64 {
        if total_senders == 0 {
            0.0
        } else {
            self.senders as f64 / total_senders as f64
        }
    }
}

/// Records that contribute words: typed by a person, not a media stub.
fn has_words(record: &Record) -> bool {
    !record.is_notification() && !record.is_media()
}

fn words_of(content: &str) -> impl Iterator<Item = String> + '_ {
    content.split_whitespace().map(str::to_lowercase)
}

/// Counts lowercased words in the records selected by `filter`.
///
/// Rows are ordered by descending count; ties keep first-encounter order.
pub fn word_frequency(table: &Transcript, filter: &SenderFilter) -> Vec<WordCount> {
    let mut tally = Tally::new();
    for record in table.filtered(filter).filter(|r| has_words(r)) {
        for word in words_of(record.content()) {
            tally.add(word);
        }
    }

    tally
        .ranked()
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect()
}

/// Per-symbol occurrences and sender counts over the whole transcript.
pub fn symbol_spread<S: SymbolSet>(table: &Transcript, symbols: &S) -> Vec<SpreadRow<char>> {
    spread(table.iter().filter(|r| !r.is_notification()), |record| {
        record
            .content()
            .chars()
            .filter(|&c| symbols.is_pictographic_symbol(c))
            .collect()
    })
}

/// Per-word occurrences and sender counts over the whole transcript.
pub fn word_spread(table: &Transcript) -> Vec<SpreadRow<String>> {
    spread(table.iter().filter(|r| has_words(r)), |record| {
        words_of(record.content()).collect()
    })
}

fn spread<'a, K, F>(records: impl Iterator<Item = &'a Record>, keys_of: F) -> Vec<SpreadRow<K>>
where
    K: Eq + Hash + Clone,
    F: Fn(&'a Record) -> Vec<K>,
{
    let mut tally = Tally::new();
    let mut users: Vec<HashSet<&'a str>> = Vec::new();

    for record in records {
        for key in keys_of(record) {
            let pos = tally.add(key);
            if pos == users.len() {
                users.push(HashSet::new());
            }
            users[pos].insert(record.sender());
        }
    }

    tally
        .ranked_with_positions()
        .into_iter()
        .map(|(key, count, pos)| SpreadRow {
            key,
            count,
            senders: users[pos].len(),
        })
        .collect()
}

/// Drops rows used by more than `threshold` of `total_senders`.
///
/// A row is kept when `senders / total_senders <= threshold`. With no
/// senders the rows are returned unchanged.
///
/// # Errors
///
/// Returns [`ChatlensError::InvalidThreshold`](crate::ChatlensError::InvalidThreshold)
/// unless `0.0 <= threshold <= 1.0`.
pub fn exclude_common<K>(
    rows: Vec<SpreadRow<K>>,
    total_senders: usize,
    threshold: f64,
) -> Result<Vec<SpreadRow<K>>> {
    let threshold = validate_threshold(threshold)?;
    if total_senders == 0 {
        return Ok(rows);
    }

    Ok(rows
        .into_iter()
        .filter(|row| row.share(total_senders) <= threshold)
        .collect())
}
