//! Aggregations over a parsed [`Transcript`](crate::Transcript).
//!
//! Every function here is pure: it reads the transcript, never mutates it,
//! and returns a freshly built summary table. Calling the same function twice
//! yields the same result, and independent calls may run in any order or in
//! parallel.
//!
//! - [`filter`] - [`SenderFilter`], [`apply_filter`]
//! - [`stats`] - [`basic_stats`]
//! - [`senders`] - [`top_senders`], [`busiest_senders`], [`sender_list`], [`sender_contribution`]
//! - [`timeline`] - monthly, daily, weekday and hourly counts, [`weekday_hour_grid`]
//! - [`symbols`] - [`symbol_frequency`] with an injected [`SymbolSet`]
//! - [`words`] - [`word_frequency`], sender spread and [`exclude_common`]
//!
//! # Ordering
//!
//! Ranked tables (senders, symbols, words) are sorted by descending count;
//! ties keep the order in which keys were first encountered. Time tables are
//! chronological, and the weekday/hour axes are always complete.

pub mod filter;
pub mod senders;
pub mod stats;
pub mod symbols;
pub mod timeline;
pub mod words;

use std::collections::HashMap;
use std::hash::Hash;

pub use filter::{OVERALL, SenderFilter, apply_filter};
pub use senders::{
    SenderCount, SenderShare, busiest_senders, sender_contribution, sender_list, top_senders,
};
pub use stats::{BasicStats, basic_stats};
pub use symbols::{
    FixedSymbols, SymbolCount, SymbolFrequency, SymbolSet, UnicodePictographic, extract_symbols,
    symbol_frequency,
};
pub use timeline::{
    ActivityGrid, DailyCount, HourlyCount, MonthlyCount, WeekdayCount, daily_counts,
    hourly_counts, monthly_counts, weekday_counts, weekday_hour_grid,
};
pub use words::{
    SpreadRow, WordCount, exclude_common, symbol_spread, word_frequency, word_spread,
};

/// Occurrence counter that remembers first-encounter order.
pub(crate) struct Tally<K> {
    index: HashMap<K, usize>,
    rows: Vec<(K, usize)>,
}

impl<K: Eq + Hash + Clone> Tally<K> {
    pub(crate) fn new() -> Self {
        Self {
            index: HashMap::new(),
            rows: Vec::new(),
        }
    }

    /// Counts one occurrence of `key`; returns its row position.
    pub(crate) fn add(&mut self, key: K) -> usize {
        if let Some(&pos) = self.index.get(&key) {
            self.rows[pos].1 += 1;
            return pos;
        }
        let pos = self.rows.len();
        self.index.insert(key.clone(), pos);
        self.rows.push((key, 1));
        pos
    }

    pub(crate) fn total(&self) -> usize {
        self.rows.iter().map(|(_, n)| n).sum()
    }

    /// Rows by descending count; ties stay in first-encounter order.
    pub(crate) fn ranked(self) -> Vec<(K, usize)> {
        self.ranked_with_positions()
            .into_iter()
            .map(|(key, count, _)| (key, count))
            .collect()
    }

    /// Like [`Tally::ranked`], with each row's position as returned by `add`.
    pub(crate) fn ranked_with_positions(self) -> Vec<(K, usize, usize)> {
        let mut rows: Vec<_> = self
            .rows
            .into_iter()
            .enumerate()
            .map(|(pos, (key, count))| (key, count, pos))
            .collect();
        // sort_by is stable
        rows.sort_by(|a, b| b.1.cmp(&a.1));
        rows
    }
}
