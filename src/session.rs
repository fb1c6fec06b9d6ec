//! Caller-owned analysis session.
//!
//! A [`Session`] holds one parsed [`Transcript`] plus the current
//! [`AnalysisConfig`]. It keeps no hidden state: changing the selection
//! replaces the config, and [`Session::analyze`] recomputes every table from
//! the transcript each time it is called.
//!
//! # Example
//!
//! ```rust
//! use chatlens::Session;
//! use chatlens::analysis::SenderFilter;
//!
//! let text = "1/15/24, 10:30 - Alice: Hi 😀\n1/15/24, 10:31 - Bob: Hello";
//! let session = Session::from_text(text)?;
//!
//! assert_eq!(session.sender_list(), ["Overall", "Alice", "Bob"]);
//!
//! let analysis = session.select(SenderFilter::only("Alice")).analyze()?;
//! assert_eq!(analysis.stats.messages, 1);
//! assert_eq!(analysis.symbols.total, 1);
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use std::collections::HashSet;

use serde::Serialize;

use crate::analysis::{
    ActivityGrid, BasicStats, DailyCount, HourlyCount, MonthlyCount, SenderCount, SenderFilter,
    SenderShare, SymbolFrequency, SymbolSet, UnicodePictographic, WeekdayCount, WordCount,
    basic_stats, busiest_senders, daily_counts, exclude_common, hourly_counts, monthly_counts,
    sender_contribution, sender_list, symbol_frequency, weekday_counts, weekday_hour_grid,
    word_frequency, word_spread,
};
use crate::config::{AnalysisConfig, ParserConfig};
use crate::error::Result;
use crate::parsing::TranscriptParser;
use crate::record::Record;
use crate::transcript::Transcript;

/// One transcript and the knobs for analyzing it.
#[derive(Debug, Clone)]
pub struct Session<S: SymbolSet = UnicodePictographic> {
    transcript: Transcript,
    config: AnalysisConfig,
    symbols: S,
}

impl Session {
    /// Creates a session over an already parsed transcript.
    pub fn new(transcript: Transcript) -> Self {
        Self {
            transcript,
            config: AnalysisConfig::default(),
            symbols: UnicodePictographic,
        }
    }

    /// Parses `text` with the default parser settings.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::from_text_with(text, ParserConfig::default())
    }

    /// Parses `text` with custom parser settings.
    pub fn from_text_with(text: &str, parser: ParserConfig) -> Result<Self> {
        let transcript = TranscriptParser::with_config(parser).parse_str(text)?;
        Ok(Self::new(transcript))
    }
}

impl<S: SymbolSet> Session<S> {
    /// Replaces the analysis configuration.
    #[must_use]
    pub fn with_config(mut self, config: AnalysisConfig) -> Self {
        self.config = config;
        self
    }

    /// Swaps the symbol set used for emoji counting.
    pub fn with_symbols<T: SymbolSet>(self, symbols: T) -> Session<T> {
        Session {
            transcript: self.transcript,
            config: self.config,
            symbols,
        }
    }

    /// Changes the selected sender.
    #[must_use]
    pub fn select(mut self, filter: SenderFilter) -> Self {
        self.config.filter = filter;
        self
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Selection list: `"Overall"` and every real sender.
    pub fn sender_list(&self) -> Vec<String> {
        sender_list(&self.transcript)
    }

    /// Record view: the whole transcript when `full_view` is set, otherwise
    /// the records of the current selection.
    pub fn view(&self, full_view: bool) -> Vec<&Record> {
        if full_view {
            self.transcript.iter().collect()
        } else {
            self.transcript.view(&self.config.filter)
        }
    }

    /// Computes every summary table for the current selection.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidThreshold`](crate::ChatlensError::InvalidThreshold)
    /// if the config carries an out-of-range `exclude_common` value.
    pub fn analyze(&self) -> Result<Analysis> {
        let table = &self.transcript;
        let filter = &self.config.filter;

        // rankings across senders only make sense for the whole chat
        let (busiest, contribution) = if filter.is_active() {
            (None, None)
        } else {
            (
                Some(busiest_senders(table, self.config.top_k)),
                Some(sender_contribution(table)),
            )
        };

        let mut words = word_frequency(table, filter);
        if let Some(threshold) = self.config.exclude_common {
            words = self.drop_common_words(words, threshold)?;
        }
        words.truncate(self.config.top_words);

        let analysis = Analysis {
            selection: filter.clone(),
            stats: basic_stats(table, filter),
            busiest_senders: busiest,
            contribution,
            monthly: monthly_counts(table, filter),
            daily: daily_counts(table, filter),
            weekdays: weekday_counts(table, filter),
            hours: hourly_counts(table, filter),
            activity: weekday_hour_grid(table, filter),
            symbols: symbol_frequency(table, filter, &self.symbols),
            words,
        };

        tracing::debug!(
            selection = %analysis.selection,
            messages = analysis.stats.messages,
            "analysis complete"
        );

        Ok(analysis)
    }

    fn drop_common_words(&self, words: Vec<WordCount>, threshold: f64) -> Result<Vec<WordCount>> {
        let total_senders = self.sender_list().len() - 1;
        let spread = word_spread(&self.transcript);
        let kept: HashSet<String> = exclude_common(spread, total_senders, threshold)?
            .into_iter()
            .map(|row| row.key)
            .collect();

        Ok(words.into_iter().filter(|w| kept.contains(&w.word)).collect())
    }
}

/// Every summary table for one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub selection: SenderFilter,
    pub stats: BasicStats,
    /// Only computed for the whole chat
    #[serde(skip_serializing_if = "Option::is_none")]
    pub busiest_senders: Option<Vec<SenderCount>>,
    /// Only computed for the whole chat
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contribution: Option<Vec<SenderShare>>,
    pub monthly: Vec<MonthlyCount>,
    pub daily: Vec<DailyCount>,
    pub weekdays: Vec<WeekdayCount>,
    pub hours: Vec<HourlyCount>,
    pub activity: ActivityGrid,
    pub symbols: SymbolFrequency,
    pub words: Vec<WordCount>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::FixedSymbols;
    use crate::parsing::MediaMatch;

    const CHAT: &str = "\
1/1/24, 10:00 - Alice created group \"Trip\"
1/1/24, 10:01 - Alice: ok see you at the beach 😀
1/1/24, 10:02 - Bob: ok ok
1/1/24, 10:03 - Carol: ok beach
1/2/24, 11:30 - Bob: <Media omitted> lol";

    #[test]
    fn test_overall_analysis() {
        let session = Session::from_text(CHAT).unwrap();
        let analysis = session.analyze().unwrap();

        assert_eq!(analysis.selection, SenderFilter::All);
        assert_eq!(analysis.stats.messages, 5);
        assert_eq!(analysis.stats.media, 1);

        let busiest = analysis.busiest_senders.unwrap();
        assert_eq!(busiest[0], SenderCount { sender: "Bob".into(), count: 2 });
        assert_eq!(busiest.len(), 3);
        assert_eq!(analysis.contribution.unwrap().len(), 4);

        assert_eq!(analysis.weekdays.len(), 7);
        assert_eq!(analysis.hours.len(), 24);
        assert_eq!(analysis.activity.total(), 5);
        assert_eq!(analysis.symbols.total, 1);
        assert_eq!(analysis.words[0], WordCount { word: "ok".into(), count: 4 });
    }

    #[test]
    fn test_selected_sender() {
        let session = Session::from_text(CHAT).unwrap().select(SenderFilter::only("Bob"));
        let analysis = session.analyze().unwrap();

        assert_eq!(analysis.stats.messages, 2);
        assert!(analysis.busiest_senders.is_none());
        assert!(analysis.contribution.is_none());
        assert_eq!(analysis.monthly.len(), 1);
        assert_eq!(analysis.daily.len(), 2);
        assert_eq!(session.view(false).len(), 2);
        assert_eq!(session.view(true).len(), 5);
    }

    #[test]
    fn test_exclude_common_words() {
        let config = AnalysisConfig::new().with_exclude_common(0.5).unwrap();
        let analysis = Session::from_text(CHAT).unwrap().with_config(config).analyze().unwrap();

        assert!(analysis.words.iter().all(|w| w.word != "ok" && w.word != "beach"));
        assert!(analysis.words.iter().any(|w| w.word == "see"));
    }

    #[test]
    fn test_invalid_threshold_in_config() {
        let mut config = AnalysisConfig::new();
        config.exclude_common = Some(2.0);
        let err = Session::from_text(CHAT).unwrap().with_config(config).analyze().unwrap_err();
        assert!(matches!(err, crate::ChatlensError::InvalidThreshold { .. }));
    }

    #[test]
    fn test_top_limits() {
        let config = AnalysisConfig::new().with_top_k(1).with_top_words(2);
        let analysis = Session::from_text(CHAT).unwrap().with_config(config).analyze().unwrap();
        assert_eq!(analysis.busiest_senders.unwrap().len(), 1);
        assert_eq!(analysis.words.len(), 2);
    }

    #[test]
    fn test_custom_symbols_and_parser() {
        let parser = ParserConfig::new().with_media_match(MediaMatch::Exact);
        let session = Session::from_text_with(CHAT, parser)
            .unwrap()
            .with_symbols(FixedSymbols::new(['🔥']));
        let analysis = session.analyze().unwrap();
        assert_eq!(analysis.symbols.total, 0);
        assert_eq!(analysis.stats.media, 0);
    }

    #[test]
    fn test_analyze_is_repeatable() {
        let session = Session::from_text(CHAT).unwrap();
        assert_eq!(session.analyze().unwrap(), session.analyze().unwrap());
        assert_eq!(session.sender_list(), ["Overall", "Alice", "Bob", "Carol"]);
    }
}
