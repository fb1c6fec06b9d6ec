//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`ReportFormat`] - What the binary prints or writes
//! - [`MediaMatchArg`] - Media placeholder policy as a CLI value
//!
//! # Using the CLI types in Libraries
//!
//! ```rust
//! use chatlens::cli::{MediaMatchArg, ReportFormat};
//! use chatlens::parsing::MediaMatch;
//!
//! let format: ReportFormat = "json".parse().unwrap();
//! assert_eq!(format.extension(), "json");
//!
//! assert_eq!(MediaMatch::from(MediaMatchArg::Exact), MediaMatch::Exact);
//! ```

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::analysis::SenderFilter;
use crate::config::{AnalysisConfig, DEFAULT_TOP_K, DEFAULT_TOP_WORDS, ParserConfig};
use crate::error::Result;
use crate::parsing::MediaMatch;

/// Analyze a WhatsApp chat export: activity timelines, busiest senders,
/// media, links and emoji.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt --user Alice
    chatlens chat.txt --format json -o analysis.json
    chatlens chat.txt --format csv --user Bob -o bob.csv
    chatlens chat.txt --exclude-common 0.6 --top 10

Set CHATLENS_LOG=debug to see parser decisions.")]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: String,

    /// Analyze a single sender instead of the whole chat
    #[arg(short, long, value_name = "NAME")]
    pub user: Option<String>,

    /// Number of busiest senders to list
    #[arg(long, value_name = "K", default_value_t = DEFAULT_TOP_K)]
    pub top: usize,

    /// Number of common words to list
    #[arg(long, value_name = "N", default_value_t = DEFAULT_TOP_WORDS)]
    pub words: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<String>,

    /// Drop words used by more than this fraction of senders (0.0-1.0)
    #[arg(long, value_name = "FRACTION")]
    pub exclude_common: Option<f64>,

    /// How "<Media omitted>" is recognized
    #[arg(long, value_enum, default_value = "contains")]
    pub media_match: MediaMatchArg,

    /// CSV only: export every record, ignoring --user
    #[arg(long)]
    pub full_view: bool,
}

impl Args {
    /// Parser settings selected on the command line.
    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig::new().with_media_match(self.media_match.into())
    }

    /// Analysis settings selected on the command line.
    ///
    /// # Errors
    ///
    /// Fails if `--exclude-common` is outside `0.0..=1.0`.
    pub fn analysis_config(&self) -> Result<AnalysisConfig> {
        let filter = self
            .user
            .as_deref()
            .map_or(SenderFilter::All, SenderFilter::from_selection);

        let config = AnalysisConfig::new()
            .with_filter(filter)
            .with_top_k(self.top)
            .with_top_words(self.words);

        match self.exclude_common {
            Some(fraction) => config.with_exclude_common(fraction),
            None => Ok(config),
        }
    }
}

/// Output format options.
///
/// - [`Text`](ReportFormat::Text) - human-readable report (default)
/// - [`Json`](ReportFormat::Json) - every summary table as one JSON document
/// - [`Csv`](ReportFormat::Csv) - the record view, semicolon delimited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl ReportFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "json", "csv"]
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "Text"),
            ReportFormat::Json => write!(f, "JSON"),
            ReportFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                ReportFormat::all_names().join(", ")
            )),
        }
    }
}

/// Media placeholder policy, as accepted by `--media-match`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum MediaMatchArg {
    /// Content contains "<Media omitted>"
    #[default]
    Contains,
    /// Content is exactly "<Media omitted>"
    Exact,
}

// Conversion to library policy type
impl From<MediaMatchArg> for MediaMatch {
    fn from(arg: MediaMatchArg) -> MediaMatch {
        match arg {
            MediaMatchArg::Contains => MediaMatch::Contains,
            MediaMatchArg::Exact => MediaMatch::Exact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("chatlens").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["chat.txt"]);
        assert_eq!(args.input, "chat.txt");
        assert_eq!(args.format, ReportFormat::Text);
        assert_eq!(args.top, 5);
        assert_eq!(args.words, 20);
        assert_eq!(args.media_match, MediaMatchArg::Contains);
        assert!(args.user.is_none());
        assert!(!args.full_view);

        let config = args.analysis_config().unwrap();
        assert_eq!(config.filter, SenderFilter::All);
        assert!(config.exclude_common.is_none());
    }

    #[test]
    fn test_user_and_knobs() {
        let args = parse(&[
            "chat.txt",
            "--user",
            "Alice",
            "--top",
            "3",
            "--exclude-common",
            "0.5",
            "--media-match",
            "exact",
            "-f",
            "json",
        ]);
        let config = args.analysis_config().unwrap();
        assert_eq!(config.filter, SenderFilter::only("Alice"));
        assert_eq!(config.top_k, 3);
        assert_eq!(config.exclude_common, Some(0.5));
        assert_eq!(args.parser_config().media_match, MediaMatch::Exact);
        assert_eq!(args.format, ReportFormat::Json);
    }

    #[test]
    fn test_overall_user_selects_everyone() {
        let args = parse(&["chat.txt", "--user", "Overall"]);
        assert_eq!(args.analysis_config().unwrap().filter, SenderFilter::All);
    }

    #[test]
    fn test_bad_threshold() {
        let args = parse(&["chat.txt", "--exclude-common", "1.5"]);
        assert!(args.analysis_config().is_err());
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("text".parse::<ReportFormat>().unwrap(), ReportFormat::Text);
        assert_eq!("CSV".parse::<ReportFormat>().unwrap(), ReportFormat::Csv);
        assert!("xml".parse::<ReportFormat>().is_err());
        assert_eq!(ReportFormat::Json.to_string(), "JSON");
    }

    #[test]
    fn test_format_serde() {
        let json = serde_json::to_string(&ReportFormat::Csv).unwrap();
        assert_eq!(json, "\"csv\"");
    }
}
