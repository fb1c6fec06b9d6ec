//! Splits a raw transcript into `(timestamp, body)` pairs.

use std::sync::LazyLock;

use regex::Regex;

/// Delimiter that opens every message: `1/15/24, 10:30 - `.
pub const DELIMITER_PATTERN: &str = r"\d{1,2}/\d{1,2}/\d{2,4},\s\d{1,2}:\d{2}\s-\s";

static DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DELIMITER_PATTERN).expect("delimiter pattern is valid"));

/// One delimiter match and the text it introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawEntry<'a> {
    /// Timestamp without the trailing ` - ` (e.g. `"1/15/24, 10:30"`)
    pub timestamp: &'a str,
    /// Message body up to the next delimiter, trimmed
    pub body: &'a str,
}

/// Tokenizes `text` at every delimiter match.
///
/// Text before the first match is preamble and is dropped. A body runs until
/// the next delimiter or the end of input, so multi-line messages stay whole.
pub fn tokenize(text: &str) -> Vec<RawEntry<'_>> {
    let matches: Vec<_> = DELIMITER.find_iter(text).collect();

    let entries: Vec<RawEntry<'_>> = matches
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let end = matches.get(i + 1).map_or(text.len(), |next| next.start());
            RawEntry {
                timestamp: strip_separator(m.as_str()),
                body: text[m.end()..end].trim(),
            }
        })
        .collect();

    tracing::debug!(
        entries = entries.len(),
        preamble_bytes = matches.first().map_or(text.len(), |m| m.start()),
        "tokenized transcript"
    );

    entries
}

/// `"1/15/24, 10:30 - "` -> `"1/15/24, 10:30"`
fn strip_separator(delimiter: &str) -> &str {
    delimiter.trim_end().trim_end_matches('-').trim_end()
}
