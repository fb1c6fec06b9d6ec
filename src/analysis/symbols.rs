//! Emoji and other pictographic symbol frequency.
//!
//! Which characters count as symbols is decided by a [`SymbolSet`], passed in
//! by the caller. [`UnicodePictographic`] covers the Unicode
//! `Extended_Pictographic`, `Regional_Indicator` and `Emoji_Modifier`
//! properties as known to the `regex` crate;
//! [`FixedSymbols`] is an explicit set, handy for tests and for callers that
//! pin their own emoji list.
//!
//! Content is scanned one `char` at a time, so multi-codepoint sequences are
//! counted by their parts: a flag is two regional indicators, a toned thumb
//! is the thumb plus the skin-tone modifier.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer};

use super::{SenderFilter, Tally};
use crate::transcript::Transcript;

static PICTOGRAPHIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{Extended_Pictographic}\p{Regional_Indicator}\p{Emoji_Modifier}]$")
        .expect("pictographic class is supported")
});

/// Membership test for pictographic symbols.
pub trait SymbolSet {
    /// Returns `true` if `c` is counted as a symbol.
    fn is_pictographic_symbol(&self, c: char) -> bool;
}

/// Pictographs, regional indicators and skin-tone modifiers, excluding ASCII.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodePictographic;

impl SymbolSet for UnicodePictographic {
    fn is_pictographic_symbol(&self, c: char) -> bool {
        if c.is_ascii() {
            return false;
        }
        let mut buf = [0u8; 4];
        PICTOGRAPHIC.is_match(c.encode_utf8(&mut buf))
    }
}

/// An explicit symbol list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedSymbols {
    symbols: HashSet<char>,
}

impl FixedSymbols {
    pub fn new(symbols: impl IntoIterator<Item = char>) -> Self {
        Self {
            symbols: symbols.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl SymbolSet for FixedSymbols {
    fn is_pictographic_symbol(&self, c: char) -> bool {
        self.symbols.contains(&c)
    }
}

impl<S: SymbolSet + ?Sized> SymbolSet for &S {
    fn is_pictographic_symbol(&self, c: char) -> bool {
        (**self).is_pictographic_symbol(c)
    }
}

/// Occurrences of one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SymbolCount {
    #[serde(serialize_with = "char_as_str")]
    pub symbol: char,
    pub count: usize,
}

/// Total symbol occurrences and the ranked per-symbol table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SymbolFrequency {
    pub total: usize,
    pub rows: Vec<SymbolCount>,
}

impl SymbolFrequency {
    /// The `n` most used symbols.
    pub fn top(&self, n: usize) -> &[SymbolCount] {
        &self.rows[..n.min(self.rows.len())]
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Returns the symbols of `content` in order of appearance.
pub fn extract_symbols<S: SymbolSet>(content: &str, symbols: &S) -> Vec<char> {
    content
        .chars()
        .filter(|&c| symbols.is_pictographic_symbol(c))
        .collect()
}

/// Counts symbols in the content of the records selected by `filter`.
///
/// Rows are ordered by descending count; ties keep first-encounter order.
pub fn symbol_frequency<S: SymbolSet>(
    table: &Transcript,
    filter: &SenderFilter,
    symbols: &S,
) -> SymbolFrequency {
    let mut tally = Tally::new();
    for record in table.filtered(filter) {
        for c in record.content().chars() {
            if symbols.is_pictographic_symbol(c) {
                tally.add(c);
            }
        }
    }

    SymbolFrequency {
        total: tally.total(),
        rows: tally
            .ranked()
            .into_iter()
            .map(|(symbol, count)| SymbolCount { symbol, count })
            .collect(),
    }
}

fn char_as_str<S: Serializer>(c: &char, serializer: S) -> Result<S::Ok, S::Error> {
    let mut buf = [0u8; 4];
    serializer.serialize_str(c.encode_utf8(&mut buf))
}
