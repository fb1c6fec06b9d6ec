//! The ordered, read-only record table produced by the parser.

use chrono::NaiveDateTime;

use crate::analysis::SenderFilter;
use crate::parsing::DateOrder;
use crate::record::Record;

/// All records of one chat, in input order.
///
/// A transcript is never mutated after parsing. Filtering returns borrowed
/// views, so a single transcript can back any number of analyses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    records: Vec<Record>,
    date_order: DateOrder,
}

impl Transcript {
    /// Wraps already-built records. Order is kept as given.
    pub fn from_records(records: Vec<Record>, date_order: DateOrder) -> Self {
        Self {
            records,
            date_order,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// The date order the timestamps were parsed with.
    pub fn date_order(&self) -> DateOrder {
        self.date_order
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Iterates over the records selected by `filter`.
    pub fn filtered<'a>(
        &'a self,
        filter: &'a SenderFilter,
    ) -> impl Iterator<Item = &'a Record> + 'a {
        self.records.iter().filter(move |r| filter.matches(r))
    }

    /// Collects the records selected by `filter`.
    pub fn view(&self, filter: &SenderFilter) -> Vec<&Record> {
        self.records.iter().filter(|r| filter.matches(r)).collect()
    }

    /// First and last timestamps, or `None` for an empty transcript.
    pub fn span(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let first = self.records.first()?.timestamp();
        let last = self.records.last()?.timestamp();
        Some((first, last))
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
