//! Sender selection for analysis requests.
//!
//! Every aggregate is computed either over the whole chat or over the
//! messages of one participant. The selection list shown to users starts with
//! [`OVERALL`], which maps to [`SenderFilter::All`].
//!
//! # Examples
//!
//! ```
//! use chatlens::analysis::SenderFilter;
//!
//! assert_eq!(SenderFilter::from_selection("Overall"), SenderFilter::All);
//! assert_eq!(SenderFilter::from_selection("Alice"), SenderFilter::only("Alice"));
//! ```
//!
//! # Behavior Notes
//!
//! - Sender matching is exact and case-sensitive: names come from the
//!   transcript itself via [`sender_list`](crate::analysis::sender_list)
//! - Filtering never copies records; it yields references into the transcript

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::Record;
use crate::transcript::Transcript;

/// Label of the "all senders" entry in a selection list.
pub const OVERALL: &str = "Overall";

/// Scope of an analysis: everyone, or one sender.
///
/// Serializes as the selection label (`"Overall"` or the sender name).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SenderFilter {
    /// All records, including group notifications
    #[default]
    All,
    /// Records of exactly this sender
    Only(String),
}

impl SenderFilter {
    /// Creates a filter selecting a single sender.
    pub fn only(sender: impl Into<String>) -> Self {
        SenderFilter::Only(sender.into())
    }

    /// Maps a selection label to a filter; [`OVERALL`] selects everyone.
    pub fn from_selection(selection: &str) -> Self {
        if selection == OVERALL {
            SenderFilter::All
        } else {
            SenderFilter::only(selection)
        }
    }

    /// Returns `true` if `record` is in scope.
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            SenderFilter::All => true,
            SenderFilter::Only(sender) => record.sender() == sender,
        }
    }

    /// Returns `true` if this filter narrows the transcript.
    pub fn is_active(&self) -> bool {
        matches!(self, SenderFilter::Only(_))
    }

    /// Selection label: [`OVERALL`] or the sender name.
    pub fn label(&self) -> &str {
        match self {
            SenderFilter::All => OVERALL,
            SenderFilter::Only(sender) => sender,
        }
    }
}

impl fmt::Display for SenderFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for SenderFilter {
    fn from(selection: String) -> Self {
        if selection == OVERALL {
            SenderFilter::All
        } else {
            SenderFilter::Only(selection)
        }
    }
}

impl From<SenderFilter> for String {
    fn from(filter: SenderFilter) -> Self {
        match filter {
            SenderFilter::All => OVERALL.to_string(),
            SenderFilter::Only(sender) => sender,
        }
    }
}

/// Returns the records of `table` selected by `filter`, in input order.
pub fn apply_filter<'a>(table: &'a Transcript, filter: &SenderFilter) -> Vec<&'a Record> {
    table.view(filter)
}
