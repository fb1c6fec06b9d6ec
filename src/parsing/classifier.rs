//! Sender extraction and content predicates.
//!
//! A body either starts with `Sender: ` or is a group notification
//! ("Alice created group", the encryption notice, ...). Group notifications
//! get the [`GROUP_NOTIFICATION`] sentinel as their sender.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Sender assigned to bodies without a `Sender: ` prefix.
///
/// A participant whose display name is literally `group_notification` cannot
/// be told apart from system messages.
pub const GROUP_NOTIFICATION: &str = "group_notification";

/// Text the export writes in place of an attachment.
pub const MEDIA_PLACEHOLDER: &str = "<Media omitted>";

const LINK_MARKERS: [&str; 3] = ["http://", "https://", "www."];

// Lazy so that the first `: ` wins; `(?s)` lets a sender prefix sit before a
// multi-line body.
static SENDER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^(.+?):\s").expect("sender pattern is valid"));

/// How [`MEDIA_PLACEHOLDER`] is matched against message content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaMatch {
    /// Content contains the placeholder anywhere (default)
    #[default]
    Contains,
    /// Content is exactly the placeholder
    Exact,
}

impl MediaMatch {
    /// Returns `true` if `content` counts as a media message under this policy.
    pub fn matches(self, content: &str) -> bool {
        match self {
            MediaMatch::Contains => mentions_media_placeholder(content),
            MediaMatch::Exact => is_media_placeholder(content),
        }
    }
}

/// A body split into sender and content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classified<'a> {
    /// Display name, or `None` for a group notification
    pub sender: Option<&'a str>,
    /// Body with the sender prefix removed
    pub content: &'a str,
}

impl<'a> Classified<'a> {
    /// Sender name with the sentinel substituted for notifications.
    pub fn sender_or_sentinel(&self) -> &'a str {
        self.sender.unwrap_or(GROUP_NOTIFICATION)
    }

    /// Returns `true` if no sender could be extracted.
    pub fn is_notification(&self) -> bool {
        self.sender.is_none()
    }
}

/// Splits `body` at its first `: ` boundary.
///
/// `"Alice: hello: world"` yields sender `Alice` and content `hello: world`.
/// A body without any colon followed by whitespace is a notification and is
/// returned whole as content.
pub fn classify(body: &str) -> Classified<'_> {
    match SENDER_PREFIX.captures(body) {
        Some(caps) => {
            let prefix = caps.get(0).map_or(0, |m| m.end());
            Classified {
                sender: caps.get(1).map(|m| m.as_str()),
                content: &body[prefix..],
            }
        }
        None => Classified {
            sender: None,
            content: body,
        },
    }
}

/// Returns `true` if `content` is exactly the media placeholder.
pub fn is_media_placeholder(content: &str) -> bool {
    content == MEDIA_PLACEHOLDER
}

/// Returns `true` if `content` contains the media placeholder.
pub fn mentions_media_placeholder(content: &str) -> bool {
    content.contains(MEDIA_PLACEHOLDER)
}

/// Returns `true` if `content` contains `http://`, `https://` or `www.`.
///
/// Case-sensitive and without URL validation.
pub fn contains_link(content: &str) -> bool {
    LINK_MARKERS.iter().any(|marker| content.contains(marker))
}
