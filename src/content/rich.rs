//! Rich content for the free-form property columns.
//!
//! Length, initial outcome, complexity and "other" properties are usually a
//! short phrase, but many entries cite a paper for the result or combine
//! several results in one cell ("PSPACE-complete on both X and Y").
//!
//! ## RichContent Variants
//!
//! - `Text`: Plain text ("In P", "?", "Varies")
//! - `Link`: A label linking to a citation or reference
//! - `LineBreak`: Separates stacked results in one cell
//! - `Unpublished`: A result marked with a dagger, not yet in print
//! - `Sequence`: Any mix of the above, rendered in order

use serde::{Deserialize, Serialize};

/// Dagger appended to unpublished results.
pub const UNPUBLISHED_MARK: char = '\u{2020}';

/// Content of a property cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RichContent {
    /// Plain text.
    Text { text: String },
    /// Hyperlinked label.
    Link { label: String, url: String },
    /// Line break between stacked results.
    LineBreak,
    /// A result that hasn't been published yet.
    Unpublished { content: Box<RichContent> },
    /// Several fragments in order.
    Sequence { parts: Vec<RichContent> },
}

impl RichContent {
    /// Plain text content.
    pub fn text(text: impl Into<String>) -> Self {
        RichContent::Text { text: text.into() }
    }

    /// A hyperlink with the given label.
    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        RichContent::Link {
            label: label.into(),
            url: url.into(),
        }
    }

    /// Wrap content with the unpublished marker.
    pub fn unpublished(content: impl Into<RichContent>) -> Self {
        RichContent::Unpublished {
            content: Box::new(content.into()),
        }
    }

    /// Concatenate fragments.
    pub fn sequence<I, C>(parts: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<RichContent>,
    {
        RichContent::Sequence {
            parts: parts.into_iter().map(Into::into).collect(),
        }
    }

    /// Single space, used by the catalog for "nothing to say here".
    pub fn blank() -> Self {
        Self::text(" ")
    }

    /// Check whether this renders to nothing visible.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            RichContent::Text { text } => text.trim().is_empty(),
            RichContent::Sequence { parts } => parts.iter().all(RichContent::is_blank),
            RichContent::Link { .. } | RichContent::LineBreak | RichContent::Unpublished { .. } => {
                false
            }
        }
    }

    /// Get the URL if this is a Link.
    #[must_use]
    pub fn as_link(&self) -> Option<(&str, &str)> {
        match self {
            RichContent::Link { label, url } => Some((label, url)),
            _ => None,
        }
    }

    /// Flatten to plain text: link labels inline, breaks as newlines.
    #[must_use]
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.write_plain(&mut out);
        out
    }

    fn write_plain(&self, out: &mut String) {
        match self {
            RichContent::Text { text } => out.push_str(text),
            RichContent::Link { label, .. } => out.push_str(label),
            RichContent::LineBreak => out.push('\n'),
            RichContent::Unpublished { content } => {
                content.write_plain(out);
                out.push(UNPUBLISHED_MARK);
            }
            RichContent::Sequence { parts } => {
                for part in parts {
                    part.write_plain(out);
                }
            }
        }
    }
}

impl Default for RichContent {
    fn default() -> Self {
        Self::text("")
    }
}

impl From<&str> for RichContent {
    fn from(s: &str) -> Self {
        Self::text(s)
    }
}

impl From<String> for RichContent {
    fn from(s: String) -> Self {
        RichContent::Text { text: s }
    }
}

impl From<Vec<RichContent>> for RichContent {
    fn from(parts: Vec<RichContent>) -> Self {
        RichContent::Sequence { parts }
    }
}
