//! Core types and traits for the accordion component.
//!
//! This module contains the building blocks the model is assembled from:
//! - `SectionItem`: trait for entries that belong to a named section
//! - `Section`: one named grouping in the fixed, ordered section set
//! - `ItemDelegate`: trait for customizing item rendering
//! - `UnknownSectionPolicy` and `SectionError`: unknown-title handling

use std::fmt::Display;

use thiserror::Error;

/// Trait for items that can be displayed under a section of the accordion.
///
/// Items reference their owning section by title, not by pointer: an item
/// whose `section()` matches no known section is an orphan and is never
/// displayed under any section.
///
/// # Examples
///
/// ```
/// use bubbletea_accordion::accordion::SectionItem;
/// use std::fmt::Display;
///
/// #[derive(Clone)]
/// struct Task {
///     project: String,
///     summary: String,
/// }
///
/// impl Display for Task {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "{}", self.summary)
///     }
/// }
///
/// impl SectionItem for Task {
///     fn section(&self) -> &str {
///         &self.project
///     }
/// }
/// ```
pub trait SectionItem: Display + Clone {
    /// Returns the title of the section this item belongs to.
    fn section(&self) -> &str;
}

/// One named grouping in the accordion's fixed, ordered section set.
///
/// A section's ordinal position is its index in the order the sections were
/// given at construction; the set is immutable for the life of the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    title: String,
}

impl Section {
    /// Creates a section with the given display title.
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }

    /// The section's display title.
    pub fn title(&self) -> &str {
        &self.title
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}

impl From<&str> for Section {
    fn from(title: &str) -> Self {
        Self::new(title)
    }
}

impl From<String> for Section {
    fn from(title: String) -> Self {
        Self { title }
    }
}

/// Internal pairing of a section with its expansion state.
///
/// Expansion state lives with the section entry itself rather than in a
/// parallel index-keyed array, so state can never be attributed to the
/// wrong section.
#[derive(Debug, Clone)]
pub(super) struct SectionState {
    pub(super) section: Section,
    pub(super) expanded: bool,
}

/// How operations addressed at an unknown section title behave.
///
/// The accordion's sections form a closed set, so a lookup can only miss
/// when the caller passes a title outside that set. Both policies are
/// deliberate, documented choices; [`Model::try_toggle`] is available when
/// an explicit error is wanted instead.
///
/// [`Model::try_toggle`]: super::Model::try_toggle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownSectionPolicy {
    /// Treat the unknown title as the first section (ordinal 0).
    ///
    /// This mirrors the behavior of accordion implementations that index
    /// expansion state positionally and default a failed lookup to index 0.
    /// It keeps the UI robust against an internal naming mistake at the
    /// cost of acting on a section the caller did not name.
    #[default]
    FallbackToFirst,

    /// Ignore the operation entirely; reads report collapsed.
    Reject,
}

/// Errors from the explicit, non-policy section operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SectionError {
    /// The given title matches no section in the fixed set.
    #[error("unknown section: {0:?}")]
    UnknownSection(String),
}

/// Trait for customizing how accordion items are rendered.
///
/// The delegate renders one item line (or several, if `height` says so) for
/// each visible item of an expanded section. The index passed to `render`
/// is the item's original index in the full item collection.
pub trait ItemDelegate<I: SectionItem> {
    /// Renders an item as a styled string.
    fn render(&self, m: &super::Model<I>, index: usize, item: &I) -> String;

    /// Height of one rendered item in terminal lines.
    fn height(&self) -> usize {
        1
    }

    /// Blank lines inserted between items.
    fn spacing(&self) -> usize {
        0
    }
}
