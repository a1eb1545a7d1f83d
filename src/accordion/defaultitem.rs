//! Default item implementation and delegate for the accordion.
//!
//! `DefaultItem` is the ready-to-use item type: one line of text that
//! belongs to a named section, carrying a process-unique id for stable
//! rendering identity. `DefaultDelegate` renders these items as a marker
//! plus the item text, indented beneath their section header.

use std::sync::atomic::{AtomicU64, Ordering};

use lipgloss_extras::prelude::*;
use serde::{Deserialize, Serialize};

use super::style::BULLET;
use super::types::{ItemDelegate, SectionItem};
use super::Model;

fn next_item_id() -> u64 {
    static NEXT_ID: AtomicU64 = AtomicU64::new(1);
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// A single accordion entry: one line of text under a named section.
///
/// The id is assigned at construction (including deserialization) from a
/// process-wide counter and never reassigned. It exists purely for stable
/// iteration/rendering identity, not for lookup or ordering.
///
/// The serialized shape matches the reference data format: a `section`
/// field and an `item` field, both strings.
///
/// # Examples
///
/// ```
/// use bubbletea_accordion::accordion::DefaultItem;
///
/// let entry = DefaultItem::new("Fruit", "Apple");
/// assert_eq!(entry.section, "Fruit");
/// assert_eq!(entry.text, "Apple");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultItem {
    #[serde(skip, default = "next_item_id")]
    id: u64,
    /// Title of the owning section.
    pub section: String,
    /// Display content of the entry.
    #[serde(rename = "item")]
    pub text: String,
}

impl DefaultItem {
    /// Creates an entry under the given section.
    pub fn new(section: &str, text: &str) -> Self {
        Self {
            id: next_item_id(),
            section: section.to_string(),
            text: text.to_string(),
        }
    }

    /// The entry's process-unique identity.
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl std::fmt::Display for DefaultItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl SectionItem for DefaultItem {
    fn section(&self) -> &str {
        &self.section
    }
}

/// Styling for default item rendering.
#[derive(Debug, Clone)]
pub struct DefaultItemStyles {
    /// Style for the item line.
    pub normal_item: Style,
    /// Style for the marker preceding the item text.
    pub marker: Style,
}

impl Default for DefaultItemStyles {
    fn default() -> Self {
        Self {
            normal_item: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#1a1a1a",
                    Dark: "#dddddd",
                })
                .padding(0, 0, 0, 4),
            marker: Style::new().foreground(AdaptiveColor {
                Light: "#9B9B9B",
                Dark: "#5C5C5C",
            }),
        }
    }
}

/// Delegate that renders any [`SectionItem`] as a single marked line.
#[derive(Debug, Clone)]
pub struct DefaultDelegate {
    /// Whether to prefix each item with a marker.
    pub show_marker: bool,
    /// Styling used for item rendering.
    pub styles: DefaultItemStyles,
    spacing: usize,
}

impl Default for DefaultDelegate {
    fn default() -> Self {
        Self {
            show_marker: true,
            styles: DefaultItemStyles::default(),
            spacing: 0,
        }
    }
}

impl DefaultDelegate {
    /// Creates a delegate with default styles and layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of blank lines between items.
    pub fn with_spacing(mut self, spacing: usize) -> Self {
        self.spacing = spacing;
        self
    }
}

impl<I: SectionItem + Send + Sync + 'static> ItemDelegate<I> for DefaultDelegate {
    fn render(&self, m: &Model<I>, _index: usize, item: &I) -> String {
        if m.width() == 0 {
            return String::new();
        }

        let line = if self.show_marker {
            let marker = self.styles.marker.clone().render(BULLET);
            format!("{} {}", marker, item)
        } else {
            item.to_string()
        };
        self.styles.normal_item.clone().render(&line)
    }

    fn spacing(&self) -> usize {
        self.spacing
    }
}
