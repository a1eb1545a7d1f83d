//! Loading accordion data from JSON.
//!
//! The accepted shape mirrors the reference data format: a list of section
//! titles plus a flat item list in which every item names its section.
//! Items may appear interleaved across sections; grouping happens in the
//! model, not in the data.
//!
//! ```json
//! {
//!   "sections": ["Fruit", "Vegetables"],
//!   "items": [
//!     { "section": "Fruit", "item": "Apple" },
//!     { "section": "Vegetables", "item": "Carrot" },
//!     { "section": "Fruit", "item": "Banana" }
//!   ]
//! }
//! ```

use serde::Deserialize;
use thiserror::Error;

use super::defaultitem::{DefaultDelegate, DefaultItem};
use super::types::Section;
use super::Model;

/// Errors from parsing accordion data.
#[derive(Debug, Error)]
pub enum DataError {
    /// The input is not valid JSON of the expected shape.
    #[error("invalid accordion data: {0}")]
    Parse(#[from] serde_json::Error),

    /// The section list names the same title twice.
    #[error("duplicate section title: {0:?}")]
    DuplicateSection(String),
}

/// A parsed accordion dataset: section titles plus items.
#[derive(Debug, Clone, Deserialize)]
pub struct AccordionData {
    /// Section titles in display order.
    pub sections: Vec<String>,
    /// The item list, possibly interleaved across sections.
    pub items: Vec<DefaultItem>,
}

impl AccordionData {
    /// Parses a dataset from a JSON string.
    ///
    /// Duplicate section titles are rejected here rather than silently
    /// collapsed, since data files are the one place a duplicate points at
    /// an authoring mistake worth surfacing.
    ///
    /// # Examples
    ///
    /// ```
    /// use bubbletea_accordion::accordion::AccordionData;
    ///
    /// let data = AccordionData::from_json(
    ///     r#"{ "sections": ["A"], "items": [{ "section": "A", "item": "x" }] }"#,
    /// )
    /// .unwrap();
    /// assert_eq!(data.sections, vec!["A"]);
    /// assert_eq!(data.items.len(), 1);
    /// ```
    pub fn from_json(input: &str) -> Result<Self, DataError> {
        let data: Self = serde_json::from_str(input)?;
        for (i, title) in data.sections.iter().enumerate() {
            if data.sections[..i].contains(title) {
                return Err(DataError::DuplicateSection(title.clone()));
            }
        }
        Ok(data)
    }

    /// Builds an accordion model from this dataset with the default
    /// delegate and the given dimensions.
    pub fn into_model(self, width: usize, height: usize) -> Model<DefaultItem> {
        let sections = self.sections.into_iter().map(Section::from).collect();
        Model::new(sections, self.items, DefaultDelegate::new(), width, height)
    }
}
