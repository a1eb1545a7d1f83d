//! Main Model struct and core state management for the accordion.
//!
//! This module owns the fixed section set, the item collection, and the
//! per-section expansion state, and implements the operations the rendering
//! layer observes: toggling, expansion queries, and per-section item views.

use super::keys::AccordionKeyMap;
use super::style::AccordionStyles;
use super::types::{
    ItemDelegate, Section, SectionError, SectionItem, SectionState, UnknownSectionPolicy,
};
use crate::help;

/// A collapsible, sectioned list component.
///
/// `Model<I>` displays items grouped under a fixed, ordered set of sections,
/// each independently expandable and collapsible. The section set and the
/// item collection are immutable after construction (short of wholesale
/// replacement via [`set_items`]); the only mutable core state is the
/// per-section expansion boolean, which starts collapsed for every section.
///
/// Items belong to sections by title: an item whose [`SectionItem::section`]
/// matches no known section is an orphan and is silently excluded from every
/// section's view. Items may appear in the source collection interleaved
/// across sections; grouping preserves their relative source order.
///
/// # Examples
///
/// ```
/// use bubbletea_accordion::accordion::{DefaultDelegate, DefaultItem, Model};
///
/// let items = vec![
///     DefaultItem::new("Fruit", "Apple"),
///     DefaultItem::new("Vegetables", "Carrot"),
///     DefaultItem::new("Fruit", "Banana"),
/// ];
/// let mut accordion = Model::new(
///     vec!["Fruit".into(), "Vegetables".into()],
///     items,
///     DefaultDelegate::new(),
///     80,
///     24,
/// );
///
/// assert!(!accordion.is_expanded("Fruit"));
/// accordion.toggle("Fruit");
/// assert!(accordion.is_expanded("Fruit"));
/// assert_eq!(accordion.items_for("Fruit").len(), 2);
/// ```
///
/// [`set_items`]: Model::set_items
pub struct Model<I: SectionItem> {
    pub(super) title: String,
    pub(super) items: Vec<I>,
    pub(super) delegate: Box<dyn ItemDelegate<I> + Send + Sync>,

    /// Fixed, ordered section set with per-section expansion state.
    pub(super) sections: Vec<SectionState>,
    /// Index of the focused section header.
    pub(super) cursor: usize,

    pub(super) width: usize,
    pub(super) height: usize,
    pub(super) styles: AccordionStyles,

    // Status bar
    pub(super) show_status_bar: bool,
    pub(super) status_section_singular: Option<String>,
    pub(super) status_section_plural: Option<String>,

    // Help
    pub(super) help: help::Model,
    pub(super) keymap: AccordionKeyMap,

    pub(super) unknown_policy: UnknownSectionPolicy,
}

impl<I: SectionItem + Send + Sync + 'static> Model<I> {
    /// Creates an accordion with the given sections, items, and dimensions.
    ///
    /// Sections keep the order they are given in; that order is their
    /// ordinal position for the life of the model. Duplicate section titles
    /// are collapsed to the first occurrence so titles stay unique. Every
    /// section starts collapsed.
    ///
    /// # Examples
    ///
    /// ```
    /// use bubbletea_accordion::accordion::{DefaultDelegate, DefaultItem, Model};
    ///
    /// let accordion = Model::new(
    ///     vec!["A".into(), "B".into()],
    ///     vec![DefaultItem::new("A", "first")],
    ///     DefaultDelegate::new(),
    ///     80,
    ///     24,
    /// );
    /// assert_eq!(accordion.len(), 2);
    /// ```
    pub fn new<D>(
        sections: Vec<Section>,
        items: Vec<I>,
        delegate: D,
        width: usize,
        height: usize,
    ) -> Self
    where
        D: ItemDelegate<I> + Send + Sync + 'static,
    {
        let mut states: Vec<SectionState> = Vec::with_capacity(sections.len());
        for section in sections {
            if states.iter().any(|s| s.section.title() == section.title()) {
                continue;
            }
            states.push(SectionState {
                section,
                expanded: false,
            });
        }

        Self {
            title: "Sections".to_string(),
            items,
            delegate: Box::new(delegate),
            sections: states,
            cursor: 0,
            width,
            height,
            styles: AccordionStyles::default(),
            show_status_bar: true,
            status_section_singular: None,
            status_section_plural: None,
            help: help::Model::new(),
            keymap: AccordionKeyMap::default(),
            unknown_policy: UnknownSectionPolicy::default(),
        }
    }

    /// Sets the accordion title.
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Sets how operations on unknown section titles behave.
    pub fn with_unknown_section_policy(mut self, policy: UnknownSectionPolicy) -> Self {
        self.unknown_policy = policy;
        self
    }

    /// Replaces the styling configuration.
    pub fn with_styles(mut self, styles: AccordionStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Overrides the default key bindings.
    pub fn with_keymap(mut self, keymap: AccordionKeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Shows or hides the status bar and help footer.
    pub fn with_status_bar(mut self, show: bool) -> Self {
        self.show_status_bar = show;
        self
    }

    /// Sets custom singular and plural nouns for the status bar.
    pub fn set_status_bar_section_name(&mut self, singular: &str, plural: &str) {
        self.status_section_singular = Some(singular.to_string());
        self.status_section_plural = Some(plural.to_string());
    }

    /// Replaces the item collection.
    ///
    /// The section set and all expansion states are unaffected; orphan
    /// status is re-derived from the new items on the next read.
    pub fn set_items(&mut self, items: Vec<I>) {
        self.items = items;
    }

    /// Updates the component dimensions.
    pub fn set_size(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
    }

    /// Flips the expansion state of the named section.
    ///
    /// Toggling is an involution: two consecutive calls restore the
    /// original state. For a known title this operation cannot fail. An
    /// unknown title is resolved through the configured
    /// [`UnknownSectionPolicy`]: with `FallbackToFirst` the first section
    /// is toggled, with `Reject` the call is a no-op. Use [`try_toggle`]
    /// for an explicit error instead.
    ///
    /// [`try_toggle`]: Model::try_toggle
    pub fn toggle(&mut self, title: &str) {
        if let Some(index) = self.resolve_section(title) {
            self.toggle_at(index);
        }
    }

    /// Like [`toggle`], but fails loudly on an unknown title.
    ///
    /// The configured policy is not consulted; an unknown title returns
    /// [`SectionError::UnknownSection`] and changes nothing.
    ///
    /// [`toggle`]: Model::toggle
    pub fn try_toggle(&mut self, title: &str) -> Result<(), SectionError> {
        let index = self
            .section_position(title)
            .ok_or_else(|| SectionError::UnknownSection(title.to_string()))?;
        self.toggle_at(index);
        Ok(())
    }

    /// Expands the named section (idempotent).
    pub fn expand(&mut self, title: &str) {
        if let Some(index) = self.resolve_section(title) {
            self.sections[index].expanded = true;
        }
    }

    /// Collapses the named section (idempotent).
    pub fn collapse(&mut self, title: &str) {
        if let Some(index) = self.resolve_section(title) {
            self.sections[index].expanded = false;
        }
    }

    /// Expands every section.
    pub fn expand_all(&mut self) {
        for state in &mut self.sections {
            state.expanded = true;
        }
    }

    /// Collapses every section.
    pub fn collapse_all(&mut self) {
        for state in &mut self.sections {
            state.expanded = false;
        }
    }

    /// Returns the current expansion state of the named section.
    ///
    /// Pure read with no side effect. Unknown titles follow the configured
    /// policy: `FallbackToFirst` reads the first section's state, `Reject`
    /// reads `false`.
    pub fn is_expanded(&self, title: &str) -> bool {
        match self.resolve_section(title) {
            Some(index) => self.sections[index].expanded,
            None => false,
        }
    }

    /// Returns the items belonging to the named section, in source order.
    ///
    /// This is a stable filter over the full item collection: only items
    /// whose [`SectionItem::section`] equals the section's title are
    /// returned, keeping the relative order they have in the source
    /// collection. The result is a non-owning view recomputed on every
    /// call; repeated calls yield identical results. Orphan items are never
    /// returned for any section.
    ///
    /// # Examples
    ///
    /// ```
    /// use bubbletea_accordion::accordion::{DefaultDelegate, DefaultItem, Model};
    ///
    /// let items = vec![
    ///     DefaultItem::new("A", "x1"),
    ///     DefaultItem::new("B", "y1"),
    ///     DefaultItem::new("A", "x2"),
    /// ];
    /// let accordion = Model::new(
    ///     vec!["A".into(), "B".into()],
    ///     items,
    ///     DefaultDelegate::new(),
    ///     80,
    ///     24,
    /// );
    ///
    /// let texts: Vec<_> = accordion
    ///     .items_for("A")
    ///     .iter()
    ///     .map(|i| i.text.clone())
    ///     .collect();
    /// assert_eq!(texts, vec!["x1", "x2"]);
    /// ```
    pub fn items_for(&self, title: &str) -> Vec<&I> {
        let Some(index) = self.resolve_section(title) else {
            return Vec::new();
        };
        let resolved = self.sections[index].section.title();
        self.items
            .iter()
            .filter(|item| item.section() == resolved)
            .collect()
    }

    /// Returns the items whose section title matches no known section.
    ///
    /// Orphans are excluded from every section's view rather than surfaced
    /// as an error; this accessor makes them observable for diagnostics and
    /// tests.
    pub fn orphan_items(&self) -> Vec<&I> {
        self.items
            .iter()
            .filter(|item| self.section_position(item.section()).is_none())
            .collect()
    }

    /// The fixed section set, in order.
    pub fn sections(&self) -> Vec<&Section> {
        self.sections.iter().map(|s| &s.section).collect()
    }

    /// The section titles, in order.
    pub fn section_titles(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.section.title()).collect()
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the accordion has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Number of items in the source collection, orphans included.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Index of the focused section header.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Current width in terminal columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Current height in terminal rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The focused section, if any.
    pub fn focused_section(&self) -> Option<&Section> {
        self.sections.get(self.cursor).map(|s| &s.section)
    }

    /// Moves focus to the given section index, clamped to the valid range.
    pub fn set_cursor(&mut self, index: usize) {
        if !self.sections.is_empty() {
            self.cursor = index.min(self.sections.len() - 1);
        }
    }

    /// Flips the expansion state of the section at the given index.
    pub(super) fn toggle_at(&mut self, index: usize) {
        if let Some(state) = self.sections.get_mut(index) {
            state.expanded = !state.expanded;
        }
    }

    pub(super) fn set_expanded_at(&mut self, index: usize, expanded: bool) {
        if let Some(state) = self.sections.get_mut(index) {
            state.expanded = expanded;
        }
    }

    pub(super) fn section_position(&self, title: &str) -> Option<usize> {
        self.sections
            .iter()
            .position(|s| s.section.title() == title)
    }

    // Resolves a title to a section index, applying the unknown-title
    // policy. None means the operation should be dropped.
    fn resolve_section(&self, title: &str) -> Option<usize> {
        match self.section_position(title) {
            Some(index) => Some(index),
            None => match self.unknown_policy {
                UnknownSectionPolicy::FallbackToFirst if !self.sections.is_empty() => Some(0),
                _ => None,
            },
        }
    }
}
