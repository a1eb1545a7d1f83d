//! Accordion component: a collapsible, sectioned list.
//!
//! This module exposes a generic `Model<I: SectionItem>` plus supporting
//! traits and submodules:
//! - `SectionItem`: implement for your item type; must be `Display + Clone`
//!   and name its owning section via `section()`
//! - `ItemDelegate`: controls item `render`, `height`, and `spacing`
//! - Submodules: `defaultitem`, `data`, `keys`, and `style`
//!
//! ## Architecture overview
//!
//! The accordion holds a fixed, ordered set of sections and a flat item
//! collection. Each section carries exactly one piece of mutable state: an
//! expanded/collapsed boolean, initially collapsed. Items belong to
//! sections by title; grouping is a stable filter over the source
//! collection, recomputed on demand, so the item list may interleave
//! sections freely and still group correctly. Items whose section title
//! matches no known section are orphans: never rendered, never an error.
//!
//! Expansion state is stored with each section entry rather than in a
//! positional boolean array, so state cannot be attributed to the wrong
//! section. For callers that address sections by title anyway, unknown
//! titles are resolved by a configurable [`UnknownSectionPolicy`]; the
//! `try_*` operations return an explicit error instead.
//!
//! ## Keyboard interaction
//!
//! `↑/k` and `↓/j` move focus between section headers, `enter`/`space`
//! toggles the focused section, `→/l` and `←/h` expand and collapse it,
//! `e`/`c` expand or collapse all sections, `?` toggles the full help
//! view, and `q` quits.
//!
//! ## Help integration
//!
//! The accordion implements `help::KeyMap`, so the embedded `help::Model`
//! renders contextual key bindings in the footer automatically.

/// Default item type and delegate for basic accordion usage.
pub mod defaultitem;

/// JSON loading for accordion datasets.
pub mod data;

/// Key bindings for accordion navigation and toggling.
pub mod keys;

/// Visual styling and indicator glyphs.
pub mod style;

// Internal modules
mod model;
mod rendering;
mod types;

#[cfg(test)]
mod tests;

/// The main accordion component model.
pub use model::Model;

/// Key binding configuration for accordion interaction.
pub use keys::AccordionKeyMap;

/// Visual styling configuration for accordion appearance.
pub use style::AccordionStyles;

/// Core traits and types: items, sections, delegates, policies, errors.
pub use types::{ItemDelegate, Section, SectionError, SectionItem, UnknownSectionPolicy};

/// Ready-to-use item type, delegate, and data loading.
pub use data::{AccordionData, DataError};
pub use defaultitem::{DefaultDelegate, DefaultItem, DefaultItemStyles};

use crate::{help, key};
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};

// Help integration - contextual key bindings for the footer.
impl<I: SectionItem + Send + Sync + 'static> help::KeyMap for Model<I> {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![
            &self.keymap.cursor_up,
            &self.keymap.cursor_down,
            &self.keymap.toggle,
            &self.keymap.quit,
            &self.keymap.show_full_help,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            // Column 1: Navigation
            vec![
                &self.keymap.cursor_up,
                &self.keymap.cursor_down,
                &self.keymap.go_to_start,
                &self.keymap.go_to_end,
            ],
            // Column 2: Sections
            vec![
                &self.keymap.toggle,
                &self.keymap.expand,
                &self.keymap.collapse,
                &self.keymap.expand_all,
                &self.keymap.collapse_all,
            ],
            // Column 3: Help and Quit
            vec![
                &self.keymap.show_full_help,
                &self.keymap.close_full_help,
                &self.keymap.quit,
            ],
        ]
    }
}

// BubbleTeaModel implementation - integrates with the bubbletea-rs runtime.
impl<I: SectionItem + Send + Sync + 'static> BubbleTeaModel for Model<I> {
    /// Initializes an empty accordion with default settings.
    fn init() -> (Self, Option<Cmd>) {
        let model = Self::new(vec![], vec![], defaultitem::DefaultDelegate::new(), 80, 24);
        (model, None)
    }

    /// Handles keyboard input.
    ///
    /// Each message is processed synchronously and atomically: the toggle
    /// for one key press completes before the next render pass, so there is
    /// no partially-applied state to observe. Messages other than key
    /// presses are ignored.
    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        let key_msg = msg.downcast_ref::<KeyMsg>()?;

        if self.keymap.cursor_up.matches(key_msg) {
            self.cursor = self.cursor.saturating_sub(1);
        } else if self.keymap.cursor_down.matches(key_msg) {
            if self.cursor + 1 < self.len() {
                self.cursor += 1;
            }
        } else if self.keymap.go_to_start.matches(key_msg) {
            self.cursor = 0;
        } else if self.keymap.go_to_end.matches(key_msg) {
            self.cursor = self.len().saturating_sub(1);
        } else if self.keymap.toggle.matches(key_msg) {
            self.toggle_at(self.cursor);
        } else if self.keymap.expand.matches(key_msg) {
            self.set_expanded_at(self.cursor, true);
        } else if self.keymap.collapse.matches(key_msg) {
            self.set_expanded_at(self.cursor, false);
        } else if self.keymap.expand_all.matches(key_msg) {
            self.expand_all();
        } else if self.keymap.collapse_all.matches(key_msg) {
            self.collapse_all();
        } else if self.keymap.show_full_help.matches(key_msg)
            || self.keymap.close_full_help.matches(key_msg)
        {
            self.help.show_all = !self.help.show_all;
        } else if self.keymap.quit.matches(key_msg) || self.keymap.force_quit.matches(key_msg) {
            return Some(bubbletea_rs::quit());
        }
        None
    }

    /// Renders the complete accordion view.
    ///
    /// Layout, top to bottom: title bar; one header line per section in
    /// fixed order, with the direction indicator reflecting the expansion
    /// state; the items of each expanded section in preserved source
    /// order; a footer with section/item counts and contextual help.
    /// Collapsed sections contribute their header line and nothing else.
    fn view(&self) -> String {
        let mut sections = Vec::new();

        let header = self.view_header();
        if !header.is_empty() {
            sections.push(header);
        }

        sections.push(self.view_sections());

        let footer = self.view_footer();
        if !footer.is_empty() {
            sections.push(footer);
        }

        sections.join("\n")
    }
}
