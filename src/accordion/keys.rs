//! Key bindings for accordion navigation and section toggling.
//!
//! ## Navigation keys
//!
//! - **Header movement**: `↑/k` (up), `↓/j` (down)
//! - **Jump**: `g/home` (first section), `G/end` (last section)
//!
//! ## Section keys
//!
//! - **Toggle**: `enter/space` (flip the focused section)
//! - **Expand / collapse**: `→/l` (expand), `←/h` (collapse)
//! - **All sections**: `e` (expand all), `c` (collapse all)
//!
//! ## Help and quit
//!
//! - **Help**: `?` (show/hide the full help view)
//! - **Quit**: `q/esc`, `ctrl+c` (force quit)

use crate::key;
use crossterm::event::{KeyCode, KeyModifiers};

/// Key bindings for accordion navigation, toggling, help, and exit actions.
#[derive(Debug, Clone)]
pub struct AccordionKeyMap {
    /// Move focus up one section header.
    pub cursor_up: key::Binding,
    /// Move focus down one section header.
    pub cursor_down: key::Binding,
    /// Jump to the first section.
    pub go_to_start: key::Binding,
    /// Jump to the last section.
    pub go_to_end: key::Binding,
    /// Toggle the focused section.
    pub toggle: key::Binding,
    /// Expand the focused section.
    pub expand: key::Binding,
    /// Collapse the focused section.
    pub collapse: key::Binding,
    /// Expand every section.
    pub expand_all: key::Binding,
    /// Collapse every section.
    pub collapse_all: key::Binding,
    /// Show the full help panel.
    pub show_full_help: key::Binding,
    /// Close the full help panel.
    pub close_full_help: key::Binding,
    /// Quit.
    pub quit: key::Binding,
    /// Force quit.
    pub force_quit: key::Binding,
}

impl Default for AccordionKeyMap {
    fn default() -> Self {
        Self {
            cursor_up: key::Binding::new(vec![KeyCode::Up, KeyCode::Char('k')])
                .with_help("↑/k", "up"),
            cursor_down: key::Binding::new(vec![KeyCode::Down, KeyCode::Char('j')])
                .with_help("↓/j", "down"),
            go_to_start: key::Binding::new(vec![KeyCode::Home, KeyCode::Char('g')])
                .with_help("g/home", "go to start"),
            go_to_end: key::Binding::new(vec![KeyCode::End, KeyCode::Char('G')])
                .with_help("G/end", "go to end"),
            toggle: key::Binding::new(vec![KeyCode::Enter, KeyCode::Char(' ')])
                .with_help("enter", "toggle section"),
            expand: key::Binding::new(vec![KeyCode::Right, KeyCode::Char('l')])
                .with_help("→/l", "expand"),
            collapse: key::Binding::new(vec![KeyCode::Left, KeyCode::Char('h')])
                .with_help("←/h", "collapse"),
            expand_all: key::Binding::new(vec![KeyCode::Char('e')]).with_help("e", "expand all"),
            collapse_all: key::Binding::new(vec![KeyCode::Char('c')])
                .with_help("c", "collapse all"),
            show_full_help: key::Binding::new(vec![KeyCode::Char('?')]).with_help("?", "more"),
            close_full_help: key::Binding::new(vec![KeyCode::Char('?')])
                .with_help("?", "close help"),
            quit: key::Binding::new(vec![KeyCode::Char('q'), KeyCode::Esc]).with_help("q", "quit"),
            force_quit: key::Binding::new(vec![(KeyCode::Char('c'), KeyModifiers::CONTROL)])
                .with_help("ctrl+c", "force quit"),
        }
    }
}

impl key::KeyMap for AccordionKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![
            &self.cursor_up,
            &self.cursor_down,
            &self.toggle,
            &self.quit,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            // Column 1: Navigation
            vec![
                &self.cursor_up,
                &self.cursor_down,
                &self.go_to_start,
                &self.go_to_end,
            ],
            // Column 2: Sections
            vec![
                &self.toggle,
                &self.expand,
                &self.collapse,
                &self.expand_all,
                &self.collapse_all,
            ],
            // Column 3: Help and Quit
            vec![&self.show_full_help, &self.quit],
        ]
    }
}
