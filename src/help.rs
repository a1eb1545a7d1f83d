//! Contextual help rendered from key bindings.
//!
//! The help component turns a [`KeyMap`] into user-facing help text. It has
//! two display modes: a compact single-line view for status bars and an
//! expanded multi-column view. Both honor an optional width limit, dropping
//! trailing entries and appending an ellipsis when space runs out, and both
//! skip disabled bindings automatically.
//!
//! # Examples
//!
//! ```rust
//! use bubbletea_accordion::help::{KeyMap, Model};
//! use bubbletea_accordion::key::Binding;
//! use crossterm::event::KeyCode;
//!
//! struct AppKeys {
//!     toggle: Binding,
//!     quit: Binding,
//! }
//!
//! impl KeyMap for AppKeys {
//!     fn short_help(&self) -> Vec<&Binding> {
//!         vec![&self.toggle, &self.quit]
//!     }
//!
//!     fn full_help(&self) -> Vec<Vec<&Binding>> {
//!         vec![vec![&self.toggle], vec![&self.quit]]
//!     }
//! }
//!
//! let keys = AppKeys {
//!     toggle: Binding::new(vec![KeyCode::Enter]).with_help("enter", "toggle"),
//!     quit: Binding::new(vec![KeyCode::Char('q')]).with_help("q", "quit"),
//! };
//! let help = Model::new();
//! let line = help.view(&keys); // "enter toggle • q quit"
//! ```

use crate::key;
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

pub use crate::key::KeyMap;

/// Styling for the elements of the help view.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Style for the truncation ellipsis.
    pub ellipsis: Style,
    /// Style for key names in the short help view.
    pub short_key: Style,
    /// Style for descriptions in the short help view.
    pub short_desc: Style,
    /// Style for the separator in the short help view.
    pub short_separator: Style,
    /// Style for key names in the full help view.
    pub full_key: Style,
    /// Style for descriptions in the full help view.
    pub full_desc: Style,
    /// Style for the separator between full help columns.
    pub full_separator: Style,
}

impl Default for Styles {
    fn default() -> Self {
        let key_style = Style::new().foreground(AdaptiveColor {
            Light: "#909090",
            Dark: "#626262",
        });
        let desc_style = Style::new().foreground(AdaptiveColor {
            Light: "#B2B2B2",
            Dark: "#4A4A4A",
        });
        let sep_style = Style::new().foreground(AdaptiveColor {
            Light: "#DDDADA",
            Dark: "#3C3C3C",
        });

        Self {
            ellipsis: sep_style.clone(),
            short_key: key_style.clone(),
            short_desc: desc_style.clone(),
            short_separator: sep_style.clone(),
            full_key: key_style,
            full_desc: desc_style,
            full_separator: sep_style,
        }
    }
}

/// The help model: display mode, width limit, separators, and styles.
#[derive(Debug, Clone)]
pub struct Model {
    /// Toggles between short (single-line) and full (multi-column) view.
    pub show_all: bool,
    /// Maximum width in characters; 0 means unconstrained.
    pub width: usize,
    /// Separator between items in the short view.
    pub short_separator: String,
    /// Separator between columns in the full view.
    pub full_separator: String,
    /// Character shown when content is truncated.
    pub ellipsis: String,
    /// Styling for all visual elements.
    pub styles: Styles,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            show_all: false,
            width: 0,
            short_separator: " • ".to_string(),
            full_separator: "    ".to_string(),
            ellipsis: "…".to_string(),
            styles: Styles::default(),
        }
    }
}

impl Model {
    /// Creates a help model with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum render width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Renders help for the given key map in the current display mode.
    pub fn view<K: KeyMap>(&self, keymap: &K) -> String {
        if self.show_all {
            self.full_help_view(keymap.full_help())
        } else {
            self.short_help_view(keymap.short_help())
        }
    }

    /// Renders the compact single-line help view.
    pub fn short_help_view(&self, bindings: Vec<&key::Binding>) -> String {
        if bindings.is_empty() {
            return String::new();
        }

        let mut builder = String::new();
        let mut total_width = 0;
        let separator = self
            .styles
            .short_separator
            .clone()
            .inline(true)
            .render(&self.short_separator);

        for kb in bindings {
            if !kb.enabled() {
                continue;
            }

            let sep = if total_width > 0 { separator.as_str() } else { "" };
            let help = kb.help();
            let key_part = self.styles.short_key.clone().inline(true).render(&help.key);
            let desc_part = self
                .styles
                .short_desc
                .clone()
                .inline(true)
                .render(&help.desc);
            let item_str = format!("{}{} {}", sep, key_part, desc_part);
            let item_width = lipgloss::width_visible(&item_str);

            if let Some(tail) = self.should_add_item(total_width, item_width) {
                if !tail.is_empty() {
                    builder.push_str(&tail);
                }
                break;
            }

            total_width += item_width;
            builder.push_str(&item_str);
        }
        builder
    }

    /// Renders the expanded multi-column help view.
    ///
    /// Each group becomes a column of "key description" rows; columns are
    /// joined top-aligned with the configured separator between them.
    pub fn full_help_view(&self, groups: Vec<Vec<&key::Binding>>) -> String {
        if groups.is_empty() {
            return String::new();
        }

        let mut columns = Vec::new();
        let mut total_width = 0;
        let separator = self
            .styles
            .full_separator
            .clone()
            .inline(true)
            .render(&self.full_separator);

        for group in groups.iter() {
            if group.is_empty() || !should_render_column(group) {
                continue;
            }

            let rows: Vec<String> = group
                .iter()
                .filter(|b| b.enabled())
                .map(|b| {
                    let help = b.help();
                    let key_part = self.styles.full_key.clone().inline(true).render(&help.key);
                    let desc_part = self
                        .styles
                        .full_desc
                        .clone()
                        .inline(true)
                        .render(&help.desc);
                    format!("{} {}", key_part, desc_part)
                })
                .collect();

            let col_str = rows.join("\n");
            let col_width = lipgloss::width_visible(&col_str);

            if let Some(tail) = self.should_add_item(total_width, col_width) {
                if !tail.is_empty() {
                    columns.push(tail);
                }
                break;
            }

            total_width += col_width;
            columns.push(col_str);
        }

        let mut result_parts = Vec::new();
        for (i, col) in columns.iter().enumerate() {
            if i > 0 {
                result_parts.push(separator.as_str());
            }
            result_parts.push(col.as_str());
        }

        lipgloss::join_horizontal(lipgloss::TOP, &result_parts)
    }

    // Returns None when an item of the given width still fits, otherwise the
    // (possibly empty) truncation tail to append instead.
    fn should_add_item(&self, total_width: usize, item_width: usize) -> Option<String> {
        if self.width > 0 && total_width + item_width > self.width {
            let tail = format!(
                " {}",
                self.styles
                    .ellipsis
                    .clone()
                    .inline(true)
                    .render(&self.ellipsis)
            );
            if total_width + lipgloss::width_visible(&tail) < self.width {
                return Some(tail);
            }
            return Some("".to_string());
        }
        None
    }
}

/// A column should be rendered if it contains at least one enabled binding.
pub fn should_render_column(bindings: &[&key::Binding]) -> bool {
    bindings.iter().any(|b| b.enabled())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::Binding;
    use crossterm::event::KeyCode;

    struct TestKeys {
        up: Binding,
        down: Binding,
        quit: Binding,
    }

    impl KeyMap for TestKeys {
        fn short_help(&self) -> Vec<&Binding> {
            vec![&self.up, &self.down, &self.quit]
        }

        fn full_help(&self) -> Vec<Vec<&Binding>> {
            vec![vec![&self.up, &self.down], vec![&self.quit]]
        }
    }

    fn test_keys() -> TestKeys {
        TestKeys {
            up: Binding::new(vec![KeyCode::Up]).with_help("↑", "up"),
            down: Binding::new(vec![KeyCode::Down]).with_help("↓", "down"),
            quit: Binding::new(vec![KeyCode::Char('q')]).with_help("q", "quit"),
        }
    }

    fn visible(s: &str) -> String {
        String::from_utf8(strip_ansi_escapes::strip(s)).unwrap()
    }

    #[test]
    fn test_short_view_lists_bindings_in_order() {
        let help = Model::new();
        let out = visible(&help.view(&test_keys()));
        assert_eq!(out, "↑ up • ↓ down • q quit");
    }

    #[test]
    fn test_full_view_renders_columns() {
        let mut help = Model::new();
        help.show_all = true;
        let out = visible(&help.view(&test_keys()));
        assert!(out.contains("↑ up"));
        assert!(out.contains("q quit"));
        assert_eq!(out.lines().count(), 2);
    }

    #[test]
    fn test_disabled_bindings_are_hidden() {
        let mut keys = test_keys();
        keys.down.set_enabled(false);
        let help = Model::new();
        let out = visible(&help.view(&keys));
        assert!(!out.contains("down"));
    }

    #[test]
    fn test_width_limit_truncates_with_ellipsis() {
        let help = Model::new().with_width(12);
        let out = visible(&help.view(&test_keys()));
        assert!(out.len() < "↑ up • ↓ down • q quit".len());
    }

    #[test]
    fn test_empty_column_not_rendered() {
        let keys = test_keys();
        assert!(should_render_column(&[&keys.up]));
        let disabled = Binding::new(vec![KeyCode::Esc]).with_disabled();
        assert!(!should_render_column(&[&disabled]));
        assert!(!should_render_column(&[]));
    }
}
