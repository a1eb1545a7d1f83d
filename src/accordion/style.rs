//! Styling for the accordion component.
//!
//! All default styles use `AdaptiveColor`, so they adjust automatically to
//! light and dark terminal themes. Customize by replacing fields on
//! [`AccordionStyles`]:
//!
//! ```rust
//! use bubbletea_accordion::accordion::style::AccordionStyles;
//! use lipgloss_extras::prelude::*;
//!
//! let mut styles = AccordionStyles::default();
//! styles.title = Style::new()
//!     .background(Color::from("#7D56F4"))
//!     .foreground(Color::from("#FFFFFF"))
//!     .padding(0, 1, 0, 1);
//! ```

use lipgloss_extras::prelude::*;

/// Direction indicator shown on an expanded section header.
pub const EXPANDED_INDICATOR: &str = "▾";

/// Direction indicator shown on a collapsed section header.
pub const COLLAPSED_INDICATOR: &str = "▸";

/// Unicode bullet character (•) used as the default item marker.
pub const BULLET: &str = "•";

/// Unicode ellipsis character (…) used when truncating long lines.
pub const ELLIPSIS: &str = "…";

/// Styling configuration for all accordion UI elements.
#[derive(Debug, Clone)]
pub struct AccordionStyles {
    /// Style for the title bar container.
    pub title_bar: Style,
    /// Style for the accordion title text.
    pub title: Style,
    /// Style for an unfocused section header line.
    pub section_header: Style,
    /// Style for the focused section header line.
    pub focused_section_header: Style,
    /// Style for the expand/collapse direction indicator.
    pub indicator: Style,
    /// Style for the dim per-section item count.
    pub item_count: Style,
    /// Style for the "No sections" message.
    pub no_sections: Style,
    /// Style for the status bar container.
    pub status_bar: Style,
    /// Style for help text area.
    pub help_style: Style,
}

impl Default for AccordionStyles {
    fn default() -> Self {
        let subdued_color = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };

        Self {
            title_bar: Style::new().padding(0, 0, 1, 2),
            title: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .padding(0, 1, 0, 1),
            section_header: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#1a1a1a",
                    Dark: "#dddddd",
                })
                .padding(0, 0, 0, 2),
            focused_section_header: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#EE6FF8",
                    Dark: "#EE6FF8",
                })
                .bold(true)
                .padding(0, 0, 0, 2),
            indicator: Style::new().foreground(AdaptiveColor {
                Light: "#8E8E8E",
                Dark: "#747373",
            }),
            item_count: Style::new().foreground(subdued_color),
            no_sections: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            status_bar: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#A49FA5",
                    Dark: "#777777",
                })
                .padding(0, 0, 1, 2),
            help_style: Style::new().padding(1, 0, 0, 2),
        }
    }
}
