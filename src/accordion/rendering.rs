//! View rendering for the accordion component.
//!
//! The view is a pure function of model state, recomputed on every render
//! pass: a title bar, one header line per section in fixed order (with a
//! direction indicator reflecting the expansion state), the delegate-drawn
//! item rows for expanded sections, and a status/help footer.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use super::style::{BULLET, COLLAPSED_INDICATOR, ELLIPSIS, EXPANDED_INDICATOR};
use super::types::SectionItem;
use super::Model;

impl<I: SectionItem + Send + Sync + 'static> Model<I> {
    /// Renders the title bar.
    pub(super) fn view_header(&self) -> String {
        let title = self.styles.title.clone().render(&self.title);
        self.styles.title_bar.clone().render(&title)
    }

    /// Renders every section: header line plus, when expanded, its items.
    pub(super) fn view_sections(&self) -> String {
        if self.sections.is_empty() {
            return self.styles.no_sections.clone().render("No sections.");
        }

        let mut lines = Vec::new();
        for (index, state) in self.sections.iter().enumerate() {
            lines.push(self.view_section_header(index));

            if state.expanded {
                let body = self.view_section_items(state.section.title());
                if !body.is_empty() {
                    lines.push(body);
                }
            }
        }
        lines.join("\n")
    }

    // One header line: direction indicator, title, dim item count. The
    // focused header gets the highlight style.
    fn view_section_header(&self, index: usize) -> String {
        let state = &self.sections[index];
        let indicator = if state.expanded {
            EXPANDED_INDICATOR
        } else {
            COLLAPSED_INDICATOR
        };

        let header_style = if index == self.cursor {
            &self.styles.focused_section_header
        } else {
            &self.styles.section_header
        };

        let count = self.items_for(state.section.title()).len();
        let title = truncate(state.section.title(), self.width.saturating_sub(12));

        let indicator = self.styles.indicator.clone().render(indicator);
        let header = header_style.clone().render(&title);
        let count = self.styles.item_count.clone().render(&format!("({count})"));
        format!("{} {} {}", indicator, header, count)
    }

    // Item rows for one expanded section, in preserved source order. The
    // delegate receives each item's original index in the full collection.
    fn view_section_items(&self, title: &str) -> String {
        let mut rendered_items = Vec::new();
        let spacing = self.delegate.spacing();

        for (original_index, item) in self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.section() == title)
        {
            let rendered = self.delegate.render(self, original_index, item);
            if rendered.is_empty() {
                continue;
            }
            if !rendered_items.is_empty() {
                for _ in 0..spacing {
                    rendered_items.push(String::new());
                }
            }
            rendered_items.push(rendered);
        }

        rendered_items.join("\n")
    }

    /// Renders the footer: section/item counts and contextual help.
    pub(super) fn view_footer(&self) -> String {
        if !self.show_status_bar {
            return String::new();
        }

        let mut footer = String::new();
        if !self.is_empty() {
            let singular = self.status_section_singular.as_deref().unwrap_or("section");
            let plural = self.status_section_plural.as_deref().unwrap_or("sections");
            let noun = if self.len() == 1 { singular } else { plural };
            let status = format!(
                "{} {} {} {} items",
                self.len(),
                noun,
                BULLET,
                self.item_count()
            );
            footer.push_str(&self.styles.status_bar.clone().render(&status));
        }

        let help_view = self.help.view(self);
        if !help_view.is_empty() {
            if !footer.is_empty() {
                footer.push('\n');
            }
            footer.push_str(&self.styles.help_style.clone().render(&help_view));
        }
        footer
    }
}

// Width-aware truncation: cuts on grapheme boundaries and appends an
// ellipsis when the text does not fit. A max_width of 0 disables it.
fn truncate(text: &str, max_width: usize) -> String {
    if max_width == 0 || text.width() <= max_width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    let budget = max_width.saturating_sub(ELLIPSIS.width());
    for grapheme in text.graphemes(true) {
        let w = grapheme.width();
        if used + w > budget {
            break;
        }
        out.push_str(grapheme);
        used += w;
    }
    out.push_str(ELLIPSIS);
    out
}
