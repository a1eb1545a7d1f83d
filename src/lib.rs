#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-accordion/")]

//! # bubbletea-accordion
//!
//! A collapsible, sectioned list ("accordion") component for terminal
//! applications built with [bubbletea-rs](https://github.com/whit3rabbit/bubbletea-rs).
//!
//! ## Overview
//!
//! The accordion displays a static dataset of items grouped by section,
//! with each section independently expandable and collapsible via a toggle.
//! The component follows the Elm Architecture pattern with `init()`,
//! `update()`, and `view()` methods, so it drops into any bubbletea-rs
//! application — or can be driven programmatically without a terminal at
//! all, since every piece of state is observable through plain read
//! operations.
//!
//! ## Features
//!
//! - **Independent section state** with per-section expand/collapse toggles
//! - **Stable grouping**: items may interleave sections in the source data
//!   and still group correctly, preserving source order
//! - **Type-safe key bindings** with contextual help integration
//! - **Adaptive styling** through customizable lipgloss styles
//! - **JSON data loading** for the common sections-plus-items shape
//!
//! ## Quick start
//!
//! ```rust
//! use bubbletea_accordion::prelude::*;
//!
//! let items = vec![
//!     DefaultItem::new("Fruit", "Apple"),
//!     DefaultItem::new("Vegetables", "Carrot"),
//!     DefaultItem::new("Fruit", "Banana"),
//! ];
//!
//! let mut accordion = Accordion::new(
//!     vec!["Fruit".into(), "Vegetables".into()],
//!     items,
//!     DefaultDelegate::new(),
//!     80,
//!     24,
//! )
//! .with_title("Groceries");
//!
//! accordion.toggle("Fruit");
//! assert!(accordion.is_expanded("Fruit"));
//! assert!(!accordion.is_expanded("Vegetables"));
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_accordion::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     accordion: Accordion<DefaultItem>,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let accordion = Accordion::new(
//!             vec!["Section 1".into(), "Section 2".into()],
//!             vec![DefaultItem::new("Section 1", "First item")],
//!             DefaultDelegate::new(),
//!             80,
//!             24,
//!         );
//!         (Self { accordion }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.accordion.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.accordion.view()
//!     }
//! }
//! ```

pub mod accordion;
pub mod help;
pub mod key;

pub use accordion::Model as Accordion;
pub use accordion::{
    AccordionData, AccordionKeyMap, AccordionStyles, DataError, DefaultDelegate, DefaultItem,
    DefaultItemStyles, ItemDelegate, Section, SectionError, SectionItem, UnknownSectionPolicy,
};
pub use help::Model as HelpModel;
pub use key::{matches, Binding, Help as KeyHelp, KeyMap, KeyPress};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_accordion::prelude::*;
/// ```
pub mod prelude {
    pub use crate::accordion::Model as Accordion;
    pub use crate::accordion::{
        AccordionData, AccordionKeyMap, AccordionStyles, DataError, DefaultDelegate, DefaultItem,
        DefaultItemStyles, ItemDelegate, Section, SectionError, SectionItem, UnknownSectionPolicy,
    };
    pub use crate::help::Model as HelpModel;
    pub use crate::key::{matches, Binding, Help as KeyHelp, KeyMap, KeyPress};
}
