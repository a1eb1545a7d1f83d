//! Basic accordion demo.
//!
//! Three sections of grocery items, all collapsed at startup. Move between
//! section headers with `↑/k` and `↓/j`, toggle the focused section with
//! `enter` or `space`, expand or collapse everything with `e`/`c`, and quit
//! with `q`.

use bubbletea_accordion::prelude::*;
use bubbletea_rs::{Cmd, Model, Msg, Program};

struct App {
    accordion: Accordion<DefaultItem>,
}

impl Model for App {
    fn init() -> (Self, Option<Cmd>) {
        let items = vec![
            DefaultItem::new("Fruit", "Apples"),
            DefaultItem::new("Fruit", "Bananas"),
            DefaultItem::new("Dairy", "Milk"),
            DefaultItem::new("Bakery", "Sourdough"),
            DefaultItem::new("Fruit", "Cherries"),
            DefaultItem::new("Bakery", "Bagels"),
            DefaultItem::new("Dairy", "Yogurt"),
        ];

        let accordion = Accordion::new(
            vec!["Fruit".into(), "Dairy".into(), "Bakery".into()],
            items,
            DefaultDelegate::new(),
            80,
            24,
        )
        .with_title("Groceries");

        (Self { accordion }, None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.accordion.update(msg)
    }

    fn view(&self) -> String {
        self.accordion.view()
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let program = Program::<App>::builder().alt_screen(true).build()?;
    program.run().await?;
    Ok(())
}
