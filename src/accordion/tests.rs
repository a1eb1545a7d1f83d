use bubbletea_rs::{KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::{KeyCode, KeyModifiers};

use super::*;

fn grocery_model() -> Model<DefaultItem> {
    Model::new(
        vec!["A".into(), "B".into(), "C".into()],
        vec![
            DefaultItem::new("A", "x1"),
            DefaultItem::new("A", "x2"),
            DefaultItem::new("B", "y1"),
            DefaultItem::new("C", "z1"),
            DefaultItem::new("A", "x3"),
            DefaultItem::new("C", "z2"),
        ],
        DefaultDelegate::new(),
        80,
        24,
    )
}

fn texts(items: Vec<&DefaultItem>) -> Vec<String> {
    items.into_iter().map(|i| i.text.clone()).collect()
}

fn key(code: KeyCode) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    }) as Msg
}

fn visible(s: &str) -> String {
    String::from_utf8(strip_ansi_escapes::strip(s)).unwrap()
}

#[test]
fn test_all_sections_start_collapsed() {
    let m = grocery_model();
    for title in ["A", "B", "C"] {
        assert!(!m.is_expanded(title), "{title} should start collapsed");
    }
}

#[test]
fn test_toggle_is_an_involution() {
    let mut m = grocery_model();
    for title in ["A", "B", "C"] {
        let before = m.is_expanded(title);
        m.toggle(title);
        m.toggle(title);
        assert_eq!(m.is_expanded(title), before);
    }
}

#[test]
fn test_toggles_are_independent_per_section() {
    let mut m = grocery_model();
    m.toggle("B");
    assert!(!m.is_expanded("A"));
    assert!(m.is_expanded("B"));
    assert!(!m.is_expanded("C"));
}

#[test]
fn test_items_group_by_section_preserving_source_order() {
    let m = grocery_model();
    assert_eq!(texts(m.items_for("A")), vec!["x1", "x2", "x3"]);
    assert_eq!(texts(m.items_for("B")), vec!["y1"]);
    assert_eq!(texts(m.items_for("C")), vec!["z1", "z2"]);
}

#[test]
fn test_items_for_is_pure_and_recomputed() {
    let mut m = grocery_model();
    let first = texts(m.items_for("A"));
    m.toggle("A");
    m.toggle("C");
    assert_eq!(texts(m.items_for("A")), first);
    assert_eq!(texts(m.items_for("A")), texts(m.items_for("A")));
}

#[test]
fn test_sections_partition_the_item_collection() {
    let mut items = vec![
        DefaultItem::new("A", "x1"),
        DefaultItem::new("D", "stray"),
        DefaultItem::new("B", "y1"),
    ];
    items.push(DefaultItem::new("A", "x2"));
    let m = Model::new(
        vec!["A".into(), "B".into(), "C".into()],
        items,
        DefaultDelegate::new(),
        80,
        24,
    );

    // Every item shows up exactly once across the section views plus the
    // orphan view.
    let mut seen: Vec<u64> = Vec::new();
    for title in m.section_titles() {
        seen.extend(m.items_for(title).iter().map(|i| i.id()));
    }
    seen.extend(m.orphan_items().iter().map(|i| i.id()));
    seen.sort_unstable();

    assert_eq!(seen.len(), m.item_count());
    seen.dedup();
    assert_eq!(seen.len(), m.item_count(), "no item counted twice");
}

#[test]
fn test_orphan_items_are_never_displayed() {
    let m = Model::new(
        vec!["A".into(), "B".into(), "C".into()],
        vec![
            DefaultItem::new("A", "x1"),
            DefaultItem::new("D", "stray"),
        ],
        DefaultDelegate::new(),
        80,
        24,
    );

    for title in ["A", "B", "C"] {
        assert!(!texts(m.items_for(title)).iter().any(|t| t == "stray"));
        assert!(!m.is_expanded(title), "orphan must not affect expansion");
    }
    assert_eq!(texts(m.orphan_items()), vec!["stray"]);
}

#[test]
fn test_unknown_title_falls_back_to_first_section() {
    let mut m = grocery_model();
    m.toggle("does-not-exist");
    assert!(m.is_expanded("A"), "fallback flips the first section");
    assert!(!m.is_expanded("B"));
    assert!(m.is_expanded("does-not-exist"), "read follows the fallback");
}

#[test]
fn test_unknown_title_rejected_under_reject_policy() {
    let mut m = grocery_model().with_unknown_section_policy(UnknownSectionPolicy::Reject);
    m.toggle("does-not-exist");
    for title in ["A", "B", "C"] {
        assert!(!m.is_expanded(title));
    }
    assert!(!m.is_expanded("does-not-exist"));
    assert!(m.items_for("does-not-exist").is_empty());
}

#[test]
fn test_try_toggle_errors_on_unknown_title() {
    let mut m = grocery_model();
    assert_eq!(
        m.try_toggle("does-not-exist"),
        Err(SectionError::UnknownSection("does-not-exist".to_string()))
    );
    assert!(!m.is_expanded("A"), "no fallback on the explicit path");

    assert_eq!(m.try_toggle("B"), Ok(()));
    assert!(m.is_expanded("B"));
}

#[test]
fn test_duplicate_section_titles_keep_first_occurrence() {
    let m: Model<DefaultItem> = Model::new(
        vec!["A".into(), "B".into(), "A".into()],
        vec![],
        DefaultDelegate::new(),
        80,
        24,
    );
    assert_eq!(m.section_titles(), vec!["A", "B"]);
}

#[test]
fn test_expand_collapse_and_all() {
    let mut m = grocery_model();
    m.expand("B");
    m.expand("B");
    assert!(m.is_expanded("B"), "expand is idempotent");

    m.expand_all();
    assert!(["A", "B", "C"].iter().all(|t| m.is_expanded(t)));

    m.collapse("B");
    assert!(!m.is_expanded("B"));

    m.collapse_all();
    assert!(["A", "B", "C"].iter().all(|t| !m.is_expanded(t)));
}

#[test]
fn test_default_item_ids_are_unique() {
    let a = DefaultItem::new("A", "same text");
    let b = DefaultItem::new("A", "same text");
    assert_ne!(a.id(), b.id());
}

#[test]
fn test_update_moves_cursor_and_toggles() {
    let mut m = grocery_model();
    assert_eq!(m.cursor(), 0);

    m.update(key(KeyCode::Down));
    assert_eq!(m.cursor(), 1);

    m.update(key(KeyCode::Enter));
    assert!(m.is_expanded("B"), "enter toggles the focused section");
    assert!(!m.is_expanded("A"));

    m.update(key(KeyCode::Up));
    assert_eq!(m.cursor(), 0);
    m.update(key(KeyCode::Up));
    assert_eq!(m.cursor(), 0, "cursor stops at the first section");

    m.update(key(KeyCode::End));
    assert_eq!(m.cursor(), 2);
    m.update(key(KeyCode::Down));
    assert_eq!(m.cursor(), 2, "cursor stops at the last section");
}

#[test]
fn test_update_expand_and_collapse_all() {
    let mut m = grocery_model();
    m.update(key(KeyCode::Char('e')));
    assert!(["A", "B", "C"].iter().all(|t| m.is_expanded(t)));

    m.update(key(KeyCode::Char('c')));
    assert!(["A", "B", "C"].iter().all(|t| !m.is_expanded(t)));
}

#[test]
fn test_update_quit_returns_command() {
    let mut m = grocery_model();
    assert!(m.update(key(KeyCode::Char('q'))).is_some());
}

#[test]
fn test_update_toggles_full_help() {
    let mut m = grocery_model();
    assert!(!m.help.show_all);
    m.update(key(KeyCode::Char('?')));
    assert!(m.help.show_all);
    m.update(key(KeyCode::Char('?')));
    assert!(!m.help.show_all);
}

#[test]
fn test_view_hides_collapsed_section_bodies() {
    let m = grocery_model();
    let out = visible(&m.view());
    for title in ["A", "B", "C"] {
        assert!(out.contains(title));
    }
    for text in ["x1", "y1", "z1"] {
        assert!(!out.contains(text), "{text} must stay hidden");
    }
}

#[test]
fn test_view_shows_expanded_section_in_order() {
    let mut m = grocery_model();
    m.toggle("A");
    let out = visible(&m.view());

    let x1 = out.find("x1").expect("x1 visible");
    let x2 = out.find("x2").expect("x2 visible");
    let x3 = out.find("x3").expect("x3 visible");
    assert!(x1 < x2 && x2 < x3, "source order preserved");
    assert!(!out.contains("y1"), "other sections stay collapsed");
}

#[test]
fn test_view_indicator_reflects_expansion() {
    let mut m = grocery_model();
    let collapsed = visible(&m.view());
    assert!(collapsed.contains(style::COLLAPSED_INDICATOR));
    assert!(!collapsed.contains(style::EXPANDED_INDICATOR));

    m.expand_all();
    let expanded = visible(&m.view());
    assert!(expanded.contains(style::EXPANDED_INDICATOR));
    assert!(!expanded.contains(style::COLLAPSED_INDICATOR));
}

#[test]
fn test_view_without_sections() {
    let m: Model<DefaultItem> = Model::new(vec![], vec![], DefaultDelegate::new(), 80, 24);
    assert!(visible(&m.view()).contains("No sections."));
}

#[test]
fn test_view_footer_counts_sections_and_items() {
    let m = grocery_model();
    let out = visible(&m.view());
    assert!(out.contains("3 sections"));
    assert!(out.contains("6 items"));
}

#[test]
fn test_data_from_json_round_trip_into_model() {
    let data = AccordionData::from_json(
        r#"{
            "sections": ["Section 1 Name Here", "Section 2 Name Here"],
            "items": [
                { "section": "Section 1 Name Here", "item": "First item in section" },
                { "section": "Section 2 Name Here", "item": "First item in section" },
                { "section": "Section 1 Name Here", "item": "Notice it can be out of order" }
            ]
        }"#,
    )
    .unwrap();

    let m = data.into_model(80, 24);
    assert_eq!(m.len(), 2);
    assert_eq!(
        texts(m.items_for("Section 1 Name Here")),
        vec!["First item in section", "Notice it can be out of order"]
    );
}

#[test]
fn test_data_rejects_duplicate_sections() {
    let err = AccordionData::from_json(
        r#"{ "sections": ["A", "B", "A"], "items": [] }"#,
    )
    .unwrap_err();
    assert!(matches!(err, DataError::DuplicateSection(t) if t == "A"));
}

#[test]
fn test_data_rejects_malformed_json() {
    assert!(matches!(
        AccordionData::from_json("not json"),
        Err(DataError::Parse(_))
    ));
}

#[derive(Clone)]
struct Task {
    project: String,
    summary: String,
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.summary)
    }
}

impl SectionItem for Task {
    fn section(&self) -> &str {
        &self.project
    }
}

// The default delegate must work for any section item type, not just
// DefaultItem.
#[test]
fn test_default_delegate_renders_custom_item_types() {
    let items = vec![Task {
        project: "Infra".to_string(),
        summary: "rotate the certs".to_string(),
    }];
    let mut m = Model::new(vec!["Infra".into()], items, DefaultDelegate::new(), 80, 24);
    m.expand("Infra");

    let out = visible(&m.view());
    assert!(out.contains("rotate the certs"));
}

#[test]
fn test_set_items_keeps_expansion_state() {
    let mut m = grocery_model();
    m.toggle("A");
    m.set_items(vec![DefaultItem::new("A", "fresh")]);
    assert!(m.is_expanded("A"));
    assert_eq!(texts(m.items_for("A")), vec!["fresh"]);
    assert_eq!(m.item_count(), 1);
}
