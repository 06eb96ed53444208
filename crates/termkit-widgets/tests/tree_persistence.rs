//! Tree view state persistence (requires the `state-persistence` feature).

use termkit_widgets::tree::{TreeItem, TreeView, TreeViewState};

fn sample_tree() -> TreeView {
    TreeView::new(vec![
        TreeItem::new("src", "src")
            .child(TreeItem::new("main", "main.rs"))
            .child(
                TreeItem::new("widgets", "widgets").child(TreeItem::new("tabs", "tabs.rs")),
            ),
        TreeItem::new("docs", "docs")
            .with_expanded(false)
            .child(TreeItem::new("readme", "README")),
    ])
}

#[test]
fn snapshot_captures_selection_and_expanded_set() {
    let mut tree = sample_tree();
    tree.click("main");
    tree.toggle_expanded("widgets");

    let state = tree.snapshot();
    assert_eq!(state.selected.as_deref(), Some("main"));
    // Traversal order; "docs" is collapsed and "widgets" was just collapsed.
    assert_eq!(state.expanded, vec!["src".to_string()]);
}

#[test]
fn restore_round_trips_through_json() {
    let mut tree = sample_tree();
    tree.click("tabs");
    tree.toggle_expanded("docs");
    let state = tree.snapshot();

    let json = serde_json::to_string(&state).expect("serialize");
    let loaded: TreeViewState = serde_json::from_str(&json).expect("deserialize");

    let mut fresh = sample_tree();
    fresh.restore(&loaded);
    assert_eq!(fresh.selected_value(), Some("tabs"));
    assert!(fresh.items()[1].is_expanded(), "docs expansion restored");
    let selected: Vec<&TreeItem> = fresh.items()[0].children()[1]
        .children()
        .iter()
        .filter(|i| i.is_selected())
        .collect();
    assert_eq!(selected.len(), 1);
}

#[test]
fn restore_is_silent() {
    use std::cell::Cell;
    use std::rc::Rc;

    let mut tree = sample_tree();
    let hits = Rc::new(Cell::new(0u32));
    let hits_ref = Rc::clone(&hits);
    let _sub = tree.subscribe(move |_| hits_ref.set(hits_ref.get() + 1));

    tree.restore(&TreeViewState {
        selected: Some("main".to_string()),
        expanded: vec!["src".to_string()],
    });
    assert_eq!(hits.get(), 0);
    assert_eq!(tree.selected_value(), Some("main"));
}
