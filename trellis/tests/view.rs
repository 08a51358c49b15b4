use trellis::prelude::*;

fn sample() -> TreeView<MemorySource> {
    let mut source = MemorySource::new(["id", "parent", "name"]);
    source.push_row(&[Some("1"), None, Some("Root")]);
    source.push_row(&[Some("2"), Some("1"), Some("Branch")]);
    source.push_row(&[Some("3"), Some("1"), Some("Leaf A")]);
    source.push_row(&[Some("4"), Some("2"), Some("Leaf B")]);
    TreeView::new(source, TreeViewConfig::new("id", "parent", "name"))
}

/// Single chain 1 -> 2 -> 3 -> 4.
fn chain() -> TreeView<MemorySource> {
    let mut source = MemorySource::new(["id", "parent", "name"]);
    source.push_row(&[Some("1"), None, Some("A")]);
    source.push_row(&[Some("2"), Some("1"), Some("B")]);
    source.push_row(&[Some("3"), Some("2"), Some("C")]);
    source.push_row(&[Some("4"), Some("3"), Some("D")]);
    TreeView::new(source, TreeViewConfig::new("id", "parent", "name"))
}

#[test]
fn test_collapsed_ancestors_hide_descendants() {
    let mut view = sample();
    view.enable().unwrap();
    view.apply().unwrap();

    // Everything below the collapsed root is hidden.
    assert_eq!(view.visible_rows(), vec![0]);

    assert_eq!(view.click(0, None), ClickOutcome::Changed);
    view.apply().unwrap();
    // Leaf B stays hidden behind the still-collapsed Branch.
    assert_eq!(view.visible_rows(), vec![0, 1, 2]);

    assert_eq!(view.click(1, None), ClickOutcome::Changed);
    view.apply().unwrap();
    assert_eq!(view.visible_rows(), vec![0, 1, 2, 3]);
}

#[test]
fn test_apply_is_idempotent() {
    let mut view = sample();
    view.enable().unwrap();
    view.click(0, None);
    view.apply().unwrap();
    let first = view.visible_rows();
    view.apply().unwrap();
    assert_eq!(view.visible_rows(), first);
}

#[test]
fn test_click_on_leaf_falls_through() {
    let mut view = sample();
    view.enable().unwrap();
    view.click(0, None);
    view.apply().unwrap();

    // Visible position 2 is Leaf A.
    assert_eq!(view.click(2, None), ClickOutcome::Ignored);
    assert!(!view.needs_apply());
}

#[test]
fn test_click_with_matching_desired_state_is_consumed_unchanged() {
    let mut view = sample();
    view.enable().unwrap();
    view.apply().unwrap();

    assert_eq!(view.click(0, Some(false)), ClickOutcome::Consumed);
    assert!(!view.needs_apply());
    assert_eq!(view.click(0, Some(true)), ClickOutcome::Changed);
    assert!(view.needs_apply());
}

#[test]
fn test_click_outside_index_is_ignored() {
    let mut view = sample();
    view.enable().unwrap();
    view.apply().unwrap();
    assert_eq!(view.click(99, None), ClickOutcome::Ignored);
    assert!(!view.click(99, None).is_consumed());
}

#[test]
fn test_click_on_disabled_view_is_ignored() {
    let mut view = sample();
    assert_eq!(view.click(0, None), ClickOutcome::Ignored);
}

#[test]
fn test_click_defers_rebuild_until_apply() {
    let mut view = sample();
    view.enable().unwrap();
    view.apply().unwrap();
    assert_eq!(view.visible_rows(), vec![0]);

    assert!(view.click(0, None).needs_apply());
    // The exposed index is untouched until the caller applies.
    assert_eq!(view.visible_rows(), vec![0]);
    view.apply().unwrap();
    assert_eq!(view.visible_rows(), vec![0, 1, 2]);
    assert!(!view.needs_apply());
}

#[test]
fn test_reveal_expands_every_collapsed_ancestor() {
    let mut view = chain();
    view.enable().unwrap();

    assert_eq!(view.reveal("4"), Ok(true));
    assert_eq!(view.meta(0).expand, ExpandState::Expanded);
    assert_eq!(view.meta(1).expand, ExpandState::Expanded);
    assert_eq!(view.meta(2).expand, ExpandState::Expanded);
    assert_eq!(view.meta(3).expand, ExpandState::Leaf);

    // Nothing left to change the second time around.
    assert_eq!(view.reveal("4"), Ok(false));

    view.apply().unwrap();
    assert_eq!(view.visible_rows(), vec![0, 1, 2, 3]);
}

#[test]
fn test_reveal_never_touches_the_target_row() {
    let mut view = chain();
    view.enable().unwrap();

    assert_eq!(view.reveal("3"), Ok(true));
    assert_eq!(view.meta(0).expand, ExpandState::Expanded);
    assert_eq!(view.meta(1).expand, ExpandState::Expanded);
    // Row "3" keeps its own collapsed state.
    assert_eq!(view.meta(2).expand, ExpandState::Collapsed);
}

#[test]
fn test_reveal_unknown_identifier_is_a_noop() {
    let mut view = chain();
    view.enable().unwrap();
    view.apply().unwrap();
    assert_eq!(view.reveal("99"), Ok(false));
    assert!(!view.needs_apply());
}

#[test]
fn test_disabled_apply_restores_default_index() {
    let mut view = sample();
    view.enable().unwrap();
    view.apply().unwrap();
    assert_eq!(view.visible_rows(), vec![0]);

    view.disable();
    assert!(view.needs_apply());
    view.apply().unwrap();
    assert_eq!(view.visible_rows(), vec![0, 1, 2, 3]);
}

#[test]
fn test_expand_all_and_collapse_all() {
    let mut view = sample();
    view.enable().unwrap();

    view.expand_all();
    view.apply().unwrap();
    assert_eq!(view.visible_rows(), vec![0, 1, 2, 3]);

    view.collapse_all();
    view.apply().unwrap();
    assert_eq!(view.visible_rows(), vec![0]);
    // Leaves are untouched by bulk operations.
    assert_eq!(view.meta(2).expand, ExpandState::Leaf);
}

#[test]
fn test_snapshot_restore_round_trip() {
    let mut view = sample();
    view.enable().unwrap();
    view.expand_all();

    let snapshot = view.snapshot();
    assert_eq!(snapshot.expanded, vec!["1".to_string(), "2".to_string()]);

    view.collapse_all();
    view.restore(&snapshot);
    assert_eq!(view.meta(0).expand, ExpandState::Expanded);
    assert_eq!(view.meta(1).expand, ExpandState::Expanded);
    assert_eq!(view.snapshot(), snapshot);
}

#[test]
fn test_restore_skips_unknown_identifiers() {
    let mut view = sample();
    view.enable().unwrap();

    let snapshot = ExpandSnapshot {
        expanded: vec!["1".into(), "99".into()],
    };
    view.restore(&snapshot);
    assert_eq!(view.meta(0).expand, ExpandState::Expanded);
    assert_eq!(view.meta(1).expand, ExpandState::Collapsed);
}

#[test]
fn test_cycle_during_apply_aborts_before_the_index() {
    let mut view = sample();
    view.enable().unwrap();
    view.expand_all();
    view.apply().unwrap();

    // A bad refresh introduces a cycle underneath an enabled view.
    // The retained expanded state means no collapsed ancestor cuts
    // the walk short before the hop bound trips.
    view.source_mut().set_rows(&[
        &[Some("1"), Some("2"), Some("A")],
        &[Some("2"), Some("1"), Some("B")],
    ]);
    let err = view.apply().unwrap_err();
    assert_eq!(err, TreeViewError::ParentCycle { row: 0, limit: 2 });
    // The swap reset the index to source order; the failed apply
    // left it alone.
    assert_eq!(view.visible_rows(), vec![0, 1]);
}
