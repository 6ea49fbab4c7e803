//! Integration tests for the TreeLayout API
//!
//! These tests exercise the public surface the way a caller would: build a
//! tree, configure a layout, arrange, read positions back.

use sapling::{
    Extents, LayoutError, StructureError, Tree, TreeLayout,
    config::{AppConfig, LayoutConfig},
    geometry::{Bounds, Point},
};

fn dictionary_tree() -> Tree<String> {
    // A word decomposed into its parts, as a dictionary viewer would show it
    let mut tree = Tree::with_root("bright".to_string());
    let root = tree.root().unwrap();
    let sun = tree.add_child(root, "sun".to_string()).unwrap();
    let moon = tree.add_child(root, "moon".to_string()).unwrap();
    tree.add_child(sun, "dot".to_string()).unwrap();
    tree.add_child(moon, "crescent".to_string()).unwrap();
    tree.add_child(moon, "stroke".to_string()).unwrap();
    tree
}

#[test]
fn test_default_layout_positions_every_node() {
    let mut tree = dictionary_tree();
    let result = TreeLayout::default().arrange(&mut tree, Point::new(0.0, 0.0));
    assert!(result.is_ok(), "Layout should succeed: {:?}", result.err());

    let root = tree.root().unwrap();
    assert_eq!(tree[root].position(), Point::new(0.0, 0.0));

    // Every non-root node ends up below its parent
    for (_, node) in tree.preorder() {
        if let Some(parent) = node.parent() {
            assert!(node.position().y() > tree[parent].position().y());
        }
    }
}

#[test]
fn test_layout_from_toml_config() {
    let config: AppConfig = toml::from_str(
        r#"
        [layout]
        level_separation = 10.0
        sibling_separation = 4.0
        "#,
    )
    .expect("Failed to parse config");

    let mut tree = dictionary_tree();
    let layout = TreeLayout::new(*config.layout());
    layout
        .arrange(&mut tree, Point::new(0.0, 0.0))
        .expect("Failed to arrange");

    let root = tree.root().unwrap();
    let children = tree[root].children().to_vec();
    assert_eq!(tree[children[0]].position().y(), 10.0);
    let gap = tree[children[1]].position().x() - tree[children[0]].position().x();
    assert!(gap >= 4.5 - 1e-4, "Gap {gap} should honor sibling separation");
}

#[test]
fn test_bounds_cover_layout() {
    let mut tree = dictionary_tree();
    TreeLayout::default()
        .arrange(&mut tree, Point::new(5.0, 5.0))
        .expect("Failed to arrange");

    let bounds = tree.bounds().expect("Rooted tree should have bounds");
    for (_, node) in tree.preorder() {
        assert!(bounds.contains(node.position()));
    }
    assert_eq!(bounds.min_y(), 5.0);
    assert_eq!(bounds.max_y(), 7.5);
}

#[test]
fn test_extents_error_is_recoverable() {
    let mut tree = dictionary_tree();
    let tight = TreeLayout::new(LayoutConfig::default()).with_extents(Extents::within(Bounds::new(
        -1.0, -1.0, 1.0, 1.0,
    )));

    let err = tight
        .arrange(&mut tree, Point::new(0.0, 0.0))
        .expect_err("Layout should not fit");
    assert!(matches!(err, LayoutError::Extents { .. }));
    assert!(err.to_string().contains("outside the drawable extents"));

    // The same tree can be laid out again with looser extents
    let loose = TreeLayout::default().with_extents(Extents::within(Bounds::new(
        -100.0, -100.0, 100.0, 100.0,
    )));
    loose
        .arrange(&mut tree, Point::new(0.0, 0.0))
        .expect("Layout should fit");
}

#[test]
fn test_misuse_is_reported_as_structure_error() {
    let mut tree = dictionary_tree();
    let root = tree.root().unwrap();
    let first = tree[root].children()[0];
    tree.append_child(first, root).unwrap();

    let err = TreeLayout::default()
        .arrange(&mut tree, Point::new(0.0, 0.0))
        .expect_err("Cycle should be rejected");
    assert!(matches!(
        err,
        LayoutError::Structure(StructureError::Revisited(_))
    ));
}

#[test]
fn test_layout_is_reusable_across_trees() {
    let layout = TreeLayout::default();

    let mut first = dictionary_tree();
    let mut second = Tree::with_root("alone".to_string());

    layout
        .arrange(&mut first, Point::new(0.0, 0.0))
        .expect("Failed to arrange first tree");
    layout
        .arrange(&mut second, Point::new(3.0, 4.0))
        .expect("Failed to arrange second tree");

    let root = second.root().unwrap();
    assert_eq!(second[root].position(), Point::new(3.0, 4.0));
}

#[test]
fn test_layout_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TreeLayout>();
}
