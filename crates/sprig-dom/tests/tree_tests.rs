//! Tests for tree construction: append order, parent links, traversal.

use sprig_dom::{Attribute, Element, NodeId, Tree};

/// Helper to allocate an element node and return its `NodeId`.
fn alloc_element(tree: &mut Tree, name: &str) -> NodeId {
    tree.alloc(Element::new(name))
}

fn names(tree: &Tree, ids: impl IntoIterator<Item = NodeId>) -> Vec<String> {
    ids.into_iter()
        .map(|id| tree.element(id).unwrap().name.clone())
        .collect()
}

// ========== attributes ==========

#[test]
fn test_add_attribute_keeps_every_earlier_entry() {
    let mut element = Element::new("a");
    element.add_attribute(Attribute::new("x", "1"));
    element.add_attribute(Attribute::new("y", "2"));
    element.add_attribute(Attribute::new("z", "3"));

    assert_eq!(
        element.attributes(),
        &[
            Attribute::new("x", "1"),
            Attribute::new("y", "2"),
            Attribute::new("z", "3"),
        ]
    );
}

#[test]
fn test_add_attribute_keeps_duplicates_in_order() {
    let mut element = Element::new("a");
    element.add_attribute(Attribute::new("k", "first"));
    element.add_attribute(Attribute::new("k", "second"));

    let values: Vec<&str> = element
        .attributes()
        .iter()
        .map(|attr| attr.value.as_str())
        .collect();
    assert_eq!(values, ["first", "second"]);
}

#[test]
fn test_attribute_value_may_be_empty() {
    let attr = Attribute::new("hidden", "");
    assert_eq!(attr.key, "hidden");
    assert!(attr.value.is_empty());
}

// ========== alloc / append_child ==========

#[test]
fn test_alloc_creates_detached_node() {
    let mut tree = Tree::new();
    let id = alloc_element(&mut tree, "div");

    assert_eq!(tree.parent(id), None);
    assert!(tree.children(id).is_empty());
    assert!(tree.children(NodeId::ROOT).is_empty());
    assert_eq!(tree.element(id).unwrap().inner_text(), None);
}

#[test]
fn test_append_child_preserves_arrival_order() {
    let mut tree = Tree::new();
    let a = alloc_element(&mut tree, "a");
    let b = alloc_element(&mut tree, "b");
    let c = alloc_element(&mut tree, "c");
    tree.append_child(NodeId::ROOT, a);
    tree.append_child(NodeId::ROOT, b);
    tree.append_child(NodeId::ROOT, c);

    assert_eq!(tree.children(NodeId::ROOT), &[a, b, c]);
    assert_eq!(tree.first_child(NodeId::ROOT), Some(a));
    assert_eq!(tree.last_child(NodeId::ROOT), Some(c));
}

#[test]
fn test_append_child_sets_parent_and_sibling_links() {
    let mut tree = Tree::new();
    let parent = alloc_element(&mut tree, "ul");
    tree.append_child(NodeId::ROOT, parent);
    let first = alloc_element(&mut tree, "li");
    let second = alloc_element(&mut tree, "li");
    tree.append_child(parent, first);
    tree.append_child(parent, second);

    assert_eq!(tree.parent(first), Some(parent));
    assert_eq!(tree.parent(second), Some(parent));
    assert_eq!(tree.next_sibling(first), Some(second));
    assert_eq!(tree.prev_sibling(second), Some(first));
    assert_eq!(tree.prev_sibling(first), None);
    assert_eq!(tree.next_sibling(second), None);
}

// ========== traversal ==========

#[test]
fn test_depth_and_ancestors() {
    let mut tree = Tree::new();
    let outer = alloc_element(&mut tree, "outer");
    let inner = alloc_element(&mut tree, "inner");
    tree.append_child(NodeId::ROOT, outer);
    tree.append_child(outer, inner);

    assert_eq!(tree.depth(NodeId::ROOT), 0);
    assert_eq!(tree.depth(outer), 1);
    assert_eq!(tree.depth(inner), 2);
    assert_eq!(
        tree.ancestors(inner).collect::<Vec<_>>(),
        vec![outer, NodeId::ROOT]
    );
}

#[test]
fn test_descendants_visit_children_before_siblings() {
    // root
    //   a
    //     b
    //       c
    //     d
    //   e
    let mut tree = Tree::new();
    let a = alloc_element(&mut tree, "a");
    let b = alloc_element(&mut tree, "b");
    let c = alloc_element(&mut tree, "c");
    let d = alloc_element(&mut tree, "d");
    let e = alloc_element(&mut tree, "e");
    tree.append_child(NodeId::ROOT, a);
    tree.append_child(a, b);
    tree.append_child(b, c);
    tree.append_child(a, d);
    tree.append_child(NodeId::ROOT, e);

    assert_eq!(
        names(&tree, tree.descendants(NodeId::ROOT)),
        ["a", "b", "c", "d", "e"]
    );
    assert_eq!(names(&tree, tree.descendants(a)), ["b", "c", "d"]);
    assert_eq!(tree.descendants(c).count(), 0);
}

// ========== snapshot ==========

#[test]
fn test_snapshot_nests_children() {
    let mut tree = Tree::new();
    let mut link = Element::new("a");
    link.add_attribute(Attribute::new("href", "/"));
    let _ = link.set_inner_text("home");
    let a = tree.alloc(link);
    tree.append_child(NodeId::ROOT, a);

    let snapshot = tree.snapshot(NodeId::ROOT).unwrap();
    assert_eq!(snapshot.name, "root");
    assert_eq!(snapshot.children.len(), 1);
    assert_eq!(snapshot.children[0].name, "a");
    assert_eq!(snapshot.children[0].inner_text, Some("home"));
    assert_eq!(snapshot.children[0].attributes[0].value, "/");
}

#[test]
fn test_snapshot_serializes_to_json() {
    let mut tree = Tree::new();
    let p = alloc_element(&mut tree, "p");
    tree.append_child(NodeId::ROOT, p);

    let json = serde_json::to_value(tree.snapshot(p).unwrap()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "p",
            "attributes": [],
            "inner_text": null,
            "children": [],
        })
    );
}

#[test]
fn test_snapshot_of_unknown_id_is_none() {
    let tree = Tree::new();
    assert!(tree.snapshot(NodeId(42)).is_none());
}
