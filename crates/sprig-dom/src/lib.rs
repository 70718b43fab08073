//! Element tree for the Sprig markup parser.
//!
//! This crate provides the passive storage the parser fills in: elements with
//! an ordered attribute list and a single run of inner text, wrapped in nodes
//! that know their parent, children and siblings.
//!
//! # Design
//!
//! The tree uses arena allocation with [`NodeId`] indices for all relationships.
//! The parent link is an index, never an owning pointer, so parent and child
//! cannot form a reference cycle. Nodes are never removed; the whole arena is
//! dropped together.

mod snapshot;

pub use snapshot::ElementSnapshot;

use serde::Serialize;

/// Name given to the synthetic element that seeds every tree.
pub const ROOT_ELEMENT_NAME: &str = "root";

/// A type-safe index into the element tree.
///
/// `NodeId` provides O(1) access to any node in the tree without borrowing issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The synthetic root node is always at index 0.
    pub const ROOT: Self = Self(0);
}

/// A `key="value"` pair from an opening tag.
///
/// Duplicates are kept; nothing is ever deduplicated or reordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    /// Text before the `=`. Never empty when produced by the parser.
    pub key: String,
    /// Text between the quotes, possibly empty.
    pub value: String,
}

impl Attribute {
    /// Create a new attribute with the given key and value.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// An element: tag name as written, attributes in document order, and the
/// text that trails its opening tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    /// Tag name with case preserved.
    pub name: String,
    /// Attributes in the order they appeared in the opening tag.
    attributes: Vec<Attribute>,
    /// Unset until the opening tag is closed or the element self-closes.
    inner_text: Option<String>,
}

impl Element {
    /// Create an element with no attributes and unset inner text.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            inner_text: None,
        }
    }

    /// Append an attribute after every attribute added so far.
    pub fn add_attribute(&mut self, attribute: Attribute) {
        self.attributes.push(attribute);
    }

    /// Attributes in document order.
    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// First attribute with the given key, if any.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.key == key)
            .map(|attr| attr.value.as_str())
    }

    /// The element's inner text, or `None` while its opening tag is still open.
    #[must_use]
    pub fn inner_text(&self) -> Option<&str> {
        self.inner_text.as_deref()
    }

    /// Assign the inner text.
    ///
    /// The text is captured once: if it is already set the call is refused and
    /// `false` is returned, leaving the existing text untouched.
    pub fn set_inner_text(&mut self, text: impl Into<String>) -> bool {
        if self.inner_text.is_some() {
            return false;
        }
        self.inner_text = Some(text.into());
        true
    }
}

/// A node in the tree. Wraps exactly one [`Element`].
///
/// Stores indices for parent/child/sibling relationships,
/// enabling O(1) traversal in any direction.
#[derive(Debug, Clone)]
pub struct Node {
    /// The element carried by this node.
    pub element: Element,

    /// Non-owning link to the parent. `None` for the root and for detached nodes.
    pub parent: Option<NodeId>,

    /// Children in the order they were opened.
    pub children: Vec<NodeId>,

    /// The node immediately following this one in its parent's children.
    pub next_sibling: Option<NodeId>,

    /// The node immediately preceding this one in its parent's children.
    pub prev_sibling: Option<NodeId>,
}

impl Node {
    fn detached(element: Element) -> Self {
        Self {
            element,
            parent: None,
            children: Vec::new(),
            next_sibling: None,
            prev_sibling: None,
        }
    }
}

/// Arena-based element tree with O(1) node access and traversal.
///
/// This structure stores all nodes in a contiguous vector, using indices
/// for all relationships. This provides:
/// - O(1) access to any node by `NodeId`
/// - O(1) parent/sibling traversal
/// - No borrowing issues (indices instead of references)
#[derive(Debug, Clone)]
pub struct Tree {
    /// All nodes in the tree, indexed by `NodeId`.
    /// The synthetic root is always at index 0 (`NodeId::ROOT`).
    nodes: Vec<Node>,
}

impl Tree {
    /// Create a tree holding only the synthetic root node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::detached(Element::new(ROOT_ELEMENT_NAME))],
        }
    }

    /// Get the root node ID.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get a mutable reference to a node by its ID.
    #[must_use]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    /// Get the element carried by a node.
    #[must_use]
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        self.get(id).map(|n| &n.element)
    }

    /// Get a mutable reference to the element carried by a node.
    #[must_use]
    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        self.get_mut(id).map(|n| &mut n.element)
    }

    /// Get the number of nodes in the tree, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: the root is present from construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a new node and return its ID.
    /// The node is not yet attached to the tree.
    pub fn alloc(&mut self, element: Element) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::detached(element));
        id
    }

    /// Appends `child` as the last child of `parent`, updating all relationships.
    ///
    /// # Panics
    ///
    /// Panics if either ID was not allocated by this tree.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        debug_assert!(
            self.nodes[child.0].parent.is_none(),
            "node {child:?} is already attached"
        );

        // Get the current last child of parent (if any) to set up sibling links
        let prev_last_child = self.nodes[parent.0].children.last().copied();

        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);

        if let Some(prev_id) = prev_last_child {
            self.nodes[prev_id.0].next_sibling = Some(child);
            self.nodes[child.0].prev_sibling = Some(prev_id);
        }
    }

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Get all children of a node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Get the first child of a node.
    #[must_use]
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.children.first().copied())
    }

    /// Get the last child of a node.
    #[must_use]
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.children.last().copied())
    }

    /// Get the next sibling of a node.
    #[must_use]
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.next_sibling)
    }

    /// Get the previous sibling of a node.
    #[must_use]
    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.prev_sibling)
    }

    /// Number of ancestors between a node and the root. The root is at depth 0.
    #[must_use]
    pub fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).count()
    }

    /// Iterate over all ancestors of a node, from parent to root.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> AncestorIterator<'_> {
        AncestorIterator {
            tree: self,
            current: self.parent(id),
        }
    }

    /// Iterate over the descendants of a node in document order: each node's
    /// children are visited before its following siblings.
    ///
    /// The starting node itself is not yielded.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> DescendantIterator<'_> {
        DescendantIterator {
            tree: self,
            stack: self.children(id).iter().rev().copied().collect(),
        }
    }

    /// Build a nested, borrowed view of the subtree rooted at `id`.
    #[must_use]
    pub fn snapshot(&self, id: NodeId) -> Option<ElementSnapshot<'_>> {
        ElementSnapshot::build(self, id)
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over ancestors of a node.
pub struct AncestorIterator<'a> {
    tree: &'a Tree,
    current: Option<NodeId>,
}

impl Iterator for AncestorIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.parent(id);
        Some(id)
    }
}

/// Pre-order iterator over the descendants of a node.
pub struct DescendantIterator<'a> {
    tree: &'a Tree,
    stack: Vec<NodeId>,
}

impl Iterator for DescendantIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.children(id).iter().rev().copied());
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tree_has_bare_root() {
        let tree = Tree::new();
        let root = tree.element(NodeId::ROOT).unwrap();
        assert_eq!(root.name, ROOT_ELEMENT_NAME);
        assert!(root.attributes().is_empty());
        assert_eq!(root.inner_text(), None);
        assert_eq!(tree.parent(NodeId::ROOT), None);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_inner_text_is_assigned_once() {
        let mut element = Element::new("p");
        assert!(element.set_inner_text("first"));
        assert!(!element.set_inner_text("second"));
        assert_eq!(element.inner_text(), Some("first"));
    }

    #[test]
    fn test_attribute_lookup_returns_first_duplicate() {
        let mut element = Element::new("a");
        element.add_attribute(Attribute::new("x", "1"));
        element.add_attribute(Attribute::new("x", "2"));
        assert_eq!(element.attribute("x"), Some("1"));
        assert_eq!(element.attribute("y"), None);
    }
}
