use serde::Serialize;

use crate::{Attribute, NodeId, Tree};

/// A nested, borrowed view of a subtree.
///
/// The arena is convenient to build but awkward to compare or serialize;
/// a snapshot nests children inline so two parses can be compared with `==`
/// and a subtree can be written out as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementSnapshot<'a> {
    /// Tag name.
    pub name: &'a str,
    /// Attributes in document order.
    pub attributes: &'a [Attribute],
    /// Inner text, `None` if it was never assigned.
    pub inner_text: Option<&'a str>,
    /// Child snapshots in document order.
    pub children: Vec<ElementSnapshot<'a>>,
}

impl<'a> ElementSnapshot<'a> {
    pub(crate) fn build(tree: &'a Tree, id: NodeId) -> Option<Self> {
        let element = tree.element(id)?;
        let children = tree
            .children(id)
            .iter()
            .filter_map(|&child| Self::build(tree, child))
            .collect();
        Some(Self {
            name: &element.name,
            attributes: element.attributes(),
            inner_text: element.inner_text(),
            children,
        })
    }
}
