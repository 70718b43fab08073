use std::fmt::{self, Write};

use sprig_dom::{NodeId, Tree};

/// Shown in place of inner text that was never assigned.
pub const UNSET_TEXT: &str = "(null)";

/// Write one node and its subtree.
///
/// The element's line is `<name>` followed by `key="value"` pairs, each pair
/// separated by two spaces; its inner text goes on the next line, one tab
/// deeper. Children follow in document order before the node's next sibling.
///
/// # Errors
///
/// Propagates errors from `out`.
pub fn write_tree<W: Write>(out: &mut W, tree: &Tree, id: NodeId, level: usize) -> fmt::Result {
    let Some(element) = tree.element(id) else {
        return Ok(());
    };
    let indent = "\t".repeat(level);

    write!(out, "{indent}<{}>  ", element.name)?;
    for attr in element.attributes() {
        write!(out, "{}=\"{}\"  ", attr.key, attr.value)?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "{indent}\t{}",
        element.inner_text().unwrap_or(UNSET_TEXT)
    )?;

    for &child in tree.children(id) {
        write_tree(out, tree, child, level + 1)?;
    }
    Ok(())
}

/// Render everything below `parent`, starting at depth 0.
///
/// The parent itself is not rendered, so passing the root prints only parsed
/// content.
#[must_use]
pub fn render_tree(tree: &Tree, parent: NodeId) -> String {
    let mut out = String::new();
    for &child in tree.children(parent) {
        // Writing to a String cannot fail.
        let _ = write_tree(&mut out, tree, child, 0);
    }
    out
}

/// Print a tree for inspection.
pub fn print_tree(tree: &Tree, parent: NodeId) {
    print!("{}", render_tree(tree, parent));
}
