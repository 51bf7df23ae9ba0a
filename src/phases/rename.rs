//! Phase 2: Renaming
//!
//! Applies the fixed legacy-to-new name map (see [`crate::schema::RENAMES`])
//! to every element of the assembled tree, wherever it sits. Only names
//! change; attributes, text and children are left alone.

use log::debug;

use crate::document::Document;
use crate::schema;

/// Execute Phase 2: rename legacy elements
///
/// Returns the number of renamed elements.
pub fn execute(doc: &mut Document) -> usize {
    let root = doc.root();
    let mut nodes = doc.descendants(root);
    nodes.push(root);

    let mut renamed = 0;
    for node in nodes {
        if let Some(new_name) = schema::renamed(doc.name(node)) {
            doc.set_name(node, new_name);
            renamed += 1;
        }
    }

    debug!("Renamed {} legacy elements", renamed);
    renamed
}
