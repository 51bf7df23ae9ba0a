//! Phase 7: Subtask Deduplication
//!
//! In the unified format a task has at most one parent, so a subtask
//! reference value may appear under only one `subtasks` group. Legacy data
//! sometimes lists the same child under several parents.
//!
//! Tasks are scanned in document order while remembering every reference
//! value already seen. The first `sub` carrying a value is kept; every later
//! one with the same value, under the same task or a different one, is
//! detached. A second run therefore finds nothing to remove.

use std::collections::HashSet;

use log::{debug, warn};

use super::tasks;
use crate::document::{Document, NodeId};
use crate::schema::{ATTR_ID, SUB, SUBTASKS};

/// Every `sub` of every task, in document order
fn subtask_references(doc: &Document) -> Vec<(NodeId, NodeId)> {
    let mut references = Vec::new();
    for task in tasks(doc) {
        for group in doc.children_named(task, SUBTASKS) {
            references.extend(doc.children_named(group, SUB).into_iter().map(|sub| (task, sub)));
        }
    }
    references
}

/// Execute Phase 7: drop repeated subtask references
///
/// Returns the number of references removed.
pub fn execute(doc: &mut Document) -> usize {
    let mut seen: HashSet<String> = HashSet::new();
    let mut removed = 0;

    for (task, sub) in subtask_references(doc) {
        let value = doc.text(sub).unwrap_or_default().to_string();
        if seen.insert(value.clone()) {
            continue;
        }

        warn!(
            "Task '{}' also lists subtask '{}'; keeping only its first parent",
            doc.attribute(task, ATTR_ID).unwrap_or_default(),
            value
        );
        doc.detach(sub);
        removed += 1;
    }

    debug!("Removed {} duplicate subtask references", removed);
    removed
}
