//! Phase 5: Identifier Resolution
//!
//! Legacy tasks carry two identifiers: a sequential `id`, which subtask
//! references point at, and a `uuid`. The unified format uses the UUID as the
//! only identifier. Resolution runs three passes, strictly in this order:
//!
//! 1.  **Map**: record old `id` → `uuid` for every task. When two tasks share
//!     an old id the later one wins.
//!
//! 2.  **Rewrite references**: every `sub` whose text is a known old id is
//!     replaced by the matching UUID. Unknown values are left as they are.
//!
//! 3.  **Replace ids**: every task's `id` becomes its `uuid`, and `uuid` is
//!     removed.
//!
//! Pass 2 must see the original ids, and pass 3 must not start before every
//! reference has been rewritten.

use std::collections::HashMap;

use log::{debug, warn};

use super::tasks;
use crate::document::Document;
use crate::schema::{ATTR_ID, ATTR_UUID, SUB, SUBTASKS};

/// Old sequential task id → task UUID
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdMap {
    entries: HashMap<String, String>,
}

impl IdMap {
    /// Build the map from every task in the document
    pub fn build(doc: &Document) -> Self {
        let mut entries = HashMap::new();
        for task in tasks(doc) {
            let (Some(id), Some(uuid)) = (doc.attribute(task, ATTR_ID), doc.attribute(task, ATTR_UUID))
            else {
                continue;
            };
            if let Some(previous) = entries.insert(id.to_string(), uuid.to_string()) {
                debug!(
                    "Duplicate task id '{}': '{}' replaces '{}'",
                    id, uuid, previous
                );
            }
        }
        Self { entries }
    }

    pub fn get(&self, old_id: &str) -> Option<&str> {
        self.entries.get(old_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Counts from one identifier resolution run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentifierReport {
    /// Distinct old ids that were mapped
    pub mapped: usize,
    /// Subtask references rewritten to a UUID
    pub rewritten: usize,
    /// Subtask references that matched no task
    pub dangling: usize,
}

/// Execute Phase 5: resolve subtask references and task ids
pub fn execute(doc: &mut Document) -> IdentifierReport {
    let map = IdMap::build(doc);
    if map.is_empty() {
        debug!("No task carries both an id and a uuid; subtask references stay as they are");
    }
    let (rewritten, dangling) = rewrite_references(doc, &map);
    replace_ids(doc);

    let report = IdentifierReport {
        mapped: map.len(),
        rewritten,
        dangling,
    };
    debug!(
        "Resolved identifiers: {} mapped, {} references rewritten, {} dangling",
        report.mapped, report.rewritten, report.dangling
    );
    report
}

fn rewrite_references(doc: &mut Document, map: &IdMap) -> (usize, usize) {
    let mut rewritten = 0;
    let mut dangling = 0;

    for task in tasks(doc) {
        let subs: Vec<_> = doc
            .children_named(task, SUBTASKS)
            .into_iter()
            .flat_map(|group| doc.children_named(group, SUB))
            .collect();

        for sub in subs {
            let text = doc.text(sub).unwrap_or_default();
            match map.get(text) {
                Some(uuid) => {
                    let uuid = uuid.to_string();
                    doc.set_text(sub, uuid);
                    rewritten += 1;
                }
                None => {
                    debug!("Subtask reference '{}' matches no task", text);
                    dangling += 1;
                }
            }
        }
    }

    (rewritten, dangling)
}

fn replace_ids(doc: &mut Document) {
    for task in tasks(doc) {
        match doc.remove_attribute(task, ATTR_UUID) {
            Some(uuid) => doc.set_attribute(task, ATTR_ID, uuid),
            None => warn!(
                "Task '{}' has no uuid; keeping its legacy id",
                doc.attribute(task, ATTR_ID).unwrap_or_default()
            ),
        }
    }
}
