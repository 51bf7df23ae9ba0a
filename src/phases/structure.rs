//! Phase 4: Task Structuring
//!
//! Legacy tasks keep their description, subtask references and date fields
//! as loose children. The unified format groups them. For every task below a
//! task group this phase:
//!
//! 1.  **Content**: appends an empty `content` child unless one exists.
//!
//! 2.  **Subtasks**: appends a `subtasks` group and, for every `subtask`
//!     element anywhere below the task (document order), adds a `sub` with the
//!     same text to the group and detaches the original. Text following the
//!     original stays where it was.
//!
//! 3.  **Dates**: appends a `dates` group and moves the direct `added`, `due`,
//!     `done`, `start` and `modified` children into it, in that order. A
//!     missing field is synthesized empty, except `added`, which falls back to
//!     the epoch date.
//!
//! Afterwards every task has exactly one `content`, one `subtasks` and one
//! `dates` with all five fields.

use log::debug;

use super::tasks;
use crate::defaults::default_added_date;
use crate::document::{Document, NodeId};
use crate::schema::{CONTENT, DATES, DATE_FIELDS, SUB, SUBTASK, SUBTASKS};

/// Execute Phase 4: restructure every task
///
/// Returns the number of tasks restructured.
pub fn execute(doc: &mut Document) -> usize {
    let tasks = tasks(doc);
    let mut moved_subtasks = 0;

    for &task in &tasks {
        ensure_content(doc, task);
        moved_subtasks += group_subtasks(doc, task);
        group_dates(doc, task);
    }

    debug!(
        "Structured {} tasks ({} subtask references moved)",
        tasks.len(),
        moved_subtasks
    );
    tasks.len()
}

fn ensure_content(doc: &mut Document, task: NodeId) {
    if doc.find_child(task, CONTENT).is_none() {
        let content = doc.append_element(task, CONTENT);
        doc.set_text(content, "");
    }
}

fn group_subtasks(doc: &mut Document, task: NodeId) -> usize {
    let group = doc.append_element(task, SUBTASKS);
    let subtasks = doc.descendants_named(task, SUBTASK);

    for &subtask in &subtasks {
        let text = doc.text(subtask).unwrap_or_default().to_string();
        let sub = doc.append_element(group, SUB);
        doc.set_text(sub, text);
        doc.remove_keeping_tail(subtask);
    }

    subtasks.len()
}

fn group_dates(doc: &mut Document, task: NodeId) {
    let group = doc.append_element(task, DATES);

    for field in DATE_FIELDS {
        match doc.find_child(task, field) {
            Some(existing) => doc.append_child(group, existing),
            None => {
                let synthesized = doc.append_element(group, field);
                let text = if field == "added" {
                    default_added_date()
                } else {
                    String::new()
                };
                doc.set_text(synthesized, text);
            }
        }
    }
}
