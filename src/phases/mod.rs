//! Implementation of the phases of the gtg-convert migration.
//!
//! ## Overview
//!
//! A conversion runs these phases, strictly in this order:
//! 1. Assembly - Parse the three legacy exports and put them under one root
//! 2. Renaming - Map legacy element names to their new names
//! 3. Tag Normalization - Strip `@` from tag attributes and give each tag a UUID
//! 4. Task Structuring - Add `content`, group `subtasks` and `dates` per task
//! 5. Identifier Resolution - Rewrite subtask references and task ids to UUIDs
//! 6. Tag Reference Resolution - Turn the flat `tags` attribute into tag id children
//! 7. Subtask Deduplication - Keep each subtask reference under one parent only
//! 8. Writing to Disk - Serialize the tree to `gtg_data.xml`
//!
//! Renaming has to come first among the tree passes because every later
//! phase addresses elements by their new names. Tag normalization only
//! touches attributes, so it commutes with renaming. Identifier resolution
//! rewrites the `sub` elements that task structuring creates, tag reference
//! resolution needs the tag ids from normalization, and deduplication
//! compares reference values only after they have been rewritten to UUIDs.
//!
//! Each phase takes the document by `&mut` and returns what it changed, so the
//! orchestrator can log and summarize the run.

use crate::document::{Document, NodeId};
use crate::schema::{TAG, TAGLIST, TASK, TASKLIST};

// Phase modules
pub mod assemble;
pub mod dedup;
pub mod identifiers;
pub mod normalize;
pub mod orchestrator;
pub mod rename;
pub mod structure;
pub mod tag_refs;
pub mod write;

// Numbered aliases, in execution order
pub use assemble as phase1;
pub use rename as phase2;
pub use normalize as phase3;
pub use structure as phase4;
pub use identifiers as phase5;
pub use tag_refs as phase6;
pub use dedup as phase7;
pub use write as phase8;

/// Task groups directly below the root
pub fn tasklists(doc: &Document) -> Vec<NodeId> {
    doc.children_named(doc.root(), TASKLIST)
}

/// Every task below any task group, in document order
pub fn tasks(doc: &Document) -> Vec<NodeId> {
    tasklists(doc)
        .into_iter()
        .flat_map(|list| doc.descendants_named(list, TASK))
        .collect()
}

/// The tag group, if the tag export was present
pub fn taglist(doc: &Document) -> Option<NodeId> {
    doc.find_child(doc.root(), TAGLIST)
}

/// Every tag inside the tag group, in document order
pub fn tags(doc: &Document) -> Vec<NodeId> {
    taglist(doc)
        .map(|list| doc.descendants_named(list, TAG))
        .unwrap_or_default()
}
