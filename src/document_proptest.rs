//! Property-based tests for the conversion phases.
//!
//! These tests use proptest to generate random documents and verify that
//! the phase invariants hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use std::collections::HashSet;

    use crate::document::{Document, NodeId};
    use crate::phases::{self, dedup, normalize, rename, structure};
    use crate::schema::{DATE_FIELDS, RENAMES};
    use proptest::prelude::*;

    /// Names the random trees are built from: every legacy name plus a few
    /// that must survive renaming untouched.
    fn name_pool() -> Vec<&'static str> {
        let mut names: Vec<&str> = RENAMES.iter().map(|(old, _)| *old).collect();
        names.extend(["task", "tag", "title", "subtask", "content"]);
        names
    }

    /// Build a tree from `(parent_index, name_index)` pairs; parent indices
    /// refer to previously created nodes, 0 being the root.
    fn build_tree(shape: &[(usize, usize)]) -> Document {
        let pool = name_pool();
        let mut doc = Document::new("gtgData");
        let mut nodes: Vec<NodeId> = vec![doc.root()];
        for &(parent, name) in shape {
            let parent = nodes[parent % nodes.len()];
            let node = doc.append_element(parent, pool[name % pool.len()]);
            nodes.push(node);
        }
        doc
    }

    fn tasks_with_subs(subs: &[Vec<u8>]) -> Document {
        let mut doc = Document::new("gtgData");
        let root = doc.root();
        let tasklist = doc.append_element(root, "tasklist");
        for (i, values) in subs.iter().enumerate() {
            let task = doc.append_element(tasklist, "task");
            doc.set_attribute(task, "id", format!("u{}", i));
            let group = doc.append_element(task, "subtasks");
            for value in values {
                let sub = doc.append_element(group, "sub");
                doc.set_text(sub, format!("u{}", value));
            }
        }
        doc
    }

    fn all_sub_values(doc: &Document) -> Vec<String> {
        phases::tasks(doc)
            .into_iter()
            .flat_map(|task| doc.descendants_named(task, "sub"))
            .map(|sub| doc.text(sub).unwrap_or_default().to_string())
            .collect()
    }

    // ============================================================================
    // Renaming
    // ============================================================================

    proptest! {
        /// Property: no legacy name survives renaming, and the node count is unchanged
        #[test]
        fn rename_leaves_no_legacy_name(
            shape in prop::collection::vec((0usize..64, 0usize..64), 0..40)
        ) {
            let mut doc = build_tree(&shape);
            let before = doc.descendants(doc.root()).len();

            rename::execute(&mut doc);

            let nodes = doc.descendants(doc.root());
            prop_assert_eq!(nodes.len(), before);
            for node in nodes {
                let name = doc.name(node);
                prop_assert!(
                    !RENAMES.iter().any(|(old, _)| *old == name),
                    "legacy name '{}' survived renaming",
                    name
                );
            }
        }

        /// Property: a second rename pass changes nothing
        #[test]
        fn rename_is_idempotent(
            shape in prop::collection::vec((0usize..64, 0usize..64), 0..40)
        ) {
            let mut doc = build_tree(&shape);
            rename::execute(&mut doc);
            prop_assert_eq!(rename::execute(&mut doc), 0);
        }
    }

    // ============================================================================
    // Tag normalization
    // ============================================================================

    proptest! {
        /// Property: after normalization no tag attribute holds the marker and ids are unique
        #[test]
        fn normalized_tags_have_no_marker_and_unique_ids(
            names in prop::collection::vec("[@a-z]{0,8}", 0..12)
        ) {
            let mut doc = Document::new("gtgData");
            let root = doc.root();
            let taglist = doc.append_element(root, "taglist");
            for name in &names {
                let tag = doc.append_element(taglist, "tag");
                doc.set_attribute(tag, "name", name.as_str());
                doc.set_attribute(tag, "parent", format!("@{}", name));
            }

            normalize::execute(&mut doc);

            let mut ids = HashSet::new();
            for tag in phases::tags(&doc) {
                for (_, value) in doc.attributes(tag) {
                    prop_assert!(!value.contains('@'));
                }
                let id = doc.attribute(tag, "id").unwrap_or_default().to_string();
                prop_assert!(!id.is_empty());
                prop_assert!(ids.insert(id));
            }
            prop_assert_eq!(ids.len(), names.len());
        }

        /// Property: stripping the marker is the same as filtering it out character by character
        #[test]
        fn strip_marker_removes_every_occurrence(value in ".*") {
            let expected: String = value.chars().filter(|&c| c != '@').collect();
            prop_assert_eq!(normalize::strip_marker(&value), expected);
        }
    }

    // ============================================================================
    // Task structuring
    // ============================================================================

    proptest! {
        /// Property: every task ends with one content, one subtasks and five dates in order
        #[test]
        fn structured_tasks_have_fixed_layout(
            fields in prop::collection::vec(prop::sample::subsequence(DATE_FIELDS.to_vec(), 0..=5), 1..6),
            subtask_counts in prop::collection::vec(0usize..4, 1..6)
        ) {
            let mut doc = Document::new("gtgData");
            let root = doc.root();
            let tasklist = doc.append_element(root, "tasklist");
            for (present, subtasks) in fields.iter().zip(&subtask_counts) {
                let task = doc.append_element(tasklist, "task");
                for field in present {
                    doc.append_element(task, field);
                }
                for i in 0..*subtasks {
                    let subtask = doc.append_element(task, "subtask");
                    doc.set_text(subtask, i.to_string());
                }
            }

            structure::execute(&mut doc);

            for (task, subtasks) in phases::tasks(&doc).into_iter().zip(&subtask_counts) {
                prop_assert_eq!(doc.children_named(task, "content").len(), 1);
                prop_assert_eq!(doc.children_named(task, "subtasks").len(), 1);
                let dates = doc.children_named(task, "dates");
                prop_assert_eq!(dates.len(), 1);

                let names: Vec<&str> = doc.children(dates[0]).iter().map(|&d| doc.name(d)).collect();
                prop_assert_eq!(names, DATE_FIELDS.to_vec());

                let group = doc.find_child(task, "subtasks").unwrap();
                prop_assert_eq!(doc.children(group).len(), *subtasks);
                prop_assert!(doc.descendants_named(task, "subtask").is_empty());
            }
        }
    }

    // ============================================================================
    // Subtask deduplication
    // ============================================================================

    proptest! {
        /// Property: after deduplication every reference value appears exactly once
        #[test]
        fn dedup_keeps_one_of_each_value(
            subs in prop::collection::vec(prop::collection::vec(0u8..10, 0..6), 0..8)
        ) {
            let mut doc = tasks_with_subs(&subs);
            let distinct: HashSet<String> = all_sub_values(&doc).into_iter().collect();

            dedup::execute(&mut doc);

            let remaining = all_sub_values(&doc);
            let unique: HashSet<String> = remaining.iter().cloned().collect();
            prop_assert_eq!(remaining.len(), unique.len());
            prop_assert_eq!(unique, distinct);
        }

        /// Property: a second deduplication pass removes nothing
        #[test]
        fn dedup_is_idempotent(
            subs in prop::collection::vec(prop::collection::vec(0u8..10, 0..6), 0..8)
        ) {
            let mut doc = tasks_with_subs(&subs);
            dedup::execute(&mut doc);
            prop_assert_eq!(dedup::execute(&mut doc), 0);
        }

        /// Property: kept references are the first occurrences in document order
        #[test]
        fn dedup_keeps_first_occurrences(
            subs in prop::collection::vec(prop::collection::vec(0u8..10, 0..6), 0..8)
        ) {
            let mut doc = tasks_with_subs(&subs);
            let mut seen = HashSet::new();
            let expected: Vec<String> = all_sub_values(&doc)
                .into_iter()
                .filter(|v| seen.insert(v.clone()))
                .collect();

            dedup::execute(&mut doc);

            prop_assert_eq!(all_sub_values(&doc), expected);
        }
    }
}
