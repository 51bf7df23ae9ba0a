//! Phase 3: Tag Normalization
//!
//! Legacy tag stores write tag names with a leading `@` and identify tags by
//! name only. This phase removes every `@` from every attribute value of
//! every tag in the tag group, then gives each tag a fresh random UUID as its
//! `id`, overwriting whatever id it may already have had.

use log::debug;
use uuid::Uuid;

use super::tags as tag_nodes;
use crate::defaults::TAG_MARKER;
use crate::document::Document;
use crate::schema::ATTR_ID;

/// Remove every occurrence of the tag marker from `value`
pub fn strip_marker(value: &str) -> String {
    value.replace(TAG_MARKER, "")
}

/// Execute Phase 3: normalize tag attributes and assign ids
///
/// Returns the number of tags processed.
pub fn execute(doc: &mut Document) -> usize {
    let tags = tag_nodes(doc);

    for &tag in &tags {
        for value in doc.attribute_values_mut(tag) {
            if value.contains(TAG_MARKER) {
                *value = strip_marker(value);
            }
        }
        doc.set_attribute(tag, ATTR_ID, Uuid::new_v4().to_string());
    }

    debug!("Assigned ids to {} tags", tags.len());
    tags.len()
}
