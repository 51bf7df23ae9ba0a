//! Phase 6: Tag Reference Resolution
//!
//! Legacy tasks name their tags in a flat, comma-separated `tags` attribute
//! such as `tags="@work,@errands"`. The unified format references tags by id
//! instead. For each task this phase appends a `tags` group holding one
//! `tag` child per matching tag id.
//!
//! Names are matched against the tag group after normalization, so tag ids
//! are the freshly assigned UUIDs. Several tags may share a name; every match
//! is included, in tag group order. The flat attribute itself stays on the
//! task.

use log::debug;

use super::{tags, tasks};
use crate::defaults::TAG_MARKER;
use crate::document::Document;
use crate::schema::{ATTR_ID, ATTR_NAME, ATTR_TAGS, TAG, TAGS};

/// Tag id → tag name, in tag group order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagMap {
    entries: Vec<(String, String)>,
}

impl TagMap {
    /// Build the map from every tag that has both an id and a name
    pub fn build(doc: &Document) -> Self {
        let entries = tags(doc)
            .into_iter()
            .filter_map(|tag| {
                let id = doc.attribute(tag, ATTR_ID)?;
                let name = doc.attribute(tag, ATTR_NAME)?;
                Some((id.to_string(), name.to_string()))
            })
            .collect();
        Self { entries }
    }

    /// Ids of every tag called `name`
    pub fn ids_for<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |(_, tag_name)| tag_name == name)
            .map(|(id, _)| id.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Split a legacy `tags` attribute into bare tag names
///
/// Names are trimmed and lose their leading `@`. Empty names and repeats are
/// skipped; the remaining names keep their attribute order.
pub fn parse_tag_names(attribute: &str) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for raw in attribute.split(',') {
        let name = raw.trim().trim_start_matches(TAG_MARKER);
        if !name.is_empty() && !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

/// Counts from one tag reference resolution run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TagRefReport {
    /// `tag` references created
    pub resolved: usize,
    /// Tag names that matched no tag
    pub unmatched: usize,
}

/// Execute Phase 6: attach resolved tag ids to every task
pub fn execute(doc: &mut Document) -> TagRefReport {
    let map = TagMap::build(doc);
    if map.is_empty() {
        debug!("Tag list holds no named tags; every tag name will be unmatched");
    }
    let mut report = TagRefReport::default();

    for task in tasks(doc) {
        let attribute = doc.attribute(task, ATTR_TAGS).unwrap_or_default().to_string();

        let mut ids: Vec<String> = Vec::new();
        for name in parse_tag_names(&attribute) {
            let before = ids.len();
            ids.extend(map.ids_for(name).map(str::to_string));
            if ids.len() == before {
                debug!("Tag '{}' matches no tag in the tag list", name);
                report.unmatched += 1;
            }
        }

        let group = doc.append_element(task, TAGS);
        for id in ids {
            let tag = doc.append_element(group, TAG);
            doc.set_text(tag, id);
            report.resolved += 1;
        }
    }

    debug!(
        "Resolved {} tag references against {} tags ({} unmatched names)",
        report.resolved,
        map.len(),
        report.unmatched
    );
    report
}
