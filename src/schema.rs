//! Element and attribute names of the legacy and unified formats

/// Root element synthesized around the three source documents
pub const ROOT: &str = "gtgData";
/// Empty auxiliary list appended after the sources
pub const SEARCHLIST: &str = "searchlist";

pub const TASKLIST: &str = "tasklist";
pub const TAGLIST: &str = "taglist";
pub const TASK: &str = "task";
pub const TAG: &str = "tag";

/// Legacy per-task subtask reference, replaced by [`SUB`]
pub const SUBTASK: &str = "subtask";
pub const SUBTASKS: &str = "subtasks";
pub const SUB: &str = "sub";
pub const CONTENT: &str = "content";
pub const DATES: &str = "dates";
pub const TAGS: &str = "tags";

pub const ATTR_ID: &str = "id";
pub const ATTR_UUID: &str = "uuid";
pub const ATTR_NAME: &str = "name";
pub const ATTR_TAGS: &str = "tags";

/// Legacy element names and their replacements
///
/// No legacy name appears twice and no replacement is itself a legacy name,
/// so a single pass over the tree is enough.
pub const RENAMES: [(&str, &str); 7] = [
    ("addeddate", "added"),
    ("duedate", "due"),
    ("donedate", "done"),
    ("tagstore", TAGLIST),
    ("project", TASKLIST),
    ("startdate", "start"),
    ("modifieddate", "modified"),
];

/// Date fields grouped under `dates`, in output order
pub const DATE_FIELDS: [&str; 5] = ["added", "due", "done", "start", "modified"];

/// Name that a legacy element name maps to, if it is renamed at all
pub fn renamed(name: &str) -> Option<&'static str> {
    RENAMES
        .iter()
        .find(|(old, _)| *old == name)
        .map(|(_, new)| *new)
}
