//! Default values for a gtg-convert run.
//!
//! The converter has no configuration surface: file names and fallback
//! values are fixed for this version of the migration.

use chrono::{DateTime, Utc};

/// Legacy projects export, read from the working directory.
pub const PROJECTS_FILE: &str = "projects.xml";

/// Legacy tag store export.
pub const TAGS_FILE: &str = "tags.xml";

/// Legacy task export.
pub const TASKS_FILE: &str = "gtg_tasks.xml";

/// Unified output document, written to the working directory.
pub const OUTPUT_FILE: &str = "gtg_data.xml";

/// Prefix the legacy format puts in front of tag names.
pub const TAG_MARKER: char = '@';

/// Returns the date used for a task that never recorded when it was added.
///
/// This is the Unix epoch rendered as `YYYY-MM-DD` in UTC.
pub fn default_added_date() -> String {
    DateTime::<Utc>::UNIX_EPOCH.format("%Y-%m-%d").to_string()
}
