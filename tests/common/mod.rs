//! Shared test utilities for integration and E2E tests.
//!
//! Add `mod common;` to a test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! let fixture = TestFixture::new().with_sample_sources();
//! fixture.command().assert().success();
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::sources;
    pub use super::TestFixture;
}

/// Legacy export snippets for testing.
#[allow(dead_code)]
pub mod sources {
    /// Projects export pointing at the local task file.
    pub const PROJECTS: &str = r#"<?xml version="1.0"?>
<config>
  <backend pid="backend_localfile" path="gtg_tasks.xml"/>
</config>
"#;

    /// Tag store with one tag per area.
    pub const TAGS: &str = r##"<?xml version="1.0"?>
<tagstore>
  <tag name="@work" color="#729fcf"/>
  <tag name="@home"/>
</tagstore>
"##;

    /// Three tasks: a parent, a child listed under two parents, and a task
    /// without dates or content.
    pub const TASKS: &str = r#"<?xml version="1.0"?>
<project>
  <task id="1" uuid="a1c5d6e2-0000-4000-8000-000000000001" status="Active" tags="@work">
    <title>Prepare talk</title>
    <subtask>2</subtask>
    <addeddate>2013-04-02</addeddate>
    <modifieddate>2013-04-05T10:12:00</modifieddate>
    <content>Slides and demo</content>
  </task>
  <task id="2" uuid="a1c5d6e2-0000-4000-8000-000000000002" status="Active" tags="@work,@home">
    <title>Book room</title>
    <duedate>2013-04-20</duedate>
  </task>
  <task id="3" uuid="a1c5d6e2-0000-4000-8000-000000000003" status="Done" tags="@garden">
    <title>Old parent</title>
    <subtask>2</subtask>
    <subtask>99</subtask>
  </task>
</project>
"#;

    /// Tasks export that is not well-formed.
    pub const MALFORMED: &str = "<project><task id=\"1\"></project>";
}

/// A temporary working directory to run conversions in.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Write all three sample exports.
    pub fn with_sample_sources(self) -> Self {
        self.with_file("projects.xml", sources::PROJECTS)
            .with_file("tags.xml", sources::TAGS)
            .with_file("gtg_tasks.xml", sources::TASKS)
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path the converter writes to.
    pub fn output_path(&self) -> PathBuf {
        self.temp_dir.path().join("gtg_data.xml")
    }

    /// Read the converted document.
    pub fn output(&self) -> String {
        std::fs::read_to_string(self.output_path()).expect("Failed to read gtg_data.xml")
    }

    /// Create a child path in the temp directory.
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// A `gtg-convert` command running inside the fixture directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("gtg-convert");
        cmd.current_dir(self.path()).env_remove("RUST_LOG");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
