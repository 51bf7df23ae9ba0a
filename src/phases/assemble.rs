//! Phase 1: Assembly
//!
//! This is the first phase of the `gtg-convert` pipeline. It loads the three
//! legacy exports and composes them into one document.
//!
//! ## Process
//!
//! 1.  **Load**: Each source file is read and parsed. A missing or unreadable
//!     file fails with `SourceNotFound`; malformed XML fails with
//!     `ParseFailure`. Either error aborts the run before anything is written.
//!
//! 2.  **Compose**: A synthetic `gtgData` root receives the document elements
//!     of the projects, tags and tasks exports, in that order.
//!
//! 3.  **Search list**: An empty `searchlist` element is appended last.
//!
//! Contents are not touched here; every transformation happens in later
//! phases.

use std::fs;
use std::path::Path;

use log::debug;

use crate::defaults::{PROJECTS_FILE, TAGS_FILE, TASKS_FILE};
use crate::document::Document;
use crate::error::{Error, Result};
use crate::schema::{ROOT, SEARCHLIST};
use crate::xml;

/// Parsed legacy exports, in assembly order
#[derive(Debug, Clone)]
pub struct Sources {
    pub projects: Document,
    pub tags: Document,
    pub tasks: Document,
}

impl Sources {
    /// Load `projects.xml`, `tags.xml` and `gtg_tasks.xml` from `dir`
    pub fn load(dir: &Path) -> Result<Self> {
        Ok(Self {
            projects: load_source(&dir.join(PROJECTS_FILE))?,
            tags: load_source(&dir.join(TAGS_FILE))?,
            tasks: load_source(&dir.join(TASKS_FILE))?,
        })
    }
}

/// Read and parse a single source file
pub fn load_source(path: &Path) -> Result<Document> {
    let content = fs::read_to_string(path).map_err(|e| Error::SourceNotFound {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let doc = xml::parse_str(&content).map_err(|message| Error::ParseFailure {
        path: path.display().to_string(),
        message,
    })?;

    debug!(
        "Loaded {} ({} elements, root <{}>)",
        path.display(),
        doc.descendants(doc.root()).len() + 1,
        doc.name(doc.root())
    );
    Ok(doc)
}

/// Execute Phase 1: compose the parsed sources under one root
pub fn execute(sources: &Sources) -> Document {
    let mut doc = Document::new(ROOT);
    let root = doc.root();

    doc.graft(root, &sources.projects);
    doc.graft(root, &sources.tags);
    doc.graft(root, &sources.tasks);
    doc.append_element(root, SEARCHLIST);

    doc
}

/// Load the sources from `dir` and assemble them
pub fn execute_dir(dir: &Path) -> Result<Document> {
    let sources = Sources::load(dir)?;
    Ok(execute(&sources))
}
