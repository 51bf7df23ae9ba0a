//! # GTG Data Converter Library
//!
//! This library converts a legacy task-management export, split across
//! `projects.xml`, `tags.xml` and `gtg_tasks.xml`, into the single unified
//! `gtg_data.xml` document. It is used by the `gtg-convert` command-line tool
//! but can be driven directly, for example to convert a directory other than
//! the working directory or to inspect the converted tree before writing it.
//!
//! ## Quick Example
//!
//! ```
//! use gtg_convert::phases::{self, orchestrator};
//! use gtg_convert::xml;
//!
//! let mut doc = xml::parse_str(
//!     r#"<gtgData>
//!          <project><task id="1" uuid="u1" tags="@work"/></project>
//!          <tagstore><tag name="@work"/></tagstore>
//!        </gtgData>"#,
//! )
//! .unwrap();
//!
//! let report = orchestrator::transform(&mut doc);
//! assert_eq!(report.tasks, 1);
//!
//! let task = phases::tasks(&doc)[0];
//! assert_eq!(doc.attribute(task, "id"), Some("u1"));
//! ```
//!
//! ## Core Concepts
//!
//! - **Document (`document`)**: An arena-backed element tree. Every phase
//!   mutates the same tree through `&mut`, addressing elements by `NodeId`.
//! - **XML (`xml`)**: Parsing into and serializing out of the document tree.
//! - **Schema (`schema`)**: Element and attribute names of both formats and
//!   the fixed rename map.
//! - **Phases (`phases`)**: The ordered conversion passes, from assembling the
//!   sources to writing the result.
//!
//! ## Execution Flow
//!
//! The main entry point is `phases::orchestrator`, which runs:
//!
//! 1.  **Assembly**: Parse the three exports and place them under one root.
//! 2.  **Renaming**: Replace legacy element names.
//! 3.  **Tag Normalization**: Strip `@` from tag attributes and assign UUIDs.
//! 4.  **Task Structuring**: Group content, subtask references and dates.
//! 5.  **Identifier Resolution**: Switch task ids and references to UUIDs.
//! 6.  **Tag Reference Resolution**: Turn tag names into tag id children.
//! 7.  **Subtask Deduplication**: Keep each subtask under one parent.
//! 8.  **Disk Output**: Write the unified document.

pub mod defaults;
pub mod document;
pub mod error;
pub mod output;
pub mod phases;
pub mod schema;
pub mod xml;

#[cfg(test)]
mod document_proptest;
