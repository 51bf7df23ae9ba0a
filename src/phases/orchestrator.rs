//! Orchestrator for a complete conversion
//!
//! This module chains the phases in their required order and provides the
//! entry points used by the CLI and by tests.

use std::path::{Path, PathBuf};

use log::info;

use super::identifiers::IdentifierReport;
use super::tag_refs::TagRefReport;
use super::{phase1, phase2, phase3, phase4, phase5, phase6, phase7, phase8};
use crate::defaults::OUTPUT_FILE;
use crate::document::Document;
use crate::error::Result;

/// What the tree passes (Phases 2-7) changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformReport {
    /// Elements renamed from legacy names
    pub renamed: usize,
    /// Tags that received a new id
    pub tags: usize,
    /// Tasks restructured
    pub tasks: usize,
    pub identifiers: IdentifierReport,
    pub tag_refs: TagRefReport,
    /// Subtask references dropped because another task listed them first
    pub removed_duplicates: usize,
}

/// Result of a full conversion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Where the unified document was written
    pub output: PathBuf,
    pub report: TransformReport,
}

/// Run Phases 2-7 on an assembled document
///
/// The order is fixed:
/// 2. rename legacy elements (later phases use the new names)
/// 3. normalize tags and assign tag ids
/// 4. structure tasks (creates the `sub` references)
/// 5. resolve identifiers (rewrites `sub` references, then task ids)
/// 6. resolve tag references (needs the ids from Phase 3)
/// 7. deduplicate subtask references (compares the rewritten values)
pub fn transform(doc: &mut Document) -> TransformReport {
    let renamed = phase2::execute(doc);
    let tags = phase3::execute(doc);
    let tasks = phase4::execute(doc);
    let identifiers = phase5::execute(doc);
    let tag_refs = phase6::execute(doc);
    let removed_duplicates = phase7::execute(doc);

    TransformReport {
        renamed,
        tags,
        tasks,
        identifiers,
        tag_refs,
        removed_duplicates,
    }
}

/// Convert the legacy exports found in `input_dir`, writing to `output_path`
///
/// Nothing is written unless all three sources load successfully.
pub fn convert(input_dir: &Path, output_path: &Path) -> Result<ConversionSummary> {
    info!("Converting legacy exports in {}", input_dir.display());

    // Phase 1: Assembly
    let mut doc = phase1::execute_dir(input_dir)?;

    // Phases 2-7: Tree transformations
    let report = transform(&mut doc);

    // Phase 8: Write to Disk
    phase8::execute(&doc, output_path)?;

    info!(
        "Wrote {} ({} tasks, {} tags)",
        output_path.display(),
        report.tasks,
        report.tags
    );
    Ok(ConversionSummary {
        output: output_path.to_path_buf(),
        report,
    })
}

/// Convert the legacy exports in `dir` into `dir/gtg_data.xml`
pub fn convert_dir(dir: &Path) -> Result<ConversionSummary> {
    convert(dir, &dir.join(OUTPUT_FILE))
}
