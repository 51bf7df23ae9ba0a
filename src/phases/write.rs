//! Phase 8: Writing to Disk
//!
//! This is the final phase of the `gtg-convert` pipeline. It serializes the
//! converted tree as indented UTF-8 XML with a declaration and writes it to
//! the output path in one go. Any failure, whether serializing, creating or
//! writing the file, is reported as `WriteFailure`.

use std::fs;
use std::path::Path;

use log::debug;

use crate::document::Document;
use crate::error::{Error, Result};
use crate::xml;

/// Execute Phase 8: write the converted document to `output_path`
pub fn execute(doc: &Document, output_path: &Path) -> Result<()> {
    let write_failure = |message: String| Error::WriteFailure {
        path: output_path.display().to_string(),
        message,
    };

    let content = xml::to_string(doc).map_err(write_failure)?;
    fs::write(output_path, content.as_bytes()).map_err(|e| write_failure(e.to_string()))?;

    debug!("Wrote {} bytes to {}", content.len(), output_path.display());
    Ok(())
}
