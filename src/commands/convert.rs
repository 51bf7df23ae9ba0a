//! Convert command implementation
//!
//! Runs the full pipeline against the current directory:
//! 1. Assemble the three legacy exports
//! 2. Apply the tree transformations
//! 3. Write gtg_data.xml

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use gtg_convert::output::{emoji, OutputConfig};
use gtg_convert::phases::orchestrator::{self, ConversionSummary};

/// Execute the conversion in the current directory
pub fn execute(output: &OutputConfig) -> Result<()> {
    let working_dir = std::env::current_dir().context("Failed to get current directory")?;
    execute_in(&working_dir, output)
}

/// Execute the conversion against `dir`
pub fn execute_in(dir: &Path, output: &OutputConfig) -> Result<()> {
    let start_time = Instant::now();

    match orchestrator::convert_dir(dir) {
        Ok(summary) => {
            print_summary(&summary, output, start_time.elapsed().as_secs_f64());
            Ok(())
        }
        Err(e) => {
            println!("{} Conversion failed", emoji(output, "❌", "[FAIL]"));
            Err(e.into())
        }
    }
}

fn print_summary(summary: &ConversionSummary, output: &OutputConfig, seconds: f64) {
    let report = &summary.report;

    println!(
        "{} Converted successfully in {:.2}s",
        emoji(output, "✅", "[OK]"),
        seconds
    );
    println!("   {} tasks, {} tags", report.tasks, report.tags);

    if report.identifiers.dangling > 0 {
        println!(
            "   {} subtask references point to unknown tasks",
            report.identifiers.dangling
        );
    }
    if report.removed_duplicates > 0 {
        println!(
            "   {} duplicate subtask references removed",
            report.removed_duplicates
        );
    }
    if report.tag_refs.unmatched > 0 {
        println!("   {} tag names matched no tag", report.tag_refs.unmatched);
    }

    println!("   Written to: {}", summary.output.display());
}
