//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::Parser;

use crate::commands;
use gtg_convert::output::OutputConfig;

/// GTG data converter - Merge legacy projects, tags and tasks exports into gtg_data.xml
///
/// Reads projects.xml, tags.xml and gtg_tasks.xml from the current directory
/// and writes gtg_data.xml next to them.
#[derive(Parser, Debug)]
#[command(name = "gtg-convert")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Colorize output (always, never, auto)
    #[arg(
        long,
        value_name = "WHEN",
        default_value = "auto",
        value_parser = ["always", "never", "auto"]
    )]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(
        long,
        value_name = "LEVEL",
        default_value = "warn",
        value_parser = ["error", "warn", "info", "debug", "trace"]
    )]
    log_level: String,
}

impl Cli {
    /// Execute the conversion
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);
        let output = OutputConfig::from_env_and_flag(&self.color);

        commands::convert::execute(&output)
    }
}

/// Route `log` records to stderr; `RUST_LOG` overrides `--log-level`
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .init();
}
