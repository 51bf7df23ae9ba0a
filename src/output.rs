//! # Output Configuration
//!
//! Controls how the conversion summary is printed: with status emoji when the
//! terminal supports it, with bracketed plain-text markers otherwise.
//!
//! ## Respecting User Preferences
//!
//! Decoration is decided from, in order:
//! - `--color=always|never` - explicit CLI choice
//! - `NO_COLOR` - disables decoration when set to anything
//! - `CLICOLOR=0` - disables decoration
//! - `CLICOLOR_FORCE=1` - forces decoration even without a TTY
//! - `TERM=dumb` - disables decoration
//! - otherwise, whatever `console` detects for stdout
//!
//! ## Usage
//!
//! ```
//! use gtg_convert::output::{emoji, OutputConfig};
//!
//! let config = OutputConfig::without_color();
//! assert_eq!(emoji(&config, "✅", "[OK]"), "[OK]");
//! ```

use std::env;

/// Whether status output may use color and emoji.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub use_color: bool,
}

impl OutputConfig {
    /// Build the configuration from the `--color` flag value and the environment.
    ///
    /// Any value other than `always` or `never` is treated as `auto`.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_ascii_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    fn detect_color_support() -> bool {
        // https://no-color.org/: presence alone disables
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }
        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }
        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }
        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    /// Decorated output regardless of the environment.
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    /// Plain output regardless of the environment.
    pub fn without_color() -> Self {
        Self { use_color: false }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// Pick the emoji or its plain-text stand-in.
pub fn emoji<'a>(config: &OutputConfig, emoji_str: &'a str, plain: &'a str) -> &'a str {
    if config.use_color {
        emoji_str
    } else {
        plain
    }
}
