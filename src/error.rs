//! # Error Handling
//!
//! This module defines the centralized error type for the `gtg-convert`
//! library. It uses the `thiserror` library to create an `Error` enum that
//! covers the failure modes of a conversion run.
//!
//! ## Key Components
//!
//! - **`Error`**: The enum of all fatal failures. Each variant carries the
//!   path of the file involved and the underlying message.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! Only three things can abort a run:
//!
//! - A source file that is missing or unreadable.
//! - A source file that is not well-formed XML.
//! - An output file that cannot be produced or written.
//!
//! Everything else the legacy data can throw at the converter (duplicate
//! task ids, dangling subtask references, unknown tag names) is tolerated
//! and reported through `log` instead.

use thiserror::Error;

/// Main error type for gtg-convert operations
#[derive(Error, Debug)]
pub enum Error {
    /// A source file does not exist or could not be read.
    #[error("Source file not found: {path}: {message}")]
    SourceNotFound { path: String, message: String },

    /// A source file is not well-formed XML.
    #[error("Failed to parse {path}: {message}")]
    ParseFailure { path: String, message: String },

    /// The output file could not be serialized, created or written.
    #[error("Failed to write {path}: {message}")]
    WriteFailure { path: String, message: String },
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
