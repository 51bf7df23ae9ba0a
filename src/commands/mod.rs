//! # CLI Command Implementations
//!
//! `gtg-convert` has a single command, so this module only holds the
//! conversion entry point. It calls into the `gtg_convert` library for the
//! actual work and is responsible for user-facing progress output.

pub mod convert;
