//! funclen - a checker for overlong Python functions.
//!
//! Parses Python source with the ruff parser, measures the length of every
//! function definition (however deeply nested) according to four inclusion
//! toggles, and reports the functions exceeding the configured maximum.
//!
//! The measurement core lives in [`checker`] and is pure: it consumes a
//! parsed module, the file's token stream and a resolved [`settings::LengthSettings`]
//! bundle, and produces findings. File discovery, parsing and reporting
//! live in [`analyzer`] and [`output`].

/// Analysis engine: path walking, parsing and per-file checking.
pub mod analyzer;
/// Core length measurement.
pub mod checker;
/// Command line interface definition.
pub mod cli;
/// Configuration file models and discovery.
pub mod config;
/// Shared entry point for the binary.
pub mod entry_point;
/// Report printing.
pub mod output;
/// Resolved run settings.
pub mod settings;
/// Line/offset mapping utilities.
pub mod utils;
