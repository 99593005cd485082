//! Diagnostic types for parsing and analysis.
//!
//! This module defines the diagnostics reported throughout the pipeline.
//! It includes:
//!
//! - Diagnostic structures with source line information
//! - Specific diagnostic kinds for parse and analysis failures
//! - Stable diagnostic names and display formatting
//!
//! No diagnostic is fatal: both the parser and the analyzer report and
//! continue with the next line or instruction.

pub mod errors;
