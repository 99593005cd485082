//! Parser module for building the instruction stream.
//!
//! This module contains the parser that transforms source text into a
//! flat ordered sequence of atomic instructions. The grammar is line
//! oriented, so no tokenizer sits in front of it; each line is classified
//! by its leading keyword or by the presence of `=`. The parser handles:
//!
//! - Block structure lines (`BLOCO` / `FIM`)
//! - Declarations (`NUMERO` / `CADEIA`) with comma-separated names
//! - Assignments, with comma-separated groups flattened in place
//! - `PRINT` statements
//! - Error recovery and reporting for malformed lines

pub mod parser;

#[cfg(test)]
mod tests;
