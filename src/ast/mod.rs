//! Instruction and type definitions shared by the parser and the analyzer.
//!
//! This module contains the data model the rest of the crate operates on:
//!
//! - instruction: The flat instruction stream produced by the parser
//! - types: The language's type system and runtime values

pub mod instruction;
pub mod types;
