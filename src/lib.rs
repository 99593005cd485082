#![allow(clippy::module_inception)]

use crate::{
    analyzer::analyzer::SemanticAnalyzer, errors::errors::Diagnostic, parser::parser::parse,
};

pub mod analyzer;
pub mod ast;
pub mod errors;
pub mod parser;

extern crate regex;

/// Runs a whole program: parse, then execute.
///
/// Output lines come back in printable order: diagnostics from parsing
/// first, then the run's PRINT lines and analysis diagnostics in event
/// order. The collected diagnostics from both phases are returned
/// alongside so callers can tell a clean run from a diagnosed one.
pub fn run_source(source: &str) -> (Vec<String>, Vec<Diagnostic>) {
    let (instructions, parse_diagnostics) = parse(source);

    let mut analyzer = SemanticAnalyzer::new();
    analyzer.run(&instructions);

    let mut output: Vec<String> = parse_diagnostics
        .iter()
        .map(|diagnostic| diagnostic.to_string())
        .collect();
    output.extend(analyzer.get_output().iter().cloned());

    let mut diagnostics = parse_diagnostics;
    diagnostics.extend(analyzer.get_diagnostics().iter().cloned());

    (output, diagnostics)
}
