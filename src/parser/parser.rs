//! Parser implementation for building the instruction stream.
//!
//! This module contains the main Parser struct and parsing functions.
//! The parser works line by line: each source line is classified by its
//! leading keyword (or by the presence of `=`) and turned into zero or
//! more atomic instructions. It handles:
//!
//! - Block open and close lines (`BLOCO` / `FIM`)
//! - Assignment lines, including comma-separated groups
//! - Declaration lines with one or more variable names
//! - `PRINT` lines
//! - Recovery on malformed lines via diagnostics
//!
//! Comma-separated groups are flattened here, so the analyzer only ever
//! sees a flat ordered sequence of atomic instructions.

use crate::{
    ast::{
        instruction::{Instruction, InstructionKind},
        types::{Type, TYPE_LOOKUP},
    },
    errors::errors::{Diagnostic, DiagnosticKind},
};

/// The main parser structure that maintains parsing state.
///
/// This struct accumulates the flattened instruction stream and the
/// diagnostics produced while walking the source line by line. It tracks
/// the current line number so every instruction and diagnostic carries
/// its 1-based origin line.
pub struct Parser {
    /// Instructions produced so far, in source order
    instructions: Vec<Instruction>,
    /// Diagnostics produced so far, in source order
    diagnostics: Vec<Diagnostic>,
    /// Current 1-based line number
    line: usize,
}

impl Parser {
    /// Creates a new Parser instance with an empty stream.
    pub fn new() -> Self {
        Parser {
            instructions: vec![],
            diagnostics: vec![],
            line: 0,
        }
    }

    /// Classifies one source line and appends the instructions it produces.
    ///
    /// Classification happens in a fixed order: blank lines are skipped,
    /// then `BLOCO`/`FIM` lines, then any line containing `=`, then
    /// declaration lines, then `PRINT` lines. A line matching none of
    /// these forms produces an `InvalidInstruction` diagnostic and is
    /// skipped.
    ///
    /// The `=` check runs before the declaration check, so a line like
    /// `NUMERO x = 5` parses as an assignment whose name still carries
    /// the type keyword; the analyzer strips it during normalization.
    pub fn parse_line(&mut self, raw: &str) {
        self.line += 1;

        let line = raw.trim();
        if line.is_empty() {
            return;
        }

        let (head, rest) = split_head(line);

        if head == "BLOCO" || head == "FIM" {
            self.parse_block_boundary(head, rest);
        } else if line.contains('=') {
            self.parse_assignments(line);
        } else if let Some(declared_type) = TYPE_LOOKUP.get(head) {
            self.parse_declaration(head, *declared_type, rest);
        } else if head == "PRINT" {
            self.parse_print(rest);
        } else {
            self.report_invalid(head);
        }
    }

    /// Parses a `BLOCO <name>` or `FIM <name>` line.
    ///
    /// The block name is the whole rest of the line. A missing name is
    /// malformed; the name is carried for reporting but never matched
    /// against the opening block.
    fn parse_block_boundary(&mut self, keyword: &str, name: &str) {
        if name.is_empty() {
            self.report_invalid(keyword);
            return;
        }

        let name = name.to_string();
        if keyword == "BLOCO" {
            self.push(InstructionKind::Block { name });
        } else {
            self.push(InstructionKind::EndBlock { name });
        }
    }

    /// Parses a line containing `=` into one assignment per comma chunk.
    ///
    /// Each chunk must split on `=` into exactly a name and an operand;
    /// chunks that do not are reported and skipped while the rest of the
    /// line still parses. An empty operand (as in `x =`) is carried as no
    /// operand at all. The comma split is not quote-aware, so a quoted
    /// operand containing `,` or `=` splits like any other text.
    fn parse_assignments(&mut self, line: &str) {
        for chunk in line.split(',') {
            let parts: Vec<&str> = chunk.split('=').collect();
            if parts.len() != 2 {
                self.report_invalid(chunk.trim());
                continue;
            }

            let name = parts[0].trim().to_string();
            let operand = parts[1].trim();
            let operand = if operand.is_empty() {
                None
            } else {
                Some(operand.to_string())
            };

            self.push(InstructionKind::Assign { name, operand });
        }
    }

    /// Parses a `NUMERO`/`CADEIA` line into one declaration per name.
    ///
    /// Missing or empty names are reported against the type keyword while
    /// the well-formed names on the same line still declare.
    fn parse_declaration(&mut self, keyword: &str, declared_type: Type, rest: &str) {
        if rest.is_empty() {
            self.report_invalid(keyword);
            return;
        }

        for name in rest.split(',') {
            let name = name.trim();
            if name.is_empty() {
                self.report_invalid(keyword);
                continue;
            }

            self.push(InstructionKind::Declare {
                name: name.to_string(),
                declared_type,
            });
        }
    }

    /// Parses a `PRINT <name>` line. The name is the whole rest of the line.
    fn parse_print(&mut self, name: &str) {
        if name.is_empty() {
            self.report_invalid("PRINT");
            return;
        }

        self.push(InstructionKind::Print {
            name: name.to_string(),
        });
    }

    fn push(&mut self, kind: InstructionKind) {
        self.instructions.push(Instruction::new(kind, self.line));
    }

    fn report_invalid(&mut self, tag: &str) {
        self.diagnostics.push(Diagnostic::new(
            DiagnosticKind::InvalidInstruction {
                tag: tag.to_string(),
            },
            self.line,
        ));
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits a trimmed line into its first whitespace-delimited token and
/// the rest of the line with leading whitespace removed.
fn split_head(line: &str) -> (&str, &str) {
    match line.find(char::is_whitespace) {
        Some(at) => (&line[..at], line[at..].trim_start()),
        None => (line, ""),
    }
}

/// Parses source text into a flat instruction stream.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// feeds it every source line, and collects the results. Parsing never
/// fails as a whole: malformed lines become diagnostics and the remaining
/// lines still parse.
///
/// # Arguments
///
/// * `source` - The program text, one instruction form per line
///
/// # Returns
///
/// A tuple containing:
/// - The flattened instructions, in source order
/// - The diagnostics for lines or parts that did not parse
pub fn parse(source: &str) -> (Vec<Instruction>, Vec<Diagnostic>) {
    let mut parser = Parser::new();

    for line in source.lines() {
        parser.parse_line(line);
    }

    (parser.instructions, parser.diagnostics)
}
