use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    ast::{
        instruction::{Instruction, InstructionKind},
        types::Type,
    },
    errors::errors::{Diagnostic, DiagnosticKind},
};

use super::{
    resolver::resolve_value,
    scope::{DeclareError, ScopeStack},
};

lazy_static! {
    static ref TYPE_PREFIX_PATTERN: Regex = Regex::new(r"^(NUMERO|CADEIA)\s*").unwrap();
}

/// Executes a parsed instruction stream directly, reporting diagnostics
/// instead of stopping on the first problem.
///
/// PRINT lines and rendered diagnostics are appended to an output log in
/// event order; diagnostics are also collected structurally. One analyzer
/// can run several streams, each run starting from a clean state.
#[derive(Debug)]
pub struct SemanticAnalyzer {
    scopes: ScopeStack,
    output: Vec<String>,
    diagnostics: Vec<Diagnostic>,
}

impl SemanticAnalyzer {
    pub fn new() -> Self {
        SemanticAnalyzer {
            scopes: ScopeStack::new(),
            output: vec![],
            diagnostics: vec![],
        }
    }

    pub fn get_output(&self) -> &[String] {
        &self.output
    }

    pub fn get_diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn get_scope_depth(&self) -> usize {
        self.scopes.depth()
    }

    /// Runs every instruction in order against a fresh root scope.
    ///
    /// Previous output and diagnostics are discarded. After the run the
    /// scope stack is torn down completely, so any scopes a malformed
    /// program left open do not leak into the next run.
    pub fn run(&mut self, instructions: &[Instruction]) {
        self.output.clear();
        self.diagnostics.clear();
        self.scopes.clear();
        self.scopes.push_scope();

        for instruction in instructions {
            self.execute(instruction);
        }

        self.scopes.clear();
    }

    fn execute(&mut self, instruction: &Instruction) {
        let line = instruction.line;
        match &instruction.kind {
            InstructionKind::Block { .. } => self.scopes.push_scope(),
            InstructionKind::EndBlock { .. } => {
                // Block names are carried for reporting only; FIM always
                // closes the innermost block, and the root is protected.
                if self.scopes.pop_scope().is_none() {
                    self.report(DiagnosticKind::ScopeUnderflow, line);
                }
            }
            InstructionKind::Print { name } => match self.scopes.lookup(name) {
                Some(symbol) => {
                    self.output.push(format!(
                        "PRINT {}: type={} value={}",
                        symbol.get_name(),
                        symbol.get_type(),
                        symbol.get_value()
                    ));
                }
                None => self.report(
                    DiagnosticKind::UndeclaredVariable { name: name.clone() },
                    line,
                ),
            },
            InstructionKind::Declare {
                name,
                declared_type,
            } => self.declare_or_assign(name, Some(*declared_type), None, line),
            InstructionKind::Assign { name, operand } => {
                self.declare_or_assign(name, None, operand.as_deref(), line)
            }
        }
    }

    fn declare_or_assign(
        &mut self,
        name: &str,
        declared_type: Option<Type>,
        operand: Option<&str>,
        line: usize,
    ) {
        let name = normalize_name(name);
        let value = resolve_value(operand, &self.scopes);

        if let Err(error) = self.scopes.declare_or_update(&name, declared_type, value) {
            let kind = match error {
                DeclareError::TypeMismatch => DiagnosticKind::TypeMismatch { name },
                DeclareError::IndeterminateType => DiagnosticKind::IndeterminateType { name },
            };
            self.report(kind, line);
        }
    }

    fn report(&mut self, kind: DiagnosticKind, line: usize) {
        let diagnostic = Diagnostic::new(kind, line);
        self.output.push(diagnostic.to_string());
        self.diagnostics.push(diagnostic);
    }
}

impl Default for SemanticAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Strips one leading type keyword from a variable name and trims it.
///
/// Declaration and assignment lines both go through this, so `NUMERO x`
/// and a later `x = 5` refer to the same symbol.
pub fn normalize_name(raw: &str) -> String {
    TYPE_PREFIX_PATTERN.replace(raw, "").trim().to_string()
}
