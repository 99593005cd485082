use std::fmt::Display;

use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Diagnostic {
    kind: DiagnosticKind,
    line: usize,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, line: usize) -> Self {
        Diagnostic { kind, line }
    }

    pub fn get_line(&self) -> usize {
        self.line
    }

    pub fn get_kind(&self) -> &DiagnosticKind {
        &self.kind
    }

    pub fn get_error_name(&self) -> &str {
        match &self.kind {
            DiagnosticKind::UndeclaredVariable { .. } => "UndeclaredVariable",
            DiagnosticKind::TypeMismatch { .. } => "TypeMismatch",
            DiagnosticKind::InvalidInstruction { .. } => "InvalidInstruction",
            DiagnosticKind::ScopeUnderflow => "ScopeUnderflow",
            DiagnosticKind::IndeterminateType { .. } => "IndeterminateType",
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error: {} (line {})", self.kind, self.line)
    }
}

#[derive(Error, Debug, Clone)]
pub enum DiagnosticKind {
    #[error("variable {name:?} not declared")]
    UndeclaredVariable { name: String },
    #[error("type mismatch: invalid assignment for variable {name:?}")]
    TypeMismatch { name: String },
    #[error("invalid instruction {tag:?}")]
    InvalidInstruction { tag: String },
    #[error("unmatched FIM: no open block to close")]
    ScopeUnderflow,
    #[error("cannot infer a type for variable {name:?}: no declared type and no value")]
    IndeterminateType { name: String },
}
