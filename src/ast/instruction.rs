use crate::ast::types::Type;

/// One atomic instruction produced by the parser.
///
/// Comma-separated declaration and assignment lines are flattened into
/// one instruction per variable before they reach the analyzer, so the
/// stream is always a flat ordered sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum InstructionKind {
    /// `BLOCO <name>`: opens a nested scope. The block name is carried
    /// for reporting but never matched against the closing `FIM`.
    Block { name: String },
    /// `FIM <name>`: closes the innermost open scope.
    EndBlock { name: String },
    /// `PRINT <name>`: reports a variable's type and current value.
    Print { name: String },
    /// `NUMERO <name>` / `CADEIA <name>`: declares a variable without a value.
    Declare { name: String, declared_type: Type },
    /// `<name> = <operand>`: assigns to an existing variable or implicitly
    /// declares a new one with an inferred type. The operand is kept as raw
    /// text and resolved at execution time; `None` means no operand was given.
    Assign { name: String, operand: Option<String> },
}

#[derive(Debug, Clone)]
pub struct Instruction {
    pub kind: InstructionKind,
    /// 1-based source line this instruction came from.
    pub line: usize,
}

impl Instruction {
    pub fn new(kind: InstructionKind, line: usize) -> Self {
        Instruction { kind, line }
    }
}
