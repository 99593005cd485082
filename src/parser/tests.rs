//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language's line forms including:
//! - Block open and close lines
//! - Declarations with one or more names
//! - Assignments and comma-separated assignment groups
//! - PRINT statements
//! - Malformed lines and recovery

use crate::ast::instruction::InstructionKind;
use crate::ast::types::Type;

use super::parser::parse;

#[test]
fn test_parse_block_lines() {
    let (instructions, diagnostics) = parse("BLOCO principal\nFIM principal");

    assert!(diagnostics.is_empty());
    assert_eq!(instructions.len(), 2);
    assert_eq!(
        instructions[0].kind,
        InstructionKind::Block {
            name: "principal".to_string()
        }
    );
    assert_eq!(
        instructions[1].kind,
        InstructionKind::EndBlock {
            name: "principal".to_string()
        }
    );
}

#[test]
fn test_parse_declaration_single_name() {
    let (instructions, diagnostics) = parse("NUMERO x");

    assert!(diagnostics.is_empty());
    assert_eq!(
        instructions[0].kind,
        InstructionKind::Declare {
            name: "x".to_string(),
            declared_type: Type::Number,
        }
    );
}

#[test]
fn test_parse_declaration_flattens_comma_group() {
    let (instructions, diagnostics) = parse("CADEIA a, b , c");

    assert!(diagnostics.is_empty());
    assert_eq!(instructions.len(), 3);
    for (instruction, expected) in instructions.iter().zip(["a", "b", "c"]) {
        assert_eq!(
            instruction.kind,
            InstructionKind::Declare {
                name: expected.to_string(),
                declared_type: Type::Text,
            }
        );
    }
}

#[test]
fn test_parse_assignment() {
    let (instructions, diagnostics) = parse("x = 5");

    assert!(diagnostics.is_empty());
    assert_eq!(
        instructions[0].kind,
        InstructionKind::Assign {
            name: "x".to_string(),
            operand: Some("5".to_string()),
        }
    );
}

#[test]
fn test_parse_assignment_flattens_comma_group() {
    let (instructions, diagnostics) = parse("x = 1, y = 2");

    assert!(diagnostics.is_empty());
    assert_eq!(instructions.len(), 2);
    assert_eq!(
        instructions[0].kind,
        InstructionKind::Assign {
            name: "x".to_string(),
            operand: Some("1".to_string()),
        }
    );
    assert_eq!(
        instructions[1].kind,
        InstructionKind::Assign {
            name: "y".to_string(),
            operand: Some("2".to_string()),
        }
    );
}

#[test]
fn test_parse_assignment_with_empty_operand() {
    let (instructions, diagnostics) = parse("x =");

    assert!(diagnostics.is_empty());
    assert_eq!(
        instructions[0].kind,
        InstructionKind::Assign {
            name: "x".to_string(),
            operand: None,
        }
    );
}

#[test]
fn test_parse_typed_line_with_equals_is_assignment() {
    // The `=` check runs first, so the type keyword stays in the name
    // and is stripped later by the analyzer.
    let (instructions, diagnostics) = parse("NUMERO x = 5");

    assert!(diagnostics.is_empty());
    assert_eq!(
        instructions[0].kind,
        InstructionKind::Assign {
            name: "NUMERO x".to_string(),
            operand: Some("5".to_string()),
        }
    );
}

#[test]
fn test_parse_print() {
    let (instructions, diagnostics) = parse("PRINT x");

    assert!(diagnostics.is_empty());
    assert_eq!(
        instructions[0].kind,
        InstructionKind::Print {
            name: "x".to_string()
        }
    );
}

#[test]
fn test_parse_skips_blank_lines() {
    let (instructions, diagnostics) = parse("\n\nNUMERO x\n\n");

    assert!(diagnostics.is_empty());
    assert_eq!(instructions.len(), 1);
    assert_eq!(instructions[0].line, 3);
}

#[test]
fn test_parse_tracks_line_numbers() {
    let (instructions, _) = parse("BLOCO a\nNUMERO x\nx = 1");

    assert_eq!(instructions[0].line, 1);
    assert_eq!(instructions[1].line, 2);
    assert_eq!(instructions[2].line, 3);
}

#[test]
fn test_parse_unknown_line_reports_first_token() {
    let (instructions, diagnostics) = parse("LOOP x");

    assert!(instructions.is_empty());
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].to_string(),
        "Error: invalid instruction \"LOOP\" (line 1)"
    );
}

#[test]
fn test_parse_block_without_name_is_invalid() {
    let (instructions, diagnostics) = parse("BLOCO");

    assert!(instructions.is_empty());
    assert_eq!(diagnostics[0].get_error_name(), "InvalidInstruction");
}

#[test]
fn test_parse_fim_without_name_is_invalid() {
    let (instructions, diagnostics) = parse("FIM");

    assert!(instructions.is_empty());
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn test_parse_print_without_name_is_invalid() {
    let (instructions, diagnostics) = parse("PRINT");

    assert!(instructions.is_empty());
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn test_parse_declaration_without_names_is_invalid() {
    let (instructions, diagnostics) = parse("NUMERO");

    assert!(instructions.is_empty());
    assert_eq!(
        diagnostics[0].to_string(),
        "Error: invalid instruction \"NUMERO\" (line 1)"
    );
}

#[test]
fn test_parse_declaration_recovers_around_empty_name() {
    let (instructions, diagnostics) = parse("NUMERO x,, y");

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(instructions.len(), 2);
    assert_eq!(
        instructions[0].kind,
        InstructionKind::Declare {
            name: "x".to_string(),
            declared_type: Type::Number,
        }
    );
    assert_eq!(
        instructions[1].kind,
        InstructionKind::Declare {
            name: "y".to_string(),
            declared_type: Type::Number,
        }
    );
}

#[test]
fn test_parse_malformed_assignment_chunk_recovers() {
    let (instructions, diagnostics) = parse("x == 5, y = 2");

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].to_string(),
        "Error: invalid instruction \"x == 5\" (line 1)"
    );
    assert_eq!(instructions.len(), 1);
    assert_eq!(
        instructions[0].kind,
        InstructionKind::Assign {
            name: "y".to_string(),
            operand: Some("2".to_string()),
        }
    );
}

#[test]
fn test_parse_block_name_is_rest_of_line() {
    let (instructions, _) = parse("BLOCO bloco principal");

    assert_eq!(
        instructions[0].kind,
        InstructionKind::Block {
            name: "bloco principal".to_string()
        }
    );
}

#[test]
fn test_parse_empty_source() {
    let (instructions, diagnostics) = parse("");

    assert!(instructions.is_empty());
    assert!(diagnostics.is_empty());
}
