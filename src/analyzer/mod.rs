//! Semantic analysis and direct execution.
//!
//! This module executes the parsed instruction stream while checking its
//! semantics. It handles:
//!
//! - Scope management for nested blocks, with lexical shadowing
//! - Symbol tables holding fixed types and mutable compatible values
//! - Value resolution for literals and variable references
//! - Type inference for implicit declarations
//! - Diagnostic reporting with recovery after every error
//!
//! The analyzer maintains a scope stack whose root frame is protected, so
//! even unbalanced programs run to completion against an intact stack.

pub mod analyzer;
pub mod resolver;
pub mod scope;
