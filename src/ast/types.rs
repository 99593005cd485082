//! Type system definitions for the language.
//!
//! The language has exactly two declarable types:
//!
//! - `NUMERO`: numeric values, stored as 64-bit floats
//! - `CADEIA`: text values
//!
//! A variable's type is fixed when its symbol is created and never changes
//! afterwards; only the value may be replaced, and only by a value of a
//! compatible type.

use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref TYPE_LOOKUP: HashMap<&'static str, Type> = {
        let mut map = HashMap::new();
        map.insert("NUMERO", Type::Number);
        map.insert("CADEIA", Type::Text);
        map
    };
}

/// The declarable types of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    Number,
    Text,
}

impl Type {
    /// Infers the type a value would be declared with when no explicit
    /// type annotation is present. Unset values carry no type.
    pub fn infer(value: &Value) -> Option<Type> {
        match value {
            Value::Number(_) => Some(Type::Number),
            Value::Text(_) => Some(Type::Text),
            Value::Unset => None,
        }
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Number => write!(f, "NUMERO"),
            Type::Text => write!(f, "CADEIA"),
        }
    }
}

/// A runtime value held by a variable.
///
/// Integral and fractional source forms are stored uniformly as `f64`;
/// the distinction exists only in source text. `Unset` marks a declared
/// variable that has not received a value yet.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
    Unset,
}

impl Value {
    /// Whether this value can be stored in a slot of the given type.
    pub fn is_compatible_with(&self, ty: Type) -> bool {
        match self {
            Value::Number(_) => ty == Type::Number,
            Value::Text(_) => ty == Type::Text,
            Value::Unset => false,
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Value::Unset)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Number(number) => write!(f, "{}", number),
            Value::Text(text) => write!(f, "{}", text),
            Value::Unset => write!(f, "unset"),
        }
    }
}
