use indexmap::IndexMap;

use crate::ast::types::{Type, Value};

/// An ordered map from variable names to their symbols.
///
/// Declaration order is preserved so that scope contents can be walked
/// and reported deterministically.
pub type Scope = IndexMap<String, Symbol>;

/// A declared variable: its name, its fixed type, and its current value.
///
/// The type is set when the symbol is created and never changes for the
/// lifetime of the owning scope. Value replacement goes through
/// [`Symbol::assign`], which rejects missing or incompatible values.
#[derive(Debug, Clone)]
pub struct Symbol {
    name: String,
    symbol_type: Type,
    value: Value,
}

impl Symbol {
    pub fn new(name: String, symbol_type: Type, value: Value) -> Self {
        Symbol {
            name,
            symbol_type,
            value,
        }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_type(&self) -> Type {
        self.symbol_type
    }

    pub fn get_value(&self) -> &Value {
        &self.value
    }

    /// Replaces the symbol's value, keeping its type fixed.
    pub fn assign(&mut self, value: Value) -> Result<(), DeclareError> {
        if value.is_unset() || !value.is_compatible_with(self.symbol_type) {
            return Err(DeclareError::TypeMismatch);
        }
        self.value = value;
        Ok(())
    }
}

/// Why the scope stack rejected a declaration or assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclareError {
    /// The value is missing or incompatible with the symbol's fixed type.
    TypeMismatch,
    /// No declared type and no value to infer one from.
    IndeterminateType,
}

/// The stack of lexical scopes, innermost scope last.
///
/// The first pushed scope is the root scope of a run. `pop_scope` refuses
/// to remove it, so a stray `FIM` can never leave the stack without a
/// frame to declare into.
#[derive(Debug)]
pub struct ScopeStack {
    scopes: Vec<Scope>,
}

impl ScopeStack {
    pub fn new() -> Self {
        ScopeStack { scopes: vec![] }
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn push_scope(&mut self) {
        self.scopes.push(Scope::new());
    }

    /// Removes and returns the innermost scope, or `None` when only the
    /// root scope (or nothing) remains.
    pub fn pop_scope(&mut self) -> Option<Scope> {
        if self.scopes.len() > 1 {
            self.scopes.pop()
        } else {
            None
        }
    }

    /// Drops every scope, including the root.
    pub fn clear(&mut self) {
        self.scopes.clear();
    }

    /// Finds the innermost binding of `name`, scanning outwards.
    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        for scope in self.scopes.iter().rev() {
            if let Some(symbol) = scope.get(name) {
                return Some(symbol);
            }
        }
        None
    }

    /// Finds the innermost binding of `name` that actually holds a value.
    ///
    /// A declared-but-unset binding does not stop the scan here: reference
    /// resolution treats it as absent and keeps looking outwards.
    pub fn lookup_value(&self, name: &str) -> Option<&Value> {
        for scope in self.scopes.iter().rev() {
            if let Some(symbol) = scope.get(name) {
                if !symbol.get_value().is_unset() {
                    return Some(symbol.get_value());
                }
            }
        }
        None
    }

    /// Declares `name` in the current scope, or updates it if the current
    /// scope already has it. Outer scopes are never touched: assigning to
    /// a name bound only in an outer scope creates an inner shadow.
    ///
    /// For an existing symbol the value must be present and compatible
    /// with its fixed type. For a new symbol the type is the declared one
    /// if given, otherwise inferred from the value.
    pub fn declare_or_update(
        &mut self,
        name: &str,
        declared_type: Option<Type>,
        value: Value,
    ) -> Result<(), DeclareError> {
        let current = self.scopes.last_mut().expect("scope stack empty");

        if let Some(symbol) = current.get_mut(name) {
            return symbol.assign(value);
        }

        let symbol_type = match declared_type {
            Some(symbol_type) => symbol_type,
            None => Type::infer(&value).ok_or(DeclareError::IndeterminateType)?,
        };

        if !value.is_unset() && !value.is_compatible_with(symbol_type) {
            return Err(DeclareError::TypeMismatch);
        }

        current.insert(
            name.to_string(),
            Symbol::new(name.to_string(), symbol_type, value),
        );
        Ok(())
    }
}

impl Default for ScopeStack {
    fn default() -> Self {
        Self::new()
    }
}
