use lazy_static::lazy_static;
use regex::Regex;

use crate::ast::types::Value;

use super::scope::ScopeStack;

lazy_static! {
    static ref INTEGER_PATTERN: Regex = Regex::new(r"^-?[0-9]+$").unwrap();
    static ref SIGNED_DIGITS_PATTERN: Regex = Regex::new(r"^[+-]?[0-9]+$").unwrap();
}

/// Resolves a raw textual operand into a runtime value.
///
/// Resolution tries each form in order and takes the first match:
///
/// 1. No operand at all resolves to `Unset`.
/// 2. Text surrounded by one pair of double quotes resolves to `Text`,
///    with that pair stripped and no escape processing. A solitary `"`
///    is not a pair and falls through.
/// 3. An optionally-negative run of digits resolves to `Number`.
/// 4. Anything containing a decimal point, or an optionally-signed run
///    of digits, is parsed as a float. A malformed form such as `1.2.3`
///    falls through instead of failing.
/// 5. Everything else is a variable reference: the trimmed name is
///    looked up innermost-first, and the referenced value is copied.
///    Unbound or unset references resolve to `Unset`; reporting that is
///    the caller's concern at the point of use.
pub fn resolve_value(raw: Option<&str>, scopes: &ScopeStack) -> Value {
    let raw = match raw {
        Some(raw) => raw,
        None => return Value::Unset,
    };

    if let Some(text) = strip_quote_pair(raw) {
        return Value::Text(text.to_string());
    }

    if INTEGER_PATTERN.is_match(raw) {
        if let Ok(number) = raw.parse::<f64>() {
            return Value::Number(number);
        }
    }

    if raw.contains('.') || SIGNED_DIGITS_PATTERN.is_match(raw) {
        if let Ok(number) = raw.parse::<f64>() {
            return Value::Number(number);
        }
    }

    match scopes.lookup_value(raw.trim()) {
        Some(value) => value.clone(),
        None => Value::Unset,
    }
}

fn strip_quote_pair(raw: &str) -> Option<&str> {
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        Some(&raw[1..raw.len() - 1])
    } else {
        None
    }
}
