use serde_json::Value;
use thiserror::Error;

/// Type tags that change how an answer is stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableType {
    Boolean,
}

impl VariableType {
    /// Recognised tag, or `None` for tags that leave the answer as a string
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "boolean" => Some(VariableType::Boolean),
            _ => None,
        }
    }
}

/// Answer that does not fit the declared type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{value}' is not a recognised boolean")]
pub struct CoercionError {
    pub value: String,
}

const TRUE_LITERALS: &[&str] = &["yes", "true", "1", "y"];
const FALSE_LITERALS: &[&str] = &["no", "false", "0", "n"];

/// Parse a boolean literal, ignoring ASCII case
pub fn parse_bool(raw: &str) -> Option<bool> {
    let matches = |literals: &[&str]| literals.iter().any(|l| l.eq_ignore_ascii_case(raw));
    if matches(TRUE_LITERALS) {
        Some(true)
    } else if matches(FALSE_LITERALS) {
        Some(false)
    } else {
        None
    }
}

/// Convert a raw answer according to its declared type tag.
///
/// Missing or unrecognised tags keep the answer as a string.
pub fn coerce(raw: &str, type_tag: Option<&str>) -> Result<Value, CoercionError> {
    match type_tag.and_then(VariableType::from_tag) {
        Some(VariableType::Boolean) => parse_bool(raw)
            .map(Value::Bool)
            .ok_or_else(|| CoercionError {
                value: raw.to_string(),
            }),
        None => Ok(Value::String(raw.to_string())),
    }
}
