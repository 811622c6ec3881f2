use super::CaseStyle;
use crate::error::CaseError;
use serde_json::Value;

/// Convert an untyped JSON value with the given case style.
///
/// Only strings are accepted. Null and every non-string type fail with
/// [`CaseError::InvalidArgument`], with the received type named in the
/// message.
pub fn convert_value(style: CaseStyle, value: &Value) -> Result<String, CaseError> {
    match value {
        Value::String(s) => Ok(style.apply(s)),
        other => Err(CaseError::InvalidArgument {
            received: type_name(other),
        }),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
