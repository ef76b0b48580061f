//! Client-side argument checks against a tool's `inputSchema`.
//!
//! This is a minimal validator: it checks that the arguments form an
//! object, that required fields are present and that each top-level
//! property has one of its declared JSON types. Nested schemas are not
//! descended into.

use serde_json::Value;
use thiserror::Error;

/// Schema validation errors.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The input does not match the expected schema.
    #[error("schema validation failed: {message}")]
    ValidationFailed { message: String },
    /// The schema itself is malformed.
    #[error("invalid schema: {message}")]
    InvalidSchema { message: String },
}

/// Validates a tool-call arguments object against an input schema.
///
/// # Errors
///
/// Returns `SchemaError::ValidationFailed` on the first mismatch and
/// `SchemaError::InvalidSchema` if the schema cannot be read.
pub fn validate_arguments(schema: &Value, input: &Value) -> Result<(), SchemaError> {
    let input_obj = input
        .as_object()
        .ok_or_else(|| SchemaError::ValidationFailed {
            message: "arguments must be an object".to_string(),
        })?;

    if let Some(required) = schema.get("required") {
        let required = required
            .as_array()
            .ok_or_else(|| SchemaError::InvalidSchema {
                message: "required must be an array".to_string(),
            })?;
        for field in required {
            let name = field.as_str().ok_or_else(|| SchemaError::InvalidSchema {
                message: "required field names must be strings".to_string(),
            })?;
            if !input_obj.contains_key(name) {
                return Err(SchemaError::ValidationFailed {
                    message: format!("missing required field: {name}"),
                });
            }
        }
    }

    let Some(properties) = schema.get("properties").and_then(Value::as_object) else {
        return Ok(());
    };

    for (name, value) in input_obj {
        let Some(declared) = properties.get(name).and_then(|p| p.get("type")) else {
            continue;
        };
        if !matches_declared_type(declared, value) {
            return Err(SchemaError::ValidationFailed {
                message: format!("field '{name}' must be of type {declared}"),
            });
        }
    }

    Ok(())
}

/// `declared` is either a single type name or an array of names.
fn matches_declared_type(declared: &Value, value: &Value) -> bool {
    match declared {
        Value::String(t) => matches_type(t, value),
        Value::Array(types) => types
            .iter()
            .filter_map(Value::as_str)
            .any(|t| matches_type(t, value)),
        _ => true,
    }
}

fn matches_type(type_name: &str, value: &Value) -> bool {
    match type_name {
        "string" => value.is_string(),
        "number" => value.is_number(),
        "integer" => value.is_i64() || value.is_u64(),
        "boolean" => value.is_boolean(),
        "array" => value.is_array(),
        "object" => value.is_object(),
        "null" => value.is_null(),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn workbook_schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "file_path": {"type": "string"},
                "sheets": {"type": "array", "items": {"type": "string"}}
            },
            "required": ["file_path"]
        })
    }

    #[test]
    fn accepts_required_only() {
        let input = json!({"file_path": "book.xlsx"});
        assert!(validate_arguments(&workbook_schema(), &input).is_ok());
    }

    #[test]
    fn rejects_missing_required_field() {
        let err = validate_arguments(&workbook_schema(), &json!({})).expect_err("missing");
        assert!(err.to_string().contains("file_path"));
    }

    #[test]
    fn rejects_wrong_property_type() {
        let input = json!({"file_path": "b.xlsx", "sheets": "Sheet1"});
        let err = validate_arguments(&workbook_schema(), &input).expect_err("type");
        assert!(err.to_string().contains("sheets"));
    }

    #[test]
    fn unknown_properties_pass() {
        let input = json!({"file_path": "b.xlsx", "extra": 1});
        assert!(validate_arguments(&workbook_schema(), &input).is_ok());
    }

    #[test]
    fn non_object_input_rejected() {
        assert!(validate_arguments(&workbook_schema(), &json!(42)).is_err());
    }

    #[test]
    fn type_union_matches_any_member() {
        let schema = json!({"properties": {"cell": {"type": ["string", "null"]}}});
        assert!(validate_arguments(&schema, &json!({"cell": null})).is_ok());
        assert!(validate_arguments(&schema, &json!({"cell": "x"})).is_ok());
        assert!(validate_arguments(&schema, &json!({"cell": 3})).is_err());
    }

    #[test]
    fn malformed_required_is_invalid_schema() {
        let schema = json!({"required": "file_path"});
        let err = validate_arguments(&schema, &json!({})).expect_err("bad schema");
        assert!(matches!(err, SchemaError::InvalidSchema { .. }));
    }
}
