//! JSON Schema helpers
//!
//! Builders for the small schema vocabulary the tools declare, plus a
//! validator for that same vocabulary: `type`, `properties`, `required`,
//! `minLength`, `maxLength` and `format: "uri"`. String lengths count
//! characters, not bytes.

use serde_json::{Map, Value, json};
use url::Url;

/// Create a JSON Schema object type
///
/// # Arguments
///
/// * `properties` - Map of property names to their schemas
/// * `required` - List of required property names
///
/// # Example
///
/// ```
/// use space_tools::schema::{object, string};
/// use serde_json::json;
///
/// let schema = object(
///     json!({
///         "postId": string(Some("ID of the post")),
///     }),
///     vec!["postId"],
/// );
/// assert_eq!(schema["required"][0], "postId");
/// ```
pub fn object(properties: Value, required: Vec<&str>) -> Value {
    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

/// Create an object schema with no properties
pub fn empty_object() -> Value {
    object(json!({}), vec![])
}

/// Create a JSON Schema string type
///
/// # Arguments
///
/// * `description` - Optional description of the string field
pub fn string(description: Option<&str>) -> Value {
    if let Some(d) = description {
        json!({
            "type": "string",
            "description": d,
        })
    } else {
        json!({"type": "string"})
    }
}

/// Create a string schema with character-length bounds
pub fn bounded_string(description: &str, min_length: usize, max_length: usize) -> Value {
    json!({
        "type": "string",
        "minLength": min_length,
        "maxLength": max_length,
        "description": description,
    })
}

/// Create a string schema that must not be empty
pub fn non_empty_string(description: &str) -> Value {
    let mut schema = string(Some(description));
    schema["minLength"] = json!(1);
    schema
}

/// Create a string schema that must hold an absolute URL
pub fn url_string(description: &str) -> Value {
    json!({
        "type": "string",
        "format": "uri",
        "description": description,
    })
}

/// Basic type check of a value against a schema's `type`
///
/// Returns `true` when the schema has no type constraint.
pub fn validate_basic(value: &Value, schema: &Value) -> bool {
    let schema_type = match schema.get("type") {
        Some(Value::String(t)) => t.as_str(),
        _ => return true,
    };

    match schema_type {
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

/// Validate a tool argument object against its schema
///
/// Returns a human-readable message for the first violation found. Optional
/// properties given as `null` are treated as absent.
pub fn validate(value: &Value, schema: &Value) -> Result<(), String> {
    validate_field("arguments", value, schema)
}

fn validate_field(field: &str, value: &Value, schema: &Value) -> Result<(), String> {
    if !validate_basic(value, schema) {
        let expected = schema.get("type").and_then(Value::as_str).unwrap_or("unknown");
        return Err(format!("{field} must be of type {expected}"));
    }

    match value {
        Value::Object(map) => validate_object(map, schema),
        Value::String(s) => validate_string(field, s, schema),
        _ => Ok(()),
    }
}

fn validate_object(map: &Map<String, Value>, schema: &Value) -> Result<(), String> {
    let required = schema
        .get("required")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_str);

    for name in required {
        if map.get(name).is_none_or(Value::is_null) {
            return Err(format!("{name} is required"));
        }
    }

    let Some(properties) = schema.get("properties").and_then(Value::as_object) else {
        return Ok(());
    };

    for (name, property_schema) in properties {
        match map.get(name) {
            None | Some(Value::Null) => {}
            Some(value) => validate_field(name, value, property_schema)?,
        }
    }

    Ok(())
}

fn validate_string(field: &str, s: &str, schema: &Value) -> Result<(), String> {
    let length = s.chars().count();

    if let Some(min) = schema.get("minLength").and_then(Value::as_u64) {
        if (length as u64) < min {
            return Err(format!("{field} must be at least {min} character(s)"));
        }
    }

    if let Some(max) = schema.get("maxLength").and_then(Value::as_u64) {
        if (length as u64) > max {
            return Err(format!("{field} must be at most {max} characters"));
        }
    }

    if schema.get("format").and_then(Value::as_str) == Some("uri") && Url::parse(s).is_err() {
        return Err(format!("{field} must be a valid URL"));
    }

    Ok(())
}
