//! JSON formatting

use serde_json::Value as JsonValue;

/// Indentation used for every pretty-printed document
const INDENT: &[u8] = b"  ";

/// Pretty-print a JSON value with two-space indentation
pub fn format_json_value(value: &JsonValue) -> Result<String, String> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);

    serde::Serialize::serialize(value, &mut serializer)
        .map_err(|e| format!("JSON formatting error: {}", e))?;

    String::from_utf8(buf).map_err(|e| format!("UTF-8 error: {}", e))
}

/// Pretty-print anything serializable (header maps, parsed requests)
pub fn format_serializable<T: serde::Serialize>(value: &T) -> Result<String, String> {
    let value = serde_json::to_value(value).map_err(|e| format!("JSON formatting error: {}", e))?;
    format_json_value(&value)
}
