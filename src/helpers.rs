use serde::Serialize;

/// Serializes a value into JSON text, for binding structured data as a
/// single text parameter.
pub fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}
