//! Records are arbitrary JSON objects; the grouping key is one of their fields.

use std::path::Path;

use anyhow::Context as _;
use serde_json::Value;

/// Loads a JSON array of records.
pub fn load(path: &Path) -> anyhow::Result<Vec<Value>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("{} is not a JSON array of records", path.display()))
}

/// The string form of `record[field]`.
///
/// Missing, null and nested values give an empty key, which groups under `#`.
pub fn field_key(record: &Value, field: &str) -> String {
    match record.get(field) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Null | Value::Array(_) | Value::Object(_)) | None => String::new(),
    }
}
