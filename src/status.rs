use serde_json::Value;
use std::fs;
use std::path::Path;

/// Keys a status document must carry; declaration order is the order they
/// are reported in when missing.
pub const REQUIRED_KEYS: &[&str] = &["run_start", "ok"];

pub fn load(path: &Path) -> Result<Value, String> {
    let text = fs::read_to_string(path).map_err(|e| format!("read status file: {e}"))?;
    serde_json::from_str(&text).map_err(|e| format!("parse status file: {e}"))
}

/// Required keys absent from the document, in declaration order. Every key
/// beyond the required two is accepted without inspection: the checker is
/// deliberately lenient about `run_end`, `version`, `metrics`, and friends.
pub fn missing_keys(doc: &Value) -> Result<Vec<&'static str>, String> {
    let obj = doc
        .as_object()
        .ok_or_else(|| "status file is not a JSON object".to_string())?;

    Ok(REQUIRED_KEYS
        .iter()
        .copied()
        .filter(|key| !obj.contains_key(*key))
        .collect())
}

/// Renders a missing-key list as `['run_start', 'ok']` for the FAIL line.
pub fn format_missing(keys: &[&str]) -> String {
    let quoted: Vec<String> = keys.iter().map(|key| format!("'{key}'")).collect();
    format!("[{}]", quoted.join(", "))
}
