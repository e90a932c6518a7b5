use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::Path;

/// Clears transient execution state from every code cell: `outputs`
/// becomes `[]` and `execution_count` becomes `null`. Other cells and all
/// remaining fields are left exactly as parsed, order included. A notebook
/// without a `cells` field is left alone.
pub fn strip_outputs(notebook: &mut Value) -> Result<(), String> {
    let Some(cells) = notebook.get_mut("cells") else {
        return Ok(());
    };

    let cells = cells
        .as_array_mut()
        .ok_or_else(|| "cells is not an array".to_string())?;

    for cell in cells {
        let cell = cell
            .as_object_mut()
            .ok_or_else(|| "cell is not an object".to_string())?;

        if cell.get("cell_type").and_then(Value::as_str) == Some("code") {
            cell.insert("outputs".to_string(), Value::Array(Vec::new()));
            cell.insert("execution_count".to_string(), Value::Null);
        }
    }

    Ok(())
}

/// Serializes a notebook in its canonical on-disk form: one-space
/// indentation, non-ASCII characters unescaped, one trailing newline.
pub fn render(notebook: &Value) -> Result<Vec<u8>, String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b" ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);

    notebook
        .serialize(&mut ser)
        .map_err(|e| format!("encode notebook: {e}"))?;
    buf.push(b'\n');

    Ok(buf)
}

/// Strips a notebook file in place, overwriting it at the same path.
pub fn strip_file(path: &Path) -> Result<(), String> {
    let text = fs::read_to_string(path).map_err(|e| format!("read notebook: {e}"))?;
    let mut notebook: Value =
        serde_json::from_str(&text).map_err(|e| format!("parse notebook: {e}"))?;

    strip_outputs(&mut notebook)?;

    let rendered = render(&notebook)?;
    fs::write(path, rendered).map_err(|e| format!("write notebook: {e}"))
}
