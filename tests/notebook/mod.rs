use serde_json::{Value, json};
use std::fs;
use sweep_cli::notebook::{render, strip_file, strip_outputs};
use tempfile::tempdir;

fn sample_notebook() -> Value {
    json!({
        "nbformat": 4,
        "cells": [
            {
                "cell_type": "code",
                "source": ["print(1)"],
                "outputs": [{"output_type": "stream", "text": ["1\n"]}],
                "execution_count": 5
            },
            {
                "cell_type": "markdown",
                "source": ["# Résumé"],
                "outputs": [9]
            }
        ],
        "metadata": {}
    })
}

#[test]
fn strip_clears_code_cells_only() {
    let mut nb = sample_notebook();
    let markdown_before = nb["cells"][1].clone();

    strip_outputs(&mut nb).expect("strip");

    assert_eq!(nb["cells"][0]["outputs"], json!([]));
    assert_eq!(nb["cells"][0]["execution_count"], Value::Null);
    assert_eq!(nb["cells"][0]["source"], json!(["print(1)"]));
    assert_eq!(nb["cells"][1], markdown_before);
    assert_eq!(nb["cells"].as_array().expect("cells").len(), 2);
}

#[test]
fn strip_inserts_fields_missing_from_code_cells() {
    let mut nb = json!({ "cells": [{ "cell_type": "code", "source": [] }] });
    strip_outputs(&mut nb).expect("strip");

    assert_eq!(nb["cells"][0]["outputs"], json!([]));
    assert_eq!(nb["cells"][0]["execution_count"], Value::Null);
}

#[test]
fn strip_skips_cells_without_cell_type() {
    let mut nb = json!({ "cells": [{ "outputs": [1] }] });
    strip_outputs(&mut nb).expect("strip");
    assert_eq!(nb["cells"][0]["outputs"], json!([1]));
}

#[test]
fn strip_tolerates_missing_cells_field() {
    let mut nb = json!({ "metadata": {} });
    strip_outputs(&mut nb).expect("strip");
    assert_eq!(nb, json!({ "metadata": {} }));
}

#[test]
fn strip_rejects_non_array_cells() {
    let mut nb = json!({ "cells": {} });
    let err = strip_outputs(&mut nb).expect_err("cells must be an array");
    assert!(err.contains("not an array"));
}

#[test]
fn strip_rejects_non_object_cell() {
    let mut nb = json!({ "cells": [42] });
    let err = strip_outputs(&mut nb).expect_err("cell must be an object");
    assert!(err.contains("not an object"));
}

#[test]
fn render_uses_one_space_indent_and_trailing_newline() {
    let rendered = render(&json!({ "a": [1] })).expect("render");
    assert_eq!(rendered, b"{\n \"a\": [\n  1\n ]\n}\n");
}

#[test]
fn render_keeps_non_ascii_unescaped() {
    let rendered = render(&json!({ "note": "Résumé à jour" })).expect("render");
    let text = String::from_utf8(rendered).expect("utf-8");
    assert!(text.contains("Résumé à jour"));
    assert!(!text.contains("\\u"));
}

#[test]
fn strip_file_overwrites_in_place() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("dev.ipynb");
    fs::write(&path, sample_notebook().to_string()).expect("write");

    strip_file(&path).expect("strip");

    let text = fs::read_to_string(&path).expect("read back");
    assert!(text.ends_with("}\n"));
    assert!(!text.ends_with("}\n\n"));

    let nb: Value = serde_json::from_str(&text).expect("parse");
    assert_eq!(nb["cells"][0]["outputs"], json!([]));
    assert_eq!(nb["cells"][0]["execution_count"], Value::Null);
    assert_eq!(nb["cells"][1]["outputs"], json!([9]));
}

#[test]
fn strip_file_preserves_key_order() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("dev.ipynb");
    fs::write(&path, sample_notebook().to_string()).expect("write");

    strip_file(&path).expect("strip");

    let text = fs::read_to_string(&path).expect("read back");
    let nbformat = text.find("\"nbformat\"").expect("nbformat key");
    let cells = text.find("\"cells\"").expect("cells key");
    let metadata = text.find("\"metadata\"").expect("metadata key");
    assert!(nbformat < cells && cells < metadata);
}

#[test]
fn strip_file_is_idempotent() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("dev.ipynb");
    fs::write(&path, sample_notebook().to_string()).expect("write");

    strip_file(&path).expect("first strip");
    let once = fs::read(&path).expect("read once");

    strip_file(&path).expect("second strip");
    let twice = fs::read(&path).expect("read twice");

    assert_eq!(once, twice);
}
