//! Docs command file output.

use pretty_assertions::assert_eq;
use synthinfo_cli::commands::docs;
use synthinfo_core::render_fx_docs;
use tempfile::tempdir;

#[test]
fn test_markdown_written_to_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fx.md");
    let path_str = path.to_str().unwrap();

    docs::run("fx", "markdown", Some(path_str)).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, render_fx_docs().markdown);
}

#[test]
fn test_json_written_to_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("synths.json");

    docs::run("synths", "json", Some(path.to_str().unwrap())).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["html"].as_array().unwrap().len(), 28);
    assert_eq!(json["html"][0]["key"], "dull_bell");
}

#[test]
fn test_unwritable_path_reports_context() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("fx.html");

    let err = docs::run("fx", "html", Some(path.to_str().unwrap())).unwrap_err();
    assert!(err.to_string().starts_with("Failed to write docs to:"));
}

#[test]
fn test_unknown_section_is_an_error() {
    let err = docs::run("drums", "markdown", None).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unknown section: drums. Supported: synths, fx, samples"
    );
}
