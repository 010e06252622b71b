//! Integration tests for loading event tables from disk.

use std::fs;

use catalysts::{EventTable, TableError};
use tempfile::TempDir;
use types::Polarity;

const VKTX_JSON: &str = r#"{
    "VKTX": [
        {"period": "Jul", "polarity": "negative", "description": "Oral data", "impact_note": "Tolerability"},
        {"period": "Sep", "polarity": "positive", "description": "Enrollment", "impact_note": "Ahead of plan"},
        {"period": "Nov", "polarity": "positive", "description": "Publication", "impact_note": "Validation"}
    ]
}"#;

const VKTX_TOML: &str = r#"
[[VKTX]]
period = "Jul"
polarity = "negative"
description = "Oral data"
impact_note = "Tolerability"

[[VKTX]]
period = "Sep"
polarity = "positive"
description = "Enrollment"
impact_note = "Ahead of plan"

[[VKTX]]
period = "Nov"
polarity = "positive"
description = "Publication"
impact_note = "Validation"

[VKTX.source]
label = "Obesity Journal"
url = "https://example.com/venture"
"#;

#[test]
fn test_load_json_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("events.json");
    fs::write(&path, VKTX_JSON).unwrap();

    let table = EventTable::load(&path).unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.events_for("VKTX").len(), 3);
}

#[test]
fn test_load_toml_file_matches_json() {
    let dir = TempDir::new().unwrap();
    let json_path = dir.path().join("events.json");
    let toml_path = dir.path().join("events.toml");
    fs::write(&json_path, VKTX_JSON).unwrap();
    fs::write(&toml_path, VKTX_TOML).unwrap();

    let from_json = EventTable::load(&json_path).unwrap();
    let from_toml = EventTable::load(&toml_path).unwrap();

    let polarities = |t: &EventTable| -> Vec<Polarity> {
        t.events_for("VKTX").iter().map(|e| e.polarity).collect()
    };
    assert_eq!(polarities(&from_json), polarities(&from_toml));

    // Only the TOML variant carries a citation on the last event
    let last = &from_toml.events_for("VKTX")[2];
    assert_eq!(
        last.source.as_ref().and_then(|s| s.url.as_deref()),
        Some("https://example.com/venture")
    );
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = EventTable::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, TableError::Io(_)));
}

#[test]
fn test_load_malformed_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(matches!(EventTable::load(&path), Err(TableError::Json(_))));
}

#[test]
fn test_load_rejects_duplicate_period() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dup.json");
    fs::write(
        &path,
        r#"{"LLY": [
            {"period": "Aug", "polarity": "positive", "description": "", "impact_note": ""},
            {"period": "Aug", "polarity": "negative", "description": "", "impact_note": ""}
        ]}"#,
    )
    .unwrap();

    assert!(matches!(
        EventTable::load(&path),
        Err(TableError::DuplicatePeriod { .. })
    ));
}
