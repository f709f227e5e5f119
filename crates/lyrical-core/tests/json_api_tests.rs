use lyrical_core::{analyze_to_json, word_list_to_json, CatalogKind, DescriptorCatalog};
use lyrical_core::{DescriptorEntry, WordListManager};
use serde_json::Value;

fn assert_success(json: &str) -> Value {
    let v: Value = serde_json::from_str(json).expect("valid JSON");
    assert_eq!(v["success"], true, "expected success=true, got: {json}");
    v
}

fn assert_failure(json: &str) -> Value {
    let v: Value = serde_json::from_str(json).expect("valid JSON");
    assert_eq!(v["success"], false, "expected success=false, got: {json}");
    v
}

// ---------------------------------------------------------------------------
// analyze_to_json
// ---------------------------------------------------------------------------

#[test]
fn analyze_returns_camel_case_report() {
    let v = assert_success(&analyze_to_json("The cat sat. A dog ran quickly.", ""));
    assert_eq!(v["data"]["totalWords"], 7);
    assert_eq!(v["data"]["functionalWords"], 2);
    assert!(v["data"]["averageSyllablesPerWord"].is_number());
    assert!(v["data"]["functionalWordRatio"].is_number());
    assert!(v.get("error").is_none());
}

#[test]
fn analyze_blank_has_null_data() {
    let v = assert_success(&analyze_to_json("   ", "{}"));
    assert!(v["data"].is_null());
}

#[test]
fn analyze_with_extra_words() {
    let v = assert_success(&analyze_to_json(
        "thou art",
        r#"{"minimal": true, "extraFunctionWords": ["Thou"]}"#,
    ));
    assert_eq!(v["data"]["functionalWords"], 1);
}

#[test]
fn analyze_invalid_options() {
    let v = assert_failure(&analyze_to_json("text", "{not json"));
    assert!(v["error"]
        .as_str()
        .unwrap()
        .contains("Invalid options JSON"));
}

// ---------------------------------------------------------------------------
// word_list_to_json
// ---------------------------------------------------------------------------

#[test]
fn word_list_entries_and_projection() {
    let dir = tempfile::tempdir().unwrap();
    let manager = WordListManager::new(dir.path());
    let mut catalog = DescriptorCatalog::new();
    catalog.add(DescriptorEntry::new("petrichor", "smell of rain").with_tags(["rain"]));
    catalog.add(DescriptorEntry::new("luminous", "full of light").with_tags(["light"]));
    manager
        .save(CatalogKind::BeautifulWords, &mut catalog)
        .unwrap();

    let resources = dir.path().to_str().unwrap();

    let v = assert_success(&word_list_to_json(resources, r#"{"kind": "beautiful-words"}"#));
    assert_eq!(v["data"].as_array().unwrap().len(), 2);
    assert_eq!(v["data"][0]["descriptor"], "luminous");

    let v = assert_success(&word_list_to_json(
        resources,
        r#"{"kind": "beautiful", "tag": "rain", "field": "description"}"#,
    ));
    assert_eq!(v["data"], serde_json::json!(["smell of rain"]));
}

#[test]
fn word_list_errors_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    let resources = dir.path().to_str().unwrap();

    let v = assert_failure(&word_list_to_json(resources, r#"{"kind": "sounds"}"#));
    assert!(v["error"].as_str().unwrap().contains("Unknown catalog kind"));

    let v = assert_failure(&word_list_to_json(resources, r#"{"kind": "smells"}"#));
    assert!(v["error"].as_str().unwrap().contains("Catalog not found"));
}
