use std::fs;

use lyrical_core::{CatalogError, CatalogKind, DescriptorCatalog, DescriptorEntry};
use lyrical_core::{WordListField, WordListManager, WordListRequest};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use tempfile::tempdir;

fn entry(descriptor: &str, classification: &[&str], tags: &[&str]) -> DescriptorEntry {
    DescriptorEntry::new(descriptor, format!("{descriptor}, as a colour"))
        .with_classification(classification.to_vec())
        .with_tags(tags.to_vec())
}

fn sample_catalog() -> DescriptorCatalog {
    let mut catalog = DescriptorCatalog::new();
    catalog.add(entry("vermilion", &["red", "bright"], &["red", "warm"]));
    catalog.add(entry("azure", &["blue"], &["blue", "cool"]));
    catalog.add(entry("ochre", &["yellow", "earth"], &["warm"]));
    catalog.add(entry("celadon", &[], &[]));
    catalog
}

#[test]
fn save_then_load_sorts_and_preserves_entries() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("descriptors.json");

    let mut catalog = sample_catalog();
    let mut expected = catalog.entries().to_vec();
    expected.sort_by(|a, b| a.descriptor.cmp(&b.descriptor));

    catalog.save(&path).unwrap();
    assert_eq!(catalog.entries(), expected.as_slice());

    let mut reloaded = DescriptorCatalog::new();
    let count = reloaded.load(&path).unwrap();
    assert_eq!(count, 4);
    assert_eq!(reloaded.entries(), expected.as_slice());

    let names: Vec<&str> = reloaded.iter().map(|e| e.descriptor.as_str()).collect();
    assert_eq!(names, vec!["azure", "celadon", "ochre", "vermilion"]);
    assert_eq!(
        reloaded.get("ochre").unwrap().classification,
        vec!["yellow", "earth"]
    );
}

#[test]
fn repeated_save_is_byte_identical() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("descriptors.json");

    let mut catalog = sample_catalog();
    catalog.save(&path).unwrap();
    let first = fs::read(&path).unwrap();
    catalog.save(&path).unwrap();
    let second = fs::read(&path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn save_sort_is_stable_for_duplicates() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dupes.json");

    let mut catalog = DescriptorCatalog::new();
    catalog.add(DescriptorEntry::new("rose", "second"));
    catalog.add(DescriptorEntry::new("lilac", "only"));
    catalog.add(DescriptorEntry::new("rose", "third"));
    catalog.save(&path).unwrap();

    let descriptions: Vec<&str> = catalog.iter().map(|e| e.description.as_str()).collect();
    assert_eq!(descriptions, vec!["only", "second", "third"]);
}

#[test]
fn failed_save_keeps_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("descriptors.json");

    let mut catalog = sample_catalog();
    let before = catalog.clone();
    let err = catalog.save(&path).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
    assert_eq!(catalog, before);
}

#[test]
fn failed_save_leaves_existing_target_intact() {
    let dir = tempdir().unwrap();
    // A non-empty directory cannot be replaced by a file.
    let path = dir.path().join("descriptors.json");
    fs::create_dir(&path).unwrap();
    fs::write(path.join("keep.txt"), "kept").unwrap();

    let mut catalog = sample_catalog();
    let before = catalog.clone();
    let err = catalog.save(&path).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
    assert_eq!(catalog, before);
    assert_eq!(fs::read_to_string(path.join("keep.txt")).unwrap(), "kept");

    let leftovers: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(leftovers.len(), 1, "temp file left behind");
}

#[test]
fn save_replaces_previous_file_without_leftovers() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("descriptors.json");
    fs::write(&path, "stale").unwrap();

    let mut catalog = sample_catalog();
    catalog.save(&path).unwrap();

    let mut reloaded = DescriptorCatalog::new();
    assert_eq!(reloaded.load(&path).unwrap(), 4);
    let names: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(names, vec![std::ffi::OsString::from("descriptors.json")]);
}

#[test]
fn load_missing_file_is_not_found() {
    let dir = tempdir().unwrap();
    let mut catalog = sample_catalog();
    let err = catalog.load(&dir.path().join("nope.json")).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(catalog.len(), 4);
}

#[test]
fn load_invalid_content_leaves_catalog_untouched() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    let before = sample_catalog();

    for bad in [
        "not json",
        r#"[{"descriptor": "x", "description": "y"}]"#,
        r#"[{"descriptor": "x", "description": "y", "classification": "red", "tags": []}]"#,
        r#"[{"descriptor": "x", "description": "y", "classification": [], "tags": [], "rgb": 1}]"#,
    ] {
        fs::write(&path, bad).unwrap();
        let mut catalog = before.clone();
        let err = catalog.load(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Deserialize { .. }), "{bad}");
        assert_eq!(catalog, before);
    }
}

#[test]
fn dump_writes_one_line_per_entry() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Descriptor_dump.txt");

    let mut catalog = DescriptorCatalog::new();
    catalog.add(entry("azure", &["blue"], &["cool", "blue"]));
    catalog.add(entry("celadon", &[], &[]));
    catalog.dump(&path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(
        text,
        "azure : azure, as a colour : blue : blue,cool\nceladon : celadon, as a colour :  : \n"
    );
}

#[test]
fn manager_filters_and_projects() {
    let dir = tempdir().unwrap();
    let manager = WordListManager::new(dir.path());

    let mut catalog = sample_catalog();
    manager
        .save(CatalogKind::ColourDescriptors, &mut catalog)
        .unwrap();

    let request = WordListRequest::new(CatalogKind::ColourDescriptors).tagged("warm");
    let words = manager.words(&request, WordListField::Descriptor).unwrap();
    assert_eq!(words, vec!["ochre", "vermilion"]);

    // Re-reading unchanged storage gives the same answer.
    assert_eq!(
        manager.words(&request, WordListField::Descriptor).unwrap(),
        words
    );

    let all = manager
        .entries(&WordListRequest::new(CatalogKind::ColourDescriptors))
        .unwrap();
    assert_eq!(all.len(), 4);
}

#[test]
fn manager_missing_catalog() {
    let dir = tempdir().unwrap();
    let manager = WordListManager::new(dir.path());
    let err = manager.load(CatalogKind::Smells).unwrap_err();
    assert!(err.is_not_found());
    assert!(manager
        .load_or_default(CatalogKind::Smells)
        .unwrap()
        .is_empty());
}

proptest! {
    #[test]
    fn save_load_round_trip_any_catalog(
        parts in prop::collection::btree_map(
            "[a-z]{1,10}",
            (
                "[a-z ]{0,12}",
                prop::collection::vec("[a-z]{1,6}", 0..3),
                prop::collection::btree_set("[a-z]{1,6}", 0..3),
            ),
            0..12,
        )
    ) {
        let expected: Vec<DescriptorEntry> = parts
            .iter()
            .map(|(descriptor, (description, classification, tags))| {
                DescriptorEntry::new(descriptor.as_str(), description.as_str())
                    .with_classification(classification.clone())
                    .with_tags(tags.iter().cloned())
            })
            .collect();

        let mut catalog = DescriptorCatalog::new();
        for entry in expected.iter().rev() {
            catalog.add(entry.clone());
        }

        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        catalog.save(&path).unwrap();
        let first = fs::read(&path).unwrap();

        let mut reloaded = DescriptorCatalog::new();
        prop_assert_eq!(reloaded.load(&path).unwrap(), expected.len());
        prop_assert_eq!(reloaded.entries(), expected.as_slice());

        reloaded.save(&path).unwrap();
        prop_assert_eq!(fs::read(&path).unwrap(), first);
    }
}
