//! Integration tests for the directory-backed store
//!
//! Category: component
//! Exercises lookups, listing and writes against real record files.

use market_meta::{MarketCode, MarketId};
use market_store::{DirectoryStore, Error, MarketRecordStore, RecordFormat};
use market_test_utils::{MarketBuilder, TestMarketsDir, seed_markets};
use pretty_assertions::assert_eq;

fn code(raw: &str) -> MarketCode {
    MarketCode::parse(raw).unwrap()
}

// ============================================================================
// Lookups
// ============================================================================

#[tokio::test]
async fn test_find_by_code_and_id() {
    let dir = TestMarketsDir::with_records(&seed_markets());
    let store = DirectoryStore::new(dir.path());

    let singapore = store.find_by_code(&code("SG")).await.unwrap().unwrap();
    assert_eq!(singapore.name, "Singapore");

    let malaysia = store
        .find_by_id(&MarketId::new("market-my"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(malaysia.code, code("MY"));

    assert!(store.find_by_code(&code("NZ")).await.unwrap().is_none());
}

#[tokio::test]
async fn test_reads_toml_yaml_and_json() {
    let dir = TestMarketsDir::new();
    dir.write_raw(
        "my.toml",
        r#"
id = "market-my"
name = "Malaysia"
code = "MY"
"#,
    );
    dir.write_raw(
        "sg.yaml",
        "id: market-sg\nname: Singapore\ncode: SG\nheader:\n  mode: reuse\n  target: market-my\n",
    );
    dir.write_raw(
        "au.json",
        r#"{ "id": "market-au", "name": "Australia", "code": "au" }"#,
    );

    let store = DirectoryStore::new(dir.path());
    let all = store.all().await.unwrap();
    assert_eq!(all.len(), 3);

    let singapore = store.find_by_code(&code("SG")).await.unwrap().unwrap();
    assert_eq!(
        singapore.reuse_target(market_meta::SectionKind::Header),
        Some(&MarketId::new("market-my"))
    );
}

#[tokio::test]
async fn test_broken_and_foreign_files_are_skipped() {
    let dir = TestMarketsDir::with_records(&seed_markets());
    dir.write_raw("broken.json", "{ not json");
    dir.write_raw("README.md", "# markets");
    dir.write_raw("nameless.toml", "id = \"x\"\nname = \"\"\ncode = \"XX\"\n");

    let store = DirectoryStore::new(dir.path());
    assert_eq!(store.all().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_duplicate_code_keeps_first_file() {
    let dir = TestMarketsDir::new();
    dir.write_record(&MarketBuilder::new("market-a", "MY").name("First").build());
    dir.write_raw(
        "zz.json",
        r#"{ "id": "market-b", "name": "Second", "code": "MY" }"#,
    );

    let store = DirectoryStore::new(dir.path());
    let found = store.find_by_code(&code("MY")).await.unwrap().unwrap();
    assert_eq!(found.name, "First");
    assert_eq!(store.all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_missing_directory_is_unavailable() {
    let dir = TestMarketsDir::new();
    let store = DirectoryStore::new(dir.path().join("does-not-exist"));

    let err = store.find_by_code(&code("MY")).await.unwrap_err();
    assert!(matches!(err, Error::Unavailable { .. }));
}

#[tokio::test]
async fn test_edits_are_visible_on_next_lookup() {
    let dir = TestMarketsDir::with_records(&seed_markets());
    let store = DirectoryStore::new(dir.path());

    let before = store.find_by_code(&code("MY")).await.unwrap().unwrap();
    assert_eq!(before.name, "Malaysia");

    let mut renamed = before.clone();
    renamed.name = "Malaysia (updated)".to_string();
    dir.write_record(&renamed);

    let after = store.find_by_code(&code("MY")).await.unwrap().unwrap();
    assert_eq!(after.name, "Malaysia (updated)");
}

// ============================================================================
// Listing and writes
// ============================================================================

#[tokio::test]
async fn test_list_summaries() {
    let dir = TestMarketsDir::with_records(&seed_markets());
    let store = DirectoryStore::new(dir.path());

    let summaries = store.list().await.unwrap();
    let codes: Vec<&str> = summaries.iter().map(|s| s.code.as_str()).collect();
    // No creation times: ordered by code
    assert_eq!(codes, vec!["AU", "MY", "SG"]);
    assert!(summaries.iter().any(|s| s.is_default && s.code.as_str() == "MY"));
}

#[tokio::test]
async fn test_put_writes_loadable_record() {
    let dir = TestMarketsDir::new();
    let store = DirectoryStore::new(dir.path()).with_format(RecordFormat::Toml);

    for record in seed_markets() {
        let path = store.put(&record).unwrap();
        assert!(path.ends_with(format!("{}.toml", record.code.as_str().to_lowercase())));
    }

    let loaded = store.all().await.unwrap();
    let mut expected = seed_markets();
    expected.sort_by(|a, b| a.code.cmp(&b.code));
    // au.toml, my.toml, sg.toml: file-name order matches code order
    assert_eq!(loaded, expected);
}

#[test]
fn test_put_rejects_invalid_record() {
    let dir = TestMarketsDir::new();
    let store = DirectoryStore::new(dir.path());
    let record = MarketBuilder::new("market-my", "MY").name("").build();

    assert!(store.put(&record).is_err());
    assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
}

#[tokio::test]
async fn test_put_with_changed_code_replaces_old_file() {
    let dir = TestMarketsDir::new();
    let store = DirectoryStore::new(dir.path());
    let malaysia = MarketBuilder::new("market-my", "MY").name("Malaysia").build();
    store.put(&malaysia).unwrap();

    let mut renamed = malaysia.clone();
    renamed.code = code("MYS");
    renamed.name = "Malaysia (MYS)".to_string();
    let path = store.put(&renamed).unwrap();

    let found = store
        .find_by_id(&MarketId::new("market-my"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.code, code("MYS"));
    assert_eq!(found.name, "Malaysia (MYS)");
    assert!(store.find_by_code(&code("MY")).await.unwrap().is_none());
    assert!(!dir.path().join("my.toml").exists());
    assert!(path.ends_with("mys.toml"));
}

#[tokio::test]
async fn test_put_in_new_format_replaces_old_file() {
    let dir = TestMarketsDir::new();
    let record = MarketBuilder::new("market-au", "AU").name("Australia").build();
    DirectoryStore::new(dir.path()).put(&record).unwrap();

    let store = DirectoryStore::new(dir.path()).with_format(RecordFormat::Json);
    let mut updated = record.clone();
    updated.name = "Australia (json)".to_string();
    store.put(&updated).unwrap();

    assert!(!dir.path().join("au.toml").exists());
    let all = store.all().await.unwrap();
    assert_eq!(all, vec![updated]);
}

#[test]
fn test_put_keeps_records_with_other_ids() {
    let dir = TestMarketsDir::with_records(&seed_markets());
    dir.write_raw("broken.json", "{ not json");
    let store = DirectoryStore::new(dir.path());

    let mut malaysia = seed_markets().remove(0);
    malaysia.name = "Malaysia (updated)".to_string();
    store.put(&malaysia).unwrap();

    assert!(dir.path().join("broken.json").exists());
    for file in ["au.json", "sg.json", "my.toml"] {
        assert!(dir.path().join(file).exists(), "{file} removed");
    }
    assert!(!dir.path().join("my.json").exists());
}
