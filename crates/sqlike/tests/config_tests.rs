//! Integration tests for configuration and pattern files.

use std::io::Write;

use sqlike::{LikeError, LikeTrie, LogFormat, LoggingConfig, PatternFile, TrieConfig};

fn write_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn trie_from_config_uses_capacity_hint() {
    let config = TrieConfig::new()
        .capacity(12)
        .logging(LoggingConfig::new().format(LogFormat::Pretty));
    let trie: LikeTrie<u8> = LikeTrie::with_config(&config);
    assert_eq!(trie.capacity(), 12);
    assert!(trie.is_empty());
}

#[test]
fn load_pattern_file() {
    let file = write_file(
        r#"
        capacity = 4

        [[patterns]]
        pattern = "test-%"
        payload = "generic"

        [[patterns]]
        pattern = "test-%-post"
        payload = "post"

        [[patterns]]
        pattern = "test-a-%"
        payload = "a"
        "#,
    );

    let trie: LikeTrie<String> = LikeTrie::load(file.path()).unwrap();
    assert_eq!(trie.capacity(), 4);
    assert_eq!(trie.len(), 3);
    assert_eq!(trie.find("test-b-post").unwrap().payload, "post");
    assert_eq!(trie.find("test-a-test").unwrap().payload, "a");
    assert_eq!(trie.find("test-b-test").unwrap().payload, "generic");
    assert!(trie.find("testpost").unwrap_err().is_not_found());
}

#[test]
fn pattern_file_with_structured_payloads() {
    let file = write_file(
        r#"
        [[patterns]]
        pattern = "orders_%"
        payload = { table = "orders", shard = 3 }
        "#,
    );

    let patterns: PatternFile<serde_json::Value> = PatternFile::load(file.path()).unwrap();
    assert_eq!(patterns.capacity, None);

    let trie = LikeTrie::from_pattern_file(patterns);
    let payload = trie.lookup("orders_2024").unwrap().payload;
    assert_eq!(payload, serde_json::json!({ "table": "orders", "shard": 3 }));
}

#[test]
fn pattern_file_without_capacity_uses_default() {
    let file = write_file("[[patterns]]\npattern = \"x\"\npayload = 1\n");
    let trie: LikeTrie<i64> = LikeTrie::load(file.path()).unwrap();
    assert_eq!(trie.capacity(), sqlike::DEFAULT_CAPACITY);
}

#[test]
fn malformed_pattern_file() {
    let file = write_file("[[patterns]\npattern = ");
    let err = LikeTrie::<i64>::load(file.path()).unwrap_err();
    assert!(matches!(err, LikeError::Parse(_)));
    assert!(err.to_string().starts_with("invalid pattern file"));
}

#[test]
fn missing_pattern_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = LikeTrie::<i64>::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, LikeError::IoWithContext { .. }));
}
