// Tests for internet loading

use gossamer_core::loader::{LoadError, load_internet, parse_internet};
use std::io::Write;
use tempfile::NamedTempFile;

// ============================================================================
// Parsing Tests
// ============================================================================

#[test]
fn test_parse_minimal_document() {
    let json = r#"{
        "pages": [
            { "address": "http://a.com", "links": ["http://b.com"] },
            { "address": "http://b.com", "links": [] }
        ]
    }"#;

    let internet = parse_internet(json).unwrap();

    assert_eq!(internet.len(), 2);
    assert!(internet.contains("http://a.com"));
    assert!(internet.contains("http://b.com"));
    assert_eq!(
        internet.page("http://a.com").unwrap().links,
        vec!["http://b.com".to_string()]
    );
}

#[test]
fn test_parse_page_without_links_field() {
    let json = r#"{ "pages": [ { "address": "http://a.com" } ] }"#;

    let internet = parse_internet(json).unwrap();

    assert_eq!(internet.len(), 1);
    assert!(internet.page("http://a.com").unwrap().links.is_empty());
}

#[test]
fn test_parse_document_without_pages_field() {
    let internet = parse_internet("{}").unwrap();

    assert!(internet.is_empty());
    assert_eq!(internet.first_address(), None);
}

#[test]
fn test_parse_empty_pages_list() {
    let internet = parse_internet(r#"{ "pages": [] }"#).unwrap();

    assert!(internet.is_empty());
    assert_eq!(internet.first_address(), None);
}

#[test]
fn test_parse_preserves_link_order_and_duplicates() {
    let json = r#"{
        "pages": [
            { "address": "http://a.com", "links": ["http://b.com", "http://b.com", "http://c.com"] }
        ]
    }"#;

    let internet = parse_internet(json).unwrap();

    assert_eq!(
        internet.page("http://a.com").unwrap().links,
        vec![
            "http://b.com".to_string(),
            "http://b.com".to_string(),
            "http://c.com".to_string(),
        ]
    );
}

#[test]
fn test_parse_first_address_follows_document_order() {
    let json = r#"{
        "pages": [
            { "address": "http://z.com", "links": [] },
            { "address": "http://a.com", "links": [] },
            { "address": "http://m.com", "links": [] }
        ]
    }"#;

    let internet = parse_internet(json).unwrap();

    assert_eq!(internet.first_address(), Some("http://z.com"));
}

#[test]
fn test_parse_malformed_json_is_rejected() {
    let result = parse_internet("{ not json");

    assert!(matches!(result, Err(LoadError::Parse(_))));
}

#[test]
fn test_parse_wrong_shape_is_rejected() {
    let result = parse_internet(r#"{ "pages": "everything" }"#);

    assert!(matches!(result, Err(LoadError::Parse(_))));
}

#[test]
fn test_parse_duplicate_address_is_rejected() {
    let json = r#"{
        "pages": [
            { "address": "http://a.com", "links": [] },
            { "address": "http://a.com", "links": ["http://b.com"] }
        ]
    }"#;

    let result = parse_internet(json);

    match result {
        Err(LoadError::DuplicateAddress(address)) => assert_eq!(address, "http://a.com"),
        other => panic!("expected DuplicateAddress error, got {:?}", other),
    }
}

#[test]
fn test_load_error_display_names_the_duplicate() {
    let err = LoadError::DuplicateAddress("http://a.com".to_string());

    assert!(format!("{}", err).contains("http://a.com"));
}

// ============================================================================
// File Tests
// ============================================================================

#[test]
fn test_load_internet_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"{{ "pages": [ {{ "address": "http://a.com", "links": ["http://b.com"] }} ] }}"#
    )
    .unwrap();

    let internet = load_internet(file.path()).unwrap();

    assert_eq!(internet.len(), 1);
    assert_eq!(internet.first_address(), Some("http://a.com"));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let result = load_internet(std::path::Path::new("/nonexistent/internet.json"));

    assert!(matches!(result, Err(LoadError::Io { .. })));
}
