// Tests for crawl orchestration

use gossamer_core::crawl::{CrawlOptions, execute_crawl};
use gossamer_core::loader::parse_internet;
use gossamer_crawler::{Internet, PageState};

const SMALL_INTERNET: &str = r#"{
    "pages": [
        { "address": "http://a.com", "links": ["http://b.com", "http://missing.com"] },
        { "address": "http://b.com", "links": ["http://a.com"] }
    ]
}"#;

fn small_internet() -> Internet {
    parse_internet(SMALL_INTERNET).unwrap()
}

// ============================================================================
// Options Tests
// ============================================================================

#[test]
fn test_crawl_options_default() {
    let options = CrawlOptions::default();

    assert_eq!(options.entry, None);
    assert!(!options.show_progress_bar);
}

// ============================================================================
// Entry Resolution Tests
// ============================================================================

#[tokio::test]
async fn test_crawl_starts_from_first_page() {
    let run = execute_crawl(small_internet(), CrawlOptions::default())
        .await
        .unwrap();

    assert_eq!(run.entry.as_deref(), Some("http://a.com"));
    assert!(!run.aborted());
}

#[tokio::test]
async fn test_entry_override_is_respected() {
    let options = CrawlOptions {
        entry: Some("http://b.com".to_string()),
        ..Default::default()
    };

    let run = execute_crawl(small_internet(), options).await.unwrap();

    assert_eq!(run.entry.as_deref(), Some("http://b.com"));
    assert_eq!(
        run.registry.state_of("http://b.com"),
        Some(PageState::Skipped)
    );
    assert_eq!(
        run.registry.state_of("http://a.com"),
        Some(PageState::Success)
    );
}

#[tokio::test]
async fn test_unknown_entry_aborts_the_run() {
    let options = CrawlOptions {
        entry: Some("http://nope.com".to_string()),
        ..Default::default()
    };

    let run = execute_crawl(small_internet(), options).await.unwrap();

    assert!(run.aborted());
    assert!(run.registry.is_empty());
    assert_eq!(run.entry.as_deref(), Some("http://nope.com"));
}

#[tokio::test]
async fn test_empty_internet_aborts_the_run() {
    let run = execute_crawl(parse_internet("{}").unwrap(), CrawlOptions::default())
        .await
        .unwrap();

    assert!(run.aborted());
    assert_eq!(run.entry, None);
}

// ============================================================================
// Classification Tests
// ============================================================================

#[tokio::test]
async fn test_run_classifies_every_reachable_address() {
    let run = execute_crawl(small_internet(), CrawlOptions::default())
        .await
        .unwrap();

    assert_eq!(run.registry.len(), 3);
    assert_eq!(
        run.registry.state_of("http://a.com"),
        Some(PageState::Skipped)
    );
    assert_eq!(
        run.registry.state_of("http://b.com"),
        Some(PageState::Success)
    );
    assert_eq!(
        run.registry.state_of("http://missing.com"),
        Some(PageState::Error)
    );
}

#[tokio::test]
async fn test_progress_bar_option_does_not_change_classification() {
    let options = CrawlOptions {
        show_progress_bar: true,
        ..Default::default()
    };

    let run = execute_crawl(small_internet(), options).await.unwrap();

    assert_eq!(run.registry.len(), 3);
    assert!(!run.aborted());
}
