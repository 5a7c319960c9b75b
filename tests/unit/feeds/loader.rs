use std::path::PathBuf;

use super::*;

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

#[test]
fn projects_document_loads() {
    let feed: Feed<Project> = load_feed(&data("projects.json"));
    assert_eq!(feed.source, FeedSource::Document);
    assert_eq!(feed.items.len(), 9);
    assert_eq!(feed.items[0].title, "Foster Insights");
    // `carousel` is accepted as the image field.
    assert_eq!(
        feed.items[0].image.as_deref(),
        Some("/images/carousel/fi.webp")
    );
    assert!(feed.items.iter().any(|p| p.image.is_none()));
}

#[test]
fn team_document_loads() {
    let feed: Feed<TeamMember> = load_feed(&data("team.json"));
    assert_eq!(feed.source, FeedSource::Document);
    assert!(!feed.items.is_empty());
    assert!(feed.items.iter().all(|m| !m.name.is_empty()));
}

#[test]
fn missing_file_falls_back_to_placeholder() {
    let feed: Feed<Publication> = load_feed(&data("does-not-exist.json"));
    assert_eq!(feed.source, FeedSource::Placeholder);
    assert_eq!(feed.items, Publication::placeholder());
    assert_eq!(feed.items[0].title, "Example Publication Title");
}

#[test]
fn malformed_json_falls_back_to_placeholder() {
    let feed: Feed<Project> = load_feed_str("[{\"id\": 1,");
    assert_eq!(feed.source, FeedSource::Placeholder);
    assert_eq!(feed.items.len(), 1);

    let strict = parse_feed::<Project, _>("{\"id\": 1}".as_bytes());
    assert!(matches!(strict, Err(SiteError::Feed(_))));
}

#[test]
fn unknown_project_status_is_tolerated() {
    let json = r##"[{"id":3,"title":"T","description":"D","color":"#000","status":"Paused"}]"##;
    let feed: Feed<Project> = load_feed_str(json);
    assert_eq!(feed.source, FeedSource::Document);
    assert_eq!(feed.items[0].status, ProjectStatus::Unknown);
}
