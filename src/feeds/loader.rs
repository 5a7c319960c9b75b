use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::feeds::model::{Project, ProjectStatus, Publication, TeamMember};
use crate::foundation::error::{SiteError, SiteResult};

/// A static JSON document holding an array of `Self`.
pub trait FeedItem: DeserializeOwned + Sized {
    /// Feed name used in logs and errors.
    const FEED: &'static str;

    /// Minimal list rendered when the feed cannot be loaded.
    fn placeholder() -> Vec<Self>;
}

impl FeedItem for TeamMember {
    const FEED: &'static str = "team";

    fn placeholder() -> Vec<Self> {
        vec![TeamMember {
            name: "Team Member".to_string(),
            position: "Researcher".to_string(),
            image: "/images/team-placeholder.jpg".to_string(),
            bio: None,
            github_url: None,
            linkedin_url: None,
        }]
    }
}

impl FeedItem for Project {
    const FEED: &'static str = "projects";

    fn placeholder() -> Vec<Self> {
        vec![Project {
            id: 1,
            title: "Example Project".to_string(),
            description: "Project details are on their way.".to_string(),
            color: "#1E293B".to_string(),
            status: ProjectStatus::Active,
            image: None,
            link: None,
        }]
    }
}

impl FeedItem for Publication {
    const FEED: &'static str = "publications";

    fn placeholder() -> Vec<Self> {
        vec![Publication {
            id: 1,
            title: "Example Publication Title".to_string(),
            authors: "Author 1, Author 2, Author 3".to_string(),
            journal: "Journal of Research".to_string(),
            year: "2023".to_string(),
            url: "https://example.com/publication1".to_string(),
            color: "#1E293B".to_string(),
            image: Some("/images/publication-placeholder.jpg".to_string()),
        }]
    }
}

/// Where a feed's items came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FeedSource {
    /// Parsed from the JSON document.
    Document,
    /// Built-in fallback after a fetch or parse failure.
    Placeholder,
}

/// Items ready to render, plus where they came from.
#[derive(Clone, Debug, PartialEq)]
pub struct Feed<T> {
    /// Items in document order.
    pub items: Vec<T>,
    /// Origin of `items`.
    pub source: FeedSource,
}

/// Strict parse of a feed document.
pub fn parse_feed<T: FeedItem, R: std::io::Read>(r: R) -> SiteResult<Vec<T>> {
    serde_json::from_reader(r)
        .map_err(|e| SiteError::feed(format!("parse {} feed JSON: {e}", T::FEED)))
}

/// Strict load of a feed document from disk.
pub fn read_feed<T: FeedItem>(path: impl AsRef<Path>) -> SiteResult<Vec<T>> {
    let path = path.as_ref();
    let f = File::open(path).map_err(|e| {
        SiteError::feed(format!("open {} feed '{}': {e}", T::FEED, path.display()))
    })?;
    parse_feed(BufReader::new(f))
}

/// Load a feed, falling back to the placeholder list on any failure so the page stays
/// renderable.
#[tracing::instrument(skip(path), fields(feed = T::FEED, path = %path.display()))]
pub fn load_feed<T: FeedItem>(path: &Path) -> Feed<T> {
    match read_feed(path) {
        Ok(items) => Feed {
            items,
            source: FeedSource::Document,
        },
        Err(err) => {
            tracing::warn!(error = %err, "feed unavailable, using placeholder");
            Feed {
                items: T::placeholder(),
                source: FeedSource::Placeholder,
            }
        }
    }
}

/// As [`load_feed`], for a document already in memory.
pub fn load_feed_str<T: FeedItem>(json: &str) -> Feed<T> {
    match parse_feed(json.as_bytes()) {
        Ok(items) => Feed {
            items,
            source: FeedSource::Document,
        },
        Err(err) => {
            tracing::warn!(feed = T::FEED, error = %err, "feed unavailable, using placeholder");
            Feed {
                items: T::placeholder(),
                source: FeedSource::Placeholder,
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/feeds/loader.rs"]
mod tests;
