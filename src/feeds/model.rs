/// Member of the team roster (`team.json`).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    /// Full name; the last word sorts the roster.
    pub name: String,
    /// Role shown under the name.
    pub position: String,
    /// Portrait path.
    pub image: String,
    /// Shown in the expanded modal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// GitHub profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    /// LinkedIn profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
}

/// Lifecycle tag shown on a project card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ProjectStatus {
    /// Ongoing.
    Active,
    /// Wound down.
    Closed,
    /// Spun out of the center.
    Graduated,
    /// Any other value in the feed.
    #[serde(other)]
    Unknown,
}

/// Carousel card (`projects.json`).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Project {
    /// Stable identifier.
    pub id: u32,
    /// Card title.
    pub title: String,
    /// Card blurb.
    pub description: String,
    /// CSS background color.
    pub color: String,
    /// Lifecycle tag.
    pub status: ProjectStatus,
    /// Card image; `carousel` is accepted as an alias.
    #[serde(default, alias = "carousel", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// External project page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Release list entry (`publications.json`).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Publication {
    /// Stable identifier.
    pub id: u32,
    /// Paper title.
    pub title: String,
    /// Author list as printed.
    pub authors: String,
    /// Venue.
    pub journal: String,
    /// Publication year as printed.
    pub year: String,
    /// Link to the paper.
    pub url: String,
    /// CSS background color.
    pub color: String,
    /// Thumbnail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
