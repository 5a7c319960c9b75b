use std::cmp::Ordering;

use crate::feeds::model::TeamMember;

const ENTREPRENEUR_IN_RESIDENCE: &str = "entrepreneur in residence";

/// The team page: the fixed founders block plus the sorted roster from `team.json`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Roster {
    /// Fixed co-founders block.
    pub founders: Vec<TeamMember>,
    /// Feed members in roster order.
    pub members: Vec<TeamMember>,
}

impl Roster {
    /// Build the page roster from the loaded feed.
    pub fn new(members: Vec<TeamMember>) -> Self {
        Self {
            founders: founders(),
            members: sort_roster(members),
        }
    }
}

/// Regular members by last name, then entrepreneurs in residence by last name.
///
/// The sort is stable, so members sharing a last name keep their feed order.
pub fn sort_roster(mut members: Vec<TeamMember>) -> Vec<TeamMember> {
    members.sort_by(|a, b| {
        is_entrepreneur_in_residence(a)
            .cmp(&is_entrepreneur_in_residence(b))
            .then_with(|| compare_names(last_name(&a.name), last_name(&b.name)))
    });
    members
}

/// Whether the position mentions "entrepreneur in residence", in any case.
pub fn is_entrepreneur_in_residence(member: &TeamMember) -> bool {
    member
        .position
        .to_lowercase()
        .contains(ENTREPRENEUR_IN_RESIDENCE)
}

/// Last space-separated word of `name`; empty for an empty name.
pub fn last_name(name: &str) -> &str {
    name.rsplit(' ').next().unwrap_or_default()
}

// Case-insensitive first, so "van den berg" sorts before "Chen", then by raw text.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Co-founders shown above the roster; not part of `team.json`.
pub fn founders() -> Vec<TeamMember> {
    vec![
        TeamMember {
            name: "Steve Levitt".to_string(),
            position: "Co-Founder, Faculty Director".to_string(),
            image: "/images/team/Steve.jpeg".to_string(),
            bio: Some(
                "Scrolls on Instagram just for the ads. He really loves them for some reason."
                    .to_string(),
            ),
            github_url: None,
            linkedin_url: None,
        },
        TeamMember {
            name: "Jeffrey Severts".to_string(),
            position: "Co-Founder, Executive Director".to_string(),
            image: "/images/team/Jeff.png".to_string(),
            bio: Some(
                "Probably a super-taster. Can somehow tell the difference between diet coke, \
                 coke zero, and diet pepsi."
                    .to_string(),
            ),
            github_url: None,
            linkedin_url: Some("https://www.linkedin.com/in/jeffrey-severts-27b433".to_string()),
        },
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/feeds/roster.rs"]
mod tests;
