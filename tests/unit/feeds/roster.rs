use super::*;

fn member(name: &str, position: &str) -> TeamMember {
    TeamMember {
        name: name.to_string(),
        position: position.to_string(),
        image: String::new(),
        bio: None,
        github_url: None,
        linkedin_url: None,
    }
}

fn names(members: &[TeamMember]) -> Vec<&str> {
    members.iter().map(|m| m.name.as_str()).collect()
}

#[test]
fn sorts_by_last_name_with_entrepreneurs_last() {
    let sorted = sort_roster(vec![
        member("Sam Rivera", "Data Scientist"),
        member("Kim Adams", "Entrepreneur in Residence"),
        member("Jordan Patel", "Research Engineer"),
        member("Lee Baker", "Senior Entrepreneur In Residence"),
        member("Avery Chen", "Analyst"),
    ]);
    assert_eq!(
        names(&sorted),
        vec![
            "Avery Chen",
            "Jordan Patel",
            "Sam Rivera",
            "Kim Adams",
            "Lee Baker"
        ]
    );
}

#[test]
fn last_name_comparison_ignores_case_and_keeps_ties_stable() {
    let sorted = sort_roster(vec![
        member("Ana Zhu", "Analyst"),
        member("Avery Chen", "Analyst"),
        member("Noor van den berg", "Analyst"),
        member("Al Zhu", "Analyst"),
    ]);
    assert_eq!(
        names(&sorted),
        vec!["Noor van den berg", "Avery Chen", "Ana Zhu", "Al Zhu"]
    );
}

#[test]
fn last_name_is_the_final_word() {
    assert_eq!(last_name("Mary Ann Smith"), "Smith");
    assert_eq!(last_name("Cher"), "Cher");
    assert_eq!(last_name(""), "");
}

#[test]
fn roster_carries_founders_separately() {
    let roster = Roster::new(vec![member("Sam Rivera", "Data Scientist")]);
    assert_eq!(
        names(&roster.founders),
        vec!["Steve Levitt", "Jeffrey Severts"]
    );
    assert_eq!(names(&roster.members), vec!["Sam Rivera"]);
    assert!(
        roster
            .founders
            .iter()
            .all(|f| !is_entrepreneur_in_residence(f))
    );
}
