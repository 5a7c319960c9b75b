use super::*;
use crate::sections::registry::{StaticLayout, default_sections};

fn registry() -> SectionRegistry {
    let mut reg = SectionRegistry::new(default_sections()).unwrap();
    reg.refresh_geometry(
        &StaticLayout::default()
            .with("intro", 0.0, 700.0)
            .with("work", 700.0, 900.0)
            .with("team", 1600.0, 1200.0),
    );
    reg
}

#[test]
fn one_indicator_per_section_with_single_active() {
    let reg = registry();
    let active = SectionId::new("work");
    let tracker = NavigationTracker::new(RailTiming::default(), &reg, &active, 0.0);
    let ind = tracker.indicators(&reg, &active, 10.0);
    assert_eq!(ind.len(), 4);
    assert_eq!(ind.iter().filter(|i| i.is_active).count(), 1);
    assert!(ind[1].is_active);
    assert_eq!(ind[1].label, "Work");
    assert!((ind[1].scale - 1.3).abs() < 1e-9);
    assert_eq!(ind[0].scale, 1.0);
}

#[test]
fn bullets_stagger_their_entrance() {
    let reg = registry();
    let active = SectionId::new("intro");
    let tracker = NavigationTracker::new(RailTiming::default(), &reg, &active, 0.0);
    let ind = tracker.indicators(&reg, &active, 0.55);
    assert!((ind[0].entrance_delay_secs - 0.5).abs() < 1e-9);
    assert!((ind[3].entrance_delay_secs - 0.8).abs() < 1e-9);
    assert!(ind[0].entrance > 0.0);
    assert_eq!(ind[3].entrance, 0.0);
    assert_eq!(tracker.rail_progress(0.2), 0.0);
    assert_eq!(tracker.line_progress(2.0), 1.0);
}

#[test]
fn emphasis_transitions_between_indicators() {
    let reg = registry();
    let intro = SectionId::new("intro");
    let work = SectionId::new("work");
    let mut tracker = NavigationTracker::new(RailTiming::default(), &reg, &intro, 0.0);

    tracker.on_active_changed(&reg, &work, 1.0);
    let mid = tracker.indicators(&reg, &work, 1.15);
    assert!(mid[0].scale < 1.3 && mid[0].scale > 1.0);
    assert!(mid[1].scale > 1.0 && mid[1].scale < 1.3);

    let done = tracker.indicators(&reg, &work, 2.0);
    assert_eq!(done[0].scale, 1.0);
    assert!((done[1].scale - 1.3).abs() < 1e-9);
}

#[test]
fn click_targets_anchor_top() {
    let reg = registry();
    let intro = SectionId::new("intro");
    let tracker = NavigationTracker::new(RailTiming::default(), &reg, &intro, 0.0);
    let req = tracker.click(&SectionId::new("team"), &reg).unwrap().unwrap();
    assert_eq!(req.target_y, 1600.0);
    assert_eq!(req.behavior, ScrollBehavior::Smooth);
}

#[test]
fn click_on_unmounted_or_unknown_section() {
    let reg = registry();
    let intro = SectionId::new("intro");
    let tracker = NavigationTracker::new(RailTiming::default(), &reg, &intro, 0.0);
    assert_eq!(tracker.click(&SectionId::new("contact"), &reg).unwrap(), None);
    assert!(tracker.click(&SectionId::new("blog"), &reg).is_err());
}
