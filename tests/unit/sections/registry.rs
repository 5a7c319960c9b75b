use super::*;

#[test]
fn rejects_empty_and_duplicate_registries() {
    assert!(SectionRegistry::new(vec![]).is_err());
    let err = SectionRegistry::new(vec![
        SectionDef::new("intro", "Intro"),
        SectionDef::new("intro", "Again"),
    ])
    .unwrap_err();
    assert!(err.to_string().contains("duplicate section id 'intro'"));
    assert!(SectionRegistry::new(vec![SectionDef::new(" ", "Blank")]).is_err());
}

#[test]
fn default_registry_keeps_display_order() {
    let reg = SectionRegistry::new(default_sections()).unwrap();
    let ids: Vec<&str> = reg.iter().map(|s| s.id().as_str()).collect();
    assert_eq!(ids, vec!["intro", "work", "team", "contact"]);
    assert_eq!(reg.first().id(), &"intro");
    assert_eq!(reg.position(&SectionId::new("team")), Some(2));
}

#[test]
fn missing_anchor_yields_no_geometry() {
    let mut reg = SectionRegistry::new(default_sections()).unwrap();
    let layout = StaticLayout::default()
        .with("intro", 0.0, 300.0)
        .with("work", 300.0, 500.0);
    assert_eq!(reg.refresh_geometry(&layout), 2);
    assert_eq!(
        reg.geometry(&SectionId::new("work")),
        Some(AnchorGeometry::new(300.0, 500.0))
    );
    assert_eq!(reg.geometry(&SectionId::new("team")), None);
    assert_eq!(reg.geometry(&SectionId::new("nope")), None);
}

#[test]
fn anchor_contains_is_half_open() {
    let g = AnchorGeometry::new(300.0, 500.0);
    assert!(!g.contains(299.9));
    assert!(g.contains(300.0));
    assert!(g.contains(799.9));
    assert!(!g.contains(800.0));
}

#[test]
fn negative_geometry_is_sanitized() {
    let g = AnchorGeometry::new(-20.0, f64::NAN);
    assert_eq!(g.offset_top, 0.0);
    assert_eq!(g.height, 0.0);
}
