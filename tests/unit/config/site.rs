use super::*;

#[test]
fn empty_object_is_all_defaults() {
    let cfg = SiteConfig::from_reader("{}".as_bytes()).unwrap();
    assert_eq!(cfg, SiteConfig::default());
    cfg.validate().unwrap();
    assert_eq!(cfg.registry().unwrap().len(), 4);
    assert_eq!(cfg.tracker.lookahead_px, 100.0);
    assert_eq!(cfg.team.reveal_scroll_y, 1000.0);
    assert_eq!(cfg.publications.reveal_scroll_y, 50.0);
}

#[test]
fn partial_sections_merge_with_defaults() {
    let json = r#"{
        "tracker": { "lookahead_px": 80 },
        "carousel": { "elastic": 0.2 },
        "contact": { "recipient": "hello@example.org" }
    }"#;
    let cfg = SiteConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!(cfg.tracker.lookahead_px, 80.0);
    assert_eq!(cfg.tracker.top_threshold_px, 200.0);
    assert_eq!(cfg.carousel.elastic, 0.2);
    assert_eq!(cfg.carousel.drag_threshold_px, 3.0);
    assert_eq!(cfg.contact.subject, "RISC website contact");
    cfg.validate().unwrap();
}

#[test]
fn duplicate_sections_fail_validation() {
    let json = r#"{ "sections": [
        { "id": "intro", "label": "Intro" },
        { "id": "intro", "label": "Again" }
    ] }"#;
    let cfg = SiteConfig::from_reader(json.as_bytes()).unwrap();
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("duplicate section id"));
}

#[test]
fn bad_values_fail_validation() {
    let mut cfg = SiteConfig::default();
    cfg.reveal.amount = -0.1;
    assert!(cfg.validate().is_err());

    let mut cfg = SiteConfig::default();
    cfg.contact.recipient = "nobody".into();
    assert!(cfg.validate().is_err());
}

#[test]
fn malformed_json_is_a_validation_error() {
    let err = SiteConfig::from_reader("{ \"tracker\": ".as_bytes()).unwrap_err();
    assert!(matches!(err, SiteError::Validation(_)));
    assert!(SiteConfig::from_path("/no/such/site.json").is_err());
}
