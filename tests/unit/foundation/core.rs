use super::*;

#[test]
fn non_negative_px_clamps_and_rejects_non_finite() {
    assert_eq!(non_negative_px(12.5), 12.5);
    assert_eq!(non_negative_px(-3.0), 0.0);
    assert_eq!(non_negative_px(f64::NAN), 0.0);
    assert_eq!(non_negative_px(f64::INFINITY), 0.0);
}

#[test]
fn visible_fraction_partial_overlap() {
    let viewport = Rect::new(0.0, 0.0, 100.0, 100.0);
    let element = Rect::new(0.0, 50.0, 100.0, 150.0);
    assert!((visible_fraction(element, viewport) - 0.5).abs() < 1e-9);
}

#[test]
fn visible_fraction_disjoint_and_contained() {
    let viewport = Rect::new(0.0, 0.0, 100.0, 100.0);
    assert_eq!(
        visible_fraction(Rect::new(0.0, 200.0, 50.0, 250.0), viewport),
        0.0
    );
    assert_eq!(
        visible_fraction(Rect::new(10.0, 10.0, 20.0, 20.0), viewport),
        1.0
    );
}

#[test]
fn section_id_compares_with_str() {
    let id = SectionId::new("work");
    assert_eq!(id, "work");
    assert_eq!(id.to_string(), "work");
    assert_eq!(SectionId::from("team").as_str(), "team");
}
