use super::*;

const CARD: Size = Size::new(150.0, 150.0);

#[test]
fn tilt_leans_away_from_pointer() {
    let centre = Tilt::from_pointer(Point::new(75.0, 75.0), CARD, 10.0);
    assert_eq!(centre, Tilt::FLAT);

    let top_left = Tilt::from_pointer(Point::new(0.0, 0.0), CARD, 10.0);
    assert_eq!(top_left.rotate_x_deg, 10.0);
    assert_eq!(top_left.rotate_y_deg, -10.0);

    let bottom_right = Tilt::from_pointer(Point::new(150.0, 150.0), CARD, 10.0);
    assert_eq!(bottom_right.rotate_x_deg, -10.0);
    assert_eq!(bottom_right.rotate_y_deg, 10.0);
}

#[test]
fn tilt_is_bounded_outside_the_card() {
    let t = Tilt::from_pointer(Point::new(-500.0, 900.0), CARD, 10.0);
    assert_eq!(t.rotate_x_deg, -10.0);
    assert_eq!(t.rotate_y_deg, -10.0);
}

#[test]
fn degenerate_card_is_flat() {
    let t = Tilt::from_pointer(Point::new(3.0, 3.0), Size::ZERO, 10.0);
    assert_eq!(t, Tilt::FLAT);
}

#[test]
fn leave_resets_tilt() {
    let mut tracker = TiltTracker::default();
    tracker.pointer_move(Point::new(10.0, 20.0), CARD);
    assert_ne!(tracker.tilt(), Tilt::FLAT);
    assert_eq!(tracker.pointer_leave(), Tilt::FLAT);
    assert_eq!(
        tracker.tilt().css_transform(),
        "perspective(500px) rotateX(0deg) rotateY(0deg)"
    );
}

#[test]
fn tracker_uses_its_own_limit() {
    let mut tracker = TiltTracker::new(4.0);
    let t = tracker.pointer_move(Point::new(0.0, 0.0), CARD);
    assert_eq!(t.rotate_x_deg, 4.0);
    assert_eq!(t.rotate_y_deg, -4.0);
}

#[test]
fn section_reveal_defaults_to_inset_viewport() {
    let cfg = TeamConfig::default();
    assert_eq!(cfg.section_reveal.margin_px, -100.0);
    assert_eq!(cfg.section_reveal.amount, 0.0);
    assert!(cfg.validate().is_ok());
}

#[test]
fn stagger_grows_with_index() {
    let cfg = TeamConfig::default();
    assert_eq!(cfg.stagger_delay_secs(0), 0.0);
    assert!((cfg.stagger_delay_secs(3) - 0.6).abs() < 1e-12);
}

#[test]
fn modal_toggles_and_swallows_panel_clicks() {
    let mut modal = MemberModal::default();
    assert!(modal.card_is_interactive());
    assert!(!modal.handle(ModalInput::BackdropClick));

    assert!(modal.handle(ModalInput::CardClick));
    assert!(modal.is_expanded());
    assert!(!modal.card_is_interactive());
    assert!(!modal.handle(ModalInput::PanelClick));
    assert!(!modal.handle(ModalInput::CardClick));

    assert!(modal.handle(ModalInput::CloseButton));
    assert_eq!(modal.state(), ModalState::Collapsed);

    modal.handle(ModalInput::CardClick);
    assert!(modal.handle(ModalInput::BackdropClick));
    assert!(!modal.is_expanded());
}
