use super::*;
use crate::contact::form::{ContactForm, FormStatus};

fn static_page() -> StaticPage {
    StaticPage {
        layout: StaticLayout::default()
            .with("intro", 0.0, 300.0)
            .with("work", 300.0, 500.0)
            .with("team", 800.0, 400.0)
            .with("contact", 1200.0, 600.0),
        carousel_content_width: 1696.0,
        carousel_viewport_width: 1200.0,
    }
}

fn mount() -> (Page, Vec<PageEffect>) {
    Page::mount(SiteConfig::default(), &static_page(), 0.0, 0.0).unwrap()
}

#[derive(Default)]
struct RecordingHost {
    listening: bool,
    scrolled_to: Vec<f64>,
}

impl ScrollHost for RecordingHost {
    fn attach_scroll_listener(&mut self) {
        self.listening = true;
    }

    fn detach_scroll_listener(&mut self) {
        self.listening = false;
    }

    fn scroll_to(&mut self, request: ScrollRequest) {
        self.scrolled_to.push(request.target_y);
    }
}

#[test]
fn mount_attaches_one_listener_and_measures_carousel() {
    let (page, effects) = mount();
    let attaches = effects
        .iter()
        .filter(|e| **e == PageEffect::AttachListener)
        .count();
    assert_eq!(attaches, 1);
    assert!(effects.contains(&PageEffect::ExtentChanged {
        range_px: 496.0,
        offset_px: 0.0
    }));
    assert_eq!(page.active_section(), &"intro");
    assert!(page.is_listening());
}

#[test]
fn scroll_moves_active_section() {
    let (mut page, _) = mount();
    let p = static_page();
    let effects = page
        .handle(PageEvent::Scroll { scroll_y: 250.0 }, &p, 1.0)
        .unwrap();
    assert!(effects.contains(&PageEffect::ActiveSectionChanged {
        from: SectionId::new("intro"),
        to: SectionId::new("work"),
    }));
    // Same section again: no notification.
    let effects = page
        .handle(PageEvent::Scroll { scroll_y: 260.0 }, &p, 1.1)
        .unwrap();
    assert!(
        !effects
            .iter()
            .any(|e| matches!(e, PageEffect::ActiveSectionChanged { .. }))
    );
}

#[test]
fn nav_click_converges_on_target() {
    let (mut page, _) = mount();
    let p = static_page();
    let mut host = RecordingHost::default();
    let effects = page
        .handle(
            PageEvent::NavClick {
                section: SectionId::new("team"),
            },
            &p,
            0.0,
        )
        .unwrap();
    assert!(effects.contains(&PageEffect::NavigationStarted {
        section: SectionId::new("team"),
        target_y: 800.0,
    }));
    assert!(page.is_scrolling());

    let mut t = 0.0;
    let mut frames = 0;
    while page.is_scrolling() {
        t += 1.0 / 60.0;
        frames += 1;
        assert!(frames < 600);
        for effect in page.handle(PageEvent::Tick, &p, t).unwrap() {
            effect.apply(&mut host);
        }
    }
    assert_eq!(host.scrolled_to.last().copied(), Some(800.0));
    assert_eq!(page.scroll_state().scroll_y, 800.0);
    assert_eq!(page.active_section(), &"team");
}

#[test]
fn nav_click_on_unknown_section_is_an_error() {
    let (mut page, _) = mount();
    let res = page.handle(
        PageEvent::NavClick {
            section: SectionId::new("pricing"),
        },
        &static_page(),
        0.0,
    );
    assert!(res.is_err());
    assert!(!page.is_scrolling());
}

#[test]
fn team_roster_latches_and_publications_track_level() {
    let (mut page, _) = mount();
    let p = static_page();
    let effects = page
        .handle(PageEvent::Scroll { scroll_y: 60.0 }, &p, 0.1)
        .unwrap();
    assert!(effects.contains(&PageEffect::ThresholdChanged {
        trigger: "publications".into(),
        active: true,
    }));

    page.handle(PageEvent::Scroll { scroll_y: 1001.0 }, &p, 0.2).unwrap();
    assert!(page.snapshot(0.2).team_visible);

    let effects = page
        .handle(PageEvent::Scroll { scroll_y: 10.0 }, &p, 0.3)
        .unwrap();
    assert!(effects.contains(&PageEffect::ThresholdChanged {
        trigger: "publications".into(),
        active: false,
    }));
    let snap = page.snapshot(0.3);
    assert!(snap.team_visible);
    assert!(!snap.publications_visible);
    assert!((page.team_member_delay_secs(2) - 0.4).abs() < 1e-12);
}

#[test]
fn contact_gate_fires_once() {
    let (mut page, _) = mount();
    let p = static_page();
    let contact = ElementId::new(CONTACT_ELEMENT);
    let below = page
        .handle(
            PageEvent::Intersection {
                element: contact.clone(),
                ratio: 0.2,
            },
            &p,
            1.0,
        )
        .unwrap();
    assert!(below.is_empty());

    let fired = page
        .handle(
            PageEvent::Intersection {
                element: contact.clone(),
                ratio: 0.5,
            },
            &p,
            2.0,
        )
        .unwrap();
    assert_eq!(fired.len(), 1);
    let again = page
        .handle(
            PageEvent::Intersection {
                element: contact.clone(),
                ratio: 1.0,
            },
            &p,
            3.0,
        )
        .unwrap();
    assert!(again.is_empty());
    assert_eq!(page.snapshot(3.0).fired_gates, vec![contact]);
}

#[test]
fn carousel_drag_and_shrink_to_zero_overflow() {
    let (mut page, _) = mount();
    let mut p = static_page();
    page.handle(PageEvent::PointerDown { x: 600.0 }, &p, 0.0).unwrap();
    page.handle(PageEvent::PointerMove { x: 400.0 }, &p, 1.0).unwrap();
    let effects = page.handle(PageEvent::PointerCancel, &p, 1.0).unwrap();
    assert_eq!(
        effects,
        vec![PageEffect::CarouselCommitted {
            offset_px: -200.0,
            velocity_px_per_sec: 0.0,
        }]
    );

    p.carousel_viewport_width = 1800.0;
    let effects = page.handle(PageEvent::Resize, &p, 2.0).unwrap();
    assert!(effects.contains(&PageEffect::ExtentChanged {
        range_px: 0.0,
        offset_px: 0.0,
    }));
    assert_eq!(page.snapshot(2.0).carousel.current_offset_px, 0.0);
}

#[test]
fn settle_timers_catch_late_images() {
    let (mut page, _) = mount();
    let mut p = static_page();
    assert_eq!(page.next_timer_ms(), Some(500.0));
    p.carousel_content_width = 2400.0;
    let early = page.handle(PageEvent::Timer, &p, 0.4).unwrap();
    assert!(early.is_empty());
    let settled = page.handle(PageEvent::Timer, &p, 0.5).unwrap();
    assert!(settled.contains(&PageEffect::ExtentChanged {
        range_px: 1200.0,
        offset_px: 0.0,
    }));
    assert_eq!(page.next_timer_ms(), Some(1500.0));
}

#[test]
fn hover_is_hidden_while_dragging() {
    let (mut page, _) = mount();
    let p = static_page();
    page.set_project_count(9);
    assert_eq!(page.hovered_card(Point::new(10.0, 10.0), 0.0), Some(0));
    page.handle(PageEvent::PointerDown { x: 10.0 }, &p, 0.0).unwrap();
    page.handle(PageEvent::PointerMove { x: 0.0 }, &p, 0.1).unwrap();
    assert_eq!(page.hovered_card(Point::new(10.0, 10.0), 0.1), None);
}

#[test]
fn hover_follows_the_gliding_row() {
    let (mut page, _) = mount();
    let p = static_page();
    page.set_project_count(9);
    // Cards are 320 wide with a 24 gap: column 1 starts at x = 344.
    page.handle(PageEvent::PointerDown { x: 600.0 }, &p, 0.0).unwrap();
    page.handle(PageEvent::PointerMove { x: 500.0 }, &p, 0.02).unwrap();
    page.handle(PageEvent::PointerMove { x: 400.0 }, &p, 0.04).unwrap();
    let effects = page.handle(PageEvent::PointerUp, &p, 0.04).unwrap();
    let Some(PageEffect::CarouselCommitted { offset_px: rest, .. }) = effects.first().cloned()
    else {
        panic!("expected a commit, got {effects:?}");
    };
    assert!(rest < -200.0);

    // Right after release the row is still near -200: x = 150 sits over card 0.
    let pointer = Point::new(150.0, 10.0);
    let now = 0.04 + 1e-3;
    let rendered = page.carousel_offset(now);
    assert!(rendered > -210.0 && rendered < -190.0);
    let local_x = pointer.x - rendered;
    let expected = usize::from(local_x >= 344.0) * 2;
    assert_eq!(page.hovered_card(pointer, now), Some(expected));
    let settled = page.config().cards.grid(9).hovered(pointer, rest, false);
    assert_eq!(page.hovered_card(pointer, 60.0), settled);
}

#[test]
fn team_sections_use_the_inset_viewport() {
    let (mut page, _) = mount();
    let p = static_page();
    let viewport = Rect::new(0.0, 0.0, 1200.0, 800.0);
    let mut rects = BTreeMap::new();
    // Inside the bottom 100 px band: not yet.
    rects.insert(ElementId::new("team-title"), Rect::new(0.0, 720.0, 600.0, 780.0));
    // Well inside the viewport.
    rects.insert(ElementId::new("team-intro"), Rect::new(0.0, 300.0, 600.0, 500.0));
    let effects = page
        .handle(PageEvent::Visibility { viewport, rects }, &p, 1.0)
        .unwrap();
    assert_eq!(effects.len(), 1);
    assert!(matches!(
        &effects[0],
        PageEffect::GateFired(fired) if fired.element == ElementId::new("team-intro")
    ));
    assert_eq!(
        page.snapshot(1.0).fired_gates,
        vec![ElementId::new("team-intro")]
    );
}

#[test]
fn portrait_tilt_uses_configured_limit() {
    let mut cfg = SiteConfig::default();
    cfg.team.max_tilt_deg = 6.0;
    let (mut page, _) = Page::mount(cfg, &static_page(), 0.0, 0.0).unwrap();
    let size = Size::new(150.0, 150.0);
    let tilt = page.portrait_pointer_move(3, Point::new(-40.0, 0.0), size);
    assert_eq!(tilt.rotate_x_deg, 6.0);
    assert_eq!(tilt.rotate_y_deg, -6.0);
    assert_eq!(page.portrait_pointer_leave(3), Tilt::FLAT);
    assert_eq!(page.portrait_pointer_leave(7), Tilt::FLAT);
}

#[test]
fn contact_fallback_addresses_configured_recipient() {
    let mut cfg = SiteConfig::default();
    cfg.contact.recipient = "hello@risc.example".to_string();
    let (page, _) = Page::mount(cfg, &static_page(), 0.0, 0.0).unwrap();
    let mut form = ContactForm::default();
    form.set_email("a@b.org").unwrap();
    form.set_message("hi").unwrap();
    let mut transport = page.contact_fallback();
    assert_eq!(form.submit(&mut transport).unwrap(), &FormStatus::Sent);
    assert_eq!(transport.opened.len(), 1);
    assert!(transport.opened[0].starts_with("mailto:hello@risc.example?"));
}

#[test]
fn unmount_releases_everything_and_ignores_later_events() {
    let (mut page, _) = mount();
    let p = static_page();
    let mut host = RecordingHost {
        listening: true,
        ..RecordingHost::default()
    };
    let effects = page.unmount();
    assert_eq!(effects, vec![PageEffect::DetachListener]);
    effects.iter().for_each(|e| e.apply(&mut host));
    assert!(!host.listening);
    assert!(!page.is_listening());
    assert!(page.gates().is_empty());
    assert_eq!(page.next_timer_ms(), None);

    let after = page
        .handle(PageEvent::Scroll { scroll_y: 900.0 }, &p, 5.0)
        .unwrap();
    assert!(after.is_empty());
    assert_eq!(page.active_section(), &"intro");
    assert!(page.unmount().is_empty());
}
