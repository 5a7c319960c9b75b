use std::collections::BTreeMap;

use crate::carousel::drag::{DragController, DragState};
use crate::carousel::extent::{CarouselExtent, CarouselMetrics, ExtentTracker, MeasureReason};
use crate::carousel::hover::CardGrid;
use crate::config::site::SiteConfig;
use crate::contact::form::MailtoTransport;
use crate::foundation::core::{ElementId, Point, Rect, SectionId, Size};
use crate::foundation::error::SiteResult;
use crate::nav::tracker::{NavIndicator, NavigationTracker, ScrollBehavior, ScrollRequest};
use crate::reveal::gate::{GateFired, GateHandle, RevealConfig, RevealGates};
use crate::scroll::sampler::{ListenerChange, ScrollSampler, ScrollState, Subscription};
use crate::scroll::smooth::SmoothScroll;
use crate::scroll::threshold::{ScrollThresholdTrigger, ThresholdOutcome};
use crate::sections::registry::{AnchorGeometry, LayoutSource, SectionRegistry, StaticLayout};
use crate::sections::resolver::ActiveSectionResolver;
use crate::team::effects::{Tilt, TiltTracker};

/// Element id of the contact card's entrance gate.
pub const CONTACT_ELEMENT: &str = "contact";

/// Element ids of the team page blocks gated by the team section reveal.
pub const TEAM_SECTION_ELEMENTS: [&str; 4] =
    ["team-intro", "team-founders", "team-title", "team-grid"];

/// Dependents of the shared scroll sampler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollConsumer {
    /// Active-section resolver.
    Resolver,
    /// Team roster reveal threshold.
    TeamRoster,
    /// Publications reveal threshold.
    Publications,
}

/// Host seam for the viewport side effects the page requests.
pub trait ScrollHost {
    /// Start delivering [`PageEvent::Scroll`].
    fn attach_scroll_listener(&mut self);
    /// Stop delivering [`PageEvent::Scroll`].
    fn detach_scroll_listener(&mut self);
    /// Move the viewport.
    fn scroll_to(&mut self, request: ScrollRequest);
}

/// Input delivered by the host. Pointer coordinates are viewport `x` in pixels.
#[derive(Clone, Debug, PartialEq)]
pub enum PageEvent {
    /// The window scrolled.
    Scroll {
        /// New `scrollY`.
        scroll_y: f64,
    },
    /// The window was resized.
    Resize,
    /// The device rotated.
    OrientationChange,
    /// The DOM under the page changed.
    ContentMutation,
    /// A settle deadline may have passed.
    Timer,
    /// Pointer pressed on the carousel.
    PointerDown {
        /// Viewport x.
        x: f64,
    },
    /// Pointer moved while pressed.
    PointerMove {
        /// Viewport x.
        x: f64,
    },
    /// Pointer released.
    PointerUp,
    /// Pointer capture lost; ends the drag like a release.
    PointerCancel,
    /// A rail bullet was clicked.
    NavClick {
        /// Section to scroll to.
        section: SectionId,
    },
    /// Visibility ratio reported by a host-side observer.
    Intersection {
        /// Observed element.
        element: ElementId,
        /// Visible fraction in `[0, 1]`.
        ratio: f64,
    },
    /// Current element rects and viewport, all in viewport coordinates. Each gate applies
    /// its own margin.
    Visibility {
        /// Window rect.
        viewport: Rect,
        /// Rects of the observed elements.
        rects: BTreeMap<ElementId, Rect>,
    },
    /// Animation frame.
    Tick,
}

/// Observable consequence of an event.
#[derive(Clone, Debug, PartialEq)]
pub enum PageEffect {
    /// Host should attach its scroll listener.
    AttachListener,
    /// Host should detach its scroll listener.
    DetachListener,
    /// Host should scroll the viewport.
    ScrollTo(ScrollRequest),
    /// A rail click started a scroll.
    NavigationStarted {
        /// Clicked section.
        section: SectionId,
        /// Where the scroll will land.
        target_y: f64,
    },
    /// The active section changed.
    ActiveSectionChanged {
        /// Previous active section.
        from: SectionId,
        /// New active section.
        to: SectionId,
    },
    /// A scroll threshold trigger flipped.
    ThresholdChanged {
        /// Trigger name.
        trigger: String,
        /// New state.
        active: bool,
    },
    /// An entrance gate fired.
    GateFired(GateFired),
    /// The carousel's draggable range changed.
    ExtentChanged {
        /// New range.
        range_px: f64,
        /// Committed offset after clamping to the new range.
        offset_px: f64,
    },
    /// The carousel moved under the pointer.
    CarouselMoved {
        /// Rendered offset.
        offset_px: f64,
    },
    /// A drag ended.
    CarouselCommitted {
        /// Resting offset.
        offset_px: f64,
        /// Release velocity.
        velocity_px_per_sec: f64,
    },
}

impl PageEffect {
    /// Forward host-facing effects; state notifications are ignored.
    pub fn apply(&self, host: &mut dyn ScrollHost) {
        match self {
            Self::AttachListener => host.attach_scroll_listener(),
            Self::DetachListener => host.detach_scroll_listener(),
            Self::ScrollTo(request) => host.scroll_to(*request),
            _ => {}
        }
    }
}

/// Pre-measured page for tests and the CLI.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StaticPage {
    /// Anchor geometry.
    pub layout: StaticLayout,
    /// Card row scroll width.
    pub carousel_content_width: f64,
    /// Card row container width.
    pub carousel_viewport_width: f64,
}

impl LayoutSource for StaticPage {
    fn anchor_geometry(&self, id: &SectionId) -> Option<AnchorGeometry> {
        self.layout.anchor_geometry(id)
    }
}

impl CarouselMetrics for StaticPage {
    fn content_width(&self) -> f64 {
        self.carousel_content_width
    }

    fn viewport_width(&self) -> f64 {
        self.carousel_viewport_width
    }
}

/// Render-ready summary of the page at one instant.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PageSnapshot {
    /// Last sampled scroll offset.
    pub scroll_y: f64,
    /// Section the rail highlights.
    pub active_section: SectionId,
    /// Rail bullets.
    pub indicators: Vec<NavIndicator>,
    /// Rail entrance progress.
    pub rail_progress: f64,
    /// Team roster threshold state.
    pub team_visible: bool,
    /// Publications threshold state.
    pub publications_visible: bool,
    /// Carousel drag state.
    pub carousel: DragState,
    /// Carousel draggable range.
    pub carousel_range_px: f64,
    /// Entrance gates that have fired.
    pub fired_gates: Vec<ElementId>,
    /// Scroll listener attached.
    pub listening: bool,
}

/// Owns every page component and routes host events to them.
///
/// Single-threaded: the host calls [`Page::handle`] from its event loop and applies the
/// returned effects. After [`Page::unmount`] every event is ignored.
#[derive(Debug)]
pub struct Page {
    cfg: SiteConfig,
    registry: SectionRegistry,
    sampler: ScrollSampler<ScrollConsumer>,
    resolver: ActiveSectionResolver,
    nav: NavigationTracker,
    gates: RevealGates,
    team_reveal: ScrollThresholdTrigger,
    publications_reveal: ScrollThresholdTrigger,
    extent: ExtentTracker,
    drag: DragController,
    cards: CardGrid,
    tilts: BTreeMap<usize, TiltTracker>,
    smooth: Option<SmoothScroll>,
    last_tick: Option<f64>,
    mounted: bool,
}

impl Page {
    /// Build every component, measure the layout and subscribe to scroll.
    #[tracing::instrument(skip(cfg, host))]
    pub fn mount<P: LayoutSource + CarouselMetrics>(
        cfg: SiteConfig,
        host: &P,
        initial_scroll_y: f64,
        now_secs: f64,
    ) -> SiteResult<(Self, Vec<PageEffect>)> {
        cfg.validate()?;
        let mut registry = cfg.registry()?;
        let mounted = registry.refresh_geometry(host);
        tracing::debug!(mounted, sections = registry.len(), "page mounted");

        let resolver = ActiveSectionResolver::new(cfg.tracker, &registry);
        let nav = NavigationTracker::new(cfg.rail, &registry, resolver.active(), now_secs);
        let mut gates = RevealGates::default();
        gates.register(ElementId::new(CONTACT_ELEMENT), cfg.reveal)?;
        for element in TEAM_SECTION_ELEMENTS {
            gates.register(ElementId::new(element), cfg.team.section_reveal)?;
        }

        let mut page = Self {
            team_reveal: ScrollThresholdTrigger::once("team", cfg.team.reveal_scroll_y),
            publications_reveal: ScrollThresholdTrigger::level(
                "publications",
                cfg.publications.reveal_scroll_y,
            ),
            extent: ExtentTracker::new(now_secs * 1000.0, &cfg.carousel.settle_delays_ms),
            drag: DragController::new(cfg.carousel.clone()),
            sampler: ScrollSampler::new(initial_scroll_y),
            cards: CardGrid::default(),
            tilts: BTreeMap::new(),
            smooth: None,
            last_tick: None,
            mounted: true,
            cfg,
            registry,
            resolver,
            nav,
            gates,
        };

        let mut effects = Vec::new();
        for consumer in [
            ScrollConsumer::Resolver,
            ScrollConsumer::TeamRoster,
            ScrollConsumer::Publications,
        ] {
            let (sub, state, change) = page.sampler.subscribe(consumer);
            push_listener_change(&mut effects, change);
            page.deliver(consumer, sub, state, now_secs, &mut effects);
        }
        page.remeasure_carousel(MeasureReason::Mount, host, &mut effects);
        Ok((page, effects))
    }

    /// False after [`Page::unmount`].
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Config the page was mounted with.
    pub fn config(&self) -> &SiteConfig {
        &self.cfg
    }

    /// Tracked sections.
    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    /// Last sampled scroll state.
    pub fn scroll_state(&self) -> ScrollState {
        self.sampler.state()
    }

    /// Section currently highlighted on the rail.
    pub fn active_section(&self) -> &SectionId {
        self.resolver.active()
    }

    /// The shared scroll listener is attached.
    pub fn is_listening(&self) -> bool {
        self.sampler.is_listening()
    }

    /// A click-to-scroll animation is running; the host should keep sending `Tick`.
    pub fn is_scrolling(&self) -> bool {
        self.smooth.is_some()
    }

    /// Registered entrance gates.
    pub fn gates(&self) -> &RevealGates {
        &self.gates
    }

    /// Earliest pending settle deadline, for the host's timer.
    pub fn next_timer_ms(&self) -> Option<f64> {
        self.extent.next_deadline_ms()
    }

    /// Register an extra entrance gate for `element`.
    pub fn register_gate(
        &mut self,
        element: ElementId,
        cfg: RevealConfig,
    ) -> SiteResult<GateHandle> {
        self.gates.register(element, cfg)
    }

    /// Drop the gate for `element`; false if none was registered.
    pub fn unregister_gate(&mut self, element: &ElementId) -> bool {
        self.gates
            .handle_for(element)
            .is_some_and(|h| self.gates.unregister(h))
    }

    /// Replace the card rects with ones the host measured.
    pub fn set_cards(&mut self, cards: CardGrid) {
        self.cards = cards;
    }

    /// Lay out `count` project cards with the configured card geometry.
    pub fn set_project_count(&mut self, count: usize) {
        self.cards = self.cfg.cards.grid(count);
    }

    /// Card under the pointer at `now_secs`, tested against the rendered offset so a
    /// running glide is taken into account. `None` while dragging.
    pub fn hovered_card(&mut self, pointer: Point, now_secs: f64) -> Option<usize> {
        let dragging = self.drag.is_dragging();
        let offset = self.drag.render_offset(now_secs);
        self.cards.hovered(pointer, offset, dragging)
    }

    /// Fade-in delay of the roster member at `index`.
    pub fn team_member_delay_secs(&self, index: usize) -> f64 {
        self.cfg.team.stagger_delay_secs(index)
    }

    /// Pointer moved over the portrait of roster member `index`.
    pub fn portrait_pointer_move(&mut self, index: usize, local: Point, size: Size) -> Tilt {
        let max_deg = self.cfg.team.max_tilt_deg;
        self.tilts
            .entry(index)
            .or_insert_with(|| TiltTracker::new(max_deg))
            .pointer_move(local, size)
    }

    /// Pointer left the portrait of roster member `index`.
    pub fn portrait_pointer_leave(&mut self, index: usize) -> Tilt {
        self.tilts
            .remove(&index)
            .map_or(Tilt::FLAT, |mut tracker| tracker.pointer_leave())
    }

    /// Mail-client fallback addressed with the configured recipient and subject.
    pub fn contact_fallback(&self) -> MailtoTransport {
        MailtoTransport {
            config: self.cfg.contact.clone(),
            opened: Vec::new(),
        }
    }

    /// Carousel offset to render at `now_secs`.
    pub fn carousel_offset(&mut self, now_secs: f64) -> f64 {
        self.drag.render_offset(now_secs)
    }

    /// Render-ready state at `now_secs`.
    pub fn snapshot(&self, now_secs: f64) -> PageSnapshot {
        PageSnapshot {
            scroll_y: self.sampler.state().scroll_y,
            active_section: self.resolver.active().clone(),
            indicators: self
                .nav
                .indicators(&self.registry, self.resolver.active(), now_secs),
            rail_progress: self.nav.rail_progress(now_secs),
            team_visible: self.team_reveal.is_active(),
            publications_visible: self.publications_reveal.is_active(),
            carousel: self.drag.drag_state(),
            carousel_range_px: self.extent.extent().draggable_range_px,
            fired_gates: self.gates.fired_elements(),
            listening: self.sampler.is_listening(),
        }
    }

    /// Route one host event.
    pub fn handle<P: LayoutSource + CarouselMetrics>(
        &mut self,
        event: PageEvent,
        host: &P,
        now_secs: f64,
    ) -> SiteResult<Vec<PageEffect>> {
        let mut effects = Vec::new();
        if !self.mounted {
            tracing::trace!(?event, "event after unmount ignored");
            return Ok(effects);
        }
        match event {
            PageEvent::Scroll { scroll_y } => {
                self.dispatch_scroll(scroll_y, now_secs, &mut effects);
            }
            PageEvent::Resize => {
                self.relayout(host, now_secs, &mut effects);
                self.remeasure_carousel(MeasureReason::Resize, host, &mut effects);
            }
            PageEvent::OrientationChange => {
                self.relayout(host, now_secs, &mut effects);
                self.remeasure_carousel(MeasureReason::OrientationChange, host, &mut effects);
            }
            PageEvent::ContentMutation => {
                self.relayout(host, now_secs, &mut effects);
                self.remeasure_carousel(MeasureReason::ContentMutation, host, &mut effects);
            }
            PageEvent::Timer => {
                if let Some(extent) = self.extent.poll(now_secs * 1000.0, host) {
                    self.apply_extent(extent, &mut effects);
                }
            }
            PageEvent::PointerDown { x } => self.drag.pointer_down(x, now_secs),
            PageEvent::PointerMove { x } => {
                if let Some(offset_px) = self.drag.pointer_move(x, now_secs) {
                    effects.push(PageEffect::CarouselMoved { offset_px });
                }
            }
            PageEvent::PointerUp => {
                if let Some(commit) = self.drag.pointer_up(now_secs) {
                    effects.push(PageEffect::CarouselCommitted {
                        offset_px: commit.committed_offset_px,
                        velocity_px_per_sec: commit.release_velocity_px_per_sec,
                    });
                }
            }
            PageEvent::PointerCancel => {
                if let Some(commit) = self.drag.pointer_cancel(now_secs) {
                    effects.push(PageEffect::CarouselCommitted {
                        offset_px: commit.committed_offset_px,
                        velocity_px_per_sec: 0.0,
                    });
                }
            }
            PageEvent::NavClick { section } => self.navigate(section, now_secs, &mut effects)?,
            PageEvent::Intersection { element, ratio } => {
                if let Some(handle) = self.gates.handle_for(&element)
                    && let Some(fired) = self.gates.observe_ratio(handle, ratio, now_secs)
                {
                    effects.push(PageEffect::GateFired(fired));
                }
            }
            PageEvent::Visibility { viewport, rects } => {
                effects.extend(
                    self.gates
                        .observe_all(&rects, viewport, now_secs)
                        .into_iter()
                        .map(PageEffect::GateFired),
                );
            }
            PageEvent::Tick => self.tick(now_secs, &mut effects),
        }
        Ok(effects)
    }

    /// Release the scroll listener, observers and timers. Idempotent.
    #[tracing::instrument(skip(self))]
    pub fn unmount(&mut self) -> Vec<PageEffect> {
        let mut effects = Vec::new();
        if !self.mounted {
            return effects;
        }
        self.mounted = false;
        push_listener_change(&mut effects, self.sampler.release_all());
        self.gates.clear();
        self.tilts.clear();
        self.extent.cancel_timers();
        self.smooth = None;
        self.last_tick = None;
        tracing::debug!("page unmounted");
        effects
    }

    fn dispatch_scroll(
        &mut self,
        raw_scroll_y: f64,
        now_secs: f64,
        effects: &mut Vec<PageEffect>,
    ) {
        let (state, targets) = self.sampler.sample(raw_scroll_y);
        for (sub, consumer) in targets {
            self.deliver(consumer, sub, state, now_secs, effects);
        }
    }

    fn deliver(
        &mut self,
        consumer: ScrollConsumer,
        sub: Subscription,
        state: ScrollState,
        now_secs: f64,
        effects: &mut Vec<PageEffect>,
    ) {
        let trigger = match consumer {
            ScrollConsumer::Resolver => {
                self.resolve(state, now_secs, effects);
                return;
            }
            ScrollConsumer::TeamRoster => &mut self.team_reveal,
            ScrollConsumer::Publications => &mut self.publications_reveal,
        };
        let outcome = trigger.observe(state);
        if outcome != ThresholdOutcome::Unchanged {
            effects.push(PageEffect::ThresholdChanged {
                trigger: trigger.name().to_owned(),
                active: outcome == ThresholdOutcome::Activated,
            });
        }
        if trigger.is_done() {
            let change = self.sampler.unsubscribe(sub);
            push_listener_change(effects, change);
        }
    }

    fn resolve(&mut self, state: ScrollState, now_secs: f64, effects: &mut Vec<PageEffect>) {
        let (_, previous) = self.resolver.resolve(state, &self.registry);
        if let Some(from) = previous {
            let to = self.resolver.active().clone();
            self.nav.on_active_changed(&self.registry, &to, now_secs);
            effects.push(PageEffect::ActiveSectionChanged { from, to });
        }
    }

    fn relayout(
        &mut self,
        host: &dyn LayoutSource,
        now_secs: f64,
        effects: &mut Vec<PageEffect>,
    ) {
        self.registry.refresh_geometry(host);
        if self.sampler.is_listening() {
            self.resolve(self.sampler.state(), now_secs, effects);
        }
    }

    fn remeasure_carousel(
        &mut self,
        reason: MeasureReason,
        host: &dyn CarouselMetrics,
        effects: &mut Vec<PageEffect>,
    ) {
        if let Some(extent) = self.extent.recompute(reason, host) {
            self.apply_extent(extent, effects);
        }
    }

    fn apply_extent(&mut self, extent: CarouselExtent, effects: &mut Vec<PageEffect>) {
        self.drag.set_range(extent.draggable_range_px);
        effects.push(PageEffect::ExtentChanged {
            range_px: extent.draggable_range_px,
            offset_px: self.drag.committed_offset(),
        });
    }

    fn navigate(
        &mut self,
        section: SectionId,
        now_secs: f64,
        effects: &mut Vec<PageEffect>,
    ) -> SiteResult<()> {
        let Some(request) = self.nav.click(&section, &self.registry)? else {
            return Ok(());
        };
        let from = self.sampler.state().scroll_y;
        match request.behavior {
            ScrollBehavior::Smooth => {
                self.smooth = Some(SmoothScroll::new(
                    from,
                    request.target_y,
                    &self.cfg.smooth_scroll,
                ));
                self.last_tick = Some(now_secs);
            }
            ScrollBehavior::Instant => {
                effects.push(PageEffect::ScrollTo(request));
                self.dispatch_scroll(request.target_y, now_secs, effects);
            }
        }
        effects.push(PageEffect::NavigationStarted {
            section,
            target_y: request.target_y,
        });
        Ok(())
    }

    /// Advance the programmatic scroll and feed its position through the sampler, so the
    /// resolver follows the same path a user scroll would.
    fn tick(&mut self, now_secs: f64, effects: &mut Vec<PageEffect>) {
        let Some(smooth) = self.smooth.as_mut() else {
            return;
        };
        let dt = self.last_tick.map_or(0.0, |t| now_secs - t);
        self.last_tick = Some(now_secs);
        let y = smooth.advance(dt);
        let finished = smooth.is_finished();
        if finished {
            self.smooth = None;
            self.last_tick = None;
        }
        effects.push(PageEffect::ScrollTo(ScrollRequest {
            target_y: y,
            behavior: ScrollBehavior::Instant,
        }));
        self.dispatch_scroll(y, now_secs, effects);
    }
}

fn push_listener_change(effects: &mut Vec<PageEffect>, change: ListenerChange) {
    match change {
        ListenerChange::Attach => effects.push(PageEffect::AttachListener),
        ListenerChange::Detach => effects.push(PageEffect::DetachListener),
        ListenerChange::Unchanged => {}
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/coordinator.rs"]
mod tests;
