//! Headless UI state for the RISC website.
//!
//! The crate owns every piece of state the landing page derives from scrolling and pointer
//! input, and exposes it as plain Rust values. A host (browser binding, native shell or test)
//! feeds it geometry and events and applies the effects it returns.
//!
//! # Components
//!
//! 1. **Scroll sampling**: one shared listener fanned out to keyed dependents ([`ScrollSampler`]).
//! 2. **Section tracking**: a fixed registry of anchors and a resolver that maps the scroll
//!    offset to exactly one active section ([`ActiveSectionResolver`]).
//! 3. **Navigation rail**: indicator state, emphasis transitions and click-to-scroll
//!    ([`NavigationTracker`]).
//! 4. **Entrance gates**: one-shot visibility gates ([`RevealGates`]) and scroll-threshold
//!    triggers ([`ScrollThresholdTrigger`]).
//! 5. **Carousel**: extent tracking, bounded elastic drag with momentum ([`DragController`])
//!    and card hover hit-testing.
//! 6. **Page coordination**: [`Page`] owns all of the above and routes [`PageEvent`]s.
//!
//! Around the core sit the contact endpoint contract, the health report and the static data
//! feeds, plus a JSON-loadable [`SiteConfig`].
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Single-threaded**: nothing here blocks or spawns; time is passed in by the host.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod carousel;
mod config;
mod contact;
mod feeds;
mod foundation;
mod health;
mod nav;
mod page;
mod reveal;
mod scroll;
mod sections;
mod team;

pub use animation::ease::Ease;
pub use animation::inertia::Inertia;
pub use animation::spring::{SPRING_REST_DELTA, Spring};
pub use animation::transition::Transition;
pub use carousel::drag::{CarouselConfig, DragCommit, DragController, DragState};
pub use carousel::extent::{
    CarouselExtent, CarouselMetrics, ExtentTracker, MeasureReason, SettleSchedule,
};
pub use carousel::hover::{CardGrid, CardLayout};
pub use config::site::{PublicationsConfig, SiteConfig};
pub use contact::endpoint::{
    ContactConfig, ContactReply, ContactResponse, ContactSubmission, PROCESSING_FAILED_MESSAGE,
    REQUIRED_FIELDS_MESSAGE, handle_contact,
};
pub use contact::form::{
    ContactForm, ContactTransport, EndpointTransport, FormStatus, MailtoTransport,
};
pub use feeds::loader::{
    Feed, FeedItem, FeedSource, load_feed, load_feed_str, parse_feed, read_feed,
};
pub use feeds::model::{Project, ProjectStatus, Publication, TeamMember};
pub use feeds::roster::{Roster, founders, is_entrepreneur_in_residence, last_name, sort_roster};
pub use foundation::arena::Handle;
pub use foundation::core::{ElementId, Point, Rect, SectionId, Size, Vec2, visible_fraction};
pub use foundation::error::{SiteError, SiteResult};
pub use health::{ENVIRONMENT_VAR, HealthReport};
pub use nav::tracker::{
    NavIndicator, NavigationTracker, RailTiming, ScrollBehavior, ScrollRequest,
};
pub use page::coordinator::{
    CONTACT_ELEMENT, Page, PageEffect, PageEvent, PageSnapshot, ScrollConsumer, ScrollHost,
    StaticPage, TEAM_SECTION_ELEMENTS,
};
pub use reveal::gate::{
    AnimationGateState, EntranceMotion, GateFired, GateHandle, RevealConfig, RevealGates,
};
pub use scroll::sampler::{ListenerChange, ScrollSampler, ScrollState, Subscription};
pub use scroll::smooth::{SmoothScroll, SmoothScrollConfig};
pub use scroll::threshold::{ScrollThresholdTrigger, ThresholdOutcome, TriggerMode};
pub use sections::registry::{
    AnchorGeometry, LayoutSource, Section, SectionDef, SectionRegistry, StaticLayout,
    default_sections,
};
pub use sections::resolver::{ActiveSectionResolver, Resolution, TrackerConfig};
pub use team::effects::{MemberModal, ModalInput, ModalState, TeamConfig, Tilt, TiltTracker};
