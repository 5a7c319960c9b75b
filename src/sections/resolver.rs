use crate::foundation::core::SectionId;
use crate::foundation::error::{SiteError, SiteResult};
use crate::scroll::sampler::ScrollState;
use crate::sections::registry::SectionRegistry;

/// Tuning for active-section resolution.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Forward bias added to `scroll_y` so the rail switches slightly early.
    pub lookahead_px: f64,
    /// Below this effective offset the first section is active regardless of geometry.
    pub top_threshold_px: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            lookahead_px: 100.0,
            top_threshold_px: 200.0,
        }
    }
}

impl TrackerConfig {
    /// Both distances must be finite and non-negative.
    pub fn validate(&self) -> SiteResult<()> {
        if !self.lookahead_px.is_finite() || self.lookahead_px < 0.0 {
            return Err(SiteError::validation(
                "tracker lookahead_px must be finite and >= 0",
            ));
        }
        if !self.top_threshold_px.is_finite() || self.top_threshold_px < 0.0 {
            return Err(SiteError::validation(
                "tracker top_threshold_px must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

/// Why the resolver settled on its current id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// A section range contained the effective offset.
    Matched,
    /// Near the top of the page (or at `scroll_y == 0` with no match): the first section.
    TopOfPage,
    /// Nothing matched (gap, past the end, anchors unmounted); previous id kept.
    Retained,
}

/// Maps scroll offsets to exactly one active section id.
///
/// The resolver is the only writer of the active id. It starts on the registry's first
/// section and never becomes empty.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveSectionResolver {
    cfg: TrackerConfig,
    active: SectionId,
}

impl ActiveSectionResolver {
    /// Start on the registry's first section.
    pub fn new(cfg: TrackerConfig, registry: &SectionRegistry) -> Self {
        Self {
            cfg,
            active: registry.first().id().clone(),
        }
    }

    /// Tuning in effect.
    pub fn config(&self) -> &TrackerConfig {
        &self.cfg
    }

    /// The current active section id.
    pub fn active(&self) -> &SectionId {
        &self.active
    }

    /// Scroll offset plus the lookahead bias.
    pub fn effective_y(&self, state: ScrollState) -> f64 {
        state.scroll_y + self.cfg.lookahead_px
    }

    /// Pure lookup: which section the registry maps `state` to, ignoring history.
    ///
    /// The top-of-page threshold takes precedence over section ranges, so a short first
    /// section cannot hand the rail to its neighbour at the very top.
    pub fn lookup<'r>(
        &self,
        state: ScrollState,
        registry: &'r SectionRegistry,
    ) -> (Option<&'r SectionId>, Resolution) {
        let y = self.effective_y(state);
        if y < self.cfg.top_threshold_px {
            return (Some(registry.first().id()), Resolution::TopOfPage);
        }
        // First match in display order wins if ranges overlap.
        for section in registry.iter() {
            if let Some(geometry) = section.geometry
                && geometry.contains(y)
            {
                return (Some(section.id()), Resolution::Matched);
            }
        }
        if state.scroll_y == 0.0 {
            return (Some(registry.first().id()), Resolution::TopOfPage);
        }
        (None, Resolution::Retained)
    }

    /// Resolve and store the active id. Returns the previous id when it changed.
    #[tracing::instrument(skip(self, registry), fields(scroll_y = state.scroll_y))]
    pub fn resolve(
        &mut self,
        state: ScrollState,
        registry: &SectionRegistry,
    ) -> (Resolution, Option<SectionId>) {
        let (found, resolution) = self.lookup(state, registry);
        let Some(found) = found else {
            return (resolution, None);
        };
        if *found == self.active {
            return (resolution, None);
        }
        let previous = std::mem::replace(&mut self.active, found.clone());
        tracing::debug!(from = %previous, to = %self.active, ?resolution, "active section changed");
        (resolution, Some(previous))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sections/resolver.rs"]
mod tests;
