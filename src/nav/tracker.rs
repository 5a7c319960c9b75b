use crate::animation::ease::Ease;
use crate::animation::transition::Transition;
use crate::foundation::core::SectionId;
use crate::foundation::error::{SiteError, SiteResult};
use crate::sections::registry::SectionRegistry;

/// How the host should move the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScrollBehavior {
    /// Animated scroll.
    Smooth,
    /// Jump without animation.
    Instant,
}

/// Viewport scroll the tracker asks the host to perform.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollRequest {
    /// Document offset to scroll to.
    pub target_y: f64,
    /// Animated or instant.
    pub behavior: ScrollBehavior,
}

/// Entrance and emphasis timings for the side rail.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RailTiming {
    /// Rail container fade and slide-in.
    pub rail: Transition,
    /// Connecting line scale-in.
    pub line: Transition,
    /// First bullet pop-in.
    pub bullet: Transition,
    /// Extra delay per bullet after the first.
    pub bullet_stagger_secs: f64,
    /// Scale change when a bullet gains or loses focus.
    pub emphasis: Transition,
    /// Scale of the active bullet.
    pub active_scale: f64,
}

impl Default for RailTiming {
    fn default() -> Self {
        Self {
            rail: Transition {
                duration_secs: 0.6,
                delay_secs: 0.3,
                ease: Ease::EaseOut,
            },
            line: Transition {
                duration_secs: 0.8,
                delay_secs: 0.4,
                ease: Ease::EaseOut,
            },
            bullet: Transition {
                duration_secs: 0.3,
                delay_secs: 0.5,
                ease: Ease::EaseOut,
            },
            bullet_stagger_secs: 0.1,
            emphasis: Transition {
                duration_secs: 0.3,
                delay_secs: 0.0,
                ease: Ease::EaseOut,
            },
            active_scale: 1.3,
        }
    }
}

impl RailTiming {
    /// Transitions valid; stagger non-negative; scale positive.
    pub fn validate(&self) -> SiteResult<()> {
        self.rail.validate()?;
        self.line.validate()?;
        self.bullet.validate()?;
        self.emphasis.validate()?;
        if !self.bullet_stagger_secs.is_finite() || self.bullet_stagger_secs < 0.0 {
            return Err(SiteError::validation(
                "rail bullet_stagger_secs must be finite and >= 0",
            ));
        }
        if !self.active_scale.is_finite() || self.active_scale <= 0.0 {
            return Err(SiteError::validation("rail active_scale must be > 0"));
        }
        Ok(())
    }
}

/// Render-ready state of one rail indicator.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct NavIndicator {
    /// Section this bullet links to.
    pub id: SectionId,
    /// Tooltip label.
    pub label: String,
    /// Position on the rail.
    pub index: usize,
    /// This is the active section.
    pub is_active: bool,
    /// Delay before this bullet's pop-in, counted from mount.
    pub entrance_delay_secs: f64,
    /// Pop-in progress in `[0, 1]`.
    pub entrance: f64,
    /// Current bullet scale (1.0 idle, `active_scale` when emphasized).
    pub scale: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Emphasis {
    from: f64,
    to: f64,
    started_at: f64,
}

/// Side-rail model: one indicator per section, emphasis on the active one.
#[derive(Clone, Debug)]
pub struct NavigationTracker {
    timing: RailTiming,
    mounted_at: f64,
    emphasis: Vec<Emphasis>,
}

impl NavigationTracker {
    /// Rail mounted at `now_secs` with `active` already emphasized.
    pub fn new(
        timing: RailTiming,
        registry: &SectionRegistry,
        active: &SectionId,
        now_secs: f64,
    ) -> Self {
        let emphasis = registry
            .iter()
            .map(|s| {
                let scale = if s.id() == active {
                    timing.active_scale
                } else {
                    1.0
                };
                Emphasis {
                    from: scale,
                    to: scale,
                    started_at: now_secs,
                }
            })
            .collect();
        Self {
            timing,
            mounted_at: now_secs,
            emphasis,
        }
    }

    /// Configured timings.
    pub fn timing(&self) -> &RailTiming {
        &self.timing
    }

    fn sample_scale(&self, idx: usize, now_secs: f64) -> f64 {
        self.emphasis.get(idx).map_or(1.0, |e| {
            self.timing
                .emphasis
                .sample(e.from, e.to, now_secs - e.started_at)
        })
    }

    /// Retarget emphasis transitions after the active id changed.
    pub fn on_active_changed(
        &mut self,
        registry: &SectionRegistry,
        active: &SectionId,
        now_secs: f64,
    ) {
        for (idx, section) in registry.iter().enumerate() {
            let target = if section.id() == active {
                self.timing.active_scale
            } else {
                1.0
            };
            let current = self.sample_scale(idx, now_secs);
            if let Some(e) = self.emphasis.get_mut(idx)
                && e.to != target
            {
                *e = Emphasis {
                    from: current,
                    to: target,
                    started_at: now_secs,
                };
            }
        }
    }

    /// Bullet `index`'s pop-in delay: base delay plus stagger.
    pub fn entrance_delay_secs(&self, index: usize) -> f64 {
        self.timing.bullet.delay_secs + index as f64 * self.timing.bullet_stagger_secs
    }

    /// Rail container fade/slide-in progress.
    pub fn rail_progress(&self, now_secs: f64) -> f64 {
        self.timing.rail.progress(now_secs - self.mounted_at)
    }

    /// Connecting line scale-in progress.
    pub fn line_progress(&self, now_secs: f64) -> f64 {
        self.timing.line.progress(now_secs - self.mounted_at)
    }

    /// Indicator state for every section at `now_secs`.
    pub fn indicators(
        &self,
        registry: &SectionRegistry,
        active: &SectionId,
        now_secs: f64,
    ) -> Vec<NavIndicator> {
        registry
            .iter()
            .enumerate()
            .map(|(index, section)| {
                let delay = self.entrance_delay_secs(index);
                NavIndicator {
                    id: section.id().clone(),
                    label: section.label().to_owned(),
                    index,
                    is_active: section.id() == active,
                    entrance_delay_secs: delay,
                    entrance: self
                        .timing
                        .bullet
                        .delayed(delay - self.timing.bullet.delay_secs)
                        .progress(now_secs - self.mounted_at),
                    scale: self.sample_scale(index, now_secs),
                }
            })
            .collect()
    }

    /// Scroll request for a click on `id`'s indicator.
    ///
    /// Unknown ids are an error; a known section whose anchor is not mounted yields `None`.
    #[tracing::instrument(skip(self, registry))]
    pub fn click(
        &self,
        id: &SectionId,
        registry: &SectionRegistry,
    ) -> SiteResult<Option<ScrollRequest>> {
        let Some(section) = registry.get(id) else {
            return Err(SiteError::layout(format!("unknown section '{id}'")));
        };
        let Some(geometry) = section.geometry else {
            tracing::debug!(section = %id, "navigation target not mounted");
            return Ok(None);
        };
        Ok(Some(ScrollRequest {
            target_y: geometry.offset_top,
            behavior: ScrollBehavior::Smooth,
        }))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/nav/tracker.rs"]
mod tests;
