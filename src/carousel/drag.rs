use smallvec::SmallVec;

use crate::animation::inertia::Inertia;
use crate::foundation::error::{SiteError, SiteResult};

/// Drag physics tuning for the project carousel.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Horizontal travel before a press becomes a drag.
    pub drag_threshold_px: f64,
    /// Hard cap on elastic over-drag past either edge.
    pub overrun_px: f64,
    /// Fraction of pointer travel applied beyond the edges.
    pub elastic: f64,
    /// Momentum carry: `power * velocity * time_constant` pixels.
    pub momentum_power: f64,
    /// Decay time constant of the release glide.
    pub momentum_time_constant_secs: f64,
    /// Pointer history used for release velocity.
    pub velocity_window_secs: f64,
    /// Release velocity is clamped to this magnitude.
    pub max_velocity_px_per_sec: f64,
    /// Re-measure delays after mount.
    pub settle_delays_ms: Vec<f64>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            drag_threshold_px: 3.0,
            overrun_px: 80.0,
            elastic: 0.1,
            momentum_power: 0.8,
            momentum_time_constant_secs: 0.35,
            velocity_window_secs: 0.1,
            max_velocity_px_per_sec: 8000.0,
            settle_delays_ms: vec![500.0, 1500.0],
        }
    }
}

impl CarouselConfig {
    /// Reject negative or non-finite tuning and an elastic factor outside `[0, 1]`.
    pub fn validate(&self) -> SiteResult<()> {
        for (name, v) in [
            ("drag_threshold_px", self.drag_threshold_px),
            ("overrun_px", self.overrun_px),
            ("momentum_power", self.momentum_power),
            ("momentum_time_constant_secs", self.momentum_time_constant_secs),
            ("velocity_window_secs", self.velocity_window_secs),
            ("max_velocity_px_per_sec", self.max_velocity_px_per_sec),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(SiteError::validation(format!(
                    "carousel {name} must be finite and >= 0"
                )));
            }
        }
        if !self.elastic.is_finite() || !(0.0..=1.0).contains(&self.elastic) {
            return Err(SiteError::validation(
                "carousel elastic must be within [0, 1]",
            ));
        }
        if self
            .settle_delays_ms
            .iter()
            .any(|d| !d.is_finite() || *d < 0.0)
        {
            return Err(SiteError::validation(
                "carousel settle_delays_ms must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

/// Snapshot of the transient drag.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct DragState {
    /// Pointer is down past the drag threshold.
    pub is_dragging: bool,
    /// Offset currently rendered, including elastic overrun.
    pub current_offset_px: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Idle,
    /// Pointer is down but has not crossed the drag threshold.
    Pressed { start_x: f64 },
    Dragging { start_x: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct VelocitySample {
    t: f64,
    x: f64,
}

/// Result of ending a drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragCommit {
    /// Offset where the pointer let go (may be inside the elastic overrun).
    pub release_offset_px: f64,
    /// Resting offset, always within `[-range, 0]`.
    pub committed_offset_px: f64,
    /// Velocity at pointer-up, clamped to the configured maximum.
    pub release_velocity_px_per_sec: f64,
    /// Glide from release to rest.
    pub glide: Inertia,
}

/// Horizontal drag state machine for the card row.
///
/// `Idle → Pressed → Dragging → Idle`. Offsets are non-positive: `0` shows the first card,
/// `-range` the last.
#[derive(Clone, Debug)]
pub struct DragController {
    cfg: CarouselConfig,
    range: f64,
    committed: f64,
    current: f64,
    phase: Phase,
    samples: SmallVec<[VelocitySample; 16]>,
    glide: Option<(Inertia, f64)>,
}

impl DragController {
    /// Idle controller with no draggable range until [`DragController::set_range`].
    pub fn new(cfg: CarouselConfig) -> Self {
        Self {
            cfg,
            range: 0.0,
            committed: 0.0,
            current: 0.0,
            phase: Phase::Idle,
            samples: SmallVec::new(),
            glide: None,
        }
    }

    /// Tuning in effect.
    pub fn config(&self) -> &CarouselConfig {
        &self.cfg
    }

    /// Current draggable range in pixels (`max(0, content - viewport)`).
    pub fn range(&self) -> f64 {
        self.range
    }

    /// Resting offset, within `[-range, 0]`.
    pub fn committed_offset(&self) -> f64 {
        self.committed
    }

    /// True once a press has crossed the drag threshold and until release.
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    /// Snapshot for rendering: the live offset while dragging, else the committed one.
    pub fn drag_state(&self) -> DragState {
        DragState {
            is_dragging: self.is_dragging(),
            current_offset_px: if self.is_dragging() {
                self.current
            } else {
                self.committed
            },
        }
    }

    fn hard_clamp(&self, offset: f64) -> f64 {
        offset.clamp(-self.range, 0.0)
    }

    fn elastic_clamp(&self, raw: f64) -> f64 {
        let min = -self.range;
        let overrun = self.cfg.overrun_px;
        if raw > 0.0 {
            (raw * self.cfg.elastic).min(overrun)
        } else if raw < min {
            (min + (raw - min) * self.cfg.elastic).max(min - overrun)
        } else {
            raw
        }
    }

    /// Apply a new draggable range. The committed offset is re-clamped; returns whether it
    /// moved.
    #[tracing::instrument(skip(self))]
    pub fn set_range(&mut self, range_px: f64) -> bool {
        self.range = if range_px.is_finite() {
            range_px.max(0.0)
        } else {
            0.0
        };
        let clamped = self.hard_clamp(self.committed);
        let moved = clamped != self.committed;
        if moved {
            tracing::debug!(from = self.committed, to = clamped, "committed offset re-clamped");
            self.committed = clamped;
            self.glide = None;
        }
        if self.is_dragging() {
            let overrun = self.cfg.overrun_px;
            self.current = self.current.clamp(-self.range - overrun, overrun);
        }
        moved
    }

    /// Press on the row. Non-finite positions are ignored.
    pub fn pointer_down(&mut self, x: f64, t_secs: f64) {
        if !x.is_finite() {
            return;
        }
        // Grabbing mid-glide freezes the row where it is.
        if let Some((glide, started)) = self.glide.take() {
            self.committed = self.hard_clamp(glide.sample(t_secs - started));
        }
        self.phase = Phase::Pressed { start_x: x };
        self.current = self.committed;
        self.samples.clear();
        self.push_sample(t_secs, x);
    }

    /// Track pointer movement. Returns the live offset while dragging.
    pub fn pointer_move(&mut self, x: f64, t_secs: f64) -> Option<f64> {
        if !x.is_finite() {
            return None;
        }
        let start_x = match self.phase {
            Phase::Idle => return None,
            Phase::Pressed { start_x } => {
                if self.range <= 0.0 || (x - start_x).abs() < self.cfg.drag_threshold_px {
                    return None;
                }
                self.phase = Phase::Dragging { start_x };
                tracing::trace!("carousel drag started");
                start_x
            }
            Phase::Dragging { start_x } => start_x,
        };
        self.push_sample(t_secs, x);
        self.current = self.elastic_clamp(self.committed + (x - start_x));
        Some(self.current)
    }

    fn push_sample(&mut self, t: f64, x: f64) {
        if self.samples.len() == self.samples.inline_size() {
            self.samples.remove(0);
        }
        self.samples.push(VelocitySample { t, x });
    }

    /// Pointer velocity over the window ending at `release_t`. A pointer that rested longer
    /// than the window before letting go has no velocity.
    fn release_velocity(&self, release_t: f64) -> f64 {
        let Some(last) = self.samples.last().copied() else {
            return 0.0;
        };
        let release_t = if release_t.is_finite() {
            release_t.max(last.t)
        } else {
            last.t
        };
        let window_start = release_t - self.cfg.velocity_window_secs;
        let Some(first) = self.samples.iter().find(|s| s.t >= window_start).copied() else {
            return 0.0;
        };
        let dt = release_t - first.t;
        if dt <= 0.0 {
            return 0.0;
        }
        let max = self.cfg.max_velocity_px_per_sec;
        ((last.x - first.x) / dt).clamp(-max, max)
    }

    /// End the drag with momentum. `None` when no drag was in progress.
    #[tracing::instrument(skip(self))]
    pub fn pointer_up(&mut self, t_secs: f64) -> Option<DragCommit> {
        self.finish(t_secs, true)
    }

    /// End the drag without momentum (pointer cancel, lost capture).
    pub fn pointer_cancel(&mut self, t_secs: f64) -> Option<DragCommit> {
        self.finish(t_secs, false)
    }

    fn finish(&mut self, t_secs: f64, with_momentum: bool) -> Option<DragCommit> {
        let was_dragging = self.is_dragging();
        self.phase = Phase::Idle;
        if !was_dragging {
            self.samples.clear();
            return None;
        }

        let velocity = if with_momentum {
            self.release_velocity(t_secs)
        } else {
            0.0
        };
        let release = self.current;
        let carry =
            self.cfg.momentum_power * velocity * self.cfg.momentum_time_constant_secs;
        let rest = self.hard_clamp(release + carry);
        let glide = Inertia::new(release, rest, self.cfg.momentum_time_constant_secs);

        self.committed = rest;
        self.current = rest;
        self.samples.clear();
        self.glide = Some((glide, t_secs));
        tracing::debug!(release, rest, velocity, "carousel drag committed");

        Some(DragCommit {
            release_offset_px: release,
            committed_offset_px: rest,
            release_velocity_px_per_sec: velocity,
            glide,
        })
    }

    /// Offset to render at `t_secs`: live drag, glide toward rest, or the committed offset.
    pub fn render_offset(&mut self, t_secs: f64) -> f64 {
        if self.is_dragging() {
            return self.current;
        }
        if let Some((glide, started)) = self.glide {
            let elapsed = t_secs - started;
            if glide.is_settled(elapsed) {
                self.glide = None;
            } else {
                return glide.sample(elapsed);
            }
        }
        self.committed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/carousel/drag.rs"]
mod tests;
