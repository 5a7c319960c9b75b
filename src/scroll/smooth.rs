use crate::animation::ease::Ease;
use crate::animation::transition::Transition;
use crate::foundation::core::non_negative_px;
use crate::foundation::error::{SiteError, SiteResult};

/// Tuning for programmatic smooth scrolling.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SmoothScrollConfig {
    /// Nominal scroll speed used to derive the duration.
    pub px_per_sec: f64,
    /// Shortest animation.
    pub min_duration_secs: f64,
    /// Longest animation.
    pub max_duration_secs: f64,
    /// Curve applied to the scroll.
    pub ease: Ease,
}

impl Default for SmoothScrollConfig {
    fn default() -> Self {
        Self {
            px_per_sec: 2500.0,
            min_duration_secs: 0.25,
            max_duration_secs: 1.0,
            ease: Ease::InOutCubic,
        }
    }
}

impl SmoothScrollConfig {
    /// Positive speed and `0 <= min <= max`.
    pub fn validate(&self) -> SiteResult<()> {
        if !self.px_per_sec.is_finite() || self.px_per_sec <= 0.0 {
            return Err(SiteError::validation("smooth scroll px_per_sec must be > 0"));
        }
        let (min, max) = (self.min_duration_secs, self.max_duration_secs);
        if !min.is_finite() || !max.is_finite() || min < 0.0 || max < min {
            return Err(SiteError::validation(
                "smooth scroll durations must satisfy 0 <= min <= max",
            ));
        }
        Ok(())
    }
}

/// An in-flight eased scroll from one offset to another.
///
/// Duration scales with distance inside `[min_duration_secs, max_duration_secs]`.
#[derive(Clone, Debug, PartialEq)]
pub struct SmoothScroll {
    from: f64,
    to: f64,
    transition: Transition,
    elapsed_secs: f64,
}

impl SmoothScroll {
    /// Scroll from `from` to `to`; a zero distance finishes immediately.
    pub fn new(from: f64, to: f64, cfg: &SmoothScrollConfig) -> Self {
        let from = non_negative_px(from);
        let to = non_negative_px(to);
        let distance = (to - from).abs();
        let speed = cfg.px_per_sec.max(1.0);
        let duration = (distance / speed).clamp(
            cfg.min_duration_secs.max(0.0),
            cfg.max_duration_secs.max(cfg.min_duration_secs.max(0.0)),
        );
        Self {
            from,
            to,
            transition: Transition {
                duration_secs: if distance == 0.0 { 0.0 } else { duration },
                delay_secs: 0.0,
                ease: cfg.ease,
            },
            elapsed_secs: 0.0,
        }
    }

    /// Destination offset.
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Current offset.
    pub fn position(&self) -> f64 {
        self.transition.sample(self.from, self.to, self.elapsed_secs)
    }

    /// The destination has been reached.
    pub fn is_finished(&self) -> bool {
        self.transition.is_finished(self.elapsed_secs)
    }

    /// Advance by `dt_secs` and return the new offset.
    pub fn advance(&mut self, dt_secs: f64) -> f64 {
        self.elapsed_secs += dt_secs.max(0.0);
        self.position()
    }
}
