use crate::animation::ease::Ease;
use crate::foundation::error::{SiteError, SiteResult};

/// A timed, eased transition between two scalar values.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transition {
    /// Length of the eased part.
    pub duration_secs: f64,
    /// Wait before progress starts.
    #[serde(default)]
    pub delay_secs: f64,
    /// Curve applied to progress.
    #[serde(default)]
    pub ease: Ease,
}

impl Transition {
    /// Validated constructor.
    pub fn new(duration_secs: f64, delay_secs: f64, ease: Ease) -> SiteResult<Self> {
        let t = Self {
            duration_secs,
            delay_secs,
            ease,
        };
        t.validate()?;
        Ok(t)
    }

    /// Duration and delay must be finite and non-negative.
    pub fn validate(&self) -> SiteResult<()> {
        if !self.duration_secs.is_finite() || self.duration_secs < 0.0 {
            return Err(SiteError::validation(
                "transition duration_secs must be finite and >= 0",
            ));
        }
        if !self.delay_secs.is_finite() || self.delay_secs < 0.0 {
            return Err(SiteError::validation(
                "transition delay_secs must be finite and >= 0",
            ));
        }
        Ok(())
    }

    /// Same transition, starting `extra_secs` later.
    pub fn delayed(self, extra_secs: f64) -> Self {
        Self {
            delay_secs: self.delay_secs + extra_secs.max(0.0),
            ..self
        }
    }

    /// Eased progress in `[0, 1]` at `elapsed_secs` after the transition was started.
    pub fn progress(&self, elapsed_secs: f64) -> f64 {
        let local = elapsed_secs - self.delay_secs;
        if local <= 0.0 {
            return 0.0;
        }
        if self.duration_secs <= 0.0 || local >= self.duration_secs {
            return 1.0;
        }
        self.ease.apply(local / self.duration_secs)
    }

    /// Interpolate `from -> to`; exactly `to` once finished.
    pub fn sample(&self, from: f64, to: f64, elapsed_secs: f64) -> f64 {
        let p = self.progress(elapsed_secs);
        if p >= 1.0 {
            return to;
        }
        from + (to - from) * p
    }

    /// Whether `elapsed_secs` is past delay plus duration.
    pub fn is_finished(&self, elapsed_secs: f64) -> bool {
        elapsed_secs >= self.delay_secs + self.duration_secs
    }

    /// Delay plus duration.
    pub fn total_secs(&self) -> f64 {
        self.delay_secs + self.duration_secs
    }
}
