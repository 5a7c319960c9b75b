use crate::foundation::error::{SiteError, SiteResult};

/// Damped harmonic spring, sampled analytically.
///
/// `sample` returns the animated value moving from `from` to `to` with an optional initial
/// velocity. Under-, critically- and over-damped regimes are all handled in closed form so
/// sampling is independent of frame rate.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Spring {
    /// Spring constant; must be positive.
    pub stiffness: f64,
    /// Damping coefficient.
    pub damping: f64,
    /// Mass; must be positive.
    pub mass: f64,
}

impl Default for Spring {
    fn default() -> Self {
        // Contact card entrance.
        Self {
            stiffness: 60.0,
            damping: 12.0,
            mass: 1.0,
        }
    }
}

/// Distance from target under which a spring counts as settled.
pub const SPRING_REST_DELTA: f64 = 0.001;

impl Spring {
    /// Reject non-finite or negative parameters and zero stiffness or mass.
    pub fn validate(&self) -> SiteResult<()> {
        for (name, v) in [
            ("stiffness", self.stiffness),
            ("damping", self.damping),
            ("mass", self.mass),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(SiteError::validation(format!(
                    "spring {name} must be finite and >= 0"
                )));
            }
        }
        if self.stiffness == 0.0 || self.mass == 0.0 {
            return Err(SiteError::validation("spring stiffness and mass must be > 0"));
        }
        Ok(())
    }

    fn omega0(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// `< 1` under-damped, `1` critical, `> 1` over-damped.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Value `t_secs` after starting at `from` with `velocity`, heading for `to`.
    pub fn sample(&self, from: f64, to: f64, velocity: f64, t_secs: f64) -> f64 {
        if t_secs <= 0.0 {
            return from;
        }
        let x0 = from - to;
        let w0 = self.omega0();
        let zeta = self.damping_ratio();

        let x = if (zeta - 1.0).abs() < 1e-4 {
            (-w0 * t_secs).exp() * (x0 + (velocity + w0 * x0) * t_secs)
        } else if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let env = (-zeta * w0 * t_secs).exp();
            let (sin, cos) = (wd * t_secs).sin_cos();
            env * (x0 * cos + (velocity + zeta * w0 * x0) / wd * sin)
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - root);
            let r2 = -w0 * (zeta + root);
            let c2 = (velocity - r1 * x0) / (r2 - r1);
            let c1 = x0 - c2;
            c1 * (r1 * t_secs).exp() + c2 * (r2 * t_secs).exp()
        };
        to + x
    }

    /// Whether the spring is within rest tolerance at `t_secs` (conservative envelope test).
    pub fn is_settled(&self, from: f64, to: f64, velocity: f64, t_secs: f64) -> bool {
        let dt = 1.0 / 240.0;
        let a = self.sample(from, to, velocity, t_secs);
        let b = self.sample(from, to, velocity, t_secs + dt);
        (a - to).abs() < SPRING_REST_DELTA && ((b - a) / dt).abs() < SPRING_REST_DELTA * 10.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
