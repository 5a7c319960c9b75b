/// Exponential-decay glide from a release position to a resting target.
///
/// The sampled value moves monotonically from `from` toward `to` and never overshoots it.
/// A release inside the elastic overrun starts outside the hard bounds and converges back
/// onto the edge; it is only guaranteed to stay between `from` and `to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Inertia {
    /// Position at release.
    pub from: f64,
    /// Resting position.
    pub to: f64,
    /// Decay time constant.
    pub time_constant_secs: f64,
    /// Remaining distance under which the glide snaps to `to`.
    pub rest_delta: f64,
}

impl Inertia {
    /// Glide from `from` to `to`; the time constant is floored at 1 ms.
    pub fn new(from: f64, to: f64, time_constant_secs: f64) -> Self {
        Self {
            from,
            to,
            time_constant_secs: time_constant_secs.max(1e-3),
            rest_delta: 0.5,
        }
    }

    /// Position `t_secs` after release; snaps to `to` within `rest_delta`.
    pub fn sample(&self, t_secs: f64) -> f64 {
        if t_secs <= 0.0 {
            return self.from;
        }
        let remaining = (self.to - self.from) * (-t_secs / self.time_constant_secs).exp();
        if remaining.abs() <= self.rest_delta {
            return self.to;
        }
        self.to - remaining
    }

    /// Whether the glide has reached `to` by `t_secs`.
    pub fn is_settled(&self, t_secs: f64) -> bool {
        self.sample(t_secs) == self.to
    }

    /// Time after which [`Inertia::sample`] snaps to the target.
    pub fn settle_secs(&self) -> f64 {
        let d = (self.to - self.from).abs();
        if d <= self.rest_delta {
            return 0.0;
        }
        self.time_constant_secs * (d / self.rest_delta).ln()
    }
}
