use crate::foundation::core::non_negative_px;

/// Why the carousel width is being re-measured.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum MeasureReason {
    /// First measure after mounting.
    Mount,
    /// Window resized.
    Resize,
    /// Device rotated.
    OrientationChange,
    /// Cards were added, removed or resized.
    ContentMutation,
    /// A post-mount settle deadline came due.
    SettleTimer,
}

/// Host seam for reading the card row's scroll width and its container's width.
pub trait CarouselMetrics {
    /// Full scroll width of the card row.
    fn content_width(&self) -> f64;
    /// Visible width of the row's container.
    fn viewport_width(&self) -> f64;
}

/// Maximum leftward drag distance for the current layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CarouselExtent {
    /// Measured row width.
    pub content_width: f64,
    /// Measured container width.
    pub viewport_width: f64,
    /// `max(0, content - viewport)`.
    pub draggable_range_px: f64,
}

impl CarouselExtent {
    /// Extent for the given widths; negative or non-finite widths count as 0.
    pub fn measure(content_width: f64, viewport_width: f64) -> Self {
        let content_width = non_negative_px(content_width);
        let viewport_width = non_negative_px(viewport_width);
        Self {
            content_width,
            viewport_width,
            draggable_range_px: (content_width - viewport_width).max(0.0),
        }
    }

    /// Measure through the host.
    pub fn from_metrics(host: &dyn CarouselMetrics) -> Self {
        Self::measure(host.content_width(), host.viewport_width())
    }

    /// The row overflows its container.
    pub fn can_drag(&self) -> bool {
        self.draggable_range_px > 0.0
    }
}

/// Re-measure deadlines after mount, for images that finish loading late.
#[derive(Clone, Debug, PartialEq)]
pub struct SettleSchedule {
    deadlines_ms: Vec<f64>,
    next: usize,
}

impl SettleSchedule {
    /// Deadlines at `mounted_at_ms + delay`; negative or non-finite delays are dropped.
    pub fn new(mounted_at_ms: f64, delays_ms: &[f64]) -> Self {
        let mut deadlines_ms: Vec<f64> = delays_ms
            .iter()
            .filter(|d| d.is_finite() && **d >= 0.0)
            .map(|d| mounted_at_ms + d)
            .collect();
        deadlines_ms.sort_by(f64::total_cmp);
        Self {
            deadlines_ms,
            next: 0,
        }
    }

    /// Earliest deadline not yet consumed.
    pub fn next_deadline_ms(&self) -> Option<f64> {
        self.deadlines_ms.get(self.next).copied()
    }

    /// Consume every deadline at or before `now_ms`; returns how many came due.
    pub fn poll(&mut self, now_ms: f64) -> usize {
        let mut due = 0;
        while let Some(deadline) = self.next_deadline_ms() {
            if deadline > now_ms {
                break;
            }
            self.next += 1;
            due += 1;
        }
        due
    }

    /// Every deadline has been consumed or cancelled.
    pub fn is_exhausted(&self) -> bool {
        self.next >= self.deadlines_ms.len()
    }

    /// Drop the remaining deadlines.
    pub fn cancel(&mut self) {
        self.next = self.deadlines_ms.len();
    }
}

/// Owns the current extent and its settle schedule.
#[derive(Clone, Debug)]
pub struct ExtentTracker {
    extent: CarouselExtent,
    settle: SettleSchedule,
}

impl ExtentTracker {
    /// Zero extent until the first measure.
    pub fn new(mounted_at_ms: f64, settle_delays_ms: &[f64]) -> Self {
        Self {
            extent: CarouselExtent::default(),
            settle: SettleSchedule::new(mounted_at_ms, settle_delays_ms),
        }
    }

    /// Extent from the latest measure.
    pub fn extent(&self) -> CarouselExtent {
        self.extent
    }

    /// Next settle re-measure, if any.
    pub fn next_deadline_ms(&self) -> Option<f64> {
        self.settle.next_deadline_ms()
    }

    /// Re-measure through `host`. Returns the new extent when the draggable range changed.
    #[tracing::instrument(skip(self, host))]
    pub fn recompute(
        &mut self,
        reason: MeasureReason,
        host: &dyn CarouselMetrics,
    ) -> Option<CarouselExtent> {
        let next = CarouselExtent::from_metrics(host);
        let changed = next.draggable_range_px != self.extent.draggable_range_px;
        self.extent = next;
        if changed {
            tracing::debug!(range = next.draggable_range_px, "carousel extent changed");
            Some(next)
        } else {
            None
        }
    }

    /// Run any settle re-measures due at `now_ms`.
    pub fn poll(&mut self, now_ms: f64, host: &dyn CarouselMetrics) -> Option<CarouselExtent> {
        if self.settle.poll(now_ms) == 0 {
            return None;
        }
        self.recompute(MeasureReason::SettleTimer, host)
    }

    /// Cancel pending settle re-measures; used on unmount.
    pub fn cancel_timers(&mut self) {
        self.settle.cancel();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/carousel/extent.rs"]
mod tests;
