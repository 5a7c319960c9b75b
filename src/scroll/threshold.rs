use crate::scroll::sampler::ScrollState;

/// How a [`ScrollThresholdTrigger`] reacts once its condition holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TriggerMode {
    /// Latch on the first sample past the threshold and stop observing.
    Once,
    /// Track `scroll_y > threshold` on every sample.
    Level,
}

/// Result of feeding one scroll sample into a trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThresholdOutcome {
    /// State did not change.
    Unchanged,
    /// The trigger turned on.
    Activated,
    /// A `Level` trigger turned off.
    Deactivated,
}

/// Gate keyed on the raw scroll offset rather than element visibility.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollThresholdTrigger {
    name: String,
    threshold_px: f64,
    mode: TriggerMode,
    active: bool,
}

impl ScrollThresholdTrigger {
    /// Inactive trigger that fires while `scroll_y > threshold_px`.
    pub fn new(name: impl Into<String>, threshold_px: f64, mode: TriggerMode) -> Self {
        Self {
            name: name.into(),
            threshold_px,
            mode,
            active: false,
        }
    }

    /// Latching trigger.
    pub fn once(name: impl Into<String>, threshold_px: f64) -> Self {
        Self::new(name, threshold_px, TriggerMode::Once)
    }

    /// Trigger that follows the scroll both ways.
    pub fn level(name: impl Into<String>, threshold_px: f64) -> Self {
        Self::new(name, threshold_px, TriggerMode::Level)
    }

    /// Name reported in threshold effects.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Latch or level.
    pub fn mode(&self) -> TriggerMode {
        self.mode
    }

    /// Current state.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// A latched `Once` trigger needs no further samples.
    pub fn is_done(&self) -> bool {
        self.mode == TriggerMode::Once && self.active
    }

    /// Feed one scroll sample.
    pub fn observe(&mut self, state: ScrollState) -> ThresholdOutcome {
        if self.is_done() {
            return ThresholdOutcome::Unchanged;
        }
        let past = state.scroll_y > self.threshold_px;
        match (self.active, past) {
            (false, true) => {
                self.active = true;
                tracing::debug!(
                    trigger = %self.name,
                    scroll_y = state.scroll_y,
                    "threshold reached"
                );
                ThresholdOutcome::Activated
            }
            (true, false) if self.mode == TriggerMode::Level => {
                self.active = false;
                ThresholdOutcome::Deactivated
            }
            _ => ThresholdOutcome::Unchanged,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/threshold.rs"]
mod tests;
