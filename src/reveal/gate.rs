use std::collections::BTreeMap;

use crate::animation::ease::Ease;
use crate::animation::spring::Spring;
use crate::animation::transition::Transition;
use crate::foundation::arena::{Arena, Handle};
use crate::foundation::core::{ElementId, Rect, visible_fraction};
use crate::foundation::error::{SiteError, SiteResult};

/// Handle to a registered reveal gate.
pub type GateHandle = Handle;

/// One-shot gate state. `has_fired` goes false → true once and never back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct AnimationGateState {
    /// The gate has fired.
    pub has_fired: bool,
}

/// Motion played once a gate fires.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EntranceMotion {
    /// Timed, eased fade and slide.
    Tween(Transition),
    /// Spring-driven slide.
    Spring(Spring),
}

impl Default for EntranceMotion {
    fn default() -> Self {
        Self::Tween(Transition {
            duration_secs: 0.5,
            delay_secs: 0.0,
            ease: Ease::EaseOut,
        })
    }
}

/// When a gate fires and what it plays.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Visible fraction of the element required to fire.
    pub amount: f64,
    /// Root margin applied to the viewport on every side before measuring. Negative
    /// values shrink it, so an element must be that far inside the edges to count.
    pub margin_px: f64,
    /// Client-side delay between firing and the start of the motion.
    /// Delay before the motion starts.
    pub delay_secs: f64,
    /// Motion played after the delay.
    pub motion: EntranceMotion,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            amount: 0.4,
            margin_px: 0.0,
            delay_secs: 0.0,
            motion: EntranceMotion::default(),
        }
    }
}

impl RevealConfig {
    /// `amount` within `[0, 1]`, a finite margin and a non-negative delay.
    pub fn validate(&self) -> SiteResult<()> {
        if !self.amount.is_finite() || !(0.0..=1.0).contains(&self.amount) {
            return Err(SiteError::validation("reveal amount must be within [0, 1]"));
        }
        if !self.margin_px.is_finite() {
            return Err(SiteError::validation("reveal margin_px must be finite"));
        }
        if !self.delay_secs.is_finite() || self.delay_secs < 0.0 {
            return Err(SiteError::validation(
                "reveal delay_secs must be finite and >= 0",
            ));
        }
        match self.motion {
            EntranceMotion::Tween(t) => t.validate(),
            EntranceMotion::Spring(s) => s.validate(),
        }
    }
}

/// Emitted the first (and only) time a gate fires.
#[derive(Clone, Debug, PartialEq)]
pub struct GateFired {
    /// Gate that fired.
    pub handle: GateHandle,
    /// Its element.
    pub element: ElementId,
    /// Configured delay before the motion starts.
    pub delay_secs: f64,
}

#[derive(Clone, Debug)]
struct Gate {
    element: ElementId,
    cfg: RevealConfig,
    state: AnimationGateState,
    fired_at: Option<f64>,
}

/// Entrance-animation gates keyed by stable element id.
///
/// Gates are created and torn down with their element; a handle from a removed gate is
/// ignored by every operation.
#[derive(Debug, Default)]
pub struct RevealGates {
    gates: Arena<Gate>,
    by_element: BTreeMap<ElementId, GateHandle>,
}

impl RevealGates {
    /// Create an unfired gate for `element`. One gate per element.
    pub fn register(&mut self, element: ElementId, cfg: RevealConfig) -> SiteResult<GateHandle> {
        cfg.validate()?;
        if self.by_element.contains_key(&element) {
            return Err(SiteError::validation(format!(
                "reveal gate already registered for '{element}'"
            )));
        }
        let handle = self.gates.insert(Gate {
            element: element.clone(),
            cfg,
            state: AnimationGateState::default(),
            fired_at: None,
        });
        self.by_element.insert(element, handle);
        Ok(handle)
    }

    /// Drop a gate; its handle is dead afterwards. Returns false for stale handles.
    pub fn unregister(&mut self, handle: GateHandle) -> bool {
        let Some(gate) = self.gates.remove(handle) else {
            return false;
        };
        self.by_element.remove(&gate.element);
        true
    }

    /// Drop every gate; used on unmount.
    pub fn clear(&mut self) {
        self.gates.clear();
        self.by_element.clear();
    }

    /// Number of live gates.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// No live gates.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Handle of the gate registered for `element`.
    pub fn handle_for(&self, element: &ElementId) -> Option<GateHandle> {
        self.by_element.get(element).copied()
    }

    /// State of a live gate; `None` for stale handles.
    pub fn state(&self, handle: GateHandle) -> Option<AnimationGateState> {
        self.gates.get(handle).map(|g| g.state)
    }

    /// False for stale handles.
    pub fn has_fired(&self, handle: GateHandle) -> bool {
        self.state(handle).is_some_and(|s| s.has_fired)
    }

    /// Elements whose gate has fired, in id order.
    pub fn fired_elements(&self) -> Vec<ElementId> {
        self.by_element
            .iter()
            .filter(|(_, h)| self.has_fired(**h))
            .map(|(e, _)| e.clone())
            .collect()
    }

    /// Feed an intersection ratio observed at `now_secs`.
    pub fn observe_ratio(
        &mut self,
        handle: GateHandle,
        ratio: f64,
        now_secs: f64,
    ) -> Option<GateFired> {
        let gate = self.gates.get_mut(handle)?;
        if gate.state.has_fired {
            return None;
        }
        let ratio = if ratio.is_finite() { ratio.clamp(0.0, 1.0) } else { 0.0 };
        if ratio <= 0.0 || ratio < gate.cfg.amount {
            return None;
        }
        gate.state.has_fired = true;
        gate.fired_at = Some(now_secs);
        tracing::debug!(element = %gate.element, ratio, "entrance gate fired");
        Some(GateFired {
            handle,
            element: gate.element.clone(),
            delay_secs: gate.cfg.delay_secs,
        })
    }

    /// Measure `element` against `viewport` grown (or shrunk) by the gate's margin.
    pub fn observe_rect(
        &mut self,
        handle: GateHandle,
        element: Rect,
        viewport: Rect,
        now_secs: f64,
    ) -> Option<GateFired> {
        let margin = self.gates.get(handle)?.cfg.margin_px;
        let root = viewport.abs().inflate(margin, margin);
        let ratio = if root.width() > 0.0 && root.height() > 0.0 {
            visible_fraction(element, root)
        } else {
            0.0
        };
        self.observe_ratio(handle, ratio, now_secs)
    }

    /// Observe every gate against its current rect; `rects` is keyed by element id.
    pub fn observe_all(
        &mut self,
        rects: &BTreeMap<ElementId, Rect>,
        viewport: Rect,
        now_secs: f64,
    ) -> Vec<GateFired> {
        let targets: Vec<(GateHandle, Rect)> = self
            .gates
            .iter()
            .filter(|(_, g)| !g.state.has_fired)
            .filter_map(|(h, g)| rects.get(&g.element).map(|r| (h, *r)))
            .collect();
        targets
            .into_iter()
            .filter_map(|(h, r)| self.observe_rect(h, r, viewport, now_secs))
            .collect()
    }

    /// Entrance motion progress at `now_secs`: 0 before firing, then the configured motion
    /// from 0 toward 1 (springs may overshoot).
    pub fn entrance_progress(&self, handle: GateHandle, now_secs: f64) -> f64 {
        let Some(gate) = self.gates.get(handle) else {
            return 0.0;
        };
        let Some(fired_at) = gate.fired_at else {
            return 0.0;
        };
        let t = now_secs - fired_at - gate.cfg.delay_secs;
        if t <= 0.0 {
            return 0.0;
        }
        match gate.cfg.motion {
            EntranceMotion::Tween(tr) => tr.progress(t),
            EntranceMotion::Spring(s) => s.sample(0.0, 1.0, 0.0, t),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/gate.rs"]
mod tests;
