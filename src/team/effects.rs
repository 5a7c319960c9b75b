use crate::animation::ease::Ease;
use crate::animation::transition::Transition;
use crate::foundation::core::{Point, Size};
use crate::foundation::error::{SiteError, SiteResult};
use crate::reveal::gate::{EntranceMotion, RevealConfig};

/// Roster tuning.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TeamConfig {
    /// Raw `scrollY` past which the roster fades in (once).
    pub reveal_scroll_y: f64,
    /// Delay added per roster position.
    pub stagger_secs: f64,
    /// Portrait tilt limit on either axis.
    pub max_tilt_deg: f64,
    /// Gate for the team page blocks (intro copy, founders, roster title and grid).
    pub section_reveal: RevealConfig,
}

impl Default for TeamConfig {
    fn default() -> Self {
        Self {
            reveal_scroll_y: 1000.0,
            stagger_secs: 0.2,
            max_tilt_deg: 10.0,
            section_reveal: RevealConfig {
                amount: 0.0,
                margin_px: -100.0,
                delay_secs: 0.0,
                motion: EntranceMotion::Tween(Transition {
                    duration_secs: 1.5,
                    delay_secs: 0.0,
                    ease: Ease::EaseOut,
                }),
            },
        }
    }
}

impl TeamConfig {
    /// Distances and timings must be finite and non-negative.
    pub fn validate(&self) -> SiteResult<()> {
        for (name, v) in [
            ("reveal_scroll_y", self.reveal_scroll_y),
            ("stagger_secs", self.stagger_secs),
            ("max_tilt_deg", self.max_tilt_deg),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(SiteError::validation(format!(
                    "team {name} must be finite and >= 0"
                )));
            }
        }
        self.section_reveal.validate()
    }

    /// Fade-in delay of the member at `index`.
    pub fn stagger_delay_secs(&self, index: usize) -> f64 {
        index as f64 * self.stagger_secs
    }
}

/// 3D tilt of a member portrait, in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct Tilt {
    /// Rotation about the horizontal axis.
    pub rotate_x_deg: f64,
    /// Rotation about the vertical axis.
    pub rotate_y_deg: f64,
}

impl Tilt {
    /// No rotation.
    pub const FLAT: Tilt = Tilt {
        rotate_x_deg: 0.0,
        rotate_y_deg: 0.0,
    };

    /// Tilt for a pointer at `local` (relative to the card's top-left) over a card of `size`.
    ///
    /// The card leans away from the pointer: top edge → positive `rotate_x`, left edge →
    /// negative `rotate_y`.
    pub fn from_pointer(local: Point, size: Size, max_deg: f64) -> Self {
        let cx = size.width / 2.0;
        let cy = size.height / 2.0;
        if cx <= 0.0 || cy <= 0.0 || !local.x.is_finite() || !local.y.is_finite() {
            return Self::FLAT;
        }
        let rx = ((cy - local.y) / cy) * max_deg;
        let ry = ((cx - local.x) / cx) * -max_deg;
        Self {
            rotate_x_deg: rx.clamp(-max_deg, max_deg),
            rotate_y_deg: ry.clamp(-max_deg, max_deg),
        }
    }

    /// CSS `transform` value with a 500px perspective.
    pub fn css_transform(&self) -> String {
        format!(
            "perspective(500px) rotateX({}deg) rotateY({}deg)",
            self.rotate_x_deg, self.rotate_y_deg
        )
    }
}

/// Pointer tracking over one portrait; leaving resets to flat.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltTracker {
    max_deg: f64,
    tilt: Tilt,
}

impl Default for TiltTracker {
    fn default() -> Self {
        Self::new(TeamConfig::default().max_tilt_deg)
    }
}

impl TiltTracker {
    /// Flat tracker limited to `max_deg` on either axis.
    pub fn new(max_deg: f64) -> Self {
        Self {
            max_deg,
            tilt: Tilt::FLAT,
        }
    }

    /// Current tilt.
    pub fn tilt(&self) -> Tilt {
        self.tilt
    }

    /// Pointer at `local` over a portrait of `size`.
    pub fn pointer_move(&mut self, local: Point, size: Size) -> Tilt {
        self.tilt = Tilt::from_pointer(local, size, self.max_deg);
        self.tilt
    }

    /// Pointer left the portrait.
    pub fn pointer_leave(&mut self) -> Tilt {
        self.tilt = Tilt::FLAT;
        self.tilt
    }
}

/// Whether a member card's modal is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub enum ModalState {
    /// Compact card only.
    #[default]
    Collapsed,
    /// Modal open.
    Expanded,
}

/// What the user interacted with on a member card or its modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalInput {
    /// Click on the compact card.
    CardClick,
    /// Click on the dimmed backdrop.
    BackdropClick,
    /// Click on the modal's close button.
    CloseButton,
    /// Click inside the modal panel; swallowed.
    PanelClick,
}

/// Expand/collapse state for one member card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemberModal {
    state: ModalState,
}

impl MemberModal {
    /// Current state.
    pub fn state(&self) -> ModalState {
        self.state
    }

    /// The modal is open.
    pub fn is_expanded(&self) -> bool {
        self.state == ModalState::Expanded
    }

    /// The compact card ignores input while its modal is open.
    pub fn card_is_interactive(&self) -> bool {
        !self.is_expanded()
    }

    /// Apply `input`; returns whether the state changed.
    pub fn handle(&mut self, input: ModalInput) -> bool {
        let next = match (self.state, input) {
            (ModalState::Collapsed, ModalInput::CardClick) => ModalState::Expanded,
            (ModalState::Expanded, ModalInput::BackdropClick | ModalInput::CloseButton) => {
                ModalState::Collapsed
            }
            (state, _) => state,
        };
        let changed = next != self.state;
        self.state = next;
        changed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/team/effects.rs"]
mod tests;
