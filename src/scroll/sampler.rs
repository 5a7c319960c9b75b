use crate::foundation::arena::{Arena, Handle};
use crate::foundation::core::non_negative_px;

/// Latest vertical scroll offset, in pixels from the document top.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollState {
    /// `window.scrollY`, never negative.
    pub scroll_y: f64,
}

/// Subscription handle returned by [`ScrollSampler::subscribe`].
pub type Subscription = Handle;

/// Host-side listener transition the caller must apply after a (un)subscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenerChange {
    /// First dependent arrived: register a passive scroll listener.
    Attach,
    /// Last dependent left: release the listener.
    Detach,
    /// Nothing for the host to do.
    Unchanged,
}

/// Single shared scroll listener fanned out to keyed dependents.
///
/// Dependents never attach their own listeners; they subscribe with a key and receive the
/// current [`ScrollState`] once at subscription and on every subsequent sample.
#[derive(Debug)]
pub struct ScrollSampler<K> {
    state: ScrollState,
    dependents: Arena<K>,
    listening: bool,
}

impl<K> Default for ScrollSampler<K> {
    fn default() -> Self {
        Self {
            state: ScrollState::default(),
            dependents: Arena::default(),
            listening: false,
        }
    }
}

impl<K: Clone> ScrollSampler<K> {
    /// Sampler seeded with the offset at mount.
    pub fn new(initial_scroll_y: f64) -> Self {
        Self {
            state: ScrollState {
                scroll_y: non_negative_px(initial_scroll_y),
            },
            ..Self::default()
        }
    }

    /// Latest sample.
    pub fn state(&self) -> ScrollState {
        self.state
    }

    /// The host listener is attached.
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Live subscriptions.
    pub fn dependent_count(&self) -> usize {
        self.dependents.len()
    }

    /// Register a dependent. Returns its subscription, the initial emission, and whether the
    /// host listener must now be attached.
    pub fn subscribe(&mut self, key: K) -> (Subscription, ScrollState, ListenerChange) {
        let sub = self.dependents.insert(key);
        let change = if self.listening {
            ListenerChange::Unchanged
        } else {
            self.listening = true;
            tracing::debug!("scroll listener attached");
            ListenerChange::Attach
        };
        (sub, self.state, change)
    }

    /// Drop a dependent; stale subscriptions are ignored.
    pub fn unsubscribe(&mut self, sub: Subscription) -> ListenerChange {
        if self.dependents.remove(sub).is_none() {
            return ListenerChange::Unchanged;
        }
        if self.dependents.is_empty() && self.listening {
            self.listening = false;
            tracing::debug!("scroll listener released");
            return ListenerChange::Detach;
        }
        ListenerChange::Unchanged
    }

    /// Drop every dependent (unmount).
    pub fn release_all(&mut self) -> ListenerChange {
        self.dependents.clear();
        if self.listening {
            self.listening = false;
            tracing::debug!("scroll listener released");
            return ListenerChange::Detach;
        }
        ListenerChange::Unchanged
    }

    /// Record a host scroll event and return the dependents to notify, in subscription-slot
    /// order. Samples arriving while no listener is attached are ignored.
    pub fn sample(&mut self, raw_scroll_y: f64) -> (ScrollState, Vec<(Subscription, K)>) {
        if !self.listening {
            return (self.state, Vec::new());
        }
        self.state = ScrollState {
            scroll_y: non_negative_px(raw_scroll_y),
        };
        let targets = self
            .dependents
            .iter()
            .map(|(h, k)| (h, k.clone()))
            .collect();
        (self.state, targets)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/sampler.rs"]
mod tests;
