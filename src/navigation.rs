//! Section navigation: the current section and every way it can change.
//!
//! All transitions funnel through [`Navigator::transition_to`], which updates
//! the current section and then synchronously notifies subscribers in the
//! order they subscribed.

use crate::debounce::{WheelDebouncer, WheelGesture};
use crate::section::{Section, SectionError};
use tracing::{debug, trace, warn};

/// What wheel navigation does at the first and last section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WheelBoundary {
    /// Past the last section comes the first again
    #[default]
    Wrap,
    /// Wheel gestures past either end are ignored
    Clamp,
}

/// A published change of the current section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionChange {
    pub previous: Section,
    pub current: Section,
}

/// Discrete navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Next,
    Previous,
}

/// Handle returned by [`Navigator::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(usize);

type Subscriber = Box<dyn FnMut(SectionChange)>;

pub struct Navigator {
    current: Section,
    boundary: WheelBoundary,
    debouncer: WheelDebouncer,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: usize,
}

impl Navigator {
    pub fn new(initial: Section, debouncer: WheelDebouncer, boundary: WheelBoundary) -> Self {
        Navigator {
            current: initial,
            boundary,
            debouncer,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn current(&self) -> Section {
        self.current
    }

    pub fn debouncer(&self) -> &WheelDebouncer {
        &self.debouncer
    }

    /// Registers a callback run after every transition
    pub fn subscribe(&mut self, subscriber: impl FnMut(SectionChange) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Removes a subscriber; returns whether it was registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(subscription, _)| *subscription != id);
        self.subscribers.len() != before
    }

    /// Makes `target` current and notifies every subscriber.
    ///
    /// Re-selecting the current section changes nothing and notifies no one.
    pub fn transition_to(&mut self, target: Section) -> SectionChange {
        let change = SectionChange {
            previous: self.current,
            current: target,
        };
        if change.previous == change.current {
            return change;
        }
        self.current = target;
        debug!(from = %change.previous, to = %change.current, "section transition");
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(change);
        }
        change
    }

    /// Moves to the following section, wrapping at the end
    pub fn advance(&mut self) -> SectionChange {
        self.transition_to(self.current.successor())
    }

    /// Moves to the preceding section, wrapping at the start
    pub fn retreat(&mut self) -> SectionChange {
        self.transition_to(self.current.predecessor())
    }

    /// Explicit selection from the UI; never rate-limited
    pub fn select_direct(&mut self, section: Section) -> SectionChange {
        self.transition_to(section)
    }

    /// Selects a section by an externally supplied name.
    ///
    /// Unknown names leave the state untouched.
    pub fn select_by_name(&mut self, name: &str) -> Result<SectionChange, SectionError> {
        match name.parse::<Section>() {
            Ok(section) => Ok(self.select_direct(section)),
            Err(err) => {
                warn!(%err, "ignoring section selection");
                Err(err)
            }
        }
    }

    /// One key press, one transition
    pub fn on_key(&mut self, key: NavKey) -> SectionChange {
        match key {
            NavKey::Next => self.advance(),
            NavKey::Previous => self.retreat(),
        }
    }

    /// Feeds a wheel gesture through the debouncer.
    ///
    /// Returns the transition if the gesture was accepted. A gesture clamped at
    /// either end does not start the cooldown.
    pub fn on_wheel(&mut self, delta_y: f64, now_ms: u64) -> Option<SectionChange> {
        let target = match self.debouncer.classify(delta_y, now_ms) {
            WheelGesture::Reject => return None,
            WheelGesture::Advance => match self.boundary {
                WheelBoundary::Wrap => Some(self.current.successor()),
                WheelBoundary::Clamp => self.current.next(),
            },
            WheelGesture::Retreat => match self.boundary {
                WheelBoundary::Wrap => Some(self.current.predecessor()),
                WheelBoundary::Clamp => self.current.previous(),
            },
        };
        let Some(target) = target else {
            trace!(section = %self.current, delta_y, "wheel gesture clamped at boundary");
            return None;
        };
        self.debouncer.commit(now_ms);
        Some(self.transition_to(target))
    }
}
