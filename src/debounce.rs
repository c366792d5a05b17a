//! Cooldown gate for wheel-driven navigation.

use tracing::trace;

/// Minimum time between two accepted wheel gestures
pub const DEFAULT_COOLDOWN_MS: u64 = 1_000;

/// Wheel delta magnitude a gesture must exceed to count
pub const DEFAULT_THRESHOLD: f64 = 50.0;

/// What a wheel gesture asks the navigator to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelGesture {
    Advance,
    Retreat,
    Reject,
}

#[derive(Debug, Clone)]
pub struct WheelDebouncer {
    cooldown_ms: u64,
    threshold: f64,
    /// Timestamp (ms) of the last accepted gesture
    last_accepted: Option<u64>,
}

impl Default for WheelDebouncer {
    fn default() -> Self {
        WheelDebouncer::new(DEFAULT_COOLDOWN_MS, DEFAULT_THRESHOLD)
    }
}

impl WheelDebouncer {
    pub fn new(cooldown_ms: u64, threshold: f64) -> Self {
        WheelDebouncer {
            cooldown_ms,
            threshold: threshold.abs(),
            last_accepted: None,
        }
    }

    pub fn last_accepted(&self) -> Option<u64> {
        self.last_accepted
    }

    /// Whether a gesture at `now_ms` falls inside the cooldown window
    pub fn in_cooldown(&self, now_ms: u64) -> bool {
        self.last_accepted
            .is_some_and(|last| now_ms.saturating_sub(last) < self.cooldown_ms)
    }

    /// Classifies a gesture without recording it.
    pub fn classify(&self, delta_y: f64, now_ms: u64) -> WheelGesture {
        if self.in_cooldown(now_ms) {
            trace!(delta_y, now_ms, "wheel gesture inside cooldown");
            return WheelGesture::Reject;
        }
        if delta_y > self.threshold {
            WheelGesture::Advance
        } else if delta_y < -self.threshold {
            WheelGesture::Retreat
        } else {
            trace!(delta_y, "wheel gesture below threshold");
            WheelGesture::Reject
        }
    }

    /// Starts a new cooldown window at `now_ms`.
    pub fn commit(&mut self, now_ms: u64) {
        self.last_accepted = Some(now_ms);
    }

    /// Classifies a gesture and, if it is accepted, starts the cooldown.
    pub fn try_accept_wheel_gesture(&mut self, delta_y: f64, now_ms: u64) -> WheelGesture {
        let gesture = self.classify(delta_y, now_ms);
        if gesture != WheelGesture::Reject {
            self.commit(now_ms);
        }
        gesture
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn cooldown_blocks_second_gesture() {
        let mut debouncer = WheelDebouncer::default();
        assert_eq!(debouncer.try_accept_wheel_gesture(100.0, 0), WheelGesture::Advance);
        assert_eq!(debouncer.try_accept_wheel_gesture(100.0, 500), WheelGesture::Reject);
        assert_eq!(debouncer.last_accepted(), Some(0));
        assert_eq!(debouncer.try_accept_wheel_gesture(100.0, 1_100), WheelGesture::Advance);
        assert_eq!(debouncer.last_accepted(), Some(1_100));
    }

    #[test]
    fn first_gesture_is_never_blocked() {
        let mut debouncer = WheelDebouncer::default();
        assert_eq!(debouncer.try_accept_wheel_gesture(-80.0, 3), WheelGesture::Retreat);
    }

    #[test]
    fn window_boundary_is_exclusive() {
        let mut debouncer = WheelDebouncer::default();
        debouncer.commit(2_000);
        assert_eq!(debouncer.classify(100.0, 2_999), WheelGesture::Reject);
        assert_eq!(debouncer.classify(100.0, 3_000), WheelGesture::Advance);
    }

    #[test]
    fn threshold_itself_is_jitter() {
        let mut debouncer = WheelDebouncer::default();
        assert_eq!(debouncer.try_accept_wheel_gesture(50.0, 0), WheelGesture::Reject);
        assert_eq!(debouncer.try_accept_wheel_gesture(-50.0, 0), WheelGesture::Reject);
        assert_eq!(debouncer.last_accepted(), None);
    }

    proptest! {
        #[test]
        fn small_gestures_never_touch_the_timestamp(
            deltas in proptest::collection::vec(-50.0f64..=50.0, 1..40),
            start in 0u64..10_000,
        ) {
            let mut debouncer = WheelDebouncer::default();
            for (i, delta) in deltas.into_iter().enumerate() {
                let gesture = debouncer.try_accept_wheel_gesture(delta, start + i as u64 * 700);
                prop_assert_eq!(gesture, WheelGesture::Reject);
            }
            prop_assert_eq!(debouncer.last_accepted(), None);
        }

        #[test]
        fn accepted_gestures_are_at_least_one_window_apart(
            gaps in proptest::collection::vec(0u64..2_500, 1..40),
        ) {
            let mut debouncer = WheelDebouncer::default();
            let mut now = 0;
            let mut previous: Option<u64> = None;
            for gap in gaps {
                now += gap;
                if debouncer.try_accept_wheel_gesture(120.0, now) == WheelGesture::Advance {
                    if let Some(previous) = previous {
                        prop_assert!(now - previous >= DEFAULT_COOLDOWN_MS);
                    }
                    previous = Some(now);
                }
            }
        }
    }
}
