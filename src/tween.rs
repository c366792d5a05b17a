//! Time-bounded eased interpolation of a 3D value.
//!
//! A [`Tween`] is driven by explicit [`Tween::advance`] calls, so the same
//! object can be stepped by the render loop, a timer, or a test.

use crate::math::{lerp, Vec3};
use std::time::Duration;

/// Easing function signature: maps `t` in [0, 1] to output in [0, 1].
pub type EasingFn = fn(f64) -> f64;

/// Identity easing (constant velocity).
pub fn linear(t: f64) -> f64 {
    t.clamp(0.0, 1.0)
}

/// Exponential ease-in-out: nearly still at both ends, fast through the middle.
pub fn expo_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t == 0.0 || t == 1.0 {
        t
    } else if t < 0.5 {
        2f64.powf(20.0 * t - 10.0) / 2.0
    } else {
        (2.0 - 2f64.powf(-20.0 * t + 10.0)) / 2.0
    }
}

/// Eased interpolation from `from` to `to` over a fixed duration
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    from: Vec3,
    to: Vec3,
    elapsed: Duration,
    duration: Duration,
    easing: EasingFn,
}

impl Tween {
    /// Create a tween with linear easing.
    pub fn new(from: Vec3, to: Vec3, duration: Duration) -> Self {
        Tween {
            from,
            to,
            elapsed: Duration::ZERO,
            duration: if duration.is_zero() {
                Duration::from_nanos(1)
            } else {
                duration
            },
            easing: linear,
        }
    }

    /// Set the easing function (builder).
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Step the tween forward by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Linear progress before easing, in [0, 1].
    pub fn progress(&self) -> f64 {
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Current interpolated value; exactly `to` once complete.
    pub fn value(&self) -> Vec3 {
        if self.is_complete() {
            return self.to;
        }
        lerp(&self.from, &self.to, (self.easing)(self.progress()))
    }

    pub fn start(&self) -> Vec3 {
        self.from
    }

    pub fn target(&self) -> Vec3 {
        self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expo_in_out_is_symmetric_and_pinned() {
        assert_eq!(expo_in_out(0.0), 0.0);
        assert_eq!(expo_in_out(1.0), 1.0);
        assert!((expo_in_out(0.5) - 0.5).abs() < 1e-12);
        for i in 1..10 {
            let t = i as f64 / 10.0;
            assert!((expo_in_out(t) + expo_in_out(1.0 - t) - 1.0).abs() < 1e-12);
        }
        assert!(expo_in_out(0.1) < 0.01);
    }

    #[test]
    fn tween_reaches_target_exactly() {
        let mut tween = Tween::new([0.0, 0.0, 20.0], [0.0, 12.0, 15.0], Duration::from_secs(3))
            .easing(expo_in_out);
        tween.advance(Duration::from_millis(1500));
        assert!(!tween.is_complete());
        let mid = tween.value();
        assert!((mid[1] - 6.0).abs() < 1e-9);
        tween.advance(Duration::from_millis(1600));
        assert!(tween.is_complete());
        assert_eq!(tween.value(), [0.0, 12.0, 15.0]);
    }

    #[test]
    fn zero_duration_completes_on_first_step() {
        let mut tween = Tween::new([1.0; 3], [2.0; 3], Duration::ZERO);
        assert_eq!(tween.value(), [1.0; 3]);
        tween.advance(Duration::from_nanos(1));
        assert_eq!(tween.value(), [2.0; 3]);
    }
}
