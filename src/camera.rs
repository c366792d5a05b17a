//! Camera choreography.
//!
//! Position and rotation are animated independently. A section change starts
//! a new eased tween on each, from wherever the live value is at that instant,
//! replacing any tween still in flight. Every frame the pointer nudges the
//! position and the camera re-aims at [`LOOK_AT_TARGET`].

use crate::math::{look_at, matrix_to_euler, Mat3, Vec3, IDENTITY, UP};
use crate::navigation::SectionChange;
use crate::section::{CameraPose, Section};
use crate::tween::{expo_in_out, EasingFn, Tween};
use std::time::Duration;
use tracing::debug;

/// World point the camera always faces
pub const LOOK_AT_TARGET: Vec3 = [0.0, 0.0, -18.0];

/// Where the camera starts before the first section is framed
pub const INITIAL_POSITION: Vec3 = [0.0, 0.0, 50.0];

pub const DEFAULT_TWEEN_DURATION: Duration = Duration::from_secs(3);

/// Scale from normalized pointer coordinates to world units
const POINTER_GAIN: f64 = 2.0;
/// Fraction of the remaining pointer offset applied per frame
const POINTER_DAMPING: f64 = 0.04;
/// Pull of the position back toward the origin inside the pointer term
const POSITION_PULL: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenPhase {
    Idle,
    Interpolating,
}

/// Pointer position normalized to [-1, 1], x left to right, y bottom to top
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

impl Pointer {
    /// Normalizes a screen position; screen y grows downward.
    pub fn from_screen(column: f64, row: f64, width: f64, height: f64) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Pointer::default();
        }
        Pointer {
            x: ((column / width) * 2.0 - 1.0).clamp(-1.0, 1.0),
            y: (-(row / height) * 2.0 + 1.0).clamp(-1.0, 1.0),
        }
    }
}

/// One animated camera property
#[derive(Debug, Clone, Copy)]
struct AnimatedProperty {
    value: Vec3,
    tween: Option<Tween>,
}

impl AnimatedProperty {
    fn new(value: Vec3) -> Self {
        AnimatedProperty { value, tween: None }
    }

    fn retarget(&mut self, target: Vec3, duration: Duration, easing: EasingFn) {
        self.tween = Some(Tween::new(self.value, target, duration).easing(easing));
    }

    fn advance(&mut self, dt: Duration) {
        if let Some(tween) = self.tween.as_mut() {
            tween.advance(dt);
            self.value = tween.value();
            if tween.is_complete() {
                self.tween = None;
            }
        }
    }

    fn phase(&self) -> TweenPhase {
        if self.tween.is_some() {
            TweenPhase::Interpolating
        } else {
            TweenPhase::Idle
        }
    }
}

/// Camera state handed to the renderer after a frame step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFrame {
    pub position: Vec3,
    /// Camera-to-world rotation; columns are right, up and backward
    pub orientation: Mat3,
    /// `orientation` as XYZ Euler angles
    pub rotation: Vec3,
}

#[derive(Debug, Clone)]
pub struct CameraChoreographer {
    position: AnimatedProperty,
    rotation: AnimatedProperty,
    target: CameraPose,
    pointer: Pointer,
    duration: Duration,
    easing: EasingFn,
    orientation: Mat3,
}

impl Default for CameraChoreographer {
    fn default() -> Self {
        CameraChoreographer::new(DEFAULT_TWEEN_DURATION)
    }
}

impl CameraChoreographer {
    pub fn new(duration: Duration) -> Self {
        let start = CameraPose::new(INITIAL_POSITION, [0.0; 3]);
        CameraChoreographer {
            position: AnimatedProperty::new(start.position),
            rotation: AnimatedProperty::new(start.rotation),
            target: start,
            pointer: Pointer::default(),
            duration,
            easing: expo_in_out,
            orientation: IDENTITY,
        }
    }

    /// Starts framing `section`, superseding any tween in flight
    pub fn frame_section(&mut self, section: Section) {
        let target = section.camera_target();
        debug!(
            %section,
            from = ?self.position.value,
            to = ?target.position,
            "camera retarget"
        );
        self.target = target;
        self.position.retarget(target.position, self.duration, self.easing);
        self.rotation.retarget(target.rotation, self.duration, self.easing);
    }

    pub fn on_section_change(&mut self, change: SectionChange) {
        self.frame_section(change.current);
    }

    pub fn set_pointer(&mut self, pointer: Pointer) {
        self.pointer = pointer;
    }

    pub fn pointer(&self) -> Pointer {
        self.pointer
    }

    /// Pose the current tweens are heading for
    pub fn target(&self) -> CameraPose {
        self.target
    }

    /// Live position and tweened rotation
    pub fn pose(&self) -> CameraPose {
        CameraPose::new(self.position.value, self.rotation.value)
    }

    pub fn position_phase(&self) -> TweenPhase {
        self.position.phase()
    }

    pub fn rotation_phase(&self) -> TweenPhase {
        self.rotation.phase()
    }

    /// Pointer contribution for the next frame at the current position
    pub fn pointer_offset(&self) -> [f64; 2] {
        let position = self.position.value;
        [
            (self.pointer.x * POINTER_GAIN - position[0] * POSITION_PULL) * POINTER_DAMPING,
            (self.pointer.y * POINTER_GAIN - position[1] * POSITION_PULL) * POINTER_DAMPING,
        ]
    }

    /// One frame: step the tweens, blend in the pointer, re-aim.
    pub fn advance(&mut self, dt: Duration) -> CameraFrame {
        self.position.advance(dt);
        self.rotation.advance(dt);

        let offset = self.pointer_offset();
        self.position.value[0] += offset[0];
        self.position.value[1] += offset[1];

        self.orientation = look_at(&self.position.value, &LOOK_AT_TARGET, &UP);
        self.frame()
    }

    /// The camera as of the last frame step
    pub fn frame(&self) -> CameraFrame {
        CameraFrame {
            position: self.position.value,
            orientation: self.orientation,
            rotation: matrix_to_euler(&self.orientation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{multiply_matrix_vector, normalize, subtract};

    const FRAME: Duration = Duration::from_millis(16);

    fn settled_at(section: Section) -> CameraChoreographer {
        let mut camera = CameraChoreographer::default();
        camera.frame_section(section);
        camera.advance(DEFAULT_TWEEN_DURATION);
        camera
    }

    fn assert_looks_at_target(frame: &CameraFrame) {
        let forward = multiply_matrix_vector(&frame.orientation, &[0.0, 0.0, -1.0]);
        let expected = normalize(&subtract(&LOOK_AT_TARGET, &frame.position));
        for i in 0..3 {
            assert!((forward[i] - expected[i]).abs() < 1e-9, "{forward:?} vs {expected:?}");
        }
    }

    #[test]
    fn retarget_uses_section_pose() {
        let mut camera = settled_at(Section::Hero);
        camera.frame_section(Section::Skills);
        assert_eq!(camera.target().position, [0.0, 12.0, 15.0]);
        assert_eq!(camera.target().rotation, [-0.6, 0.0, 0.0]);
        assert_eq!(camera.position_phase(), TweenPhase::Interpolating);
        assert_eq!(camera.rotation_phase(), TweenPhase::Interpolating);
    }

    #[test]
    fn rotation_tween_lands_exactly_and_goes_idle() {
        let mut camera = CameraChoreographer::default();
        camera.frame_section(Section::Projects);
        for _ in 0..200 {
            camera.advance(FRAME);
        }
        assert_eq!(camera.rotation_phase(), TweenPhase::Idle);
        assert_eq!(camera.position_phase(), TweenPhase::Idle);
        assert_eq!(camera.pose().rotation, [0.2, -0.6, 0.0]);
        assert_eq!(camera.pose().position[2], 25.0);
    }

    #[test]
    fn interrupted_tween_restarts_from_live_pose() {
        let mut camera = settled_at(Section::Hero);
        camera.frame_section(Section::Skills);
        for _ in 0..60 {
            camera.advance(FRAME);
        }
        let live = camera.pose();
        assert!(live.position[1] > 0.0 && live.position[1] < 12.0);

        camera.frame_section(Section::Contact);
        assert_eq!(camera.pose(), live);
        assert_eq!(camera.target().position, [0.0, 0.0, 16.0]);

        let mut max_y = live.position[1];
        for _ in 0..250 {
            let frame = camera.advance(FRAME);
            max_y = max_y.max(frame.position[1]);
        }
        assert!(max_y < 12.0, "the Skills pose must never be reached");
        assert_eq!(camera.pose().rotation, [0.0, 0.0, 0.0]);
        assert_eq!(camera.pose().position[2], 16.0);
    }

    #[test]
    fn new_tween_overrides_in_flight_one() {
        let mut camera = CameraChoreographer::default();
        camera.frame_section(Section::Experience);
        camera.advance(Duration::from_secs(1));
        camera.frame_section(Section::Hero);
        camera.advance(DEFAULT_TWEEN_DURATION);
        assert_eq!(camera.pose().rotation, [0.0, 0.0, 0.0]);
        assert_eq!(camera.pose().position[2], 20.0);
    }

    #[test]
    fn centred_pointer_term_decays_to_zero() {
        let mut camera = settled_at(Section::About);
        camera.set_pointer(Pointer::from_screen(40.0, 12.0, 80.0, 24.0));
        assert_eq!(camera.pointer(), Pointer { x: 0.0, y: 0.0 });
        let first = camera.pointer_offset();
        for _ in 0..30_000 {
            camera.advance(FRAME);
        }
        let last = camera.pointer_offset();
        assert!(first[0].abs() > 1e-3);
        assert!(last[0].abs() < 1e-6 && last[1].abs() < 1e-6, "{last:?}");
    }

    #[test]
    fn pointer_pulls_toward_its_side() {
        let mut camera = settled_at(Section::Hero);
        camera.set_pointer(Pointer::from_screen(80.0, 0.0, 80.0, 24.0));
        assert_eq!(camera.pointer(), Pointer { x: 1.0, y: 1.0 });
        let before = camera.pose().position;
        camera.advance(FRAME);
        let after = camera.pose().position;
        assert!((after[0] - before[0] - 0.08).abs() < 1e-9);
        assert!((after[1] - before[1] - 0.08).abs() < 1e-9);
        assert_eq!(after[2], before[2]);
    }

    #[test]
    fn always_aimed_at_the_fixed_point() {
        let mut camera = CameraChoreographer::default();
        camera.set_pointer(Pointer { x: -0.7, y: 0.4 });
        for section in Section::ALL {
            camera.frame_section(section);
            for _ in 0..20 {
                assert_looks_at_target(&camera.advance(FRAME));
            }
        }
        camera.advance(Duration::from_secs(10));
        assert_looks_at_target(&camera.frame());
    }
}
