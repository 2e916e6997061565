//! Interpolation strategies used by sprite tweens.
//!
//! Every strategy maps `(elapsed, start, current, target)` to the next
//! sampled value, with `elapsed` in [0, 1]. They are pure: the only state
//! lives in the caller, which feeds the previous output back as `current`.

use serde::{Deserialize, Serialize};
use crate::extensions::easing::{lerp, Easing};

/// Signature shared by all physics strategies:
/// `(elapsed, start, current, target) -> value`.
pub type PhysicsFn = fn(f32, f32, f32, f32) -> f32;

/// How a tweened value approaches its target.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Physics {
    /// `start + (target - start) * elapsed`. Depends on elapsed time only.
    Linear,
    /// `current + (target - current) * elapsed`. Recurrence on the last
    /// sampled value, so the curve depends on how often it is sampled.
    #[default]
    Spring,
    /// `start + (target - start) * easing(elapsed)`.
    Eased(Easing),
    /// Any host-supplied function with the shared signature.
    #[serde(skip)]
    Custom(PhysicsFn),
}

impl Physics {
    /// Sample the strategy. Returns exactly `target` once `elapsed >= 1`.
    #[inline]
    pub fn apply(self, elapsed: f32, start: f32, current: f32, target: f32) -> f32 {
        if elapsed >= 1.0 {
            return target;
        }
        match self {
            Physics::Linear => linear(elapsed, start, current, target),
            Physics::Spring => spring(elapsed, start, current, target),
            Physics::Eased(easing) => lerp(start, target, easing.apply(elapsed)),
            Physics::Custom(f) => f(elapsed, start, current, target),
        }
    }

    /// Parse a host-facing name ("linear", "spring", or an easing name).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "linear" => Some(Physics::Linear),
            "spring" => Some(Physics::Spring),
            other => Easing::from_name(other).map(Physics::Eased),
        }
    }
}

/// Linear strategy as a plain function.
#[inline]
pub fn linear(elapsed: f32, start: f32, _current: f32, target: f32) -> f32 {
    start + (target - start) * elapsed
}

/// Spring strategy as a plain function. Not a damped spring: it closes a
/// fraction `elapsed` of the remaining distance on every sample.
#[inline]
pub fn spring(elapsed: f32, _start: f32, current: f32, target: f32) -> f32 {
    current + (target - current) * elapsed
}

/// Optional tween parameters for `Sprite::set_position` / `Sprite::set_scale`.
#[derive(Debug, Clone, Copy)]
pub struct Motion {
    /// Tween length in milliseconds.
    pub duration_ms: f64,
    pub physics: Physics,
}

impl Motion {
    /// A motion using the default (Spring) physics.
    pub fn new(duration_ms: f64) -> Self {
        Self {
            duration_ms,
            physics: Physics::default(),
        }
    }

    pub fn with_physics(mut self, physics: Physics) -> Self {
        self.physics = physics;
        self
    }

    /// A zero, negative, or NaN duration means "set immediately".
    pub fn is_animated(&self) -> bool {
        self.duration_ms > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_converge_at_completion() {
        for &(s, c, t) in &[(0.0, 3.0, 100.0), (0.1, 0.2, 0.3), (-7.5, 12.0, 1e6)] {
            assert_eq!(Physics::Linear.apply(1.0, s, c, t), t);
            assert_eq!(Physics::Spring.apply(1.0, s, c, t), t);
        }
    }

    #[test]
    fn at_zero_linear_is_start_spring_is_current() {
        assert_eq!(Physics::Linear.apply(0.0, 10.0, 40.0, 100.0), 10.0);
        assert_eq!(Physics::Spring.apply(0.0, 10.0, 40.0, 100.0), 40.0);
    }

    #[test]
    fn linear_ignores_current() {
        let a = Physics::Linear.apply(0.25, 0.0, 5.0, 100.0);
        let b = Physics::Linear.apply(0.25, 0.0, 80.0, 100.0);
        assert_eq!(a, 25.0);
        assert_eq!(a, b);
    }

    #[test]
    fn spring_closes_fraction_of_remaining_distance() {
        let v = Physics::Spring.apply(0.5, 0.0, 60.0, 100.0);
        assert!((v - 80.0).abs() < 1e-5);
    }

    #[test]
    fn custom_function_is_used() {
        fn halfway(_e: f32, s: f32, _c: f32, t: f32) -> f32 {
            (s + t) / 2.0
        }
        let p = Physics::Custom(halfway);
        assert_eq!(p.apply(0.1, 0.0, 0.0, 10.0), 5.0);
        // Completion still pins the target.
        assert_eq!(p.apply(1.0, 0.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn names_resolve() {
        assert!(matches!(Physics::from_name("linear"), Some(Physics::Linear)));
        assert!(matches!(Physics::from_name("spring"), Some(Physics::Spring)));
        assert!(matches!(
            Physics::from_name("back_out"),
            Some(Physics::Eased(Easing::BackOut))
        ));
        assert!(Physics::from_name("wobble").is_none());
    }

    #[test]
    fn motion_defaults_to_spring() {
        let m = Motion::new(300.0);
        assert!(matches!(m.physics, Physics::Spring));
        assert!(m.is_animated());
        assert!(!Motion::new(0.0).is_animated());
        assert!(!Motion::new(f64::NAN).is_animated());
    }
}
