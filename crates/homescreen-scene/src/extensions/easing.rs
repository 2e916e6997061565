// extensions/easing.rs
//
// Easing curves for `Physics::Eased`. Pure math over a normalized time.

use std::f32::consts::PI;
use serde::{Deserialize, Serialize};

/// Shape of an eased tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    #[default]
    Linear,
    /// Slow end.
    QuadOut,
    /// Stronger slow end.
    CubicOut,
    /// Slow start and end.
    CubicInOut,
    SineInOut,
    /// Overshoot then settle.
    BackOut,
}

impl Easing {
    /// Map `t` in [0, 1] to eased progress. Input is clamped; BackOut may
    /// exceed 1 before settling.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadOut => 1.0 - (1.0 - t).powi(2),
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t.powi(3)
                } else {
                    1.0 - (2.0 - 2.0 * t).powi(3) / 2.0
                }
            }
            Easing::SineInOut => (1.0 - (PI * t).cos()) / 2.0,
            Easing::BackOut => {
                const OVERSHOOT: f32 = 1.70158;
                let u = t - 1.0;
                1.0 + (OVERSHOOT + 1.0) * u.powi(3) + OVERSHOOT * u.powi(2)
            }
        }
    }

    /// Look up a curve by its snake_case name.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "ease_linear" => Easing::Linear,
            "quad_out" => Easing::QuadOut,
            "cubic_out" => Easing::CubicOut,
            "cubic_in_out" => Easing::CubicInOut,
            "sine_in_out" => Easing::SineInOut,
            "back_out" => Easing::BackOut,
            _ => return None,
        })
    }
}

/// Linearly interpolate between two values.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
