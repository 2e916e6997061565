// extensions/mod.rs
//
// Optional pieces layered on top of the core physics.

pub mod easing;

pub use easing::{Easing, lerp};
