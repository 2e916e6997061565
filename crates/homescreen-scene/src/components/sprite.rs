use glam::Vec2;
use crate::api::types::SurfaceId;
use crate::components::surface::Surface;
use crate::core::frame::FrameScheduler;
use crate::core::physics::{Motion, Physics};
use crate::core::time::TimeWindow;

/// A value a tween can drive. Physics runs per component.
pub trait Tweenable: Copy + PartialEq {
    fn step(physics: Physics, elapsed: f32, from: Self, current: Self, to: Self) -> Self;
}

impl Tweenable for f32 {
    #[inline]
    fn step(physics: Physics, elapsed: f32, from: f32, current: f32, to: f32) -> f32 {
        physics.apply(elapsed, from, current, to)
    }
}

impl Tweenable for Vec2 {
    #[inline]
    fn step(physics: Physics, elapsed: f32, from: Vec2, current: Vec2, to: Vec2) -> Vec2 {
        Vec2::new(
            physics.apply(elapsed, from.x, current.x, to.x),
            physics.apply(elapsed, from.y, current.y, to.y),
        )
    }
}

/// State of one animated attribute.
#[derive(Debug, Clone, Copy)]
pub enum Tween<T> {
    Idle,
    InFlight {
        window: TimeWindow,
        from: T,
        to: T,
        physics: Physics,
    },
}

impl<T: Tweenable> Tween<T> {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Tween::InFlight { .. })
    }

    /// Advance `value` to `now`. Returns whether the tween is still running.
    fn sample(&mut self, value: &mut T, now: f64) -> bool {
        let Tween::InFlight { window, from, to, physics } = *self else {
            return false;
        };
        let elapsed = window.elapsed(now);
        *value = T::step(physics, elapsed, from, *value, to);
        if elapsed >= 1.0 {
            *self = Tween::Idle;
            return false;
        }
        true
    }
}

/// A positioned, scaled, drawable unit of the scene graph.
///
/// Position and scale animate independently. Starting a new tween on an
/// attribute replaces the running one, starting from the current value.
#[derive(Debug, Clone)]
pub struct Sprite {
    surface: Option<SurfaceId>,
    width: f32,
    height: f32,
    pos: Vec2,
    scale: f32,
    movement: Tween<Vec2>,
    scaling: Tween<f32>,
}

impl Sprite {
    /// Create an idle sprite without a surface.
    pub fn new(pos: Vec2, scale: f32) -> Self {
        Self {
            surface: None,
            width: 0.0,
            height: 0.0,
            pos,
            scale,
            movement: Tween::Idle,
            scaling: Tween::Idle,
        }
    }

    /// Builder form of `attach_surface` for sprites not yet in a scene.
    pub fn with_surface(mut self, surface: &impl Surface) -> Self {
        self.set_surface(surface);
        self
    }

    /// Back this sprite with `surface` and request a repaint.
    pub fn attach_surface(&mut self, surface: &impl Surface, frames: &impl FrameScheduler) {
        self.set_surface(surface);
        frames.request_frame();
    }

    fn set_surface(&mut self, surface: &impl Surface) {
        self.surface = Some(surface.id());
        self.width = surface.width();
        self.height = surface.height();
    }

    /// Move to `target`. With an animated `motion` and a changed target a
    /// tween starts at the host's animation time; otherwise the position is
    /// set at once and any running move is dropped.
    pub fn set_position(
        &mut self,
        target: Vec2,
        motion: Option<Motion>,
        frames: &impl FrameScheduler,
    ) {
        start_or_set(&mut self.movement, &mut self.pos, target, motion, frames);
    }

    /// Scale to `target`, with the same rules as `set_position`.
    pub fn set_scale(&mut self, target: f32, motion: Option<Motion>, frames: &impl FrameScheduler) {
        start_or_set(&mut self.scaling, &mut self.scale, target, motion, frames);
    }

    /// Freeze where the sprite currently is.
    pub fn stop_animation(&mut self) {
        self.movement = Tween::Idle;
        self.scaling = Tween::Idle;
    }

    /// Advance running tweens to `now`. Returns true while any is in flight.
    pub fn sample(&mut self, now: f64) -> bool {
        let moving = self.movement.sample(&mut self.pos, now);
        let scaling = self.scaling.sample(&mut self.scale, now);
        moving || scaling
    }

    pub fn is_animating(&self) -> bool {
        self.movement.is_in_flight() || self.scaling.is_in_flight()
    }

    /// Whether `point` lies in the sprite's unscaled surface rectangle.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.pos.x
            && point.x < self.pos.x + self.width
            && point.y >= self.pos.y
            && point.y < self.pos.y + self.height
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn surface(&self) -> Option<SurfaceId> {
        self.surface
    }

    pub fn movement(&self) -> &Tween<Vec2> {
        &self.movement
    }

    pub fn scaling(&self) -> &Tween<f32> {
        &self.scaling
    }
}

impl Default for Sprite {
    fn default() -> Self {
        Self::new(Vec2::ZERO, 1.0)
    }
}

fn start_or_set<T: Tweenable>(
    tween: &mut Tween<T>,
    value: &mut T,
    target: T,
    motion: Option<Motion>,
    frames: &impl FrameScheduler,
) {
    match motion {
        Some(motion) if motion.is_animated() && *value != target => {
            *tween = Tween::InFlight {
                window: TimeWindow::starting_at(frames.animation_start_time(), motion.duration_ms),
                from: *value,
                to: target,
                physics: motion.physics,
            };
            frames.request_frame();
        }
        _ => {
            *value = target;
            *tween = Tween::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::surface::SurfaceInfo;
    use crate::core::frame::ManualScheduler;

    fn linear(duration: f64) -> Option<Motion> {
        Some(Motion::new(duration).with_physics(Physics::Linear))
    }

    #[test]
    fn linear_move_scenario() {
        let frames = ManualScheduler::at(0.0);
        let mut sprite = Sprite::default();

        sprite.set_position(Vec2::new(100.0, 0.0), linear(1000.0), &frames);
        assert_eq!(frames.requests(), 1);
        // Nothing moves until sampled.
        assert_eq!(sprite.pos(), Vec2::ZERO);

        assert!(sprite.sample(500.0));
        assert_eq!(sprite.pos(), Vec2::new(50.0, 0.0));

        assert!(!sprite.sample(1000.0));
        assert_eq!(sprite.pos(), Vec2::new(100.0, 0.0));
        assert!(!sprite.movement().is_in_flight());
    }

    #[test]
    fn in_range_sample_is_strictly_between() {
        let frames = ManualScheduler::at(0.0);
        let mut sprite = Sprite::default();
        sprite.set_position(Vec2::new(100.0, 40.0), linear(1000.0), &frames);
        sprite.sample(999.0);
        let p = sprite.pos();
        assert!(p.x > 0.0 && p.x < 100.0);
        assert!(p.y > 0.0 && p.y < 40.0);
    }

    #[test]
    fn late_sample_lands_on_target() {
        let frames = ManualScheduler::at(0.0);
        let mut sprite = Sprite::default();
        sprite.set_position(Vec2::new(30.0, 70.0), Some(Motion::new(100.0)), &frames);
        assert!(!sprite.sample(5000.0));
        assert_eq!(sprite.pos(), Vec2::new(30.0, 70.0));
    }

    #[test]
    fn backwards_time_completes() {
        let frames = ManualScheduler::at(1000.0);
        let mut sprite = Sprite::default();
        sprite.set_scale(2.0, Some(Motion::new(500.0)), &frames);
        assert!(!sprite.sample(10.0));
        assert_eq!(sprite.scale(), 2.0);
        assert!(!sprite.scaling().is_in_flight());
    }

    #[test]
    fn spring_depends_on_sample_history() {
        let frames = ManualScheduler::at(0.0);
        let mut once = Sprite::default();
        let mut twice = Sprite::default();
        once.set_scale(2.0, Some(Motion::new(1000.0)), &frames);
        twice.set_scale(2.0, Some(Motion::new(1000.0)), &frames);

        once.sample(500.0);
        twice.sample(250.0);
        twice.sample(500.0);

        assert!((once.scale() - 1.5).abs() < 1e-6);
        // 1.0 -> 1.25 -> 1.25 + 0.75 * 0.5
        assert!((twice.scale() - 1.625).abs() < 1e-6);
    }

    #[test]
    fn immediate_set_clears_running_tween() {
        let frames = ManualScheduler::at(0.0);
        let mut sprite = Sprite::default();
        sprite.set_position(Vec2::new(100.0, 0.0), linear(1000.0), &frames);
        sprite.set_position(Vec2::new(5.0, 5.0), None, &frames);
        assert_eq!(sprite.pos(), Vec2::new(5.0, 5.0));
        assert!(!sprite.is_animating());
        assert_eq!(frames.requests(), 1);
    }

    #[test]
    fn unchanged_target_does_not_animate() {
        let frames = ManualScheduler::at(0.0);
        let mut sprite = Sprite::new(Vec2::new(10.0, 10.0), 1.0);
        sprite.set_position(Vec2::new(10.0, 10.0), Some(Motion::new(300.0)), &frames);
        sprite.set_scale(1.0, Some(Motion::new(300.0)), &frames);
        assert!(!sprite.is_animating());
        assert_eq!(frames.requests(), 0);
    }

    #[test]
    fn retarget_restarts_from_current_value() {
        let frames = ManualScheduler::at(0.0);
        let mut sprite = Sprite::default();
        sprite.set_position(Vec2::new(100.0, 0.0), linear(1000.0), &frames);
        sprite.sample(500.0);

        frames.set_time(500.0);
        sprite.set_position(Vec2::new(0.0, 0.0), linear(1000.0), &frames);
        match *sprite.movement() {
            Tween::InFlight { window, from, to, .. } => {
                assert_eq!(from, Vec2::new(50.0, 0.0));
                assert_eq!(to, Vec2::ZERO);
                assert_eq!(window, TimeWindow::starting_at(500.0, 1000.0));
            }
            Tween::Idle => panic!("expected a running move"),
        }
        sprite.sample(1000.0);
        assert_eq!(sprite.pos(), Vec2::new(25.0, 0.0));
    }

    #[test]
    fn stop_animation_freezes_and_is_idempotent() {
        let frames = ManualScheduler::at(0.0);
        let mut sprite = Sprite::default();
        sprite.set_position(Vec2::new(100.0, 0.0), linear(1000.0), &frames);
        sprite.set_scale(3.0, linear(1000.0), &frames);
        sprite.sample(250.0);
        let frozen = (sprite.pos(), sprite.scale());

        sprite.stop_animation();
        assert!(!sprite.is_animating());
        sprite.stop_animation();
        assert!(!sprite.is_animating());

        assert!(!sprite.sample(600.0));
        assert_eq!((sprite.pos(), sprite.scale()), frozen);
    }

    #[test]
    fn move_and_scale_are_independent() {
        let frames = ManualScheduler::at(0.0);
        let mut sprite = Sprite::default();
        sprite.set_position(Vec2::new(100.0, 0.0), linear(1000.0), &frames);
        sprite.set_scale(2.0, linear(200.0), &frames);

        assert!(sprite.sample(200.0));
        assert_eq!(sprite.scale(), 2.0);
        assert!(!sprite.scaling().is_in_flight());
        assert!(sprite.movement().is_in_flight());
    }

    #[test]
    fn attach_surface_reads_size_and_requests_frame() {
        let frames = ManualScheduler::new();
        let mut sprite = Sprite::default();
        sprite.attach_surface(&SurfaceInfo::new(SurfaceId(7), 64.0, 32.0), &frames);
        assert_eq!(sprite.surface(), Some(SurfaceId(7)));
        assert_eq!((sprite.width(), sprite.height()), (64.0, 32.0));
        assert_eq!(frames.requests(), 1);
    }

    #[test]
    fn contains_uses_half_open_bounds() {
        let sprite = Sprite::new(Vec2::new(10.0, 10.0), 1.0)
            .with_surface(&SurfaceInfo::new(SurfaceId(1), 50.0, 50.0));
        assert!(sprite.contains(Vec2::new(10.0, 10.0)));
        assert!(sprite.contains(Vec2::new(59.9, 59.9)));
        assert!(!sprite.contains(Vec2::new(60.0, 30.0)));
        assert!(!Sprite::default().contains(Vec2::ZERO));
    }
}
