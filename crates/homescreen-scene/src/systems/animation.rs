use crate::components::sprite::Sprite;

/// Advance every sprite's tweens to `now`.
/// Returns true if any sprite still has a tween in flight. Every sprite is
/// sampled even after the first positive answer.
pub fn animate<'a>(sprites: impl Iterator<Item = &'a mut Sprite>, now: f64) -> bool {
    let mut more = false;
    for sprite in sprites {
        if sprite.sample(now) {
            more = true;
        }
    }
    more
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::frame::ManualScheduler;
    use crate::core::physics::{Motion, Physics};
    use glam::Vec2;

    #[test]
    fn reports_any_in_flight_and_samples_all() {
        let frames = ManualScheduler::at(0.0);
        let mut sprites = vec![Sprite::default(), Sprite::default()];
        let linear = Motion::new(100.0).with_physics(Physics::Linear);
        sprites[0].set_position(Vec2::new(10.0, 0.0), Some(linear), &frames);
        sprites[1].set_position(Vec2::new(0.0, 10.0), Some(Motion { duration_ms: 50.0, ..linear }), &frames);

        assert!(animate(sprites.iter_mut(), 50.0));
        assert_eq!(sprites[0].pos(), Vec2::new(5.0, 0.0));
        assert_eq!(sprites[1].pos(), Vec2::new(0.0, 10.0));

        assert!(!animate(sprites.iter_mut(), 100.0));
        assert_eq!(sprites[0].pos(), Vec2::new(10.0, 0.0));
    }

    #[test]
    fn empty_scene_is_idle() {
        let mut sprites: Vec<Sprite> = Vec::new();
        assert!(!animate(sprites.iter_mut(), 0.0));
    }
}
