use glam::Vec2;
use crate::api::config::SceneConfig;
use crate::api::types::SpriteId;
use crate::components::sprite::Sprite;
use crate::components::surface::Surface;
use crate::core::frame::FrameScheduler;
use crate::core::physics::Motion;
use crate::renderer::instance::DrawList;
use crate::renderer::traits::Canvas;
use crate::systems::animation::animate;
use crate::systems::render::build_draw_list;

/// Ordered sprite storage plus the frame loop that animates and paints it.
///
/// Insertion order is paint order (back to front). Sprites are addressed by
/// `SpriteId`, so removal never depends on a cached position.
pub struct SceneGraph<S: FrameScheduler, C: Canvas> {
    canvas: C,
    frames: S,
    sprites: Vec<(SpriteId, Sprite)>,
    draw_list: DrawList,
    config: SceneConfig,
    next_id: u32,
    /// Set once ids have wrapped past u32::MAX; new ids must then skip live ones.
    wrapped: bool,
}

impl<S: FrameScheduler, C: Canvas> SceneGraph<S, C> {
    pub fn new(canvas: C, frames: S) -> Self {
        Self::with_config(canvas, frames, SceneConfig::default())
    }

    pub fn with_config(canvas: C, frames: S, config: SceneConfig) -> Self {
        Self {
            canvas,
            frames,
            sprites: Vec::with_capacity(config.initial_capacity),
            draw_list: DrawList::new(),
            config,
            next_id: 1,
            wrapped: false,
        }
    }

    /// Append a sprite on top of the paint order.
    pub fn add(&mut self, sprite: Sprite) -> SpriteId {
        let id = self.allocate_id();
        self.sprites.push((id, sprite));
        log::debug!("scene: added sprite {} ({} total)", id.0, self.sprites.len());
        id
    }

    /// Remove a sprite, keeping the order of the others.
    pub fn remove(&mut self, id: SpriteId) -> Option<Sprite> {
        match self.index_of(id) {
            Some(idx) => {
                let (_, sprite) = self.sprites.remove(idx);
                log::debug!("scene: removed sprite {}", id.0);
                Some(sprite)
            }
            None => {
                log::warn!("scene: remove of unknown sprite {}", id.0);
                None
            }
        }
    }

    fn allocate_id(&mut self) -> SpriteId {
        loop {
            let id = SpriteId(self.next_id);
            // 0 is never handed out.
            self.next_id = match self.next_id.checked_add(1) {
                Some(next) => next,
                None => {
                    self.wrapped = true;
                    1
                }
            };
            if !self.wrapped || self.index_of(id).is_none() {
                return id;
            }
        }
    }

    fn index_of(&self, id: SpriteId) -> Option<usize> {
        self.sprites.iter().position(|(sid, _)| *sid == id)
    }

    pub fn get(&self, id: SpriteId) -> Option<&Sprite> {
        self.sprites.iter().find(|(sid, _)| *sid == id).map(|(_, s)| s)
    }

    pub fn get_mut(&mut self, id: SpriteId) -> Option<&mut Sprite> {
        self.sprites.iter_mut().find(|(sid, _)| *sid == id).map(|(_, s)| s)
    }

    /// Sprites in paint order.
    pub fn iter(&self) -> impl Iterator<Item = (SpriteId, &Sprite)> {
        self.sprites.iter().map(|(id, s)| (*id, s))
    }

    /// Sprite ids in paint order.
    pub fn ids(&self) -> Vec<SpriteId> {
        self.sprites.iter().map(|(id, _)| *id).collect()
    }

    /// Visit every sprite in paint order. The visitor also gets the frame
    /// scheduler so it can start tweens. Not for adding or removing sprites.
    pub fn for_all(&mut self, mut visit: impl FnMut(SpriteId, &mut Sprite, &S)) {
        let frames = &self.frames;
        for (id, sprite) in self.sprites.iter_mut() {
            visit(*id, sprite, frames);
        }
    }

    /// First sprite, in ascending insertion order, whose surface rectangle
    /// holds the point. Points outside the output's client area never match.
    ///
    /// Note this is the reverse of paint order: where sprites overlap, the
    /// one painted underneath wins.
    pub fn sprite_at(&self, x: f32, y: f32) -> Option<SpriteId> {
        let (x, y) = self.canvas.client_rect().to_local(x, y)?;
        let point = Vec2::new(x, y);
        self.sprites
            .iter()
            .find(|(_, s)| s.contains(point))
            .map(|(id, _)| *id)
    }

    /// Call `visit` with the sprite under (x, y), if any. Returns whether
    /// `visit` ran.
    pub fn hit_test(&mut self, x: f32, y: f32, visit: impl FnOnce(SpriteId, &mut Sprite)) -> bool {
        let Some(id) = self.sprite_at(x, y) else {
            return false;
        };
        match self.get_mut(id) {
            Some(sprite) => {
                visit(id, sprite);
                true
            }
            None => false,
        }
    }

    /// A motion of `duration_ms` using the configured default physics.
    pub fn motion(&self, duration_ms: f64) -> Motion {
        Motion::new(duration_ms).with_physics(self.config.default_physics)
    }

    pub fn attach_surface(&mut self, id: SpriteId, surface: &impl Surface) -> bool {
        let frames = &self.frames;
        match self.sprites.iter_mut().find(|(sid, _)| *sid == id) {
            Some((_, sprite)) => {
                sprite.attach_surface(surface, frames);
                true
            }
            None => false,
        }
    }

    pub fn set_position(&mut self, id: SpriteId, target: Vec2, motion: Option<Motion>) -> bool {
        let frames = &self.frames;
        match self.sprites.iter_mut().find(|(sid, _)| *sid == id) {
            Some((_, sprite)) => {
                sprite.set_position(target, motion, frames);
                true
            }
            None => false,
        }
    }

    pub fn set_scale(&mut self, id: SpriteId, target: f32, motion: Option<Motion>) -> bool {
        let frames = &self.frames;
        match self.sprites.iter_mut().find(|(sid, _)| *sid == id) {
            Some((_, sprite)) => {
                sprite.set_scale(target, motion, frames);
                true
            }
            None => false,
        }
    }

    pub fn stop_animation(&mut self, id: SpriteId) -> bool {
        match self.get_mut(id) {
            Some(sprite) => {
                sprite.stop_animation();
                true
            }
            None => false,
        }
    }

    /// Sample every sprite at `now`. True while any tween is in flight.
    pub fn animate(&mut self, now: f64) -> bool {
        animate(self.sprites.iter_mut().map(|(_, s)| s), now)
    }

    /// Clear to the background and paint every sprite in order.
    pub fn draw(&mut self) {
        build_draw_list(self.sprites.iter().map(|(_, s)| s), &mut self.draw_list);
        self.canvas.clear(&self.config.background);
        for inst in self.draw_list.iter() {
            self.canvas
                .draw_surface(inst.surface, inst.x, inst.y, inst.width, inst.height);
        }
    }

    /// Host "paint now" notification. Animates, asks for one more frame if
    /// anything is still moving, then always draws. Returns whether another
    /// frame was requested.
    pub fn on_frame(&mut self, timestamp: f64) -> bool {
        let more = self.animate(timestamp);
        if more {
            self.frames.request_frame();
        }
        self.draw();
        log::trace!(
            "scene: frame at {:.1}ms, {} blits, more={}",
            timestamp,
            self.draw_list.len(),
            more
        );
        more
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    pub fn frames(&self) -> &S {
        &self.frames
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }
}
