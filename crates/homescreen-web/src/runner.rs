use web_sys::HtmlCanvasElement;
use glam::Vec2;
use homescreen_scene::{Motion, Physics, SceneConfig, SceneGraph, Sprite, SpriteId, Surface};
use crate::canvas::Canvas2d;
use crate::scheduler::RafScheduler;

/// Owns the scene graph and its browser collaborators.
///
/// Lives in a `thread_local!` in `lib.rs`, because wasm-bindgen cannot
/// export generic structs and frame callbacks need a place to find it.
pub struct SceneRunner {
    scene: SceneGraph<RafScheduler, Canvas2d>,
}

impl SceneRunner {
    pub fn new(canvas: Canvas2d, frames: RafScheduler, config: SceneConfig) -> Self {
        Self {
            scene: SceneGraph::with_config(canvas, frames, config),
        }
    }

    /// Handle one animation frame.
    pub fn on_frame(&mut self, timestamp: f64) {
        self.scene.frames().begin_frame(timestamp);
        self.scene.on_frame(timestamp);
        self.scene.frames().end_frame();
    }

    pub fn add_sprite(&mut self, x: f32, y: f32, scale: f32) -> u32 {
        let id = self.scene.add(Sprite::new(Vec2::new(x, y), scale));
        id.0
    }

    pub fn remove_sprite(&mut self, id: u32) -> bool {
        self.scene.remove(SpriteId(id)).is_some()
    }

    pub fn attach_surface(&mut self, id: u32, element: HtmlCanvasElement) -> bool {
        let surface = self.scene.canvas_mut().register_surface(element);
        let attached = self.scene.attach_surface(SpriteId(id), &surface);
        if !attached {
            self.scene.canvas_mut().release_surface(surface.id());
        }
        attached
    }

    pub fn set_position(
        &mut self,
        id: u32,
        x: f32,
        y: f32,
        duration: Option<f64>,
        physics: Option<&str>,
    ) -> bool {
        let motion = self.motion(duration, physics);
        self.scene
            .set_position(SpriteId(id), Vec2::new(x, y), motion)
    }

    pub fn set_scale(
        &mut self,
        id: u32,
        scale: f32,
        duration: Option<f64>,
        physics: Option<&str>,
    ) -> bool {
        let motion = self.motion(duration, physics);
        self.scene.set_scale(SpriteId(id), scale, motion)
    }

    pub fn stop_animation(&mut self, id: u32) -> bool {
        self.scene.stop_animation(SpriteId(id))
    }

    /// Sprite under a point, or -1.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<u32> {
        self.scene.sprite_at(x, y).map(|id| id.0)
    }

    pub fn sprite_count(&self) -> u32 {
        self.scene.len() as u32
    }

    /// Resolve the optional JS arguments into a motion. A missing or
    /// non-positive duration means "set immediately".
    fn motion(&self, duration: Option<f64>, physics: Option<&str>) -> Option<Motion> {
        let duration = duration.filter(|d| *d > 0.0)?;
        let mut motion = self.scene.motion(duration);
        if let Some(name) = physics {
            match Physics::from_name(name) {
                Some(p) => motion = motion.with_physics(p),
                None => log::warn!("unknown physics {:?}, using default", name),
            }
        }
        Some(motion)
    }
}
