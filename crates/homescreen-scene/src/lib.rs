pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod extensions;
pub mod status_bar;

// Re-export key types at crate root for convenience
pub use api::config::{HomescreenConfig, SceneConfig, StatusBarConfig};
pub use api::types::{SpriteId, SurfaceId};
pub use components::sprite::{Sprite, Tween};
pub use components::surface::{Surface, SurfaceInfo};
pub use crate::core::frame::{FrameClock, FrameScheduler, ManualScheduler, FRAME_INTERVAL_MS};
pub use crate::core::physics::{Motion, Physics, PhysicsFn};
pub use crate::core::scene::SceneGraph;
pub use crate::core::time::TimeWindow;
pub use renderer::instance::{DrawInstance, DrawList};
pub use renderer::traits::{Canvas, ClientRect, DrawCall, RecordingCanvas};
pub use status_bar::{Appearance, AppearancePort, StatusBar};
pub use systems::animation::animate;
pub use systems::render::build_draw_list;

// Extensions: optional easing curves for `Physics::Eased`
pub use extensions::{Easing, lerp};
