pub mod canvas;
pub mod error;
pub mod runner;
pub mod scheduler;
pub mod status_bar;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;
use homescreen_scene::HomescreenConfig;

pub use canvas::{Canvas2d, HtmlSurface};
pub use error::BridgeError;
pub use runner::SceneRunner;
pub use scheduler::RafScheduler;

thread_local! {
    static RUNNER: RefCell<Option<SceneRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut SceneRunner) -> R) -> Result<R, BridgeError> {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow.as_mut().ok_or(BridgeError::NotInitialized)?;
        Ok(f(runner))
    })
}

fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    // A second init fails harmlessly; the first logger stays.
    let _ = console_log::init_with_level(level);
}

/// Both entry points take the same optional JSON document and read their
/// own section of it.
fn load_config(json: Option<String>) -> Result<HomescreenConfig, BridgeError> {
    match json {
        Some(json) => Ok(HomescreenConfig::from_json(&json)?),
        None => Ok(HomescreenConfig::default()),
    }
}

/// rAF callback target.
fn animation_frame(timestamp: f64) {
    if let Err(e) = with_runner(|r| r.on_frame(timestamp)) {
        log::warn!("frame dropped: {}", e);
    }
}

/// Create the scene graph drawing into `<canvas id=canvas_id>`.
/// Calling it again replaces the previous scene and cancels its pending frame.
#[wasm_bindgen]
pub fn scene_init(canvas_id: &str, config_json: Option<String>) -> Result<(), JsValue> {
    let config = load_config(config_json)?;
    init_logging(config.max_log_level());
    let canvas = Canvas2d::from_element_id(canvas_id)?;
    let frames = RafScheduler::new(animation_frame)?;
    let runner = SceneRunner::new(canvas, frames, config.scene);

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("homescreen scene: initialized on #{}", canvas_id);
    Ok(())
}

#[wasm_bindgen]
pub fn scene_add_sprite(x: f32, y: f32, scale: f32) -> Result<u32, JsValue> {
    Ok(with_runner(|r| r.add_sprite(x, y, scale))?)
}

#[wasm_bindgen]
pub fn scene_remove_sprite(id: u32) -> Result<bool, JsValue> {
    Ok(with_runner(|r| r.remove_sprite(id))?)
}

#[wasm_bindgen]
pub fn scene_attach_surface(id: u32, surface: HtmlCanvasElement) -> Result<bool, JsValue> {
    Ok(with_runner(|r| r.attach_surface(id, surface))?)
}

#[wasm_bindgen]
pub fn scene_set_position(
    id: u32,
    x: f32,
    y: f32,
    duration: Option<f64>,
    physics: Option<String>,
) -> Result<bool, JsValue> {
    Ok(with_runner(|r| r.set_position(id, x, y, duration, physics.as_deref()))?)
}

#[wasm_bindgen]
pub fn scene_set_scale(
    id: u32,
    scale: f32,
    duration: Option<f64>,
    physics: Option<String>,
) -> Result<bool, JsValue> {
    Ok(with_runner(|r| r.set_scale(id, scale, duration, physics.as_deref()))?)
}

#[wasm_bindgen]
pub fn scene_stop_animation(id: u32) -> Result<bool, JsValue> {
    Ok(with_runner(|r| r.stop_animation(id))?)
}

/// Sprite id under a client point, `undefined` on a miss.
#[wasm_bindgen]
pub fn scene_hit_test(x: f32, y: f32) -> Result<Option<u32>, JsValue> {
    Ok(with_runner(|r| r.hit_test(x, y))?)
}

#[wasm_bindgen]
pub fn scene_sprite_count() -> Result<u32, JsValue> {
    Ok(with_runner(|r| r.sprite_count())?)
}

/// Start reporting status bar appearance to the system UI. Only the first
/// successful call takes effect; later ones fail.
#[wasm_bindgen]
pub fn status_bar_init(config_json: Option<String>) -> Result<(), JsValue> {
    let config = load_config(config_json)?;
    init_logging(config.max_log_level());
    status_bar::install(config.status_bar)?;
    Ok(())
}
