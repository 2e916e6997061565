//! Browser tests for the wasm bridge.
#![cfg(target_arch = "wasm32")]
extern crate wasm_bindgen_test;
use homescreen_scene::FrameScheduler;
use homescreen_web::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn append(tag: &str, configure: impl FnOnce(&Element)) -> Element {
    let doc = document();
    let element = doc.create_element(tag).unwrap();
    configure(&element);
    doc.body().unwrap().append_child(&element).unwrap();
    element
}

fn ignore_frame(_timestamp: f64) {}

#[wasm_bindgen_test]
fn cancel_withdraws_pending_frame() {
    let frames = RafScheduler::new(ignore_frame).unwrap();
    assert!(!frames.is_pending());

    frames.request_frame();
    frames.request_frame();
    assert!(frames.is_pending());

    frames.cancel();
    assert!(!frames.is_pending());
    // Nothing outstanding; a second cancel is a no-op.
    frames.cancel();
}

#[wasm_bindgen_test]
fn start_time_between_frames_is_not_ahead_of_now() {
    let frames = RafScheduler::new(ignore_frame).unwrap();
    let now = web_sys::window().unwrap().performance().unwrap().now();
    assert!(frames.animation_start_time() <= now);

    frames.begin_frame(now + 50.0);
    assert_eq!(frames.animation_start_time(), now + 50.0);
    frames.end_frame();
}

#[wasm_bindgen_test]
fn scene_init_replaces_scene_with_frame_pending() {
    let canvas = append("canvas", |e| e.set_id("reinit-canvas"));
    canvas
        .dyn_ref::<web_sys::HtmlCanvasElement>()
        .unwrap()
        .set_width(320);

    scene_init("reinit-canvas", None).unwrap();
    let id = scene_add_sprite(0.0, 0.0, 1.0).unwrap();
    // Starts a tween, which leaves a frame request outstanding.
    assert!(scene_set_position(id, 100.0, 0.0, Some(300.0), Some("linear".into())).unwrap());
    assert_eq!(scene_sprite_count().unwrap(), 1);

    scene_init("reinit-canvas", Some(r#"{"log_level":"debug"}"#.into())).unwrap();
    assert_eq!(scene_sprite_count().unwrap(), 0);
    assert_eq!(scene_hit_test(5.0, 5.0).unwrap(), None);
}

#[wasm_bindgen_test]
fn status_bar_installs_once() {
    append("div", |e| e.set_class_name("scrollable"));
    append("div", |e| e.set_id("search"));

    // No app manager on the test page, so this waits for the ready event.
    status_bar_init(None).unwrap();
    assert!(status_bar::is_installed());
    assert!(status_bar_init(None).is_err());
}
