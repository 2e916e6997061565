//! Browser wiring for the status bar: scroll events in, appearance
//! messages out through the app's message channel.

use std::cell::RefCell;
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Element};
use homescreen_scene::{AppearancePort, StatusBar, StatusBarConfig};
use crate::error::BridgeError;

const READY_EVENT: &str = "appmanager-ready";

thread_local! {
    static STATUS_BAR: RefCell<Option<StatusBar<JsPort>>> = RefCell::new(None);
}

/// A message port handed back by `app.connect(topic)`.
pub struct JsPort(JsValue);

impl AppearancePort for JsPort {
    fn post_message(&self, value: &str) {
        let result = Reflect::get(&self.0, &JsValue::from_str("postMessage"))
            .and_then(|f| f.dyn_into::<Function>())
            .and_then(|f| f.call1(&self.0, &JsValue::from_str(value)));
        if let Err(e) = result {
            log::error!("status bar: postMessage failed: {:?}", e);
        }
    }
}

/// Install the status bar. Connects right away when the app object is
/// already published on `window.appManager`, otherwise after its ready event.
///
/// The listeners live for the rest of the page, so a second install is refused.
pub fn install(config: StatusBarConfig) -> Result<(), BridgeError> {
    if is_installed() {
        return Err(BridgeError::AlreadyInstalled);
    }
    let window = web_sys::window().ok_or(BridgeError::NoWindow)?;
    let document = window.document().ok_or(BridgeError::NoWindow)?;

    let scrollable = document
        .query_selector(&config.scrollable_selector)?
        .ok_or_else(|| BridgeError::MissingElement(config.scrollable_selector.clone()))?;
    let threshold = document
        .get_element_by_id(&config.threshold_element_id)
        .ok_or_else(|| BridgeError::MissingElement(config.threshold_element_id.clone()))?
        .client_height() as f32;

    STATUS_BAR.with(|cell| *cell.borrow_mut() = Some(StatusBar::new(threshold)));

    if let Some(app) = current_app(&window) {
        connect(app, scrollable, config.topic);
        return Ok(());
    }

    log::debug!("status bar: waiting for {}", READY_EVENT);
    let ready = Closure::once(move |_event: web_sys::Event| match web_sys::window().and_then(|w| current_app(&w)) {
        Some(app) => connect(app, scrollable, config.topic),
        None => log::error!("status bar: {} fired without an app", READY_EVENT),
    });
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    window.add_event_listener_with_callback_and_add_event_listener_options(
        READY_EVENT,
        ready.as_ref().unchecked_ref(),
        &options,
    )?;
    ready.forget();
    Ok(())
}

pub fn is_installed() -> bool {
    STATUS_BAR.with(|cell| cell.borrow().is_some())
}

/// `window.appManager.app`, when present.
fn current_app(window: &web_sys::Window) -> Option<JsValue> {
    let manager = Reflect::get(window, &JsValue::from_str("appManager")).ok()?;
    if manager.is_undefined() || manager.is_null() {
        return None;
    }
    let app = Reflect::get(&manager, &JsValue::from_str("app")).ok()?;
    (!app.is_undefined() && !app.is_null()).then_some(app)
}

fn connect(app: JsValue, scrollable: Element, topic: String) {
    let promise = match request_connection(&app, &topic) {
        Ok(p) => p,
        Err(e) => {
            with_status_bar(|bar| bar.on_connect_failed(&format!("{:?}", e)));
            return;
        }
    };

    let on_ok = Closure::once(move |ports: JsValue| {
        let ports = collect_ports(&ports);
        with_status_bar(|bar| bar.on_connected(ports));
        listen_for_scroll(scrollable);
    });
    let on_fail = Closure::once(move |reason: JsValue| {
        let reason = reason.as_string().unwrap_or_else(|| format!("{:?}", reason));
        with_status_bar(|bar| bar.on_connect_failed(&reason));
    });
    let _ = promise.then2(&on_ok, &on_fail);
    on_ok.forget();
    on_fail.forget();
}

fn request_connection(app: &JsValue, topic: &str) -> Result<Promise, JsValue> {
    let connect = Reflect::get(app, &JsValue::from_str("connect"))?.dyn_into::<Function>()?;
    connect
        .call1(app, &JsValue::from_str(topic))?
        .dyn_into::<Promise>()
}

fn collect_ports(ports: &JsValue) -> Vec<JsPort> {
    match js_sys::try_iter(ports) {
        Ok(Some(iter)) => iter.filter_map(Result::ok).map(JsPort).collect(),
        _ => {
            log::warn!("status bar: connect resolved without a port list");
            Vec::new()
        }
    }
}

fn listen_for_scroll(scrollable: Element) {
    let target = scrollable.clone();
    let on_scroll = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        let scroll_top = target.scroll_top() as f32;
        with_status_bar(|bar| bar.on_scroll(scroll_top));
    }) as Box<dyn FnMut(web_sys::Event)>);
    if let Err(e) = scrollable.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref()) {
        log::error!("status bar: cannot listen for scroll: {:?}", e);
    }
    on_scroll.forget();
}

fn with_status_bar(f: impl FnOnce(&mut StatusBar<JsPort>)) {
    STATUS_BAR.with(|cell| match cell.borrow_mut().as_mut() {
        Some(bar) => f(bar),
        None => log::warn!("status bar: not installed"),
    });
}
