use wasm_bindgen::JsValue;

/// Failures at the browser boundary. Converted to a JS exception string
/// when they cross a `#[wasm_bindgen]` export.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("no global window")]
    NoWindow,
    #[error("element not found: {0}")]
    MissingElement(String),
    #[error("element {0} is not a canvas")]
    NotACanvas(String),
    #[error("2d context unavailable")]
    NoContext,
    #[error("scene not initialized, call scene_init() first")]
    NotInitialized,
    #[error("status bar already installed")]
    AlreadyInstalled,
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for BridgeError {
    fn from(value: JsValue) -> Self {
        BridgeError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<BridgeError> for JsValue {
    fn from(err: BridgeError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
