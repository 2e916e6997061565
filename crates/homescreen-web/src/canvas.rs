use std::collections::HashMap;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use homescreen_scene::{Canvas, ClientRect, Surface, SurfaceId};
use crate::error::BridgeError;

/// An offscreen canvas registered as a sprite surface.
#[derive(Debug, Clone)]
pub struct HtmlSurface {
    id: SurfaceId,
    element: HtmlCanvasElement,
}

impl Surface for HtmlSurface {
    fn id(&self) -> SurfaceId {
        self.id
    }

    fn width(&self) -> f32 {
        self.element.width() as f32
    }

    fn height(&self) -> f32 {
        self.element.height() as f32
    }
}

/// Canvas 2D output: the single raster path.
pub struct Canvas2d {
    element: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    surfaces: HashMap<SurfaceId, HtmlCanvasElement>,
    next_surface: u32,
}

impl Canvas2d {
    pub fn new(element: HtmlCanvasElement) -> Result<Self, BridgeError> {
        let ctx = element
            .get_context("2d")?
            .ok_or(BridgeError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| BridgeError::NoContext)?;
        Ok(Self {
            element,
            ctx,
            surfaces: HashMap::new(),
            next_surface: 1,
        })
    }

    /// Look up a `<canvas>` by element id.
    pub fn from_element_id(id: &str) -> Result<Self, BridgeError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(BridgeError::NoWindow)?;
        let element = document
            .get_element_by_id(id)
            .ok_or_else(|| BridgeError::MissingElement(id.to_string()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| BridgeError::NotACanvas(id.to_string()))?;
        Self::new(element)
    }

    /// Make `element` drawable by sprites. Registering the same element
    /// again yields a new handle.
    pub fn register_surface(&mut self, element: HtmlCanvasElement) -> HtmlSurface {
        let id = SurfaceId(self.next_surface);
        self.next_surface += 1;
        self.surfaces.insert(id, element.clone());
        HtmlSurface { id, element }
    }

    /// Forget a surface. Sprites still pointing at it draw nothing.
    pub fn release_surface(&mut self, id: SurfaceId) {
        self.surfaces.remove(&id);
    }
}

impl Canvas for Canvas2d {
    fn width(&self) -> f32 {
        self.element.width() as f32
    }

    fn height(&self) -> f32 {
        self.element.height() as f32
    }

    fn client_rect(&self) -> ClientRect {
        ClientRect {
            left: self.element.client_left() as f32,
            top: self.element.client_top() as f32,
            width: self.element.client_width() as f32,
            height: self.element.client_height() as f32,
        }
    }

    fn clear(&mut self, fill: &str) {
        self.ctx.set_fill_style_str(fill);
        self.ctx
            .fill_rect(0.0, 0.0, self.width() as f64, self.height() as f64);
    }

    fn draw_surface(&mut self, surface: SurfaceId, x: f32, y: f32, width: f32, height: f32) {
        let Some(source) = self.surfaces.get(&surface) else {
            log::warn!("draw of unregistered surface {}", surface.0);
            return;
        };
        if let Err(e) = self.ctx.draw_image_with_html_canvas_element_and_dw_and_dh(
            source,
            x as f64,
            y as f64,
            width as f64,
            height as f64,
        ) {
            log::warn!("drawImage failed for surface {}: {:?}", surface.0, e);
        }
    }
}
