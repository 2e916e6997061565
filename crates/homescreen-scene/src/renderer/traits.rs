//! Output surface contract.
//!
//! The scene only knows how to clear a raster target and blit surfaces
//! into it. The browser bridge implements this over a 2D canvas context;
//! `RecordingCanvas` implements it in memory for headless use.

use crate::api::types::SurfaceId;

/// Placement of the output surface's client area, in the coordinate space
/// hit-test points arrive in.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClientRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ClientRect {
    /// A client area at the origin.
    pub fn sized(width: f32, height: f32) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width,
            height,
        }
    }

    /// Convert a point to client-relative coordinates, or `None` when it
    /// falls outside the client area.
    pub fn to_local(&self, x: f32, y: f32) -> Option<(f32, f32)> {
        let (x, y) = (x - self.left, y - self.top);
        if x < 0.0 || y < 0.0 || x >= self.width || y >= self.height {
            return None;
        }
        Some((x, y))
    }
}

/// A 2D raster target.
pub trait Canvas {
    /// Output size in pixels.
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    /// Client area used to map input coordinates.
    fn client_rect(&self) -> ClientRect;

    /// Fill the whole output with a CSS color.
    fn clear(&mut self, fill: &str);

    /// Blit `surface` at (x, y) stretched to width × height. Unknown
    /// surfaces are skipped.
    fn draw_surface(&mut self, surface: SurfaceId, x: f32, y: f32, width: f32, height: f32);
}

/// A call recorded by `RecordingCanvas`.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(String),
    Surface {
        surface: SurfaceId,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
}

/// In-memory canvas that records every call.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    pub rect: ClientRect,
    pub calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            rect: ClientRect::sized(width, height),
            calls: Vec::new(),
        }
    }

    /// Surfaces blitted since the last clear, in paint order.
    pub fn last_frame(&self) -> Vec<SurfaceId> {
        let start = self
            .calls
            .iter()
            .rposition(|c| matches!(c, DrawCall::Clear(_)))
            .map_or(0, |i| i + 1);
        self.calls[start..]
            .iter()
            .filter_map(|c| match c {
                DrawCall::Surface { surface, .. } => Some(*surface),
                DrawCall::Clear(_) => None,
            })
            .collect()
    }

    /// Number of frames drawn (one clear per frame).
    pub fn frames(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Clear(_)))
            .count()
    }
}

impl Canvas for RecordingCanvas {
    fn width(&self) -> f32 {
        self.rect.width
    }

    fn height(&self) -> f32 {
        self.rect.height
    }

    fn client_rect(&self) -> ClientRect {
        self.rect
    }

    fn clear(&mut self, fill: &str) {
        self.calls.push(DrawCall::Clear(fill.to_string()));
    }

    fn draw_surface(&mut self, surface: SurfaceId, x: f32, y: f32, width: f32, height: f32) {
        self.calls.push(DrawCall::Surface {
            surface,
            x,
            y,
            width,
            height,
        });
    }
}
