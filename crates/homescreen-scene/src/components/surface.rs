use crate::api::types::SurfaceId;

/// Anything a sprite can be backed by: an offscreen canvas, an image, a
/// pre-rendered icon. The scene reads the size once, when attached.
pub trait Surface {
    fn id(&self) -> SurfaceId;
    fn width(&self) -> f32;
    fn height(&self) -> f32;
}

/// A plain surface description, for hosts that track pixels elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceInfo {
    pub id: SurfaceId,
    pub width: f32,
    pub height: f32,
}

impl SurfaceInfo {
    pub fn new(id: SurfaceId, width: f32, height: f32) -> Self {
        Self { id, width, height }
    }
}

impl Surface for SurfaceInfo {
    fn id(&self) -> SurfaceId {
        self.id
    }

    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }
}
