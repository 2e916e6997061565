use crate::api::types::SurfaceId;

/// One sprite blit: copy `surface` into the output at (x, y), stretched to
/// width × height (the surface size times the sprite's scale).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawInstance {
    pub surface: SurfaceId,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Blits for one frame, in paint order (back to front).
/// Reused across frames to avoid reallocating.
#[derive(Debug, Default)]
pub struct DrawList {
    pub instances: Vec<DrawInstance>,
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(64),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: DrawInstance) {
        self.instances.push(instance);
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawInstance> {
        self.instances.iter()
    }
}
