/// Identifies a sprite owned by a `SceneGraph`.
/// Handed out by `SceneGraph::add`; two live sprites never share an id.
/// Ids count up from 1 and only wrap after u32::MAX allocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpriteId(pub u32);

/// Identifies a drawable backing surface owned by the host.
/// Sprites only keep this handle; the host resolves it when drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SurfaceId(pub u32);
