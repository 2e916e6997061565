use crate::components::sprite::Sprite;
use crate::renderer::instance::{DrawInstance, DrawList};

/// Build the draw list from sprites in paint order.
/// Sprites without a surface are skipped; later sprites paint over earlier ones.
pub fn build_draw_list<'a>(sprites: impl Iterator<Item = &'a Sprite>, list: &mut DrawList) {
    list.clear();

    for sprite in sprites {
        let surface = match sprite.surface() {
            Some(s) => s,
            None => continue,
        };
        let pos = sprite.pos();
        let scale = sprite.scale();
        list.push(DrawInstance {
            surface,
            x: pos.x,
            y: pos.y,
            width: sprite.width() * scale,
            height: sprite.height() * scale,
        });
    }
}
