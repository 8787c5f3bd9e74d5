//! Drawing surface over a raylib draw handle.

use crate::assets::ImageHandle;
use crate::backend::TextureStore;
use crate::render::{DrawSurface, Rect};
use raylib::prelude::*;

/// Per-frame [`DrawSurface`] borrowing the active draw handle and the
/// uploaded textures.
pub struct RaylibSurface<'a, 'b> {
    pub d: &'a mut RaylibDrawHandle<'b>,
    pub textures: &'a TextureStore,
}

impl DrawSurface for RaylibSurface<'_, '_> {
    fn clear(&mut self, _width: f32, _height: f32) {
        // raylib clears the whole backbuffer; the size is implicit.
        self.d.clear_background(Color::RAYWHITE);
    }

    fn blit(&mut self, handle: ImageHandle, src: Rect, dst: Rect, mirrored: bool) {
        let Some(tex) = self.textures.map.get(&handle) else {
            return;
        };

        // A negative source width flips the sprite horizontally.
        let src_rect = Rectangle {
            x: src.x,
            y: src.y,
            width: if mirrored { -src.w } else { src.w },
            height: src.h,
        };
        let dst_rect = Rectangle {
            x: dst.x,
            y: dst.y,
            width: dst.w,
            height: dst.h,
        };

        self.d.draw_texture_pro(
            tex,
            src_rect,
            dst_rect,
            Vector2 { x: 0.0, y: 0.0 },
            0.0,
            Color::WHITE,
        );
    }
}
