//! Drawing surface collaborator interface.
//!
//! The render pass talks to the host renderer through [`DrawSurface`] only,
//! so the scene driver and its tests never touch a real window. The shipped
//! raylib implementation lives in [`crate::backend`].

use crate::assets::ImageHandle;

/// Axis-aligned rectangle in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Rect { x, y, w, h }
    }
}

/// Target surface the scene is drawn onto, once per Running tick.
pub trait DrawSurface {
    /// Erase the whole viewport area.
    fn clear(&mut self, width: f32, height: f32);

    /// Copy the `src` region of the image behind `handle` to the `dst`
    /// region of the surface. When `mirrored` is set the sprite is flipped
    /// horizontally about its own destination rectangle.
    fn blit(&mut self, handle: ImageHandle, src: Rect, dst: Rect, mirrored: bool);
}
