//! Rendering module
//!
//! The game draws through `RenderSurface`; it never reads anything back.
//! `VertexBatch` is the built-in surface: it tessellates every draw into a
//! colored triangle list ready for upload.

pub mod batch;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use batch::{Label, SpriteDraw, VertexBatch};
pub use vertex::{Color, Vertex, colors};

use glam::Vec2;

use crate::assets::Sprite;
use crate::sim::Rect;

/// Draw target for one frame
pub trait RenderSurface {
    /// Fill the whole surface
    fn clear(&mut self, color: Color);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Blit a sprite with its top-left at `pos`
    fn sprite(&mut self, sprite: &Sprite, pos: Vec2, flip_x: bool, alpha: f32);

    /// Filled polygon
    fn polygon(&mut self, points: &[Vec2], color: Color);

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color);

    /// Text centered on `center`
    fn text(&mut self, text: &str, center: Vec2, size: f32, color: Color);
}
