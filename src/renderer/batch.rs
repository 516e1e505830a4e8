//! CPU-side vertex batch

use glam::Vec2;

use super::RenderSurface;
use super::shapes;
use super::vertex::{Color, Vertex, with_alpha};
use crate::assets::Sprite;
use crate::consts::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::sim::Rect;

/// A text draw, kept for whatever rasterizes fonts
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub center: Vec2,
    pub size: f32,
    pub color: Color,
}

/// A sprite draw; the batch also emits a tinted quad for it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteDraw {
    pub rect: Rect,
    pub flip_x: bool,
    pub alpha: f32,
    pub placeholder: bool,
}

/// Collects one frame of geometry
#[derive(Debug, Default)]
pub struct VertexBatch {
    pub vertices: Vec<Vertex>,
    pub labels: Vec<Label>,
    pub sprites: Vec<SpriteDraw>,
    pub clear_color: Option<Color>,
}

impl VertexBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything from the previous frame, keeping allocations
    pub fn reset(&mut self) {
        self.vertices.clear();
        self.labels.clear();
        self.sprites.clear();
        self.clear_color = None;
    }

    /// Vertex data as raw bytes for a GPU upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// True if any label contains `needle`
    pub fn has_text(&self, needle: &str) -> bool {
        self.labels.iter().any(|l| l.text.contains(needle))
    }
}

impl RenderSurface for VertexBatch {
    fn clear(&mut self, color: Color) {
        self.reset();
        self.clear_color = Some(color);
        self.vertices.extend(shapes::rect(
            &Rect::new(0.0, 0.0, WINDOW_WIDTH, WINDOW_HEIGHT),
            color,
        ));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return;
        }
        self.vertices.extend(shapes::rect(&rect, color));
    }

    fn sprite(&mut self, sprite: &Sprite, pos: Vec2, flip_x: bool, alpha: f32) {
        let rect = Rect::new(pos.x, pos.y, sprite.width as f32, sprite.height as f32);
        self.sprites.push(SpriteDraw {
            rect,
            flip_x,
            alpha,
            placeholder: sprite.placeholder,
        });
        let tint = sprite.tint();
        self.vertices
            .extend(shapes::rect(&rect, with_alpha(tint, tint[3] * alpha)));
    }

    fn polygon(&mut self, points: &[Vec2], color: Color) {
        self.vertices.extend(shapes::polygon(points, color));
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.vertices.extend(shapes::line(from, to, width, color));
    }

    fn text(&mut self, text: &str, center: Vec2, size: f32, color: Color) {
        self.labels.push(Label {
            text: text.to_owned(),
            center,
            size,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::colors;

    #[test]
    fn test_clear_resets_previous_frame() {
        let mut batch = VertexBatch::new();
        batch.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), colors::RED);
        batch.text("hello", Vec2::ZERO, 36.0, colors::WHITE);

        batch.clear(colors::BLACK);
        assert_eq!(batch.clear_color, Some(colors::BLACK));
        assert_eq!(batch.triangle_count(), 2);
        assert!(batch.labels.is_empty());
    }

    #[test]
    fn test_sprite_records_draw_and_quad() {
        let mut batch = VertexBatch::new();
        let sprite = Sprite::placeholder(40, 60, colors::WHITE);
        batch.sprite(&sprite, Vec2::new(5.0, 6.0), true, 0.5);

        assert_eq!(batch.sprites.len(), 1);
        let draw = batch.sprites[0];
        assert_eq!(draw.rect, Rect::new(5.0, 6.0, 40.0, 60.0));
        assert!(draw.flip_x);
        assert!(draw.placeholder);
        assert!(batch.vertices.iter().all(|v| v.color[3] == 0.5));
    }

    #[test]
    fn test_empty_rect_emits_nothing() {
        let mut batch = VertexBatch::new();
        batch.fill_rect(Rect::new(10.0, 10.0, 0.0, 20.0), colors::GREEN);
        assert!(batch.vertices.is_empty());
    }

    #[test]
    fn test_bytes_match_vertex_count() {
        let mut batch = VertexBatch::new();
        batch.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), colors::GREEN);
        assert_eq!(
            batch.as_bytes().len(),
            batch.vertices.len() * std::mem::size_of::<Vertex>()
        );
    }
}
