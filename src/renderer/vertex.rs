//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Straight (non-premultiplied) RGBA
pub type Color = [f32; 4];

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: Color,
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: Color) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Replace the alpha channel of a color
#[inline]
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    [color[0], color[1], color[2], alpha]
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BLACK: Color = [0.0, 0.0, 0.0, 1.0];
    pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
    pub const RED: Color = [1.0, 0.0, 0.0, 1.0];
    pub const GREEN: Color = [0.0, 1.0, 0.0, 1.0];
    pub const YELLOW: Color = [1.0, 1.0, 0.0, 1.0];

    /// Sky gradient, top and bottom
    pub const SKY_TOP: Color = [0.78, 0.71, 0.86, 1.0];
    pub const SKY_BOTTOM: Color = [0.2, 0.31, 0.39, 1.0];
    pub const MIST: Color = [0.59, 0.59, 0.67, 0.39];

    pub const PLATFORM: Color = [0.39, 0.27, 0.2, 1.0];
    pub const PLATFORM_HIGHLIGHT: Color = [0.51, 0.39, 0.31, 1.0];
    pub const PLATFORM_SHADOW: Color = [0.27, 0.16, 0.12, 1.0];

    pub const MINION: Color = RED;
    pub const PROJECTILE: Color = YELLOW;
    pub const PROJECTILE_CORE: Color = WHITE;
    pub const SLASH: Color = WHITE;
    pub const SLASH_GLOW: Color = [1.0, 1.0, 1.0, 0.16];
    pub const HITBOX: Color = [0.0, 1.0, 1.0, 1.0];

    pub const OVERLAY: Color = [0.0, 0.0, 0.0, 0.5];
}
