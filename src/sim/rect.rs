//! Axis-aligned rectangle geometry
//!
//! Screen space: x grows to the right, y grows downward. A rectangle is
//! stored as its top-left corner plus size; every anchor (bottom, midleft,
//! center...) is derived from those.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box used for bodies, platforms and hitboxes
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Rectangle of the given size centered on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            pos: center - size * 0.5,
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Middle of the left edge
    pub fn midleft(&self) -> Vec2 {
        Vec2::new(self.left(), self.pos.y + self.size.y * 0.5)
    }

    /// Middle of the right edge
    pub fn midright(&self) -> Vec2 {
        Vec2::new(self.right(), self.pos.y + self.size.y * 0.5)
    }

    pub fn set_left(&mut self, x: f32) {
        self.pos.x = x;
    }

    pub fn set_right(&mut self, x: f32) {
        self.pos.x = x - self.size.x;
    }

    pub fn set_bottom(&mut self, y: f32) {
        self.pos.y = y - self.size.y;
    }

    /// Move so the middle of the left edge sits at `anchor`
    pub fn set_midleft(&mut self, anchor: Vec2) {
        self.pos = Vec2::new(anchor.x, anchor.y - self.size.y * 0.5);
    }

    /// Move so the middle of the right edge sits at `anchor`
    pub fn set_midright(&mut self, anchor: Vec2) {
        self.pos = Vec2::new(anchor.x - self.size.x, anchor.y - self.size.y * 0.5);
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.pos += delta;
    }

    /// Strict overlap test: rectangles that only share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// True if the horizontal extents overlap (edges touching excluded)
    pub fn overlaps_horizontally(&self, other: &Rect) -> bool {
        self.left() < other.right() && other.left() < self.right()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_and_anchors() {
        let r = Rect::new(10.0, 20.0, 40.0, 60.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 50.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 80.0);
        assert_eq!(r.center(), Vec2::new(30.0, 50.0));
        assert_eq!(r.midleft(), Vec2::new(10.0, 50.0));
        assert_eq!(r.midright(), Vec2::new(50.0, 50.0));
    }

    #[test]
    fn test_setters_keep_size() {
        let mut r = Rect::new(0.0, 0.0, 40.0, 60.0);
        r.set_bottom(550.0);
        assert_eq!(r.top(), 490.0);
        r.set_right(800.0);
        assert_eq!(r.left(), 760.0);
        assert_eq!(r.size, Vec2::new(40.0, 60.0));
    }

    #[test]
    fn test_mid_anchoring() {
        let body = Rect::new(100.0, 100.0, 40.0, 60.0);
        let mut hitbox = Rect::new(0.0, 0.0, 70.0, 50.0);

        hitbox.set_midleft(body.midright());
        assert_eq!(hitbox.left(), 140.0);
        assert_eq!(hitbox.center().y, body.center().y);

        hitbox.set_midright(body.midleft());
        assert_eq!(hitbox.right(), 100.0);
        assert_eq!(hitbox.center().y, body.center().y);
    }

    #[test]
    fn test_intersects_is_strict() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let touching = Rect::new(10.0, 0.0, 10.0, 10.0);
        let overlapping = Rect::new(9.5, 9.5, 10.0, 10.0);
        let far = Rect::new(50.0, 50.0, 10.0, 10.0);

        assert!(!a.intersects(&touching));
        assert!(a.intersects(&overlapping));
        assert!(overlapping.intersects(&a));
        assert!(!a.intersects(&far));
    }

    #[test]
    fn test_from_center() {
        let r = Rect::from_center(Vec2::new(50.0, 50.0), Vec2::splat(15.0));
        assert_eq!(r.center(), Vec2::new(50.0, 50.0));
        assert_eq!(r.left(), 42.5);
    }
}
