//! Shape generation for 2D primitives
//!
//! Everything comes out as a triangle list.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Color, Vertex};
use crate::sim::Rect;

/// Two triangles covering an axis-aligned rectangle
pub fn rect(rect: &Rect, color: Color) -> Vec<Vertex> {
    let (l, t, r, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());
    vec![
        Vertex::new(l, t, color),
        Vertex::new(r, t, color),
        Vertex::new(l, b, color),
        Vertex::new(l, b, color),
        Vertex::new(r, t, color),
        Vertex::new(r, b, color),
    ]
}

/// Triangle fan over a polygon, anchored at the first point.
///
/// Exact for convex outlines; the slash arc is close enough to convex that
/// the fan reads fine.
pub fn polygon(points: &[Vec2], color: Color) -> Vec<Vertex> {
    if points.len() < 3 {
        return Vec::new();
    }

    let mut vertices = Vec::with_capacity((points.len() - 2) * 3);
    let anchor = points[0];
    for pair in points[1..].windows(2) {
        vertices.push(Vertex::new(anchor.x, anchor.y, color));
        vertices.push(Vertex::new(pair[0].x, pair[0].y, color));
        vertices.push(Vertex::new(pair[1].x, pair[1].y, color));
    }
    vertices
}

/// Thick line segment as a quad
pub fn line(from: Vec2, to: Vec2, width: f32, color: Color) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (width * 0.5);

    let a1 = from + perp;
    let a2 = from - perp;
    let b1 = to + perp;
    let b2 = to - perp;

    vec![
        Vertex::new(a1.x, a1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b2.x, b2.y, color),
    ]
}

/// Outline of a regular polygon approximating a circle, for `polygon` fills
pub fn circle_points(center: Vec2, radius: f32, segments: u32) -> Vec<Vec2> {
    (0..segments)
        .map(|i| {
            let theta = (i as f32 / segments as f32) * 2.0 * PI;
            center + Vec2::new(theta.cos(), theta.sin()) * radius
        })
        .collect()
}

/// Points along the melee slash arc.
///
/// `progress` (0..1) sweeps the arc from its start angle toward its end angle
/// and fans the points out over half a turn as the swing completes.
pub fn slash_arc(center: Vec2, radius: f32, facing_right: bool, progress: f32) -> Vec<Vec2> {
    const POINTS: usize = 8;

    let (start, end) = if facing_right {
        (-PI / 4.0, PI / 4.0)
    } else {
        (3.0 * PI / 4.0, 5.0 * PI / 4.0)
    };
    let sweep = start + (end - start) * progress;

    (0..POINTS)
        .map(|i| {
            let offset = PI * i as f32 / POINTS as f32;
            let theta = sweep + offset * progress;
            center + Vec2::new(theta.cos(), theta.sin()) * radius
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_covers_corners() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        let verts = rect(&r, [1.0; 4]);
        assert_eq!(verts.len(), 6);
        for v in &verts {
            assert!(v.position[0] == 10.0 || v.position[0] == 40.0);
            assert!(v.position[1] == 20.0 || v.position[1] == 60.0);
        }
    }

    #[test]
    fn test_polygon_fan_triangle_count() {
        let square = [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ];
        assert_eq!(polygon(&square, [1.0; 4]).len(), 6);
        assert!(polygon(&square[..2], [1.0; 4]).is_empty());
    }

    #[test]
    fn test_degenerate_line_is_empty() {
        let p = Vec2::new(5.0, 5.0);
        assert!(line(p, p, 2.0, [1.0; 4]).is_empty());
        assert_eq!(line(p, Vec2::new(9.0, 5.0), 2.0, [1.0; 4]).len(), 6);
    }

    #[test]
    fn test_circle_points_on_radius() {
        let center = Vec2::new(7.0, -3.0);
        let points = circle_points(center, 5.0, 12);
        assert_eq!(points.len(), 12);
        assert!(points.iter().all(|p| ((*p - center).length() - 5.0).abs() < 1e-4));
        assert_eq!(polygon(&points, [1.0; 4]).len(), 10 * 3);
    }

    #[test]
    fn test_slash_arc_points_on_radius() {
        let center = Vec2::new(100.0, 100.0);
        for facing_right in [true, false] {
            let points = slash_arc(center, 40.0, facing_right, 0.5);
            assert_eq!(points.len(), 8);
            for p in points {
                assert!(((p - center).length() - 40.0).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn test_slash_arc_starts_collapsed_on_facing_side() {
        let center = Vec2::ZERO;
        let right = slash_arc(center, 40.0, true, 0.0);
        assert!(right.iter().all(|p| p.x > 0.0));
        let left = slash_arc(center, 40.0, false, 0.0);
        assert!(left.iter().all(|p| p.x < 0.0));
    }
}
