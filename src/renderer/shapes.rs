//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::Vertex;
use crate::sim::Rect;

/// Generate vertices for a filled rectangle (two triangles)
pub fn rect(r: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let [tl, tr, br, bl] = r.corners();
    vec![
        Vertex::new(tl.x, tl.y, color),
        Vertex::new(tr.x, tr.y, color),
        Vertex::new(bl.x, bl.y, color),
        Vertex::new(bl.x, bl.y, color),
        Vertex::new(tr.x, tr.y, color),
        Vertex::new(br.x, br.y, color),
    ]
}

/// Generate vertices for a rectangle outline of the given thickness
pub fn rect_outline(r: &Rect, thickness: f32, color: [f32; 4]) -> Vec<Vertex> {
    let t = thickness.min(r.size.x / 2.0).min(r.size.y / 2.0);
    let edges = [
        // Top, bottom, left, right (sides skip the corners already covered)
        Rect::new(r.left(), r.top(), r.size.x, t),
        Rect::new(r.left(), r.bottom() - t, r.size.x, t),
        Rect::new(r.left(), r.top() + t, t, r.size.y - 2.0 * t),
        Rect::new(r.right() - t, r.top() + t, t, r.size.y - 2.0 * t),
    ];

    let mut vertices = Vec::with_capacity(edges.len() * 6);
    for edge in &edges {
        vertices.extend(rect(edge, color));
    }
    vertices
}

/// Generate vertices for a horizontal bar filled to `fraction` (0-1)
pub fn bar(
    origin: Vec2,
    size: Vec2,
    fraction: f32,
    back: [f32; 4],
    fill: [f32; 4],
) -> Vec<Vertex> {
    let mut vertices = rect(&Rect::from_pos_size(origin, size), back);
    let filled = size.x * fraction.clamp(0.0, 1.0);
    if filled > 0.0 {
        vertices.extend(rect(&Rect::new(origin.x, origin.y, filled, size.y), fill));
    }
    vertices
}
