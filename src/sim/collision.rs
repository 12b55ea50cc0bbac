//! Collision tests for axis-aligned boxes
//!
//! Entity overlap is strict: boxes that only share an edge do not collide.
//! Button hit testing is inclusive so a click on the border still counts.

use glam::Vec2;

use super::rect::Rect;

/// Check whether two boxes overlap (touching edges is not an overlap)
#[inline]
pub fn aabb_overlap(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}

/// Check whether a point lies inside a box, borders included
#[inline]
pub fn contains_point_inclusive(rect: &Rect, point: Vec2) -> bool {
    point.x >= rect.left()
        && point.x <= rect.right()
        && point.y >= rect.top()
        && point.y <= rect.bottom()
}
