//! Collision predicates for the game's shape pairs
//!
//! Circle/circle (player vs apple), circle/rect (player vs rock), and the
//! field-bounds check. Every predicate is pure and O(1) and works on squared
//! distances, so no square roots anywhere.
//!
//! Edge policy is not uniform across the pairs: circle/circle counts exact
//! tangency as a hit, circle/rect does not. Tests pin both behaviors.

use super::shapes::{Circle, Rect};

/// Circle/circle overlap. Exact tangency counts as a hit.
pub fn circles_intersect(a: &Circle, b: &Circle) -> bool {
    let radius_sum = a.radius + b.radius;
    a.center.distance_squared(b.center) <= radius_sum * radius_sum
}

/// Axis-aligned rectangle overlap, comparing center distance against summed
/// half extents per axis. Touching edges count as a hit.
pub fn rects_intersect(a: &Rect, b: &Rect) -> bool {
    let delta = a.center() - b.center();
    let reach = a.half_extents() + b.half_extents();
    delta.x.abs() <= reach.x && delta.y.abs() <= reach.y
}

/// Circle/rectangle overlap via closest-point clamping. Exact tangency does
/// NOT count as a hit (strict `<`), unlike [`circles_intersect`].
pub fn circle_intersects_rect(circle: &Circle, rect: &Rect) -> bool {
    let closest = circle.center.clamp(rect.pos, rect.max());
    circle.center.distance_squared(closest) < circle.radius * circle.radius
}

/// True when any side of the circle's bounding box reaches the field edge.
/// A collider exactly touching an edge is already out of bounds.
pub fn circle_outside_bounds(circle: &Circle, width: f32, height: f32) -> bool {
    circle.center.x - circle.radius <= 0.0
        || circle.center.x + circle.radius >= width
        || circle.center.y - circle.radius <= 0.0
        || circle.center.y + circle.radius >= height
}
