//! Point-in-polygon tests against a closed outline.
//!
//! Crossings are counted along a ray pointing in +x. An edge counts when it
//! straddles the ray's row with the half-open rule `min_y <= y < max_y`, so a
//! ray through a vertex is never counted twice.

use itertools::Itertools;

use crate::point::Point;

/// Signed winding number of `outline` around `p`. The sign follows the
/// outline's orientation.
pub fn winding_number(outline: &[Point], p: Point) -> i32 {
    outline
        .iter()
        .circular_tuple_windows::<(&Point, &Point)>()
        .map(|(a, b)| {
            if a.y <= p.y && b.y > p.y && is_left(a, b, &p) > 0.0 {
                1
            } else if a.y > p.y && b.y <= p.y && is_left(a, b, &p) < 0.0 {
                -1
            } else {
                0
            }
        })
        .sum()
}

/// Number of outline edges crossed by the ray from `p`.
pub fn crossing_number(outline: &[Point], p: Point) -> usize {
    outline
        .iter()
        .circular_tuple_windows::<(&Point, &Point)>()
        .filter(|(a, b)| {
            let straddles = (a.y <= p.y) != (b.y <= p.y);
            straddles && p.x < a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x)
        })
        .count()
}

#[inline]
pub fn inside_nonzero(outline: &[Point], p: Point) -> bool {
    winding_number(outline, p) != 0
}

#[inline]
pub fn inside_even_odd(outline: &[Point], p: Point) -> bool {
    crossing_number(outline, p) % 2 == 1
}

/// Twice the signed area of the triangle `a, b, p`; 0 when `p` is on the
/// line through `a` and `b`.
#[inline]
fn is_left(a: &Point, b: &Point, p: &Point) -> f64 {
    (b.x - a.x) * (p.y - a.y) - (p.x - a.x) * (b.y - a.y)
}
