//! Convex polygon collision and containment checks.
//!
//! Uses the Separating Axis Theorem: two convex polygons are disjoint
//! iff some edge normal of either polygon separates their projections.
//! Exact for convex input; the convexity contract is enforced when
//! polygons are constructed, never here.

use crate::field::FieldGeometry;
use crate::transform::place_at_pose;
use crate::types::{Polygon, Pose};

/// Project every vertex onto the axis `(ax, ay)` and return the
/// interval extremes. The axis need not be normalized; both polygons
/// of a SAT test see the same scaling, so comparisons are unaffected.
pub fn project(polygon: &Polygon, ax: f64, ay: f64) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for p in polygon.vertices() {
        let dot = p.x * ax + p.y * ay;
        if dot < lo {
            lo = dot;
        }
        if dot > hi {
            hi = dot;
        }
    }
    (lo, hi)
}

/// Edge-normal axes of a polygon: one perpendicular `(-dy, dx)` per
/// edge, wrapping, in edge order. Parallel edges yield duplicate axes;
/// the redundant projections are harmless.
pub fn axes(polygon: &Polygon) -> impl Iterator<Item = (f64, f64)> + '_ {
    let verts = polygon.vertices();
    let n = verts.len();
    (0..n).map(move |i| {
        let a = verts[i];
        let b = verts[(i + 1) % n];
        (-(b.y - a.y), b.x - a.x)
    })
}

/// True if the filled convex regions overlap. Touching boundaries
/// count as intersecting, so zero-gap placements are rejected.
pub fn convex_intersects(a: &Polygon, b: &Polygon) -> bool {
    for polygon in [a, b] {
        for (ax, ay) in axes(polygon) {
            let (min_a, max_a) = project(a, ax, ay);
            let (min_b, max_b) = project(b, ax, ay);
            if max_a < min_b || max_b < min_a {
                // Separating axis found.
                return false;
            }
        }
    }
    true
}

/// True if `inner`'s convex region lies entirely within `outer`'s.
/// Only `outer`'s axes are needed: on each, `inner`'s projection must
/// be a subset of `outer`'s.
pub fn convex_contains(inner: &Polygon, outer: &Polygon) -> bool {
    for (ax, ay) in axes(outer) {
        let (min_o, max_o) = project(outer, ax, ay);
        let (min_i, max_i) = project(inner, ax, ay);
        if min_i < min_o || max_i > max_o {
            return false;
        }
    }
    true
}

/// Check whether placing `template` at `pose` is admissible: the
/// footprint must lie inside the field boundary and stay clear of
/// every fixed field obstacle and every previously accepted footprint
/// in `others`. Short-circuits on the first failure; holds no state.
pub fn is_valid_placement(
    template: &Polygon,
    pose: &Pose,
    field: &FieldGeometry,
    others: &[Polygon],
) -> bool {
    let footprint = place_at_pose(template, pose);
    if !convex_contains(&footprint, &field.boundary) {
        return false;
    }
    if field
        .obstacles
        .iter()
        .any(|obstacle| convex_intersects(&footprint, obstacle))
    {
        return false;
    }
    !others
        .iter()
        .any(|other| convex_intersects(&footprint, other))
}

// -- Tests ---------------------------------------------------------
