//! Rigid 2D transforms for polygons.
//!
//! All functions are pure: they return a new polygon and leave the
//! input untouched. Rotation and translation preserve convexity, so
//! outputs skip the construction-time validation in [`Polygon::new`].

use crate::types::{Point, Polygon, Pose};

/// Rotate a polygon about the local origin by `theta_deg` degrees.
pub fn rotate(polygon: &Polygon, theta_deg: f64) -> Polygon {
    rotate_about(polygon, theta_deg, Point::ORIGIN)
}

/// Rotate a polygon about an arbitrary origin by `theta_deg` degrees,
/// using the standard 2D rotation matrix.
pub fn rotate_about(polygon: &Polygon, theta_deg: f64, origin: Point) -> Polygon {
    let (sin_t, cos_t) = theta_deg.to_radians().sin_cos();
    Polygon::from_vertices(
        polygon
            .vertices()
            .iter()
            .map(|p| {
                let dx = p.x - origin.x;
                let dy = p.y - origin.y;
                Point::new(
                    cos_t * dx - sin_t * dy + origin.x,
                    sin_t * dx + cos_t * dy + origin.y,
                )
            })
            .collect(),
    )
}

/// Translate a polygon by `(dx, dy)`.
pub fn translate(polygon: &Polygon, dx: f64, dy: f64) -> Polygon {
    Polygon::from_vertices(
        polygon
            .vertices()
            .iter()
            .map(|p| Point::new(p.x + dx, p.y + dy))
            .collect(),
    )
}

/// Materialize the world-space footprint of a shape template at a
/// pose: rotate about the template's own local origin, then translate.
/// Templates must be defined centered on their local origin.
pub fn place_at_pose(template: &Polygon, pose: &Pose) -> Polygon {
    translate(&rotate(template, pose.theta_deg), pose.x, pose.y)
}

// -- Tests ---------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_polygons_close(a: &Polygon, b: &Polygon) {
        assert_eq!(a.vertices().len(), b.vertices().len());
        for (pa, pb) in a.vertices().iter().zip(b.vertices()) {
            assert_relative_eq!(pa.x, pb.x, epsilon = 1e-9);
            assert_relative_eq!(pa.y, pb.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn identity_pose_is_noop() {
        let square = Polygon::rectangle(1.0, 1.0);
        let placed = place_at_pose(&square, &Pose::new(0.0, 0.0, 0.0));
        assert_polygons_close(&placed, &square);
    }

    #[test]
    fn pose_composes_rotation_then_translation() {
        let square = Polygon::rectangle(1.0, 1.0);
        let placed = place_at_pose(&square, &Pose::new(5.0, 0.0, 90.0));
        let expected = translate(&rotate(&square, 90.0), 5.0, 0.0);
        assert_polygons_close(&placed, &expected);
    }

    #[test]
    fn quarter_turn_maps_vertices() {
        let square = Polygon::rectangle(2.0, 2.0);
        let turned = rotate(&square, 90.0);
        // (1, 1) -> (-1, 1)
        assert_relative_eq!(turned.vertices()[0].x, -1.0, epsilon = 1e-9);
        assert_relative_eq!(turned.vertices()[0].y, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn full_turn_is_identity() {
        let hex = Polygon::regular(6, 1.5);
        assert_polygons_close(&rotate(&hex, 360.0), &hex);
    }

    #[test]
    fn rotate_about_fixes_origin_point() {
        let square = translate(&Polygon::rectangle(1.0, 1.0), 3.0, 0.0);
        let pivot = Point::new(3.0, 0.0);
        let turned = rotate_about(&square, 45.0, pivot);
        // Center stays put: vertex centroid is unchanged.
        let cx: f64 =
            turned.vertices().iter().map(|p| p.x).sum::<f64>() / 4.0;
        let cy: f64 =
            turned.vertices().iter().map(|p| p.y).sum::<f64>() / 4.0;
        assert_relative_eq!(cx, 3.0, epsilon = 1e-9);
        assert_relative_eq!(cy, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn translate_shifts_every_vertex() {
        let tri = Polygon::regular(3, 1.0);
        let moved = translate(&tri, 2.0, -1.5);
        for (a, b) in tri.vertices().iter().zip(moved.vertices()) {
            assert_relative_eq!(b.x - a.x, 2.0, epsilon = 1e-12);
            assert_relative_eq!(b.y - a.y, -1.5, epsilon = 1e-12);
        }
    }
}
