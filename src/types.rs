//! Data types for field geometry, placements, and generator
//! configuration.
//!
//! Every struct here derives Serialize + Deserialize so a scene can
//! round-trip through the JSON interchange format consumed by the
//! plotting frontend.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// -- Geometry ------------------------------------------------------

/// A 2D point in field coordinates (meters).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// A convex polygon, stored as an ordered vertex ring.
///
/// Convexity and a minimum of 3 vertices are enforced at construction;
/// winding order is not significant. Rigid motions (see
/// [`crate::transform`]) preserve both invariants, so transformed
/// copies are built without re-validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point>", into = "Vec<Point>")]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Create a polygon from a vertex ring, validating the convexity
    /// contract the SAT tests depend on.
    pub fn new(vertices: Vec<Point>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(Error::InvalidPolygon(format!(
                "need at least 3 vertices, got {}",
                vertices.len()
            )));
        }
        if !is_convex_ring(&vertices) {
            return Err(Error::InvalidPolygon(
                "vertex ring is not convex".into(),
            ));
        }
        Ok(Polygon { vertices })
    }

    /// Construct without validation. For internal use where convexity
    /// holds by construction (transform outputs, built-in fields).
    pub(crate) fn from_vertices(vertices: Vec<Point>) -> Self {
        Polygon { vertices }
    }

    /// Axis-aligned rectangle of the given dimensions centered on the
    /// local origin.
    pub fn rectangle(width: f64, height: f64) -> Self {
        let hw = width / 2.0;
        let hh = height / 2.0;
        Polygon::from_vertices(vec![
            Point::new(hw, hh),
            Point::new(hw, -hh),
            Point::new(-hw, -hh),
            Point::new(-hw, hh),
        ])
    }

    /// Regular polygon with `sides` vertices on a circle of `radius`
    /// centered on the local origin, first vertex at angle 0.
    pub fn regular(sides: usize, radius: f64) -> Self {
        let sides = sides.max(3);
        let step = std::f64::consts::TAU / sides as f64;
        Polygon::from_vertices(
            (0..sides)
                .map(|i| {
                    let (sin_a, cos_a) = (i as f64 * step).sin_cos();
                    Point::new(radius * cos_a, radius * sin_a)
                })
                .collect(),
        )
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }
}

impl TryFrom<Vec<Point>> for Polygon {
    type Error = Error;

    fn try_from(vertices: Vec<Point>) -> Result<Self> {
        Polygon::new(vertices)
    }
}

impl From<Polygon> for Vec<Point> {
    fn from(polygon: Polygon) -> Self {
        polygon.vertices
    }
}

/// A polygon ring is convex when all non-degenerate cross products of
/// consecutive edge pairs share a sign. Either winding is accepted.
fn is_convex_ring(vertices: &[Point]) -> bool {
    let n = vertices.len();
    let mut sign = 0i32;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        let c = vertices[(i + 2) % n];
        let cross = (b.x - a.x) * (c.y - b.y) - (b.y - a.y) * (c.x - b.x);
        if cross.abs() > 1e-10 {
            let current = if cross > 0.0 { 1 } else { -1 };
            if sign == 0 {
                sign = current;
            } else if sign != current {
                return false;
            }
        }
    }
    true
}

// -- Poses / placements --------------------------------------------

/// A rigid 2D transform: rotation in degrees about the shape's local
/// origin, then translation to `(x, y)` in field coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub theta_deg: f64,
}

impl Pose {
    pub fn new(x: f64, y: f64, theta_deg: f64) -> Self {
        Pose { x, y, theta_deg }
    }
}

/// An accepted placement: the pose that was sampled and the
/// world-space footprint it produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedObject {
    pub pose: Pose,
    pub footprint: Polygon,
}

/// A fully generated scenario: one robot plus two ordered classes of
/// game pieces. Footprints are pairwise non-intersecting and contained
/// in the field boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub robot: PlacedObject,
    pub coral: Vec<PlacedObject>,
    pub algae: Vec<PlacedObject>,
}

// -- Generator configuration ---------------------------------------

fn default_coral_count() -> u32 {
    25
}

fn default_algae_count() -> u32 {
    10
}

fn default_x_bound() -> f64 {
    9.0
}

fn default_y_bound() -> f64 {
    4.5
}

fn default_theta_max_deg() -> f64 {
    360.0
}

fn default_max_attempts() -> Option<u32> {
    Some(100_000)
}

/// Scenario generator parameters.
///
/// All fields except `seed` have serde defaults matching the standard
/// field scenario: 25 coral, 10 algae, poses drawn from x ∈ ±9.0 m,
/// y ∈ ±4.5 m, theta ∈ [0, 360).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneParams {
    /// RNG seed. The same seed reproduces the same scene.
    pub seed: u64,
    #[serde(default = "default_coral_count")]
    pub coral_count: u32,
    #[serde(default = "default_algae_count")]
    pub algae_count: u32,
    /// Candidate x positions are drawn uniformly from ±`x_bound`.
    #[serde(default = "default_x_bound")]
    pub x_bound: f64,
    /// Candidate y positions are drawn uniformly from ±`y_bound`.
    #[serde(default = "default_y_bound")]
    pub y_bound: f64,
    /// Candidate headings are drawn uniformly from [0, `theta_max_deg`).
    /// A value of 0 pins every object to its template orientation.
    #[serde(default = "default_theta_max_deg")]
    pub theta_max_deg: f64,
    /// Per-object rejection sampling cap. `None` removes the cap and
    /// lets the sampler loop until it succeeds.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: Option<u32>,
}

impl SceneParams {
    /// Parameters for the standard field scenario with a given seed.
    pub fn with_seed(seed: u64) -> Self {
        SceneParams {
            seed,
            coral_count: default_coral_count(),
            algae_count: default_algae_count(),
            x_bound: default_x_bound(),
            y_bound: default_y_bound(),
            theta_max_deg: default_theta_max_deg(),
            max_attempts: default_max_attempts(),
        }
    }
}

// -- Tests ---------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_round_trip() {
        let json = r#"{"seed": 42, "coral_count": 3}"#;
        let params: SceneParams = serde_json::from_str(json).expect("deserialize");
        assert_eq!(params.seed, 42);
        assert_eq!(params.coral_count, 3);
        assert_eq!(params.algae_count, 10);
        assert_eq!(params.x_bound, 9.0);
        assert_eq!(params.y_bound, 4.5);
        assert_eq!(params.max_attempts, Some(100_000));

        let out = serde_json::to_string(&params).expect("serialize");
        let _: SceneParams = serde_json::from_str(&out).expect("re-deserialize");
    }

    #[test]
    fn too_few_vertices_rejected() {
        let result = Polygon::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)]);
        assert!(matches!(result, Err(Error::InvalidPolygon(_))));
    }

    #[test]
    fn non_convex_ring_rejected() {
        // Arrowhead quad: the reflex vertex at the origin breaks convexity.
        let result = Polygon::new(vec![
            Point::new(-1.0, -1.0),
            Point::new(0.0, 0.0),
            Point::new(1.0, -1.0),
            Point::new(0.0, 2.0),
        ]);
        assert!(matches!(result, Err(Error::InvalidPolygon(_))));
    }

    #[test]
    fn triangle_accepted_either_winding() {
        let ccw = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
        ];
        let cw: Vec<Point> = ccw.iter().rev().copied().collect();
        assert!(Polygon::new(ccw).is_ok());
        assert!(Polygon::new(cw).is_ok());
    }

    #[test]
    fn rectangle_centered_on_origin() {
        let rect = Polygon::rectangle(2.0, 1.0);
        assert_eq!(rect.vertices().len(), 4);
        let sum: f64 = rect.vertices().iter().map(|p| p.x + p.y).sum();
        assert!(sum.abs() < 1e-12);
    }

    #[test]
    fn regular_polygon_vertex_count() {
        assert_eq!(Polygon::regular(6, 1.0).vertices().len(), 6);
        assert_eq!(Polygon::regular(16, 0.5).vertices().len(), 16);
        // Degenerate side counts are clamped up to a triangle.
        assert_eq!(Polygon::regular(1, 1.0).vertices().len(), 3);
    }

    #[test]
    fn polygon_serde_validates() {
        let bad = r#"[{"x": 0.0, "y": 0.0}, {"x": 1.0, "y": 0.0}]"#;
        assert!(serde_json::from_str::<Polygon>(bad).is_err());

        let good = r#"[{"x": 0.0, "y": 0.0}, {"x": 1.0, "y": 0.0}, {"x": 0.0, "y": 1.0}]"#;
        let poly: Polygon = serde_json::from_str(good).expect("deserialize");
        assert_eq!(poly.vertices().len(), 3);
    }
}
