//! Fixed field geometry and shape templates for the standard game
//! field (dimensions in meters).
//!
//! The field is an octagonal arena with a small square obstacle at
//! center and two hexagonal reefs mirrored across the y axis. Objects
//! placed on it: a square robot, rectangular coral pieces, and
//! algae balls approximated as 16-gons.

use serde::{Deserialize, Serialize};

use crate::transform::{rotate, translate};
use crate::types::{Point, Polygon};

const REEF_RADIUS: f64 = 0.9604;
const REEF_CENTER_X: f64 = 4.284614;
const ALGAE_RADIUS: f64 = 0.206375;

/// The fixed, read-only part of a scenario: the outer arena boundary
/// every footprint must stay inside, and forbidden-zone polygons no
/// footprint may touch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldGeometry {
    pub boundary: Polygon,
    pub obstacles: Vec<Polygon>,
}

impl FieldGeometry {
    /// The standard reef-game field: octagonal arena, center square,
    /// and one reef hexagon per alliance.
    pub fn reefscape() -> Self {
        let blue_reef = translate(
            // Pointy-top hexagon: first vertex straight up.
            &rotate(&Polygon::regular(6, REEF_RADIUS), 90.0),
            REEF_CENTER_X,
            0.0,
        );
        let red_reef = mirror_x(&blue_reef);
        FieldGeometry {
            boundary: arena_octagon(),
            obstacles: vec![center_square(), blue_reef, red_reef],
        }
    }
}

fn arena_octagon() -> Polygon {
    Polygon::from_vertices(vec![
        Point::new(7.057057, 4.0259),
        Point::new(8.774125, 2.73685),
        Point::new(8.774125, -2.73685),
        Point::new(7.057057, -4.0259),
        Point::new(-7.057057, -4.0259),
        Point::new(-8.774125, -2.73685),
        Point::new(-8.774125, 2.73685),
        Point::new(-7.057057, 4.0259),
    ])
}

fn center_square() -> Polygon {
    Polygon::rectangle(0.3048, 0.3048)
}

/// Reflect across the y axis. Reverses winding, which the SAT tests
/// do not care about.
fn mirror_x(polygon: &Polygon) -> Polygon {
    Polygon::from_vertices(
        polygon
            .vertices()
            .iter()
            .map(|p| Point::new(-p.x, p.y))
            .collect(),
    )
}

/// Footprint template for the robot bumper square.
pub fn robot_template() -> Polygon {
    Polygon::rectangle(0.9271, 0.9271)
}

/// Footprint template for a coral piece lying on its side.
pub fn coral_template() -> Polygon {
    Polygon::rectangle(0.301625, 0.1143)
}

/// Footprint template for an algae ball, estimated by 16 points.
pub fn algae_template() -> Polygon {
    Polygon::regular(16, ALGAE_RADIUS)
}

// -- Tests ---------------------------------------------------------
