//! Procedural game-field scenario generator.
//!
//! Builds a random, collision-free arrangement of one robot and two
//! classes of game pieces on a fixed field, using Separating Axis
//! Theorem tests over convex polygons and seeded rejection sampling.
//! The resulting [`Scene`] serializes to JSON for an external
//! renderer.
//!
//! ```
//! use fieldgen::{generate, SceneParams};
//!
//! let scene = generate(&SceneParams::with_seed(42)).unwrap();
//! assert_eq!(scene.coral.len(), 25);
//! assert_eq!(scene.algae.len(), 10);
//! ```

pub mod collision;
pub mod error;
pub mod field;
pub mod generate;
pub mod transform;
pub mod types;

pub use error::{Error, Result};
pub use field::FieldGeometry;
pub use generate::{generate, generate_json, generate_on_field, sample_valid_pose};
pub use types::{PlacedObject, Point, Polygon, Pose, Scene, SceneParams};
