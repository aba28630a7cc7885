//! Scenario generation by rejection sampling.
//!
//! Places one robot and then the game pieces sequentially, drawing
//! random poses until each passes the placement validity check.
//! Accepted footprints join the obstacle list for everything placed
//! after them and are never revisited; a rejected pose commits
//! nothing. All randomness comes from an RNG seeded with
//! `SceneParams.seed`, so a seed fully determines the scene.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::collision::is_valid_placement;
use crate::error::{Error, Result};
use crate::field::{self, FieldGeometry};
use crate::transform::place_at_pose;
use crate::types::{PlacedObject, Polygon, Pose, Scene, SceneParams};

/// Draw random poses until one validates against the field and the
/// previously accepted footprints in `others`.
///
/// With `params.max_attempts` set, gives up after that many rejected
/// candidates and returns [`Error::PlacementExhausted`]; with `None`
/// the loop runs until it succeeds, which may be forever on a field
/// too dense for `template`.
pub fn sample_valid_pose(
    rng: &mut impl Rng,
    template: &Polygon,
    field: &FieldGeometry,
    others: &[Polygon],
    params: &SceneParams,
    label: &str,
) -> Result<Pose> {
    let mut attempts: u32 = 0;
    loop {
        let pose = Pose {
            x: rng.gen_range(-params.x_bound..=params.x_bound),
            y: rng.gen_range(-params.y_bound..=params.y_bound),
            theta_deg: if params.theta_max_deg > 0.0 {
                rng.gen_range(0.0..params.theta_max_deg)
            } else {
                0.0
            },
        };
        attempts = attempts.saturating_add(1);
        if is_valid_placement(template, &pose, field, others) {
            debug!("placed {label} after {attempts} attempts");
            return Ok(pose);
        }
        if let Some(cap) = params.max_attempts {
            if attempts >= cap {
                return Err(Error::PlacementExhausted {
                    label: label.to_string(),
                    attempts,
                });
            }
        }
    }
}

fn place_object(
    rng: &mut impl Rng,
    template: &Polygon,
    field: &FieldGeometry,
    placed: &mut Vec<Polygon>,
    params: &SceneParams,
    label: &str,
) -> Result<PlacedObject> {
    let pose = sample_valid_pose(rng, template, field, placed, params, label)?;
    let footprint = place_at_pose(template, &pose);
    placed.push(footprint.clone());
    Ok(PlacedObject { pose, footprint })
}

/// Generate a scene on the standard field with the standard robot,
/// coral, and algae templates.
pub fn generate(params: &SceneParams) -> Result<Scene> {
    generate_on_field(
        params,
        &FieldGeometry::reefscape(),
        &field::robot_template(),
        &field::coral_template(),
        &field::algae_template(),
    )
}

/// Generate a scene on an arbitrary field with caller-supplied shape
/// templates. The robot is placed first against an empty obstacle
/// list, then `coral_count` coral and `algae_count` algae, each
/// validated against everything accepted before it.
pub fn generate_on_field(
    params: &SceneParams,
    field: &FieldGeometry,
    robot_template: &Polygon,
    coral_template: &Polygon,
    algae_template: &Polygon,
) -> Result<Scene> {
    let mut rng = StdRng::seed_from_u64(params.seed);
    let mut placed: Vec<Polygon> = Vec::new();

    let robot =
        place_object(&mut rng, robot_template, field, &mut placed, params, "robot")?;

    let mut coral = Vec::with_capacity(params.coral_count as usize);
    for _ in 0..params.coral_count {
        coral.push(place_object(
            &mut rng,
            coral_template,
            field,
            &mut placed,
            params,
            "coral",
        )?);
    }

    let mut algae = Vec::with_capacity(params.algae_count as usize);
    for _ in 0..params.algae_count {
        algae.push(place_object(
            &mut rng,
            algae_template,
            field,
            &mut placed,
            params,
            "algae",
        )?);
    }

    Ok(Scene { robot, coral, algae })
}

/// JSON boundary for non-Rust callers: parse [`SceneParams`], generate
/// on the standard field, and serialize the resulting [`Scene`].
pub fn generate_json(params_json: &str) -> Result<String> {
    let params: SceneParams = serde_json::from_str(params_json)?;
    let scene = generate(&params)?;
    Ok(serde_json::to_string(&scene)?)
}

// -- Tests ---------------------------------------------------------
