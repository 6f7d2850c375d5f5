use crate::constants::{LANDER_BASE_OFFSET, LANDER_HALF_WIDTH};
use crate::levels::LandingCriteria;
use crate::terrain::Terrain;

use super::{CraftState, Outcome};

/// Classifies the craft against the terrain for the current step. Pure
/// function of its arguments.
///
/// Contact is when the craft's base reaches the interpolated ground height at
/// its horizontal position. A landing requires the whole base over the pad
/// and contact speeds and tilt inside the level's thresholds; any other
/// contact, and flying off the edge of the map, is a crash.
pub fn evaluate(craft: &CraftState, terrain: &Terrain, criteria: &LandingCriteria) -> Outcome {
    let x = craft.position.x;
    let Some(ground) = terrain.height_at(x) else {
        return Outcome::Crashed;
    };

    if craft.position.y - LANDER_BASE_OFFSET > ground {
        return Outcome::InFlight;
    }

    let over_pad =
        terrain.pad_contains(x - LANDER_HALF_WIDTH) && terrain.pad_contains(x + LANDER_HALF_WIDTH);
    // Only downward motion counts against the descent limit.
    let descent_ok = -craft.velocity.y <= criteria.max_descent_speed;
    let lateral_ok = craft.velocity.x.abs() <= criteria.max_lateral_speed;
    let upright = craft.angle.abs() <= criteria.max_tilt;

    if over_pad && descent_ok && lateral_ok && upright {
        Outcome::Landed
    } else {
        Outcome::Crashed
    }
}
