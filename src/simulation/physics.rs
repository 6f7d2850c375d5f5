use bevy::prelude::*;

use crate::input::{ControlInput, RotationCommand};
use crate::levels::PhysicsConfig;

use super::CraftState;

// Upper bound on the commanded turn rate; a misconfigured level cannot spin
// the craft faster than this.
pub const MAX_ROTATION_RATE: f32 = 3.0; // rad/s

/// Advances the craft by one fixed time step. Pure with respect to its
/// inputs: the same craft, controls, config, and dt always produce the same
/// next state.
pub fn step(craft: &mut CraftState, input: &ControlInput, physics: &PhysicsConfig, dt: f32) {
    debug_assert!(
        craft.position.is_finite() && craft.velocity.is_finite() && craft.angle.is_finite(),
        "non-finite craft state entering physics step"
    );

    let turn = physics.rotation_rate.clamp(0.0, MAX_ROTATION_RATE) * dt;
    match input.rotation {
        RotationCommand::Left => craft.angle += turn,
        RotationCommand::Right => craft.angle -= turn,
        RotationCommand::None => {}
    }

    let mut accel = Vec2::new(0.0, physics.gravity);

    // Thrust acts along the body axis; angle 0 points straight up. An empty
    // tank means the engine is dead for the rest of the attempt.
    craft.thrusting = input.thrust && craft.fuel > 0.0;
    if craft.thrusting {
        accel += Vec2::new(-craft.angle.sin(), craft.angle.cos()) * physics.thrust_accel;
        craft.fuel = (craft.fuel - physics.fuel_burn_rate * dt).max(0.0);
    }

    // Semi-implicit Euler: update velocity first, then position with the new
    // velocity.
    craft.velocity += accel * dt;
    craft.position += craft.velocity * dt;
}
