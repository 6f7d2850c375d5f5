use bevy::prelude::*;

use crate::constants::LANDER_BASE_OFFSET;
use crate::input::ControlInput;
use crate::levels::LevelConfig;
use crate::terrain::Terrain;

mod collision;
mod physics;

/// Authoritative craft state for one attempt. Mutated only by the physics
/// step and session reset.
#[derive(Debug, Clone, PartialEq)]
pub struct CraftState {
    pub position: Vec2,
    pub velocity: Vec2,
    pub angle: f32, // radians from upright, positive is counterclockwise
    pub fuel: f32,
    pub thrusting: bool, // engine actually firing this step (commanded and fueled)
}

/// Terminal classification of an attempt. Transitions only forward:
/// `InFlight` to one of the other two, never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    InFlight,
    Landed,
    Crashed,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InFlight)
    }
}

/// One attempt at one level: craft, terrain, config, and outcome, owned as a
/// unit. A restart replaces the whole session rather than patching fields,
/// so stale attempt state cannot leak across attempts.
#[derive(Resource)]
pub struct Session {
    pub craft: CraftState,
    pub terrain: Terrain,
    pub config: LevelConfig,
    pub outcome: Outcome,
    pub elapsed: f32, // simulated seconds since attempt start
}

impl Session {
    pub fn new(config: LevelConfig) -> Self {
        let terrain = Terrain::from_spec(&config.terrain);
        let initial = &config.initial;
        let craft = CraftState {
            position: Vec2::new(initial.x0, initial.y0),
            velocity: Vec2::new(initial.vx0, initial.vy0),
            angle: initial.angle0,
            fuel: initial.fuel0,
            thrusting: false,
        };
        Self {
            craft,
            terrain,
            config,
            outcome: Outcome::InFlight,
            elapsed: 0.0,
        }
    }

    /// Advances the attempt by one fixed time step: physics, then collision
    /// classification. A no-op once the outcome is terminal, which makes the
    /// outcome monotone by construction.
    pub fn step(&mut self, input: &ControlInput, dt: f32) -> Outcome {
        if self.outcome.is_terminal() {
            return self.outcome;
        }

        physics::step(&mut self.craft, input, &self.config.physics, dt);
        self.outcome = collision::evaluate(&self.craft, &self.terrain, &self.config.landing);
        self.elapsed += dt;

        if self.outcome.is_terminal() {
            self.settle();
        }
        self.outcome
    }

    pub fn altitude(&self) -> f32 {
        let ground = self
            .terrain
            .height_at(self.craft.position.x)
            .unwrap_or(0.0);
        self.craft.position.y - LANDER_BASE_OFFSET - ground
    }

    // Rest the craft on the ground once the attempt ends, so the renderer
    // never draws it sunk into the terrain.
    fn settle(&mut self) {
        if let Some(ground) = self.terrain.height_at(self.craft.position.x) {
            self.craft.position.y = ground + LANDER_BASE_OFFSET;
        }
        self.craft.velocity = Vec2::ZERO;
        self.craft.thrusting = false;
    }
}

/// Per-tick step system. Runs in `FixedUpdate`, so `time.delta_secs()` is
/// the fixed simulation delta regardless of render frame rate.
pub fn simulation_system(
    time: Res<Time>,
    controls: Res<ControlInput>,
    mut session: ResMut<Session>,
) {
    let before = session.outcome;
    let after = session.step(&controls, time.delta_secs());
    if before != after {
        match after {
            Outcome::Landed => info!(
                "touchdown after {:.1}s with {:.1} kg fuel left",
                session.elapsed, session.craft.fuel
            ),
            Outcome::Crashed => info!("crashed after {:.1}s", session.elapsed),
            Outcome::InFlight => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::RotationCommand;
    use crate::levels::{InitialState, LandingCriteria, PhysicsConfig, TerrainSpec};

    const DT: f32 = 1.0 / 60.0;

    fn flat_pad_level() -> LevelConfig {
        LevelConfig {
            name: "test".into(),
            description: String::new(),
            physics: PhysicsConfig {
                gravity: -1.625,
                thrust_accel: 4.0,
                rotation_rate: 1.5,
                fuel_burn_rate: 8.0,
            },
            initial: InitialState {
                x0: 0.0,
                y0: 50.0,
                vx0: 0.0,
                vy0: 0.0,
                angle0: 0.0,
                fuel0: 100.0,
            },
            landing: LandingCriteria {
                max_descent_speed: 3.0,
                max_lateral_speed: 1.5,
                max_tilt: 0.15,
            },
            terrain: TerrainSpec::Profile {
                points: vec![(-100.0, 0.0), (-20.0, 0.0), (20.0, 0.0), (100.0, 0.0)],
                pad_segment: 1,
            },
            success_message: String::new(),
            failure_message: String::new(),
        }
    }

    fn coast() -> ControlInput {
        ControlInput::default()
    }

    #[test]
    fn airborne_attempt_stays_in_flight() {
        let mut session = Session::new(flat_pad_level());
        for _ in 0..60 {
            assert_eq!(session.step(&coast(), DT), Outcome::InFlight);
        }
    }

    #[test]
    fn free_fall_onto_the_pad_from_altitude_crashes() {
        let mut session = Session::new(flat_pad_level());
        let outcome = loop {
            let outcome = session.step(&coast(), DT);
            if outcome.is_terminal() {
                break outcome;
            }
            assert!(session.elapsed < 120.0, "attempt never terminated");
        };
        assert_eq!(outcome, Outcome::Crashed);
    }

    #[test]
    fn gentle_drop_onto_the_pad_lands() {
        let mut config = flat_pad_level();
        // Start just above the pad, already slow.
        config.initial.y0 = crate::constants::LANDER_BASE_OFFSET + 0.05;
        config.initial.vy0 = -0.5;
        let mut session = Session::new(config);
        let mut outcome = Outcome::InFlight;
        for _ in 0..30 {
            outcome = session.step(&coast(), DT);
            if outcome.is_terminal() {
                break;
            }
        }
        assert_eq!(outcome, Outcome::Landed);
    }

    #[test]
    fn hot_drop_onto_the_pad_crashes() {
        let mut config = flat_pad_level();
        config.initial.y0 = crate::constants::LANDER_BASE_OFFSET + 0.05;
        config.initial.vy0 = -8.0;
        let mut session = Session::new(config);
        assert_eq!(session.step(&coast(), DT), Outcome::Crashed);
    }

    #[test]
    fn touchdown_off_the_pad_crashes_even_when_gentle() {
        let mut config = flat_pad_level();
        config.initial.x0 = 60.0; // off-pad flat ground
        config.initial.y0 = crate::constants::LANDER_BASE_OFFSET + 0.05;
        config.initial.vy0 = -0.5;
        let mut session = Session::new(config);
        let mut outcome = Outcome::InFlight;
        for _ in 0..30 {
            outcome = session.step(&coast(), DT);
            if outcome.is_terminal() {
                break;
            }
        }
        assert_eq!(outcome, Outcome::Crashed);
    }

    #[test]
    fn outcome_is_monotone_after_termination() {
        let mut config = flat_pad_level();
        config.initial.y0 = crate::constants::LANDER_BASE_OFFSET + 0.05;
        config.initial.vy0 = -8.0;
        let mut session = Session::new(config);
        assert_eq!(session.step(&coast(), DT), Outcome::Crashed);

        let frozen = session.craft.clone();
        let burn = ControlInput {
            thrust: true,
            rotation: RotationCommand::Left,
            ..Default::default()
        };
        for _ in 0..60 {
            assert_eq!(session.step(&burn, DT), Outcome::Crashed);
        }
        // Terminal attempts do not move.
        assert_eq!(session.craft, frozen);
    }

    #[test]
    fn identical_sessions_replay_identically() {
        let script = |i: usize| ControlInput {
            thrust: i > 120,
            rotation: if i % 7 == 0 {
                RotationCommand::Right
            } else {
                RotationCommand::None
            },
            ..Default::default()
        };

        let mut a = Session::new(flat_pad_level());
        let mut b = Session::new(flat_pad_level());
        for i in 0..1000 {
            let oa = a.step(&script(i), DT);
            let ob = b.step(&script(i), DT);
            assert_eq!(oa, ob);
        }
        assert_eq!(a.craft.position.x.to_bits(), b.craft.position.x.to_bits());
        assert_eq!(a.craft.position.y.to_bits(), b.craft.position.y.to_bits());
        assert_eq!(a.craft.fuel.to_bits(), b.craft.fuel.to_bits());
        assert_eq!(a.outcome, b.outcome);
    }

    #[test]
    fn restart_replaces_the_whole_attempt() {
        let mut session = Session::new(flat_pad_level());
        for _ in 0..120 {
            session.step(&coast(), DT);
        }
        session = Session::new(flat_pad_level());
        assert_eq!(session.outcome, Outcome::InFlight);
        assert_eq!(session.elapsed, 0.0);
        assert_eq!(session.craft.position, Vec2::new(0.0, 50.0));
    }

    #[test]
    fn altitude_is_height_of_base_above_ground() {
        let session = Session::new(flat_pad_level());
        assert_eq!(
            session.altitude(),
            50.0 - crate::constants::LANDER_BASE_OFFSET
        );
    }
}
