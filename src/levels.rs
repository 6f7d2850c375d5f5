use bevy::prelude::*;
use serde::Deserialize;

/// Tunable physics for one level. Everything the stepper needs is data here
/// rather than code constants, so levels can vary gravity, engine power, and
/// fuel economy independently.
#[derive(Debug, Deserialize, Clone)]
pub struct PhysicsConfig {
    pub gravity: f32,        // vertical acceleration (m/s², negative is down)
    pub thrust_accel: f32,   // acceleration from the engine while burning (m/s²)
    pub rotation_rate: f32,  // commanded turn rate (rad/s)
    pub fuel_burn_rate: f32, // fuel consumed per second of burn (kg/s)
}

#[derive(Debug, Deserialize, Clone)]
pub struct InitialState {
    pub x0: f32,     // initial horizontal position (m)
    pub y0: f32,     // initial altitude of craft center (m)
    pub vx0: f32,    // initial horizontal velocity (m/s)
    pub vy0: f32,    // initial vertical velocity (m/s)
    pub angle0: f32, // initial tilt (radians, 0 is upright)
    pub fuel0: f32,  // initial fuel mass (kg)
}

/// Thresholds a touchdown on the pad must satisfy to count as a landing.
#[derive(Debug, Deserialize, Clone)]
pub struct LandingCriteria {
    pub max_descent_speed: f32, // m/s downward at contact
    pub max_lateral_speed: f32, // m/s sideways at contact
    pub max_tilt: f32,          // radians from upright at contact
}

#[derive(Debug, Deserialize, Clone)]
pub enum TerrainSpec {
    /// Explicit ground profile: polyline vertices with strictly increasing x,
    /// plus the index of the segment that is the landing pad.
    Profile {
        points: Vec<(f32, f32)>,
        pad_segment: usize,
    },
    /// Procedural profile, reproducible from the seed.
    Generated {
        seed: u64,
        width: f32,
        segments: usize,
        base_height: f32,
        roughness: f32,
        pad_width: f32,
    },
}

#[derive(Debug, Deserialize, Clone)]
pub struct LevelConfig {
    pub name: String,
    pub description: String,
    pub physics: PhysicsConfig,
    pub initial: InitialState,
    pub landing: LandingCriteria,
    pub terrain: TerrainSpec,
    pub success_message: String,
    pub failure_message: String,
}

// Level files are embedded so the binary is self-contained; order here is
// play order.
const LEVEL_SOURCES: &[&str] = &[
    include_str!("../assets/levels/level0.ron"),
    include_str!("../assets/levels/level1.ron"),
    include_str!("../assets/levels/level2.ron"),
];

#[derive(Resource)]
pub struct LevelManager {
    levels: Vec<LevelConfig>,
}

impl LevelManager {
    pub fn load() -> Self {
        let levels = LEVEL_SOURCES
            .iter()
            .enumerate()
            .map(|(i, src)| {
                ron::de::from_str::<LevelConfig>(src)
                    .unwrap_or_else(|e| panic!("embedded level {i} is invalid: {e}"))
            })
            .collect();
        Self { levels }
    }

    pub fn get_level(&self, number: usize) -> Option<LevelConfig> {
        self.levels.get(number).cloned()
    }

    /// (level number, name) pairs for the level-select UI.
    pub fn available_levels(&self) -> impl Iterator<Item = (usize, &str)> {
        self.levels
            .iter()
            .enumerate()
            .map(|(i, config)| (i, config.name.as_str()))
    }
}

#[derive(Resource)]
pub struct CurrentLevel {
    pub number: usize,
    pub config: LevelConfig,
}

impl CurrentLevel {
    pub fn load(number: usize) -> Self {
        let manager = LevelManager::load();
        let config = manager
            .get_level(number)
            .unwrap_or_else(|| panic!("no embedded level {number}"));
        Self { number, config }
    }
}
