use bevy::prelude::*;
use bevy_egui::EguiPlugin;

mod constants;
mod input;
mod levels;
mod simulation;
mod terrain;
mod ui;
mod visualization;

use input::{read_controls, ControlInput};
use levels::{CurrentLevel, LevelManager};
use simulation::{simulation_system, Session};
use ui::{ui_system, GamePhase};
use visualization::{draw_terrain, spawn_visualization, update_visualization};

// Physics tick rate. The simulation always sees this delta, whatever the
// display is doing.
const SIMULATION_HZ: f64 = 60.0;

fn main() {
    let current_level = CurrentLevel::load(0);
    let session = Session::new(current_level.config.clone());

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Lunar Lander".into(),
                resolution: (1280., 720.).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin)
        .insert_resource(Time::<Fixed>::from_hz(SIMULATION_HZ))
        .insert_resource(LevelManager::load())
        .insert_resource(current_level)
        .insert_resource(session)
        .insert_resource(ControlInput::default())
        .init_state::<GamePhase>()
        .add_systems(Startup, (setup_camera, spawn_visualization))
        .add_systems(Update, (read_controls, apply_session_controls).chain())
        .add_systems(FixedUpdate, simulation_system.run_if(simulation_running))
        .add_systems(Update, (ui_system, update_visualization, draw_terrain))
        .run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn simulation_running(phase: Res<State<GamePhase>>, session: Res<Session>) -> bool {
    *phase.get() == GamePhase::Playing && !session.outcome.is_terminal()
}

/// Frame-level controls: restart swaps in a fresh session between frames,
/// pause flips the phase. Physics is never interrupted mid-step.
fn apply_session_controls(
    controls: Res<ControlInput>,
    current_level: Res<CurrentLevel>,
    mut session: ResMut<Session>,
    phase: Res<State<GamePhase>>,
    mut next_phase: ResMut<NextState<GamePhase>>,
) {
    if controls.restart {
        info!("attempt restarted on '{}'", current_level.config.name);
        *session = Session::new(current_level.config.clone());
    }
    if controls.toggle_pause {
        next_phase.set(match phase.get() {
            GamePhase::Playing => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Playing,
        });
    }
}
