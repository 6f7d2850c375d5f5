use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::levels::{CurrentLevel, LevelManager};
use crate::simulation::{Outcome, Session};

#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GamePhase {
    #[default]
    Playing,
    Paused,
}

// Actions the HUD can request; applied after the panel closure so the
// borrows stay simple.
#[derive(Default)]
struct HudActions {
    restart: bool,
    toggle_pause: bool,
    switch_level: Option<usize>,
}

pub fn ui_system(
    mut contexts: EguiContexts,
    mut session: ResMut<Session>,
    mut current_level: ResMut<CurrentLevel>,
    level_manager: Res<LevelManager>,
    phase: Res<State<GamePhase>>,
    mut next_phase: ResMut<NextState<GamePhase>>,
) {
    let mut actions = HudActions::default();
    let paused = *phase.get() == GamePhase::Paused;

    egui::SidePanel::right("hud")
        .default_width(300.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.heading(&current_level.config.name);
            ui.label(&current_level.config.description);
            ui.add_space(8.0);
            ui.separator();

            let craft = &session.craft;
            let tilt_deg = craft.angle.to_degrees();
            egui::Grid::new("telemetry").num_columns(2).show(ui, |ui| {
                ui.label("Altitude");
                ui.monospace(format!("{:8.1} m", session.altitude()));
                ui.end_row();
                ui.label("Horizontal speed");
                ui.monospace(format!("{:8.2} m/s", craft.velocity.x));
                ui.end_row();
                ui.label("Vertical speed");
                ui.monospace(format!("{:8.2} m/s", craft.velocity.y));
                ui.end_row();
                ui.label("Tilt");
                ui.monospace(format!("{:8.1}°", tilt_deg));
                ui.end_row();
                ui.label("Fuel");
                ui.monospace(format!("{:8.1} kg", craft.fuel));
                ui.end_row();
                ui.label("Clock");
                ui.monospace(format!("{:8.1} s", session.elapsed));
                ui.end_row();
            });

            let landing = &current_level.config.landing;
            ui.add_space(4.0);
            ui.small(format!(
                "Land on the pad under {:.1} m/s down, {:.1} m/s across, within {:.0}° of upright.",
                landing.max_descent_speed,
                landing.max_lateral_speed,
                landing.max_tilt.to_degrees(),
            ));

            ui.separator();
            ui.horizontal(|ui| {
                let pause_label = if paused { "Resume" } else { "Pause" };
                if ui.button(pause_label).clicked() {
                    actions.toggle_pause = true;
                }
                if ui.button("Restart").clicked() {
                    actions.restart = true;
                }
            });
            if paused {
                ui.colored_label(egui::Color32::YELLOW, "Paused");
            }

            ui.separator();
            ui.label("Levels");
            for (number, name) in level_manager.available_levels() {
                let selected = number == current_level.number;
                if ui.selectable_label(selected, name).clicked() && !selected {
                    actions.switch_level = Some(number);
                }
            }

            ui.separator();
            match session.outcome {
                Outcome::Landed => {
                    ui.colored_label(
                        egui::Color32::LIGHT_GREEN,
                        &current_level.config.success_message,
                    );
                    ui.small("Press R to fly it again.");
                }
                Outcome::Crashed => {
                    ui.colored_label(
                        egui::Color32::LIGHT_RED,
                        &current_level.config.failure_message,
                    );
                    ui.small("Press R to try again.");
                }
                Outcome::InFlight => {
                    ui.small("Arrows/WASD steer, up or space burns, P pauses, R restarts.");
                }
            }
        });

    if let Some(number) = actions.switch_level {
        if let Some(config) = level_manager.get_level(number) {
            info!("switching to level {number}: {}", config.name);
            current_level.number = number;
            current_level.config = config.clone();
            *session = Session::new(config);
            next_phase.set(GamePhase::Playing);
        }
    }
    if actions.restart {
        *session = Session::new(current_level.config.clone());
        next_phase.set(GamePhase::Playing);
    }
    if actions.toggle_pause {
        next_phase.set(if paused {
            GamePhase::Playing
        } else {
            GamePhase::Paused
        });
    }
}
