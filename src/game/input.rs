use bevy::prelude::*;

use crate::RoundState;

use super::assets::GameAssets;
use super::game_logic::Outcome;
use super::grid::Cell;
use super::state::Session;
use super::ui;

pub fn track_pointer(
    windows: Query<&Window>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    mut session: ResMut<Session>,
) {
    // expect() because we spawn only a single Camera2d and expect Bevy to be able to provide it to us
    let (camera, camera_transform) = cameras.single().expect("expected exactly one camera");
    let Ok(window) = windows.single() else {
        return;
    };

    let hit = window
        .cursor_position()
        .and_then(|viewport_coordinates| {
            camera
                .viewport_to_world_2d(camera_transform, viewport_coordinates)
                .ok()
        })
        .and_then(Cell::hit);

    // the hover target is sticky: leaving the grid keeps the last cell
    if let Some(cell) = hit {
        session.pointer_moved(cell);
    }
}

pub fn handle_clicks(
    mut commands: Commands,
    assets: Res<GameAssets>,
    mouse_button_input: Res<ButtonInput<MouseButton>>,
    mut session: ResMut<Session>,
    mut next_round_state: ResMut<NextState<RoundState>>,
) {
    if mouse_button_input.just_pressed(MouseButton::Left) {
        session.press();
    }

    if mouse_button_input.just_released(MouseButton::Left) {
        let Some((cell, mark)) = session.release() else {
            return;
        };

        info!("{} was placed on {:?}", mark, cell);
        ui::spawn_placed_mark(&mut commands, &assets, cell, mark);

        match session.board().outcome() {
            Outcome::InProgress => {}
            Outcome::Draw => {
                info!("the round ends in a draw");
                next_round_state.set(RoundState::RoundOver);
            }
            Outcome::Won(winner) => {
                info!("the winner is {}", winner);
                next_round_state.set(RoundState::RoundOver);
            }
        }
    }
}

pub fn advance_blink(time: Res<Time>, mut session: ResMut<Session>) {
    session.advance_blink(time.delta());
}

pub fn restart_round(
    mouse_button_input: Res<ButtonInput<MouseButton>>,
    mut session: ResMut<Session>,
    mut next_round_state: ResMut<NextState<RoundState>>,
) {
    // a left click acknowledges the banner and starts a fresh round with a
    // fresh randomly chosen starting player
    if mouse_button_input.just_released(MouseButton::Left) {
        *session = Session::default();
        next_round_state.set(RoundState::Playing);
    }
}
