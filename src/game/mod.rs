mod assets;
mod game_logic;
mod grid;
mod input;
mod state;
mod ui;

use bevy::prelude::*;

use crate::{clear_entities, RoundState};
use game_logic::Mark;
use state::Session;

pub fn plugin(app: &mut App) {
    app.insert_resource(Session::default())
        .add_systems(Startup, assets::load_assets)
        .add_systems(
            Update,
            assets::check_assets.run_if(in_state(RoundState::Loading)),
        )
        .add_systems(OnExit(RoundState::Loading), ui::setup_scene)
        .add_systems(
            Update,
            (
                input::track_pointer,
                input::handle_clicks,
                input::advance_blink,
                ui::update_preview,
            )
                .chain()
                .run_if(in_state(RoundState::Playing)),
        )
        .add_systems(OnEnter(RoundState::RoundOver), ui::show_banner)
        .add_systems(
            Update,
            input::restart_round.run_if(in_state(RoundState::RoundOver)),
        )
        .add_systems(
            OnExit(RoundState::RoundOver),
            (clear_entities::<Mark>, clear_entities::<ui::Banner>),
        );
}
