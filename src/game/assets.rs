use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::RoundState;

use super::game_logic::Mark;

pub const BOARD_TEXTURE: &str = "board.png";
pub const MARK_X_TEXTURE: &str = "mark_x.png";
pub const MARK_O_TEXTURE: &str = "mark_o.png";
pub const X_WINNER_TEXTURE: &str = "message_x_winner.png";
pub const O_WINNER_TEXTURE: &str = "message_o_winner.png";
pub const DRAW_TEXTURE: &str = "message_draw.png";

/// Handles to every texture the game draws, loaded once at startup. A round
/// cannot be played without them, so a failed load aborts the app from
/// `check_assets`; the handles themselves are released on engine teardown.
#[derive(Resource)]
pub struct GameAssets {
    pub board: Handle<Image>,
    pub mark_x: Handle<Image>,
    pub mark_o: Handle<Image>,
    pub x_winner: Handle<Image>,
    pub o_winner: Handle<Image>,
    pub draw: Handle<Image>,
}

impl GameAssets {
    pub fn mark(&self, mark: Mark) -> Handle<Image> {
        match mark {
            Mark::X => self.mark_x.clone(),
            Mark::O => self.mark_o.clone(),
        }
    }

    fn handles(&self) -> [(&'static str, &Handle<Image>); 6] {
        [
            (BOARD_TEXTURE, &self.board),
            (MARK_X_TEXTURE, &self.mark_x),
            (MARK_O_TEXTURE, &self.mark_o),
            (X_WINNER_TEXTURE, &self.x_winner),
            (O_WINNER_TEXTURE, &self.o_winner),
            (DRAW_TEXTURE, &self.draw),
        ]
    }
}

pub fn load_assets(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(GameAssets {
        board: asset_server.load(BOARD_TEXTURE),
        mark_x: asset_server.load(MARK_X_TEXTURE),
        mark_o: asset_server.load(MARK_O_TEXTURE),
        x_winner: asset_server.load(X_WINNER_TEXTURE),
        o_winner: asset_server.load(O_WINNER_TEXTURE),
        draw: asset_server.load(DRAW_TEXTURE),
    });
}

/// Polls the textures while in `Loading`. The first failure is fatal; once
/// every handle is loaded the round starts.
pub fn check_assets(
    asset_server: Res<AssetServer>,
    assets: Res<GameAssets>,
    mut next_round_state: ResMut<NextState<RoundState>>,
    mut exit: EventWriter<AppExit>,
) {
    let mut all_loaded = true;
    for (path, handle) in assets.handles() {
        match asset_server.load_state(handle.id()) {
            LoadState::Failed(error) => {
                error!("could not load texture {path}: {error}");
                exit.write(AppExit::error());
                return;
            }
            LoadState::Loaded => {}
            _ => all_loaded = false,
        }
    }

    if all_loaded {
        next_round_state.set(RoundState::Playing);
    }
}
