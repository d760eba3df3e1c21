use bevy::prelude::*;

use super::assets::GameAssets;
use super::game_logic::{Mark, Outcome};
use super::grid::Cell;
use super::state::Session;

// marks sit above the board texture, the banner above everything
const MARK_LAYER: f32 = 1.0;
const BANNER_LAYER: f32 = 2.0;

#[derive(Component)]
pub struct PreviewMark;

#[derive(Component)]
pub struct Banner;

pub fn setup_scene(mut commands: Commands, assets: Res<GameAssets>) {
    commands.spawn((
        Sprite::from_image(assets.board.clone()),
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));

    // a single preview sprite is reused for every hover target; update_preview
    // repositions and retextures it each frame
    commands.spawn((
        Sprite::from_image(assets.mark_x.clone()),
        Transform::from_xyz(0.0, 0.0, MARK_LAYER),
        Visibility::Hidden,
        PreviewMark,
    ));
}

pub fn spawn_placed_mark(commands: &mut Commands, assets: &GameAssets, cell: Cell, mark: Mark) {
    commands.spawn((
        Sprite::from_image(assets.mark(mark)),
        Transform::from_translation(cell.center().extend(MARK_LAYER)),
        mark,
    ));
}

pub fn update_preview(
    session: Res<Session>,
    assets: Res<GameAssets>,
    preview: Single<(&mut Sprite, &mut Transform, &mut Visibility), With<PreviewMark>>,
) {
    let (mut sprite, mut transform, mut visibility) = preview.into_inner();

    match session.preview_cell() {
        Some(cell) => {
            sprite.image = assets.mark(session.active_mark());
            transform.translation = cell.center().extend(MARK_LAYER);
            *visibility = Visibility::Visible;
        }
        None => *visibility = Visibility::Hidden,
    }
}

pub fn show_banner(
    mut commands: Commands,
    assets: Res<GameAssets>,
    session: Res<Session>,
    preview: Single<&mut Visibility, With<PreviewMark>>,
) {
    *preview.into_inner() = Visibility::Hidden;

    let banner = match session.board().outcome() {
        Outcome::Won(Mark::X) => assets.x_winner.clone(),
        Outcome::Won(Mark::O) => assets.o_winner.clone(),
        Outcome::Draw => assets.draw.clone(),
        Outcome::InProgress => unreachable!("entered RoundOver while the round is in progress"),
    };

    commands.spawn((
        Sprite::from_image(banner),
        Transform::from_xyz(0.0, 0.0, BANNER_LAYER),
        Banner,
    ));
}
