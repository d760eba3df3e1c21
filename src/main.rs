use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy::window::PresentMode;

mod game;

// The board texture is three cells across (see game::grid::GRID_SPACING).
const WINDOW_SIZE: u32 = 750;

#[derive(States, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RoundState {
    // waiting for every texture to finish loading
    #[default]
    Loading,
    Playing,
    RoundOver,
}

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Tic Tac Toe".into(),
                        resolution: (WINDOW_SIZE as f32, WINDOW_SIZE as f32).into(),
                        resizable: false,
                        present_mode: PresentMode::AutoVsync,
                        ..default()
                    }),
                    ..default()
                })
                .set(AssetPlugin {
                    meta_check: AssetMetaCheck::Never,
                    ..default()
                }),
        )
        .insert_resource(ClearColor(Color::BLACK))
        .init_state::<RoundState>()
        .add_systems(Startup, spawn_camera)
        .add_plugins(game::plugin)
        .run();
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub fn clear_entities<T: Component>(to_despawn: Query<Entity, With<T>>, mut commands: Commands) {
    for entity in &to_despawn {
        commands.entity(entity).despawn();
    }
}
