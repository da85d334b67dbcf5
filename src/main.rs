use bevy::prelude::*;

mod clock;
mod config;
mod constants;
mod interaction;
mod lighting;
mod systems;

use constants::{CAMERA_MAX_RADIUS, CAMERA_MIN_RADIUS};
use systems::camera::{OrbitCamPlugin, OrbitCamera};
use systems::globe::GlobePlugin;
use systems::markers::MarkerPlugin;
use systems::starfield::StarfieldPlugin;
use systems::ui::GlobeUiPlugin;

fn main() -> bevy::app::AppExit {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Day/Night Globe".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins((
            OrbitCamPlugin,
            GlobePlugin,
            MarkerPlugin,
            StarfieldPlugin,
            GlobeUiPlugin,
        ))
        .insert_resource(ClearColor(Color::srgb(0.0, 0.0, 0.0)))
        .add_systems(PreStartup, config::load_settings)
        .add_systems(Startup, setup)
        .run()
}

// scene setup here
// the globe itself is spawned by GlobePlugin once its textures resolve
fn setup(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 5.0, 15.0).looking_at(Vec3::ZERO, Vec3::Y),
        OrbitCamera::new(15.0)
            .with_target(Vec3::ZERO)
            .with_zoom_limits(CAMERA_MIN_RADIUS, CAMERA_MAX_RADIUS),
    ));
}
