use bevy::asset::LoadState;
use bevy::prelude::*;

pub mod materials;

use crate::constants::{DAY_TEXTURE, GLOBE_RADIUS, NIGHT_TEXTURE};
use crate::lighting;
use crate::systems::ui::RotationSpeed;
use materials::{GlobeMaterial, LightUniform};

pub struct GlobePlugin;

impl Plugin for GlobePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(MaterialPlugin::<GlobeMaterial>::default())
            .init_resource::<RotationAngle>()
            .add_systems(Startup, start)
            .add_systems(Update, (
                spawn_when_loaded.run_if(resource_exists::<PendingTextures>),
                rotate,
            ));
    }
}

// globe tag
#[derive(Component)]
pub struct Globe;

/// Current spin of the globe in radians, advanced once per frame.
/// The clock readout is derived from this and nothing else.
#[derive(Resource, Default)]
pub struct RotationAngle(pub f32);

// handles we are still waiting on before the globe can exist
// bundled so the whole barrier can be dropped in one go once it resolves
#[derive(Resource)]
struct PendingTextures {
    day: Handle<Image>,
    night: Handle<Image>,
}

fn start(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(PendingTextures {
        day: asset_server.load(DAY_TEXTURE),
        night: asset_server.load(NIGHT_TEXTURE),
    });
}

// wait until both textures resolve, then build the globe
// a load failure aborts the app instead of rendering an untextured sphere
fn spawn_when_loaded(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut globe_materials: ResMut<Assets<GlobeMaterial>>,
    images: Res<Assets<Image>>,
    asset_server: Res<AssetServer>,
    pending: Res<PendingTextures>,
    mut app_exit: EventWriter<AppExit>,
) {
    for (path, handle) in [(DAY_TEXTURE, &pending.day), (NIGHT_TEXTURE, &pending.night)] {
        if matches!(asset_server.get_load_state(handle.id()), Some(LoadState::Failed(_))) {
            error!("failed to load globe texture: {path}");
            app_exit.write(AppExit::error());
            commands.remove_resource::<PendingTextures>();
            return;
        }
    }

    // still loading
    if images.get(&pending.day).is_none() || images.get(&pending.night).is_none() {
        return;
    }

    commands.spawn((
        Globe,
        Mesh3d(meshes.add(Sphere::new(GLOBE_RADIUS).mesh().uv(64, 128))),
        MeshMaterial3d(globe_materials.add(GlobeMaterial {
            day_texture: pending.day.clone(),
            night_texture: pending.night.clone(),
            light_uniform: LightUniform {
                direction: lighting::light_direction(),
                _padding: 0.0,
            },
        })),
        Transform::default(),
    ));

    info!("globe textures loaded, scene ready");
    commands.remove_resource::<PendingTextures>();
}

// advance the spin and apply it, once per frame
// the increment is read live from the ui-controlled speed resource, so
// speed changes take effect on the very next frame
pub fn rotate(
    speed: Res<RotationSpeed>,
    mut angle: ResMut<RotationAngle>,
    mut globe_query: Query<&mut Transform, With<Globe>>,
) {
    // no globe yet means the texture barrier is still up, so no spin either
    let Ok(mut transform) = globe_query.single_mut() else {
        return;
    };

    angle.0 += speed.0;
    transform.rotation = Quat::from_rotation_y(angle.0);
}
