use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;

use crate::config::Settings;
use crate::constants::STARFIELD_RADIUS;

pub struct StarfieldPlugin;

impl Plugin for StarfieldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, start);
    }
}

// decorative shell of stars well outside the camera's zoom range
fn start(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<Settings>,
) {
    let mut rng = rand::rng();

    // one shared mesh and material for every star
    let star_mesh = meshes.add(Sphere::new(0.12).mesh().ico(2).unwrap());
    let star_material = materials.add(StandardMaterial {
        base_color: Color::srgb(1.0, 1.0, 1.0),
        unlit: true, // glowing effect
        ..default()
    });

    for _ in 0..settings.star_count {
        // uniform random direction on the unit sphere
        let y: f32 = rng.random_range(-1.0..1.0);
        let azimuth: f32 = rng.random_range(0.0..TAU);
        let ring = (1.0 - y * y).sqrt();
        let direction = Vec3::new(ring * azimuth.cos(), y, ring * azimuth.sin());

        commands.spawn((
            Mesh3d(star_mesh.clone()),
            MeshMaterial3d(star_material.clone()),
            Transform::from_translation(direction * STARFIELD_RADIUS)
                .with_scale(Vec3::splat(rng.random_range(0.4..1.4))),
        ));
    }
}
