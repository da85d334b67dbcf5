use std::collections::HashMap;

use bevy::prelude::*;
use bevy::render::camera::Camera;
use bevy::window::Window;

use crate::constants::{CITY_MARKERS, GLOBE_RADIUS, MARKER_RADIUS};
use crate::interaction;
use crate::lighting;
use crate::systems::camera::{self, OrbitCamera};
use crate::systems::globe::Globe;

pub struct MarkerPlugin;

impl Plugin for MarkerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_label_container)
            .add_systems(Update, (
                spawn_markers,
                update_markers.after(camera::update),
                update_labels.after(update_markers),
            ));
    }
}

// marker dot tint on the night side vs the day side
const NIGHT_TINT: Vec3 = Vec3::new(1.0, 0.75, 0.35);
const DAY_TINT: Vec3 = Vec3::new(0.95, 0.2, 0.2);

// a labeled point fixed to the globe surface
#[derive(Component)]
pub struct CityMarker {
    pub label: &'static str,
}

// geographic position, degrees
#[derive(Component)]
pub struct LatLong {
    pub latitude: f32,
    pub longitude: f32,
}

// full ui screen container component
#[derive(Component)]
pub struct LabelContainer;

// individual marker labels
#[derive(Component)]
pub struct MarkerLabel {
    pub marker_entity: Entity,
}

// convert latlon to cartesian
pub fn latlon_to_pos(latitude: f32, longitude: f32, radius: f32) -> Vec3 {
    let lat_rad = latitude.to_radians();
    let lon_rad = longitude.to_radians();

    // spherical to cartesian conversion
    let x = radius * lat_rad.cos() * lon_rad.cos();
    let y = radius * lat_rad.sin();
    let z = radius * lat_rad.cos() * lon_rad.sin();

    Vec3::new(x, y, z)
}

// setup UI overlay
fn setup_label_container(mut commands: Commands) {
    // create UI container covering entire screen
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        },
        BackgroundColor(Color::NONE),
        LabelContainer,
    ));
}

// the marker set is fixed, spawned once as children of the globe so the
// dots ride along with the rotation
fn spawn_markers(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    globe_query: Query<Entity, Added<Globe>>,
) {
    let Ok(globe) = globe_query.single() else {
        return;
    };

    let marker_mesh = meshes.add(Sphere::new(MARKER_RADIUS).mesh().ico(8).unwrap());

    for &(latitude, longitude, label) in CITY_MARKERS {
        // each marker gets its own material so the day/night tint is per-marker
        let material = materials.add(StandardMaterial {
            base_color: Color::srgb(1.0, 1.0, 1.0),
            unlit: true,
            ..default()
        });

        commands
            .spawn((
                CityMarker { label },
                LatLong { latitude, longitude },
                Mesh3d(marker_mesh.clone()),
                MeshMaterial3d(material),
                Transform::from_translation(latlon_to_pos(latitude, longitude, GLOBE_RADIUS)),
                Visibility::Hidden, // camera starts zoomed out
            ))
            .insert(ChildOf(globe));
    }
}

// distance gate plus day/night tint for every marker dot
pub fn update_markers(
    camera_query: Query<&OrbitCamera>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut marker_query: Query<
        (&mut Visibility, &GlobalTransform, &MeshMaterial3d<StandardMaterial>),
        With<CityMarker>,
    >,
) {
    let Ok(camera) = camera_query.single() else {
        return;
    };

    let visible = interaction::markers_visible(camera.radius);
    let light = lighting::light_direction();

    for (mut visibility, global_transform, material_handle) in marker_query.iter_mut() {
        *visibility = if visible {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };

        if !visible {
            continue;
        }

        // a surface marker's world normal is just its direction from center
        let normal = global_transform.translation().normalize_or_zero();
        let tint = lighting::blend(NIGHT_TINT, DAY_TINT, lighting::day_mix(normal, light));

        if let Some(material) = materials.get_mut(&material_handle.0) {
            material.base_color = Color::srgb(tint.x, tint.y, tint.z);
        }
    }
}

fn update_labels(
    mut commands: Commands,
    markers: Query<(Entity, &GlobalTransform, &Visibility, &CityMarker, &LatLong)>,
    camera: Query<(&Camera, &Transform), With<Camera3d>>,
    mut labels: Query<(Entity, &mut Node, &mut Visibility, &MarkerLabel), Without<CityMarker>>,
    container: Query<Entity, With<LabelContainer>>,
    window: Query<&Window>,
) {
    let (Ok(window), Ok((camera, cam_transform)), Ok(container)) =
        (window.single(), camera.single(), container.single())
    else {
        return;
    };

    // map existing labels by marker entity
    let existing_labels: HashMap<Entity, Entity> = labels
        .iter()
        .map(|(label_entity, _, _, marker_label)| (marker_label.marker_entity, label_entity))
        .collect();

    // process each marker
    for (marker_entity, marker_transform, marker_visibility, marker, latlong) in markers.iter() {
        let marker_pos = marker_transform.translation();

        // labels follow the dots: hidden when the distance gate hides the
        // marker, when the globe occludes it, or when it leaves the screen
        let gated = *marker_visibility != Visibility::Hidden;
        let facing = is_visible(marker_pos, cam_transform.translation, Vec3::ZERO, GLOBE_RADIUS * 0.98);
        let screen_pos =
            world_to_screen(marker_pos, camera, cam_transform, window.width(), window.height());

        let should_show = gated && facing && screen_pos.is_some();

        if let Some(&label_entity) = existing_labels.get(&marker_entity) {
            // update existing label
            if let Ok((_, mut node, mut visibility, _)) = labels.get_mut(label_entity) {
                if let (true, Some(pos)) = (should_show, screen_pos) {
                    *visibility = Visibility::Inherited;
                    node.left = Val::Px(pos.x);
                    node.top = Val::Px(pos.y);
                } else {
                    *visibility = Visibility::Hidden;
                }
            }
        } else if let (true, Some(pos)) = (should_show, screen_pos) {
            // create new label
            let label_text = format!(
                "{}\n{:.1}, {:.1}",
                marker.label, latlong.latitude, latlong.longitude
            );

            commands.entity(container).with_children(|parent| {
                parent.spawn((
                    Text::new(label_text),
                    TextFont {
                        font_size: 12.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                    Node {
                        position_type: PositionType::Absolute,
                        left: Val::Px(pos.x),
                        top: Val::Px(pos.y),
                        ..default()
                    },
                    BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)), // textbox background
                    MarkerLabel { marker_entity },
                ));
            });
        }
    }
}

// UTILS

// convert world coordinates to screen coordinates
fn world_to_screen(
    world_pos: Vec3,
    camera: &Camera,
    camera_transform: &Transform,
    screen_width: f32,
    screen_height: f32,
) -> Option<Vec2> {
    let view_matrix = camera_transform.compute_matrix().inverse();
    let view_projection = camera.clip_from_view() * view_matrix;

    // transform to clip space
    let clip_pos = view_projection * Vec4::new(world_pos.x, world_pos.y, world_pos.z, 1.0);

    if clip_pos.w <= 0.0 {
        return None; // behind camera
    }

    // convert to NDC and check bounds
    let ndc = clip_pos.truncate() / clip_pos.w;
    if ndc.x.abs() > 1.0 || ndc.y.abs() > 1.0 {
        return None; // offscreen
    }

    // NDC to screen coordinates
    Some(Vec2::new(
        (ndc.x + 1.0) * 0.5 * screen_width,
        (1.0 - ndc.y) * 0.5 * screen_height, // Y is flipped
    ))
}

// check if a surface point is visible from the camera (unblocked by the globe)
// simple ray-sphere intersection test; the radius passed in is shrunk a
// little so near-side surface markers do not occlude themselves
fn is_visible(point: Vec3, cam_pos: Vec3, globe_center: Vec3, globe_radius: f32) -> bool {
    let cam_to_point = point - cam_pos;
    let cam_to_globe = globe_center - cam_pos;

    let projection = cam_to_globe.dot(cam_to_point.normalize());
    if projection < 0.0 || projection > cam_to_point.length() {
        return true;
    }

    let closest_point = cam_pos + cam_to_point.normalize() * projection;
    (closest_point - globe_center).length() > globe_radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latlon_on_sphere_surface() {
        for &(latitude, longitude, _) in CITY_MARKERS {
            let pos = latlon_to_pos(latitude, longitude, GLOBE_RADIUS);
            assert!((pos.length() - GLOBE_RADIUS).abs() < 1e-4);
        }
    }

    #[test]
    fn test_latlon_poles_and_equator() {
        let north = latlon_to_pos(90.0, 0.0, 1.0);
        assert!((north - Vec3::Y).length() < 1e-6);

        let equator = latlon_to_pos(0.0, 0.0, 1.0);
        assert!((equator - Vec3::X).length() < 1e-6);
    }

    #[test]
    fn test_near_side_marker_is_visible() {
        let cam = Vec3::new(0.0, 0.0, 10.0);
        let near = Vec3::new(0.0, 0.0, GLOBE_RADIUS);
        let far = Vec3::new(0.0, 0.0, -GLOBE_RADIUS);

        assert!(is_visible(near, cam, Vec3::ZERO, GLOBE_RADIUS * 0.98));
        assert!(!is_visible(far, cam, Vec3::ZERO, GLOBE_RADIUS * 0.98));
    }
}
