use bevy::input::mouse::MouseWheel;
use bevy::prelude::*;

use crate::constants::{CAMERA_MAX_RADIUS, CAMERA_MIN_RADIUS};
use crate::interaction;

pub struct OrbitCamPlugin;

impl Plugin for OrbitCamPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, update);
    }
}

// how quickly the camera chases its targets (per second)
const DAMPING: f32 = 8.0;

// camera component
// inputs move the target values, the actual radius/angles ease toward them
// each frame, which is what makes zoom and rotate feel damped
#[derive(Component, Debug)]
pub struct OrbitCamera {
    pub radius: f32,
    pub angle: f32,
    pub v_angle: f32,

    pub target_radius: f32,
    pub target_angle: f32,
    pub target_v_angle: f32,

    pub is_dragging: bool,
    pub target: Vec3,

    pub min_radius: f32,
    pub max_radius: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            radius: 15.0,
            angle: 0.0,
            v_angle: 0.3,

            target_radius: 15.0,
            target_angle: 0.0,
            target_v_angle: 0.3,

            is_dragging: false,
            target: Vec3::ZERO,

            min_radius: CAMERA_MIN_RADIUS,
            max_radius: CAMERA_MAX_RADIUS,
        }
    }
}

impl OrbitCamera {
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            target_radius: radius,
            ..default()
        }
    }

    // set target point for the camera to orbit
    pub fn with_target(mut self, target: Vec3) -> Self {
        self.target = target;
        self
    }

    // allow custom zoom limits
    pub fn with_zoom_limits(mut self, min_radius: f32, max_radius: f32) -> Self {
        self.min_radius = min_radius;
        self.max_radius = max_radius;
        self
    }

    // calculate world position from spherical coordinates
    // https://en.wikipedia.org/wiki/Spherical_coordinate_system#Cartesian_coordinates
    pub fn calculate_position(&self) -> Vec3 {
        let x = self.radius * self.v_angle.cos() * self.angle.cos();
        let y = self.radius * self.v_angle.sin();
        let z = self.radius * self.v_angle.cos() * self.angle.sin();

        self.target + Vec3::new(x, y, z)
    }
}

pub fn update(
    mut camera_query: Query<(&mut Transform, &mut OrbitCamera)>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<CursorMoved>,
    mut scroll_events: EventReader<MouseWheel>,
    time: Res<Time>,
) {
    for (mut transform, mut camera) in camera_query.iter_mut() {
        // handle mouse drag
        if mouse_buttons.just_pressed(MouseButton::Right) {
            camera.is_dragging = true;
        }
        if mouse_buttons.just_released(MouseButton::Right) {
            camera.is_dragging = false;
        }

        // drag sensitivity scales with distance, far views spin faster
        let sensitivity = interaction::rotate_sensitivity(camera.radius);

        // update camera angles
        if camera.is_dragging {
            for motion in mouse_motion.read() {
                if let Some(delta) = motion.delta {
                    camera.target_angle += delta.x * sensitivity * 0.05;
                    camera.target_v_angle += delta.y * sensitivity * 0.05;
                }
                // clamp pitch
                camera.target_v_angle = camera.target_v_angle.clamp(-1.5, 1.5);
            }
        }

        // handle mouse scroll
        for scroll in scroll_events.read() {
            camera.target_radius -= scroll.y * 1.5;
        }
        camera.target_radius = camera.target_radius.clamp(camera.min_radius, camera.max_radius);

        // ease actual values toward the targets
        let t = (DAMPING * time.delta_secs()).min(1.0);
        camera.radius += (camera.target_radius - camera.radius) * t;
        camera.angle += (camera.target_angle - camera.angle) * t;
        camera.v_angle += (camera.target_v_angle - camera.v_angle) * t;

        // update camera position/orientation
        transform.translation = camera.calculate_position();
        transform.look_at(camera.target, Vec3::Y);
    }
}
