// Globe dimensions (scene units)
pub const GLOBE_RADIUS: f32 = 3.0;
pub const MARKER_RADIUS: f32 = 0.035;
pub const STARFIELD_RADIUS: f32 = 90.0;

// Camera orbit limits
pub const CAMERA_MIN_RADIUS: f32 = 5.0;
pub const CAMERA_MAX_RADIUS: f32 = 50.0;

// Interaction policy
pub const ROTATE_SENSITIVITY_PER_UNIT: f32 = 0.02;
pub const MARKER_VISIBLE_DISTANCE: f32 = 6.0;

// Asset paths
pub const DAY_TEXTURE: &str = "textures/earth_day.jpg";
pub const NIGHT_TEXTURE: &str = "textures/earth_night.jpg";

// Fixed city markers: (latitude, longitude, label)
pub const CITY_MARKERS: &[(f32, f32, &str)] = &[
    (51.51, -0.13, "London"),
    (40.71, -74.01, "New York"),
    (35.68, 139.69, "Tokyo"),
    (-33.87, 151.21, "Sydney"),
    (-23.55, -46.63, "Sao Paulo"),
    (28.61, 77.21, "New Delhi"),
];
