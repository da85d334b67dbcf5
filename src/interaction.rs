//! interaction.rs
//!
//! Camera-distance interaction policy: how fast a drag rotates the view
//! and whether the city markers are drawn. Both are recomputed every frame
//! from the orbit camera's current radius.

use crate::constants::{MARKER_VISIBLE_DISTANCE, ROTATE_SENSITIVITY_PER_UNIT};

/// Drag sensitivity for a given camera distance. Linear in distance so a
/// far-zoomed view covers ground at the same perceived rate as a close one.
pub fn rotate_sensitivity(distance: f32) -> f32 {
    distance * ROTATE_SENSITIVITY_PER_UNIT
}

/// Markers are drawn only when the camera is close to the surface.
/// Plain threshold, no hysteresis; flicker right at the boundary is accepted.
pub fn markers_visible(distance: f32) -> bool {
    distance < MARKER_VISIBLE_DISTANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensitivity_scales_with_distance() {
        assert!((rotate_sensitivity(10.0) - 0.2).abs() < 1e-6);
        assert!((rotate_sensitivity(5.0) - 0.1).abs() < 1e-6);
        assert!(rotate_sensitivity(50.0) > rotate_sensitivity(5.0));
    }

    #[test]
    fn test_markers_only_near_surface() {
        assert!(markers_visible(5.0));
        assert!(markers_visible(5.9));
        assert!(!markers_visible(6.0));
        assert!(!markers_visible(10.0));
    }
}
