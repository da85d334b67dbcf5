//! lighting.rs
//!
//! Day/night shading model for the globe surface.
//! The same math runs per-fragment in `assets/shaders/globe.wgsl`; the
//! cpu-side copy here tints the city markers and keeps the blend testable.

use bevy::prelude::*;

// edges of the twilight band, in dot-product terms
// the soft band is what keeps the terminator from being a hard line
const TWILIGHT_MIN: f32 = -0.25;
const TWILIGHT_MAX: f32 = 0.25;

/// Fixed light direction in world space, constant for the whole session.
/// Picked for looks, not ephemeris; the terminator stays put in world space
/// while the globe turns under it.
pub fn light_direction() -> Vec3 {
    Vec3::new(1.0, 0.35, 0.45).normalize()
}

/// Cubic hermite step: 0 below `edge0`, 1 above `edge1`, smooth in between.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Blend factor between night (0.0) and day (1.0) for a surface normal.
/// Both vectors must already be unit length, that is on the caller.
pub fn day_mix(normal: Vec3, light: Vec3) -> f32 {
    smoothstep(TWILIGHT_MIN, TWILIGHT_MAX, normal.dot(light))
}

/// Linear blend between a night color and a day color.
pub fn blend(night: Vec3, day: Vec3, mix: f32) -> Vec3 {
    night.lerp(day, mix)
}

#[cfg(test)]
mod tests {
    use super::*;

    // normal with a chosen dot product against Vec3::X
    fn normal_with_dot(dot: f32) -> Vec3 {
        Vec3::new(dot, (1.0 - dot * dot).sqrt(), 0.0)
    }

    #[test]
    fn test_smoothstep_edges() {
        assert_eq!(smoothstep(-0.25, 0.25, -0.5), 0.0);
        assert_eq!(smoothstep(-0.25, 0.25, -0.25), 0.0);
        assert_eq!(smoothstep(-0.25, 0.25, 0.25), 1.0);
        assert_eq!(smoothstep(-0.25, 0.25, 0.5), 1.0);
        assert!((smoothstep(-0.25, 0.25, 0.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_full_night_below_band() {
        let light = Vec3::X;
        assert_eq!(day_mix(normal_with_dot(-0.25), light), 0.0);
        assert_eq!(day_mix(normal_with_dot(-0.8), light), 0.0);
        assert_eq!(day_mix(-Vec3::X, light), 0.0);
    }

    #[test]
    fn test_full_day_above_band() {
        let light = Vec3::X;
        assert_eq!(day_mix(normal_with_dot(0.25), light), 1.0);
        assert_eq!(day_mix(normal_with_dot(0.9), light), 1.0);
        assert_eq!(day_mix(Vec3::X, light), 1.0);
    }

    #[test]
    fn test_monotone_across_twilight() {
        let light = Vec3::X;
        let mut previous = 0.0;
        for step in 0..=50 {
            let dot = -0.25 + 0.5 * step as f32 / 50.0;
            let mix = day_mix(normal_with_dot(dot), light);
            assert!(mix >= previous, "blend dipped at dot = {dot}");
            previous = mix;
        }
        assert_eq!(previous, 1.0);
    }

    #[test]
    fn test_blend_endpoints() {
        let night = Vec3::new(0.1, 0.1, 0.3);
        let day = Vec3::new(1.0, 0.9, 0.7);
        assert_eq!(blend(night, day, 0.0), night);
        assert_eq!(blend(night, day, 1.0), day);
    }

    #[test]
    fn test_light_direction_is_unit() {
        assert!((light_direction().length() - 1.0).abs() < 1e-6);
    }
}
