//! clock.rs
//!
//! Maps the globe's rotation angle to a 24-hour clock readout.
//! One full turn is exactly 24 hours; nothing but the angle feeds in.

use chrono::NaiveTime;
use std::f64::consts::PI;

// one revolution (2*pi) equals 24 hours
const HOURS_PER_RADIAN: f64 = 12.0 / PI;

// calibration constant so the fixed terminator lines up with 07:00 at angle zero
const HOUR_OFFSET: f64 = 10.0;

/// Clock readout derived from the rotation angle, recomputed every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    pub hours: u32,
    pub minutes: u32,
}

impl ClockTime {
    /// Derive the clock from a rotation angle in radians, any sign.
    pub fn from_angle(theta: f32) -> Self {
        let mut raw_hours = (f64::from(theta) * HOURS_PER_RADIAN + HOUR_OFFSET) % 24.0;

        // `%` keeps the sign of the dividend, so negative angles need the wrap
        if raw_hours < 0.0 {
            raw_hours += 24.0;
        }

        let hours = raw_hours.floor();
        let minutes = ((raw_hours - hours) * 60.0).floor();

        // the extra % 24 only matters if the wrap above rounded up to exactly 24.0
        Self {
            hours: hours as u32 % 24,
            minutes: minutes as u32,
        }
    }

    /// Zero-padded `HH:MM`.
    pub fn format(&self) -> String {
        NaiveTime::from_hms_opt(self.hours, self.minutes, 0)
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    #[test]
    fn test_always_in_range() {
        let mut theta = -50.0f32;
        while theta < 50.0 {
            let time = ClockTime::from_angle(theta);
            assert!(time.hours <= 23, "bad hours at theta = {theta}");
            assert!(time.minutes <= 59, "bad minutes at theta = {theta}");
            theta += 0.037;
        }
    }

    #[test]
    fn test_offset_calibration() {
        // 0 * 12/pi + 10 = 10
        assert_eq!(ClockTime::from_angle(0.0), ClockTime { hours: 10, minutes: 0 });
    }

    #[test]
    fn test_periodic_over_full_turn() {
        for theta in [0.1f32, 1.234, 2.5, -0.7, 4.0] {
            assert_eq!(
                ClockTime::from_angle(theta),
                ClockTime::from_angle(theta + TAU),
                "period broke at theta = {theta}"
            );
        }
    }

    #[test]
    fn test_small_negative_angle_wraps_high() {
        // just below 10:00, never a negative raw value
        let time = ClockTime::from_angle(-0.001);
        assert_eq!(time.hours, 9);
        assert_eq!(time.minutes, 59);
    }

    #[test]
    fn test_formats_zero_padded() {
        assert_eq!(ClockTime { hours: 7, minutes: 5 }.format(), "07:05");
        assert_eq!(ClockTime { hours: 0, minutes: 0 }.format(), "00:00");
        assert_eq!(ClockTime { hours: 23, minutes: 59 }.format(), "23:59");
    }

    #[test]
    fn test_clock_advances_monotonically() {
        // spin forward 1000 frames at the default per-frame increment and
        // check the readout ticks forward by at most one minute at a time
        let mut theta = 0.0f32;
        let mut previous = ClockTime::from_angle(theta);

        for _ in 0..1000 {
            theta += 0.001;
            let current = ClockTime::from_angle(theta);

            let previous_total = previous.hours * 60 + previous.minutes;
            let current_total = current.hours * 60 + current.minutes;
            let advance = (current_total + 24 * 60 - previous_total) % (24 * 60);
            assert!(advance <= 1, "clock jumped {advance} minutes at theta = {theta}");

            previous = current;
        }

        // 1.0 rad is about 3.8 hours past 10:00
        assert_eq!(previous.hours, 13);
    }
}
