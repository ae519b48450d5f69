//! Sequential color ramp for count magnitudes.

use std::fmt;

use serde::Serialize;

/// Simple RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }
}

impl fmt::Display for Rgb {
    /// Format as CSS: rgb(r,g,b)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Stops of the "Reds" ramp, light to dark, evenly spaced over [0, 1].
const REDS: &[Rgb] = &[
    Rgb::new(255, 245, 240),
    Rgb::new(254, 224, 210),
    Rgb::new(252, 187, 161),
    Rgb::new(252, 146, 114),
    Rgb::new(251, 106, 74),
    Rgb::new(239, 59, 44),
    Rgb::new(203, 24, 29),
    Rgb::new(165, 15, 21),
    Rgb::new(103, 0, 13),
];

/// Default trace colors for line series.
pub const BLUE: Rgb = Rgb::new(99, 110, 250);
pub const RED: Rgb = Rgb::new(239, 85, 59);

/// Position `t` in [0, 1] on the Reds ramp. Out-of-range and NaN inputs clamp.
pub fn reds(t: f64) -> Rgb {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let segments = (REDS.len() - 1) as f64;
    let pos = t * segments;
    let i = (pos.floor() as usize).min(REDS.len() - 2);
    REDS[i].lerp(REDS[i + 1], pos - i as f64)
}

/// Maps `value` linearly from `[min, max]` onto the Reds ramp.
///
/// A degenerate range (all values equal) maps to the ramp midpoint.
pub fn scale(value: f64, min: f64, max: f64) -> Rgb {
    if max <= min {
        return reds(0.5);
    }
    reds((value - min) / (max - min))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(reds(0.0), Rgb::new(255, 245, 240));
        assert_eq!(reds(1.0), Rgb::new(103, 0, 13));
        assert_eq!(scale(10.0, 10.0, 50.0), reds(0.0));
        assert_eq!(scale(50.0, 10.0, 50.0), reds(1.0));
    }

    #[test]
    fn test_stop_and_between() {
        assert_eq!(reds(0.5), Rgb::new(251, 106, 74));
        // halfway between the first two stops
        assert_eq!(reds(0.0625), Rgb::new(255, 235, 225));
    }

    #[test]
    fn test_clamps() {
        assert_eq!(reds(-3.0), reds(0.0));
        assert_eq!(reds(7.0), reds(1.0));
        assert_eq!(reds(f64::NAN), reds(0.0));
    }

    #[test]
    fn test_degenerate_range() {
        assert_eq!(scale(4.0, 4.0, 4.0), reds(0.5));
    }

    #[test]
    fn test_darker_for_larger_values() {
        let light = scale(2000.0, 2000.0, 3000.0);
        let dark = scale(3000.0, 2000.0, 3000.0);
        assert!(dark.g < light.g);
        assert_eq!(format!("{}", dark), "rgb(103,0,13)");
    }
}
