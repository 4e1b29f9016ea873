//! Hue wheel colouring for star trails.

/// RGBA color with components in 0.0 - 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl TrailColor {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color from RGB components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Same color with the given alpha.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
}

impl Default for TrailColor {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Map a hue angle in degrees to an opaque color.
///
/// Each channel is a sine wave over the angle, with green lagging red by 270°
/// and blue by 135°. Periodic in 360°, every channel stays within [0, 1].
pub fn hue(angle_degrees: f32) -> TrailColor {
    let rad = angle_degrees.to_radians();
    let channel = |phase: f32| (rad + phase).sin() * 0.5 + 0.5;

    TrailColor::rgb(
        channel(0.0),
        channel(std::f32::consts::FRAC_PI_2 * 3.0),
        channel(std::f32::consts::FRAC_PI_4 * 3.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: TrailColor, b: TrailColor) -> bool {
        (a.r - b.r).abs() < 1e-4
            && (a.g - b.g).abs() < 1e-4
            && (a.b - b.b).abs() < 1e-4
            && (a.a - b.a).abs() < 1e-4
    }

    #[test]
    fn hue_at_zero() {
        let c = hue(0.0);
        assert!((c.r - 0.5).abs() < 1e-6);
        // sin(270°) = -1
        assert!(c.g.abs() < 1e-6);
        // sin(135°) = √2/2
        assert!((c.b - (0.5 + std::f32::consts::SQRT_2 / 4.0)).abs() < 1e-6);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn hue_at_ninety_is_full_red() {
        let c = hue(90.0);
        assert!((c.r - 1.0).abs() < 1e-6);
        assert!((c.g - 0.5).abs() < 1e-6);
    }

    #[test]
    fn hue_is_periodic() {
        for i in -20..20 {
            let angle = i as f32 * 37.5;
            assert!(close(hue(angle), hue(angle + 360.0)), "angle {}", angle);
        }
    }

    #[test]
    fn hue_channels_stay_in_unit_range() {
        for i in -2000..2000 {
            let c = hue(i as f32 * 1.3);
            for v in [c.r, c.g, c.b] {
                assert!((0.0..=1.0).contains(&v), "channel {} out of range", v);
            }
        }
    }

    #[test]
    fn with_alpha_keeps_rgb() {
        let c = hue(45.0).with_alpha(0.25);
        assert_eq!(c.a, 0.25);
        assert_eq!(c.r, hue(45.0).r);
    }
}
