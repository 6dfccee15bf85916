//! Body colors
//!
//! Colors carry no physical meaning; they are stored on each body only so
//! that front ends can draw it.

/// An opaque 8-bit RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert a point on the HSV color wheel to RGB.
    ///
    /// `h`, `s` and `v` are expected in `[0, 1]`; a hue of exactly `1.0`
    /// wraps around to red.
    pub fn from_hsv(h: f32, s: f32, v: f32) -> Self {
        let sector = (h * 6.0).floor();
        let f = h * 6.0 - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - f * s);
        let t = v * (1.0 - (1.0 - f) * s);

        let (r, g, b) = match (sector as i32).rem_euclid(6) {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Self::new(channel(r), channel(g), channel(b))
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

fn channel(value: f32) -> u8 {
    (value * 255.0).clamp(0.0, 255.0) as u8
}

/// How the spawner picks colors for new bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Each channel drawn independently
    #[default]
    Rgb,
    /// Random hue at fixed saturation and full brightness
    Hue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsv_primaries() {
        assert_eq!(Color::from_hsv(0.0, 1.0, 1.0), Color::new(255, 0, 0));
        assert_eq!(Color::from_hsv(1.0 / 3.0, 1.0, 1.0).g, 255);
        assert_eq!(Color::from_hsv(2.0 / 3.0, 1.0, 1.0).b, 255);
    }

    #[test]
    fn test_hsv_full_hue_wraps_to_red() {
        assert_eq!(Color::from_hsv(1.0, 1.0, 1.0), Color::new(255, 0, 0));
    }

    #[test]
    fn test_hsv_zero_saturation_is_grey() {
        let c = Color::from_hsv(0.4, 0.0, 0.5);
        assert_eq!(c.r, c.g);
        assert_eq!(c.g, c.b);
        assert_eq!(c.r, 127);
    }

    #[test]
    fn test_default_is_white() {
        assert_eq!(Color::default(), Color::WHITE);
    }
}
