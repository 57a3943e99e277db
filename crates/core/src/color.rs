//! The color value type and fractional <-> byte channel scaling.

/// A color as written in the game's data files: fractional channels,
/// conventionally (but not strictly) in [0.0, 1.0], plus an optional
/// alpha. The hex form has no alpha encoding, so alpha is carried only
/// on the fractional side and dropped when converting to hex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: Option<f64>,
}

impl Color {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: None }
    }

    /// The three hex-representable channels, in output order.
    pub fn channels(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}

/// Scale a fractional channel to a byte: floor(value * 255), clamped to
/// [0, 255]. Clamping happens after scaling, so 2.0 scales to 510 and
/// clamps to 255, and any negative value clamps to 0. NaN maps to 0.
pub fn fraction_to_byte(value: f64) -> u8 {
    let scaled = (value * 255.0).floor();
    if scaled >= 255.0 {
        255
    } else if scaled >= 0.0 {
        scaled as u8
    } else {
        0
    }
}

/// Scale a byte back to a fractional channel: value / 255. The u8 domain
/// already bounds the input, so no clamp is needed.
pub fn byte_to_fraction(value: u8) -> f64 {
    f64::from(value) / 255.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_to_byte_endpoints() {
        assert_eq!(fraction_to_byte(0.0), 0);
        assert_eq!(fraction_to_byte(1.0), 255);
        assert_eq!(fraction_to_byte(0.5), 127);
    }

    #[test]
    fn test_fraction_to_byte_clamps_after_scaling() {
        assert_eq!(fraction_to_byte(-0.5), 0);
        assert_eq!(fraction_to_byte(1.5), 255);
        assert_eq!(fraction_to_byte(2.0), 255);
        assert_eq!(fraction_to_byte(f64::NAN), 0);
    }

    #[test]
    fn test_byte_to_fraction_endpoints() {
        assert_eq!(byte_to_fraction(0), 0.0);
        assert_eq!(byte_to_fraction(255), 1.0);
    }

    #[test]
    fn test_round_trip_all_bytes() {
        // 255 * (n / 255) must floor back to n for every byte value.
        for n in 0..=255u8 {
            assert_eq!(fraction_to_byte(byte_to_fraction(n)), n);
        }
    }
}
