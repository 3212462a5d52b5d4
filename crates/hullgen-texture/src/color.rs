//! 8-bit RGB pixel type and channel clamping.

/// Clamp a computed channel value to a byte, rounding to nearest.
///
/// Out-of-range and non-finite inputs saturate: values below zero (and NaN)
/// become 0, values above 255 become 255.
#[inline]
pub fn clamp_channel(value: f64) -> u8 {
    // `as u8` saturates and maps NaN to 0.
    value.round().clamp(0.0, 255.0) as u8
}

/// RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from already-clamped channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from unclamped channel values.
    pub fn from_f64(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
        }
    }

    /// Channels in on-disk bitmap order (blue, green, red).
    #[inline]
    pub const fn to_bgr(self) -> [u8; 3] {
        [self.b, self.g, self.r]
    }
}
