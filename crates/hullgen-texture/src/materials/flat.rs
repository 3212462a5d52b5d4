//! Flat materials: a base color with per-channel noise and no pattern.

use crate::color::Rgb;
use crate::rng::DeterministicRng;

/// Cool grey steel with fine speckle.
pub(super) fn steel_plate(rng: &mut DeterministicRng) -> Rgb {
    let r = 95 + rng.jitter(12);
    let g = 105 + rng.jitter(10);
    let b = 112 + rng.jitter(10);
    Rgb::from_f64(r as f64, g as f64, b as f64)
}

/// Oxidized panel with heavy, mostly red-shifted variation.
pub(super) fn rust_panel(rng: &mut DeterministicRng) -> Rgb {
    let r = 120 + rng.jitter(30);
    let g = 75 + rng.jitter(20);
    let b = 50 + rng.jitter(20);
    Rgb::from_f64(r as f64, g as f64, b as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::tests::assert_channel_in;

    #[test]
    fn test_steel_plate_ranges() {
        let mut rng = DeterministicRng::new(42);
        for _ in 0..2000 {
            let c = steel_plate(&mut rng);
            assert_channel_in(c.r, 95.0, -12, 12);
            assert_channel_in(c.g, 105.0, -10, 10);
            assert_channel_in(c.b, 112.0, -10, 10);
        }
    }

    #[test]
    fn test_rust_panel_ranges() {
        let mut rng = DeterministicRng::new(42);
        for _ in 0..2000 {
            let c = rust_panel(&mut rng);
            assert_channel_in(c.r, 120.0, -30, 30);
            assert_channel_in(c.g, 75.0, -20, 20);
            assert_channel_in(c.b, 50.0, -20, 20);
        }
    }
}
