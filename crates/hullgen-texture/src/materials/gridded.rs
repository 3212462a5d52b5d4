//! Materials with raised grid lines.

use crate::color::Rgb;
use crate::pattern::{GridPattern, Pattern2D};
use crate::rng::DeterministicRng;

const GRATE_R: GridPattern = GridPattern::new(20, 2, 30.0);
const GRATE_G: GridPattern = GridPattern::new(20, 2, 25.0);
const GRATE_B: GridPattern = GridPattern::new(20, 2, 25.0);

const DECK_R: GridPattern = GridPattern::new(32, 2, 18.0);
const DECK_G: GridPattern = GridPattern::new(32, 2, 16.0);
const DECK_B: GridPattern = GridPattern::new(32, 2, 16.0);

/// Floor grating: bright bars every 20 pixels.
pub(super) fn grate_floor(x: u32, y: u32, rng: &mut DeterministicRng) -> Rgb {
    let r = 80.0 + GRATE_R.sample(x, y) + rng.jitter(8) as f64;
    let g = 88.0 + GRATE_G.sample(x, y) + rng.jitter(8) as f64;
    let b = 94.0 + GRATE_B.sample(x, y) + rng.jitter(8) as f64;
    Rgb::from_f64(r, g, b)
}

/// Deck plating: weld seams every 32 pixels.
pub(super) fn deck_plate(x: u32, y: u32, rng: &mut DeterministicRng) -> Rgb {
    let r = 95.0 + DECK_R.sample(x, y) + rng.jitter(8) as f64;
    let g = 102.0 + DECK_G.sample(x, y) + rng.jitter(8) as f64;
    let b = 108.0 + DECK_B.sample(x, y) + rng.jitter(8) as f64;
    Rgb::from_f64(r, g, b)
}
