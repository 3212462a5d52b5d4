//! Materials shaded with sinusoidal bands.

use crate::color::Rgb;
use crate::pattern::{Pattern2D, WaveAxis, WavePattern};
use crate::rng::DeterministicRng;

const WATER_G: WavePattern = WavePattern::new(25.0, 0.08, WaveAxis::X);
const WATER_B: WavePattern = WavePattern::new(35.0, 0.05, WaveAxis::Diagonal);

const HULL_R: WavePattern = WavePattern::new(35.0, 0.25, WaveAxis::Y);
const HULL_G: WavePattern = WavePattern::new(20.0, 0.18, WaveAxis::Y);
const HULL_B: WavePattern = WavePattern::new(18.0, 0.2, WaveAxis::Y);

const PIPE_R: WavePattern = WavePattern::new(22.0, 0.08, WaveAxis::Diagonal);
const PIPE_G: WavePattern = WavePattern::new(28.0, 0.12, WaveAxis::X);
const PIPE_B: WavePattern = WavePattern::new(18.0, 0.11, WaveAxis::Y);

/// Open water seen through a porthole.
pub(super) fn water_view(x: u32, y: u32, rng: &mut DeterministicRng) -> Rgb {
    let r = 25.0 + rng.jitter(8) as f64;
    let g = 70.0 + WATER_G.sample(x, y) + rng.jitter(8) as f64;
    let b = 110.0 + WATER_B.sample(x, y) + rng.jitter(8) as f64;
    Rgb::from_f64(r, g, b)
}

/// Brushed hull metal with horizontal streaks.
pub(super) fn hull_brushed(x: u32, y: u32, rng: &mut DeterministicRng) -> Rgb {
    let r = 110.0 + HULL_R.sample(x, y) + rng.jitter(12) as f64;
    let g = 120.0 + HULL_G.sample(x, y) + rng.jitter(10) as f64;
    let b = 128.0 + HULL_B.sample(x, y) + rng.jitter(10) as f64;
    Rgb::from_f64(r, g, b)
}

/// Oily pipework.
pub(super) fn pipe_oil(x: u32, y: u32, rng: &mut DeterministicRng) -> Rgb {
    let r = 80.0 + PIPE_R.sample(x, y) + rng.jitter(8) as f64;
    let g = 90.0 + PIPE_G.sample(x, y) + rng.jitter(8) as f64;
    let b = 74.0 + PIPE_B.sample(x, y) + rng.jitter(8) as f64;
    Rgb::from_f64(r, g, b)
}
