//! Hazard striping.

use crate::color::Rgb;
use crate::pattern::StripesPattern;
use crate::rng::DeterministicRng;

const HAZARD_STRIPES: StripesPattern = StripesPattern::new_vertical(22);

/// Base color and inclusive noise range for each channel of one paint coat.
struct Coat {
    base: [i32; 3],
    noise: [(i32, i32); 3],
}

const YELLOW: Coat = Coat {
    base: [170, 120, 30],
    noise: [(-30, 20), (-25, 20), (-20, 20)],
};

const BLACK: Coat = Coat {
    base: [30, 30, 25],
    noise: [(-20, 10), (-15, 10), (-10, 10)],
};

/// Alternating yellow and black vertical bands, 22 pixels wide.
pub(super) fn warning_paint(x: u32, rng: &mut DeterministicRng) -> Rgb {
    let coat = if HAZARD_STRIPES.is_primary(x) {
        &YELLOW
    } else {
        &BLACK
    };

    let mut channel = |i: usize| {
        let (lo, hi) = coat.noise[i];
        (coat.base[i] + rng.offset(lo, hi)) as f64
    };
    let r = channel(0);
    let g = channel(1);
    let b = channel(2);
    Rgb::from_f64(r, g, b)
}
