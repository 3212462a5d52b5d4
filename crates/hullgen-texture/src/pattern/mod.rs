//! Pattern generation primitives.
//!
//! Patterns are deterministic functions of the pixel coordinate. Materials
//! add them to a base channel value before noise is applied. Stripes are
//! the exception: they pick which coat a column is painted with.

mod grid;
mod stripes;
mod wave;

pub use grid::GridPattern;
pub use stripes::StripesPattern;
pub use wave::{WaveAxis, WavePattern};

/// Trait for 2D pattern generators.
///
/// Patterns return an additive channel offset for a pixel coordinate.
pub trait Pattern2D {
    /// Sample the pattern at a given pixel coordinate.
    fn sample(&self, x: u32, y: u32) -> f64;
}
