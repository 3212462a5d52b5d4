//! Sinusoidal banding pattern.

use super::Pattern2D;

/// Which coordinate drives the wave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveAxis {
    /// Bands vary along x.
    X,
    /// Bands vary along y.
    Y,
    /// Bands vary along x + y.
    Diagonal,
}

/// `amplitude * sin(frequency * coord)`, with the angle in radians.
#[derive(Debug, Clone)]
pub struct WavePattern {
    pub amplitude: f64,
    pub frequency: f64,
    pub axis: WaveAxis,
}

impl WavePattern {
    pub const fn new(amplitude: f64, frequency: f64, axis: WaveAxis) -> Self {
        Self {
            amplitude,
            frequency,
            axis,
        }
    }
}

impl Pattern2D for WavePattern {
    fn sample(&self, x: u32, y: u32) -> f64 {
        let coord = match self.axis {
            WaveAxis::X => x as f64,
            WaveAxis::Y => y as f64,
            WaveAxis::Diagonal => x as f64 + y as f64,
        };
        self.amplitude * (coord * self.frequency).sin()
    }
}
