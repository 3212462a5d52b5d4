//! Grid-line pattern generator.

use super::Pattern2D;

/// Raised lines on a square grid, as seen on grating and deck plates.
#[derive(Debug, Clone)]
pub struct GridPattern {
    /// Distance between grid lines in pixels.
    pub period: u32,
    /// Thickness of each line in pixels.
    pub line_width: u32,
    /// Offset returned on a line.
    pub boost: f64,
}

impl GridPattern {
    /// Create a new grid pattern.
    pub const fn new(period: u32, line_width: u32, boost: f64) -> Self {
        Self {
            period,
            line_width,
            boost,
        }
    }

    /// Whether the pixel lies on a grid line.
    #[inline]
    pub fn is_line(&self, x: u32, y: u32) -> bool {
        x % self.period < self.line_width || y % self.period < self.line_width
    }
}

impl Pattern2D for GridPattern {
    fn sample(&self, x: u32, y: u32) -> f64 {
        if self.is_line(x, y) {
            self.boost
        } else {
            0.0
        }
    }
}
