//! Stripes pattern generator.

/// Vertical stripes of equal width, alternating between two coats.
#[derive(Debug, Clone, Copy)]
pub struct StripesPattern {
    stripe_width: u32,
}

impl StripesPattern {
    /// Create a vertical stripes pattern `stripe_width` columns wide.
    pub const fn new_vertical(stripe_width: u32) -> Self {
        Self { stripe_width }
    }

    /// Index of the stripe containing column `x`.
    #[inline]
    pub fn stripe_index(&self, x: u32) -> u32 {
        x / self.stripe_width
    }

    /// Whether column `x` falls in an even-indexed stripe.
    #[inline]
    pub fn is_primary(&self, x: u32) -> bool {
        self.stripe_index(x) % 2 == 0
    }
}
