//! Quality bounds shared by every standard aging rule.

use crate::value_object::ValueObject;

/// Lowest quality a standard item can reach.
pub const MIN_QUALITY: i32 = 0;

/// Highest quality a standard item can reach.
pub const MAX_QUALITY: i32 = 50;

/// Inclusive `[min, max]` range that quality saturates into.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct QualityBounds {
    min: i32,
    max: i32,
}

impl QualityBounds {
    /// The shop's standard range, `[0, 50]`.
    pub const STANDARD: Self = Self {
        min: MIN_QUALITY,
        max: MAX_QUALITY,
    };

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// Apply `change` to `quality`, saturating at the bound the change moves towards.
    ///
    /// Only that one bound is consulted: a rise is capped at `max`, a drop is
    /// floored at `min`, and a zero change returns `quality` untouched.
    pub fn shift(&self, quality: i32, change: i32) -> i32 {
        let shifted = quality.saturating_add(change);
        if change > 0 {
            shifted.min(self.max)
        } else if change < 0 {
            shifted.max(self.min)
        } else {
            quality
        }
    }
}

impl Default for QualityBounds {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl ValueObject for QualityBounds {}
