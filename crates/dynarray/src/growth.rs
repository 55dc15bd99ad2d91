//! Capacity growth policies.

use dynarray_core::GrowthPolicy;

/// Doubling growth with a minimum capacity floor.
///
/// `next_capacity = max(min_capacity, current * 2, required_min)`.
///
/// A single append only grows when the buffer is exactly full, so the
/// result is always `current * 2` there. A batch extend may need more
/// than double, in which case capacity jumps straight to the requirement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Doubling {
    min_capacity: usize,
}

impl Doubling {
    /// Doubling with the default floor of one slot.
    pub const fn new() -> Self {
        Self { min_capacity: 1 }
    }

    /// Doubling with a custom floor.
    pub const fn with_min_capacity(min_capacity: usize) -> Self {
        Self { min_capacity }
    }

    /// The configured floor.
    pub const fn min_capacity(&self) -> usize {
        self.min_capacity
    }
}

impl Default for Doubling {
    fn default() -> Self {
        Self::new()
    }
}

impl GrowthPolicy for Doubling {
    fn next_capacity(&self, current_capacity: usize, required_min: usize) -> usize {
        current_capacity
            .saturating_mul(2)
            .max(required_min)
            .max(self.min_capacity)
    }
}
