//! Array configuration parameters.

use crate::growth::Doubling;

/// Construction-time configuration for a [`DynamicArray`](crate::DynamicArray).
///
/// Controls the initial allocation and the growth floor. All values are
/// read once at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Number of element slots allocated up front.
    ///
    /// Default: 10. For arrays built from existing data the capacity is
    /// `max(rows, initial_capacity)`.
    pub initial_capacity: usize,

    /// Smallest capacity the growth policy will ever return.
    ///
    /// Default: 1. Keeps an array created with zero capacity from
    /// doubling `0` forever.
    pub min_capacity: usize,
}

impl ArrayConfig {
    /// Default number of slots allocated at construction.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 10;

    /// Default growth floor.
    pub const DEFAULT_MIN_CAPACITY: usize = 1;

    /// Create a config with the given initial capacity.
    ///
    /// Uses default values for all other parameters.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            min_capacity: Self::DEFAULT_MIN_CAPACITY,
        }
    }

    /// Build the doubling growth policy described by this config.
    pub fn growth_policy(&self) -> Doubling {
        Doubling::with_min_capacity(self.min_capacity)
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY)
    }
}
