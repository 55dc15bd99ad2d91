//! Core abstraction traits for capacity management.

/// Decides how many element slots to allocate when an array overflows.
///
/// Implemented by growth strategies in the `dynarray` crate. The array
/// only consults the policy once it already knows a reallocation is
/// needed; the policy never triggers growth itself.
pub trait GrowthPolicy {
    /// Compute the capacity to reallocate to.
    ///
    /// `current_capacity` is the number of slots allocated now and
    /// `required_min` the number of slots the pending write needs. A
    /// result below `required_min` is rejected by the caller with
    /// [`ArrayError::CapacityExceeded`](crate::ArrayError::CapacityExceeded).
    fn next_capacity(&self, current_capacity: usize, required_min: usize) -> usize;
}

impl<P: GrowthPolicy + ?Sized> GrowthPolicy for &P {
    fn next_capacity(&self, current_capacity: usize, required_min: usize) -> usize {
        (**self).next_capacity(current_capacity, required_min)
    }
}

impl<P: GrowthPolicy + ?Sized> GrowthPolicy for Box<P> {
    fn next_capacity(&self, current_capacity: usize, required_min: usize) -> usize {
        (**self).next_capacity(current_capacity, required_min)
    }
}
