use thiserror::Error;

/// Error types for `GrowVec` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum GrowVecError {
    /// Index is beyond the current vector length
    #[error("Index out of bounds: index {index} is beyond vector length {length}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current length of the vector
        length: usize,
    },
    /// Reallocation target cannot hold the live elements
    #[error("Capacity too small: requested {requested} slots, but {length} elements are live")]
    CapacityTooSmall {
        /// Capacity that was requested
        requested: usize,
        /// Number of live elements at the time of the request
        length: usize,
    },
    /// Capacity, or its size in bytes, does not fit the address space
    #[error("Capacity overflow: {requested} slots cannot be allocated")]
    CapacityOverflow {
        /// Capacity that was requested
        requested: usize,
    },
    /// Operation attempted on an empty vector
    #[error("Operation on empty vector")]
    EmptyVector,
}
