use thiserror::Error;

/// Errors reported by [`DynamicArray`](crate::DynamicArray).
///
/// Only checked access and fallible reservation report errors; every other
/// precondition violation is a caller bug and panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArrayError {
    /// Checked access past the logical end of the array.
    #[error("index {index} out of range for array of length {len}")]
    OutOfRange { index: usize, len: usize },

    /// The requested slot count does not fit in a single allocation.
    #[error("capacity overflow: cannot allocate {requested} slots")]
    CapacityOverflow { requested: usize },
}

pub type Result<T, E = ArrayError> = std::result::Result<T, E>;
