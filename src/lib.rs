//! A resizable, contiguous sequence container with explicit capacity
//! control and index-based random-access cursors.
//!
//! ```
//! use dyn_array::DynamicArray;
//!
//! let mut arr = DynamicArray::new();
//! for value in 1..=3 {
//!     arr.push_back(value);
//! }
//! arr.push_front(0);
//! arr.insert(arr.begin() + 2, 99);
//! assert_eq!(arr.as_slice(), &[0, 1, 99, 2, 3]);
//!
//! arr.erase_range(arr.begin(), arr.begin() + 2);
//! assert_eq!(arr.as_slice(), &[99, 2, 3]);
//! assert_eq!(arr.capacity(), 8);
//! assert_eq!(arr.to_string(), "[ 99 2 3 | 0 1 0 0 0 ]");
//! ```

pub mod array;
pub mod cli;
pub mod cursor;
pub mod error;
mod raw;

pub use array::{DynamicArray, IntoIter};
pub use cursor::Cursor;
pub use error::{ArrayError, Result};

#[cfg(test)]
mod tests;
