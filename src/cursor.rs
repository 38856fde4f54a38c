//! Random-access cursor into a [`DynamicArray`](crate::DynamicArray).
//!
//! A [`Cursor`] is a slot position, not a borrow: it can be stepped,
//! offset and compared freely, and is only resolved to an element by the
//! array that produced it (`array[cursor]`, [`DynamicArray::get_at`]).
//! Each cursor also remembers the buffer generation it was taken from, so
//! dereferencing a cursor that outlived a reallocation is caught instead of
//! reading freed memory.
//!
//! ```
//! use dyn_array::DynamicArray;
//!
//! let arr = DynamicArray::from([10, 20, 30]);
//! let mut it = arr.begin();
//! let mut seen = Vec::new();
//! while it != arr.end() {
//!     seen.push(arr[it]);
//!     it.advance();
//! }
//! assert_eq!(seen, [10, 20, 30]);
//! assert_eq!(arr.end() - arr.begin(), 3);
//! ```
//!
//! [`DynamicArray::get_at`]: crate::DynamicArray::get_at

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Position of a slot inside some array's buffer.
///
/// Stepping and arithmetic are unchecked: a cursor may point before the
/// first slot or past the end. Only dereferencing validates it.
pub struct Cursor<T> {
    position: isize,
    generation: u64,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Cursor<T> {
    pub(crate) const fn new(position: isize, generation: u64) -> Self {
        Self {
            position,
            generation,
            _marker: PhantomData,
        }
    }

    /// Raw slot position, counted from the first slot of the buffer.
    pub const fn position(&self) -> isize {
        self.position
    }

    pub(crate) const fn generation(&self) -> u64 {
        self.generation
    }

    /// Steps forward one slot (`++it`).
    pub fn advance(&mut self) -> &mut Self {
        self.position += 1;
        self
    }

    /// Steps back one slot (`--it`).
    pub fn retreat(&mut self) -> &mut Self {
        self.position -= 1;
        self
    }

    /// Steps forward one slot and returns the cursor as it was (`it++`).
    pub fn post_advance(&mut self) -> Self {
        let prior = *self;
        self.position += 1;
        prior
    }

    /// Steps back one slot and returns the cursor as it was (`it--`).
    pub fn post_retreat(&mut self) -> Self {
        let prior = *self;
        self.position -= 1;
        prior
    }

    /// A cursor `n` slots away from this one; `self` is left as it was.
    pub fn offset(self, n: isize) -> Self {
        Cursor::new(self.position + n, self.generation)
    }
}

impl<T> Clone for Cursor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<T> {}

impl<T> fmt::Debug for Cursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .field("generation", &self.generation)
            .finish()
    }
}

// Comparison is by position only, whichever array or generation the
// cursors came from.
impl<T> PartialEq for Cursor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl<T> Eq for Cursor<T> {}

impl<T> PartialOrd for Cursor<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Cursor<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.position.cmp(&other.position)
    }
}

impl<T> Hash for Cursor<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.position.hash(state);
    }
}

impl<T> Add<isize> for Cursor<T> {
    type Output = Cursor<T>;

    fn add(self, n: isize) -> Cursor<T> {
        Cursor::new(self.position + n, self.generation)
    }
}

impl<T> Add<Cursor<T>> for isize {
    type Output = Cursor<T>;

    fn add(self, it: Cursor<T>) -> Cursor<T> {
        it + self
    }
}

impl<T> Sub<isize> for Cursor<T> {
    type Output = Cursor<T>;

    fn sub(self, n: isize) -> Cursor<T> {
        Cursor::new(self.position - n, self.generation)
    }
}

/// `n - it` moves `it` back by `n` slots, mirroring `it - n`.
impl<T> Sub<Cursor<T>> for isize {
    type Output = Cursor<T>;

    fn sub(self, it: Cursor<T>) -> Cursor<T> {
        it - self
    }
}

/// Signed distance in slots.
impl<T> Sub for Cursor<T> {
    type Output = isize;

    fn sub(self, rhs: Cursor<T>) -> isize {
        self.position - rhs.position
    }
}

impl<T> AddAssign<isize> for Cursor<T> {
    fn add_assign(&mut self, n: isize) {
        self.position += n;
    }
}

impl<T> SubAssign<isize> for Cursor<T> {
    fn sub_assign(&mut self, n: isize) {
        self.position -= n;
    }
}
