//! The owning, resizable sequence container.
//!
//! Storage is one contiguous block of `capacity` slots; the first `len` of
//! them hold the logical elements, the rest are allocated but unused and
//! may hold stale values left behind by removals.

pub(crate) mod growth;
mod modifiers;
mod ops;

pub use ops::IntoIter;

use tracing::debug;

use crate::cursor::Cursor;
use crate::error::{ArrayError, Result};
use crate::raw::RawBuffer;

/// A growable array with an explicit, inspectable capacity.
///
/// Sized constructors allocate twice the requested element count up front,
/// and growth doubles the capacity, so repeated single insertions are
/// amortised O(1).
///
/// # Examples
///
/// ```
/// use dyn_array::DynamicArray;
///
/// let mut arr = DynamicArray::new();
/// arr.push_back(1);
/// arr.push_back(2);
/// arr.push_front(0);
/// assert_eq!(arr.as_slice(), &[0, 1, 2]);
/// assert!(arr.len() <= arr.capacity());
/// ```
pub struct DynamicArray<T> {
    buf: RawBuffer<T>,
    len: usize,
    /// Bumped every time `buf` is replaced; cursors taken before that no
    /// longer resolve.
    generation: u64,
}

impl<T> DynamicArray<T> {
    /// Number of logical elements.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Alias of [`len`](Self::len).
    pub const fn size(&self) -> usize {
        self.len
    }

    /// Total allocated slots.
    pub const fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Alias of [`is_empty`](Self::is_empty).
    pub const fn empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[T] {
        &self.buf.as_slice()[..self.len]
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;
        &mut self.buf.as_mut_slice()[..len]
    }

    /// The allocated but logically unused slots `[len, capacity)`.
    ///
    /// They hold either `T::default()` or values left over from earlier
    /// removals.
    pub fn unused(&self) -> &[T] {
        &self.buf.as_slice()[self.len..]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Cursor at the first element.
    pub fn begin(&self) -> Cursor<T> {
        Cursor::new(0, self.generation)
    }

    /// Cursor one past the last element.
    pub fn end(&self) -> Cursor<T> {
        Cursor::new(self.len as isize, self.generation)
    }

    /// Same as [`begin`](Self::begin); cursors never grant mutation on
    /// their own.
    pub fn cbegin(&self) -> Cursor<T> {
        self.begin()
    }

    /// Same as [`end`](Self::end).
    pub fn cend(&self) -> Cursor<T> {
        self.end()
    }

    /// Logically removes every element. Capacity and slot contents are
    /// left untouched.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// # Panics
    ///
    /// Panics if the array is empty.
    pub fn front(&self) -> &T {
        assert!(!self.is_empty(), "front() called on an empty array");
        &self.as_slice()[0]
    }

    /// # Panics
    ///
    /// Panics if the array is empty.
    pub fn front_mut(&mut self) -> &mut T {
        assert!(!self.is_empty(), "front_mut() called on an empty array");
        &mut self.as_mut_slice()[0]
    }

    /// # Panics
    ///
    /// Panics if the array is empty.
    pub fn back(&self) -> &T {
        assert!(!self.is_empty(), "back() called on an empty array");
        &self.as_slice()[self.len - 1]
    }

    /// # Panics
    ///
    /// Panics if the array is empty.
    pub fn back_mut(&mut self) -> &mut T {
        assert!(!self.is_empty(), "back_mut() called on an empty array");
        let last = self.len - 1;
        &mut self.as_mut_slice()[last]
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Bounds-checked access.
    ///
    /// # Errors
    ///
    /// [`ArrayError::OutOfRange`] if `index >= len()`.
    ///
    /// ```
    /// use dyn_array::{ArrayError, DynamicArray};
    ///
    /// let arr = DynamicArray::from([1, 2, 3]);
    /// assert_eq!(arr.at(2), Ok(&3));
    /// assert_eq!(arr.at(3), Err(ArrayError::OutOfRange { index: 3, len: 3 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<&T> {
        let len = self.len;
        self.get(index).ok_or(ArrayError::OutOfRange { index, len })
    }

    /// Mutable bounds-checked access.
    ///
    /// # Errors
    ///
    /// [`ArrayError::OutOfRange`] if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len;
        self.get_mut(index).ok_or(ArrayError::OutOfRange { index, len })
    }

    /// Element under `cursor`, or `None` if the cursor is outside
    /// `[begin, end)` or was taken before the last reallocation.
    pub fn get_at(&self, cursor: Cursor<T>) -> Option<&T> {
        self.slot_of(cursor).map(|index| &self.as_slice()[index])
    }

    pub fn get_at_mut(&mut self, cursor: Cursor<T>) -> Option<&mut T> {
        self.slot_of(cursor).map(|index| &mut self.as_mut_slice()[index])
    }

    fn slot_of(&self, cursor: Cursor<T>) -> Option<usize> {
        if cursor.generation() != self.generation {
            return None;
        }
        usize::try_from(cursor.position())
            .ok()
            .filter(|&index| index < self.len)
    }

    /// Resolves a cursor that is about to be dereferenced.
    pub(crate) fn resolve(&self, cursor: Cursor<T>) -> usize {
        let position = self.position_of(cursor);
        match usize::try_from(position) {
            Ok(index) if index < self.len => index,
            _ => panic!(
                "cursor at slot {position} is outside an array of length {}",
                self.len
            ),
        }
    }

    /// Position of a cursor handed to a mutator. Bounds are the caller's to
    /// check since they differ per operation.
    pub(crate) fn position_of(&self, cursor: Cursor<T>) -> isize {
        assert_eq!(
            cursor.generation(),
            self.generation,
            "cursor invalidated by reallocation"
        );
        cursor.position()
    }

    pub(crate) fn cursor_at(&self, index: usize) -> Cursor<T> {
        Cursor::new(index as isize, self.generation)
    }

    /// Swaps in a freshly allocated block and invalidates outstanding
    /// cursors.
    fn install(&mut self, buf: RawBuffer<T>, len: usize) {
        debug!(
            old_capacity = self.buf.capacity(),
            new_capacity = buf.capacity(),
            len,
            "replacing buffer"
        );
        self.buf = buf;
        self.len = len;
        self.generation = self.generation.wrapping_add(1);
    }
}

impl<T: Default> DynamicArray<T> {
    /// An empty array with no allocation.
    pub const fn new() -> Self {
        Self {
            buf: RawBuffer::empty(),
            len: 0,
            generation: 0,
        }
    }

    /// An empty array with room for `2 * count` elements.
    ///
    /// ```
    /// use dyn_array::DynamicArray;
    ///
    /// let arr: DynamicArray<u8> = DynamicArray::with_count(4);
    /// assert_eq!(arr.len(), 0);
    /// assert_eq!(arr.capacity(), 8);
    /// ```
    pub fn with_count(count: usize) -> Self {
        Self {
            buf: RawBuffer::allocate(growth::initial(count)),
            len: 0,
            generation: 0,
        }
    }

    /// Takes ownership of `items`; capacity is twice their count.
    pub(crate) fn from_vec(items: Vec<T>) -> Self {
        let len = items.len();
        let mut buf = RawBuffer::allocate(growth::initial(len));
        for (slot, item) in buf.as_mut_slice().iter_mut().zip(items) {
            *slot = item;
        }
        Self {
            buf,
            len,
            generation: 0,
        }
    }

    /// Grows the buffer to exactly `new_cap` slots, keeping the elements in
    /// order. Does nothing if `new_cap <= capacity()`.
    ///
    /// # Panics
    ///
    /// Panics if `new_cap` slots cannot be described by a single allocation.
    pub fn reserve(&mut self, new_cap: usize) {
        if let Err(err) = self.try_reserve(new_cap) {
            panic!("{err}");
        }
    }

    /// Fallible [`reserve`](Self::reserve).
    ///
    /// # Errors
    ///
    /// [`ArrayError::CapacityOverflow`] if the allocation size overflows.
    /// The array is left unchanged in that case.
    pub fn try_reserve(&mut self, new_cap: usize) -> Result<()> {
        if new_cap <= self.capacity() {
            return Ok(());
        }
        self.reallocate(new_cap)
    }

    /// Reallocates so that `capacity() == len()`. Does nothing if they are
    /// already equal.
    pub fn shrink_to_fit(&mut self) {
        if self.len == self.capacity() {
            return;
        }
        if let Err(err) = self.reallocate(self.len) {
            panic!("{err}");
        }
    }

    fn reallocate(&mut self, new_cap: usize) -> Result<()> {
        let mut fresh = RawBuffer::try_allocate(new_cap)?;
        let keep = self.len.min(new_cap);
        fresh.as_mut_slice()[..keep].swap_with_slice(&mut self.buf.as_mut_slice()[..keep]);
        self.install(fresh, keep);
        Ok(())
    }

    /// Grows by the single-insertion policy if every slot is in use.
    pub(crate) fn grow_if_full(&mut self) {
        if self.len == self.capacity() {
            self.reserve(growth::single(self.capacity()));
        }
    }
}

impl<T: Clone + Default> DynamicArray<T> {
    /// Copies `items` in order; capacity is twice their count.
    ///
    /// ```
    /// use dyn_array::DynamicArray;
    ///
    /// let arr = DynamicArray::from_slice(&[1, 2, 3]);
    /// assert_eq!(arr.len(), 3);
    /// assert_eq!(arr.capacity(), 6);
    /// ```
    pub fn from_slice(items: &[T]) -> Self {
        let mut buf = RawBuffer::allocate(growth::initial(items.len()));
        buf.as_mut_slice()[..items.len()].clone_from_slice(items);
        Self {
            buf,
            len: items.len(),
            generation: 0,
        }
    }

    /// Replaces the contents with a deep copy of `other`, taking over its
    /// capacity as well.
    pub fn replace_from(&mut self, other: &Self) {
        let mut buf = RawBuffer::allocate(other.capacity());
        buf.as_mut_slice()[..other.len].clone_from_slice(other.as_slice());
        self.install(buf, other.len);
    }

    /// Replaces the contents with a copy of `items`; capacity becomes twice
    /// their count.
    pub fn replace_with_list(&mut self, items: &[T]) {
        let mut buf = RawBuffer::allocate(growth::initial(items.len()));
        buf.as_mut_slice()[..items.len()].clone_from_slice(items);
        self.install(buf, items.len());
    }
}
