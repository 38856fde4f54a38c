//! Positional mutation: push/pop at both ends, insert, erase and assign.
//!
//! Every shift happens inside the fully initialised buffer by rotating the
//! affected window, so a removed value ends up in the unused tail rather
//! than being dropped right away.

use tracing::trace;

use super::{DynamicArray, growth};
use crate::cursor::Cursor;

impl<T: Default> DynamicArray<T> {
    /// Appends `value`, doubling the capacity first if the buffer is full.
    pub fn push_back(&mut self, value: T) {
        self.grow_if_full();
        let len = self.len;
        self.buf.as_mut_slice()[len] = value;
        self.len += 1;
    }

    /// Prepends `value`, shifting every element one slot to the right.
    pub fn push_front(&mut self, value: T) {
        self.grow_if_full();
        let len = self.len;
        let window = &mut self.buf.as_mut_slice()[..=len];
        window.rotate_right(1);
        window[0] = value;
        self.len += 1;
    }

    /// Drops the last element from the logical range. No-op when empty.
    pub fn pop_back(&mut self) {
        if self.is_empty() {
            return;
        }
        self.len -= 1;
    }

    /// Removes the first element, shifting the rest one slot to the left.
    /// No-op when empty.
    pub fn pop_front(&mut self) {
        if self.is_empty() {
            return;
        }
        let len = self.len;
        self.buf.as_mut_slice()[..len].rotate_left(1);
        self.len -= 1;
    }

    /// Inserts `value` before `pos` and returns a cursor to it.
    ///
    /// The returned cursor belongs to the current buffer even if the
    /// insertion had to grow it; `pos` itself is stale in that case.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside `[begin, end]` or was invalidated by an
    /// earlier reallocation.
    ///
    /// ```
    /// use dyn_array::DynamicArray;
    ///
    /// let mut arr = DynamicArray::from([0, 1, 2, 3]);
    /// let at = arr.insert(arr.begin() + 2, 99);
    /// assert_eq!(arr[at], 99);
    /// assert_eq!(arr.as_slice(), &[0, 1, 99, 2, 3]);
    /// ```
    pub fn insert(&mut self, pos: Cursor<T>, value: T) -> Cursor<T> {
        let position = self.position_of(pos);
        let index = match usize::try_from(position) {
            Ok(index) if index <= self.len => index,
            _ => panic!(
                "insert position {position} is outside an array of length {}",
                self.len
            ),
        };

        self.grow_if_full();
        let len = self.len;
        let window = &mut self.buf.as_mut_slice()[index..=len];
        window.rotate_right(1);
        window[0] = value;
        self.len += 1;
        self.cursor_at(index)
    }

    /// Inserts every item yielded by `items` before `pos`, in order, and
    /// returns a cursor to the first inserted element.
    ///
    /// A `pos` past `end()` is rejected silently: nothing is inserted and
    /// `pos` is handed back unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies before `begin()` or was invalidated by an earlier
    /// reallocation.
    pub fn insert_iter<I>(&mut self, pos: Cursor<T>, items: I) -> Cursor<T>
    where
        I: IntoIterator<Item = T>,
    {
        let position = self.position_of(pos);
        assert!(
            position >= 0,
            "insert position {position} lies before the first element"
        );
        if position > self.len as isize {
            trace!(position, len = self.len, "range insert past end ignored");
            return pos;
        }
        let index = position as usize;

        let items: Vec<T> = items.into_iter().collect();
        let range = items.len();
        if self.len + range >= self.capacity() {
            self.reserve(growth::bulk(self.capacity(), range));
        }

        let len = self.len;
        let gap = &mut self.buf.as_mut_slice()[index..len + range];
        gap.rotate_right(range);
        for (slot, item) in gap.iter_mut().zip(items) {
            *slot = item;
        }
        self.len += range;
        self.cursor_at(index)
    }

    /// Removes the element at `pos` and returns a cursor to the slot it
    /// occupied, which now holds its successor (or is `end()`).
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside `[begin, end)` or was invalidated by a
    /// reallocation.
    pub fn erase(&mut self, pos: Cursor<T>) -> Cursor<T> {
        let position = self.position_of(pos);
        let index = match usize::try_from(position) {
            Ok(index) if index < self.len => index,
            _ => panic!(
                "erase position {position} is outside an array of length {}",
                self.len
            ),
        };

        let len = self.len;
        self.buf.as_mut_slice()[index..len].rotate_left(1);
        self.len -= 1;
        self.cursor_at(index)
    }

    /// Removes `[first, last)` and returns `first`.
    ///
    /// # Panics
    ///
    /// Panics unless `begin() <= first <= last <= end()`, or if either cursor
    /// was invalidated by a reallocation.
    ///
    /// ```
    /// use dyn_array::DynamicArray;
    ///
    /// let mut arr = DynamicArray::from([0, 1, 99, 2, 3]);
    /// arr.erase_range(arr.begin(), arr.begin() + 2);
    /// assert_eq!(arr.as_slice(), &[99, 2, 3]);
    /// ```
    pub fn erase_range(&mut self, first: Cursor<T>, last: Cursor<T>) -> Cursor<T> {
        let start = self.position_of(first);
        let stop = self.position_of(last);
        let len = self.len;
        assert!(
            0 <= start && start <= stop && stop <= len as isize,
            "invalid erase range [{start}, {stop}) for an array of length {len}"
        );

        let (start, stop) = (start as usize, stop as usize);
        let range = stop - start;
        self.buf.as_mut_slice()[start..len].rotate_left(range);
        self.len -= range;
        self.cursor_at(start)
    }

    /// Replaces the contents with the items yielded by `items`.
    pub fn assign_iter<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        let items: Vec<T> = items.into_iter().collect();
        let count = items.len();
        self.reserve_for_replace(count);
        for (slot, item) in self.buf.as_mut_slice().iter_mut().zip(items) {
            *slot = item;
        }
        self.len = count;
    }

    fn reserve_for_replace(&mut self, count: usize) {
        if count >= self.capacity() {
            self.reserve(growth::replace(self.capacity(), count));
        }
    }
}

impl<T: Clone + Default> DynamicArray<T> {
    /// Inserts a copy of `items` before `pos`; see
    /// [`insert_iter`](Self::insert_iter) for the position rules.
    ///
    /// ```
    /// use dyn_array::DynamicArray;
    ///
    /// let mut arr = DynamicArray::from([1, 2, 3, 4, 5]);
    /// let first = arr.insert_slice(arr.begin() + 2, &[6, 7]);
    /// assert_eq!(first, arr.begin() + 2);
    /// assert_eq!(arr.as_slice(), &[1, 2, 6, 7, 3, 4, 5]);
    /// ```
    pub fn insert_slice(&mut self, pos: Cursor<T>, items: &[T]) -> Cursor<T> {
        self.insert_iter(pos, items.iter().cloned())
    }

    /// Replaces the contents with `count` copies of `value`.
    ///
    /// ```
    /// use dyn_array::DynamicArray;
    ///
    /// let mut arr = DynamicArray::from([1, 2, 3, 4, 5]);
    /// arr.assign(3, 7);
    /// assert_eq!(arr.as_slice(), &[7, 7, 7]);
    /// assert_eq!(arr.capacity(), 10);
    /// ```
    pub fn assign(&mut self, count: usize, value: T) {
        self.reserve_for_replace(count);
        self.buf.as_mut_slice()[..count].fill(value);
        self.len = count;
    }

    /// Replaces the contents with a copy of `items`.
    pub fn assign_slice(&mut self, items: &[T]) {
        self.reserve_for_replace(items.len());
        self.buf.as_mut_slice()[..items.len()].clone_from_slice(items);
        self.len = items.len();
    }
}
