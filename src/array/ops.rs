use std::fmt;
use std::iter::FusedIterator;
use std::mem;
use std::ops::{Index, IndexMut};

use super::DynamicArray;
use crate::cursor::Cursor;
use crate::raw::RawBuffer;

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T> Index<Cursor<T>> for DynamicArray<T> {
    type Output = T;

    fn index(&self, cursor: Cursor<T>) -> &T {
        let index = self.resolve(cursor);
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<Cursor<T>> for DynamicArray<T> {
    fn index_mut(&mut self, cursor: Cursor<T>) -> &mut T {
        let index = self.resolve(cursor);
        &mut self.as_mut_slice()[index]
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }
        self.iter().zip(other.iter()).all(|(lhs, rhs)| lhs == rhs)
    }

    #[allow(clippy::partialeq_ne_impl)]
    fn ne(&self, other: &Self) -> bool {
        if self.len != other.len {
            return true;
        }
        self.iter().zip(other.iter()).any(|(lhs, rhs)| lhs != rhs)
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

/// Renders the used elements, a `|` separator, then the unused slots:
/// `[ 1 2 3 | 0 0 0 ]`.
impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[ ")?;
        for item in self.as_slice() {
            write!(f, "{item} ")?;
        }
        f.write_str("| ")?;
        for item in self.unused() {
            write!(f, "{item} ")?;
        }
        f.write_str("]")
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone + Default> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut buf = RawBuffer::allocate(self.capacity());
        buf.as_mut_slice()[..self.len].clone_from_slice(self.as_slice());
        Self {
            buf,
            len: self.len,
            generation: 0,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.replace_from(source);
    }
}

impl<T: Default> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default> From<Vec<T>> for DynamicArray<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T: Default, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(items: [T; N]) -> Self {
        Self::from_vec(Vec::from(items))
    }
}

impl<T: Clone + Default> From<&[T]> for DynamicArray<T> {
    fn from(items: &[T]) -> Self {
        Self::from_slice(items)
    }
}

impl<T: Default> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: Default> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Owning iterator over the logical elements of a [`DynamicArray`].
///
/// Elements are taken out with [`mem::take`], leaving `T::default()` in the
/// vacated slot, hence the `T: Default` bound on iteration.
pub struct IntoIter<T> {
    buf: RawBuffer<T>,
    front: usize,
    back: usize,
}

impl<T: Default> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            buf: self.buf,
            front: 0,
            back: self.len,
        }
    }
}

impl<T: Default> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        let item = mem::take(&mut self.buf.as_mut_slice()[self.front]);
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T: Default> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(mem::take(&mut self.buf.as_mut_slice()[self.back]))
    }
}

impl<T: Default> ExactSizeIterator for IntoIter<T> {}

impl<T: Default> FusedIterator for IntoIter<T> {}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::DynamicArray;

    /// Serialised as a plain sequence of the logical elements.
    impl<T: Serialize> Serialize for DynamicArray<T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(self.iter())
        }
    }

    impl<'de, T: Deserialize<'de> + Default> Deserialize<'de> for DynamicArray<T> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            Vec::<T>::deserialize(deserializer).map(DynamicArray::from)
        }
    }
}
