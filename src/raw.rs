//! Owning storage block behind [`DynamicArray`](crate::DynamicArray).
//!
//! Every one of the `capacity` slots holds a live `T` for the whole lifetime
//! of the block: slots are filled with `T::default()` at allocation time, so
//! the trailing, logically unused region can be read and rendered.

use std::alloc::{Layout, alloc, dealloc, handle_alloc_error};
use std::marker::PhantomData;
use std::mem;
use std::ptr::{self, NonNull};

use crate::error::{ArrayError, Result};

pub(crate) struct RawBuffer<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

// SAFETY: RawBuffer uniquely owns its slots, so moving it across threads is
// the same as moving the `T`s themselves.
unsafe impl<T: Send> Send for RawBuffer<T> {}
// SAFETY: shared access only ever hands out `&T`.
unsafe impl<T: Sync> Sync for RawBuffer<T> {}

impl<T> RawBuffer<T> {
    /// A block with no slots. Never allocates.
    pub(crate) const fn empty() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _marker: PhantomData,
        }
    }

    pub(crate) const fn capacity(&self) -> usize {
        self.cap
    }

    /// All `capacity` slots, used and unused alike.
    pub(crate) fn as_slice(&self) -> &[T] {
        // SAFETY: ptr is valid for `cap` initialised slots (or dangling with cap 0).
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.cap) }
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as above, and `&mut self` guarantees exclusive access.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.cap) }
    }

    fn layout(cap: usize) -> Result<Layout> {
        Layout::array::<T>(cap).map_err(|_| ArrayError::CapacityOverflow { requested: cap })
    }
}

impl<T: Default> RawBuffer<T> {
    /// Allocates `cap` slots, each holding `T::default()`.
    pub(crate) fn try_allocate(cap: usize) -> Result<Self> {
        if cap == 0 {
            return Ok(Self::empty());
        }

        let layout = Self::layout(cap)?;
        let ptr = if layout.size() == 0 {
            NonNull::dangling()
        } else {
            // SAFETY: layout has a non-zero size.
            let raw = unsafe { alloc(layout) };
            match NonNull::new(raw as *mut T) {
                Some(p) => p,
                None => handle_alloc_error(layout),
            }
        };

        // Slots of a zero-sized type without drop glue carry no state, so
        // one constructed value stands in for all of them.
        if layout.size() == 0 && !mem::needs_drop::<T>() {
            mem::forget(T::default());
            return Ok(Self {
                ptr,
                cap,
                _marker: PhantomData,
            });
        }

        // A panicking `T::default()` must not leak the block or the slots
        // written so far.
        let mut guard = PartialFill {
            ptr,
            layout,
            filled: 0,
        };
        while guard.filled < cap {
            // SAFETY: `filled < cap`, so the slot lies inside the block.
            unsafe { ptr::write(ptr.as_ptr().add(guard.filled), T::default()) };
            guard.filled += 1;
        }
        mem::forget(guard);

        Ok(Self {
            ptr,
            cap,
            _marker: PhantomData,
        })
    }

    /// Infallible variant of [`try_allocate`](Self::try_allocate); panics on
    /// capacity overflow.
    pub(crate) fn allocate(cap: usize) -> Self {
        match Self::try_allocate(cap) {
            Ok(buf) => buf,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        if self.cap == 0 {
            return;
        }
        // SAFETY: all `cap` slots are initialised and owned by us.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.cap)) };
        if let Ok(layout) = Self::layout(self.cap) {
            if layout.size() != 0 {
                // SAFETY: the block was allocated with this exact layout.
                unsafe { dealloc(self.ptr.as_ptr() as *mut u8, layout) };
            }
        }
    }
}

struct PartialFill<T> {
    ptr: NonNull<T>,
    layout: Layout,
    filled: usize,
}

impl<T> Drop for PartialFill<T> {
    fn drop(&mut self) {
        // SAFETY: exactly `filled` leading slots were written.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.filled));
            if self.layout.size() != 0 {
                dealloc(self.ptr.as_ptr() as *mut u8, self.layout);
            }
        }
    }
}
