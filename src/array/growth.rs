//! Capacity policy shared by the constructors and the mutators.

/// Sized constructors reserve this many slots per requested element.
pub(crate) const INITIAL_CAPACITY_FACTOR: usize = 2;

/// Capacity for a constructor asked to hold `count` elements.
pub(crate) const fn initial(count: usize) -> usize {
    count.saturating_mul(INITIAL_CAPACITY_FACTOR)
}

/// Next capacity when a single-element insertion finds the buffer full.
pub(crate) const fn single(cap: usize) -> usize {
    if cap == 0 { 1 } else { cap.saturating_mul(2) }
}

/// Next capacity when `range` elements are inserted at once.
pub(crate) const fn bulk(cap: usize, range: usize) -> usize {
    if cap == 0 {
        range
    } else {
        cap.saturating_mul(2).saturating_add(range)
    }
}

/// Next capacity when the contents are replaced by `count` elements.
pub(crate) const fn replace(cap: usize, count: usize) -> usize {
    if cap == 0 { count } else { count.saturating_mul(2) }
}
