use super::*;
use crate::raw::RawBuffer;
use crossbeam::scope;
use std::panic;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[test]
fn test_basic_push_pop() {
    let mut v = DynamicArray::new();
    v.push_back(1);
    v.push_back(2);
    v.push_back(3);
    assert_eq!(v.len(), 3);
    assert_eq!(v[0], 1);
    assert_eq!(v[1], 2);
    assert_eq!(v[2], 3);
    v.pop_back();
    assert_eq!(v.len(), 2);
    assert_eq!(*v.back(), 2);
    v.pop_back();
    v.pop_back();
    assert!(v.is_empty());
    v.pop_back();
    assert!(v.empty());
    assert_eq!(v.size(), 0);
}

#[test]
fn test_push_front_prepends() {
    let mut v = DynamicArray::new();
    v.push_front(3);
    v.push_front(2);
    v.push_front(1);
    v.push_back(4);
    assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
    assert_eq!(*v.front(), 1);
}

#[test]
fn test_single_insert_growth_doubles() {
    let mut v = DynamicArray::new();
    assert_eq!(v.capacity(), 0);
    let mut seen = Vec::new();
    for i in 0..5 {
        v.push_back(i);
        seen.push(v.capacity());
    }
    assert_eq!(seen, [1, 2, 4, 4, 8]);
}

#[test]
fn test_constructors_double_capacity() {
    let sized: DynamicArray<i32> = DynamicArray::with_count(5);
    assert_eq!(sized.len(), 0);
    assert_eq!(sized.capacity(), 10);

    let ranged = DynamicArray::from_slice(&[1, 2, 3]);
    assert_eq!(ranged.len(), 3);
    assert_eq!(ranged.capacity(), 6);

    let listed = DynamicArray::from([1, 2, 3, 4, 5]);
    assert_eq!(listed.capacity(), 10);

    let collected: DynamicArray<i32> = (0..4).collect();
    assert_eq!(collected.as_slice(), &[0, 1, 2, 3]);
    assert_eq!(collected.capacity(), 8);

    let empty: DynamicArray<i32> = DynamicArray::default();
    assert_eq!(empty.capacity(), 0);
}

#[test]
fn test_clone_keeps_capacity() {
    let mut src = DynamicArray::from([1, 2, 3]);
    src.reserve(20);
    let copy = src.clone();
    assert_eq!(copy.capacity(), 20);
    assert_eq!(copy, src);

    let mut target = DynamicArray::from([9, 9, 9, 9, 9, 9, 9]);
    let stale = target.begin();
    target.clone_from(&src);
    assert_eq!(target.as_slice(), &[1, 2, 3]);
    assert_eq!(target.capacity(), 20);
    assert!(target.get_at(stale).is_none());
}

#[test]
fn test_replace_with_list() {
    let mut v = DynamicArray::from([1]);
    v.replace_with_list(&[4, 5, 6]);
    assert_eq!(v.as_slice(), &[4, 5, 6]);
    assert_eq!(v.capacity(), 6);
}

#[test]
fn test_insert_remove() {
    let mut v = DynamicArray::new();
    v.push_back(1);
    v.push_back(3);
    let at = v.insert(v.begin() + 1, 2);
    assert_eq!(v.as_slice(), &[1, 2, 3]);
    assert_eq!(v[at], 2);
    let next = v.erase(at);
    assert_eq!(v.as_slice(), &[1, 3]);
    assert_eq!(v[next], 3);
}

#[test]
fn test_insert_into_empty_and_at_end() {
    let mut v = DynamicArray::new();
    v.insert(v.begin(), 5);
    assert_eq!(v.capacity(), 1);
    v.insert(v.end(), 6);
    assert_eq!(v.as_slice(), &[5, 6]);
}

#[test]
fn test_erase_last_returns_end() {
    let mut v = DynamicArray::from([1, 2, 3]);
    let after = v.erase(v.end() - 1);
    assert_eq!(after, v.end());
    assert_eq!(v.as_slice(), &[1, 2]);
}

#[test]
fn test_erase_whole_range() {
    let mut v = DynamicArray::from([1, 2, 3]);
    let first = v.erase_range(v.begin(), v.end());
    assert!(v.is_empty());
    assert_eq!(first, v.begin());
    assert_eq!(v.capacity(), 6);
}

#[test]
fn test_range_insert_growth() {
    let mut v = DynamicArray::from([1, 2, 3, 4, 5]);
    let first = v.insert_iter(v.begin() + 2, 6..12);
    assert_eq!(v.capacity(), 26);
    assert_eq!(v.as_slice(), &[1, 2, 6, 7, 8, 9, 10, 11, 3, 4, 5]);
    assert_eq!(v[first], 6);
}

#[test]
fn test_range_insert_grows_when_exactly_full() {
    let mut v = DynamicArray::from([1, 2]);
    v.insert_slice(v.end(), &[3, 4]);
    assert_eq!(v.capacity(), 10);
    assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
}

#[test]
fn test_range_insert_into_unallocated() {
    let mut v = DynamicArray::new();
    v.insert_slice(v.begin(), &[1, 2, 3]);
    assert_eq!(v.capacity(), 3);
    assert_eq!(v.as_slice(), &[1, 2, 3]);

    let mut e: DynamicArray<i32> = DynamicArray::new();
    e.insert_slice(e.begin(), &[]);
    assert_eq!(e.capacity(), 0);
}

#[test]
fn test_range_insert_past_end_is_ignored() {
    let mut v = DynamicArray::from([1, 2, 3]);
    let pos = v.end() + 2;
    let returned = v.insert_slice(pos, &[7, 8]);
    assert_eq!(returned, pos);
    assert_eq!(v.as_slice(), &[1, 2, 3]);
    assert_eq!(v.capacity(), 6);
}

#[test]
#[should_panic(expected = "lies before the first element")]
fn test_range_insert_before_begin() {
    let mut v = DynamicArray::from([1, 2, 3]);
    v.insert_slice(v.begin() - 1, &[0]);
}

#[test]
#[should_panic(expected = "insert position 4 is outside")]
fn test_out_of_bounds_insert() {
    let mut v = DynamicArray::from([1, 2, 3]);
    v.insert(v.end() + 1, 10);
}

#[test]
#[should_panic(expected = "erase position 0 is outside")]
fn test_out_of_bounds_erase() {
    let mut v: DynamicArray<i32> = DynamicArray::new();
    v.erase(v.begin());
}

#[test]
#[should_panic(expected = "invalid erase range")]
fn test_inverted_erase_range() {
    let mut v = DynamicArray::from([1, 2, 3]);
    v.erase_range(v.begin() + 2, v.begin());
}

#[test]
fn test_assign_fill() {
    let mut v = DynamicArray::from([1, 2, 3, 4, 5]);
    v.assign(3, 7);
    assert_eq!(v.as_slice(), &[7, 7, 7]);
    assert_eq!(v.capacity(), 10);

    v.assign(10, 1);
    assert_eq!(v.len(), 10);
    assert_eq!(v.capacity(), 20);

    let mut fresh = DynamicArray::new();
    fresh.assign(4, 'x');
    assert_eq!(fresh.capacity(), 4);
    assert_eq!(fresh.as_slice(), &['x'; 4]);
}

#[test]
fn test_assign_from_sequences() {
    let mut v = DynamicArray::from([1, 2, 3]);
    v.assign_iter([9, 8]);
    assert_eq!(v.as_slice(), &[9, 8]);
    assert_eq!(v.capacity(), 6);

    v.assign_slice(&[1, 2, 3, 4, 5, 6]);
    assert_eq!(v.as_slice(), &[1, 2, 3, 4, 5, 6]);
    assert_eq!(v.capacity(), 12);
}

#[test]
fn test_grow_and_shrink() {
    let mut v = DynamicArray::with_count(1);
    assert_eq!(v.capacity(), 2);
    v.push_back(1);
    v.push_back(2);
    v.push_back(3);
    assert!(v.capacity() >= 3);
    v.shrink_to_fit();
    assert_eq!(v.capacity(), 3);
    v.shrink_to_fit();
    assert_eq!(v.capacity(), 3);
    v.pop_back();
    v.pop_back();
    v.pop_back();
    v.shrink_to_fit();
    assert_eq!(v.capacity(), 0);
}

#[test]
fn test_reserve() {
    let mut v = DynamicArray::from([1, 2, 3, 4, 5]);
    let before = v.begin();
    v.reserve(4);
    assert_eq!(v.capacity(), 10);
    assert!(v.get_at(before).is_some());

    v.reserve(100);
    assert_eq!(v.capacity(), 100);
    assert_eq!(v.as_slice(), &[1, 2, 3, 4, 5]);
    assert!(v.get_at(before).is_none());
}

#[test]
fn test_try_reserve() {
    let mut v: DynamicArray<i32> = DynamicArray::new();
    assert!(v.try_reserve(10).is_ok());
    assert!(v.capacity() >= 10);

    let err = v.try_reserve(usize::MAX).unwrap_err();
    assert_eq!(err, ArrayError::CapacityOverflow { requested: usize::MAX });
    assert_eq!(v.capacity(), 10);
}

#[test]
fn test_clear_is_logical() {
    let mut v = DynamicArray::from([1, 2, 3]);
    v.clear();
    assert!(v.is_empty());
    assert_eq!(v.capacity(), 6);
    assert_eq!(v.unused(), &[1, 2, 3, 0, 0, 0]);
}

#[test]
fn test_display_shows_unused_slots() {
    let empty: DynamicArray<i32> = DynamicArray::new();
    assert_eq!(empty.to_string(), "[ | ]");

    let mut v = DynamicArray::with_count(2);
    v.push_back(5);
    assert_eq!(v.to_string(), "[ 5 | 0 0 0 ]");

    let mut w = DynamicArray::from([1, 2, 3]);
    w.pop_back();
    assert_eq!(w.to_string(), "[ 1 2 | 3 0 0 0 ]");

    let mut x = DynamicArray::from([1, 2, 3]);
    x.pop_front();
    assert_eq!(x.to_string(), "[ 2 3 | 1 0 0 0 ]");
    x.pop_front();
    x.pop_front();
    x.pop_front();
    assert!(x.is_empty());
}

#[test]
fn test_debug_lists_elements() {
    let v = DynamicArray::from([1, 2]);
    assert_eq!(format!("{v:?}"), "[1, 2]");
}

#[test]
fn test_checked_access() {
    let mut v = DynamicArray::from([1, 2, 3]);
    assert_eq!(v.at(0), Ok(&1));
    assert_eq!(v.at(3), Err(ArrayError::OutOfRange { index: 3, len: 3 }));
    *v.at_mut(1).unwrap() = 20;
    assert_eq!(v[1], 20);
    assert!(v.at_mut(7).is_err());

    let empty: DynamicArray<i32> = DynamicArray::new();
    assert_eq!(empty.at(0), Err(ArrayError::OutOfRange { index: 0, len: 0 }));
    assert_eq!(
        empty.at(0).unwrap_err().to_string(),
        "index 0 out of range for array of length 0"
    );
}

#[test]
fn test_front_back_mut() {
    let mut v = DynamicArray::from([1, 2, 3]);
    *v.front_mut() = 10;
    *v.back_mut() = 30;
    assert_eq!(v.as_slice(), &[10, 2, 30]);
}

#[test]
#[should_panic(expected = "front() called on an empty array")]
fn test_front_on_empty() {
    let v: DynamicArray<i32> = DynamicArray::new();
    v.front();
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn test_unchecked_index_past_len() {
    let v = DynamicArray::from([1, 2, 3]);
    let _value = v[3];
}

#[test]
fn test_cursor_walk_and_write() {
    let mut v = DynamicArray::from([1, 2, 3]);
    let mut it = v.begin();
    while it != v.end() {
        v[it] *= 10;
        it.advance();
    }
    assert_eq!(v.as_slice(), &[10, 20, 30]);

    let mut back = v.end();
    back.retreat();
    assert_eq!(v[back], 30);
    assert_eq!(v.get_at(v.end()), None);
    assert_eq!(v.get_at(v.begin() - 1), None);
    if let Some(slot) = v.get_at_mut(v.cbegin()) {
        *slot = 1;
    }
    assert_eq!(v[v.cbegin()], 1);
}

#[test]
fn test_cursor_arithmetic() {
    let v = DynamicArray::from([1, 2, 3, 4, 5]);
    let begin = v.begin();
    assert_eq!((begin + 3) - begin, 3);
    assert_eq!(begin - (begin + 3), -3);
    assert_eq!(2isize + begin, begin + 2);
    assert_eq!((begin + 4) - 1, begin + 3);
    assert_eq!(3isize - (begin + 4), begin + 1);
    assert_eq!(v.cend() - v.cbegin(), v.len() as isize);
    assert!(begin < begin + 1);

    let mut it = begin;
    let prior = it.post_advance();
    assert_eq!(prior, begin);
    assert_eq!(it.position(), 1);
    let prior = it.post_retreat();
    assert_eq!(prior.position(), 1);
    assert_eq!(it, begin);
    it += 4;
    assert_eq!(v[it], 5);
    it -= 2;
    assert_eq!(v[it], 3);
    assert_eq!(*it.advance().advance(), begin + 4);
}

#[test]
fn test_cursor_offset() {
    let v = DynamicArray::from([1, 2, 3, 4, 5]);
    let begin = v.begin();
    let third = begin.offset(2);
    assert_eq!(third, begin + 2);
    assert_eq!(begin.position(), 0);
    assert_eq!(v[third], 3);
    assert_eq!(third.offset(-2), begin);
    assert_eq!(v[v.end().offset(-1)], 5);
}

#[test]
fn test_cursors_compare_by_position_only() {
    let a = DynamicArray::from([1, 2]);
    let mut b = DynamicArray::from([3, 4]);
    let old_end = b.end();
    b.reserve(100);
    assert_eq!(a.end(), b.end());
    assert_eq!(old_end, b.end());
}

#[test]
#[should_panic(expected = "cursor invalidated by reallocation")]
fn test_stale_cursor_deref() {
    let mut v = DynamicArray::from([1, 2, 3]);
    let it = v.begin();
    v.shrink_to_fit();
    let _value = v[it];
}

#[test]
#[should_panic(expected = "cursor invalidated by reallocation")]
fn test_stale_cursor_insert() {
    let mut v = DynamicArray::from([1]);
    let it = v.begin();
    v.push_back(2);
    v.push_back(3);
    v.insert(it, 0);
}

#[test]
fn test_equality() {
    let a = DynamicArray::from([1, 2, 3]);
    let mut b = DynamicArray::from([1, 2, 3]);
    b.reserve(50);
    let c = DynamicArray::from([1, 2]);
    let d = DynamicArray::from([1, 2, 4]);

    assert!(a == a);
    assert!(a == b && b == a);
    assert!(!(a != b));
    assert!(a != c && c != a);
    assert!(a != d);
    assert!(!(a == d));
}

#[derive(Default)]
struct Droppable(Option<Arc<AtomicUsize>>);

impl Drop for Droppable {
    fn drop(&mut self) {
        if let Some(counter) = &self.0 {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[test]
fn test_raii_drop() {
    let counter = Arc::new(AtomicUsize::new(0));
    {
        let mut v = DynamicArray::new();
        for _ in 0..10 {
            v.push_back(Droppable(Some(counter.clone())));
        }
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }
    assert_eq!(counter.load(Ordering::SeqCst), 10);
}

#[test]
fn test_popped_values_live_until_release() {
    let counter = Arc::new(AtomicUsize::new(0));
    let mut v = DynamicArray::new();
    for _ in 0..4 {
        v.push_back(Droppable(Some(counter.clone())));
    }
    v.pop_back();
    v.pop_front();
    assert_eq!(counter.load(Ordering::SeqCst), 0);
    v.shrink_to_fit();
    assert_eq!(counter.load(Ordering::SeqCst), 2);
    drop(v);
    assert_eq!(counter.load(Ordering::SeqCst), 4);
}

static CREATED: AtomicUsize = AtomicUsize::new(0);
static DROPPED: AtomicUsize = AtomicUsize::new(0);

struct Bomb;

impl Default for Bomb {
    fn default() -> Self {
        if CREATED.fetch_add(1, Ordering::SeqCst) == 2 {
            panic!("boom");
        }
        Bomb
    }
}

impl Drop for Bomb {
    fn drop(&mut self) {
        DROPPED.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn test_panicking_default_releases_partial_fill() {
    let result = panic::catch_unwind(|| {
        let _ = RawBuffer::<Bomb>::allocate(5);
    });
    assert!(result.is_err());
    assert_eq!(CREATED.load(Ordering::SeqCst), 3);
    assert_eq!(DROPPED.load(Ordering::SeqCst), 2);
}

#[test]
fn test_zero_sized_elements() {
    let mut v = DynamicArray::new();
    for _ in 0..3 {
        v.push_back(());
    }
    assert_eq!(v.len(), 3);
    assert_eq!(v.capacity(), 4);
    v.erase(v.begin());
    assert_eq!(v.len(), 2);
}

#[test]
fn test_huge_zero_sized_capacity_is_immediate() {
    let count = usize::MAX / 4;
    let mut v: DynamicArray<()> = DynamicArray::with_count(count);
    assert_eq!(v.capacity(), count * 2);
    assert!(v.is_empty());
    v.push_back(());
    v.push_front(());
    assert_eq!(v.len(), 2);
    assert_eq!(v.unused().len(), count * 2 - 2);
}

#[test]
fn test_iterators() {
    let mut v = DynamicArray::new();
    v.push_back(10);
    v.push_back(20);
    v.push_back(30);

    let mut sum = 0;
    for &x in &v {
        sum += x;
    }
    assert_eq!(sum, 60);

    for x in &mut v {
        *x += 1;
    }
    assert_eq!(v[0], 11);

    let collected: Vec<i32> = v.clone().into_iter().collect();
    assert_eq!(collected, vec![11, 21, 31]);

    let mut owned = v.into_iter();
    assert_eq!(owned.len(), 3);
    assert_eq!(owned.next_back(), Some(31));
    assert_eq!(owned.next(), Some(11));
    assert_eq!(owned.next(), Some(21));
    assert_eq!(owned.next(), None);
}

#[test]
fn test_extend_pushes_back() {
    let mut v = DynamicArray::from([1]);
    v.extend([2, 3]);
    assert_eq!(v.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_concurrency() {
    let mut v = DynamicArray::new();
    for i in 0..100 {
        v.push_back(i);
    }

    scope(|s| {
        s.spawn(|_| {
            for x in &v {
                let _ = *x;
            }
        });
        s.spawn(|_| {
            for x in &v {
                let _ = *x;
            }
        });
    })
    .unwrap();
}

#[test]
fn test_growth_policy() {
    use crate::array::growth;
    assert_eq!(growth::initial(3), 6);
    assert_eq!(growth::single(0), 1);
    assert_eq!(growth::single(4), 8);
    assert_eq!(growth::bulk(0, 3), 3);
    assert_eq!(growth::bulk(4, 3), 11);
    assert_eq!(growth::replace(0, 3), 3);
    assert_eq!(growth::replace(4, 5), 10);
    assert_eq!(growth::single(usize::MAX), usize::MAX);
}

#[test]
fn test_parse_values() {
    assert_eq!(cli::parse_values("1, 2,3").unwrap(), vec![1, 2, 3]);
    assert!(cli::parse_values("").unwrap().is_empty());
    let err = cli::parse_values("1,x").unwrap_err();
    assert!(err.to_string().contains("invalid integer \"x\""));
}
