//! Selection and sorting built on [`BoundedHeap`]
//!
//! ```rust
//! use bounded_heap::select::{heap_sort, largest_k};
//!
//! assert_eq!(largest_k([4, 9, 1, 7, 3], 2), vec![9, 7]);
//! assert_eq!(heap_sort(vec![3, 1, 2]), vec![1, 2, 3]);
//! ```

use crate::bounded::BoundedHeap;
use crate::capacity::Capacity;
use crate::traits::Prioritized;

/// Returns the `k` highest-priority elements, highest first
///
/// Runs in O(n log k) time and O(k) memory: a heap of capacity `k` evicts the
/// minimum whenever it overflows, so only the top `k` survive.
pub fn largest_k<T, I>(iter: I, k: usize) -> Vec<T>
where
    T: Prioritized,
    I: IntoIterator<Item = T>,
{
    if k == 0 {
        return Vec::new();
    }
    let mut heap = BoundedHeap::with_reserved(Capacity::new(k));
    heap.extend(iter);

    let mut kept = heap.into_sorted_vec();
    kept.reverse();
    kept
}

/// Sorts elements by ascending priority in O(n log n)
pub fn heap_sort<T: Prioritized>(items: Vec<T>) -> Vec<T> {
    let (heap, _) = BoundedHeap::heapify(items, Capacity::Unbounded);
    heap.into_sorted_vec()
}
