//! Pluggable backing storage for the binary heap
//!
//! The heap algorithm only ever needs index-based access to a contiguous sequence:
//! compare two slots, swap two slots, append at the tail and truncate the tail.
//! [`HeapStorage`] captures exactly that, so the sift operations are written once and
//! shared by every ordering strategy:
//!
//! - `Vec<T>` where `T: Prioritized`: elements report their own priority (default)
//! - [`ByComparator`]: a `Vec<T>` ordered by a comparator supplied at construction
//!
//! # Example
//!
//! ```rust
//! use bounded_heap::{BoundedHeap, ByComparator};
//!
//! // Order words by length rather than alphabetically
//! let words = ByComparator::from_vec(vec!["ccc", "a", "bb"], |a: &&str, b: &&str| a.len().cmp(&b.len()));
//! let (mut heap, discarded) = BoundedHeap::heapify(words, 2);
//! assert_eq!(discarded, vec!["a"]);
//! assert_eq!(heap.pop(), Some("bb"));
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::traits::Prioritized;

/// Index-addressed sequence a heap can be laid out in
///
/// Implementations must keep elements contiguous: indices `0..len()` are always
/// valid and `push`/`pop` only touch the tail. Only the heap may reorder elements
/// while it owns the storage.
pub trait HeapStorage {
    /// The element type stored
    type Item;

    /// Number of stored elements
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the element at `i` has a strictly lower priority than the one at `j`
    ///
    /// Both indices must be in bounds.
    fn less(&self, i: usize, j: usize) -> bool;

    /// Exchanges the elements at `i` and `j`
    fn swap(&mut self, i: usize, j: usize);

    /// Appends an element at the tail
    fn push(&mut self, item: Self::Item);

    /// Removes the tail element
    fn pop(&mut self) -> Option<Self::Item>;

    /// Removes all elements
    fn clear(&mut self);

    /// All elements in storage order
    fn as_slice(&self) -> &[Self::Item];

    /// The element at index 0, which is the minimum once the storage is heap-ordered
    fn first(&self) -> Option<&Self::Item> {
        self.as_slice().first()
    }
}

impl<T: Prioritized> HeapStorage for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        self[i].precedes(&self[j])
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.as_mut_slice().swap(i, j);
    }

    #[inline]
    fn push(&mut self, item: T) {
        Vec::push(self, item);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        Vec::pop(self)
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }

    #[inline]
    fn as_slice(&self) -> &[T] {
        Vec::as_slice(self)
    }
}

/// A `Vec<T>` ordered by a caller-supplied comparator
///
/// Elements need not implement [`Prioritized`]; `cmp(a, b) == Ordering::Less`
/// means `a` is popped before `b`. The comparator must be a total order and must
/// not change its answers while the storage is owned by a heap.
#[derive(Clone)]
pub struct ByComparator<T, F> {
    data: Vec<T>,
    cmp: F,
}

impl<T, F> ByComparator<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Creates empty storage ordered by `cmp`
    pub fn new(cmp: F) -> Self {
        Self::from_vec(Vec::new(), cmp)
    }

    /// Wraps existing elements, in arbitrary order, to be ordered by `cmp`
    pub fn from_vec(data: Vec<T>, cmp: F) -> Self {
        Self { data, cmp }
    }

    /// Consumes the storage, returning the elements in storage order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Compares two elements with the stored comparator
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.cmp)(a, b)
    }
}

impl<T, F> HeapStorage for ByComparator<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        (self.cmp)(&self.data[i], &self.data[j]) == Ordering::Less
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.data.swap(i, j);
    }

    #[inline]
    fn push(&mut self, item: T) {
        self.data.push(item);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.data.pop()
    }

    fn clear(&mut self) {
        self.data.clear();
    }

    #[inline]
    fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: fmt::Debug, F> fmt::Debug for ByComparator<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByComparator")
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}
