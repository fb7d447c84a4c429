//! Bounded binary min-heap
//!
//! An array-backed binary min-heap with an optional capacity. Pushing onto a full
//! heap does not fail: the element with the lowest priority among the stored
//! elements and the new one is evicted and handed back to the caller. A heap of
//! capacity `k` therefore always retains the `k` highest-priority elements it has
//! seen.
//!
//! The heap is laid out in place: the children of index `i` live at `2i + 1` and
//! `2i + 2`, and every child's priority is at least its parent's.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity |
//! |------------|------------|
//! | `push`     | O(log n)   |
//! | `pop`      | O(log n)   |
//! | `peek`     | O(1)       |
//! | `heapify`  | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use bounded_heap::BoundedHeap;
//!
//! let mut heap = BoundedHeap::new(3);
//! assert_eq!(heap.push(5), None);
//! assert_eq!(heap.push(1), None);
//! assert_eq!(heap.push(8), None);
//!
//! // Full: the minimum of {5, 1, 8, 4} is evicted
//! assert_eq!(heap.push(4), Some(1));
//! assert_eq!(heap.peek(), Some(&4));
//! assert_eq!(heap.into_sorted_vec(), vec![4, 5, 8]);
//! ```

use std::fmt;
use std::iter::FusedIterator;

use crate::capacity::Capacity;
use crate::error::HeapError;
use crate::storage::HeapStorage;
use crate::traits::Prioritized;

/// A binary min-heap holding at most `capacity` elements
///
/// `S` is the backing sequence; it defaults to `Vec<T>` for elements that
/// implement [`Prioritized`]. Use [`ByComparator`](crate::storage::ByComparator)
/// to order elements with a closure instead.
///
/// The heap is a single-owner structure with no internal synchronization. Wrap it
/// in a lock if it has to be shared.
#[derive(Clone)]
pub struct BoundedHeap<T, S = Vec<T>>
where
    S: HeapStorage<Item = T>,
{
    storage: S,
    capacity: Capacity,
}

impl<T: Prioritized> BoundedHeap<T> {
    /// Creates an empty heap holding at most `capacity` elements
    ///
    /// A capacity of zero or less means unbounded.
    pub fn new(capacity: impl Into<Capacity>) -> Self {
        Self::with_storage(Vec::new(), capacity)
    }

    /// Creates an empty heap with no capacity limit
    pub fn unbounded() -> Self {
        Self::new(Capacity::Unbounded)
    }

    /// Creates an empty heap and reserves room for its full capacity up front
    ///
    /// Unbounded heaps reserve nothing.
    pub fn with_reserved(capacity: impl Into<Capacity>) -> Self {
        let capacity = capacity.into();
        // One extra slot: a push onto a full heap grows before it evicts
        let reserve = capacity.get().map_or(0, |n| n.saturating_add(1));
        Self::with_storage(Vec::with_capacity(reserve), capacity)
    }
}

impl<T, S> BoundedHeap<T, S>
where
    S: HeapStorage<Item = T>,
{
    /// Builds a heap on top of `storage`
    ///
    /// Any elements already in `storage` are heapified, and those beyond the
    /// capacity are dropped. Use [`heapify`](Self::heapify) to get them back.
    pub fn with_storage(storage: S, capacity: impl Into<Capacity>) -> Self {
        let (heap, _discarded) = Self::heapify(storage, capacity);
        heap
    }

    /// Turns an arbitrarily ordered sequence into a heap in O(n)
    ///
    /// Every parent index is sifted down, from the last parent back to the root, so
    /// that each subtree is already a valid heap when its root is processed. If the
    /// sequence holds more elements than `capacity`, the lowest-priority ones are
    /// popped off and returned in the order they were popped (ascending priority).
    pub fn heapify(storage: S, capacity: impl Into<Capacity>) -> (Self, Vec<T>) {
        let mut heap = Self {
            storage,
            capacity: capacity.into(),
        };
        heap.rebuild();

        let mut discarded = Vec::new();
        while heap.capacity.is_exceeded_by(heap.storage.len()) {
            match heap.pop() {
                Some(item) => discarded.push(item),
                None => break,
            }
        }

        if !discarded.is_empty() {
            log::debug!(
                "heapify trimmed {} element(s) down to capacity {}",
                discarded.len(),
                heap.capacity
            );
        }

        (heap, discarded)
    }

    /// Returns the configured capacity
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// Returns the number of elements in the heap
    pub fn size(&self) -> usize {
        self.storage.len()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns true if the next push will evict an element
    pub fn is_full(&self) -> bool {
        self.capacity.is_exceeded_by(self.storage.len() + 1)
    }

    /// Inserts an element in O(log n)
    ///
    /// Returns `Some(evicted)` when the push took the heap past its capacity. The
    /// evicted element is whichever had the lowest priority after the insert, which
    /// may be `item` itself.
    pub fn push(&mut self, item: T) -> Option<T> {
        self.storage.push(item);
        self.sift_up(self.storage.len() - 1);

        if self.capacity.is_exceeded_by(self.storage.len()) {
            log::trace!("heap over capacity {}, evicting minimum", self.capacity);
            return self.pop();
        }
        None
    }

    /// Removes and returns the minimum-priority element in O(log n)
    pub fn pop(&mut self) -> Option<T> {
        match self.storage.len() {
            0 => None,
            1 => self.storage.pop(),
            len => {
                self.storage.swap(0, len - 1);
                let result = self.storage.pop();
                self.sift_down(0);
                result
            }
        }
    }

    /// Returns the minimum-priority element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.storage.first()
    }

    /// Removes every element, keeping the capacity
    pub fn clear(&mut self) {
        self.storage.clear();
    }

    /// The elements in heap order (index 0 is the minimum)
    pub fn as_slice(&self) -> &[T] {
        self.storage.as_slice()
    }

    /// Checks the heap-order invariant over every parent/child pair
    ///
    /// Only fails if the ordering changed while elements were stored, or if a
    /// comparator is not a total order.
    pub fn validate(&self) -> Result<(), HeapError> {
        let len = self.storage.len();
        for child in 1..len {
            let parent = (child - 1) / 2;
            if self.storage.less(child, parent) {
                return Err(HeapError::InvariantViolated { parent, child });
            }
        }
        Ok(())
    }

    /// Consumes the heap, returning its storage in heap order
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Consumes the heap, returning its elements in ascending priority order
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.into_iter_sorted().collect()
    }

    /// Consumes the heap into an iterator yielding elements in ascending priority order
    pub fn into_iter_sorted(self) -> IntoIterSorted<T, S> {
        IntoIterSorted { heap: self }
    }

    /// Empties the heap, yielding its elements in ascending priority order
    ///
    /// Elements not consumed before the iterator is dropped are removed anyway.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, S> {
        DrainSorted { heap: self }
    }

    /// Restores heap order over the whole storage
    fn rebuild(&mut self) {
        let len = self.storage.len();
        if len < 2 {
            return;
        }
        // Leaves are trivially heaps; start from the last parent
        for index in (0..=(len - 2) / 2).rev() {
            self.sift_down(index);
        }
    }

    /// Move element at index up while it has a strictly lower priority than its parent
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.storage.less(index, parent) {
                self.storage.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down while its lesser child has a strictly lower priority
    fn sift_down(&mut self, mut index: usize) {
        let len = self.storage.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.storage.less(right, left) {
                right
            } else {
                left
            };

            if self.storage.less(child, index) {
                self.storage.swap(index, child);
                index = child;
            } else {
                break;
            }
        }
    }
}

impl<T: Prioritized> Default for BoundedHeap<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<T, S> fmt::Debug for BoundedHeap<T, S>
where
    T: fmt::Debug,
    S: HeapStorage<Item = T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedHeap")
            .field("capacity", &self.capacity)
            .field("elements", &self.storage.as_slice())
            .finish()
    }
}

/// Pushes every element; elements evicted along the way are dropped
impl<T, S> Extend<T> for BoundedHeap<T, S>
where
    S: HeapStorage<Item = T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            let _evicted = self.push(item);
        }
    }
}

/// Collects into an unbounded heap using the linear-time heapify
impl<T: Prioritized> FromIterator<T> for BoundedHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::with_storage(iter.into_iter().collect::<Vec<T>>(), Capacity::Unbounded)
    }
}

/// Owning iterator over a heap's elements in ascending priority order
///
/// Created by [`BoundedHeap::into_iter_sorted`].
pub struct IntoIterSorted<T, S>
where
    S: HeapStorage<Item = T>,
{
    heap: BoundedHeap<T, S>,
}

impl<T, S> Iterator for IntoIterSorted<T, S>
where
    S: HeapStorage<Item = T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T, S> ExactSizeIterator for IntoIterSorted<T, S> where S: HeapStorage<Item = T> {}

impl<T, S> FusedIterator for IntoIterSorted<T, S> where S: HeapStorage<Item = T> {}

/// Draining iterator over a heap's elements in ascending priority order
///
/// Created by [`BoundedHeap::drain_sorted`].
pub struct DrainSorted<'a, T, S>
where
    S: HeapStorage<Item = T>,
{
    heap: &'a mut BoundedHeap<T, S>,
}

impl<T, S> Iterator for DrainSorted<'_, T, S>
where
    S: HeapStorage<Item = T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T, S> ExactSizeIterator for DrainSorted<'_, T, S> where S: HeapStorage<Item = T> {}

impl<T, S> FusedIterator for DrainSorted<'_, T, S> where S: HeapStorage<Item = T> {}

impl<T, S> Drop for DrainSorted<'_, T, S>
where
    S: HeapStorage<Item = T>,
{
    fn drop(&mut self) {
        self.heap.clear();
    }
}
