//! Bounded binary heaps for Rust
//!
//! This crate provides an in-place binary min-heap with an optional capacity. When a
//! push takes the heap past its capacity, the lowest-priority element is evicted and
//! returned to the caller, so a heap of capacity `k` keeps the `k` highest-priority
//! elements it has seen.
//!
//! # Features
//!
//! - **Incremental construction**: `push` in O(log n), with eviction on overflow
//! - **Bulk construction**: `heapify` an existing `Vec` in O(n), trimming it down to capacity
//! - **Pluggable ordering**: elements report a priority via [`Prioritized`], or the heap
//!   is ordered by a comparator through [`ByComparator`]
//! - **Explicit capacity**: [`Capacity::Unbounded`] or [`Capacity::Bounded`]; non-positive
//!   capacities normalize to unbounded
//!
//! # Example
//!
//! ```rust
//! use bounded_heap::BoundedHeap;
//!
//! let (mut heap, discarded) = BoundedHeap::heapify(vec![1, 9, 2, 8, 3, 7, 4], 5);
//! assert_eq!(discarded, vec![1, 2]);
//!
//! assert_eq!(heap.push(0), Some(0));
//! assert_eq!(heap.pop(), Some(3));
//! assert_eq!(heap.size(), 4);
//! ```
//!
//! # Optional features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Capacity`]

pub mod bounded;
pub mod capacity;
pub mod error;
pub mod select;
pub mod storage;
pub mod traits;

pub use bounded::BoundedHeap;
pub use capacity::Capacity;
pub use error::HeapError;
pub use storage::{ByComparator, HeapStorage};
pub use traits::Prioritized;
