//! Element ordering for heap data structures
//!
//! Every element stored in a [`BoundedHeap`](crate::bounded::BoundedHeap) backed by a
//! plain `Vec` reports its own priority through [`Prioritized`]. The heap never looks
//! at an element beyond this query.
//!
//! Implementations are provided for:
//!
//! - primitive integers, `char`, `bool`, `String` and `&str`: the value is its own priority
//! - [`Reverse<T>`]: inverts the wrapped priority, turning the min-heap into a max-heap
//! - `(P, T)` pairs: the first component is the priority, the second an arbitrary payload
//!
//! # Example
//!
//! ```rust
//! use bounded_heap::Prioritized;
//!
//! struct Job {
//!     name: &'static str,
//!     urgency: u8,
//! }
//!
//! impl Prioritized for Job {
//!     type Priority = u8;
//!
//!     fn priority(&self) -> u8 {
//!         self.urgency
//!     }
//! }
//!
//! let a = Job { name: "a", urgency: 1 };
//! let b = Job { name: "b", urgency: 7 };
//! assert!(a.precedes(&b));
//! ```

use std::cmp::Reverse;

/// An element exposing a totally ordered priority
///
/// Lower priorities are popped first. The priority must be deterministic for as
/// long as the element is stored in a heap; an element whose priority changes
/// while stored silently breaks the heap invariant.
pub trait Prioritized {
    /// The totally ordered key elements are compared by
    type Priority: Ord;

    /// Returns this element's priority
    fn priority(&self) -> Self::Priority;

    /// Returns true if `self` has a strictly lower priority than `other`
    #[inline]
    fn precedes(&self, other: &Self) -> bool {
        self.priority() < other.priority()
    }
}

macro_rules! self_prioritized {
    ($($t:ty),* $(,)?) => {
        $(
            impl Prioritized for $t {
                type Priority = $t;

                #[inline]
                fn priority(&self) -> $t {
                    *self
                }
            }
        )*
    };
}

self_prioritized!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char, bool);

impl Prioritized for String {
    type Priority = String;

    fn priority(&self) -> String {
        self.clone()
    }

    fn precedes(&self, other: &Self) -> bool {
        self < other
    }
}

impl<'a> Prioritized for &'a str {
    type Priority = &'a str;

    fn priority(&self) -> &'a str {
        *self
    }
}

impl<T: Prioritized> Prioritized for Reverse<T> {
    type Priority = Reverse<T::Priority>;

    fn priority(&self) -> Self::Priority {
        Reverse(self.0.priority())
    }

    fn precedes(&self, other: &Self) -> bool {
        other.0.precedes(&self.0)
    }
}

/// The (priority, item) convention: only the first component takes part in ordering.
impl<P: Ord + Clone, T> Prioritized for (P, T) {
    type Priority = P;

    fn priority(&self) -> P {
        self.0.clone()
    }

    fn precedes(&self, other: &Self) -> bool {
        self.0 < other.0
    }
}
