//! Kani verification proofs for the bounded heap
//!
//! Kani is AWS's model checker for Rust. It checks the properties below for all
//! values of the symbolic inputs, up to the unwinding bound.
//!
//! To run these proofs:
//!   cargo kani

#[allow(unused_imports)]
use bounded_heap::{BoundedHeap, Capacity};

/// Proof that push into a non-full heap increments the size and evicts nothing
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_push_increments_size() {
    let mut heap: BoundedHeap<u8> = BoundedHeap::new(4);
    heap.push(kani::any());
    heap.push(kani::any());
    let initial = heap.size();

    let evicted = heap.push(kani::any());

    assert!(evicted.is_none());
    assert!(heap.size() == initial + 1);
    assert!(heap.validate().is_ok());
}

/// Proof that a push into a full heap evicts the minimum of old and new elements
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_full_push_evicts_minimum() {
    let a: u8 = kani::any();
    let b: u8 = kani::any();
    let c: u8 = kani::any();
    let mut heap = BoundedHeap::new(2);
    heap.push(a);
    heap.push(b);

    let evicted = heap.push(c);

    assert!(evicted == Some(a.min(b).min(c)));
    assert!(heap.size() == 2);
    assert!(heap.validate().is_ok());
}

/// Proof that pop returns the minimum and peek agrees with it
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_pop_returns_minimum() {
    let values: [i8; 4] = kani::any();
    let (mut heap, discarded) = BoundedHeap::heapify(values.to_vec(), -1);
    assert!(discarded.is_empty());

    let min = values.iter().copied().min();
    assert!(heap.peek().copied() == min);
    assert!(heap.pop() == min);
    assert!(heap.size() == 3);
    assert!(heap.validate().is_ok());
}

/// Proof that heapify trims exactly the excess, lowest first
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_heapify_trims_excess() {
    let values: [u8; 4] = kani::any();
    let (heap, discarded) = BoundedHeap::heapify(values.to_vec(), 2);

    assert!(heap.size() == 2);
    assert!(discarded.len() == 2);
    assert!(discarded[0] <= discarded[1]);
    for kept in heap.as_slice() {
        assert!(discarded[1] <= *kept);
    }
}

/// Proof that non-positive capacities always normalize to unbounded
#[cfg(kani)]
#[kani::proof]
fn verify_non_positive_capacity_is_unbounded() {
    let n: i64 = kani::any();
    kani::assume(n <= 0);
    assert!(Capacity::from(n) == Capacity::Unbounded);
}
