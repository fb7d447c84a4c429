//! Error type for heap operations
//!
//! Expected conditions such as popping an empty heap or evicting on overflow are
//! not errors; they surface as `Option` results. `HeapError` covers the remaining
//! cases: unparsable configuration and a broken heap-order invariant.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeapError {
    /// A capacity string was neither an integer nor a recognised "unbounded" spelling
    InvalidCapacity(String),
    /// The element at `child` has a strictly lower priority than its `parent`
    InvariantViolated { parent: usize, child: usize },
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::InvalidCapacity(input) => {
                write!(f, "invalid heap capacity {input:?}")
            }
            HeapError::InvariantViolated { parent, child } => {
                write!(
                    f,
                    "heap order violated: element at {child} precedes its parent at {parent}"
                )
            }
        }
    }
}

impl std::error::Error for HeapError {}
