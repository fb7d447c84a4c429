//! Capacity bounds
//!
//! A heap is either unbounded or holds at most `n > 0` elements. Non-positive
//! capacities are not rejected: every conversion maps them to [`Capacity::Unbounded`].
//!
//! ```rust
//! use bounded_heap::Capacity;
//!
//! assert_eq!(Capacity::from(-1), Capacity::Unbounded);
//! assert_eq!(Capacity::from(5).limit(), 5);
//! assert_eq!("unbounded".parse::<Capacity>().unwrap(), Capacity::Unbounded);
//! assert_eq!(Capacity::Unbounded.limit(), usize::MAX);
//! ```

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use crate::error::HeapError;

/// Maximum number of elements a heap may hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Option<usize>", into = "Option<usize>"))]
pub enum Capacity {
    /// No limit; pushes never evict
    #[default]
    Unbounded,
    /// At most this many elements; a push beyond it evicts the minimum
    Bounded(NonZeroUsize),
}

impl Capacity {
    /// Creates a capacity of `n` elements, or `Unbounded` when `n == 0`
    pub const fn new(n: usize) -> Self {
        match NonZeroUsize::new(n) {
            Some(n) => Capacity::Bounded(n),
            None => Capacity::Unbounded,
        }
    }

    /// Returns the bound, or `usize::MAX` when unbounded
    pub const fn limit(self) -> usize {
        match self {
            Capacity::Unbounded => usize::MAX,
            Capacity::Bounded(n) => n.get(),
        }
    }

    /// Returns the bound, or `None` when unbounded
    pub const fn get(self) -> Option<usize> {
        match self {
            Capacity::Unbounded => None,
            Capacity::Bounded(n) => Some(n.get()),
        }
    }

    pub const fn is_bounded(self) -> bool {
        matches!(self, Capacity::Bounded(_))
    }

    /// Returns true if a heap of `len` elements holds more than this capacity allows
    #[inline]
    pub const fn is_exceeded_by(self, len: usize) -> bool {
        match self {
            Capacity::Unbounded => false,
            Capacity::Bounded(n) => len > n.get(),
        }
    }
}

impl From<usize> for Capacity {
    fn from(n: usize) -> Self {
        Capacity::new(n)
    }
}

impl From<NonZeroUsize> for Capacity {
    fn from(n: NonZeroUsize) -> Self {
        Capacity::Bounded(n)
    }
}

impl From<Option<usize>> for Capacity {
    fn from(n: Option<usize>) -> Self {
        n.map_or(Capacity::Unbounded, Capacity::new)
    }
}

impl From<Capacity> for Option<usize> {
    fn from(capacity: Capacity) -> Self {
        capacity.get()
    }
}

macro_rules! signed_capacity {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Capacity {
                fn from(n: $t) -> Self {
                    // Negative values fail the conversion and normalize like zero
                    usize::try_from(n).map_or(Capacity::Unbounded, Capacity::new)
                }
            }
        )*
    };
}

signed_capacity!(i32, i64, isize);

impl FromStr for Capacity {
    type Err = HeapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("unbounded")
            || trimmed.eq_ignore_ascii_case("none")
        {
            return Ok(Capacity::Unbounded);
        }
        if let Ok(n) = trimmed.parse::<usize>() {
            return Ok(Capacity::new(n));
        }
        // Negative integers are well-formed and mean "no limit"
        match trimmed.parse::<i128>() {
            Ok(n) if n <= 0 => Ok(Capacity::Unbounded),
            _ => Err(HeapError::InvalidCapacity(s.to_string())),
        }
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capacity::Unbounded => f.write_str("unbounded"),
            Capacity::Bounded(n) => write!(f, "{n}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_positive_is_unbounded() {
        assert_eq!(Capacity::new(0), Capacity::Unbounded);
        assert_eq!(Capacity::from(0i32), Capacity::Unbounded);
        assert_eq!(Capacity::from(-1i64), Capacity::Unbounded);
        assert_eq!(Capacity::from(isize::MIN), Capacity::Unbounded);
        assert_eq!(Capacity::from(None), Capacity::Unbounded);
        assert_eq!(Capacity::default(), Capacity::Unbounded);
    }

    #[test]
    fn test_limit() {
        assert_eq!(Capacity::Unbounded.limit(), usize::MAX);
        assert_eq!(Capacity::from(5).limit(), 5);
        assert_eq!(Capacity::from(Some(3)).get(), Some(3));
        assert_eq!(Capacity::Unbounded.get(), None);
        assert!(Capacity::from(1usize).is_bounded());
    }

    #[test]
    fn test_is_exceeded_by() {
        let five = Capacity::from(5);
        assert!(!five.is_exceeded_by(0));
        assert!(!five.is_exceeded_by(5));
        assert!(five.is_exceeded_by(6));
        assert!(!Capacity::Unbounded.is_exceeded_by(usize::MAX));
    }

    #[test]
    fn test_parse() {
        assert_eq!("12".parse::<Capacity>(), Ok(Capacity::from(12)));
        assert_eq!(" 7 ".parse::<Capacity>(), Ok(Capacity::from(7)));
        assert_eq!("0".parse::<Capacity>(), Ok(Capacity::Unbounded));
        assert_eq!("-1".parse::<Capacity>(), Ok(Capacity::Unbounded));
        assert_eq!("Unbounded".parse::<Capacity>(), Ok(Capacity::Unbounded));
        assert_eq!("none".parse::<Capacity>(), Ok(Capacity::Unbounded));
        assert_eq!("".parse::<Capacity>(), Ok(Capacity::Unbounded));
        assert_eq!(
            "ten".parse::<Capacity>(),
            Err(HeapError::InvalidCapacity("ten".to_string()))
        );
        assert!("1.5".parse::<Capacity>().is_err());
    }

    #[test]
    fn test_display_parses_back() {
        for capacity in [Capacity::Unbounded, Capacity::from(1), Capacity::from(42)] {
            assert_eq!(capacity.to_string().parse::<Capacity>(), Ok(capacity));
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_shape() {
        assert_eq!(serde_json::to_string(&Capacity::from(4)).unwrap(), "4");
        assert_eq!(serde_json::to_string(&Capacity::Unbounded).unwrap(), "null");
        let parsed: Capacity = serde_json::from_str("0").unwrap();
        assert_eq!(parsed, Capacity::Unbounded);
    }
}
