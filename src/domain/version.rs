//! Version value object
//!
//! Monotonic counter used for optimistic concurrency control on aggregates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Aggregate version.
///
/// Starts at [`Version::zero`] and advances by exactly one for every
/// successful state transition. Immutable: [`Version::next`] returns a new
/// value, it never mutates in place.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Version(u64);

impl Version {
    /// The only valid initial version.
    pub fn zero() -> Self {
        Self(0)
    }

    /// The version that follows this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_initial() {
        assert_eq!(Version::zero().value(), 0);
        assert_eq!(Version::default(), Version::zero());
    }

    #[test]
    fn test_next_increments_by_one() {
        let v = Version::zero();
        assert_eq!(v.next().value(), 1);
        assert_eq!(v.next().next().value(), 2);
        // next() does not mutate the original
        assert_eq!(v.value(), 0);
    }

    #[test]
    fn test_ordering() {
        assert!(Version::zero() < Version::zero().next());
    }
}
