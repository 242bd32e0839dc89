// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Half-open stay intervals and the overlap predicate.
//!
//! A stay occupies `[check_in, check_out)`: the check-in date is included,
//! the check-out date is excluded. Under this model a check-out on day N and
//! a new check-in on day N for the same unit do not conflict.
//!
//! This predicate is the single source of truth for conflict detection. Both
//! the new-booking check and the extension check must go through it; ad-hoc
//! boundary comparisons elsewhere are a correctness hazard.

use crate::error::DomainError;
use time::{Date, Duration};

/// A half-open date range `[start, end)` occupied by a stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayInterval {
    /// First occupied night (inclusive).
    start: Date,
    /// Check-out date (exclusive).
    end: Date,
}

impl StayInterval {
    /// Creates a stay interval from a check-in date and a night count.
    ///
    /// The end of the interval is `check_in + nights` days, which is also the
    /// derived check-out date for a booking of that length.
    ///
    /// # Arguments
    ///
    /// * `check_in` - The check-in date (inclusive start)
    /// * `nights` - The number of nights (must be at least 1)
    ///
    /// # Errors
    ///
    /// Returns an error if `nights` is zero or the check-out date is not
    /// representable.
    pub fn from_nights(check_in: Date, nights: u32) -> Result<Self, DomainError> {
        if nights == 0 {
            return Err(DomainError::InvalidNightCount { count: nights });
        }
        let end: Date = check_in
            .checked_add(Duration::days(i64::from(nights)))
            .ok_or_else(|| DomainError::DateArithmeticOverflow {
                operation: format!("adding {nights} nights to {check_in}"),
            })?;
        Ok(Self {
            start: check_in,
            end,
        })
    }

    /// Assembles an interval from bounds already known to satisfy
    /// `start < end`. Used by `Booking`, which maintains that invariant.
    pub(crate) const fn from_bounds(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    /// Returns the first occupied night (inclusive).
    #[must_use]
    pub const fn start(&self) -> Date {
        self.start
    }

    /// Returns the check-out date (exclusive).
    #[must_use]
    pub const fn end(&self) -> Date {
        self.end
    }

    /// Tests whether two stay intervals share at least one night.
    ///
    /// Standard half-open overlap: `a.start < b.end && b.start < a.end`.
    /// Touching intervals (`a.end == b.start`) do not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use time::macros::date;

    fn interval(check_in: Date, nights: u32) -> StayInterval {
        StayInterval::from_nights(check_in, nights).unwrap()
    }

    #[test]
    fn test_from_nights_derives_checkout() {
        let i = interval(date!(2026 - 01 - 01), 3);
        assert_eq!(i.start(), date!(2026 - 01 - 01));
        assert_eq!(i.end(), date!(2026 - 01 - 04));
    }

    #[test]
    fn test_from_nights_rejects_zero() {
        let result = StayInterval::from_nights(date!(2026 - 01 - 01), 0);
        assert_eq!(
            result.unwrap_err(),
            DomainError::InvalidNightCount { count: 0 }
        );
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = interval(date!(2026 - 01 - 01), 4);
        let b = interval(date!(2026 - 01 - 03), 3);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_intervals_do_not_overlap() {
        // Check-out Jan 4, next check-in Jan 4: allowed.
        let a = interval(date!(2026 - 01 - 01), 3);
        let b = interval(date!(2026 - 01 - 04), 2);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_contained_interval_overlaps() {
        let a = interval(date!(2026 - 01 - 01), 10);
        let b = interval(date!(2026 - 01 - 04), 2);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_identical_intervals_overlap() {
        let a = interval(date!(2026 - 01 - 01), 2);
        assert!(a.overlaps(&a));
    }

    #[test]
    fn test_disjoint_intervals_do_not_overlap() {
        let a = interval(date!(2026 - 01 - 01), 2);
        let b = interval(date!(2026 - 02 - 01), 2);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }
}
