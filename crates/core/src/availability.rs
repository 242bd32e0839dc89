// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Availability checking for a candidate stay interval.
//!
//! The checker fetches every booking for the unit and applies the half-open
//! overlap predicate in-engine. This is O(n) in bookings per unit; a
//! range-indexed repository could replace the linear scan as long as the
//! overlap semantics of `StayInterval::overlaps` are preserved exactly.

use crate::error::RepositoryError;
use crate::repository::BookingRepository;
use stayhub_domain::{Booking, StayInterval, UnitId};

/// Finds the first existing booking in `unit_id` whose stay overlaps
/// `interval`, or `None` if the interval is free.
///
/// # Arguments
///
/// * `repository` - The booking store to query
/// * `unit_id` - The unit being checked
/// * `interval` - The candidate stay interval
/// * `exclude` - Booking ID to leave out of the conflict set. Used during
///   extension so the booking being extended is not compared against itself.
///
/// # Errors
///
/// Returns an error if the repository fails.
pub fn find_conflict<R: BookingRepository + ?Sized>(
    repository: &mut R,
    unit_id: &UnitId,
    interval: &StayInterval,
    exclude: Option<i64>,
) -> Result<Option<Booking>, RepositoryError> {
    let existing: Vec<Booking> = repository.find_for_unit(unit_id, exclude)?;
    Ok(existing
        .into_iter()
        .find(|booking| booking.interval().overlaps(interval)))
}
