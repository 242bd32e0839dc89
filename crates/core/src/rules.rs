// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Guest-identity rules.
//!
//! Both rules are date-agnostic: they look only at who holds bookings where.
//! The system-wide rule makes the per-unit rule redundant in practice, but
//! the two are deliberately kept as independent, ordered checks because the
//! engine reports the first failing reason.

use crate::error::RepositoryError;
use crate::repository::BookingRepository;
use stayhub_domain::{GuestName, UnitId};

/// Checks whether `guest_name` already holds a booking in `unit_id`.
///
/// # Errors
///
/// Returns an error if the repository fails.
pub fn guest_has_booking_in_unit<R: BookingRepository + ?Sized>(
    repository: &mut R,
    guest_name: &GuestName,
    unit_id: &UnitId,
) -> Result<bool, RepositoryError> {
    let existing = repository.find_by_guest_and_unit(guest_name, unit_id)?;
    Ok(!existing.is_empty())
}

/// Checks whether `guest_name` already holds a booking in any unit.
///
/// # Errors
///
/// Returns an error if the repository fails.
pub fn guest_has_booking_anywhere<R: BookingRepository + ?Sized>(
    repository: &mut R,
    guest_name: &GuestName,
) -> Result<bool, RepositoryError> {
    let existing = repository.find_by_guest(guest_name)?;
    Ok(!existing.is_empty())
}
