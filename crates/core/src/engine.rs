// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The two booking use cases.
//!
//! Each use case runs its checks in a fixed order and short-circuits on the
//! first failing rule, so the reported rejection is always the first reason
//! that applies. Nothing is written until every check has passed; a rejected
//! request leaves the stored booking set exactly as it was.

use crate::availability::find_conflict;
use crate::clock::Clock;
use crate::error::CoreError;
use crate::outcome::{BookingOutcome, Rejection};
use crate::repository::BookingRepository;
use crate::rules::{guest_has_booking_anywhere, guest_has_booking_in_unit};
use stayhub_domain::{Booking, GuestName, StayInterval, UnitId};
use time::Date;

/// A request to create a new booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposeNewBooking {
    /// The guest making the booking.
    pub guest_name: GuestName,
    /// The unit being booked.
    pub unit_id: UnitId,
    /// The requested check-in date (inclusive).
    pub check_in_date: Date,
    /// The requested stay length in nights (at least 1).
    pub number_of_nights: u32,
}

/// A request to lengthen an existing booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtendBooking {
    /// The booking being extended.
    pub booking_id: i64,
    /// Nights to add to the stay. Zero is a valid no-op extension.
    pub additional_nights: u32,
}

/// Decides whether a new booking may be accepted, and persists it if so.
///
/// Check order:
/// 1. The check-in date must not be in the past.
/// 2. The guest must not already hold a booking in this unit.
/// 3. The guest must not already hold a booking anywhere.
/// 4. The unit must be free for the whole stay interval.
///
/// The clock is sampled exactly once, so the whole invocation is judged
/// against one reference date.
///
/// # Errors
///
/// Returns an error if the repository fails or a domain invariant cannot be
/// constructed. Business-rule refusals are `Ok(BookingOutcome::Rejected)`.
pub fn propose_new_booking<R, C>(
    repository: &mut R,
    clock: &C,
    request: &ProposeNewBooking,
) -> Result<BookingOutcome, CoreError>
where
    R: BookingRepository + ?Sized,
    C: Clock + ?Sized,
{
    let today: Date = clock.today();
    if request.check_in_date < today {
        return Ok(BookingOutcome::Rejected(Rejection::PastCheckInDate {
            check_in_date: request.check_in_date,
            today,
        }));
    }

    if guest_has_booking_in_unit(repository, &request.guest_name, &request.unit_id)? {
        return Ok(BookingOutcome::Rejected(
            Rejection::DuplicateGuestUnitBooking,
        ));
    }

    if guest_has_booking_anywhere(repository, &request.guest_name)? {
        return Ok(BookingOutcome::Rejected(
            Rejection::GuestAlreadyBookedElsewhere,
        ));
    }

    let booking: Booking = Booking::new(
        request.guest_name.clone(),
        request.unit_id.clone(),
        request.check_in_date,
        request.number_of_nights,
    )?;

    if find_conflict(repository, &request.unit_id, &booking.interval(), None)?.is_some() {
        return Ok(BookingOutcome::Rejected(Rejection::UnitUnavailable));
    }

    let persisted: Booking = repository.create(&booking)?;
    Ok(BookingOutcome::Accepted(persisted))
}

/// Decides whether an existing booking may be lengthened, and updates it if so.
///
/// The stay only ever grows forward in time, so the check-in date needs no
/// re-validation; the extended interval is checked against every other
/// booking in the unit, excluding the booking being extended so it does not
/// conflict with itself.
///
/// # Errors
///
/// Returns an error if the repository fails or a domain invariant cannot be
/// constructed. Business-rule refusals are `Ok(BookingOutcome::Rejected)`.
pub fn extend_booking<R>(
    repository: &mut R,
    request: &ExtendBooking,
) -> Result<BookingOutcome, CoreError>
where
    R: BookingRepository + ?Sized,
{
    let Some(existing) = repository.find_by_id(request.booking_id)? else {
        return Ok(BookingOutcome::Rejected(Rejection::BookingNotFound {
            booking_id: request.booking_id,
        }));
    };

    let extended: Booking = existing.extended_by(request.additional_nights)?;
    let extended_interval: StayInterval = extended.interval();

    if find_conflict(
        repository,
        extended.unit_id(),
        &extended_interval,
        Some(request.booking_id),
    )?
    .is_some()
    {
        return Ok(BookingOutcome::Rejected(Rejection::ExtensionConflict));
    }

    repository.update_nights(
        request.booking_id,
        extended.number_of_nights(),
        extended.check_out_date(),
    )?;
    Ok(BookingOutcome::Accepted(extended))
}
