// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use stayhub_domain::Booking;
use time::Date;

/// A business-rule refusal of a proposed booking or extension.
///
/// Rejections are ordinary outcomes, not errors: the engine never panics or
/// aborts for an expected rule failure, and a rejection leaves the stored
/// booking set untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The proposed check-in date is before the current reference date.
    PastCheckInDate {
        /// The proposed check-in date.
        check_in_date: Date,
        /// The reference date the proposal was judged against.
        today: Date,
    },
    /// The guest already holds a booking in this unit.
    DuplicateGuestUnitBooking,
    /// The guest already holds a booking in some unit.
    GuestAlreadyBookedElsewhere,
    /// The unit is occupied during the proposed stay.
    UnitUnavailable,
    /// No booking exists with the given ID (extension only).
    BookingNotFound {
        /// The unresolved booking ID.
        booking_id: i64,
    },
    /// The extended stay would overlap another booking (extension only).
    ExtensionConflict,
}

impl Rejection {
    /// Returns the stable machine-readable kind of this rejection.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::PastCheckInDate { .. } => "past_check_in_date",
            Self::DuplicateGuestUnitBooking => "duplicate_guest_unit_booking",
            Self::GuestAlreadyBookedElsewhere => "guest_already_booked_elsewhere",
            Self::UnitUnavailable => "unit_unavailable",
            Self::BookingNotFound { .. } => "booking_not_found",
            Self::ExtensionConflict => "extension_conflict",
        }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PastCheckInDate {
                check_in_date,
                today,
            } => {
                write!(
                    f,
                    "Check-in date {check_in_date} is in the past (today is {today})"
                )
            }
            Self::DuplicateGuestUnitBooking => {
                write!(
                    f,
                    "The given guest name cannot book the same unit multiple times"
                )
            }
            Self::GuestAlreadyBookedElsewhere => {
                write!(
                    f,
                    "The same guest cannot be in multiple units at the same time"
                )
            }
            Self::UnitUnavailable => {
                write!(f, "For the given check-in date, the unit is already occupied")
            }
            Self::BookingNotFound { booking_id } => {
                write!(f, "Booking {booking_id} does not exist")
            }
            Self::ExtensionConflict => {
                write!(
                    f,
                    "Cannot extend stay: the unit is already booked during the extended period"
                )
            }
        }
    }
}

/// The decision a booking use case arrives at.
///
/// Exactly one of the two variants is produced per invocation; there is no
/// partial or retry state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingOutcome {
    /// All checks passed; the booking was persisted (or updated) and its
    /// resulting state is returned.
    Accepted(Booking),
    /// A business rule refused the request; nothing was written.
    Rejected(Rejection),
}
