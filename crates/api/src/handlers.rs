// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for the two booking operations.
//!
//! Handlers validate input first (`InvalidInput` fires before any business
//! rule), then run the engine use case against the persistence layer and
//! translate the outcome. The caller is responsible for holding whatever
//! lock serializes concurrent invocations (see the server crate).

use tracing::info;

use crate::error::{ApiError, translate_rejection};
use crate::request_response::{
    BookingInfo, CreateBookingRequest, CreateBookingResponse, ExtendBookingRequest,
    ExtendBookingResponse,
};
use stayhub::{
    BookingOutcome, Clock, ExtendBooking, ProposeNewBooking, extend_booking as run_extend_booking,
    propose_new_booking,
};
use stayhub_domain::{Booking, GuestName, UnitId, format_date, parse_date};
use stayhub_persistence::SqlitePersistence;
use time::Date;

fn booking_info(booking: &Booking) -> Result<BookingInfo, ApiError> {
    let booking_id: i64 = booking.booking_id().ok_or_else(|| ApiError::Internal {
        message: String::from("engine returned a booking without an ID"),
    })?;
    let format = |date: Date| {
        format_date(date).map_err(|e| ApiError::Internal {
            message: e.to_string(),
        })
    };
    Ok(BookingInfo {
        booking_id,
        guest_name: booking.guest_name().value().to_string(),
        unit_id: booking.unit_id().value().to_string(),
        check_in_date: format(booking.check_in_date())?,
        number_of_nights: booking.number_of_nights(),
        check_out_date: format(booking.check_out_date())?,
    })
}

/// Creates a new booking via the API boundary.
///
/// This function:
/// - Validates the request fields before any business rule runs
/// - Runs the `ProposeNewBooking` use case against the persistence layer
/// - Translates rejections into API errors with stable kinds
///
/// # Arguments
///
/// * `persistence` - The booking store
/// * `clock` - The reference-date source for the past-date rule
/// * `request` - The API request to create a booking
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for malformed fields,
/// `ApiError::BookingRejected` when a business rule refuses the proposal,
/// and `ApiError::Internal` for infrastructure failures.
pub fn create_booking<C: Clock + ?Sized>(
    persistence: &mut SqlitePersistence,
    clock: &C,
    request: &CreateBookingRequest,
) -> Result<CreateBookingResponse, ApiError> {
    info!(
        guest_name = %request.guest_name,
        unit_id = %request.unit_id,
        check_in_date = %request.check_in_date,
        number_of_nights = request.number_of_nights,
        "Handling create_booking request"
    );

    let guest_name: GuestName =
        GuestName::new(&request.guest_name).map_err(|e| ApiError::InvalidInput {
            field: String::from("guest_name"),
            message: e.to_string(),
        })?;
    let unit_id: UnitId = UnitId::new(&request.unit_id).map_err(|e| ApiError::InvalidInput {
        field: String::from("unit_id"),
        message: e.to_string(),
    })?;
    let check_in_date: Date =
        parse_date(&request.check_in_date).map_err(|e| ApiError::InvalidInput {
            field: String::from("check_in_date"),
            message: e.to_string(),
        })?;
    if request.number_of_nights == 0 {
        return Err(ApiError::InvalidInput {
            field: String::from("number_of_nights"),
            message: String::from("must be at least 1"),
        });
    }

    let proposal: ProposeNewBooking = ProposeNewBooking {
        guest_name,
        unit_id,
        check_in_date,
        number_of_nights: request.number_of_nights,
    };

    match propose_new_booking(persistence, clock, &proposal)? {
        BookingOutcome::Accepted(booking) => {
            info!(
                booking_id = booking.booking_id(),
                "Booking accepted"
            );
            Ok(CreateBookingResponse {
                booking: booking_info(&booking)?,
            })
        }
        BookingOutcome::Rejected(rejection) => {
            info!(kind = rejection.kind(), "Booking rejected");
            Err(translate_rejection(&rejection))
        }
    }
}

/// Extends an existing booking via the API boundary.
///
/// # Arguments
///
/// * `persistence` - The booking store
/// * `booking_id` - The booking to extend (from the request path)
/// * `request` - The API request carrying the additional night count
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` for an unknown booking ID,
/// `ApiError::BookingRejected` when the extended stay conflicts, and
/// `ApiError::Internal` for infrastructure failures.
pub fn extend_booking(
    persistence: &mut SqlitePersistence,
    booking_id: i64,
    request: &ExtendBookingRequest,
) -> Result<ExtendBookingResponse, ApiError> {
    info!(
        booking_id,
        additional_nights = request.additional_nights,
        "Handling extend_booking request"
    );

    let command: ExtendBooking = ExtendBooking {
        booking_id,
        additional_nights: request.additional_nights,
    };

    match run_extend_booking(persistence, &command)? {
        BookingOutcome::Accepted(booking) => {
            info!(
                booking_id,
                number_of_nights = booking.number_of_nights(),
                "Extension accepted"
            );
            Ok(ExtendBookingResponse {
                booking: booking_info(&booking)?,
            })
        }
        BookingOutcome::Rejected(rejection) => {
            info!(kind = rejection.kind(), "Extension rejected");
            Err(translate_rejection(&rejection))
        }
    }
}
