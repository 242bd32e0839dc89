// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response types for the API boundary.

use serde::{Deserialize, Serialize};

/// API request to create a new booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    /// The guest making the booking.
    pub guest_name: String,
    /// The unit being booked.
    pub unit_id: String,
    /// The check-in date (ISO 8601, `YYYY-MM-DD`).
    pub check_in_date: String,
    /// The stay length in nights (must be at least 1).
    pub number_of_nights: u32,
}

/// API request to extend an existing booking.
///
/// The booking ID travels in the request path, not the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendBookingRequest {
    /// Nights to add to the stay. Zero is a valid no-op extension.
    pub additional_nights: u32,
}

/// A booking as reported to API clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingInfo {
    /// The canonical booking identifier.
    pub booking_id: i64,
    /// The guest holding the booking.
    pub guest_name: String,
    /// The unit being occupied.
    pub unit_id: String,
    /// The check-in date (ISO 8601, inclusive).
    pub check_in_date: String,
    /// The stay length in nights.
    pub number_of_nights: u32,
    /// The derived check-out date (ISO 8601, exclusive).
    pub check_out_date: String,
}

/// API response for a successful booking creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBookingResponse {
    /// The persisted booking.
    pub booking: BookingInfo,
}

/// API response for a successful booking extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendBookingResponse {
    /// The booking after the extension.
    pub booking: BookingInfo,
}
