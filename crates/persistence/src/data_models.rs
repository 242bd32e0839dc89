// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;

use crate::diesel_schema::bookings;
use crate::error::PersistenceError;
use stayhub_domain::{Booking, GuestName, UnitId, format_date, parse_date};

/// A booking row as stored in the `bookings` table.
#[derive(Debug, Clone, Queryable)]
pub struct BookingRow {
    pub booking_id: i64,
    pub guest_name: String,
    pub unit_id: String,
    pub check_in_date: String,
    pub number_of_nights: i32,
    pub check_out_date: String,
}

/// An insertable booking row (ID assigned by the database).
#[derive(Debug, Insertable)]
#[diesel(table_name = bookings)]
pub struct NewBookingRow {
    pub guest_name: String,
    pub unit_id: String,
    pub check_in_date: String,
    pub number_of_nights: i32,
    pub check_out_date: String,
}

impl BookingRow {
    /// Converts a stored row back into a domain `Booking`.
    ///
    /// The domain constructor re-derives the check-out date, so a row whose
    /// stored `check_out_date` has drifted from `check_in + nights` is
    /// reported as corrupt rather than silently accepted.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::CorruptRow` if any field fails domain
    /// validation or the stored check-out date is inconsistent.
    pub fn into_domain(self) -> Result<Booking, PersistenceError> {
        let corrupt = |reason: String| PersistenceError::CorruptRow {
            booking_id: self.booking_id,
            reason,
        };

        let guest_name: GuestName =
            GuestName::new(&self.guest_name).map_err(|e| corrupt(e.to_string()))?;
        let unit_id: UnitId = UnitId::new(&self.unit_id).map_err(|e| corrupt(e.to_string()))?;
        let check_in = parse_date(&self.check_in_date).map_err(|e| corrupt(e.to_string()))?;
        let nights: u32 = u32::try_from(self.number_of_nights)
            .map_err(|_| corrupt(format!("negative night count {}", self.number_of_nights)))?;

        let booking: Booking =
            Booking::with_id(self.booking_id, guest_name, unit_id, check_in, nights)
                .map_err(|e| corrupt(e.to_string()))?;

        let stored_check_out = parse_date(&self.check_out_date).map_err(|e| corrupt(e.to_string()))?;
        if booking.check_out_date() != stored_check_out {
            return Err(corrupt(format!(
                "stored check-out {stored_check_out} does not match derived {}",
                booking.check_out_date()
            )));
        }

        Ok(booking)
    }
}

impl NewBookingRow {
    /// Builds an insertable row from a not-yet-persisted domain `Booking`.
    ///
    /// # Errors
    ///
    /// Returns an error if a date cannot be formatted or the night count does
    /// not fit the column type.
    pub fn from_domain(booking: &Booking) -> Result<Self, PersistenceError> {
        let nights: i32 = i32::try_from(booking.number_of_nights()).map_err(|_| {
            PersistenceError::QueryFailed(format!(
                "night count {} exceeds column range",
                booking.number_of_nights()
            ))
        })?;
        Ok(Self {
            guest_name: booking.guest_name().value().to_string(),
            unit_id: booking.unit_id().value().to_string(),
            check_in_date: format_date(booking.check_in_date())
                .map_err(|e| PersistenceError::QueryFailed(e.to_string()))?,
            number_of_nights: nights,
            check_out_date: format_date(booking.check_out_date())
                .map_err(|e| PersistenceError::QueryFailed(e.to_string()))?,
        })
    }
}
