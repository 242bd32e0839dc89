// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::interval::StayInterval;
use serde::{Deserialize, Serialize};
use time::Date;

/// Represents a guest identity.
///
/// Guest names are opaque identity keys compared case-sensitively; no
/// normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuestName {
    /// The guest name value (non-empty).
    value: String,
}

impl GuestName {
    /// Creates a new `GuestName`.
    ///
    /// # Arguments
    ///
    /// * `value` - The guest name (must contain a non-whitespace character)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidGuestName` if the name is empty or blank.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        if value.trim().is_empty() {
            return Err(DomainError::InvalidGuestName(String::from(
                "guest name must not be empty",
            )));
        }
        Ok(Self {
            value: value.to_string(),
        })
    }

    /// Returns the guest name value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Represents a rentable unit identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitId {
    /// The unit identifier value (non-empty).
    value: String,
}

impl UnitId {
    /// Creates a new `UnitId`.
    ///
    /// # Arguments
    ///
    /// * `value` - The unit identifier (must contain a non-whitespace character)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidUnitId` if the identifier is empty or blank.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        if value.trim().is_empty() {
            return Err(DomainError::InvalidUnitId(String::from(
                "unit ID must not be empty",
            )));
        }
        Ok(Self {
            value: value.to_string(),
        })
    }

    /// Returns the unit identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A reservation of a unit by a guest for a contiguous span of nights.
///
/// The check-out date is derived from the check-in date and the night count
/// and is recomputed whenever the night count changes; the two fields can
/// never drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the booking has not been persisted yet.
    booking_id: Option<i64>,
    /// The guest holding this booking.
    guest_name: GuestName,
    /// The unit being occupied.
    unit_id: UnitId,
    /// First occupied night (inclusive).
    check_in_date: Date,
    /// Length of the stay in nights (at least 1).
    number_of_nights: u32,
    /// Derived check-out date (exclusive): `check_in_date + number_of_nights`.
    check_out_date: Date,
}

impl Booking {
    /// Creates a new `Booking` without a persisted ID.
    ///
    /// The check-out date is computed from the check-in date and night count.
    ///
    /// # Arguments
    ///
    /// * `guest_name` - The guest making the booking
    /// * `unit_id` - The unit being booked
    /// * `check_in_date` - The check-in date (inclusive)
    /// * `number_of_nights` - The stay length (must be at least 1)
    ///
    /// # Errors
    ///
    /// Returns an error if the night count is zero or the check-out date is
    /// not representable.
    pub fn new(
        guest_name: GuestName,
        unit_id: UnitId,
        check_in_date: Date,
        number_of_nights: u32,
    ) -> Result<Self, DomainError> {
        let interval: StayInterval = StayInterval::from_nights(check_in_date, number_of_nights)?;
        Ok(Self {
            booking_id: None,
            guest_name,
            unit_id,
            check_in_date,
            number_of_nights,
            check_out_date: interval.end(),
        })
    }

    /// Creates a `Booking` with an existing persisted ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the night count is zero or the check-out date is
    /// not representable.
    pub fn with_id(
        booking_id: i64,
        guest_name: GuestName,
        unit_id: UnitId,
        check_in_date: Date,
        number_of_nights: u32,
    ) -> Result<Self, DomainError> {
        let mut booking: Self =
            Self::new(guest_name, unit_id, check_in_date, number_of_nights)?;
        booking.booking_id = Some(booking_id);
        Ok(booking)
    }

    /// Returns a copy of this booking lengthened by `additional_nights`.
    ///
    /// The check-in date and identity are unchanged; the night count grows
    /// and the check-out date is recomputed. Zero additional nights is a
    /// valid no-op extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the new check-out date is not representable or the
    /// night count overflows.
    pub fn extended_by(&self, additional_nights: u32) -> Result<Self, DomainError> {
        let new_nights: u32 = self.number_of_nights.checked_add(additional_nights).ok_or(
            DomainError::InvalidNightCount {
                count: u32::MAX,
            },
        )?;
        let interval: StayInterval = StayInterval::from_nights(self.check_in_date, new_nights)?;
        Ok(Self {
            booking_id: self.booking_id,
            guest_name: self.guest_name.clone(),
            unit_id: self.unit_id.clone(),
            check_in_date: self.check_in_date,
            number_of_nights: new_nights,
            check_out_date: interval.end(),
        })
    }

    /// Returns the half-open interval `[check_in, check_out)` of this stay.
    #[must_use]
    pub const fn interval(&self) -> StayInterval {
        // check_out_date is maintained as check_in + nights by construction,
        // so the interval can be assembled without re-deriving it.
        StayInterval::from_bounds(self.check_in_date, self.check_out_date)
    }

    /// Returns the canonical numeric identifier if persisted.
    #[must_use]
    pub const fn booking_id(&self) -> Option<i64> {
        self.booking_id
    }

    /// Returns the guest holding this booking.
    #[must_use]
    pub const fn guest_name(&self) -> &GuestName {
        &self.guest_name
    }

    /// Returns the unit being occupied.
    #[must_use]
    pub const fn unit_id(&self) -> &UnitId {
        &self.unit_id
    }

    /// Returns the check-in date (inclusive).
    #[must_use]
    pub const fn check_in_date(&self) -> Date {
        self.check_in_date
    }

    /// Returns the stay length in nights.
    #[must_use]
    pub const fn number_of_nights(&self) -> u32 {
        self.number_of_nights
    }

    /// Returns the derived check-out date (exclusive).
    #[must_use]
    pub const fn check_out_date(&self) -> Date {
        self.check_out_date
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use time::macros::date;

    fn guest(name: &str) -> GuestName {
        GuestName::new(name).unwrap()
    }

    fn unit(id: &str) -> UnitId {
        UnitId::new(id).unwrap()
    }

    #[test]
    fn test_guest_name_rejects_blank() {
        assert!(GuestName::new("").is_err());
        assert!(GuestName::new("   ").is_err());
    }

    #[test]
    fn test_guest_name_is_case_sensitive() {
        assert_ne!(guest("Alice"), guest("alice"));
    }

    #[test]
    fn test_unit_id_rejects_blank() {
        assert!(UnitId::new("").is_err());
    }

    #[test]
    fn test_booking_derives_checkout() {
        let booking =
            Booking::new(guest("Alice"), unit("unit-1"), date!(2026 - 01 - 01), 3).unwrap();
        assert_eq!(booking.check_out_date(), date!(2026 - 01 - 04));
        assert_eq!(booking.booking_id(), None);
    }

    #[test]
    fn test_booking_rejects_zero_nights() {
        let result = Booking::new(guest("Alice"), unit("unit-1"), date!(2026 - 01 - 01), 0);
        assert!(result.is_err());
    }

    #[test]
    fn test_extended_by_recomputes_checkout() {
        let booking =
            Booking::with_id(7, guest("Alice"), unit("unit-1"), date!(2026 - 01 - 01), 3).unwrap();
        let extended = booking.extended_by(2).unwrap();
        assert_eq!(extended.booking_id(), Some(7));
        assert_eq!(extended.number_of_nights(), 5);
        assert_eq!(extended.check_out_date(), date!(2026 - 01 - 06));
        assert_eq!(extended.check_in_date(), booking.check_in_date());
    }

    #[test]
    fn test_extended_by_zero_is_noop() {
        let booking =
            Booking::with_id(7, guest("Alice"), unit("unit-1"), date!(2026 - 01 - 01), 3).unwrap();
        let extended = booking.extended_by(0).unwrap();
        assert_eq!(extended, booking);
    }

    #[test]
    fn test_interval_matches_stored_dates() {
        let booking =
            Booking::new(guest("Alice"), unit("unit-1"), date!(2026 - 01 - 01), 3).unwrap();
        let interval = booking.interval();
        assert_eq!(interval.start(), date!(2026 - 01 - 01));
        assert_eq!(interval.end(), date!(2026 - 01 - 04));
    }
}
