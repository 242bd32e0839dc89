// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and an in-memory repository.

use crate::error::RepositoryError;
use crate::repository::BookingRepository;
use stayhub_domain::{Booking, GuestName, UnitId};
use time::Date;

/// Vec-backed `BookingRepository` for engine tests.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    bookings: Vec<Booking>,
    next_id: i64,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self {
            bookings: Vec::new(),
            next_id: 1,
        }
    }

    /// Returns a snapshot of the stored bookings, for idempotence assertions.
    pub fn stored(&self) -> Vec<Booking> {
        self.bookings.clone()
    }
}

impl BookingRepository for InMemoryRepository {
    fn find_by_guest_and_unit(
        &mut self,
        guest_name: &GuestName,
        unit_id: &UnitId,
    ) -> Result<Vec<Booking>, RepositoryError> {
        Ok(self
            .bookings
            .iter()
            .filter(|b| b.guest_name() == guest_name && b.unit_id() == unit_id)
            .cloned()
            .collect())
    }

    fn find_by_guest(&mut self, guest_name: &GuestName) -> Result<Vec<Booking>, RepositoryError> {
        Ok(self
            .bookings
            .iter()
            .filter(|b| b.guest_name() == guest_name)
            .cloned()
            .collect())
    }

    fn find_for_unit(
        &mut self,
        unit_id: &UnitId,
        exclude: Option<i64>,
    ) -> Result<Vec<Booking>, RepositoryError> {
        Ok(self
            .bookings
            .iter()
            .filter(|b| b.unit_id() == unit_id)
            .filter(|b| exclude.is_none_or(|id| b.booking_id() != Some(id)))
            .cloned()
            .collect())
    }

    fn find_by_id(&mut self, booking_id: i64) -> Result<Option<Booking>, RepositoryError> {
        Ok(self
            .bookings
            .iter()
            .find(|b| b.booking_id() == Some(booking_id))
            .cloned())
    }

    fn create(&mut self, booking: &Booking) -> Result<Booking, RepositoryError> {
        let persisted: Booking = Booking::with_id(
            self.next_id,
            booking.guest_name().clone(),
            booking.unit_id().clone(),
            booking.check_in_date(),
            booking.number_of_nights(),
        )
        .map_err(|e| RepositoryError::Backend(e.to_string()))?;
        self.next_id += 1;
        self.bookings.push(persisted.clone());
        Ok(persisted)
    }

    fn update_nights(
        &mut self,
        booking_id: i64,
        number_of_nights: u32,
        _check_out_date: Date,
    ) -> Result<(), RepositoryError> {
        let Some(position) = self
            .bookings
            .iter()
            .position(|b| b.booking_id() == Some(booking_id))
        else {
            return Err(RepositoryError::Backend(format!(
                "no booking with id {booking_id}"
            )));
        };
        let current: &Booking = &self.bookings[position];
        let updated: Booking = Booking::with_id(
            booking_id,
            current.guest_name().clone(),
            current.unit_id().clone(),
            current.check_in_date(),
            number_of_nights,
        )
        .map_err(|e| RepositoryError::Backend(e.to_string()))?;
        self.bookings[position] = updated;
        Ok(())
    }
}

pub fn guest(name: &str) -> GuestName {
    GuestName::new(name).unwrap()
}

pub fn unit(id: &str) -> UnitId {
    UnitId::new(id).unwrap()
}
