// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::RepositoryError;
use stayhub_domain::{Booking, GuestName, UnitId};
use time::Date;

/// Storage collaborator consumed by the booking engine.
///
/// The engine does all conflict reasoning itself; implementations only fetch
/// and persist records. Overlap filtering happens in-engine so that the
/// half-open overlap predicate has a single definition.
///
/// Callers must serialize each check-then-write sequence against concurrent
/// invocations for the same unit (the server does this by holding one lock
/// across the whole use-case invocation); the trait itself carries no
/// concurrency control.
pub trait BookingRepository {
    /// Returns all bookings held by `guest_name` in `unit_id`, regardless of
    /// dates.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn find_by_guest_and_unit(
        &mut self,
        guest_name: &GuestName,
        unit_id: &UnitId,
    ) -> Result<Vec<Booking>, RepositoryError>;

    /// Returns all bookings held by `guest_name` across all units.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn find_by_guest(&mut self, guest_name: &GuestName) -> Result<Vec<Booking>, RepositoryError>;

    /// Returns all bookings for `unit_id`, excluding the booking with ID
    /// `exclude` if given.
    ///
    /// The exclusion exists for extension checks, where the booking being
    /// extended would otherwise conflict with itself.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn find_for_unit(
        &mut self,
        unit_id: &UnitId,
        exclude: Option<i64>,
    ) -> Result<Vec<Booking>, RepositoryError>;

    /// Looks up a booking by its canonical ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn find_by_id(&mut self, booking_id: i64) -> Result<Option<Booking>, RepositoryError>;

    /// Persists a new booking and returns it with its assigned ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn create(&mut self, booking: &Booking) -> Result<Booking, RepositoryError>;

    /// Updates the night count and derived check-out date of an existing
    /// booking. No other field may change.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn update_nights(
        &mut self,
        booking_id: i64,
        number_of_nights: u32,
        check_out_date: Date,
    ) -> Result<(), RepositoryError>;
}
