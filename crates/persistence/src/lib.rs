// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the StayHub booking system.
//!
//! This crate provides the Diesel/SQLite implementation of the engine's
//! `BookingRepository` trait. All conflict reasoning stays in the engine;
//! this layer only reads and writes rows.
//!
//! ## Testing
//!
//! `SqlitePersistence::new_in_memory()` creates a fresh, fully migrated
//! database per call, giving each test an isolated store with no external
//! infrastructure.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod data_models;
mod diesel_schema;
mod error;
mod sqlite;

#[cfg(test)]
mod tests;

use diesel::prelude::*;
use diesel::{OptionalExtension, SqliteConnection};
use std::path::Path;
use tracing::debug;

use crate::data_models::{BookingRow, NewBookingRow};
use crate::diesel_schema::bookings;
use stayhub::{BookingRepository, RepositoryError};
use stayhub_domain::{Booking, GuestName, UnitId, format_date};
use time::Date;

pub use error::PersistenceError;

/// SQLite-backed booking store.
pub struct SqlitePersistence {
    conn: SqliteConnection,
}

impl std::fmt::Debug for SqlitePersistence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqlitePersistence").finish_non_exhaustive()
    }
}

impl SqlitePersistence {
    /// Creates a fresh in-memory database and runs migrations.
    ///
    /// Each call yields an isolated database; nothing is shared between
    /// instances.
    ///
    /// # Errors
    ///
    /// Returns an error if connection or migration fails.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let conn: SqliteConnection = sqlite::connect_and_migrate(":memory:")?;
        Ok(Self { conn })
    }

    /// Opens (or creates) a file-based database, runs migrations, and
    /// enables WAL mode.
    ///
    /// # Errors
    ///
    /// Returns an error if connection or migration fails.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let url: String = path.as_ref().to_string_lossy().into_owned();
        let mut conn: SqliteConnection = sqlite::connect_and_migrate(&url)?;
        sqlite::enable_wal_mode(&mut conn)?;
        Ok(Self { conn })
    }

    fn load_rows(
        &mut self,
        query: bookings::BoxedQuery<'_, diesel::sqlite::Sqlite>,
    ) -> Result<Vec<Booking>, PersistenceError> {
        let rows: Vec<BookingRow> = query.load(&mut self.conn)?;
        rows.into_iter().map(BookingRow::into_domain).collect()
    }
}

impl BookingRepository for SqlitePersistence {
    fn find_by_guest_and_unit(
        &mut self,
        guest_name: &GuestName,
        unit_id: &UnitId,
    ) -> Result<Vec<Booking>, RepositoryError> {
        let query = bookings::table
            .filter(bookings::guest_name.eq(guest_name.value()))
            .filter(bookings::unit_id.eq(unit_id.value()))
            .into_boxed();
        Ok(self.load_rows(query)?)
    }

    fn find_by_guest(&mut self, guest_name: &GuestName) -> Result<Vec<Booking>, RepositoryError> {
        let query = bookings::table
            .filter(bookings::guest_name.eq(guest_name.value()))
            .into_boxed();
        Ok(self.load_rows(query)?)
    }

    fn find_for_unit(
        &mut self,
        unit_id: &UnitId,
        exclude: Option<i64>,
    ) -> Result<Vec<Booking>, RepositoryError> {
        let mut query = bookings::table
            .filter(bookings::unit_id.eq(unit_id.value()))
            .into_boxed();
        if let Some(excluded_id) = exclude {
            query = query.filter(bookings::booking_id.ne(excluded_id));
        }
        Ok(self.load_rows(query)?)
    }

    fn find_by_id(&mut self, booking_id: i64) -> Result<Option<Booking>, RepositoryError> {
        let row: Option<BookingRow> = bookings::table
            .find(booking_id)
            .first::<BookingRow>(&mut self.conn)
            .optional()
            .map_err(PersistenceError::from)?;
        match row {
            Some(row) => Ok(Some(row.into_domain()?)),
            None => Ok(None),
        }
    }

    fn create(&mut self, booking: &Booking) -> Result<Booking, RepositoryError> {
        let new_row: NewBookingRow = NewBookingRow::from_domain(booking)?;
        let booking_id: i64 = self
            .conn
            .immediate_transaction(|conn| {
                diesel::insert_into(bookings::table)
                    .values(&new_row)
                    .execute(conn)
                    .map_err(PersistenceError::from)?;
                sqlite::last_insert_rowid(conn)
            })
            .map_err(RepositoryError::from)?;
        debug!(
            booking_id,
            unit_id = %booking.unit_id().value(),
            "Inserted booking"
        );

        let persisted: Booking = Booking::with_id(
            booking_id,
            booking.guest_name().clone(),
            booking.unit_id().clone(),
            booking.check_in_date(),
            booking.number_of_nights(),
        )
        .map_err(|e| RepositoryError::Backend(e.to_string()))?;
        Ok(persisted)
    }

    fn update_nights(
        &mut self,
        booking_id: i64,
        number_of_nights: u32,
        check_out_date: Date,
    ) -> Result<(), RepositoryError> {
        let nights: i32 = i32::try_from(number_of_nights).map_err(|_| {
            RepositoryError::Backend(format!(
                "night count {number_of_nights} exceeds column range"
            ))
        })?;
        let check_out: String =
            format_date(check_out_date).map_err(|e| RepositoryError::Backend(e.to_string()))?;

        let updated: usize = diesel::update(bookings::table.find(booking_id))
            .set((
                bookings::number_of_nights.eq(nights),
                bookings::check_out_date.eq(&check_out),
            ))
            .execute(&mut self.conn)
            .map_err(PersistenceError::from)?;
        if updated == 0 {
            return Err(RepositoryError::Backend(format!(
                "no booking with id {booking_id}"
            )));
        }
        debug!(booking_id, nights, check_out = %check_out, "Updated booking nights");
        Ok(())
    }
}
