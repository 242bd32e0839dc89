// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod availability;
mod clock;
mod engine;
mod error;
mod outcome;
mod repository;
mod rules;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use availability::find_conflict;
pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::{ExtendBooking, ProposeNewBooking, extend_booking, propose_new_booking};
pub use error::{CoreError, RepositoryError};
pub use outcome::{BookingOutcome, Rejection};
pub use repository::BookingRepository;
pub use rules::{guest_has_booking_anywhere, guest_has_booking_in_unit};
