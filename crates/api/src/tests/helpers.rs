// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::request_response::{CreateBookingRequest, ExtendBookingRequest};
use stayhub::FixedClock;
use stayhub_persistence::SqlitePersistence;
use time::macros::date;

pub fn create_test_persistence() -> SqlitePersistence {
    SqlitePersistence::new_in_memory().expect("Failed to create in-memory persistence")
}

/// A clock pinned to 2026-01-01 so past-date behavior is deterministic.
pub fn create_test_clock() -> FixedClock {
    FixedClock::new(date!(2026 - 01 - 01))
}

pub fn create_valid_request() -> CreateBookingRequest {
    CreateBookingRequest {
        guest_name: String::from("Alice"),
        unit_id: String::from("ocean-view-101"),
        check_in_date: String::from("2026-01-01"),
        number_of_nights: 3,
    }
}

pub fn create_extension_request(additional_nights: u32) -> ExtendBookingRequest {
    ExtendBookingRequest { additional_nights }
}
