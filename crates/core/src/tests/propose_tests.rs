// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Engine tests for proposing new bookings.

use crate::clock::FixedClock;
use crate::engine::{ProposeNewBooking, propose_new_booking};
use crate::outcome::{BookingOutcome, Rejection};
use stayhub_domain::Booking;
use time::Date;
use time::macros::date;

use super::helpers::{InMemoryRepository, guest, unit};

const TODAY: Date = date!(2026 - 01 - 01);

fn clock() -> FixedClock {
    FixedClock::new(TODAY)
}

fn proposal(guest_name: &str, unit_id: &str, check_in: Date, nights: u32) -> ProposeNewBooking {
    ProposeNewBooking {
        guest_name: guest(guest_name),
        unit_id: unit(unit_id),
        check_in_date: check_in,
        number_of_nights: nights,
    }
}

fn accept(repository: &mut InMemoryRepository, request: &ProposeNewBooking) -> Booking {
    match propose_new_booking(repository, &clock(), request).unwrap() {
        BookingOutcome::Accepted(booking) => booking,
        BookingOutcome::Rejected(rejection) => panic!("expected acceptance, got: {rejection}"),
    }
}

fn reject(repository: &mut InMemoryRepository, request: &ProposeNewBooking) -> Rejection {
    match propose_new_booking(repository, &clock(), request).unwrap() {
        BookingOutcome::Rejected(rejection) => rejection,
        BookingOutcome::Accepted(booking) => panic!("expected rejection, got: {booking:?}"),
    }
}

#[test]
fn test_first_booking_is_accepted() {
    let mut repository = InMemoryRepository::new();
    let booking = accept(
        &mut repository,
        &proposal("Alice", "unit-1", date!(2026 - 01 - 01), 3),
    );
    assert_eq!(booking.booking_id(), Some(1));
    assert_eq!(booking.check_out_date(), date!(2026 - 01 - 04));
    assert_eq!(repository.stored().len(), 1);
}

#[test]
fn test_past_check_in_date_is_rejected() {
    let mut repository = InMemoryRepository::new();
    let rejection = reject(
        &mut repository,
        &proposal("Alice", "unit-1", date!(2025 - 12 - 31), 3),
    );
    assert_eq!(
        rejection,
        Rejection::PastCheckInDate {
            check_in_date: date!(2025 - 12 - 31),
            today: TODAY,
        }
    );
    assert_eq!(rejection.kind(), "past_check_in_date");
}

#[test]
fn test_past_date_rejected_even_when_unit_is_free() {
    // Availability is irrelevant: the past-date rule fires first.
    let mut repository = InMemoryRepository::new();
    let rejection = reject(
        &mut repository,
        &proposal("Alice", "empty-unit", date!(2020 - 01 - 01), 1),
    );
    assert!(matches!(rejection, Rejection::PastCheckInDate { .. }));
    assert!(repository.stored().is_empty());
}

#[test]
fn test_check_in_today_is_allowed() {
    let mut repository = InMemoryRepository::new();
    accept(&mut repository, &proposal("Alice", "unit-1", TODAY, 1));
}

#[test]
fn test_same_guest_same_unit_is_rejected() {
    let mut repository = InMemoryRepository::new();
    accept(
        &mut repository,
        &proposal("Alice", "unit-1", date!(2026 - 01 - 01), 2),
    );
    // Same guest, same unit, disjoint dates: still refused.
    let rejection = reject(
        &mut repository,
        &proposal("Alice", "unit-1", date!(2026 - 02 - 01), 2),
    );
    assert_eq!(rejection, Rejection::DuplicateGuestUnitBooking);
}

#[test]
fn test_same_guest_different_unit_is_rejected() {
    let mut repository = InMemoryRepository::new();
    accept(
        &mut repository,
        &proposal("Alice", "unit-1", date!(2026 - 01 - 01), 2),
    );
    let rejection = reject(
        &mut repository,
        &proposal("Alice", "unit-2", date!(2026 - 02 - 01), 2),
    );
    assert_eq!(rejection, Rejection::GuestAlreadyBookedElsewhere);
    assert_eq!(rejection.kind(), "guest_already_booked_elsewhere");
}

#[test]
fn test_guest_names_are_case_sensitive() {
    let mut repository = InMemoryRepository::new();
    accept(
        &mut repository,
        &proposal("Alice", "unit-1", date!(2026 - 01 - 01), 2),
    );
    // "alice" is a different identity key from "Alice".
    accept(
        &mut repository,
        &proposal("alice", "unit-2", date!(2026 - 01 - 01), 2),
    );
}

#[test]
fn test_overlapping_stay_is_rejected() {
    let mut repository = InMemoryRepository::new();
    accept(
        &mut repository,
        &proposal("Alice", "unit-1", date!(2026 - 01 - 01), 4),
    );
    // [Jan 3, Jan 6) overlaps [Jan 1, Jan 5).
    let rejection = reject(
        &mut repository,
        &proposal("Bob", "unit-1", date!(2026 - 01 - 03), 3),
    );
    assert_eq!(rejection, Rejection::UnitUnavailable);
    assert_eq!(rejection.kind(), "unit_unavailable");
}

#[test]
fn test_adjacent_stays_are_both_accepted() {
    let mut repository = InMemoryRepository::new();
    // [Jan 1, Jan 4) then [Jan 4, Jan 6): checkout day equals check-in day.
    accept(
        &mut repository,
        &proposal("Alice", "unit-1", date!(2026 - 01 - 01), 3),
    );
    accept(
        &mut repository,
        &proposal("Bob", "unit-1", date!(2026 - 01 - 04), 2),
    );
    assert_eq!(repository.stored().len(), 2);
}

#[test]
fn test_stay_ending_at_existing_check_in_is_accepted() {
    let mut repository = InMemoryRepository::new();
    accept(
        &mut repository,
        &proposal("Alice", "unit-1", date!(2026 - 01 - 04), 2),
    );
    accept(
        &mut repository,
        &proposal("Bob", "unit-1", date!(2026 - 01 - 01), 3),
    );
}

#[test]
fn test_overlap_in_other_unit_is_accepted() {
    let mut repository = InMemoryRepository::new();
    accept(
        &mut repository,
        &proposal("Alice", "unit-1", date!(2026 - 01 - 01), 4),
    );
    accept(
        &mut repository,
        &proposal("Bob", "unit-2", date!(2026 - 01 - 01), 4),
    );
}

#[test]
fn test_rejection_leaves_store_unchanged() {
    let mut repository = InMemoryRepository::new();
    accept(
        &mut repository,
        &proposal("Alice", "unit-1", date!(2026 - 01 - 01), 4),
    );
    let before = repository.stored();
    reject(
        &mut repository,
        &proposal("Bob", "unit-1", date!(2026 - 01 - 02), 1),
    );
    assert_eq!(repository.stored(), before);
}

#[test]
fn test_rejection_reasons_are_ordered() {
    // The duplicate-in-unit rule reports before the anywhere rule.
    let mut repository = InMemoryRepository::new();
    accept(
        &mut repository,
        &proposal("Alice", "unit-1", date!(2026 - 01 - 01), 2),
    );
    let rejection = reject(
        &mut repository,
        &proposal("Alice", "unit-1", date!(2026 - 03 - 01), 2),
    );
    assert_eq!(rejection, Rejection::DuplicateGuestUnitBooking);
}
