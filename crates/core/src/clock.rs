// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Injected reference date for the past-check-in rule.
//!
//! "Today" is a dependency, not a hidden global: each use-case invocation
//! samples the clock exactly once, so a request is judged against a single
//! consistent reference date.

use time::{Date, OffsetDateTime};

/// Supplies the current reference date for past-date validation.
pub trait Clock {
    /// Returns today's date.
    fn today(&self) -> Date;
}

/// The wall clock, in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        OffsetDateTime::now_utc().date()
    }
}

/// A clock pinned to a fixed date, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    /// The date this clock always reports.
    today: Date,
}

impl FixedClock {
    /// Creates a clock that always reports `today`.
    #[must_use]
    pub const fn new(today: Date) -> Self {
        Self { today }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.today
    }
}
