// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Guest name is empty or invalid.
    InvalidGuestName(String),
    /// Unit identifier is empty or invalid.
    InvalidUnitId(String),
    /// Night count must be at least 1.
    InvalidNightCount {
        /// The invalid count value.
        count: u32,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Failed to format a date as a string.
    DateFormatError {
        /// The formatting error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidGuestName(msg) => write!(f, "Invalid guest name: {msg}"),
            Self::InvalidUnitId(msg) => write!(f, "Invalid unit ID: {msg}"),
            Self::InvalidNightCount { count } => {
                write!(f, "Invalid night count: {count}. Must be at least 1")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::DateFormatError { error } => {
                write!(f, "Failed to format date: {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
