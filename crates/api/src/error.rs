// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use stayhub::{CoreError, Rejection};

/// API-level errors.
///
/// These are distinct from engine errors and represent the API contract:
/// malformed input is refused before any business rule runs, business
/// rejections carry a stable machine-readable kind, and infrastructure
/// failures surface as `Internal`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A booking business rule refused the request.
    BookingRejected {
        /// The stable machine-readable rejection kind.
        kind: &'static str,
        /// The human-readable rejection reason, surfaced verbatim.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::BookingRejected { message, .. } => {
                write!(f, "{message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        Self::Internal {
            message: err.to_string(),
        }
    }
}

/// Translates an engine rejection into the API error surface.
///
/// `BookingNotFound` becomes a resource lookup failure; every other rejection
/// keeps its kind and reason text.
#[must_use]
pub fn translate_rejection(rejection: &Rejection) -> ApiError {
    match rejection {
        Rejection::BookingNotFound { .. } => ApiError::ResourceNotFound {
            resource_type: String::from("Booking"),
            message: rejection.to_string(),
        },
        _ => ApiError::BookingRejected {
            kind: rejection.kind(),
            message: rejection.to_string(),
        },
    }
}
