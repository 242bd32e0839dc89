// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use stayhub_domain::DomainError;

/// Errors raised by a `BookingRepository` implementation.
///
/// These represent infrastructure failures (connection loss, corrupt rows),
/// never business-rule outcomes. Business rejections are `Rejection` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The storage backend failed.
    Backend(String),
}

impl std::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Backend(msg) => write!(f, "Repository backend error: {msg}"),
        }
    }
}

impl std::error::Error for RepositoryError {}

/// Errors that can occur while executing a booking use case.
///
/// A `CoreError` means the use case could not run to a decision at all;
/// an ordinary business refusal is a `BookingOutcome::Rejected` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain invariant was violated while constructing booking state.
    DomainViolation(DomainError),
    /// The booking repository failed.
    Repository(RepositoryError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::Repository(err) => write!(f, "Repository error: {err}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

impl From<RepositoryError> for CoreError {
    fn from(err: RepositoryError) -> Self {
        Self::Repository(err)
    }
}
