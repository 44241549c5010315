// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Decomposition error type.

use crate::Instant;
use thiserror::Error;

/// The calendar facility cannot represent the given [`Instant`].
///
/// Raised when the timestamp lies outside chrono's supported range
/// (roughly ±262 000 years around the common era), when its nanosecond
/// part is not a valid subsecond or leap-second count, or when the shift
/// to local civil time overflows that range under the context's UTC
/// offset.
///
/// The error carries the offending instant and is surfaced to the caller
/// verbatim, with no recovery or retry in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("instant {instant} is outside the representable calendar range")]
pub struct InvalidInstant {
    /// The instant that could not be decomposed.
    pub instant: Instant,
}
