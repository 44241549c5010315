// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Date Components Module
//!
//! This module decomposes absolute timestamps into calendar fields under an
//! explicitly supplied calendar context.
//!
//! # Core types
//!
//! - [`Instant`] — opaque absolute timestamp (seconds + nanoseconds since
//!   the Unix epoch).
//! - [`CalendarContext`] — the interpretation rules: a proleptic Gregorian
//!   calendar observed from an explicit timezone.
//! - [`DateComponents`] — the full calendar-field record for one instant.
//! - [`DayMonthYearComponents`] — the reduced date-only view.
//! - [`InvalidInstant`] — the single error: the instant cannot be placed on
//!   the calendar.
//!
//! # Operations
//!
//! | Function | Result |
//! |----------|--------|
//! | [`decompose`] | Full [`DateComponents`] record |
//! | [`day_month_year`] | Reduced [`DayMonthYearComponents`] view |
//!
//! Both take the context as a parameter on every call.  There is no
//! ambient calendar or timezone state, so results are reproducible and two
//! contexts can be used side by side:
//!
//! ```
//! use dateparts::{day_month_year, CalendarContext, Instant};
//!
//! // 2016-10-02T00:30:00Z.
//! let instant = Instant::from_unix_seconds(1_475_368_200);
//!
//! let utc = day_month_year(instant, &CalendarContext::UTC)?;
//! assert_eq!((utc.day, utc.month, utc.year), (2, 10, 2016));
//!
//! // One hour west it is still October 1st.
//! let azores = CalendarContext::west(3_600).expect("valid offset");
//! let local = day_month_year(instant, &azores)?;
//! assert_eq!((local.day, local.month, local.year), (1, 10, 2016));
//! # Ok::<(), dateparts::InvalidInstant>(())
//! ```
//!
//! # What this crate does not do
//!
//! Formatting, parsing, date arithmetic and the inverse (fields → instant)
//! direction are out of scope; chrono itself covers those.  Decomposition
//! reads fields out, nothing more.

mod components;
mod context;
mod decompose;
mod error;
mod instant;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use components::{DateComponents, DayMonthYearComponents};
pub use context::CalendarContext;
pub use decompose::{day_month_year, decompose};
pub use error::InvalidInstant;
pub use instant::Instant;

// ── Context type aliases ──────────────────────────────────────────────────

/// Context observing from UTC.
///
/// This is a type alias for [`CalendarContext<chrono::Utc>`], the default
/// type parameter spelled out.
pub type UtcContext = CalendarContext<chrono::Utc>;

/// Context observing from a fixed UTC offset.
///
/// This is a type alias for [`CalendarContext<chrono::FixedOffset>`], the
/// type produced by [`CalendarContext::east`] and [`CalendarContext::west`].
pub type FixedOffsetContext = CalendarContext<chrono::FixedOffset>;
