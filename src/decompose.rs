// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Instant → calendar-field decomposition.
//!
//! The two operations of this crate live here.  [`decompose`] turns an
//! [`Instant`] into the full [`DateComponents`] record under an explicit
//! [`CalendarContext`]; [`day_month_year`] is the reduced date-only
//! convenience built on top of it.  Both are pure: same instant, same
//! context, same result, with no ambient state consulted.

use chrono::{Datelike, Offset, TimeZone, Timelike};

use crate::{CalendarContext, DateComponents, DayMonthYearComponents, Instant, InvalidInstant};

// ═══════════════════════════════════════════════════════════════════════════
// Operations
// ═══════════════════════════════════════════════════════════════════════════

/// Decompose an absolute instant into the full set of calendar fields.
///
/// The instant is resolved against UTC, shifted by the context timezone's
/// offset *for that instant*, and read out field by field.  All fields of
/// the returned record therefore describe the same local date-time and are
/// mutually consistent; daylight-saving rules of named timezones are
/// honoured per instant.
///
/// # Errors
///
/// Returns [`InvalidInstant`] when the instant cannot be placed on the
/// calendar: it falls outside chrono's representable date range (roughly
/// ±262 000 years around the common era), or its nanosecond part is not a
/// valid subsecond/leap-second value.  The error carries the offending
/// instant.
///
/// # Examples
///
/// ```
/// use dateparts::{decompose, CalendarContext, Instant};
///
/// // 2016-10-02T00:00:00Z.
/// let instant = Instant::from_unix_seconds(1_475_366_400);
/// let fields = decompose(instant, &CalendarContext::UTC)?;
///
/// assert_eq!((fields.year, fields.month, fields.day), (2016, 10, 2));
/// assert_eq!(fields.weekday, chrono::Weekday::Sun);
/// # Ok::<(), dateparts::InvalidInstant>(())
/// ```
pub fn decompose<Tz: TimeZone>(
    instant: Instant,
    context: &CalendarContext<Tz>,
) -> Result<DateComponents, InvalidInstant> {
    let utc = instant.to_utc().ok_or(InvalidInstant { instant })?;

    // Resolving an absolute instant against a timezone is never ambiguous:
    // DST gaps and folds only exist in the local→absolute direction.
    let offset = context.timezone().offset_from_utc_datetime(&utc.naive_utc()).fix();

    // Shifting can leave the representable range again near its edges.
    let local = utc
        .naive_utc()
        .checked_add_offset(offset)
        .ok_or(InvalidInstant { instant })?;

    Ok(DateComponents {
        year: local.year(),
        month: local.month(),
        day: local.day(),
        hour: local.hour(),
        minute: local.minute(),
        second: local.second(),
        nanosecond: local.nanosecond(),
        weekday: local.weekday(),
        day_of_year: local.ordinal(),
        iso_week_year: local.iso_week().year(),
        iso_week: local.iso_week().week(),
        utc_offset: offset,
    })
}

/// Decompose an absolute instant into its day, month and year only.
///
/// Equivalent to [`decompose`] followed by
/// [`DateComponents::day_month_year`]; the full record is computed
/// internally so the reduced view can never disagree with it.
///
/// # Errors
///
/// Fails for exactly the instants [`decompose`] fails for.
pub fn day_month_year<Tz: TimeZone>(
    instant: Instant,
    context: &CalendarContext<Tz>,
) -> Result<DayMonthYearComponents, InvalidInstant> {
    Ok(decompose(instant, context)?.day_month_year())
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
