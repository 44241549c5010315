// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar context — the rules an instant is interpreted under.
//!
//! Decomposition never consults ambient process state (no "current
//! calendar", no environment-derived timezone).  Every call receives a
//! [`CalendarContext`] naming the timezone explicitly, which makes results
//! reproducible across machines and lets two contexts be used side by side
//! in one program.
//!
//! The calendar itself is the proleptic Gregorian calendar, chrono's only
//! calendar; the context therefore only parameterises the timezone.
//! `chrono::Local` is accepted like any other `TimeZone`, but an explicit
//! zone is the better default for anything that must be reproducible.

use chrono::{FixedOffset, TimeZone, Utc};

// ---------------------------------------------------------------------------
// CalendarContext
// ---------------------------------------------------------------------------

/// Interpretation rules for turning an [`Instant`](crate::Instant) into
/// calendar fields: a proleptic Gregorian calendar observed from a
/// timezone.
///
/// The timezone may be anything implementing `chrono::TimeZone` — [`Utc`]
/// (the default), a [`FixedOffset`], or a named zone from a provider crate
/// such as `chrono-tz`.  Named zones resolve their UTC offset per instant,
/// so a single context is enough to cover daylight-saving transitions.
///
/// # Example
///
/// ```
/// use dateparts::CalendarContext;
///
/// let utc = CalendarContext::UTC;
/// let tokyo = CalendarContext::east(9 * 3600).expect("valid offset");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarContext<Tz: TimeZone = Utc> {
    timezone: Tz,
}

impl CalendarContext<Utc> {
    /// The UTC context.
    pub const UTC: Self = Self::utc();

    /// Create the UTC context.
    #[inline]
    pub const fn utc() -> Self {
        Self { timezone: Utc }
    }
}

impl CalendarContext<FixedOffset> {
    /// Create a context at a fixed offset east of UTC, in seconds.
    ///
    /// Returns `None` when the offset is out of bounds (±24 h exclusive).
    #[inline]
    pub fn east(secs: i32) -> Option<Self> {
        FixedOffset::east_opt(secs).map(Self::new)
    }

    /// Create a context at a fixed offset west of UTC, in seconds.
    ///
    /// Returns `None` when the offset is out of bounds (±24 h exclusive).
    #[inline]
    pub fn west(secs: i32) -> Option<Self> {
        FixedOffset::west_opt(secs).map(Self::new)
    }
}

impl<Tz: TimeZone> CalendarContext<Tz> {
    /// Create a context observing from the given timezone.
    #[inline]
    pub const fn new(timezone: Tz) -> Self {
        Self { timezone }
    }

    /// The timezone this context observes from.
    #[inline]
    pub const fn timezone(&self) -> &Tz {
        &self.timezone
    }
}

impl<Tz: TimeZone> From<Tz> for CalendarContext<Tz> {
    #[inline]
    fn from(timezone: Tz) -> Self {
        Self::new(timezone)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utc_constructors_agree() {
        assert_eq!(CalendarContext::UTC, CalendarContext::utc());
        assert_eq!(CalendarContext::UTC, CalendarContext::new(Utc));
        assert_eq!(CalendarContext::UTC.timezone(), &Utc);
    }

    #[test]
    fn fixed_offset_constructors_carry_the_offset() {
        let kolkata = CalendarContext::east(19_800).unwrap();
        assert_eq!(kolkata.timezone().local_minus_utc(), 19_800);

        let baker_island = CalendarContext::west(43_200).unwrap();
        assert_eq!(baker_island.timezone().local_minus_utc(), -43_200);
    }

    #[test]
    fn out_of_bounds_offsets_are_rejected() {
        assert_eq!(CalendarContext::east(86_400), None);
        assert_eq!(CalendarContext::west(86_400), None);
    }

    #[test]
    fn from_timezone() {
        let ctx: CalendarContext<FixedOffset> = FixedOffset::east_opt(3_600).unwrap().into();
        assert_eq!(ctx, CalendarContext::east(3_600).unwrap());
    }
}
