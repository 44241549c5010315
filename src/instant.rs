// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Opaque absolute timestamp.
//!
//! [`Instant`] is the input type of both decomposition operations.  It
//! stores an absolute point in time as whole seconds since the Unix epoch
//! plus a subsecond nanosecond count, the same normalized pair chrono's
//! timestamp constructors take.  The type knows nothing about calendars or
//! timezones; interpreting it into calendar fields is the job of
//! [`decompose`](crate::decompose) under an explicit
//! [`CalendarContext`](crate::CalendarContext).
//!
//! Constructors never range-check.  Whether an instant is representable is
//! decided by the calendar facility at decomposition time and reported as
//! [`InvalidInstant`](crate::InvalidInstant).

use chrono::{DateTime, TimeZone, Utc};
use qtty::{Day, Days, Second, Seconds};

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

// ═══════════════════════════════════════════════════════════════════════════
// Instant — the absolute timestamp
// ═══════════════════════════════════════════════════════════════════════════

/// An absolute point in time, independent of calendar and timezone.
///
/// Stored as `i64` seconds since 1970-01-01T00:00:00Z plus `u32` subsecond
/// nanoseconds.  The pair is kept normalized (`nanos` counts forward from
/// the whole second, also for pre-epoch instants), so the derived ordering
/// is chronological.  A nanosecond value of 1 000 000 000 or above denotes
/// a leap second, following chrono's convention.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant {
    secs: i64,
    nanos: u32,
}

impl Instant {
    /// The Unix epoch: 1970-01-01T00:00:00 UTC.
    pub const UNIX_EPOCH: Self = Self::from_unix_seconds(0);

    // ── constructors ──────────────────────────────────────────────────

    /// Create from whole seconds since the Unix epoch plus subsecond
    /// nanoseconds.
    ///
    /// `nanos` counts forward from `secs`, so `-0.5 s` is written
    /// `from_unix_timestamp(-1, 500_000_000)`.  Values of `nanos` at or
    /// above 2 000 000 000 are never representable and fail at
    /// decomposition time.
    #[inline]
    pub const fn from_unix_timestamp(secs: i64, nanos: u32) -> Self {
        Self { secs, nanos }
    }

    /// Create from whole seconds since the Unix epoch.
    #[inline]
    pub const fn from_unix_seconds(secs: i64) -> Self {
        Self { secs, nanos: 0 }
    }

    /// Create from milliseconds since the Unix epoch.
    #[inline]
    pub const fn from_unix_millis(millis: i64) -> Self {
        Self {
            secs: millis.div_euclid(1_000),
            nanos: millis.rem_euclid(1_000) as u32 * 1_000_000,
        }
    }

    /// Create from a fractional day count since the Unix epoch.
    ///
    /// Sub-nanosecond remainders are truncated.
    pub fn from_unix_days(days: Days) -> Self {
        Self::from_seconds_value(days.to::<Second>().value())
    }

    /// Create from a chrono date-time in any timezone.
    ///
    /// Only the absolute position is kept; the source timezone plays no
    /// further role.
    #[inline]
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        Self {
            secs: datetime.timestamp(),
            nanos: datetime.timestamp_subsec_nanos(),
        }
    }

    /// Split a fractional second count into the normalized pair.
    fn from_seconds_value(seconds: f64) -> Self {
        let secs = seconds.floor() as i64;
        let nanos = ((seconds - secs as f64) * 1e9) as u32;
        Self { secs, nanos }
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// Whole seconds since the Unix epoch.
    #[inline]
    pub const fn unix_seconds(&self) -> i64 {
        self.secs
    }

    /// Subsecond nanoseconds, counting forward from
    /// [`unix_seconds`](Self::unix_seconds).
    #[inline]
    pub const fn subsec_nanos(&self) -> u32 {
        self.nanos
    }

    /// The instant as a typed fractional second count since the Unix epoch.
    #[inline]
    pub fn as_unix_seconds(&self) -> Seconds {
        Seconds::new(self.secs as f64 + self.nanos as f64 / 1e9)
    }

    /// The instant as a typed fractional day count since the Unix epoch.
    #[inline]
    pub fn as_unix_days(&self) -> Days {
        self.as_unix_seconds().to::<Day>()
    }

    // ── chrono interop ────────────────────────────────────────────────

    /// Convert to a `chrono::DateTime<Utc>`.
    ///
    /// Returns `None` if the instant falls outside chrono's representable
    /// range.
    #[inline]
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.secs, self.nanos)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait implementations
// ═══════════════════════════════════════════════════════════════════════════

impl<Tz: TimeZone> From<DateTime<Tz>> for Instant {
    #[inline]
    fn from(datetime: DateTime<Tz>) -> Self {
        Self::from_datetime(&datetime)
    }
}

impl std::fmt::Display for Instant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unix {} s + {} ns", self.secs, self.nanos)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for Instant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Instant", 2)?;
        s.serialize_field("unix_seconds", &self.secs)?;
        s.serialize_field("nanosecond", &self.nanos)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Instant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            unix_seconds: i64,
            nanosecond: u32,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(Self::from_unix_timestamp(raw.unix_seconds, raw.nanosecond))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn unix_epoch_is_zero() {
        assert_eq!(Instant::UNIX_EPOCH.unix_seconds(), 0);
        assert_eq!(Instant::UNIX_EPOCH.subsec_nanos(), 0);
        assert_eq!(Instant::UNIX_EPOCH, Instant::from_unix_seconds(0));
    }

    #[test]
    fn const_construction() {
        const T: Instant = Instant::from_unix_millis(1_500);
        assert_eq!(T.unix_seconds(), 1);
        assert_eq!(T.subsec_nanos(), 500_000_000);
    }

    #[test]
    fn from_unix_millis_splits_whole_and_subsecond() {
        let i = Instant::from_unix_millis(1_475_366_400_123);
        assert_eq!(i.unix_seconds(), 1_475_366_400);
        assert_eq!(i.subsec_nanos(), 123_000_000);
    }

    #[test]
    fn from_unix_millis_normalizes_pre_epoch_values() {
        let i = Instant::from_unix_millis(-1);
        assert_eq!(i.unix_seconds(), -1);
        assert_eq!(i.subsec_nanos(), 999_000_000);
    }

    #[test]
    fn from_unix_days_matches_whole_seconds() {
        let i = Instant::from_unix_days(Days::new(1.5));
        assert_eq!(i.unix_seconds(), 129_600);
        assert_eq!(i.subsec_nanos(), 0);
    }

    #[test]
    fn from_unix_days_handles_pre_epoch_values() {
        let i = Instant::from_unix_days(Days::new(-0.25));
        assert_eq!(i.unix_seconds(), -21_600);
        assert_eq!(i.subsec_nanos(), 0);
    }

    #[test]
    fn typed_quantity_roundtrip() {
        let i = Instant::from_unix_seconds(129_600);
        assert_eq!(i.as_unix_seconds(), Seconds::new(129_600.0));
        assert_eq!(i.as_unix_days(), Days::new(1.5));
    }

    #[test]
    fn datetime_roundtrip_preserves_timestamp() {
        let dt = DateTime::from_timestamp(946_728_000, 123_000_000).unwrap();
        let i = Instant::from_datetime(&dt);
        assert_eq!(i.unix_seconds(), 946_728_000);
        assert_eq!(i.subsec_nanos(), 123_000_000);
        assert_eq!(i.to_utc(), Some(dt));
    }

    #[test]
    fn from_datetime_keeps_absolute_position_across_zones() {
        let utc = DateTime::from_timestamp(1_475_366_400, 0).unwrap();
        let shifted = utc.with_timezone(&FixedOffset::east_opt(3_600).unwrap());
        assert_eq!(Instant::from_datetime(&shifted), Instant::from_datetime(&utc));
        assert_eq!(Instant::from(shifted), Instant::from(utc));
    }

    #[test]
    fn to_utc_rejects_out_of_range_values() {
        assert_eq!(Instant::from_unix_seconds(i64::MAX).to_utc(), None);
        assert_eq!(Instant::from_unix_seconds(i64::MIN).to_utc(), None);
    }

    #[test]
    fn ordering_is_chronological() {
        let a = Instant::from_unix_timestamp(-1, 999_999_999);
        let b = Instant::UNIX_EPOCH;
        let c = Instant::from_unix_timestamp(0, 1);
        assert!(a < b);
        assert!(b < c);
        assert_eq!(a.max(b).max(c), c);
    }

    #[test]
    fn display_names_the_epoch_pair() {
        let i = Instant::from_unix_timestamp(42, 7);
        assert_eq!(format!("{i}"), "Unix 42 s + 7 ns");
    }
}
