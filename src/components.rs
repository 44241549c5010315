// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar field records produced by decomposition.
//!
//! [`DateComponents`] is the full record: every field the proleptic
//! Gregorian calendar yields for one instant in one timezone, already
//! resolved and consistent with each other.  [`DayMonthYearComponents`] is
//! the reduced date-only view for callers that compare or group by
//! calendar day.  Both are plain `Copy` value types; they do not remember
//! the instant or the context they came from.

use chrono::{FixedOffset, Weekday};

#[cfg(feature = "serde")]
use serde::{de, ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

// ═══════════════════════════════════════════════════════════════════════════
// DateComponents — the full record
// ═══════════════════════════════════════════════════════════════════════════

/// The complete set of calendar fields for one instant in one timezone.
///
/// | Field           | Meaning                                             |
/// |-----------------|-----------------------------------------------------|
/// | `year`          | Gregorian calendar year (astronomical numbering)    |
/// | `month`         | Month of year, 1–12                                 |
/// | `day`           | Day of month, 1–31                                  |
/// | `hour`          | Hour of day, 0–23                                   |
/// | `minute`        | Minute of hour, 0–59                                |
/// | `second`        | Second of minute, 0–59                              |
/// | `nanosecond`    | Subsecond nanoseconds; ≥ 10⁹ marks a leap second    |
/// | `weekday`       | Day of week                                         |
/// | `day_of_year`   | Ordinal day, 1–366                                  |
/// | `iso_week_year` | ISO 8601 week-numbering year                        |
/// | `iso_week`      | ISO 8601 week of `iso_week_year`, 1–53              |
/// | `utc_offset`    | The UTC offset the fields were resolved under       |
///
/// `iso_week_year` can differ from `year` by one around New Year, which is
/// why the pair is carried separately instead of being recomputed from the
/// date fields.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DateComponents {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub nanosecond: u32,
    pub weekday: Weekday,
    pub day_of_year: u32,
    pub iso_week_year: i32,
    pub iso_week: u32,
    pub utc_offset: FixedOffset,
}

impl DateComponents {
    /// Reduce to the date-only [`DayMonthYearComponents`] view.
    ///
    /// Pure field selection; nothing is recomputed.
    #[inline]
    pub const fn day_month_year(&self) -> DayMonthYearComponents {
        DayMonthYearComponents {
            day: self.day,
            month: self.month,
            year: self.year,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// DayMonthYearComponents — the reduced view
// ═══════════════════════════════════════════════════════════════════════════

/// Date-only view: day of month, month of year, calendar year.
///
/// Always derived from a full [`DateComponents`] record, so the three
/// fields are mutually consistent by construction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DayMonthYearComponents {
    /// Day of month, 1–31.
    pub day: u32,
    /// Month of year, 1–12.
    pub month: u32,
    /// Gregorian calendar year.
    pub year: i32,
}

// ── Serde ─────────────────────────────────────────────────────────────────
//
// `Weekday` serialises as its ISO number (1 = Monday … 7 = Sunday) and the
// offset as whole seconds east of UTC, keeping the wire format free of
// chrono-specific spellings.

#[cfg(feature = "serde")]
impl Serialize for DateComponents {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("DateComponents", 12)?;
        s.serialize_field("year", &self.year)?;
        s.serialize_field("month", &self.month)?;
        s.serialize_field("day", &self.day)?;
        s.serialize_field("hour", &self.hour)?;
        s.serialize_field("minute", &self.minute)?;
        s.serialize_field("second", &self.second)?;
        s.serialize_field("nanosecond", &self.nanosecond)?;
        s.serialize_field("weekday", &self.weekday.number_from_monday())?;
        s.serialize_field("day_of_year", &self.day_of_year)?;
        s.serialize_field("iso_week_year", &self.iso_week_year)?;
        s.serialize_field("iso_week", &self.iso_week)?;
        s.serialize_field("utc_offset_seconds", &self.utc_offset.local_minus_utc())?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for DateComponents {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            year: i32,
            month: u32,
            day: u32,
            hour: u32,
            minute: u32,
            second: u32,
            nanosecond: u32,
            weekday: u32,
            day_of_year: u32,
            iso_week_year: i32,
            iso_week: u32,
            utc_offset_seconds: i32,
        }

        let raw = Raw::deserialize(deserializer)?;
        let weekday = weekday_from_iso_number(raw.weekday).ok_or_else(|| {
            de::Error::custom(format!("invalid ISO weekday number: {}", raw.weekday))
        })?;
        let utc_offset = FixedOffset::east_opt(raw.utc_offset_seconds).ok_or_else(|| {
            de::Error::custom(format!(
                "invalid UTC offset seconds: {}",
                raw.utc_offset_seconds
            ))
        })?;

        Ok(Self {
            year: raw.year,
            month: raw.month,
            day: raw.day,
            hour: raw.hour,
            minute: raw.minute,
            second: raw.second,
            nanosecond: raw.nanosecond,
            weekday,
            day_of_year: raw.day_of_year,
            iso_week_year: raw.iso_week_year,
            iso_week: raw.iso_week,
            utc_offset,
        })
    }
}

#[cfg(feature = "serde")]
fn weekday_from_iso_number(n: u32) -> Option<Weekday> {
    match n {
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        7 => Some(Weekday::Sun),
        _ => None,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
