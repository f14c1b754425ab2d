// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil calendar/clock instant.
//!
//! [`CivilInstant::new`] accepts any field values and lets them propagate
//! through the Julian Date arithmetic.  [`CivilInstant::try_new`] is the
//! strict alternative: the date must exist in the proleptic Gregorian
//! calendar and the clock fields must be within their usual ranges.

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};

use crate::error::{Error, Result};
use crate::julian::{compute_julian_date, JulianDate};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Calendar date and time of day, in the time scale GMST is evaluated on.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CivilInstant {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
    pub second: f64,
}

impl CivilInstant {
    /// Unchecked constructor.
    pub const fn new(year: i32, month: i32, day: i32, hour: i32, minute: i32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Checked constructor.
    ///
    /// Rejects dates that do not exist (e.g. February 30th), hours outside
    /// `0..24`, minutes outside `0..60`, and seconds that are not finite or
    /// not within `[0, 60)`.
    pub fn try_new(
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        second: f64,
    ) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(invalid("month", "must be within 1..=12"));
        }
        if !(NaiveDate::MIN.year()..=NaiveDate::MAX.year()).contains(&year) {
            return Err(invalid("year", "is outside the supported calendar range"));
        }
        let valid_date = u32::try_from(day)
            .ok()
            .and_then(|d| NaiveDate::from_ymd_opt(year, month as u32, d));
        if valid_date.is_none() {
            return Err(invalid("day", "does not exist in that month"));
        }
        if !(0..24).contains(&hour) {
            return Err(invalid("hour", "must be within 0..24"));
        }
        if !(0..60).contains(&minute) {
            return Err(invalid("minute", "must be within 0..60"));
        }
        if !second.is_finite() || !(0.0..60.0).contains(&second) {
            return Err(invalid("second", "must be finite and within [0, 60)"));
        }
        Ok(Self::new(year, month, day, hour, minute, second))
    }

    /// Build from a UTC timestamp.  Sub-second nanoseconds land in `second`.
    ///
    /// A leap second (chrono encodes it as nanoseconds ≥ 1e9) yields a
    /// `second` within `[60, 61)`; [`to_utc`](Self::to_utc) maps it back.
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        let nanos = f64::from(datetime.nanosecond()) / 1e9;
        Self::new(
            datetime.year(),
            datetime.month() as i32,
            datetime.day() as i32,
            datetime.hour() as i32,
            datetime.minute() as i32,
            f64::from(datetime.second()) + nanos,
        )
    }

    /// Convert to a `chrono::DateTime<Utc>`.
    ///
    /// Returns `None` when the fields do not form a valid date and time.
    /// A `second` within `[60, 61)` is a leap second and becomes second 59
    /// with nanoseconds ≥ 1e9, chrono's leap-second encoding.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        if !self.second.is_finite() || self.second < 0.0 {
            return None;
        }
        let mut whole = self.second.floor();
        let mut nanos = (((self.second - whole) * 1e9).round() as u32).min(999_999_999);
        if whole == 60.0 {
            whole = 59.0;
            nanos += 1_000_000_000;
        }
        let date = NaiveDate::from_ymd_opt(
            self.year,
            u32::try_from(self.month).ok()?,
            u32::try_from(self.day).ok()?,
        )?;
        let time = date.and_hms_nano_opt(
            u32::try_from(self.hour).ok()?,
            u32::try_from(self.minute).ok()?,
            whole as u32,
            nanos,
        )?;
        Some(DateTime::<Utc>::from_naive_utc_and_offset(time, Utc))
    }

    /// Fractional Julian Date of this instant.
    #[inline]
    pub fn julian_date(&self) -> JulianDate {
        compute_julian_date(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
    }
}

fn invalid(field: &'static str, reason: &'static str) -> Error {
    Error::InvalidCivilInstant { field, reason }
}

impl std::fmt::Display for CivilInstant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:06.3}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

impl From<DateTime<Utc>> for CivilInstant {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self::from_utc(datetime)
    }
}
