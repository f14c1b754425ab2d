// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Date calculator.
//!
//! [`JulianDate`] stores a single [`Days`] quantity counted from the Julian
//! epoch, with the astronomical convention that the day number changes at
//! noon: `jd - 0.5` falls on the preceding civil midnight.
//!
//! [`compute_julian_date`] maps civil calendar/clock components onto that
//! axis with the Fliegel–Van Flandern integer day-number formula.  Calendar
//! fields are **not** validated here; out-of-range months or days yield an
//! arithmetically defined (if meaningless) date.  Use
//! [`CivilInstant::try_new`](crate::CivilInstant::try_new) for strict input.

use qtty::*;
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Seconds in one civil day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

// ═══════════════════════════════════════════════════════════════════════════
// JulianDate
// ═══════════════════════════════════════════════════════════════════════════

/// A fractional Julian Date.
///
/// The struct is `Copy` and layout-identical to a single `f64`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JulianDate {
    quantity: Days,
}

impl JulianDate {
    /// J2000.0 epoch: 2000-01-01T12:00:00 (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// One Julian century expressed in days.
    pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

    const LABEL: &'static str = "Julian Day:";

    // ── constructors ──────────────────────────────────────────────────

    /// Create from a raw day count.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
        }
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self { quantity: days }
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The underlying quantity in days.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    /// The underlying scalar value in days.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Julian centuries elapsed since J2000.0, the argument of the sidereal
    /// time polynomial.
    ///
    /// Evaluated on raw scalars as `(jd - 2451545.0) / 36525` so the result
    /// is bit-identical to the textbook expression.
    #[inline]
    pub fn julian_centuries(&self) -> Centuries {
        Centuries::new((self.value() - Self::J2000.value()) / Self::JULIAN_CENTURY.value())
    }
}

/// Integer Julian Day Number of the civil date, which begins at the noon of
/// that date.
///
/// Fliegel & Van Flandern (1968).  Every division is a floor division; all
/// divisors are positive, so [`i64::div_euclid`] gives exactly that.  The
/// `(14 - month) / 12` term is 1 for January and February and 0 otherwise,
/// moving those months to the end of the previous year so that the leap day
/// falls last.
pub fn julian_day_number(year: i32, month: i32, day: i32) -> i64 {
    let (y, m, d) = (i64::from(year), i64::from(month), i64::from(day));
    let a = (14 - m).div_euclid(12);

    d - 32_075 + (1_461 * (y + 4_800 - a)).div_euclid(4) + (367 * (m - 2 + a * 12)).div_euclid(12)
        - (3 * (y + 4_900 - a).div_euclid(100)).div_euclid(4)
}

/// Fractional Julian Date of a civil instant.
///
/// `second` may carry a fractional part.  No range checks are performed.
pub fn compute_julian_date(
    year: i32,
    month: i32,
    day: i32,
    hour: i32,
    minute: i32,
    second: f64,
) -> JulianDate {
    let jd_midnight = julian_day_number(year, month, day) as f64 - 0.5;

    let clock_seconds = 60 * (i64::from(minute) + 60 * i64::from(hour));
    let day_fraction = (second + clock_seconds as f64) / SECONDS_PER_DAY;

    let jd = JulianDate::new(jd_midnight + day_fraction);
    tracing::trace!(year, month, day, hour, minute, second, jd = jd.value(), "julian date");
    jd
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait implementations
// ═══════════════════════════════════════════════════════════════════════════

impl std::fmt::Display for JulianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", Self::LABEL, self.quantity)
    }
}

#[cfg(feature = "serde")]
impl Serialize for JulianDate {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for JulianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

impl Add<Days> for JulianDate {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl AddAssign<Days> for JulianDate {
    #[inline]
    fn add_assign(&mut self, rhs: Days) {
        self.quantity += rhs;
    }
}

impl Sub<Days> for JulianDate {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity - rhs)
    }
}

impl SubAssign<Days> for JulianDate {
    #[inline]
    fn sub_assign(&mut self, rhs: Days) {
        self.quantity -= rhs;
    }
}

impl Sub for JulianDate {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}

impl From<Days> for JulianDate {
    #[inline]
    fn from(days: Days) -> Self {
        Self::from_days(days)
    }
}

impl From<JulianDate> for Days {
    #[inline]
    fn from(jd: JulianDate) -> Self {
        jd.quantity
    }
}

impl From<JulianDate> for Centuries {
    fn from(jd: JulianDate) -> Self {
        jd.julian_centuries()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
