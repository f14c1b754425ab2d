// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Greenwich Mean Sidereal Time.
//!
//! GMST is evaluated with the IAU 1982 polynomial in seconds of time,
//!
//! ```text
//! GMST(s) = 67310.54841 + (876600·3600 + 8640184.812866)·T
//!         + 0.093104·T² − 6.2e-6·T³
//! ```
//!
//! where `T` is Julian centuries since J2000.0.  The polynomial is reduced
//! modulo one day of seconds and converted to an angle with the mean Earth
//! rotation rate [`EARTH_ROTATION_RATE`].
//!
//! That rate is an independent physical constant and is **not** `2π/86400`;
//! the two differ at the 1e-10 level and results depend on using the rate.
//!
//! ## References
//! * Aoki et al. (1982), A&A 105, 359
//! * Vallado, *Fundamentals of Astrodynamics and Applications*, eq. 3-47

use qtty::*;
use std::f64::consts::TAU;

use crate::julian::{JulianDate, SECONDS_PER_DAY};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Mean angular rotation rate of the Earth, rad/s.
pub const EARTH_ROTATION_RATE: f64 = 7.292115 * 1e-5;

/// Constant term of the GMST polynomial, s.
pub const GMST_C0: f64 = 67_310.548_41;

/// Linear term of the GMST polynomial, s per Julian century.
///
/// `876600 h` of whole rotations plus the sidereal excess.
pub const GMST_C1: f64 = 876_600.0 * 3_600.0 + 8_640_184.812_866;

/// Quadratic term of the GMST polynomial, s per century².
pub const GMST_C2: f64 = 0.093_104;

/// Cubic term of the GMST polynomial, s per century³.
pub const GMST_C3: f64 = -6.2 * 1e-6;

/// Unreduced GMST polynomial, in seconds of time.
#[inline]
pub fn gmst_seconds(t: Centuries) -> Seconds {
    let t = t.value();
    Seconds::new(GMST_C0 + GMST_C1 * t + GMST_C2 * t.powf(2.0) + GMST_C3 * t.powf(3.0))
}

/// Greenwich Mean Sidereal Time angle, always within `[0, 2π)`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct GmstAngle(Radians);

impl GmstAngle {
    /// Build from an arbitrary angle, wrapping it into `[0, 2π)`.
    pub fn from_radians(angle: Radians) -> Self {
        Self(Radians::new(normalize(angle.value())))
    }

    #[inline]
    pub const fn radians(&self) -> Radians {
        self.0
    }

    #[inline]
    pub const fn value(&self) -> f64 {
        self.0.value()
    }

    #[inline]
    pub fn degrees(&self) -> f64 {
        self.value().to_degrees()
    }
}

/// `((angle + 2π) mod 2π)`.
///
/// A plain `fmod` leaves a negative remainder whenever `angle < -2π`, which
/// happens because one day of seconds times [`EARTH_ROTATION_RATE`] exceeds a
/// full turn.  `rem_euclid` equals `fmod` for non-negative operands and lifts
/// the rest into range; a remainder that rounds up to `2π` is folded to zero.
#[inline]
fn normalize(angle: f64) -> f64 {
    let wrapped = (angle + TAU).rem_euclid(TAU);
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// GMST angle at a fractional Julian Date.
pub fn compute_gmst_angle(julian_date: JulianDate) -> GmstAngle {
    let t = julian_date.julian_centuries();
    let gmst_sec = gmst_seconds(t).value();

    // Seconds into the current sidereal day, then radians.
    let add_sec = gmst_sec % SECONDS_PER_DAY;
    let add_rad = add_sec * EARTH_ROTATION_RATE;

    let gmst = GmstAngle(Radians::new(normalize(add_rad)));
    tracing::trace!(
        julian_date = julian_date.value(),
        t = t.value(),
        gmst_sec,
        gmst_rad = gmst.value(),
        "gmst"
    );
    gmst
}

impl std::fmt::Display for GmstAngle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GMST {}", self.0)
    }
}

impl From<GmstAngle> for Radians {
    #[inline]
    fn from(gmst: GmstAngle) -> Self {
        gmst.0
    }
}

#[cfg(feature = "serde")]
impl Serialize for GmstAngle {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for GmstAngle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::from_radians(Radians::new(v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::compute_julian_date;

    #[test]
    fn rotation_rate_is_not_derived_from_day_length() {
        assert_eq!(EARTH_ROTATION_RATE, 7.292115e-5);
        assert_ne!(EARTH_ROTATION_RATE, TAU / SECONDS_PER_DAY);
        assert!(SECONDS_PER_DAY * EARTH_ROTATION_RATE > TAU);
    }

    #[test]
    fn polynomial_at_j2000_is_constant_term() {
        assert_eq!(gmst_seconds(Centuries::new(0.0)), Seconds::new(GMST_C0));
        assert_eq!(GMST_C1, 3_164_400_184.812_866);
    }

    #[test]
    fn gmst_at_j2000() {
        let gmst = compute_gmst_angle(JulianDate::J2000);
        let expected = (GMST_C0 * EARTH_ROTATION_RATE + TAU) % TAU;
        assert_eq!(gmst.value(), expected);
        assert_eq!(gmst.value(), 4.908_362_597_187_871);
        assert!((gmst.degrees() - 281.228).abs() < 1e-3);
    }

    #[test]
    fn gmst_matches_reference_values() {
        let cases = [
            ((2000, 1, 1, 0, 0, 0.0), 1.749_543_972_454_585_4),
            ((2024, 3, 15, 6, 30, 12.5), 4.741_211_380_182_907),
            ((1999, 12, 31, 0, 0, 0.0), 1.715_092_030_167_603_8),
            ((1970, 1, 1, 0, 0, 0.0), 1.736_924_445_393_310_8),
            ((1900, 1, 1, 12, 0, 0.0), 4.894_940_456_440_165),
        ];
        for ((y, mo, d, h, mi, s), expected) in cases {
            let gmst = compute_gmst_angle(compute_julian_date(y, mo, d, h, mi, s));
            assert!(
                (gmst.value() - expected).abs() < 1e-12,
                "{y}-{mo}-{d} {h}:{mi}:{s}: {} vs {expected}",
                gmst.value()
            );
        }
    }

    #[test]
    fn negative_remainder_window_is_lifted_into_range() {
        // Here the polynomial reduces to about -86 350 s, more than a full
        // turn below zero once scaled by the rotation rate.
        let jd = compute_julian_date(1999, 12, 1, 19, 20, 0.0);
        let sec = gmst_seconds(jd.julian_centuries()).value() % SECONDS_PER_DAY;
        assert!(sec * EARTH_ROTATION_RATE < -TAU);

        let gmst = compute_gmst_angle(jd);
        assert!((0.0..TAU).contains(&gmst.value()));
        assert!((gmst.value() - 6.269_601_077_320_277).abs() < 1e-12);
    }

    #[test]
    fn from_radians_wraps() {
        assert_eq!(GmstAngle::from_radians(Radians::new(0.0)).value(), 0.0);
        assert_eq!(GmstAngle::from_radians(Radians::new(TAU)).value(), 0.0);
        let g = GmstAngle::from_radians(Radians::new(-1.0));
        assert!((g.value() - (TAU - 1.0)).abs() < 1e-15);
        let g = GmstAngle::from_radians(Radians::new(3.0 * TAU + 0.25));
        assert!((g.value() - 0.25).abs() < 1e-12);
        // Tiny negative input whose lift rounds to exactly 2π.
        let g = GmstAngle::from_radians(Radians::new(-1e-18));
        assert!((0.0..TAU).contains(&g.value()));
    }

    #[test]
    fn gmst_advances_about_one_degree_per_solar_day() {
        let g1 = compute_gmst_angle(JulianDate::new(2_451_545.0));
        let g2 = compute_gmst_angle(JulianDate::new(2_451_546.0));
        let advance = (g2.value() - g1.value()).rem_euclid(TAU).to_degrees();
        assert!((advance - 0.9856).abs() < 0.01, "advance = {advance}°");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialization_normalizes() {
        let g: GmstAngle = serde_json::from_str("-1.0").unwrap();
        assert!((g.value() - (TAU - 1.0)).abs() < 1e-15);
        let json = serde_json::to_string(&g).unwrap();
        let back: GmstAngle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }
}
