// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! ECI → ECEF conversion
//!
//! Maps a position vector in the Earth-Centered Inertial frame onto the
//! Earth-Centered Earth-Fixed frame at a civil instant, using a pure
//! Greenwich Mean Sidereal Time rotation about the Z axis.
//!
//! # Pipeline
//!
//! | Stage | Function | Output |
//! |-------|----------|--------|
//! | Julian Date | [`compute_julian_date`] | [`JulianDate`] |
//! | Sidereal time | [`compute_gmst_angle`] | [`GmstAngle`] in `[0, 2π)` |
//! | Frame rotation | [`rotate_eci_to_ecef`] | [`Vector3`] (km) |
//!
//! [`eci_to_ecef`] runs the three stages in order; [`convert`] does the same
//! and also returns the intermediate values.
//!
//! ```rust
//! use eci_ecef::{eci_to_ecef, CivilInstant, Vector3};
//!
//! let instant = CivilInstant::new(2000, 1, 1, 12, 0, 0.0);
//! let ecef = eci_to_ecef(&instant, Vector3::new(7_000.0, 0.0, 0.0));
//! assert_eq!(ecef.z, 0.0);
//! ```
//!
//! # Model limits
//!
//! No precession, nutation or polar motion, and no leap-second handling.
//! The civil instant is taken to already be on the time scale the GMST
//! polynomial expects (UT1 in the strict sense).

mod civil;
mod error;
mod frame;
mod julian;
mod sidereal;

#[cfg(feature = "cli")]
pub mod cli;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use civil::CivilInstant;
pub use error::{Error, Result};
pub use frame::{rotate_about_z, rotate_ecef_to_eci, rotate_eci_to_ecef, Vector3};
pub use julian::{compute_julian_date, julian_day_number, JulianDate, SECONDS_PER_DAY};
pub use sidereal::{
    compute_gmst_angle, gmst_seconds, GmstAngle, EARTH_ROTATION_RATE, GMST_C0, GMST_C1, GMST_C2,
    GMST_C3,
};

/// Intermediate and final values of one conversion.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Conversion {
    pub julian_date: JulianDate,
    pub gmst: GmstAngle,
    pub ecef: Vector3,
}

/// Run the full pipeline and keep every stage's output.
pub fn convert(instant: &CivilInstant, eci: Vector3) -> Conversion {
    let julian_date = instant.julian_date();
    let gmst = compute_gmst_angle(julian_date);
    let ecef = rotate_eci_to_ecef(eci, gmst);

    tracing::debug!(
        %instant,
        julian_date = julian_date.value(),
        gmst_rad = gmst.value(),
        "rotated ECI vector into ECEF"
    );

    Conversion {
        julian_date,
        gmst,
        ecef,
    }
}

/// ECEF position of `eci` at `instant`.
#[inline]
pub fn eci_to_ecef(instant: &CivilInstant, eci: Vector3) -> Vector3 {
    convert(instant, eci).ecef
}
