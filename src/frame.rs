// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Earth-rotation frame transform between ECI and ECEF.
//!
//! Under the GMST-only model the two frames share the Z axis (the mean
//! rotation pole) and differ by a rotation of the GMST angle about it.
//! Precession, nutation and polar motion are ignored.

use qtty::Radians;

use crate::sidereal::GmstAngle;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cartesian position in kilometers.
///
/// The same type serves for ECI and ECEF vectors; the frame is implied by
/// where the value came from.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Length of the projection onto the equatorial (XY) plane.
    #[inline]
    pub fn xy_norm(&self) -> f64 {
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        [v.x, v.y, v.z]
    }
}

/// Rotate `v` counter-clockwise by `angle` about the Z axis.  Z is untouched.
#[inline]
pub fn rotate_about_z(v: Vector3, angle: Radians) -> Vector3 {
    let (sin, cos) = (angle.value().sin(), angle.value().cos());
    Vector3 {
        x: v.x * cos + v.y * -sin,
        y: v.x * sin + v.y * cos,
        z: v.z,
    }
}

/// Inertial → Earth-fixed: undo the Earth's rotation by GMST.
#[inline]
pub fn rotate_eci_to_ecef(eci: Vector3, gmst: GmstAngle) -> Vector3 {
    rotate_about_z(eci, Radians::new(-gmst.value()))
}

/// Earth-fixed → inertial.
#[inline]
pub fn rotate_ecef_to_eci(ecef: Vector3, gmst: GmstAngle) -> Vector3 {
    rotate_about_z(ecef, gmst.radians())
}
