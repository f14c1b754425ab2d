use eci_ecef::{
    compute_gmst_angle, compute_julian_date, eci_to_ecef, rotate_about_z, rotate_eci_to_ecef,
    CivilInstant, GmstAngle, JulianDate, Vector3,
};
use proptest::prelude::*;
use qtty::Radians;
use std::f64::consts::TAU;

fn civil() -> impl Strategy<Value = CivilInstant> {
    (1800i32..2200, 1i32..=12, 1i32..=28, 0i32..24, 0i32..60, 0.0f64..60.0)
        .prop_map(|(y, mo, d, h, mi, s)| CivilInstant::new(y, mo, d, h, mi, s))
}

fn km() -> impl Strategy<Value = f64> {
    -50_000.0f64..50_000.0
}

fn vector() -> impl Strategy<Value = Vector3> {
    (km(), km(), km()).prop_map(|(x, y, z)| Vector3::new(x, y, z))
}

proptest! {
    #[test]
    fn pipeline_is_deterministic(instant in civil(), eci in vector()) {
        let a = eci_to_ecef(&instant, eci);
        let b = eci_to_ecef(&instant, eci);
        prop_assert_eq!(a.x.to_bits(), b.x.to_bits());
        prop_assert_eq!(a.y.to_bits(), b.y.to_bits());
        prop_assert_eq!(a.z.to_bits(), b.z.to_bits());
    }

    #[test]
    fn gmst_stays_in_half_open_turn(jd in 2_300_000.0f64..2_600_000.0) {
        let g = compute_gmst_angle(JulianDate::new(jd)).value();
        prop_assert!((0.0..TAU).contains(&g), "gmst = {}", g);
    }

    #[test]
    fn gmst_in_range_for_civil_instants(instant in civil()) {
        let g = compute_gmst_angle(instant.julian_date()).value();
        prop_assert!((0.0..TAU).contains(&g), "gmst = {} at {}", g, instant);
    }

    #[test]
    fn rotation_preserves_z_and_xy_norm(eci in vector(), angle in 0.0f64..TAU) {
        let ecef = rotate_eci_to_ecef(eci, GmstAngle::from_radians(Radians::new(angle)));
        prop_assert_eq!(ecef.z, eci.z);
        let before = eci.x * eci.x + eci.y * eci.y;
        let after = ecef.x * ecef.x + ecef.y * ecef.y;
        prop_assert!((before - after).abs() <= 1e-9 * before.max(1.0));
    }

    #[test]
    fn full_turn_is_periodic(v in vector(), angle in -10.0f64..10.0) {
        let a = rotate_about_z(v, Radians::new(angle));
        let b = rotate_about_z(v, Radians::new(angle + TAU));
        prop_assert!((a.x - b.x).abs() < 1e-8);
        prop_assert!((a.y - b.y).abs() < 1e-8);
        prop_assert_eq!(a.z, b.z);
    }

    #[test]
    fn later_times_have_later_julian_dates(instant in civil(), extra in 1i32..3_600) {
        let a = instant.julian_date();
        let b = compute_julian_date(
            instant.year,
            instant.month,
            instant.day,
            instant.hour,
            instant.minute,
            instant.second + f64::from(extra),
        );
        prop_assert!(b > a);
    }
}
