use std::f64::consts::PI;

use crate::constants::EARTH_RADIUS_KM;

const EARTH_RADIUS_M: f64 = EARTH_RADIUS_KM * 1000.0;

/// Great-circle surface distance in meters on a spherical Earth.
///
/// Uses the atan2 form of the central angle, which stays accurate for
/// coincident and antipodal points where the haversine loses digits.
pub fn quick_distance_m(lat1_deg: f64, lon1_deg: f64, lat2_deg: f64, lon2_deg: f64) -> f64 {
    let (sin_phi1, cos_phi1) = lat1_deg.to_radians().sin_cos();
    let (sin_phi2, cos_phi2) = lat2_deg.to_radians().sin_cos();
    let (sin_dl, cos_dl) = (lon2_deg - lon1_deg).to_radians().sin_cos();

    let y = (cos_phi2 * sin_dl).hypot(cos_phi1 * sin_phi2 - sin_phi1 * cos_phi2 * cos_dl);
    let x = sin_phi1 * sin_phi2 + cos_phi1 * cos_phi2 * cos_dl;
    EARTH_RADIUS_M * y.atan2(x)
}

/// Volume of the spherical shell between two altitudes above the mean radius.
///
/// Inverted bounds give a negative volume; callers reject non-positive results.
pub fn shell_volume_km3(lower_altitude_km: f64, upper_altitude_km: f64) -> f64 {
    let r_upper = EARTH_RADIUS_KM + upper_altitude_km;
    let r_lower = EARTH_RADIUS_KM + lower_altitude_km;
    4.0 / 3.0 * PI * (r_upper.powi(3) - r_lower.powi(3))
}

pub fn cylinder_volume_km3(radius_km: f64, height_km: f64) -> f64 {
    PI * radius_km * radius_km * height_km
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn same_point_is_zero_distance() {
        assert_eq!(quick_distance_m(45.96, 63.30, 45.96, 63.30), 0.0);
    }

    #[test]
    fn one_degree_along_equator() {
        let d = quick_distance_m(0.0, 0.0, 0.0, 1.0);
        assert_abs_diff_eq!(d, 111_194.93, epsilon = 0.1);
    }

    #[test]
    fn antipodes_are_half_circumference() {
        let d = quick_distance_m(10.0, 20.0, -10.0, -160.0);
        assert_relative_eq!(d, PI * EARTH_RADIUS_M, max_relative = 1e-9);
    }

    #[test]
    fn near_antipodes_stay_below_half_circumference() {
        let exact = quick_distance_m(0.0, 0.0, 0.0, 180.0);
        assert_relative_eq!(exact, PI * EARTH_RADIUS_M, max_relative = 1e-12);

        // one meter short of the antipode along the equator
        let short = 180.0 - (1.0 / EARTH_RADIUS_M).to_degrees();
        let d = quick_distance_m(0.0, 0.0, 0.0, short);
        assert_abs_diff_eq!(d, PI * EARTH_RADIUS_M - 1.0, epsilon = 1e-6);
        assert!(d < exact);
    }

    #[test]
    fn distance_is_symmetric_across_dateline() {
        let east = quick_distance_m(0.0, 179.5, 0.0, -179.5);
        let west = quick_distance_m(0.0, -179.5, 0.0, 179.5);
        assert_abs_diff_eq!(east, west, epsilon = 1e-6);
        assert_abs_diff_eq!(east, 111_194.93, epsilon = 0.1);
    }

    #[test]
    fn shell_volume() {
        let v = shell_volume_km3(500.0, 600.0);
        let expected = 4.0 / 3.0 * PI * (6971.0_f64.powi(3) - 6871.0_f64.powi(3));
        assert_relative_eq!(v, expected);
        assert!(v > 0.0);
    }

    #[test]
    fn zero_thickness_shell_has_no_volume() {
        assert_eq!(shell_volume_km3(550.0, 550.0), 0.0);
        assert!(shell_volume_km3(600.0, 500.0) < 0.0);
    }

    #[test]
    fn cylinder_volume() {
        assert_relative_eq!(cylinder_volume_km3(50.0, 200.0), PI * 2500.0 * 200.0);
        assert_eq!(cylinder_volume_km3(0.0, 200.0), 0.0);
    }
}
