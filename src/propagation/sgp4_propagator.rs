use chrono::{DateTime, Utc};
use sgp4::{Constants, Elements};

use crate::catalog::CatalogRecord;
use crate::constants::{WGS84_A_KM, WGS84_F};
use crate::propagation::error::PropagationError;
use crate::propagation::{GeodeticPosition, Propagate};

const LATITUDE_ITERATIONS: usize = 6;

/// SGP4/SDP4 propagation to the WGS-84 subpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sgp4Propagator;

impl Sgp4Propagator {
    pub fn new() -> Self {
        Self
    }
}

/// Mean elements and SGP4 constants for one catalog object.
#[derive(Debug, Clone)]
pub struct PreparedOrbit {
    id: u32,
    elements: Elements,
    constants: Constants,
}

impl Propagate for Sgp4Propagator {
    type Prepared = PreparedOrbit;

    fn prepare(&self, record: &CatalogRecord) -> Result<PreparedOrbit, PropagationError> {
        let invalid = |message: String| PropagationError::InvalidElements {
            id: record.id,
            message,
        };

        let elements = Elements::from_tle(
            Some(record.name.clone()),
            record.element_line_1.as_bytes(),
            record.element_line_2.as_bytes(),
        )
        .map_err(|e| invalid(e.to_string()))?;
        let constants = Constants::from_elements(&elements).map_err(|e| invalid(e.to_string()))?;

        Ok(PreparedOrbit {
            id: record.id,
            elements,
            constants,
        })
    }

    fn propagate_prepared(
        &self,
        orbit: &PreparedOrbit,
        timestamp: DateTime<Utc>,
    ) -> Result<GeodeticPosition, PropagationError> {
        let failed = |message: String| PropagationError::Propagation {
            id: orbit.id,
            message,
        };

        let minutes = orbit
            .elements
            .datetime_to_minutes_since_epoch(&timestamp.naive_utc())
            .map_err(|e| failed(e.to_string()))?;
        let prediction = orbit
            .constants
            .propagate(minutes)
            .map_err(|e| failed(e.to_string()))?;

        let sidereal = sgp4::iau_epoch_to_sidereal_time(sgp4::julian_years_since_j2000(
            &timestamp.naive_utc(),
        ));
        let ecef = teme_to_ecef_position(prediction.position, sidereal);

        Ok(ecef_to_geodetic(ecef))
    }
}

pub fn teme_to_ecef_position(pos_teme: [f64; 3], gmst: f64) -> [f64; 3] {
    let cos_gmst = gmst.cos();
    let sin_gmst = gmst.sin();
    [
        pos_teme[0] * cos_gmst + pos_teme[1] * sin_gmst,
        -pos_teme[0] * sin_gmst + pos_teme[1] * cos_gmst,
        pos_teme[2],
    ]
}

/// ECEF (km) to WGS-84 geodetic coordinates by fixed-point iteration on latitude.
pub fn ecef_to_geodetic(ecef: [f64; 3]) -> GeodeticPosition {
    let [x, y, z] = ecef;
    let e2 = WGS84_F * (2.0 - WGS84_F);
    let p = x.hypot(y);

    let mut lat = z.atan2(p * (1.0 - e2));
    for _ in 0..LATITUDE_ITERATIONS {
        let sin_lat = lat.sin();
        let n = WGS84_A_KM / (1.0 - e2 * sin_lat * sin_lat).sqrt();
        lat = (z + e2 * n * sin_lat).atan2(p);
    }

    let sin_lat = lat.sin();
    let alt_km =
        p * lat.cos() + z * sin_lat - WGS84_A_KM * (1.0 - e2 * sin_lat * sin_lat).sqrt();

    GeodeticPosition {
        lat_deg: lat.to_degrees(),
        lon_deg: y.atan2(x).to_degrees(),
        alt_km,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::iss_record;
    use approx::assert_abs_diff_eq;
    use chrono::{Duration, TimeZone};

    fn geodetic_to_ecef(lat_deg: f64, lon_deg: f64, alt_km: f64) -> [f64; 3] {
        let e2 = WGS84_F * (2.0 - WGS84_F);
        let (sin_lat, cos_lat) = lat_deg.to_radians().sin_cos();
        let (sin_lon, cos_lon) = lon_deg.to_radians().sin_cos();
        let n = WGS84_A_KM / (1.0 - e2 * sin_lat * sin_lat).sqrt();
        [
            (n + alt_km) * cos_lat * cos_lon,
            (n + alt_km) * cos_lat * sin_lon,
            (n * (1.0 - e2) + alt_km) * sin_lat,
        ]
    }

    #[test]
    fn geodetic_round_trip() {
        for &(lat, lon, alt) in &[
            (0.0, 0.0, 0.0),
            (45.96, 63.30, 200.0),
            (-33.9, -70.7, 550.0),
            (89.5, 10.0, 800.0),
            (28.5, -80.6, 35_786.0),
        ] {
            let pos = ecef_to_geodetic(geodetic_to_ecef(lat, lon, alt));
            assert_abs_diff_eq!(pos.lat_deg, lat, epsilon = 1e-7);
            assert_abs_diff_eq!(pos.lon_deg, lon, epsilon = 1e-9);
            assert_abs_diff_eq!(pos.alt_km, alt, epsilon = 1e-6);
        }
    }

    #[test]
    fn teme_rotation_preserves_radius() {
        let teme = [4000.0, -3000.0, 4500.0];
        let ecef = teme_to_ecef_position(teme, 1.234);
        let r = |v: [f64; 3]| (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
        assert_abs_diff_eq!(r(ecef), r(teme), epsilon = 1e-9);
        assert_abs_diff_eq!(ecef[2], teme[2]);
    }

    #[test]
    fn iss_subpoint_near_epoch() {
        let epoch = Utc.with_ymd_and_hms(2020, 7, 12, 21, 16, 1).unwrap();
        let propagator = Sgp4Propagator::new();

        for minutes in [0, 10, 45, 90] {
            let pos = propagator
                .propagate(&iss_record(), epoch + Duration::minutes(minutes))
                .unwrap();
            assert!(pos.lat_deg.abs() <= 52.0, "latitude {}", pos.lat_deg);
            assert!((-180.0..=180.0).contains(&pos.lon_deg));
            assert!(pos.alt_km > 380.0 && pos.alt_km < 470.0, "altitude {}", pos.alt_km);
        }
    }

    #[test]
    fn prepared_orbit_matches_direct_propagation() {
        let epoch = Utc.with_ymd_and_hms(2020, 7, 12, 21, 16, 1).unwrap();
        let propagator = Sgp4Propagator::new();
        let orbit = propagator.prepare(&iss_record()).unwrap();

        for minutes in [0, 30, 720, 1440] {
            let at = epoch + Duration::minutes(minutes);
            assert_eq!(
                propagator.propagate_prepared(&orbit, at).unwrap(),
                propagator.propagate(&iss_record(), at).unwrap()
            );
        }
    }

    #[test]
    fn malformed_elements_fail_at_preparation() {
        let mut record = iss_record();
        record.element_line_2.replace_range(8..16, "  abc.de");

        assert!(matches!(
            Sgp4Propagator::new().prepare(&record),
            Err(PropagationError::InvalidElements { id: 25544, .. })
        ));
    }

    #[test]
    fn malformed_elements_are_reported_with_id() {
        let mut record = iss_record();
        record.element_line_2.replace_range(8..16, "  abc.de");

        let err = Sgp4Propagator::new()
            .propagate(&record, Utc::now())
            .unwrap_err();
        assert!(matches!(err, PropagationError::InvalidElements { id: 25544, .. }));
        assert_eq!(err.object_id(), 25544);
    }
}
