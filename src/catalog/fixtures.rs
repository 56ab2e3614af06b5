//! Element sets shared by unit tests.

use std::f64::consts::TAU;

use crate::catalog::CatalogRecord;
use crate::constants::{EARTH_RADIUS_KM, MU_EARTH_KM3_S2, SECONDS_PER_DAY};

pub const ISS_LINE1: &str =
    "1 25544U 98067A   20194.88612269 -.00002218  00000-0 -31515-4 0  9992";
pub const ISS_LINE2: &str =
    "2 25544  51.6461 221.2784 0001413  89.1723 280.4612 15.49507896236008";

pub fn iss_record() -> CatalogRecord {
    CatalogRecord {
        id: 25544,
        name: "ISS (ZARYA)".to_string(),
        element_line_1: ISS_LINE1.to_string(),
        element_line_2: ISS_LINE2.to_string(),
    }
}

/// A record whose mean motion places it on a circular orbit at `altitude_km`.
///
/// Only the catalog number, inclination and mean motion differ from the ISS
/// set, so checksums are not meaningful.
pub fn record_at(id: u32, altitude_km: f64, inclination_deg: f64) -> CatalogRecord {
    let a_km = EARTH_RADIUS_KM + altitude_km;
    let n_rad_s = (MU_EARTH_KM3_S2 / (a_km * a_km * a_km)).sqrt();
    let rev_per_day = n_rad_s * SECONDS_PER_DAY / TAU;

    CatalogRecord {
        id,
        name: format!("OBJECT {}", id),
        element_line_1: format!("1 {:05}{}", id, &ISS_LINE1[7..]),
        element_line_2: format!(
            "2 {:05} {:>8.4}{}{:>11.8}{}",
            id,
            inclination_deg,
            &ISS_LINE2[16..52],
            rev_per_day,
            &ISS_LINE2[63..]
        ),
    }
}
