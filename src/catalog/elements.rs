use std::f64::consts::TAU;

use crate::catalog::error::ElementsError;
use crate::catalog::types::CatalogRecord;
use crate::constants::{EARTH_RADIUS_KM, MU_EARTH_KM3_S2, SECONDS_PER_DAY};

// Column ranges on element line 2 (0-based, end exclusive)
const INCLINATION_COLUMNS: (usize, usize) = (8, 16);
const MEAN_MOTION_COLUMNS: (usize, usize) = (52, 63);

/// Time-independent orbit summary read straight from the element lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanOrbit {
    pub inclination_deg: f64,
    pub mean_motion_rev_day: f64,
    /// Altitude of a circular orbit with the same mean motion.
    pub altitude_km: f64,
}

impl MeanOrbit {
    pub fn from_record(record: &CatalogRecord) -> Result<Self, ElementsError> {
        let line2 = record.element_line_2.as_str();
        let inclination_deg = read_field(line2, INCLINATION_COLUMNS, "inclination")?;
        let mean_motion_rev_day = read_field(line2, MEAN_MOTION_COLUMNS, "mean_motion")?;

        if !(0.0..=180.0).contains(&inclination_deg) {
            return Err(ElementsError::Inclination(inclination_deg));
        }

        Ok(Self {
            inclination_deg,
            mean_motion_rev_day,
            altitude_km: altitude_from_mean_motion(mean_motion_rev_day)?,
        })
    }
}

/// Kepler's third law: `a = (mu / n^2)^(1/3)`, altitude above the mean radius.
pub fn altitude_from_mean_motion(rev_per_day: f64) -> Result<f64, ElementsError> {
    if !(rev_per_day.is_finite() && rev_per_day > 0.0) {
        return Err(ElementsError::MeanMotion(rev_per_day));
    }
    let n_rad_s = rev_per_day * TAU / SECONDS_PER_DAY;
    let a_km = (MU_EARTH_KM3_S2 / (n_rad_s * n_rad_s)).cbrt();
    Ok(a_km - EARTH_RADIUS_KM)
}

fn read_field(
    line: &str,
    (start, end): (usize, usize),
    field: &'static str,
) -> Result<f64, ElementsError> {
    let raw = line.get(start..end).ok_or(ElementsError::Truncated(field))?;
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ElementsError::NotANumber {
            field,
            value: raw.to_string(),
        })
}
