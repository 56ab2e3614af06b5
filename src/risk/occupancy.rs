use serde::Serialize;

use crate::catalog::{CatalogRecord, MeanOrbit};

/// Altitude/inclination window used to select a layer of the catalog.
///
/// Both ranges are closed: an object exactly on a bound is inside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OccupancyWindow {
    pub altitude_min_km: f64,
    pub altitude_max_km: f64,
    pub inclination_min_deg: f64,
    pub inclination_max_deg: f64,
}

impl OccupancyWindow {
    pub fn new(
        altitude_min_km: f64,
        altitude_max_km: f64,
        inclination_min_deg: f64,
        inclination_max_deg: f64,
    ) -> Self {
        Self {
            altitude_min_km,
            altitude_max_km,
            inclination_min_deg,
            inclination_max_deg,
        }
    }

    /// Altitude band at every inclination.
    pub fn altitude_band(altitude_min_km: f64, altitude_max_km: f64) -> Self {
        Self::new(altitude_min_km, altitude_max_km, 0.0, 180.0)
    }

    pub fn is_valid(&self) -> bool {
        let finite = [
            self.altitude_min_km,
            self.altitude_max_km,
            self.inclination_min_deg,
            self.inclination_max_deg,
        ]
        .iter()
        .all(|v| v.is_finite());

        finite
            && self.altitude_min_km < self.altitude_max_km
            && 0.0 <= self.inclination_min_deg
            && self.inclination_min_deg < self.inclination_max_deg
            && self.inclination_max_deg <= 180.0
    }

    pub fn contains(&self, altitude_km: f64, inclination_deg: f64) -> bool {
        self.is_valid()
            && (self.altitude_min_km..=self.altitude_max_km).contains(&altitude_km)
            && (self.inclination_min_deg..=self.inclination_max_deg).contains(&inclination_deg)
    }
}

/// Object count for one altitude band and inclination band.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bucket {
    pub altitude_band_km: [f64; 2],
    pub inclination_band_deg: [f64; 2],
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct OccupancyResult {
    pub buckets: Vec<Bucket>,
    pub objects: Vec<CatalogRecord>,
    /// Records whose elements could not be decoded
    pub skipped: usize,
}

impl OccupancyResult {
    pub fn total_count(&self) -> usize {
        self.buckets.iter().map(|b| b.count).sum()
    }
}

/// Count the catalog objects whose mean orbit falls inside `window`.
///
/// The window is a single bucket. Undecodable records are skipped and only
/// show up in `skipped`.
pub fn compute_occupancy<'a, I>(records: I, window: &OccupancyWindow) -> OccupancyResult
where
    I: IntoIterator<Item = &'a CatalogRecord>,
{
    if !window.is_valid() {
        log::debug!("Occupancy window {:?} is empty", window);
    }

    let mut objects = Vec::new();
    let mut skipped = 0;

    for record in records {
        match MeanOrbit::from_record(record) {
            Ok(orbit) => {
                if window.contains(orbit.altitude_km, orbit.inclination_deg) {
                    objects.push(record.clone());
                }
            }
            Err(e) => {
                log::debug!("Skipping {} ({}): {}", record.name, record.id, e);
                skipped += 1;
            }
        }
    }

    OccupancyResult {
        buckets: vec![Bucket {
            altitude_band_km: [window.altitude_min_km, window.altitude_max_km],
            inclination_band_deg: [window.inclination_min_deg, window.inclination_max_deg],
            count: objects.len(),
        }],
        objects,
        skipped,
    }
}
