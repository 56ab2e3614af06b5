use std::collections::BTreeSet;

use chrono::{DateTime, Duration, Utc};
use rayon::prelude::*;
use serde::Serialize;

use crate::catalog::CatalogRecord;
use crate::propagation::{Propagate, PropagationError};
use crate::risk::error::RiskError;
use crate::risk::geometry::quick_distance_m;

pub const DEFAULT_TIME_STEP_SECONDS: i64 = 60;

/// Upper bound on sampled instants in one scan.
pub const MAX_SAMPLES: i64 = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LaunchSite {
    pub lat_deg: f64,
    pub lon_deg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorridorScanParams {
    pub start: DateTime<Utc>,
    pub duration_seconds: f64,
    pub corridor_radius_m: f64,
    pub time_step_seconds: i64,
}

impl CorridorScanParams {
    /// Number of instants `start + k * step` for `k = 0 ..= floor(duration / step)`.
    pub fn sample_count(&self) -> Result<i64, RiskError> {
        if self.time_step_seconds <= 0 {
            return Err(RiskError::invalid(
                "time_step_seconds",
                format!("must be positive, got {}", self.time_step_seconds),
            ));
        }
        if !(self.duration_seconds.is_finite() && self.duration_seconds >= 0.0) {
            return Err(RiskError::invalid(
                "duration_seconds",
                format!("must be a non-negative number, got {}", self.duration_seconds),
            ));
        }

        let intervals = (self.duration_seconds / self.time_step_seconds as f64).floor();
        if intervals >= MAX_SAMPLES as f64 {
            return Err(RiskError::invalid(
                "duration_seconds",
                format!(
                    "{} s at a {} s step needs more than {} samples",
                    self.duration_seconds, self.time_step_seconds, MAX_SAMPLES
                ),
            ));
        }
        Ok(intervals as i64 + 1)
    }

    /// Offset of the last sample, checked against the representable date range.
    pub fn last_offset(&self) -> Result<i64, RiskError> {
        let out_of_range = || {
            RiskError::invalid(
                "duration_seconds",
                format!(
                    "window of {} s from {} ends outside the supported date range",
                    self.duration_seconds, self.start
                ),
            )
        };

        let last = (self.sample_count()? - 1)
            .checked_mul(self.time_step_seconds)
            .ok_or_else(out_of_range)?;
        self.instant(last).ok_or_else(out_of_range)?;
        Ok(last)
    }

    fn instant(&self, offset_seconds: i64) -> Option<DateTime<Utc>> {
        Duration::try_seconds(offset_seconds).and_then(|d| self.start.checked_add_signed(d))
    }
}

/// A propagation that failed for one object at one sample.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleFailure {
    pub offset_seconds: i64,
    pub error: PropagationError,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CorridorScan {
    /// Objects seen inside the corridor at least once
    pub danger_ids: BTreeSet<u32>,
    pub samples: usize,
    /// Object positions evaluated, failed ones included
    pub evaluations: usize,
    pub failures: Vec<SampleFailure>,
}

impl CorridorScan {
    pub fn danger_count(&self) -> usize {
        self.danger_ids.len()
    }

    fn record(mut self, offset_seconds: i64, outcome: Result<Option<u32>, PropagationError>) -> Self {
        self.evaluations += 1;
        match outcome {
            Ok(Some(id)) => {
                self.danger_ids.insert(id);
            }
            Ok(None) => {}
            Err(error) => self.failures.push(SampleFailure {
                offset_seconds,
                error,
            }),
        }
        self
    }

    fn merge(mut self, other: Self) -> Self {
        self.danger_ids.extend(other.danger_ids);
        self.evaluations += other.evaluations;
        self.failures.extend(other.failures);
        self
    }
}

/// Find every object whose subpoint comes within the corridor radius of the
/// launch site at any sampled instant.
///
/// Each object is prepared once, then samples run in parallel. A failed
/// propagation drops that object for that sample only and is reported in
/// `failures`; an object that cannot be prepared fails at every sample.
pub fn scan_corridor<P>(
    propagator: &P,
    objects: &[CatalogRecord],
    site: LaunchSite,
    params: &CorridorScanParams,
) -> Result<CorridorScan, RiskError>
where
    P: Propagate + ?Sized,
{
    let samples = params.sample_count()?;
    params.last_offset()?;
    let step = params.time_step_seconds;
    let radius_m = params.corridor_radius_m;

    let prepared: Vec<(u32, Result<P::Prepared, PropagationError>)> = objects
        .par_iter()
        .map(|record| (record.id, propagator.prepare(record)))
        .collect();
    let prepared = &prepared;

    let mut scan = (0..samples)
        .into_par_iter()
        .filter_map(|k| {
            let offset = k * step;
            params.instant(offset).map(|at| (offset, at))
        })
        .flat_map_iter(|(offset, at)| {
            prepared.iter().map(move |(id, orbit)| {
                let outcome = match orbit {
                    Ok(orbit) => within_corridor(propagator, orbit, *id, site, at, radius_m),
                    Err(e) => Err(e.clone()),
                };
                (offset, outcome)
            })
        })
        .fold(CorridorScan::default, |scan, (offset, outcome)| {
            scan.record(offset, outcome)
        })
        .reduce(CorridorScan::default, CorridorScan::merge);
    scan.samples = samples as usize;

    log::debug!(
        "Corridor scan: {} objects x {} samples, {} inside, {} failed propagations",
        objects.len(),
        scan.samples,
        scan.danger_count(),
        scan.failures.len()
    );

    Ok(scan)
}

/// Propagate one prepared object and test it against the corridor radius.
pub fn within_corridor<P>(
    propagator: &P,
    orbit: &P::Prepared,
    id: u32,
    site: LaunchSite,
    at: DateTime<Utc>,
    radius_m: f64,
) -> Result<Option<u32>, PropagationError>
where
    P: Propagate + ?Sized,
{
    let position = propagator.propagate_prepared(orbit, at)?;
    let distance_m = quick_distance_m(position.lat_deg, position.lon_deg, site.lat_deg, site.lon_deg);
    Ok((distance_m < radius_m).then_some(id))
}
