use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::CatalogRecord;
use crate::constants::SECONDS_PER_YEAR;
use crate::propagation::Propagate;
use crate::risk::corridor::{scan_corridor, CorridorScan, CorridorScanParams, LaunchSite};
use crate::risk::error::RiskError;
use crate::risk::geometry::{cylinder_volume_km3, shell_volume_km3};
use crate::risk::occupancy::{compute_occupancy, OccupancyWindow};
use crate::risk::probability::collision_probability;
use crate::risk::report::RiskReport;

/// Half the thickness of the layer counted around an operational altitude.
pub const LAYER_HALF_THICKNESS_KM: f64 = 50.0;

#[derive(Debug, Clone, PartialEq)]
pub struct OrbitRiskQuery {
    pub height_km: f64,
    pub effective_area_m2: f64,
    pub mission_years: f64,
    pub full_cost: f64,
    pub lost_revenue: f64,
    pub relative_velocity_km_s: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrbitAssessment {
    pub objects_in_layer: usize,
    pub shell_volume_km3: f64,
    pub report: RiskReport,
}

/// Collision risk for a satellite parked at a fixed altitude for the mission.
pub fn assess_orbit(
    records: &[CatalogRecord],
    query: &OrbitRiskQuery,
) -> Result<OrbitAssessment, RiskError> {
    let lower = query.height_km - LAYER_HALF_THICKNESS_KM;
    let upper = query.height_km + LAYER_HALF_THICKNESS_KM;

    let occupancy = compute_occupancy(records, &OccupancyWindow::altitude_band(lower, upper));
    let count = occupancy.total_count();
    let volume = shell_volume_km3(lower, upper);

    let probability = collision_probability(
        count,
        volume,
        query.relative_velocity_km_s,
        query.effective_area_m2,
        query.mission_years * SECONDS_PER_YEAR,
    )?;

    log::info!(
        "Orbit at {} km: {} objects in layer, P = {:e}",
        query.height_km,
        count,
        probability
    );

    Ok(OrbitAssessment {
        objects_in_layer: count,
        shell_volume_km3: volume,
        report: RiskReport::new(probability, query.full_cost + query.lost_revenue),
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRiskQuery {
    pub site: LaunchSite,
    pub launch_time: DateTime<Utc>,
    pub ascent_altitude_km: f64,
    pub ascent_duration_seconds: f64,
    pub rocket_area_m2: f64,
    pub total_loss_cost: f64,
    pub corridor_radius_m: f64,
    pub relative_velocity_km_s: f64,
}

#[derive(Debug, Clone)]
pub struct LaunchAssessment {
    /// Objects below the ascent altitude, the only ones propagated
    pub candidates: usize,
    pub scan: CorridorScan,
    pub corridor_volume_km3: f64,
    pub report: RiskReport,
}

/// Collision risk for a vertical ascent through the corridor above a site.
///
/// The corridor volume is checked before any propagation so a degenerate
/// corridor fails fast.
pub fn assess_launch<P>(
    records: &[CatalogRecord],
    propagator: &P,
    query: &LaunchRiskQuery,
    time_step_seconds: i64,
) -> Result<LaunchAssessment, RiskError>
where
    P: Propagate + ?Sized,
{
    let radius_km = query.corridor_radius_m / 1000.0;
    let volume = cylinder_volume_km3(radius_km, query.ascent_altitude_km);
    if !(query.corridor_radius_m > 0.0 && volume.is_finite() && volume > 0.0) {
        return Err(RiskError::Geometry { volume_km3: volume });
    }

    let occupancy = compute_occupancy(
        records,
        &OccupancyWindow::altitude_band(0.0, query.ascent_altitude_km),
    );

    let params = CorridorScanParams {
        start: query.launch_time,
        duration_seconds: query.ascent_duration_seconds,
        corridor_radius_m: query.corridor_radius_m,
        time_step_seconds,
    };
    let scan = scan_corridor(propagator, &occupancy.objects, query.site, &params)?;
    if !scan.failures.is_empty() {
        let objects: BTreeSet<u32> = scan.failures.iter().map(|f| f.error.object_id()).collect();
        log::warn!(
            "{} propagations failed during corridor scan ({} objects)",
            scan.failures.len(),
            objects.len()
        );
    }

    let count = scan.danger_count();
    let probability = collision_probability(
        count,
        volume,
        query.relative_velocity_km_s,
        query.rocket_area_m2,
        query.ascent_duration_seconds,
    )?;

    log::info!(
        "Launch from ({}, {}) at {}: {} of {} candidates in corridor, P = {:e}",
        query.site.lat_deg,
        query.site.lon_deg,
        query.launch_time,
        count,
        occupancy.objects.len(),
        probability
    );

    Ok(LaunchAssessment {
        candidates: occupancy.objects.len(),
        scan,
        corridor_volume_km3: volume,
        report: RiskReport::new(probability, query.total_loss_cost)
            .with_corridor(count, radius_km),
    })
}
