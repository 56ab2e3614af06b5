use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::risk::{
    assess_launch, assess_orbit, parse_launch_time, LaunchRiskQuery, LaunchSite, OrbitRiskQuery,
    RiskReport,
};
use crate::web::api::error::{ApiError, ApiResult, ErrorResponse};
use crate::web::api::params::QueryParams;
use crate::web::config::RiskConfig;
use crate::web::server::AppState;

pub fn orbit_query_from(params: &QueryParams, defaults: &RiskConfig) -> ApiResult<OrbitRiskQuery> {
    Ok(OrbitRiskQuery {
        height_km: params.required_f64("height")?,
        effective_area_m2: params.required_f64("A_effective")?,
        mission_years: params.required_f64("T_years")?,
        full_cost: params.required_f64("C_full")?,
        lost_revenue: params.required_f64("D_lost")?,
        relative_velocity_km_s: params
            .optional_f64("V_rel")?
            .unwrap_or(defaults.default_relative_velocity_km_s),
    })
}

pub fn launch_query_from(params: &QueryParams, defaults: &RiskConfig) -> ApiResult<LaunchRiskQuery> {
    let site = LaunchSite {
        lat_deg: params.required_f64("lat")?,
        lon_deg: params.required_f64("lon")?,
    };
    let launch_time = parse_launch_time(params.required_str("date")?)?;

    Ok(LaunchRiskQuery {
        site,
        launch_time,
        ascent_altitude_km: params.required_f64("H_ascent")?,
        ascent_duration_seconds: params.required_f64("T_seconds")?,
        rocket_area_m2: params.required_f64("A_rocket")?,
        total_loss_cost: params.required_f64("C_total_loss")?,
        corridor_radius_m: params
            .optional_f64("launch_radius_meters")?
            .unwrap_or(defaults.default_corridor_radius_m),
        relative_velocity_km_s: params
            .optional_f64("V_rel")?
            .unwrap_or(defaults.default_relative_velocity_km_s),
    })
}

#[utoipa::path(
    get,
    path = "/api/orbit_risk",
    tag = "risk",
    params(
        ("height" = f64, Query, description = "Operational altitude (km)"),
        ("A_effective" = f64, Query, description = "Effective cross-section (m²)"),
        ("T_years" = f64, Query, description = "Mission duration (years)"),
        ("C_full" = f64, Query, description = "Satellite cost"),
        ("D_lost" = f64, Query, description = "Lost revenue"),
        ("V_rel" = Option<f64>, Query, description = "Relative velocity (km/s), default 12.5")
    ),
    responses(
        (status = 200, description = "On-orbit risk report", body = RiskReport),
        (status = 400, description = "Missing or malformed parameter", body = ErrorResponse),
        (status = 422, description = "Degenerate layer geometry", body = ErrorResponse)
    )
)]
pub async fn orbit_risk(
    State(state): State<AppState>,
    Query(raw): Query<HashMap<String, String>>,
) -> ApiResult<Json<RiskReport>> {
    let query = orbit_query_from(&QueryParams::new(&raw), &state.config.risk)?;

    let records = state.fetcher.fetch_catalog().await.into_records();
    let assessment = tokio::task::spawn_blocking(move || assess_orbit(&records, &query))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;

    Ok(Json(assessment.report))
}

#[utoipa::path(
    get,
    path = "/api/takeoff_risk",
    tag = "risk",
    params(
        ("lat" = f64, Query, description = "Launch site latitude (degrees)"),
        ("lon" = f64, Query, description = "Launch site longitude (degrees)"),
        ("date" = String, Query, description = "Launch time, YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS (UTC)"),
        ("H_ascent" = f64, Query, description = "Ascent altitude (km)"),
        ("T_seconds" = f64, Query, description = "Ascent duration (s)"),
        ("A_rocket" = f64, Query, description = "Rocket cross-section (m²)"),
        ("C_total_loss" = f64, Query, description = "Cost of losing the vehicle and payload"),
        ("launch_radius_meters" = Option<f64>, Query, description = "Corridor radius (m), default 50000"),
        ("V_rel" = Option<f64>, Query, description = "Relative velocity (km/s), default 12.5")
    ),
    responses(
        (status = 200, description = "Launch risk report", body = RiskReport),
        (status = 400, description = "Missing or malformed parameter", body = ErrorResponse),
        (status = 422, description = "Degenerate corridor geometry", body = ErrorResponse)
    )
)]
pub async fn takeoff_risk(
    State(state): State<AppState>,
    Query(raw): Query<HashMap<String, String>>,
) -> ApiResult<Json<RiskReport>> {
    let query = launch_query_from(&QueryParams::new(&raw), &state.config.risk)?;
    let time_step = state.config.risk.time_step_seconds;

    let records = state.fetcher.fetch_catalog().await.into_records();
    let propagator = state.propagator.clone();
    let assessment = tokio::task::spawn_blocking(move || {
        assess_launch(&records, &*propagator, &query, time_step)
    })
    .await
    .map_err(|e| ApiError::Internal(e.to_string()))??;

    Ok(Json(assessment.report))
}
