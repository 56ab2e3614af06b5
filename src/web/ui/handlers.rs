use axum::{extract::State, response::IntoResponse};

use crate::web::server::AppState;

use super::templates::IndexTemplate;

pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    IndexTemplate {
        version: env!("CARGO_PKG_VERSION"),
        default_relative_velocity_km_s: state.config.risk.default_relative_velocity_km_s,
        default_corridor_radius_m: state.config.risk.default_corridor_radius_m,
    }
}
