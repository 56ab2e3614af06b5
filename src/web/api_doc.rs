use utoipa::OpenApi;

use super::api::error::ErrorResponse;
use super::api::health::HealthResponse;
use crate::risk::{RiskClass, RiskReport};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::api::health::health,
        super::api::risk::orbit_risk,
        super::api::risk::takeoff_risk,
    ),
    components(
        schemas(
            RiskReport,
            RiskClass,
            HealthResponse,
            ErrorResponse,
        )
    ),
    info(
        title = "Orbit Risk API",
        description = "Collision risk and insurance estimates for satellites and launches",
        version = "0.1.0"
    ),
    tags(
        (name = "risk", description = "Collision risk assessment"),
        (name = "health", description = "Service status")
    )
)]
pub struct ApiDoc;
