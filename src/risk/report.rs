use serde::Serialize;
use utoipa::ToSchema;

use crate::risk::classifier::RiskClass;

/// Premium charged per unit of expected loss.
pub const INSURANCE_LOADING: f64 = 1.5;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RiskReport {
    /// Expected loss, rounded to cents
    pub financial_risk: f64,
    /// Collision probability over the exposure period
    pub collision_risk: f64,
    pub insurance_premium: f64,
    pub risk_class: RiskClass,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objects_in_corridor: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_corridor_radius_km: Option<f64>,
}

impl RiskReport {
    pub fn new(probability: f64, financial_exposure: f64) -> Self {
        let financial_risk = probability * financial_exposure;
        Self {
            financial_risk: round2(financial_risk),
            collision_risk: probability,
            insurance_premium: round2(financial_risk * INSURANCE_LOADING),
            risk_class: RiskClass::from_probability(probability),
            objects_in_corridor: None,
            launch_corridor_radius_km: None,
        }
    }

    pub fn with_corridor(mut self, objects_in_corridor: usize, radius_km: f64) -> Self {
        self.objects_in_corridor = Some(objects_in_corridor);
        self.launch_corridor_radius_km = Some(radius_km);
        self
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
