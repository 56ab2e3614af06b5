use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RiskError {
    #[error("degenerate geometry: volume {volume_km3} km^3 is not positive")]
    Geometry { volume_km3: f64 },
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
}

impl RiskError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        RiskError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}
