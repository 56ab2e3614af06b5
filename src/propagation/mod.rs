mod error;
mod sgp4_propagator;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::CatalogRecord;

pub use error::PropagationError;
pub use sgp4_propagator::Sgp4Propagator;

/// Geodetic subpoint of an object at an instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeodeticPosition {
    pub lat_deg: f64,
    pub lon_deg: f64,
    pub alt_km: f64,
}

/// Position source used by the corridor scanner.
///
/// Implementations must be safe to call from several threads at once; the
/// scanner propagates objects in parallel. Per-object setup goes in
/// `prepare` so a scan pays for it once per object, not once per sample.
pub trait Propagate: Sync {
    type Prepared: Send + Sync;

    fn prepare(&self, record: &CatalogRecord) -> Result<Self::Prepared, PropagationError>;

    fn propagate_prepared(
        &self,
        prepared: &Self::Prepared,
        timestamp: DateTime<Utc>,
    ) -> Result<GeodeticPosition, PropagationError>;

    fn propagate(
        &self,
        record: &CatalogRecord,
        timestamp: DateTime<Utc>,
    ) -> Result<GeodeticPosition, PropagationError> {
        self.propagate_prepared(&self.prepare(record)?, timestamp)
    }
}
