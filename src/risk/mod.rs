mod assessment;
mod classifier;
mod corridor;
mod error;
mod geometry;
mod launch_time;
mod occupancy;
mod probability;
mod report;

pub use assessment::{assess_launch, assess_orbit, LaunchRiskQuery, OrbitRiskQuery};
pub use classifier::RiskClass;
pub use corridor::{LaunchSite, DEFAULT_TIME_STEP_SECONDS};
pub use error::RiskError;
pub use launch_time::{parse_launch_time, LaunchTimeError};
pub use occupancy::{compute_occupancy, OccupancyWindow};
pub use report::RiskReport;
