pub mod error;
pub mod health;
pub mod params;
pub mod risk;
