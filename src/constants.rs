/// Mean Earth radius used for shells and surface distances (km)
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Earth gravitational parameter (km³/s²)
pub const MU_EARTH_KM3_S2: f64 = 398_600.441_8;

pub const SECONDS_PER_DAY: f64 = 86_400.0;
pub const SECONDS_PER_YEAR: f64 = 31_536_000.0;

// WGS-84 ellipsoid
pub const WGS84_A_KM: f64 = 6378.137;
pub const WGS84_F: f64 = 1.0 / 298.257_223_563;
