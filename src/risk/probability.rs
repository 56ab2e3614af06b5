use crate::risk::error::RiskError;

const M2_PER_KM2: f64 = 1_000_000.0;

/// Poisson collision probability for a uniform-density object population.
///
/// `P = 1 - exp(-n * v * A * T)` with `n = object_count / volume_km3` and the
/// cross-section converted from m² to km². A non-positive volume is a
/// geometry error; an empty population is simply zero probability.
pub fn collision_probability(
    object_count: usize,
    volume_km3: f64,
    relative_velocity_km_s: f64,
    cross_section_m2: f64,
    exposure_seconds: f64,
) -> Result<f64, RiskError> {
    if !(volume_km3.is_finite() && volume_km3 > 0.0) {
        return Err(RiskError::Geometry { volume_km3 });
    }
    non_negative("relative_velocity_km_s", relative_velocity_km_s)?;
    non_negative("cross_section_m2", cross_section_m2)?;
    non_negative("exposure_seconds", exposure_seconds)?;

    let density = object_count as f64 / volume_km3;
    let cross_section_km2 = cross_section_m2 / M2_PER_KM2;
    let expected = density * relative_velocity_km_s * cross_section_km2 * exposure_seconds;

    Ok(poisson_at_least_one(expected))
}

/// `1 - e^(-x)`, accurate for tiny `x`.
pub fn poisson_at_least_one(expected_events: f64) -> f64 {
    -(-expected_events).exp_m1()
}

fn non_negative(field: &'static str, value: f64) -> Result<(), RiskError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(RiskError::invalid(
            field,
            format!("expected a finite non-negative number, got {}", value),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn matches_closed_form() {
        let p = collision_probability(40, 1.0e10, 12.5, 1.5, 3600.0).unwrap();
        let expected: f64 = 40.0 / 1.0e10 * 12.5 * 1.5e-6 * 3600.0;
        assert_relative_eq!(p, 1.0 - (-expected).exp(), max_relative = 1e-9);
    }

    #[test]
    fn monotone_and_below_one() {
        let mut previous = 0.0;
        for x in [1e-12, 1e-6, 1e-3, 0.1, 1.0, 5.0, 20.0, 30.0] {
            let p = poisson_at_least_one(x);
            assert!(p > previous, "{} not above {} at x = {}", p, previous, x);
            assert!(p < 1.0);
            previous = p;
        }
        assert!(poisson_at_least_one(1e6) <= 1.0);
        assert_eq!(poisson_at_least_one(0.0), 0.0);
    }

    #[test]
    fn saturates_instead_of_exceeding_one() {
        let p = collision_probability(1_000_000, 1.0, 15.0, 100.0, 1e9).unwrap();
        assert!(p <= 1.0);
        assert!(p > 0.999);
    }

    #[test]
    fn empty_population_is_zero_probability() {
        assert_eq!(collision_probability(0, 5.0e9, 12.5, 1.5, 1e8), Ok(0.0));
    }

    #[test]
    fn degenerate_volume_is_geometry_error() {
        for volume in [0.0, -1.0, f64::NAN] {
            let err = collision_probability(10, volume, 12.5, 1.5, 1.0).unwrap_err();
            assert!(matches!(err, RiskError::Geometry { .. }), "{:?}", err);
        }
        // also for an empty population
        assert!(matches!(
            collision_probability(0, 0.0, 12.5, 1.5, 1.0),
            Err(RiskError::Geometry { .. })
        ));
    }

    #[test]
    fn negative_inputs_are_rejected() {
        assert!(matches!(
            collision_probability(1, 1.0, -1.0, 1.5, 1.0),
            Err(RiskError::InvalidInput {
                field: "relative_velocity_km_s",
                ..
            })
        ));
        assert!(matches!(
            collision_probability(1, 1.0, 1.0, 1.5, f64::INFINITY),
            Err(RiskError::InvalidInput {
                field: "exposure_seconds",
                ..
            })
        ));
    }
}
