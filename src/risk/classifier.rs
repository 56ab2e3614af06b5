use serde::Serialize;
use strum_macros::Display;
use utoipa::ToSchema;

/// Letter grade for a collision probability, F being the worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, ToSchema)]
pub enum RiskClass {
    #[strum(to_string = "F (Extremely High)")]
    #[serde(rename = "F (Extremely High)")]
    F,
    #[strum(to_string = "E (Very High)")]
    #[serde(rename = "E (Very High)")]
    E,
    #[strum(to_string = "D (High)")]
    #[serde(rename = "D (High)")]
    D,
    #[strum(to_string = "C (Moderate)")]
    #[serde(rename = "C (Moderate)")]
    C,
    #[strum(to_string = "B (Low)")]
    #[serde(rename = "B (Low)")]
    B,
    #[strum(to_string = "A (Very Low)")]
    #[serde(rename = "A (Very Low)")]
    A,
    #[strum(to_string = "A+ (Minimal)")]
    #[serde(rename = "A+ (Minimal)")]
    APlus,
}

// Lower bounds, exclusive, checked from the top.
const THRESHOLDS: [(f64, RiskClass); 6] = [
    (1e-2, RiskClass::F),
    (1e-3, RiskClass::E),
    (1e-4, RiskClass::D),
    (1e-5, RiskClass::C),
    (1e-6, RiskClass::B),
    (1e-7, RiskClass::A),
];

impl RiskClass {
    pub fn from_probability(probability: f64) -> Self {
        THRESHOLDS
            .iter()
            .find(|(bound, _)| probability > *bound)
            .map(|(_, class)| *class)
            .unwrap_or(RiskClass::APlus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_exclusive() {
        assert_eq!(RiskClass::from_probability(1e-2), RiskClass::E);
        assert_eq!(RiskClass::from_probability(1e-3), RiskClass::D);
        assert_eq!(RiskClass::from_probability(1e-4), RiskClass::C);
        assert_eq!(RiskClass::from_probability(1e-5), RiskClass::B);
        assert_eq!(RiskClass::from_probability(1e-6), RiskClass::A);
        assert_eq!(RiskClass::from_probability(1e-7), RiskClass::APlus);
    }

    #[test]
    fn each_band() {
        assert_eq!(RiskClass::from_probability(0.5), RiskClass::F);
        assert_eq!(RiskClass::from_probability(1.0), RiskClass::F);
        assert_eq!(RiskClass::from_probability(0.0011), RiskClass::E);
        assert_eq!(RiskClass::from_probability(5e-4), RiskClass::D);
        assert_eq!(RiskClass::from_probability(5e-5), RiskClass::C);
        assert_eq!(RiskClass::from_probability(5e-6), RiskClass::B);
        assert_eq!(RiskClass::from_probability(5e-7), RiskClass::A);
        assert_eq!(RiskClass::from_probability(0.0), RiskClass::APlus);
    }

    #[test]
    fn partition_has_no_gaps() {
        // sweep [0, 1] on a log grid and check classes only ever get worse
        let order = |c: RiskClass| match c {
            RiskClass::APlus => 0,
            RiskClass::A => 1,
            RiskClass::B => 2,
            RiskClass::C => 3,
            RiskClass::D => 4,
            RiskClass::E => 5,
            RiskClass::F => 6,
        };
        let mut last = order(RiskClass::from_probability(0.0));
        for step in 0..=900 {
            let p = 10f64.powf(-9.0 + step as f64 / 100.0);
            let current = order(RiskClass::from_probability(p));
            assert!(current >= last);
            assert!(current - last <= 1);
            last = current;
        }
        assert_eq!(last, 6);
    }

    #[test]
    fn labels() {
        assert_eq!(RiskClass::F.to_string(), "F (Extremely High)");
        assert_eq!(RiskClass::APlus.to_string(), "A+ (Minimal)");
        assert_eq!(
            serde_json::to_string(&RiskClass::C).unwrap(),
            "\"C (Moderate)\""
        );
    }
}
