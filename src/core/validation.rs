/// Range checks for caller-supplied report data.
/// Values outside the accepted ranges are rejected, never clamped.
use crate::{Result, RiskregError};
use std::ops::RangeInclusive;

pub const PROBABILITY_RANGE: RangeInclusive<f64> = 0.0..=1.0;
pub const IMPACT_RANGE: RangeInclusive<u8> = 1..=10;

pub fn validate_report_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(RiskregError::InvalidInput(
            "report name must not be empty".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_probability(probability: f64) -> Result<()> {
    // NaN fails `contains`
    if !PROBABILITY_RANGE.contains(&probability) {
        return Err(RiskregError::InvalidInput(format!(
            "probability {} is outside {}-{}",
            probability,
            PROBABILITY_RANGE.start(),
            PROBABILITY_RANGE.end()
        )));
    }
    Ok(())
}

pub fn validate_impact(impact: u8) -> Result<()> {
    if !IMPACT_RANGE.contains(&impact) {
        return Err(RiskregError::InvalidInput(format!(
            "impact {} is outside {}-{}",
            impact,
            IMPACT_RANGE.start(),
            IMPACT_RANGE.end()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probability_bounds() {
        assert!(validate_probability(0.0).is_ok());
        assert!(validate_probability(1.0).is_ok());
        assert!(validate_probability(0.35).is_ok());
        assert!(validate_probability(-0.01).is_err());
        assert!(validate_probability(1.5).is_err());
        assert!(validate_probability(f64::NAN).is_err());
        assert!(validate_probability(f64::INFINITY).is_err());
    }

    #[test]
    fn test_impact_bounds() {
        assert!(validate_impact(1).is_ok());
        assert!(validate_impact(10).is_ok());
        assert!(matches!(
            validate_impact(0),
            Err(RiskregError::InvalidInput(_))
        ));
        assert!(validate_impact(11).is_err());
    }

    #[test]
    fn test_report_name() {
        assert!(validate_report_name("Q1").is_ok());
        assert!(validate_report_name("").is_err());
        assert!(validate_report_name("   ").is_err());
    }
}
