//! Unlock policy configuration supplied by tenant settings.

use serde::{Deserialize, Serialize};
use crate::validation::ValidationError;
use crate::PeriodNumber;

/// Threshold used when tenant settings don't specify one.
pub const DEFAULT_THRESHOLD_PERCENT: f64 = 70.0;

/// Granularity of the periods modules are scheduled into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodUnit {
    /// Daily schedule
    Day,
    /// Weekly schedule
    #[default]
    Week,
    /// Monthly schedule
    Month,
    /// Term or semester schedule
    Term,
}

impl PeriodUnit {
    /// Human-readable label used in remediation messages.
    pub fn label(&self) -> &'static str {
        match self {
            PeriodUnit::Day => "day",
            PeriodUnit::Week => "week",
            PeriodUnit::Month => "month",
            PeriodUnit::Term => "term",
        }
    }
}

impl std::str::FromStr for PeriodUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day" => Ok(PeriodUnit::Day),
            "week" => Ok(PeriodUnit::Week),
            "month" => Ok(PeriodUnit::Month),
            "term" => Ok(PeriodUnit::Term),
            other => Err(format!("unknown period unit: {}", other)),
        }
    }
}

/// Progressive unlock policy.
///
/// Treated as immutable for the duration of an evaluation pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnlockPolicyConfig {
    /// Whether gating is active at all
    pub enabled: bool,

    /// Minimum previous-period completion (0-100), inclusive
    #[serde(alias = "thresholdPercent")]
    pub threshold_percent: f64,

    /// Period granularity
    #[serde(alias = "periodUnit")]
    pub period_unit: PeriodUnit,
}

impl Default for UnlockPolicyConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            threshold_percent: DEFAULT_THRESHOLD_PERCENT,
            period_unit: PeriodUnit::Week,
        }
    }
}

impl UnlockPolicyConfig {
    /// An enabled policy with the given threshold.
    pub fn enabled(threshold_percent: f64) -> Self {
        Self {
            enabled: true,
            threshold_percent,
            ..Self::default()
        }
    }

    /// A disabled policy with the given threshold.
    pub fn disabled(threshold_percent: f64) -> Self {
        Self {
            enabled: false,
            threshold_percent,
            ..Self::default()
        }
    }

    /// Set the period unit.
    pub fn with_period_unit(mut self, unit: PeriodUnit) -> Self {
        self.period_unit = unit;
        self
    }

    /// Check the threshold is a finite percentage.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.threshold_percent.is_finite()
            || !(0.0..=100.0).contains(&self.threshold_percent)
        {
            return Err(ValidationError::ThresholdOutOfRange(self.threshold_percent));
        }
        Ok(())
    }

    /// Remediation text shown on a module locked by this policy.
    pub fn unlock_message(&self, required_period: PeriodNumber) -> String {
        format!(
            "Complete {} {} (≥ {}%) to unlock",
            self.period_unit.label(),
            required_period,
            format_percent(self.threshold_percent)
        )
    }
}

/// Whole percentages print without a fractional part.
fn format_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = UnlockPolicyConfig::default();
        assert!(!policy.enabled);
        assert_eq!(policy.threshold_percent, DEFAULT_THRESHOLD_PERCENT);
        assert_eq!(policy.period_unit, PeriodUnit::Week);
    }

    #[test]
    fn test_deserialize_partial_settings() {
        let policy: UnlockPolicyConfig =
            serde_json::from_str(r#"{"enabled": true, "thresholdPercent": 80}"#).unwrap();
        assert!(policy.enabled);
        assert_eq!(policy.threshold_percent, 80.0);
        assert_eq!(policy.period_unit, PeriodUnit::Week);

        let policy: UnlockPolicyConfig =
            serde_json::from_str(r#"{"period_unit": "day"}"#).unwrap();
        assert!(!policy.enabled);
        assert_eq!(policy.period_unit, PeriodUnit::Day);
    }

    #[test]
    fn test_validate_threshold() {
        assert!(UnlockPolicyConfig::enabled(0.0).validate().is_ok());
        assert!(UnlockPolicyConfig::enabled(100.0).validate().is_ok());
        assert!(UnlockPolicyConfig::enabled(100.5).validate().is_err());
        assert!(UnlockPolicyConfig::enabled(-1.0).validate().is_err());
        assert!(UnlockPolicyConfig::enabled(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_unlock_message() {
        let policy = UnlockPolicyConfig::enabled(70.0);
        assert_eq!(policy.unlock_message(1), "Complete week 1 (≥ 70%) to unlock");

        let policy = UnlockPolicyConfig::enabled(62.5).with_period_unit(PeriodUnit::Month);
        assert_eq!(policy.unlock_message(3), "Complete month 3 (≥ 62.5%) to unlock");
    }

    #[test]
    fn test_period_unit_from_str() {
        assert_eq!("Week".parse::<PeriodUnit>().unwrap(), PeriodUnit::Week);
        assert_eq!("term".parse::<PeriodUnit>().unwrap(), PeriodUnit::Term);
        assert!("fortnight".parse::<PeriodUnit>().is_err());
    }
}
