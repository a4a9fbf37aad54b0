use crate::config::EstimatorConfig;
use crate::domain::model::SalaryRange;

/// Turns a possibly open-ended salary range into a single monthly figure.
#[derive(Debug, Clone, Copy)]
pub struct SalaryEstimator {
    lower_only_multiplier: f64,
    upper_only_multiplier: f64,
}

impl Default for SalaryEstimator {
    fn default() -> Self {
        Self::new(&EstimatorConfig::default())
    }
}

impl SalaryEstimator {
    pub fn new(config: &EstimatorConfig) -> Self {
        Self {
            lower_only_multiplier: config.lower_only_multiplier,
            upper_only_multiplier: config.upper_only_multiplier,
        }
    }

    /// Zero means "unspecified" on both job boards, so it counts as absent.
    pub fn estimate(&self, lower: Option<f64>, upper: Option<f64>) -> Option<u64> {
        let lower = lower.filter(|v| v.is_finite() && *v > 0.0);
        let upper = upper.filter(|v| v.is_finite() && *v > 0.0);

        let value = match (lower, upper) {
            (Some(lower), None) => lower * self.lower_only_multiplier,
            (None, Some(upper)) => upper * self.upper_only_multiplier,
            (Some(lower), Some(upper)) => (lower + upper) / 2.0,
            (None, None) => return None,
        };

        Some(value.floor() as u64)
    }

    /// 只估算目標幣別的薪資，其它幣別一律略過
    pub fn estimate_range(&self, range: &SalaryRange, target_currency: &str) -> Option<u64> {
        match range.currency.as_deref() {
            Some(currency) if currency == target_currency => {
                self.estimate(range.lower, range.upper)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(lower: Option<f64>, upper: Option<f64>, currency: &str) -> SalaryRange {
        SalaryRange {
            lower,
            upper,
            currency: Some(currency.to_string()),
        }
    }

    #[test]
    fn test_lower_bound_only() {
        let estimator = SalaryEstimator::default();
        assert_eq!(estimator.estimate(Some(100.0), None), Some(120));
        assert_eq!(estimator.estimate(Some(100_000.0), Some(0.0)), Some(120_000));
    }

    #[test]
    fn test_upper_bound_only() {
        let estimator = SalaryEstimator::default();
        assert_eq!(estimator.estimate(None, Some(100.0)), Some(80));
        assert_eq!(estimator.estimate(Some(0.0), Some(150_000.0)), Some(120_000));
    }

    #[test]
    fn test_no_bounds_is_not_applicable() {
        let estimator = SalaryEstimator::default();
        assert_eq!(estimator.estimate(None, None), None);
        assert_eq!(estimator.estimate(Some(0.0), Some(0.0)), None);
        assert_eq!(estimator.estimate(Some(f64::NAN), None), None);
    }

    #[test]
    fn test_both_bounds_take_floored_midpoint() {
        let estimator = SalaryEstimator::default();
        let pairs = [(100.0, 200.0, 150), (1.0, 2.0, 1), (80_000.0, 120_001.0, 100_000)];

        for (lower, upper, expected) in pairs {
            assert_eq!(estimator.estimate(Some(lower), Some(upper)), Some(expected));
        }
    }

    #[test]
    fn test_multipliers_floor_the_result() {
        let estimator = SalaryEstimator::default();
        // 333 * 1.2 = 399.6
        assert_eq!(estimator.estimate(Some(333.0), None), Some(399));
        // 333 * 0.8 = 266.4
        assert_eq!(estimator.estimate(None, Some(333.0)), Some(266));
    }

    #[test]
    fn test_custom_multipliers() {
        let estimator = SalaryEstimator::new(&EstimatorConfig {
            lower_only_multiplier: 1.5,
            upper_only_multiplier: 0.5,
        });
        assert_eq!(estimator.estimate(Some(100.0), None), Some(150));
        assert_eq!(estimator.estimate(None, Some(100.0)), Some(50));
    }

    #[test]
    fn test_foreign_currency_is_not_applicable() {
        let estimator = SalaryEstimator::default();

        assert_eq!(
            estimator.estimate_range(&range(Some(100.0), Some(200.0), "RUR"), "RUR"),
            Some(150)
        );
        assert_eq!(
            estimator.estimate_range(&range(Some(100.0), Some(200.0), "USD"), "RUR"),
            None
        );
        assert_eq!(
            estimator.estimate_range(&range(Some(100.0), None, "RUR"), "rub"),
            None
        );

        let no_currency = SalaryRange {
            lower: Some(100.0),
            upper: None,
            currency: None,
        };
        assert_eq!(estimator.estimate_range(&no_currency, "rub"), None);
    }
}
