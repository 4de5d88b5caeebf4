//! Analysis configuration defaults.

/// Parameters shared by every strategy comparison.
///
/// Immutable per run; override individual fields with struct-update syntax:
///
/// ```
/// use borrow_vs_dca::config::AnalysisConfig;
///
/// let config = AnalysisConfig {
///     investment_amount: 25_000.0,
///     ..AnalysisConfig::default()
/// };
/// assert!((config.down_payment_pct - 0.30).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AnalysisConfig {
    /// Fraction of the investment paid up front.
    pub down_payment_pct: f64,
    /// Price drop fraction that forces liquidation.
    pub liquidation_threshold: f64,
    /// Total USD amount deployed by either strategy.
    pub investment_amount: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            down_payment_pct: 0.30,
            liquidation_threshold: 0.50,
            investment_amount: 10_000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let c = AnalysisConfig::default();
        assert!((c.down_payment_pct - 0.30).abs() < f64::EPSILON);
        assert!((c.liquidation_threshold - 0.50).abs() < f64::EPSILON);
        assert!((c.investment_amount - 10_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn partial_override() {
        let c = AnalysisConfig {
            liquidation_threshold: 0.35,
            ..AnalysisConfig::default()
        };
        assert!((c.liquidation_threshold - 0.35).abs() < f64::EPSILON);
        assert!((c.down_payment_pct - 0.30).abs() < f64::EPSILON);
    }
}
