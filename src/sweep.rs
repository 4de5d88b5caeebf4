//! Multi-period sweep across a date range, with summary statistics.

use crate::analysis::{analyze_period, PeriodAnalysis};
use crate::config::AnalysisConfig;
use crate::prices;
use std::collections::HashMap;

/// Invalid sweep input. Analysis itself cannot fail once the range is valid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SweepError {
    #[error("unknown month: {0}")]
    UnknownMonth(String),

    #[error("start month {start} is not before end month {end}")]
    StartNotBeforeEnd { start: String, end: String },
}

/// Echo of the sweep inputs, for traceability of a result set.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SweepParams {
    pub start_month: String,
    pub end_month: String,
    pub loan_months: usize,
    pub apr: f64,
    pub origination_fee: f64,
}

/// Aggregate statistics over a sweep's periods.
///
/// `dca_wins` is the complement of `loan_wins` by construction; a tied period
/// counts as a DCA win. All ratios are 0 when no periods were analyzed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Summary {
    pub total: usize,
    pub loan_wins: usize,
    pub dca_wins: usize,
    pub loan_win_pct: f64,
    pub dca_win_pct: f64,
    pub liquidations: usize,
    pub liquidation_pct: f64,
    pub avg_advantage: f64,
    pub max_loan_advantage: f64,
    pub min_loan_advantage: f64,
}

impl Summary {
    fn compute(results: &[PeriodAnalysis]) -> Self {
        let total = results.len();
        let loan_wins = results.iter().filter(|r| r.loan_wins).count();
        let dca_wins = total - loan_wins;
        let liquidations = results.iter().filter(|r| r.liquidation.liquidated).count();

        let pct = |count: usize| {
            if total > 0 {
                count as f64 / total as f64 * 100.0
            } else {
                0.0
            }
        };

        let avg_advantage = if total > 0 {
            results.iter().map(|r| r.loan_advantage).sum::<f64>() / total as f64
        } else {
            0.0
        };
        let max_loan_advantage = results
            .iter()
            .map(|r| r.loan_advantage)
            .fold(f64::NEG_INFINITY, f64::max);
        let min_loan_advantage = results
            .iter()
            .map(|r| r.loan_advantage)
            .fold(f64::INFINITY, f64::min);

        Summary {
            total,
            loan_wins,
            dca_wins,
            loan_win_pct: pct(loan_wins),
            dca_win_pct: pct(dca_wins),
            liquidations,
            liquidation_pct: pct(liquidations),
            avg_advantage,
            max_loan_advantage: if total > 0 { max_loan_advantage } else { 0.0 },
            min_loan_advantage: if total > 0 { min_loan_advantage } else { 0.0 },
        }
    }
}

/// A full sweep: per-period results in chronological order plus aggregates.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Sweep {
    pub results: Vec<PeriodAnalysis>,
    index: HashMap<&'static str, usize>,
    pub summary: Summary,
    pub params: SweepParams,
}

impl Sweep {
    /// O(1) lookup of a period by its start month.
    pub fn get(&self, start_month: &str) -> Option<&PeriodAnalysis> {
        self.index.get(start_month).map(|&i| &self.results[i])
    }
}

/// Analyze every starting month in `[start_month, end_month]` whose loan
/// window fits inside the range.
///
/// The sweep stops as soon as fewer than `loan_months` months remain before
/// `end_month`, so every collected period is complete. Endpoints must be known
/// months with `start_month` strictly before `end_month`.
pub fn run_sweep(
    start_month: &str,
    end_month: &str,
    loan_months: usize,
    apr: f64,
    origination_fee: f64,
    config: &AnalysisConfig,
) -> Result<Sweep, SweepError> {
    let series = prices::series();
    let start_idx = series
        .month_index(start_month)
        .ok_or_else(|| SweepError::UnknownMonth(start_month.to_string()))?;
    let end_idx = series
        .month_index(end_month)
        .ok_or_else(|| SweepError::UnknownMonth(end_month.to_string()))?;
    if start_idx >= end_idx {
        return Err(SweepError::StartNotBeforeEnd {
            start: start_month.to_string(),
            end: end_month.to_string(),
        });
    }

    let mut results = Vec::new();
    let mut index = HashMap::new();

    // Last viable start keeps the full window at or before end_idx. The
    // inclusive range is simply empty when the term outruns the range; the
    // clamp keeps a zero-month term from indexing past the series.
    if let Some(last_start) = (end_idx + 1).checked_sub(loan_months) {
        for i in start_idx..=last_start.min(end_idx) {
            let month = series.months()[i];
            if let Some(result) = analyze_period(month, loan_months, apr, origination_fee, config)
            {
                index.insert(result.start_month, results.len());
                results.push(result);
            }
        }
    }

    let summary = Summary::compute(&results);
    Ok(Sweep {
        results,
        index,
        summary,
        params: SweepParams {
            start_month: start_month.to_string(),
            end_month: end_month.to_string(),
            loan_months,
            apr,
            origination_fee,
        },
    })
}
