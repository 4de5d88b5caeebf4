//! Single-period comparison of the loan and DCA strategies.

use crate::config::AnalysisConfig;
use crate::loan::{check_liquidation, monthly_payment, Liquidation};
use crate::prices;

/// Everything computed for one starting month and loan term.
///
/// A pure value: re-running the analysis with identical inputs yields a
/// bit-identical result. Both strategies are compared on the same total cash
/// outlay, so `btc_from_loan` vs `btc_from_dca` is an apples-to-apples count.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PeriodAnalysis {
    // Period
    pub start_month: &'static str,
    pub end_month: &'static str,
    pub months: Vec<&'static str>,
    pub prices: Vec<f64>,

    // Outcome
    pub loan_wins: bool,
    /// Signed percentage; negative means DCA acquired more BTC.
    pub loan_advantage: f64,

    // Loan strategy
    pub investment_amount: f64,
    pub down_payment: f64,
    pub loan_amount: f64,
    pub loan_with_fees: f64,
    pub monthly_payment: f64,
    pub total_cash_outlay: f64,
    pub btc_from_loan: f64,

    // DCA strategy
    pub btc_from_dca: f64,
    pub dca_monthly: f64,
    pub avg_dca_price: f64,

    // Price stats
    pub start_price: f64,
    pub min_price: f64,
    pub max_price: f64,

    // Liquidation
    pub liquidation: Liquidation,
    pub liquidation_month: Option<&'static str>,
}

/// Compare the loan strategy against DCA for one period.
///
/// `apr` and `origination_fee` are percent units (15.0 = 15%). Returns `None`
/// when `start_month` is not in the price series, when `loan_months` is zero,
/// or when the window would run past the last known month.
pub fn analyze_period(
    start_month: &str,
    loan_months: usize,
    apr: f64,
    origination_fee: f64,
    config: &AnalysisConfig,
) -> Option<PeriodAnalysis> {
    if loan_months == 0 {
        return None;
    }
    let series = prices::series();
    let months = series.month_range(start_month, loan_months)?;
    let window = series.price_range(start_month, loan_months)?;
    let start_price = window[0];

    // Loan strategy: buy the full amount at the start price, repay over the
    // term. The origination fee inflates the amortized balance, not the BTC
    // position.
    let down_payment = config.investment_amount * config.down_payment_pct;
    let loan_amount = config.investment_amount * (1.0 - config.down_payment_pct);
    let loan_with_fees = loan_amount * (1.0 + origination_fee / 100.0);
    let payment = monthly_payment(loan_with_fees, apr / 100.0, loan_months);
    let total_cash_outlay = down_payment + payment * loan_months as f64;
    let btc_from_loan = config.investment_amount / start_price;

    // DCA strategy: spread the same total outlay evenly across the window.
    let dca_monthly = total_cash_outlay / loan_months as f64;
    let btc_from_dca: f64 = window.iter().map(|&p| dca_monthly / p).sum();
    let avg_dca_price = total_cash_outlay / btc_from_dca;

    let liquidation = check_liquidation(start_price, window, config.liquidation_threshold);
    let liquidation_month = liquidation.month_offset.map(|i| months[i]);

    let min_price = window.iter().copied().fold(f64::INFINITY, f64::min);
    let max_price = window.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Some(PeriodAnalysis {
        start_month: months[0],
        end_month: months[loan_months - 1],
        months: months.to_vec(),
        prices: window.to_vec(),
        loan_wins: btc_from_loan > btc_from_dca,
        loan_advantage: (btc_from_loan / btc_from_dca - 1.0) * 100.0,
        investment_amount: config.investment_amount,
        down_payment,
        loan_amount,
        loan_with_fees,
        monthly_payment: payment,
        total_cash_outlay,
        btc_from_loan,
        btc_from_dca,
        dca_monthly,
        avg_dca_price,
        start_price,
        min_price,
        max_price,
        liquidation,
        liquidation_month,
    })
}
