//! Loan primitives: level-pay amortization, liquidation scan, term labels.

/// Fixed monthly payment that fully amortizes `principal` over `months`.
///
/// payment = P * r(1+r)^n / ((1+r)^n - 1), r = annual_rate / 12.
/// A zero rate degenerates to straight-line `principal / months`. No rounding
/// is applied; callers format for display. `months` must be at least 1;
/// negative principal or rate is the caller's problem.
pub fn monthly_payment(principal: f64, annual_rate: f64, months: usize) -> f64 {
    debug_assert!(months >= 1, "loan term must be at least one month");
    let monthly_rate = annual_rate / 12.0;
    if monthly_rate == 0.0 {
        return principal / months as f64;
    }
    let growth = (1.0 + monthly_rate).powi(months as i32);
    principal * (monthly_rate * growth) / (growth - 1.0)
}

/// Outcome of scanning a price window for a forced liquidation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Liquidation {
    pub liquidated: bool,
    /// 0-based offset of the first breach within the window.
    pub month_offset: Option<usize>,
    /// Lowest price over the whole window, even past the breach.
    pub lowest_price: f64,
    /// Drawdown from start price to the lowest price, in percent.
    pub drop_pct: f64,
}

/// Scan `prices` chronologically for the first month at or below
/// `start_price * (1 - threshold)`.
///
/// A price exactly on the liquidation price counts as a breach. The reported
/// offset is the first breach, which may precede the window's minimum.
pub fn check_liquidation(start_price: f64, prices: &[f64], threshold: f64) -> Liquidation {
    if prices.is_empty() {
        return Liquidation {
            liquidated: false,
            month_offset: None,
            lowest_price: start_price,
            drop_pct: 0.0,
        };
    }

    let liquidation_price = start_price * (1.0 - threshold);
    let month_offset = prices.iter().position(|&p| p <= liquidation_price);

    let lowest_price = prices.iter().copied().fold(f64::INFINITY, f64::min);
    let drop_pct = if start_price > 0.0 {
        (start_price - lowest_price) / start_price * 100.0
    } else {
        0.0
    };

    Liquidation {
        liquidated: month_offset.is_some(),
        month_offset,
        lowest_price,
        drop_pct,
    }
}

/// Well-known loan term with a display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LoanTerm {
    pub months: usize,
    pub label: &'static str,
}

/// Standard loan term options.
pub const LOAN_TERMS: &[LoanTerm] = &[
    LoanTerm { months: 3, label: "3 Months" },
    LoanTerm { months: 6, label: "6 Months" },
    LoanTerm { months: 9, label: "9 Months" },
    LoanTerm { months: 12, label: "1 Year" },
    LoanTerm { months: 24, label: "2 Years" },
    LoanTerm { months: 36, label: "3 Years" },
    LoanTerm { months: 48, label: "4 Years" },
    LoanTerm { months: 60, label: "5 Years" },
];

/// Human-readable label for a term, falling back to `"N Months"`.
pub fn term_label(months: usize) -> String {
    LOAN_TERMS
        .iter()
        .find(|t| t.months == months)
        .map(|t| t.label.to_string())
        .unwrap_or_else(|| format!("{months} Months"))
}
