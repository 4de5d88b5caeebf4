//! Display formatting for currency, BTC quantities, and percentages.
//!
//! Pure text helpers, locale-agnostic. Amounts are assumed non-negative.

/// Format a USD amount with the default two decimals.
pub fn format_currency(value: f64) -> String {
    format_currency_decimals(value, 2)
}

/// Format a USD amount, banded by magnitude.
///
/// Millions always render with two decimals; the `decimals` precision applies
/// to the K band and to plain amounts at or above one dollar. Sub-dollar
/// amounts get four decimals.
pub fn format_currency_decimals(value: f64, decimals: usize) -> String {
    if value >= 1_000_000.0 {
        format!("${:.2}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("${:.prec$}K", value / 1_000.0, prec = decimals)
    } else if value >= 1.0 {
        format!("${value:.prec$}", prec = decimals)
    } else {
        format!("${value:.4}")
    }
}

/// Format a BTC quantity: four decimals at or above one coin, six below.
pub fn format_btc(btc: f64) -> String {
    if btc >= 1.0 {
        format!("{btc:.4} BTC")
    } else {
        format!("{btc:.6} BTC")
    }
}

/// Format a percentage to one decimal, with an optional leading `+` for
/// strictly positive values.
pub fn format_percent(pct: f64, show_sign: bool) -> String {
    let sign = if show_sign && pct > 0.0 { "+" } else { "" };
    format!("{sign}{pct:.1}%")
}
