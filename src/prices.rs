//! Compiled-in monthly BTC/USD price table and lookup helpers.
//!
//! One approximate price per calendar month, 2010-07 through 2026-02.
//! Early 2010 values date from the Mt. Gox launch. The table is loaded once
//! into a process-wide [`PriceSeries`] and never mutated, so concurrent
//! readers need no synchronization.

use chrono::{Months, NaiveDate};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Monthly BTC prices in USD, chronological and gap-free.
const BTC_MONTHLY_USD: &[(&str, f64)] = &[
    // 2010 (Mt. Gox launched July 2010)
    ("2010-07", 0.05),
    ("2010-08", 0.07),
    ("2010-09", 0.06),
    ("2010-10", 0.10),
    ("2010-11", 0.20),
    ("2010-12", 0.30),
    // 2011 - first major rally and crash
    ("2011-01", 0.30),
    ("2011-02", 1.00),
    ("2011-03", 0.80),
    ("2011-04", 1.10),
    ("2011-05", 8.00),
    ("2011-06", 29.00),
    ("2011-07", 14.00),
    ("2011-08", 11.00),
    ("2011-09", 5.00),
    ("2011-10", 3.20),
    ("2011-11", 2.50),
    ("2011-12", 4.70),
    // 2012 - consolidation, first halving (Nov 2012)
    ("2012-01", 6.00),
    ("2012-02", 4.50),
    ("2012-03", 5.00),
    ("2012-04", 5.00),
    ("2012-05", 5.10),
    ("2012-06", 5.50),
    ("2012-07", 7.50),
    ("2012-08", 10.00),
    ("2012-09", 11.00),
    ("2012-10", 11.50),
    ("2012-11", 12.00),
    ("2012-12", 13.50),
    // 2013 - first major bull run past $1000
    ("2013-01", 13.50),
    ("2013-02", 22.00),
    ("2013-03", 47.00),
    ("2013-04", 135.00),
    ("2013-05", 120.00),
    ("2013-06", 100.00),
    ("2013-07", 68.00),
    ("2013-08", 110.00),
    ("2013-09", 130.00),
    ("2013-10", 140.00),
    ("2013-11", 350.00),
    ("2013-12", 750.00),
    // 2014 - Mt. Gox collapse, bear market begins
    ("2014-01", 850.00),
    ("2014-02", 700.00),
    ("2014-03", 620.00),
    ("2014-04", 500.00),
    ("2014-05", 450.00),
    ("2014-06", 600.00),
    ("2014-07", 580.00),
    ("2014-08", 500.00),
    ("2014-09", 480.00),
    ("2014-10", 380.00),
    ("2014-11", 350.00),
    ("2014-12", 320.00),
    // 2015 - bear market bottom, accumulation
    ("2015-01", 280.00),
    ("2015-02", 220.00),
    ("2015-03", 250.00),
    ("2015-04", 240.00),
    ("2015-05", 230.00),
    ("2015-06", 250.00),
    ("2015-07", 280.00),
    ("2015-08", 230.00),
    ("2015-09", 240.00),
    ("2015-10", 270.00),
    ("2015-11", 330.00),
    ("2015-12", 430.00),
    // 2016 - second halving (July 2016), slow recovery
    ("2016-01", 430.0),
    ("2016-02", 380.0),
    ("2016-03", 430.0),
    ("2016-04", 420.0),
    ("2016-05", 450.0),
    ("2016-06", 530.0),
    ("2016-07", 680.0),
    ("2016-08", 600.0),
    ("2016-09", 610.0),
    ("2016-10", 615.0),
    ("2016-11", 710.0),
    ("2016-12", 770.0),
    // 2017 - parabolic bull run to $20K
    ("2017-01", 970.0),
    ("2017-02", 970.0),
    ("2017-03", 1190.0),
    ("2017-04", 1080.0),
    ("2017-05", 1400.0),
    ("2017-06", 2500.0),
    ("2017-07", 2550.0),
    ("2017-08", 2875.0),
    ("2017-09", 4700.0),
    ("2017-10", 4400.0),
    ("2017-11", 6400.0),
    ("2017-12", 10800.0),
    // 2018 - crypto winter begins
    ("2018-01", 14000.0),
    ("2018-02", 10200.0),
    ("2018-03", 10800.0),
    ("2018-04", 7000.0),
    ("2018-05", 9200.0),
    ("2018-06", 7500.0),
    ("2018-07", 6400.0),
    ("2018-08", 7600.0),
    ("2018-09", 7050.0),
    ("2018-10", 6600.0),
    ("2018-11", 6350.0),
    ("2018-12", 4000.0),
    // 2019 - recovery and consolidation
    ("2019-01", 3750.0),
    ("2019-02", 3450.0),
    ("2019-03", 3850.0),
    ("2019-04", 4100.0),
    ("2019-05", 5350.0),
    ("2019-06", 8550.0),
    ("2019-07", 10800.0),
    ("2019-08", 10400.0),
    ("2019-09", 9600.0),
    ("2019-10", 8300.0),
    ("2019-11", 9200.0),
    ("2019-12", 7200.0),
    // 2020 - COVID crash and recovery, third halving (May 2020)
    ("2020-01", 7200.0),
    ("2020-02", 9400.0),
    ("2020-03", 8600.0),
    ("2020-04", 6800.0),
    ("2020-05", 8800.0),
    ("2020-06", 9500.0),
    ("2020-07", 9100.0),
    ("2020-08", 11700.0),
    ("2020-09", 10800.0),
    ("2020-10", 10800.0),
    ("2020-11", 13700.0),
    ("2020-12", 19000.0),
    // 2021 - institutional adoption, new ATH at $69K
    ("2021-01", 29300.0),
    ("2021-02", 33100.0),
    ("2021-03", 45100.0),
    ("2021-04", 58800.0),
    ("2021-05", 57700.0),
    ("2021-06", 35600.0),
    ("2021-07", 33800.0),
    ("2021-08", 39800.0),
    ("2021-09", 47100.0),
    ("2021-10", 43800.0),
    ("2021-11", 61300.0),
    ("2021-12", 57000.0),
    // 2022 - bear market, FTX collapse
    ("2022-01", 46300.0),
    ("2022-02", 38500.0),
    ("2022-03", 43100.0),
    ("2022-04", 45500.0),
    ("2022-05", 38500.0),
    ("2022-06", 31800.0),
    ("2022-07", 19900.0),
    ("2022-08", 23300.0),
    ("2022-09", 20000.0),
    ("2022-10", 19400.0),
    ("2022-11", 20500.0),
    ("2022-12", 17000.0),
    // 2023 - recovery year
    ("2023-01", 16600.0),
    ("2023-02", 23100.0),
    ("2023-03", 23500.0),
    ("2023-04", 28400.0),
    ("2023-05", 29200.0),
    ("2023-06", 27200.0),
    ("2023-07", 30400.0),
    ("2023-08", 29200.0),
    ("2023-09", 25900.0),
    ("2023-10", 26900.0),
    ("2023-11", 34700.0),
    ("2023-12", 37700.0),
    // 2024 - ETF approval, fourth halving (April 2024), new ATH
    ("2024-01", 42500.0),
    ("2024-02", 43000.0),
    ("2024-03", 62400.0),
    ("2024-04", 71000.0),
    ("2024-05", 63500.0),
    ("2024-06", 67500.0),
    ("2024-07", 63000.0),
    ("2024-08", 64600.0),
    ("2024-09", 57300.0),
    ("2024-10", 63400.0),
    ("2024-11", 70000.0),
    ("2024-12", 96400.0),
    // 2025 - continued bull market
    ("2025-01", 93500.0),
    ("2025-02", 102000.0),
    ("2025-03", 84000.0),
    ("2025-04", 83000.0),
    ("2025-05", 95000.0),
    ("2025-06", 107000.0),
    ("2025-07", 103000.0),
    ("2025-08", 98000.0),
    ("2025-09", 100000.0),
    ("2025-10", 126000.0),
    ("2025-11", 96000.0),
    ("2025-12", 95000.0),
    // 2026
    ("2026-01", 88000.0),
    ("2026-02", 84000.0),
];

/// Ordered, gap-free monthly price series with O(1) month lookup.
#[derive(Debug, Clone)]
pub struct PriceSeries {
    months: Vec<&'static str>,
    prices: Vec<f64>,
    index: HashMap<&'static str, usize>,
}

impl PriceSeries {
    /// Build a series from a `(month, price)` table.
    ///
    /// The table must be chronological with no missing months; contiguity is
    /// checked with calendar arithmetic so a gap in the data fails fast at
    /// load rather than silently skewing a DCA window.
    fn from_table(table: &'static [(&'static str, f64)]) -> Self {
        let mut prev: Option<NaiveDate> = None;
        for &(month, price) in table {
            let date = parse_month(month)
                .unwrap_or_else(|| panic!("bad month identifier in price table: {month}"));
            if let Some(p) = prev {
                assert_eq!(
                    p + Months::new(1),
                    date,
                    "price table gap between {p} and {month}"
                );
            }
            assert!(price > 0.0, "non-positive price for {month}");
            prev = Some(date);
        }

        let months: Vec<&'static str> = table.iter().map(|&(m, _)| m).collect();
        let prices: Vec<f64> = table.iter().map(|&(_, p)| p).collect();
        let index = months.iter().enumerate().map(|(i, &m)| (m, i)).collect();
        Self {
            months,
            prices,
            index,
        }
    }

    /// All known month identifiers, chronological.
    pub fn months(&self) -> &[&'static str] {
        &self.months
    }

    /// Number of months covered.
    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// First month in the series.
    pub fn first_month(&self) -> Option<&'static str> {
        self.months.first().copied()
    }

    /// Last month in the series.
    pub fn last_month(&self) -> Option<&'static str> {
        self.months.last().copied()
    }

    /// Position of a month within the series.
    pub fn month_index(&self, month: &str) -> Option<usize> {
        self.index.get(month).copied()
    }

    /// Price for a single month.
    pub fn price(&self, month: &str) -> Option<f64> {
        self.month_index(month).map(|i| self.prices[i])
    }

    /// Contiguous window of `count` prices starting at `start_month`.
    ///
    /// `None` if the month is unknown or the window runs past the end of the
    /// series.
    pub fn price_range(&self, start_month: &str, count: usize) -> Option<&[f64]> {
        let start = self.month_index(start_month)?;
        self.prices.get(start..start.checked_add(count)?)
    }

    /// Month identifiers for the same window as [`PriceSeries::price_range`].
    pub fn month_range(&self, start_month: &str, count: usize) -> Option<&[&'static str]> {
        let start = self.month_index(start_month)?;
        self.months.get(start..start.checked_add(count)?)
    }
}

/// Parse a `"YYYY-MM"` token to the first day of that month.
fn parse_month(month: &str) -> Option<NaiveDate> {
    let (year, rest) = month.split_once('-')?;
    if year.len() != 4 || rest.len() != 2 {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, rest.parse().ok()?, 1)
}

static SERIES: LazyLock<PriceSeries> = LazyLock::new(|| PriceSeries::from_table(BTC_MONTHLY_USD));

/// The process-wide price series.
pub fn series() -> &'static PriceSeries {
    &SERIES
}

/// BTC price for a month, or `None` if outside the known window.
pub fn price(month: &str) -> Option<f64> {
    series().price(month)
}

/// Contiguous window of `count` prices starting at `start_month`.
pub fn price_range(start_month: &str, count: usize) -> Option<&'static [f64]> {
    series().price_range(start_month, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_is_contiguous_and_nonempty() {
        let s = series();
        assert!(!s.is_empty());
        assert_eq!(s.first_month(), Some("2010-07"));
        assert_eq!(s.last_month(), Some("2026-02"));
        // 6 months of 2010 + 15 full years + 2 months of 2026.
        assert_eq!(s.len(), 6 + 15 * 12 + 2);
    }

    #[test]
    fn months_sorted_lexicographically() {
        let months = series().months();
        for pair in months.windows(2) {
            assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn price_lookup_known_month() {
        assert_eq!(price("2020-01"), Some(7200.0));
        assert_eq!(price("2021-11"), Some(61300.0));
        assert_eq!(price("2010-07"), Some(0.05));
    }

    #[test]
    fn price_lookup_unknown_month() {
        assert_eq!(price("2010-06"), None);
        assert_eq!(price("2026-03"), None);
        assert_eq!(price("not-a-month"), None);
    }

    #[test]
    fn price_range_resolves_window() {
        let window = price_range("2020-01", 12).unwrap();
        assert_eq!(window.len(), 12);
        assert!((window[0] - 7200.0).abs() < f64::EPSILON);
        assert!((window[11] - 19000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn price_range_overflow_is_none() {
        assert!(price_range("2026-02", 2).is_none());
        assert!(price_range("2025-06", 100).is_none());
        assert!(price_range("1999-01", 1).is_none());
    }

    #[test]
    fn price_range_at_series_end() {
        let window = price_range("2026-01", 2).unwrap();
        assert_eq!(window, &[88000.0, 84000.0]);
    }

    #[test]
    fn month_range_matches_price_range() {
        let months = series().month_range("2021-11", 3).unwrap();
        assert_eq!(months, &["2021-11", "2021-12", "2022-01"]);
    }

    #[test]
    fn parse_month_accepts_valid_tokens() {
        assert_eq!(
            parse_month("2024-02"),
            NaiveDate::from_ymd_opt(2024, 2, 1)
        );
    }

    #[test]
    fn parse_month_rejects_malformed_tokens() {
        assert!(parse_month("2024").is_none());
        assert!(parse_month("2024-13").is_none());
        assert!(parse_month("24-02").is_none());
        assert!(parse_month("2024-2").is_none());
    }
}
