//! Property tests for the analyzer primitives.

use borrow_vs_dca::analysis::analyze_period;
use borrow_vs_dca::config::AnalysisConfig;
use borrow_vs_dca::loan::{check_liquidation, monthly_payment};
use borrow_vs_dca::prices;
use borrow_vs_dca::sweep::run_sweep;
use proptest::prelude::*;

proptest! {
    #[test]
    fn zero_rate_payments_sum_to_principal(
        principal in 0.01f64..1e9,
        term in 1usize..=600,
    ) {
        let payment = monthly_payment(principal, 0.0, term);
        let repaid = payment * term as f64;
        prop_assert!((repaid - principal).abs() <= principal * 1e-9);
    }

    #[test]
    fn interest_raises_the_payment_above_straight_line(
        principal in 1.0f64..1e7,
        rate in 0.001f64..0.5,
        term in 1usize..=360,
    ) {
        let payment = monthly_payment(principal, rate, term);
        prop_assert!(payment > principal / term as f64);
        prop_assert!(payment * term as f64 > principal);
    }

    #[test]
    fn liquidation_is_monotone_in_the_required_drop(
        start_price in 1.0f64..100_000.0,
        window in prop::collection::vec(1.0f64..100_000.0, 1..48),
        a in 0.01f64..0.99,
        b in 0.01f64..0.99,
    ) {
        let (t_small, t_big) = if a <= b { (a, b) } else { (b, a) };
        let at_small = check_liquidation(start_price, &window, t_small);
        let at_big = check_liquidation(start_price, &window, t_big);
        // A deeper required drop is strictly harder to hit: any window that
        // breaches the big threshold also breaches the small one, no later.
        if at_big.liquidated {
            prop_assert!(at_small.liquidated);
            prop_assert!(at_small.month_offset <= at_big.month_offset);
        }
    }

    #[test]
    fn advantage_round_trips_exactly(
        offset in 0usize..180,
        term in 1usize..=24,
    ) {
        let month = prices::series().months()[offset];
        let config = AnalysisConfig::default();
        if let Some(r) = analyze_period(month, term, 15.0, 2.0, &config) {
            prop_assert_eq!(
                r.loan_advantage,
                (r.btc_from_loan / r.btc_from_dca - 1.0) * 100.0
            );
            prop_assert_eq!(r.loan_wins, r.btc_from_loan > r.btc_from_dca);
        }
    }

    #[test]
    fn sweep_wins_always_partition(
        start in 0usize..150,
        span in 2usize..36,
        term in 1usize..=24,
    ) {
        let months = prices::series().months();
        prop_assume!(start + span < months.len());
        let s = run_sweep(
            months[start],
            months[start + span],
            term,
            15.0,
            2.0,
            &AnalysisConfig::default(),
        ).unwrap();

        prop_assert_eq!(s.summary.loan_wins + s.summary.dca_wins, s.summary.total);
        prop_assert_eq!(s.summary.total, s.results.len());
        if s.summary.total == 0 {
            prop_assert_eq!(s.summary.loan_win_pct, 0.0);
            prop_assert_eq!(s.summary.dca_win_pct, 0.0);
            prop_assert_eq!(s.summary.liquidation_pct, 0.0);
        } else {
            prop_assert!((s.summary.loan_win_pct + s.summary.dca_win_pct - 100.0).abs() < 1e-9);
        }
    }
}
