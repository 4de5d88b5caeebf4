//! borrow_vs_dca — loan-versus-DCA Bitcoin acquisition analyzer.
//!
//! Compares buying BTC upfront with a down payment plus an amortizing loan
//! against dollar-cost-averaging the same total cash outlay over the loan
//! term, across a compiled-in table of historical monthly prices. Pure
//! synchronous computation: no I/O, no shared mutable state.

pub mod analysis;
pub mod config;
pub mod format;
pub mod loan;
pub mod prices;
pub mod sweep;
