//! # benchrun-orchestration
//!
//! Selection of cases, the run-all loop, and result presentation interfaces.

pub mod case_selection;
pub mod interfaces;
pub mod runner;

pub use interfaces::{CaseReport, ResultPresenter};
pub use runner::{run_all, RunSummary};
