//! # benchrun-cli
//!
//! Result table output, JSON reports, terminal messages, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::TablePresenter;
