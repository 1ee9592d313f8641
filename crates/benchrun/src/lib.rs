//! benchrun library: application logic and the built-in benchmark suites.

pub mod app;
pub mod config;
pub mod environment;
pub mod errors;
pub mod suites;
pub mod version;
