// Lexicon - a dictionary lookup service and an aggregator that forwards to it

// Enable coverage attribute on nightly for explicit exclusions
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod aggregator;
pub mod app;
pub mod config;
pub mod dictionary;
pub mod logging;
pub mod server;
pub mod shutdown;

// Re-export log macros for use throughout the crate
pub use log::{debug, error, info, trace, warn};
