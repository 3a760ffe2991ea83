//! Flash-loan size selection over a fixed candidate grid.
//!
//! Given a round-trip quoting capability and a proportional fee schedule,
//! this crate scans a caller-supplied list of candidate sizes and reports
//! the one with the greatest net profit. No search is performed outside
//! the candidate set.

pub mod config;
pub mod errors;
pub mod models;
pub mod quote;
pub mod sizing;
pub mod utils;
