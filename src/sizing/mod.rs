pub mod selector;
pub mod types;

pub use selector::{evaluate_candidate, optimal_size, probe_candidates};
pub use types::{FeeSchedule, SizingOutcome};
