//! Configuration loader for the demo harness.

use crate::errors::{AppError, Result};
use crate::sizing::FeeSchedule;
use crate::utils::parse_sizes_list;

/// Consolidated settings for a standalone sizing run.
#[derive(Debug, Clone)]
pub struct SizerConfig {
    /// Candidate flash-loan sizes, in asset units.
    pub candidates: Vec<String>,
    /// Proportional fee schedule for the round trip.
    pub fees: FeeSchedule,
    /// Base edge of the toy quote model, in basis points.
    pub base_edge_bps: u32,
    /// Size over which one basis point of edge decays in the toy model.
    pub edge_decay_divisor: u64,
    /// Probe lines at or below this edge are logged without the highlight.
    pub min_edge_bps: i64,
}

impl SizerConfig {
    /// Load configuration from environment variables, falling back to the
    /// demo defaults for anything unset.
    pub fn load() -> Result<Self> {
        let sizes_raw =
            std::env::var("SIZES").unwrap_or_else(|_| "5000,10000,20000,40000,80000".into());
        Ok(Self {
            candidates: parse_sizes_list(&sizes_raw),
            fees: load_fees()?,
            base_edge_bps: env_or("BASE_EDGE_BPS", 8)?,
            edge_decay_divisor: env_or("EDGE_DECAY_DIVISOR", 100_000)?,
            min_edge_bps: env_or("MIN_EDGE_BPS", 25)?,
        })
    }
}

/// Fee schedule from the environment. `FEES_JSON` (a serialized
/// [`FeeSchedule`]) overrides the individual per-venue variables.
pub fn load_fees() -> Result<FeeSchedule> {
    if let Ok(raw) = std::env::var("FEES_JSON") {
        return Ok(serde_json::from_str(&raw)?);
    }
    Ok(FeeSchedule {
        aave_bps: env_or("AAVE_BPS", 9)?,
        v3_fee: env_or("V3_FEE", 5)?,
        v2_fee: env_or("V2_FEE", 25)?,
        extra_bps: env_or("EXTRA_BPS", 10)?,
    })
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> Result<T> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Config(format!("{key} must be a valid number, got {raw:?}"))),
        Err(_) => Ok(default),
    }
}
