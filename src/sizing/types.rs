use bigdecimal::BigDecimal;
use serde::Deserialize;

/// Proportional fee schedule for one flash-loan round trip.
///
/// All rates are basis points, an integer numerator over 10,000.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FeeSchedule {
    /// Aave flash-loan premium.
    pub aave_bps: u32,
    /// Uniswap V3 pool fee.
    pub v3_fee: u32,
    /// Uniswap V2 pair fee.
    pub v2_fee: u32,
    /// Catch-all buffer (keeper margin, builder tip, etc.).
    pub extra_bps: u32,
}

impl FeeSchedule {
    /// Sum of all four rates, in basis points.
    pub fn total_bps(&self) -> u32 {
        self.aave_bps + self.v3_fee + self.v2_fee + self.extra_bps
    }

    /// Total proportional cost charged on `amount`.
    pub fn cost(&self, amount: &BigDecimal) -> BigDecimal {
        amount * BigDecimal::from(self.total_bps()) / BigDecimal::from(10_000u32)
    }
}

/// Result of a best-candidate selection.
#[derive(Debug, Clone)]
pub struct SizingOutcome {
    /// The winning candidate amount.
    pub amount: BigDecimal,
    /// Net profit at that amount (gross minus fees).
    pub net_profit: BigDecimal,
}
