//! Shared data structures used throughout the application.

use bigdecimal::BigDecimal;

/// Full profit breakdown for a single candidate size.
#[derive(Debug, Clone)]
pub struct CandidateEvaluation {
    /// Candidate input amount, in asset units.
    pub amount: BigDecimal,
    /// Round-trip output quoted for `amount` (same units).
    pub round_trip: BigDecimal,
    /// Output minus input, before fees.
    pub gross: BigDecimal,
    /// Total proportional fees charged on the input amount.
    pub fee_cost: BigDecimal,
    /// Gross minus fees.
    pub net: BigDecimal,
    /// Round-trip surplus relative to input, in basis points.
    pub edge_bps: BigDecimal,
}
