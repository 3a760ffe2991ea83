//! Toy quote model used by the demo harness and as a test fixture.

use bigdecimal::BigDecimal;

use crate::errors::Result;
use crate::quote::Quoter;

/// Quote model with a linearly decaying edge.
///
/// `edge_bps(amount) = base_edge_bps - amount / decay_divisor`, and the
/// round trip returns `amount * (1 + edge_bps / 10_000)`. The edge turns
/// negative once `amount` exceeds `base_edge_bps * decay_divisor`, so
/// oversized trades round-trip to less than they put in. That is the
/// model, not an error.
#[derive(Debug, Clone)]
pub struct DecayingEdgeQuote {
    base_edge_bps: BigDecimal,
    decay_divisor: BigDecimal,
}

impl DecayingEdgeQuote {
    pub fn new(base_edge_bps: BigDecimal, decay_divisor: BigDecimal) -> Self {
        Self {
            base_edge_bps,
            decay_divisor,
        }
    }

    /// Edge in basis points quoted at `amount`.
    pub fn edge_bps_at(&self, amount: &BigDecimal) -> BigDecimal {
        &self.base_edge_bps - amount / &self.decay_divisor
    }
}

impl Default for DecayingEdgeQuote {
    /// Demo parameters: 8 bps of edge decaying over 100k units.
    fn default() -> Self {
        Self::new(BigDecimal::from(8), BigDecimal::from(100_000))
    }
}

impl Quoter for DecayingEdgeQuote {
    fn quote(&self, amount_in: &BigDecimal) -> Result<BigDecimal> {
        let edge_bps = self.edge_bps_at(amount_in);
        Ok(amount_in * (BigDecimal::from(1) + edge_bps / BigDecimal::from(10_000)))
    }
}
