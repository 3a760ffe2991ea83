//! Quote-side abstractions: the injected round-trip pricing capability.

use bigdecimal::BigDecimal;

use crate::errors::Result;

pub mod toy;

pub use toy::DecayingEdgeQuote;

/// Round-trip pricing capability injected into the sizing layer.
///
/// Maps an input amount to the round-trip output in the same units
/// (e.g. USDC in, USDC back after the V3 and V2 legs). Implementations
/// are black boxes to the selector; any error they return is propagated
/// unchanged to the caller.
pub trait Quoter {
    fn quote(&self, amount_in: &BigDecimal) -> Result<BigDecimal>;
}

/// Plain closures and functions work as quoters.
impl<F> Quoter for F
where
    F: Fn(&BigDecimal) -> Result<BigDecimal>,
{
    fn quote(&self, amount_in: &BigDecimal) -> Result<BigDecimal> {
        self(amount_in)
    }
}
