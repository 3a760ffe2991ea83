//! Best-candidate selection over a fixed set of flash-loan sizes.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_traits::Zero;

use crate::errors::{AppError, Result};
use crate::models::CandidateEvaluation;
use crate::quote::Quoter;
use crate::sizing::types::{FeeSchedule, SizingOutcome};

/// Evaluate a single candidate size against the quoter and fee schedule.
///
/// `gross = quote(amount) - amount`, `net = gross - fees.cost(amount)`.
/// Quoter failures propagate unchanged; nothing is retried or suppressed.
pub fn evaluate_candidate<Q>(
    amount: BigDecimal,
    quoter: &Q,
    fees: &FeeSchedule,
) -> Result<CandidateEvaluation>
where
    Q: Quoter + ?Sized,
{
    let round_trip = quoter.quote(&amount)?;
    let gross = &round_trip - &amount;
    let fee_cost = fees.cost(&amount);
    let net = &gross - &fee_cost;
    // edge_bps = (round_trip - amount) * 10_000 / amount; zero amount has no edge
    let edge_bps = if amount.is_zero() {
        BigDecimal::zero()
    } else {
        &gross * BigDecimal::from(10_000u32) / &amount
    };
    Ok(CandidateEvaluation {
        amount,
        round_trip,
        gross,
        fee_cost,
        net,
        edge_bps,
    })
}

/// Evaluate every candidate in input order and return the full report.
///
/// Candidates are decimal-string literals; a malformed entry is a parse
/// error, never a silently-coerced zero.
pub fn probe_candidates<S, Q>(
    candidates: &[S],
    quoter: &Q,
    fees: &FeeSchedule,
) -> Result<Vec<CandidateEvaluation>>
where
    S: AsRef<str>,
    Q: Quoter + ?Sized,
{
    if candidates.is_empty() {
        return Err(AppError::EmptyCandidates);
    }
    candidates
        .iter()
        .map(|raw| evaluate_candidate(parse_amount(raw.as_ref())?, quoter, fees))
        .collect()
}

/// Pick the candidate with the strictly greatest net profit.
///
/// Candidates are scanned in input order; a later candidate replaces the
/// running best only on a strict improvement, so ties keep the earliest.
/// An empty candidate list is an explicit error, not a sentinel pair.
pub fn optimal_size<S, Q>(candidates: &[S], quoter: &Q, fees: &FeeSchedule) -> Result<SizingOutcome>
where
    S: AsRef<str>,
    Q: Quoter + ?Sized,
{
    let mut best: Option<SizingOutcome> = None;
    for raw in candidates {
        let eval = evaluate_candidate(parse_amount(raw.as_ref())?, quoter, fees)?;
        let better = match &best {
            Some(current) => eval.net > current.net_profit,
            None => true,
        };
        if better {
            best = Some(SizingOutcome {
                amount: eval.amount,
                net_profit: eval.net,
            });
        }
    }
    best.ok_or(AppError::EmptyCandidates)
}

fn parse_amount(raw: &str) -> Result<BigDecimal> {
    Ok(BigDecimal::from_str(raw.trim())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::DecayingEdgeQuote;

    fn bd(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    fn identity_quote(amount: &BigDecimal) -> Result<BigDecimal> {
        Ok(amount.clone())
    }

    fn zero_fees() -> FeeSchedule {
        FeeSchedule {
            aave_bps: 0,
            v3_fee: 0,
            v2_fee: 0,
            extra_bps: 0,
        }
    }

    fn reference_fees() -> FeeSchedule {
        FeeSchedule {
            aave_bps: 9,
            v3_fee: 5,
            v2_fee: 25,
            extra_bps: 10,
        }
    }

    #[test]
    fn identity_quote_zero_fees_ties_go_to_first() {
        let candidates = ["100", "250", "100"];
        let report = probe_candidates(&candidates, &identity_quote, &zero_fees()).unwrap();
        assert!(report.iter().all(|e| e.net.is_zero()));

        let best = optimal_size(&candidates, &identity_quote, &zero_fees()).unwrap();
        assert_eq!(best.amount, bd("100"));
        assert!(best.net_profit.is_zero());
    }

    #[test]
    fn reordering_equal_candidates_changes_the_winner() {
        let fees = zero_fees();
        let first = optimal_size(&["250", "100"], &identity_quote, &fees).unwrap();
        assert_eq!(first.amount, bd("250"));
        let second = optimal_size(&["100", "250"], &identity_quote, &fees).unwrap();
        assert_eq!(second.amount, bd("100"));
    }

    #[test]
    fn raising_any_single_fee_never_raises_net() {
        let quoter = DecayingEdgeQuote::default();
        let base = reference_fees();
        let bumped = [
            FeeSchedule {
                aave_bps: base.aave_bps + 7,
                ..base
            },
            FeeSchedule {
                v3_fee: base.v3_fee + 7,
                ..base
            },
            FeeSchedule {
                v2_fee: base.v2_fee + 7,
                ..base
            },
            FeeSchedule {
                extra_bps: base.extra_bps + 7,
                ..base
            },
        ];
        for amount in ["5000", "10000", "80000"] {
            let eval = evaluate_candidate(bd(amount), &quoter, &base).unwrap();
            for fees in &bumped {
                let worse = evaluate_candidate(bd(amount), &quoter, fees).unwrap();
                assert!(worse.net < eval.net);
            }
        }
    }

    #[test]
    fn reference_vector_is_deterministic_and_exact() {
        let candidates = ["5000", "10000", "20000", "40000", "80000"];
        let quoter = DecayingEdgeQuote::default();
        let fees = reference_fees();

        // At 5000 units: edge 7.95 bps -> gross 3.975; 49 bps of fees = 24.5.
        // Every candidate nets negative here, so the shallowest loss wins.
        let expected_net = bd("-20.525");
        for _ in 0..3 {
            let best = optimal_size(&candidates, &quoter, &fees).unwrap();
            assert_eq!(best.amount, bd("5000"));
            assert_eq!(best.net_profit, expected_net);
        }
    }

    #[test]
    fn report_preserves_input_order_and_edges_decay() {
        let candidates = ["5000", "10000", "20000", "40000", "80000"];
        let report =
            probe_candidates(&candidates, &DecayingEdgeQuote::default(), &reference_fees())
                .unwrap();
        assert_eq!(report.len(), candidates.len());
        for (eval, raw) in report.iter().zip(candidates) {
            assert_eq!(eval.amount, bd(raw));
        }
        for pair in report.windows(2) {
            assert!(pair[0].edge_bps > pair[1].edge_bps);
        }
        assert_eq!(report[0].edge_bps, bd("7.95"));
    }

    #[test]
    fn choice_value_is_order_invariant_for_distinct_nets() {
        let quoter = DecayingEdgeQuote::default();
        let fees = reference_fees();
        let forward =
            optimal_size(&["5000", "10000", "20000", "40000", "80000"], &quoter, &fees).unwrap();
        let reversed =
            optimal_size(&["80000", "40000", "20000", "10000", "5000"], &quoter, &fees).unwrap();
        assert_eq!(forward.amount, reversed.amount);
        assert_eq!(forward.net_profit, reversed.net_profit);
    }

    #[test]
    fn malformed_candidate_is_a_parse_error() {
        let err = optimal_size(&["5000", "abc"], &identity_quote, &zero_fees()).unwrap_err();
        assert!(matches!(err, AppError::ParseDecimal(_)));
    }

    #[test]
    fn empty_candidate_list_is_rejected() {
        let candidates: [&str; 0] = [];
        let err = optimal_size(&candidates, &identity_quote, &zero_fees()).unwrap_err();
        assert!(matches!(err, AppError::EmptyCandidates));

        let err = probe_candidates(&candidates, &identity_quote, &zero_fees()).unwrap_err();
        assert!(matches!(err, AppError::EmptyCandidates));
    }

    #[test]
    fn quoter_failure_propagates_unchanged() {
        let failing = |_: &BigDecimal| -> Result<BigDecimal> {
            Err(AppError::Quote("venue unavailable".into()))
        };
        let err = optimal_size(&["5000"], &failing, &zero_fees()).unwrap_err();
        assert!(matches!(err, AppError::Quote(msg) if msg == "venue unavailable"));
    }

    #[test]
    fn zero_amount_has_zero_edge() {
        let eval = evaluate_candidate(bd("0"), &identity_quote, &reference_fees()).unwrap();
        assert!(eval.edge_bps.is_zero());
        assert!(eval.net.is_zero());
    }
}
