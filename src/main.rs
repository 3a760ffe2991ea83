use anyhow::Result;
use bigdecimal::BigDecimal;
use flash_sizer::{
    config::SizerConfig,
    quote::DecayingEdgeQuote,
    sizing::{optimal_size, probe_candidates},
    utils,
};
use num_traits::ToPrimitive;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    utils::init_logging();

    let config = SizerConfig::load()?;
    tracing::info!(
        candidates = config.candidates.len(),
        total_fee_bps = config.fees.total_bps(),
        min_edge_bps = config.min_edge_bps,
        "[INIT] flash-sizer starting"
    );

    // Toy decaying-edge quoter stands in for live QuoterV2 / getAmountsOut
    // round trips; swap in any `Quoter` to size against real venues.
    let quoter = DecayingEdgeQuote::new(
        BigDecimal::from(config.base_edge_bps),
        BigDecimal::from(config.edge_decay_divisor),
    );

    let report = probe_candidates(&config.candidates, &quoter, &config.fees)?;
    for eval in &report {
        let edge_bps = eval.edge_bps.to_f64().unwrap_or(0.0);
        if edge_bps > config.min_edge_bps as f64 {
            tracing::info!(size = %eval.amount, edge_bps, net = %eval.net, "[PROBE] edge above threshold");
        } else {
            tracing::info!(size = %eval.amount, edge_bps, net = %eval.net, "[PROBE]");
        }
    }

    let best = optimal_size(&config.candidates, &quoter, &config.fees)?;
    println!(
        "best_amt: {} net_profit_units: {}",
        best.amount, best.net_profit
    );
    Ok(())
}
