//! Volatility-surface construction
//!
//! Maps a batch of contracts with heterogeneous strikes and expiries to
//! per-point implied volatilities. The solves are independent, so the batch
//! runs as a data-parallel map; the output preserves input order 1:1.

use chrono::{DateTime, Utc};
use rayon::prelude::*;

use crate::engine::config::EngineConfig;
use crate::engine::iv::implied_volatility_with_config;
use crate::engine::types::{OptionContract, VolatilitySurfacePoint};
use crate::error::{EngineError, EngineResult};

/// Build a volatility surface from a batch of contracts.
///
/// For each contract the time to expiry is computed from its expiry
/// timestamp and the injected `now`, then its implied volatility is solved
/// from the last traded price. A contract without an observed price is
/// solved against 0.0 (after a stderr warning), which generally fails to
/// converge or lands on the volatility floor; callers are expected to
/// validate prices upstream.
///
/// The batch aborts on the first per-contract failure: the returned error is
/// an [`EngineError::Batch`] naming the failing contract's symbol. On
/// success the points correspond to the input contracts in input order.
pub fn build_surface(
    contracts: &[OptionContract],
    spot_price: f64,
    config: &EngineConfig,
    now: DateTime<Utc>,
) -> EngineResult<Vec<VolatilitySurfacePoint>> {
    for contract in contracts {
        if contract.last_price.is_none() {
            eprintln!(
                "Warning: contract {} has no last traded price; solving against 0.0",
                contract.symbol
            );
        }
    }

    if config.verbosity > 0 {
        println!(
            "Building surface: {} contracts, spot {:.4}",
            contracts.len(),
            spot_price
        );
    }

    contracts
        .par_iter()
        .map(|contract| {
            let time_to_expiry = contract.time_to_expiry(now, config.days_in_year);
            let market_price = contract.last_price.unwrap_or(0.0);

            let implied_volatility = implied_volatility_with_config(
                market_price,
                spot_price,
                contract.strike,
                time_to_expiry,
                config.risk_free_rate,
                contract.option_type,
                &config.solver,
            )
            .map_err(|e| EngineError::batch(contract.symbol.clone(), e))?;

            Ok(VolatilitySurfacePoint {
                strike: contract.strike,
                expiry: contract.expiry,
                implied_volatility,
            })
        })
        .collect()
}
