//! Per-contract valuation
//!
//! Combines the pricer, the Greeks calculator and the IV solver into a full
//! [`OptionAnalysis`] for a single contract and spot observation.

use chrono::{DateTime, Utc};

use crate::engine::config::EngineConfig;
use crate::engine::iv::implied_volatility_with_config;
use crate::engine::types::{OptionAnalysis, OptionContract};
use crate::error::EngineResult;
use crate::models::{bs, greeks};

/// Value a single contract against a spot price.
///
/// When the contract carries a positive `last_price`, its implied volatility
/// is solved first and the theoretical price and Greeks are computed at that
/// vol. Without a market price the solver's fixed initial guess is used
/// instead. `now` is the injected clock for the time-to-expiry computation.
pub fn analyze_option(
    contract: &OptionContract,
    spot_price: f64,
    config: &EngineConfig,
    now: DateTime<Utc>,
) -> EngineResult<OptionAnalysis> {
    let time_to_expiry = contract.time_to_expiry(now, config.days_in_year);

    let implied_volatility = match contract.last_price {
        Some(market_price) if market_price > 0.0 => implied_volatility_with_config(
            market_price,
            spot_price,
            contract.strike,
            time_to_expiry,
            config.risk_free_rate,
            contract.option_type,
            &config.solver,
        )?,
        _ => config.solver.initial_vol,
    };

    let theoretical_price = bs::price(
        spot_price,
        contract.strike,
        time_to_expiry,
        config.risk_free_rate,
        implied_volatility,
        contract.option_type,
    )?;

    let greeks = greeks::greeks(
        spot_price,
        contract.strike,
        time_to_expiry,
        config.risk_free_rate,
        implied_volatility,
        contract.option_type,
    )?;

    let intrinsic_value = contract.option_type.intrinsic(spot_price, contract.strike);

    Ok(OptionAnalysis {
        symbol: contract.symbol.clone(),
        option_type: contract.option_type,
        strike: contract.strike,
        expiry: contract.expiry,
        underlying: contract.underlying.clone(),
        greeks,
        implied_volatility,
        theoretical_price,
        intrinsic_value,
        extrinsic_value: theoretical_price - intrinsic_value,
    })
}
