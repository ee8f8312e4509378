//! Implied-volatility solver
//!
//! Newton-Raphson root-finding on volatility, using the Black-Scholes pricer
//! as the objective `f(vol) = price(vol) - market_price` and analytic vega as
//! its derivative. The iterate is clamped to `[min_vol, max_vol]` after every
//! step so the pricer's domain preconditions hold throughout the search.
//!
//! There is no closed form; correctness is operational: for any target vol in
//! the clamp range, feeding `price(target)` back in recovers the target
//! within the solver tolerance.

use crate::engine::config::SolverConfig;
use crate::engine::types::OptionType;
use crate::error::{EngineError, EngineResult};
use crate::models::{bs, greeks};

/// Vega below this magnitude cannot support a Newton step
const VEGA_FLOOR: f64 = 1e-12;

/// Solve for the volatility implied by an observed market price, using the
/// default solver settings (tolerance 1e-4, 100 iterations, clamp [0.01, 5.0]).
pub fn implied_volatility(
    market_price: f64,
    spot: f64,
    strike: f64,
    time_to_expiry: f64,
    risk_free_rate: f64,
    option_type: OptionType,
) -> EngineResult<f64> {
    implied_volatility_with_config(
        market_price,
        spot,
        strike,
        time_to_expiry,
        risk_free_rate,
        option_type,
        &SolverConfig::default(),
    )
}

/// Solve for implied volatility with explicit solver settings.
///
/// Starts from the fixed `initial_vol` guess and iterates
/// `vol <- vol - f(vol)/vega(vol)`, clamping after every step. Returns a
/// convergence error carrying the last attempted volatility and the
/// iteration count when the budget is exhausted or vega collapses to zero
/// (a clamped vol pinned at a boundary can drive vega there).
pub fn implied_volatility_with_config(
    market_price: f64,
    spot: f64,
    strike: f64,
    time_to_expiry: f64,
    risk_free_rate: f64,
    option_type: OptionType,
    config: &SolverConfig,
) -> EngineResult<f64> {
    let mut vol = config.initial_vol.clamp(config.min_vol, config.max_vol);

    for iteration in 0..config.max_iterations {
        let price = bs::price(
            spot,
            strike,
            time_to_expiry,
            risk_free_rate,
            vol,
            option_type,
        )?;
        let diff = price - market_price;

        if diff.abs() < config.tolerance {
            return Ok(vol);
        }

        let vega = greeks::vega(spot, strike, time_to_expiry, risk_free_rate, vol)?;
        if vega.abs() < VEGA_FLOOR {
            // A Newton step would divide by (near-)zero; treat as a failed
            // solve rather than propagate infinity.
            return Err(EngineError::Convergence {
                last_vol: vol,
                iterations: iteration,
            });
        }

        vol = (vol - diff / vega).clamp(config.min_vol, config.max_vol);
    }

    Err(EngineError::Convergence {
        last_vol: vol,
        iterations: config.max_iterations,
    })
}
