//! Analytic Greeks for the Black-Scholes model
//!
//! Each Greek is an independent pure function that recomputes `d1`/`d2` from
//! its inputs; nothing is cached across calls. All functions share the
//! pricer's domain preconditions and error policy.
//!
//! Units: theta is per year, vega is per unit of volatility, rho is per unit
//! of rate. Callers wanting per-day theta or per-percent vega rescale
//! themselves.

use statrs::distribution::{ContinuousCDF, Normal};

use crate::engine::types::{Greeks, OptionType};
use crate::error::EngineResult;
use crate::models::bs::{d1, d2, validate_inputs};
use crate::models::utils::norm_pdf;

/// Sensitivity of the option price to spot.
///
/// Call delta lies in (0, 1), put delta in (-1, 0).
pub fn delta(
    spot: f64,
    strike: f64,
    time_to_expiry: f64,
    risk_free_rate: f64,
    volatility: f64,
    option_type: OptionType,
) -> EngineResult<f64> {
    validate_inputs(spot, strike, time_to_expiry, volatility)?;

    let normal = Normal::new(0.0, 1.0).unwrap();
    let d1 = d1(spot, strike, time_to_expiry, risk_free_rate, volatility);

    Ok(match option_type {
        OptionType::Call => normal.cdf(d1),
        OptionType::Put => normal.cdf(d1) - 1.0,
    })
}

/// Convexity of the option price in spot. Identical for calls and puts.
pub fn gamma(
    spot: f64,
    strike: f64,
    time_to_expiry: f64,
    risk_free_rate: f64,
    volatility: f64,
) -> EngineResult<f64> {
    validate_inputs(spot, strike, time_to_expiry, volatility)?;

    let d1 = d1(spot, strike, time_to_expiry, risk_free_rate, volatility);
    Ok(norm_pdf(d1) / (spot * volatility * time_to_expiry.sqrt()))
}

/// Time decay of the option price, per year. Negative for long positions.
pub fn theta(
    spot: f64,
    strike: f64,
    time_to_expiry: f64,
    risk_free_rate: f64,
    volatility: f64,
    option_type: OptionType,
) -> EngineResult<f64> {
    validate_inputs(spot, strike, time_to_expiry, volatility)?;

    let normal = Normal::new(0.0, 1.0).unwrap();
    let d1 = d1(spot, strike, time_to_expiry, risk_free_rate, volatility);
    let d2 = d2(spot, strike, time_to_expiry, risk_free_rate, volatility);
    let df = (-risk_free_rate * time_to_expiry).exp();

    let term1 = -(spot * volatility * norm_pdf(d1)) / (2.0 * time_to_expiry.sqrt());

    Ok(match option_type {
        OptionType::Call => term1 - risk_free_rate * strike * df * normal.cdf(d2),
        OptionType::Put => term1 + risk_free_rate * strike * df * normal.cdf(-d2),
    })
}

/// Sensitivity of the option price to volatility, per unit of vol.
/// Identical for calls and puts; always positive in the valid domain.
pub fn vega(
    spot: f64,
    strike: f64,
    time_to_expiry: f64,
    risk_free_rate: f64,
    volatility: f64,
) -> EngineResult<f64> {
    validate_inputs(spot, strike, time_to_expiry, volatility)?;

    let d1 = d1(spot, strike, time_to_expiry, risk_free_rate, volatility);
    Ok(spot * time_to_expiry.sqrt() * norm_pdf(d1))
}

/// Sensitivity of the option price to the risk-free rate, per unit of rate.
pub fn rho(
    spot: f64,
    strike: f64,
    time_to_expiry: f64,
    risk_free_rate: f64,
    volatility: f64,
    option_type: OptionType,
) -> EngineResult<f64> {
    validate_inputs(spot, strike, time_to_expiry, volatility)?;

    let normal = Normal::new(0.0, 1.0).unwrap();
    let d2 = d2(spot, strike, time_to_expiry, risk_free_rate, volatility);
    let df = (-risk_free_rate * time_to_expiry).exp();

    Ok(match option_type {
        OptionType::Call => strike * time_to_expiry * df * normal.cdf(d2),
        OptionType::Put => -strike * time_to_expiry * df * normal.cdf(-d2),
    })
}

/// Compute the full set of Greeks in one call.
pub fn greeks(
    spot: f64,
    strike: f64,
    time_to_expiry: f64,
    risk_free_rate: f64,
    volatility: f64,
    option_type: OptionType,
) -> EngineResult<Greeks> {
    Ok(Greeks {
        delta: delta(
            spot,
            strike,
            time_to_expiry,
            risk_free_rate,
            volatility,
            option_type,
        )?,
        gamma: gamma(spot, strike, time_to_expiry, risk_free_rate, volatility)?,
        theta: theta(
            spot,
            strike,
            time_to_expiry,
            risk_free_rate,
            volatility,
            option_type,
        )?,
        vega: vega(spot, strike, time_to_expiry, risk_free_rate, volatility)?,
        rho: Some(rho(
            spot,
            strike,
            time_to_expiry,
            risk_free_rate,
            volatility,
            option_type,
        )?),
    })
}
