// Black-Scholes pricing for European calls and puts.  The solver and the
// surface builder both invert this module, so domain violations are rejected
// here rather than allowed to surface as NaN further up.

use crate::engine::types::OptionType;
use crate::error::{EngineError, EngineResult};
use crate::models::utils::norm_cdf;

/// Reject inputs outside the Black-Scholes domain.
pub(crate) fn validate_inputs(
    spot: f64,
    strike: f64,
    time_to_expiry: f64,
    volatility: f64,
) -> EngineResult<()> {
    if !(spot > 0.0) {
        return Err(EngineError::domain(format!("Non-positive spot: {}", spot)));
    }
    if !(strike > 0.0) {
        return Err(EngineError::domain(format!(
            "Non-positive strike: {}",
            strike
        )));
    }
    if !(time_to_expiry > 0.0) {
        return Err(EngineError::domain(format!(
            "Non-positive time to expiry: {}",
            time_to_expiry
        )));
    }
    if !(volatility > 0.0) {
        return Err(EngineError::domain(format!(
            "Non-positive volatility: {}",
            volatility
        )));
    }
    Ok(())
}

/// Black-Scholes d1 parameter
pub fn d1(spot: f64, strike: f64, time_to_expiry: f64, rate: f64, vol: f64) -> f64 {
    ((spot / strike).ln() + (rate + 0.5 * vol * vol) * time_to_expiry)
        / (vol * time_to_expiry.sqrt())
}

/// Black-Scholes d2 parameter
pub fn d2(spot: f64, strike: f64, time_to_expiry: f64, rate: f64, vol: f64) -> f64 {
    d1(spot, strike, time_to_expiry, rate, vol) - vol * time_to_expiry.sqrt()
}

/// Theoretical price of a European option under Black-Scholes assumptions.
///
/// Returns a domain error for non-positive spot, strike, time to expiry or
/// volatility. Deterministic and side-effect free given its inputs.
pub fn price(
    spot: f64,
    strike: f64,
    time_to_expiry: f64,
    risk_free_rate: f64,
    volatility: f64,
    option_type: OptionType,
) -> EngineResult<f64> {
    validate_inputs(spot, strike, time_to_expiry, volatility)?;

    let d1 = d1(spot, strike, time_to_expiry, risk_free_rate, volatility);
    let d2 = d1 - volatility * time_to_expiry.sqrt();
    let df = (-risk_free_rate * time_to_expiry).exp();

    let price = match option_type {
        OptionType::Call => spot * norm_cdf(d1) - strike * df * norm_cdf(d2),
        OptionType::Put => strike * df * norm_cdf(-d2) - spot * norm_cdf(-d1),
    };

    Ok(price)
}
