pub mod bs;
pub mod greeks;

/// Shared math helpers used by the pricing and solver modules
pub mod utils {
    use chrono::{DateTime, Utc};

    /// Standard normal cumulative distribution function
    pub fn norm_cdf(x: f64) -> f64 {
        // 0.5 * [1 + erf(x / sqrt(2))]
        0.5 * (1.0 + libm::erf(x / (2.0_f64).sqrt()))
    }

    /// Standard normal probability density function
    pub fn norm_pdf(x: f64) -> f64 {
        (-0.5 * x * x).exp() / (2.0 * std::f64::consts::PI).sqrt()
    }

    /// Calculate log-moneyness: ln(K/S)
    pub fn log_moneyness(strike: f64, spot: f64) -> f64 {
        (strike / spot).ln()
    }

    /// Year fraction between `now` and `expiry` under a calendar day count.
    ///
    /// Elapsed seconds divided by `86_400 * days_in_year`; negative when the
    /// contract has already expired. The day count (365 by default) comes
    /// from [`EngineConfig`](crate::EngineConfig).
    pub fn year_fraction(expiry: DateTime<Utc>, now: DateTime<Utc>, days_in_year: f64) -> f64 {
        let seconds = (expiry - now).num_seconds() as f64;
        seconds / (86_400.0 * days_in_year)
    }

}
