use chrono::{DateTime, Utc};

/// Option type (Call or Put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Intrinsic value at the given spot: the payoff from immediate exercise
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }
}

/// An option contract as supplied by the market-data layer.
///
/// Immutable input to the engine; the engine never caches or mutates it.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionContract {
    /// Contract symbol (e.g., "BTC-31MAR23-50000-C")
    pub symbol: String,
    /// Option type (Call/Put)
    pub option_type: OptionType,
    /// Strike price
    pub strike: f64,
    /// Expiration timestamp
    pub expiry: DateTime<Utc>,
    /// Underlying asset identifier (e.g., "BTC/USD")
    pub underlying: String,
    /// Last traded price, if one was observed
    pub last_price: Option<f64>,
}

impl OptionContract {
    pub fn new(
        symbol: impl Into<String>,
        option_type: OptionType,
        strike: f64,
        expiry: DateTime<Utc>,
        underlying: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            option_type,
            strike,
            expiry,
            underlying: underlying.into(),
            last_price: None,
        }
    }

    /// Attach an observed last-traded price
    pub fn with_last_price(mut self, price: f64) -> Self {
        self.last_price = Some(price);
        self
    }

    /// Time to expiry in years from the injected clock
    pub fn time_to_expiry(&self, now: DateTime<Utc>, days_in_year: f64) -> f64 {
        crate::models::utils::year_fraction(self.expiry, now, days_in_year)
    }

    /// Is this option in the money at the given spot?
    pub fn is_itm(&self, spot: f64) -> bool {
        match self.option_type {
            OptionType::Call => spot > self.strike,
            OptionType::Put => spot < self.strike,
        }
    }
}

/// Analytic sensitivities of an option's theoretical price.
///
/// A pure value computed fresh per pricing call; never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    /// Sensitivity to spot: dPrice/dSpot
    pub delta: f64,
    /// Convexity in spot: d²Price/dSpot²
    pub gamma: f64,
    /// Time decay: dPrice/dTime, per year
    pub theta: f64,
    /// Sensitivity to volatility: dPrice/dVol, per unit vol
    pub vega: f64,
    /// Sensitivity to the risk-free rate, if computed
    pub rho: Option<f64>,
}

/// Full valuation of a single contract: theoretical price, Greeks, and the
/// intrinsic/extrinsic decomposition.
///
/// Invariants: `theoretical_price == intrinsic_value + extrinsic_value`
/// (exact by construction) and `intrinsic_value >= 0`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionAnalysis {
    /// Contract symbol
    pub symbol: String,
    /// Option type (Call/Put)
    pub option_type: OptionType,
    /// Strike price
    pub strike: f64,
    /// Expiration timestamp
    pub expiry: DateTime<Utc>,
    /// Underlying asset identifier
    pub underlying: String,
    /// Analytic sensitivities at the analysis volatility
    pub greeks: Greeks,
    /// Volatility used for the valuation (solved from the market price when
    /// one is available, otherwise the solver's initial guess)
    pub implied_volatility: f64,
    /// Black-Scholes theoretical price
    pub theoretical_price: f64,
    /// Payoff from immediate exercise
    pub intrinsic_value: f64,
    /// Time-value component: theoretical price minus intrinsic value
    pub extrinsic_value: f64,
}

/// One point of a volatility surface: (strike, expiry, implied volatility).
///
/// `build_surface` returns one point per input contract, in input order.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VolatilitySurfacePoint {
    /// Strike price of the originating contract
    pub strike: f64,
    /// Expiration timestamp of the originating contract
    pub expiry: DateTime<Utc>,
    /// Implied volatility solved from the contract's market price
    pub implied_volatility: f64,
}
