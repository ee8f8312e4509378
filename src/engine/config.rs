/// Newton-Raphson solver configuration
///
/// Controls the implied-volatility search: price tolerance, iteration
/// budget, the fixed initial guess, and the volatility clamp that keeps
/// every iterate inside the pricer's domain.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct SolverConfig {
    /// Absolute price tolerance for convergence
    #[cfg_attr(feature = "serde", serde(default = "default_tolerance"))]
    pub tolerance: f64,

    /// Maximum Newton-Raphson iterations before a convergence error
    #[cfg_attr(feature = "serde", serde(default = "default_max_iterations"))]
    pub max_iterations: usize,

    /// Fixed starting volatility (not derived from the inputs)
    #[cfg_attr(feature = "serde", serde(default = "default_initial_vol"))]
    pub initial_vol: f64,

    /// Lower volatility clamp, applied after every step
    #[cfg_attr(feature = "serde", serde(default = "default_min_vol"))]
    pub min_vol: f64,

    /// Upper volatility clamp, applied after every step
    #[cfg_attr(feature = "serde", serde(default = "default_max_vol"))]
    pub max_vol: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
            initial_vol: default_initial_vol(),
            min_vol: default_min_vol(),
            max_vol: default_max_vol(),
        }
    }
}

/// Main configuration for the pricing engine
///
/// All values are plain numeric parameters passed by the caller; the engine
/// never reads ambient or global state.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct EngineConfig {
    /// Annualized risk-free rate (decimal, e.g. 0.05 for 5%)
    #[cfg_attr(feature = "serde", serde(default = "default_risk_free_rate"))]
    pub risk_free_rate: f64,

    /// Day-count denominator for time-to-expiry
    #[cfg_attr(feature = "serde", serde(default = "default_days_in_year"))]
    pub days_in_year: f64,

    /// Verbosity level (0=silent, 1=progress)
    #[cfg_attr(feature = "serde", serde(default))]
    pub verbosity: u8,

    /// Implied-volatility solver settings
    #[cfg_attr(feature = "serde", serde(default))]
    pub solver: SolverConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            risk_free_rate: default_risk_free_rate(),
            days_in_year: default_days_in_year(),
            verbosity: 0,
            solver: SolverConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Production configuration: tight tolerance, generous iteration budget
    pub fn production() -> Self {
        Self {
            solver: SolverConfig {
                tolerance: 1e-6,
                max_iterations: 200,
                ..SolverConfig::default()
            },
            ..Self::default()
        }
    }

    /// Fast configuration for development and testing
    pub fn fast() -> Self {
        Self {
            solver: SolverConfig {
                tolerance: 1e-4,
                max_iterations: 100,
                ..SolverConfig::default()
            },
            ..Self::default()
        }
    }

    /// Minimal configuration for quick validation and debugging
    pub fn minimal() -> Self {
        Self {
            solver: SolverConfig {
                tolerance: 1e-3,
                max_iterations: 50,
                ..SolverConfig::default()
            },
            ..Self::default()
        }
    }

    /// Parse an engine configuration from a TOML fragment.
    ///
    /// Missing fields fall back to the documented defaults.
    ///
    /// ```
    /// use pricing_lib::EngineConfig;
    ///
    /// let config = EngineConfig::from_toml_str(
    ///     "risk_free_rate = 0.03\n[solver]\ntolerance = 1e-6\n",
    /// ).unwrap();
    /// assert_eq!(config.risk_free_rate, 0.03);
    /// assert_eq!(config.days_in_year, 365.0);
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}

fn default_tolerance() -> f64 {
    1e-4
}

fn default_max_iterations() -> usize {
    100
}

fn default_initial_vol() -> f64 {
    0.5
}

fn default_min_vol() -> f64 {
    0.01
}

fn default_max_vol() -> f64 {
    5.0
}

fn default_risk_free_rate() -> f64 {
    0.05
}

fn default_days_in_year() -> f64 {
    365.0
}
