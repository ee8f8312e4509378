//! Error types for the pricing engine

use thiserror::Error;

/// Failures surfaced by the pricing engine.
///
/// Every error is returned to the immediate caller as an explicit result;
/// the engine never substitutes NaN/Infinity for a failed computation and
/// never retries internally.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A mathematical precondition was violated (non-positive spot, strike,
    /// time to expiry or volatility).
    #[error("Domain error: {0}")]
    Domain(String),

    /// The implied-volatility solver exhausted its iteration budget or vega
    /// collapsed to zero before the price tolerance was met.
    #[error(
        "IV solver did not converge after {iterations} iterations (last vol {last_vol:.6})"
    )]
    Convergence {
        /// Last volatility attempted before termination
        last_vol: f64,
        /// Number of Newton-Raphson iterations performed
        iterations: usize,
    },

    /// A per-contract failure during surface construction. Aborts the batch.
    #[error("Surface build failed for contract {symbol}: {source}")]
    Batch {
        /// Symbol of the contract whose IV solve failed
        symbol: String,
        #[source]
        source: Box<EngineError>,
    },
}

pub type EngineResult<T> = Result<T, EngineError>;

impl EngineError {
    pub fn domain(msg: impl Into<String>) -> Self {
        Self::Domain(msg.into())
    }

    pub fn batch(symbol: impl Into<String>, source: EngineError) -> Self {
        Self::Batch {
            symbol: symbol.into(),
            source: Box::new(source),
        }
    }

    /// True for convergence failures, including those wrapped in a batch error.
    pub fn is_convergence(&self) -> bool {
        match self {
            Self::Convergence { .. } => true,
            Self::Batch { source, .. } => source.is_convergence(),
            Self::Domain(_) => false,
        }
    }
}
