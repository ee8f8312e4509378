//! # Pricing-Lib: Option Pricing, Greeks, and Volatility Surfaces
//!
//! `pricing-lib` is a pure, stateless computation library for valuing
//! European option contracts: closed-form Black-Scholes pricing, analytic
//! Greeks, a Newton-Raphson implied-volatility solver, and a batch surface
//! builder that maps a set of contracts to per-point implied volatilities.
//!
//! ## Core Features
//!
//! - **Black-Scholes Pricer**: closed-form call/put pricing with strict
//!   domain validation (no silent NaN/Infinity)
//! - **Analytic Greeks**: delta, gamma, theta, vega and rho as independent
//!   pure functions
//! - **Implied-Volatility Solver**: bounded Newton-Raphson with per-step
//!   volatility clamping and diagnostic convergence errors
//! - **Volatility-Surface Builder**: data-parallel batch IV with strict
//!   input/output correspondence
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chrono::{Duration, Utc};
//! use pricing_lib::{analyze_option, build_surface, EngineConfig, OptionContract, OptionType};
//!
//! let now = Utc::now();
//! let expiry = now + Duration::days(30);
//!
//! // A contract with an observed last traded price
//! let contract =
//!     OptionContract::new("BTC-50000-C", OptionType::Call, 50_000.0, expiry, "BTC/USD")
//!         .with_last_price(3_250.0);
//!
//! let config = EngineConfig::default();
//!
//! // Full valuation: solved IV, theoretical price, Greeks, intrinsic/extrinsic
//! let analysis = analyze_option(&contract, 48_500.0, &config, now)?;
//! println!(
//!     "IV {:.1}%, theoretical ${:.2}, delta {:.3}",
//!     analysis.implied_volatility * 100.0,
//!     analysis.theoretical_price,
//!     analysis.greeks.delta
//! );
//!
//! // Surface over a batch of contracts (one point per contract, input order)
//! let surface = build_surface(&[contract], 48_500.0, &config, now)?;
//! println!("{} surface points", surface.len());
//! # Ok::<(), pricing_lib::EngineError>(())
//! ```
//!
//! ## Design
//!
//! The engine is a pure function of its call-time inputs: no caching, no
//! global configuration, no I/O. Market data (spot, last traded prices) and
//! the clock are injected by the caller, which keeps every operation
//! deterministic and independently testable. All failures are explicit
//! [`EngineError`] results; a failed IV solve is always distinguishable from
//! a near-zero-volatility success.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod engine;
pub mod error;
pub mod models;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Error handling
pub use error::{EngineError, EngineResult};

// Configuration
pub use engine::config::{EngineConfig, SolverConfig};

// Core data model
pub use engine::types::{
    Greeks, OptionAnalysis, OptionContract, OptionType, VolatilitySurfacePoint,
};

// Pricing and Greeks
pub use models::bs::price;
pub use models::greeks::{delta, gamma, greeks, rho, theta, vega};

// Solver and batch operations
pub use engine::analysis::analyze_option;
pub use engine::iv::{implied_volatility, implied_volatility_with_config};
pub use engine::surface::build_surface;

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured engine settings for common use cases.
///
/// # Available Configurations
///
/// - [`production()`]: tight solver tolerance for live valuation
/// - [`fast()`]: the documented defaults, balanced for development
/// - [`minimal()`]: loose tolerance for quick validation and debugging
pub mod default_configs {
    use crate::engine::config::EngineConfig;

    /// Production-grade configuration: tolerance 1e-6, 200 iterations.
    pub fn production() -> EngineConfig {
        EngineConfig::production()
    }

    /// Balanced configuration for development: tolerance 1e-4, 100 iterations.
    pub fn fast() -> EngineConfig {
        EngineConfig::fast()
    }

    /// Loose configuration for quick checks: tolerance 1e-3, 50 iterations.
    pub fn minimal() -> EngineConfig {
        EngineConfig::minimal()
    }
}
