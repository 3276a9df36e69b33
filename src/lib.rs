//! # Monte Carlo GBM Path Simulation
//!
//! `gbm-mc` simulates independent commodity price trajectories under
//! discretized geometric Brownian motion and derives terminal-price
//! statistics from them.
//!
//! ## Modules
//!
//! | Module         | Description                                                              |
//! |----------------|--------------------------------------------------------------------------|
//! | [`params`]     | Validated, immutable simulation parameters.                              |
//! | [`simulation`] | The path simulator: sequential, seeded, and parallel sampling.           |
//! | [`stats`]      | Terminal-price extraction, summary statistics, and density estimation.   |
//! | [`traits`]     | The injected standard-normal source abstraction.                         |
//! | [`error`]      | Error taxonomy of the engine.                                            |
//!
//! ## Example Usage
//!
//! ```rust
//! use gbm_mc::params::SimulationParams;
//! use gbm_mc::simulation::PathSimulator;
//! use gbm_mc::stats;
//!
//! let simulator = PathSimulator::new(SimulationParams::default());
//! let paths = simulator.sample_par(42).unwrap();
//! let terminals = stats::terminal_prices(&paths).unwrap();
//! assert_eq!(terminals.len(), 1000);
//! ```
//!
//! ## Parallelism
//!
//! [`simulation::PathSimulator::sample_par`] uses `rayon` to evolve paths on
//! separate workers, each with its own reproducible random sub-stream, so the
//! result depends on the seed alone and never on the number of threads.

pub mod error;
pub mod params;
pub mod simulation;
pub mod stats;
pub mod traits;

/// Default initial spot price, USD per ton of aluminum.
pub const S0: f64 = 2000.0;
/// Default annualized drift.
pub const MU: f64 = 0.05;
/// Default annualized volatility.
pub const SIGMA: f64 = 0.2;
/// Default time horizon in years.
pub const T: f64 = 1.0;
/// Default step size: one of 252 trading days.
pub const DT: f64 = 1.0 / 252.0;
/// Default number of simulated paths.
pub const M: usize = 1000;
