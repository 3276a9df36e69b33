use std::cmp::Ordering;
use std::f64::consts::PI;

use impl_new_derive::ImplNew;
use ndarray::Array1;
use ndarray::Array2;
use ndarray_stats::QuantileExt;
use statrs::distribution::LogNormal;

use crate::error::SimulationError;
use crate::error::SimulationResult;
use crate::params::SimulationParams;

/// Extracts the terminal price of every path, preserving row order.
///
/// Pure indexing into the last column; fails on a matrix with zero time
/// steps.
pub fn terminal_prices(paths: &Array2<f64>) -> SimulationResult<Array1<f64>> {
  if paths.ncols() == 0 {
    return Err(SimulationError::EmptyMatrix);
  }
  Ok(paths.column(paths.ncols() - 1).to_owned())
}

/// Summary statistics of the simulated terminal-price sample.
#[derive(Debug, Clone, PartialEq)]
pub struct TerminalSummary {
  pub count: usize,
  pub mean: f64,
  /// Sample standard deviation (ddof = 1).
  pub std_dev: f64,
  pub min: f64,
  pub max: f64,
  pub median: f64,
}

impl TerminalSummary {
  pub fn from_prices(prices: &Array1<f64>) -> SimulationResult<Self> {
    let mean = prices.mean().ok_or(SimulationError::EmptyMatrix)?;
    let min = *prices.min().map_err(|_| SimulationError::EmptyMatrix)?;
    let max = *prices.max().map_err(|_| SimulationError::EmptyMatrix)?;

    Ok(Self {
      count: prices.len(),
      mean,
      std_dev: prices.std(1.0),
      min,
      max,
      median: quantile(prices, 0.5)?,
    })
  }
}

/// Interpolated quantile of a price sample, `q` clamped to `[0, 1]`.
pub fn quantile(prices: &Array1<f64>, q: f64) -> SimulationResult<f64> {
  if prices.is_empty() {
    return Err(SimulationError::EmptyMatrix);
  }

  let mut sorted = prices.to_vec();
  sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Greater));

  let rank = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
  let lo = rank.floor() as usize;
  let hi = rank.ceil() as usize;
  if lo == hi {
    return Ok(sorted[lo]);
  }

  let weight = rank - lo as f64;
  Ok(sorted[lo] + weight * (sorted[hi] - sorted[lo]))
}

/// Exact distribution of the simulated terminal price.
///
/// Under GBM, `ln S_T ~ N(ln S0 + (mu - sigma^2 / 2) * tau, sigma^2 * tau)`
/// where `tau` is the elapsed time of the simulated terminal column,
/// `(step_count - 1) * step_size`. Requires a strictly positive volatility
/// and at least one stochastic update.
pub fn terminal_law(params: &SimulationParams) -> SimulationResult<LogNormal> {
  params.validate()?;

  if !(params.volatility > 0.0) {
    return Err(SimulationError::InvalidParameter {
      field: "volatility",
      value: params.volatility,
      constraint: "strictly positive for a terminal law",
    });
  }
  let tau = params.elapsed();
  if tau == 0.0 {
    return Err(SimulationError::InvalidParameter {
      field: "step_size",
      value: params.step_size,
      constraint: "small enough for at least two time points",
    });
  }

  let location = params.initial_price.ln() + (params.drift - 0.5 * params.volatility.powi(2)) * tau;
  let scale = params.volatility * tau.sqrt();
  LogNormal::new(location, scale).map_err(|_| SimulationError::InvalidParameter {
    field: "volatility",
    value: params.volatility,
    constraint: "a valid log-normal scale",
  })
}

/// Gaussian kernel density estimate of the terminal-price sample, the
/// density the original driver hands to its plotting layer.
#[derive(ImplNew, Debug, Clone)]
pub struct TerminalKde {
  pub prices: Array1<f64>,
  pub bandwidth: f64,
}

impl TerminalKde {
  /// Builds the estimator with Silverman's rule-of-thumb bandwidth,
  /// `h = 0.9 * min(sigma, IQR / 1.34) * n^(-1/5)`.
  pub fn with_silverman_bandwidth(prices: Array1<f64>) -> SimulationResult<Self> {
    let bandwidth = silverman_bandwidth(&prices)?;
    Ok(Self { prices, bandwidth })
  }

  /// Estimated density at a single point.
  pub fn density(&self, x: f64) -> f64 {
    let norm = 1.0 / (self.bandwidth * (2.0 * PI).sqrt());
    let sum: f64 = self
      .prices
      .iter()
      .map(|&xi| {
        let u = (x - xi) / self.bandwidth;
        norm * (-0.5 * u * u).exp()
      })
      .sum();
    sum / self.prices.len() as f64
  }

  /// Estimated density over a grid of evaluation points.
  pub fn density_grid(&self, xs: &Array1<f64>) -> Array1<f64> {
    xs.mapv(|x| self.density(x))
  }
}

/// Silverman's rule-of-thumb bandwidth for a 1D sample.
pub fn silverman_bandwidth(prices: &Array1<f64>) -> SimulationResult<f64> {
  if prices.is_empty() {
    return Err(SimulationError::EmptyMatrix);
  }
  let n = prices.len() as f64;
  if prices.len() < 2 {
    // A single observation has no spread to estimate from.
    return Ok(1e-6);
  }

  let std = prices.std(1.0);
  let iqr = quantile(prices, 0.75)? - quantile(prices, 0.25)?;
  let scale = std.min(iqr / 1.34);
  let h = 0.9 * scale * n.powf(-0.2);

  Ok(h.max(1e-8))
}
