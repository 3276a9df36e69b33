use impl_new_derive::ImplNew;

use crate::error::SimulationError;
use crate::error::SimulationResult;

/// Immutable inputs of a GBM path simulation.
///
/// All time quantities are in years; `drift` and `volatility` are annualized.
#[derive(ImplNew, Debug, Clone, Copy, PartialEq)]
pub struct SimulationParams {
  /// Initial spot price, strictly positive.
  pub initial_price: f64,
  /// Annualized expected return.
  pub drift: f64,
  /// Annualized standard deviation of returns, non-negative.
  pub volatility: f64,
  /// Time horizon in years, strictly positive.
  pub horizon: f64,
  /// Step size in years, in `(0, horizon]`.
  pub step_size: f64,
  /// Number of independent trajectories.
  pub path_count: usize,
}

impl SimulationParams {
  /// Checks every precondition, reporting the first offending field.
  pub fn validate(&self) -> SimulationResult<()> {
    if !(self.initial_price > 0.0) || !self.initial_price.is_finite() {
      return Err(SimulationError::InvalidParameter {
        field: "initial_price",
        value: self.initial_price,
        constraint: "strictly positive and finite",
      });
    }
    if !self.drift.is_finite() {
      return Err(SimulationError::InvalidParameter {
        field: "drift",
        value: self.drift,
        constraint: "finite",
      });
    }
    if !(self.volatility >= 0.0) || !self.volatility.is_finite() {
      return Err(SimulationError::InvalidParameter {
        field: "volatility",
        value: self.volatility,
        constraint: "non-negative and finite",
      });
    }
    if !(self.horizon > 0.0) || !self.horizon.is_finite() {
      return Err(SimulationError::InvalidParameter {
        field: "horizon",
        value: self.horizon,
        constraint: "strictly positive and finite",
      });
    }
    if !(self.step_size > 0.0) || self.step_size > self.horizon {
      return Err(SimulationError::InvalidParameter {
        field: "step_size",
        value: self.step_size,
        constraint: "in (0, horizon]",
      });
    }
    if self.path_count == 0 {
      return Err(SimulationError::InvalidParameter {
        field: "path_count",
        value: self.path_count as f64,
        constraint: "at least 1",
      });
    }
    Ok(())
  }

  /// Number of discrete time points per path, `round(horizon / step_size)`.
  ///
  /// At least 1 for validated parameters since `step_size <= horizon`. The
  /// first time point carries the initial price, so a path performs
  /// `step_count() - 1` stochastic updates.
  pub fn step_count(&self) -> usize {
    (self.horizon / self.step_size).round() as usize
  }

  /// Time elapsed between the initial and the terminal time point.
  pub fn elapsed(&self) -> f64 {
    (self.step_count().saturating_sub(1)) as f64 * self.step_size
  }

  /// Deterministic log-space increment of a single step.
  pub fn log_drift_per_step(&self) -> f64 {
    (self.drift - 0.5 * self.volatility * self.volatility) * self.step_size
  }

  /// Diffusion scale of a single step in log space.
  pub fn vol_sqrt_dt(&self) -> f64 {
    self.volatility * self.step_size.sqrt()
  }
}

impl Default for SimulationParams {
  fn default() -> Self {
    Self {
      initial_price: crate::S0,
      drift: crate::MU,
      volatility: crate::SIGMA,
      horizon: crate::T,
      step_size: crate::DT,
      path_count: crate::M,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_are_valid() {
    assert!(SimulationParams::default().validate().is_ok());
  }

  #[test]
  fn default_step_count_is_daily_over_one_year() {
    assert_eq!(SimulationParams::default().step_count(), 252);
  }

  #[test]
  fn quarterly_step_count() {
    let params = SimulationParams {
      horizon: 1.0,
      step_size: 0.25,
      ..SimulationParams::default()
    };
    assert_eq!(params.step_count(), 4);
  }

  #[test]
  fn zero_initial_price_is_rejected() {
    let params = SimulationParams {
      initial_price: 0.0,
      ..SimulationParams::default()
    };
    assert!(matches!(
      params.validate(),
      Err(SimulationError::InvalidParameter {
        field: "initial_price",
        ..
      })
    ));
  }

  #[test]
  fn negative_volatility_is_rejected() {
    let params = SimulationParams {
      volatility: -0.1,
      ..SimulationParams::default()
    };
    assert!(matches!(
      params.validate(),
      Err(SimulationError::InvalidParameter {
        field: "volatility",
        ..
      })
    ));
  }

  #[test]
  fn step_size_larger_than_horizon_is_rejected() {
    let params = SimulationParams {
      horizon: 1.0,
      step_size: 2.0,
      ..SimulationParams::default()
    };
    assert!(matches!(
      params.validate(),
      Err(SimulationError::InvalidParameter {
        field: "step_size",
        ..
      })
    ));
  }

  #[test]
  fn zero_path_count_is_rejected() {
    let params = SimulationParams {
      path_count: 0,
      ..SimulationParams::default()
    };
    assert!(matches!(
      params.validate(),
      Err(SimulationError::InvalidParameter {
        field: "path_count",
        ..
      })
    ));
  }

  #[test]
  fn nan_drift_is_rejected() {
    let params = SimulationParams {
      drift: f64::NAN,
      ..SimulationParams::default()
    };
    assert!(matches!(
      params.validate(),
      Err(SimulationError::InvalidParameter { field: "drift", .. })
    ));
  }

  #[test]
  fn elapsed_excludes_the_initial_time_point() {
    let params = SimulationParams {
      horizon: 1.0,
      step_size: 0.25,
      ..SimulationParams::default()
    };
    assert_eq!(params.elapsed(), 0.75);
  }
}
