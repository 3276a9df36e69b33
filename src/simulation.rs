use impl_new_derive::ImplNew;
use ndarray::parallel::prelude::*;
use ndarray::Array1;
use ndarray::Array2;
use ndarray::ArrayViewMut1;
use ndarray::Axis;
use ndarray_rand::RandomExt;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::StandardNormal;
use tracing::debug;

use crate::error::SimulationResult;
use crate::params::SimulationParams;
use crate::traits::NormalSource;

/// Monte Carlo generator of discretized GBM price trajectories.
///
/// Each path follows the exact log-space transition
///
/// `S[t] = S[t-1] * exp((mu - sigma^2 / 2) * dt + sigma * sqrt(dt) * Z)`
///
/// with `Z ~ N(0, 1)`, which matches the log-normal transition law of GBM
/// and keeps every price strictly positive for finite draws. An additive
/// Euler-Maruyama update would distort the terminal variance and can cross
/// zero, so it is never used here.
#[derive(ImplNew, Debug, Clone, Copy)]
pub struct PathSimulator {
  pub params: SimulationParams,
}

impl PathSimulator {
  /// Samples the full path matrix from an injected normal source.
  ///
  /// Rows are paths, columns are time points; column 0 carries the initial
  /// price. Exactly `path_count * (step_count - 1)` variates are consumed in
  /// row-major order. Draws are consumed also when `volatility == 0`; they
  /// have no effect on the result then, but a volatility sweep across runs
  /// consumes an identical number of variates per run, keeping downstream
  /// consumers of the same source aligned.
  pub fn sample<S: NormalSource + ?Sized>(&self, src: &mut S) -> SimulationResult<Array2<f64>> {
    self.params.validate()?;

    let n = self.params.step_count();
    let m = self.params.path_count;
    debug!(paths = m, steps = n, "sampling GBM path matrix");

    let mut paths = Array2::<f64>::zeros((m, n));
    let mut noise = vec![0.0; n.saturating_sub(1)];
    for mut row in paths.rows_mut() {
      for z in noise.iter_mut() {
        *z = src.next_standard_normal();
      }
      self.fill_path(&mut row, &noise);
    }

    Ok(paths)
  }

  /// Sequential sampling from a `StdRng` seeded with `seed`.
  pub fn sample_seeded(&self, seed: u64) -> SimulationResult<Array2<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    self.sample(&mut rng)
  }

  /// Parallel sampling with one reproducible sub-stream per path.
  ///
  /// Path `i` draws from `StdRng::seed_from_u64(seed + i)`, so rows never
  /// contend for a shared source and the result depends on `seed` alone,
  /// never on the number of rayon workers. The draw schedule differs from
  /// [`Self::sample`] over a single source; each variant is individually
  /// reproducible.
  pub fn sample_par(&self, seed: u64) -> SimulationResult<Array2<f64>> {
    self.params.validate()?;

    let n = self.params.step_count();
    let m = self.params.path_count;
    debug!(paths = m, steps = n, seed, "sampling GBM path matrix in parallel");

    let mut paths = Array2::<f64>::zeros((m, n));
    paths
      .axis_iter_mut(Axis(0))
      .into_par_iter()
      .enumerate()
      .for_each(|(i, mut row)| {
        let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
        let noise: Array1<f64> = Array1::random_using(n.saturating_sub(1), StandardNormal, &mut rng);
        let noise = noise.as_slice().expect("noise array must be contiguous");
        self.fill_path(&mut row, noise);
      });

    Ok(paths)
  }

  fn fill_path(&self, row: &mut ArrayViewMut1<'_, f64>, noise: &[f64]) {
    let log_drift = self.params.log_drift_per_step();
    let vol_sqrt_dt = self.params.vol_sqrt_dt();

    row[0] = self.params.initial_price;
    for t in 1..row.len() {
      row[t] = row[t - 1] * (log_drift + vol_sqrt_dt * noise[t - 1]).exp();
    }
  }
}
