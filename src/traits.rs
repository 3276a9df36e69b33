use rand::Rng;
use rand_distr::Distribution;
use rand_distr::StandardNormal;

/// A source of standard-normal variates, injected into the simulator.
///
/// Every `rand` generator is a `NormalSource` through the blanket impl below,
/// drawing via [`rand_distr::StandardNormal`]. Test doubles can implement the
/// trait directly to script an exact draw sequence.
pub trait NormalSource {
  /// Produces the next `N(0, 1)` variate.
  fn next_standard_normal(&mut self) -> f64;
}

impl<R: Rng + ?Sized> NormalSource for R {
  fn next_standard_normal(&mut self) -> f64 {
    StandardNormal.sample(self)
  }
}
