use std::error::Error;
use std::fmt;

/// Errors surfaced by the simulation engine.
///
/// Numeric faults (overflow to infinity under pathological parameters) are
/// deliberately not part of the taxonomy; they propagate through the returned
/// matrix as IEEE special values instead of being masked.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
  /// A precondition on the simulation parameters was violated. Raised before
  /// any simulation work begins.
  InvalidParameter {
    field: &'static str,
    value: f64,
    constraint: &'static str,
  },
  /// Terminal statistics were requested from a matrix with zero time steps.
  EmptyMatrix,
}

impl fmt::Display for SimulationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::InvalidParameter {
        field,
        value,
        constraint,
      } => write!(
        f,
        "invalid parameter `{}` = {}: must be {}",
        field, value, constraint
      ),
      Self::EmptyMatrix => write!(f, "path matrix has zero time steps"),
    }
  }
}

impl Error for SimulationError {}

pub type SimulationResult<T> = Result<T, SimulationError>;
