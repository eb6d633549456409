use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::{ElectricCurrent, TemperatureInterval, ThermodynamicTemperature};

use crate::models::thermal::cable::core::CableError;

/// Errors that can occur while searching for a cable's ampacity.
#[derive(Debug, Error)]
pub enum AmpacityError {
    /// The cable configuration or a temperature solve failed.
    #[error("cable model failed")]
    Cable(#[from] CableError),

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// Ambient is at the conductor limit, or within the temperature
    /// tolerance of it, so no meaningful current can be carried.
    #[error("ambient {ambient:?} is not below the conductor limit {limit:?}")]
    AmbientAtLimit {
        ambient: ThermodynamicTemperature,
        limit: ThermodynamicTemperature,
    },

    /// Even the top of the search bracket keeps the conductor below its limit.
    #[error("conductor stays at {temperature:?} at the search bound {current:?}")]
    SearchBoundTooLow {
        current: ElectricCurrent,
        temperature: ThermodynamicTemperature,
    },

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Conductor temperature minus its limit at the last trial current.
        residual: TemperatureInterval,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
