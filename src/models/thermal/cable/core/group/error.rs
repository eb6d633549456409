use thiserror::Error;
use uom::si::f64::TemperatureInterval;

use crate::models::thermal::cable::core::CableError;

/// Errors that can occur while solving a group of buried cables.
#[derive(Debug, Error)]
pub enum GroupError {
    /// The temperature solve of one cable failed.
    #[error("cable {index} failed")]
    Cable {
        index: usize,
        #[source]
        source: CableError,
    },

    /// The group itself is invalid.
    #[error("invalid cable group")]
    Invalid(#[from] CableError),

    /// The mutual-heating iteration reached its iteration limit.
    #[error("mutual heating iteration hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Largest conductor temperature change in the last sweep.
        residual: TemperatureInterval,

        /// Iteration count performed by the solver.
        iters: usize,
    },

    /// The group has too few cables for the requested operation.
    #[error("cable group needs at least {required} cables, found {found}")]
    TooFewCables { required: usize, found: usize },
}

impl GroupError {
    pub(super) fn cable(index: usize) -> impl FnOnce(CableError) -> Self {
        move |source| Self::Cable { index, source }
    }
}
