use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
};

use crate::support::constraint::{Constrained, UnitIntervalLowerOpen};

/// Starting point of the conductor-temperature iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InitialGuess {
    /// Start at the cable's maximum conductor temperature.
    MaxConductorTemp,

    /// Start this far above ambient.
    AboveAmbient(TemperatureInterval),

    /// Start at a fixed temperature.
    Fixed(ThermodynamicTemperature),
}

/// Solver configuration for the conductor-temperature iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureConfig {
    /// Maximum number of fixed-point updates.
    pub max_iters: usize,

    /// Convergence threshold on `|T_new − T|`, the undamped gap between the
    /// current estimate and the next candidate.
    pub tolerance: TemperatureInterval,

    /// Weight of the new iterate in the damped update
    /// `T ← ω·T_new + (1 − ω)·T`; `1` is plain successive substitution.
    pub relaxation: Constrained<f64, UnitIntervalLowerOpen>,

    pub initial: InitialGuess,
}

impl Default for TemperatureConfig {
    fn default() -> Self {
        Self {
            max_iters: 10,
            tolerance: TemperatureInterval::new::<delta_kelvin>(0.1),
            relaxation: UnitIntervalLowerOpen::one(),
            initial: InitialGuess::MaxConductorTemp,
        }
    }
}

impl TemperatureConfig {
    /// Damped iteration for models with temperature-dependent surface films.
    ///
    /// 20 iterations, 0.05 K tolerance, relaxation 0.5, starting 50 K above
    /// ambient.
    #[must_use]
    pub fn damped() -> Self {
        Self {
            max_iters: 20,
            tolerance: TemperatureInterval::new::<delta_kelvin>(0.05),
            relaxation: Constrained::new_unchecked(0.5),
            initial: InitialGuess::AboveAmbient(TemperatureInterval::new::<delta_kelvin>(50.0)),
        }
    }
}
