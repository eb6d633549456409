use twine_solvers::equation::bisection;
use uom::si::{
    electric_current::ampere,
    f64::{ElectricCurrent, TemperatureInterval},
    temperature_interval::kelvin as delta_kelvin,
};

use crate::models::thermal::cable::core::TemperatureConfig;

/// Solver configuration for the ampacity search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmpacityConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the conductor temperature residual
    /// (achieved minus limit).
    pub temperature_tol: TemperatureInterval,

    /// Absolute tolerance for the current search variable.
    pub current_tol: ElectricCurrent,

    /// Upper end of the search bracket; the lower end is 0 A.
    pub search_max: ElectricCurrent,

    /// Configuration of the temperature solve at each trial current.
    pub temperature: TemperatureConfig,
}

impl Default for AmpacityConfig {
    fn default() -> Self {
        Self {
            max_iters: 30,
            temperature_tol: TemperatureInterval::new::<delta_kelvin>(0.5),
            current_tol: ElectricCurrent::new::<ampere>(1e-6),
            search_max: ElectricCurrent::new::<ampere>(10_000.0),
            temperature: TemperatureConfig::default(),
        }
    }
}

impl AmpacityConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.current_tol.get::<ampere>(),
            x_rel_tol: 0.0,
            residual_tol: self.temperature_tol.get::<delta_kelvin>(),
        }
    }
}
