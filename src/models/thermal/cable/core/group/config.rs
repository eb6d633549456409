use uom::si::{f64::TemperatureInterval, temperature_interval::kelvin as delta_kelvin};

use crate::models::thermal::cable::core::TemperatureConfig;

/// Solver configuration for the mutual-heating iteration of a cable group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupConfig {
    /// Maximum number of sweeps over the group.
    pub max_iters: usize,

    /// Convergence threshold on the largest conductor temperature change
    /// between sweeps.
    pub tolerance: TemperatureInterval,

    /// Configuration of each cable's own temperature solve.
    pub temperature: TemperatureConfig,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            max_iters: 20,
            tolerance: TemperatureInterval::new::<delta_kelvin>(0.1),
            temperature: TemperatureConfig::default(),
        }
    }
}
