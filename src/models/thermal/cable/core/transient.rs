//! First-order heating curve after a step change in load.

use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature, Time},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
    time::second,
};

use crate::support::{
    constraint::{ConstraintError, StrictlyPositive},
    units::{LinearHeatCapacity, linear_heat_capacity},
};

use super::{CableConfiguration, CableError, TemperatureConfig, TemperatureSolution};

/// Conductor temperature at one instant of the heating curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransientSample {
    pub time: Time,
    pub temperature: ThermodynamicTemperature,
}

/// Lumped single-time-constant response of a cable switched on at `t = 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct TransientResponse {
    /// Heat capacity of the cable per metre.
    pub capacitance: LinearHeatCapacity,

    /// `τ = R_th·C`.
    pub time_constant: Time,

    /// The state the curve approaches.
    pub steady_state: TemperatureSolution,

    pub ambient_temp: ThermodynamicTemperature,

    /// Samples evenly spaced from `t = 0` to the requested duration.
    pub samples: Vec<TransientSample>,
}

impl TransientResponse {
    /// Conductor temperature `t` after switch-on.
    #[must_use]
    pub fn temperature_at(&self, time: Time) -> ThermodynamicTemperature {
        exponential_approach(
            self.ambient_temp,
            self.steady_state.conductor_temp,
            time,
            self.time_constant,
        )
    }

    /// Remaining rise to steady state at `time`.
    #[must_use]
    pub fn remaining_rise(&self, time: Time) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.steady_state.conductor_temp.get::<kelvin>()
                - self.temperature_at(time).get::<kelvin>(),
        )
    }
}

/// `T(t) = T_f + (T_i − T_f)·e^(−t/τ)`; a zero time constant jumps to `T_f`.
#[must_use]
pub fn exponential_approach(
    initial: ThermodynamicTemperature,
    target: ThermodynamicTemperature,
    time: Time,
    time_constant: Time,
) -> ThermodynamicTemperature {
    let tau = time_constant.get::<second>();
    let tf = target.get::<kelvin>();
    if tau <= 0.0 {
        return target;
    }
    let ti = initial.get::<kelvin>();
    let decay = (-time.get::<second>() / tau).exp();
    ThermodynamicTemperature::new::<kelvin>(tf + (ti - tf) * decay)
}

impl CableConfiguration {
    /// Heat capacity per metre of the cable layers that carry heat storage data.
    ///
    /// External layers are excluded; they model the far field.
    #[must_use]
    pub fn thermal_capacitance(&self) -> LinearHeatCapacity {
        let sum = self
            .layers()
            .iter()
            .filter_map(|layer| {
                layer
                    .heat_storage()
                    .map(|storage| storage.volumetric() * layer.cross_section().value)
            })
            .sum();
        linear_heat_capacity(sum)
    }

    /// Heating curve from ambient to the steady state at the configured current.
    ///
    /// # Errors
    ///
    /// Returns [`CableError::InvalidInput`] for a non-positive duration, fewer
    /// than two samples, or a cable without heat storage data, and the errors
    /// of [`CableConfiguration::temperature`].
    pub fn transient(
        &self,
        duration: Time,
        steps: usize,
        config: &TemperatureConfig,
    ) -> Result<TransientResponse, CableError> {
        let duration = StrictlyPositive::new(duration)
            .map_err(|source| CableError::input("duration", source))?
            .into_inner();
        if steps < 2 {
            return Err(CableError::input("steps", ConstraintError::BelowMinimum));
        }
        let capacitance = StrictlyPositive::new(self.thermal_capacitance())
            .map_err(|source| CableError::input("thermal_capacitance", source))?
            .into_inner();

        let steady_state = self.temperature(config)?;
        let tau = steady_state.thermal_resistance().value * capacitance.value;
        let time_constant = Time::new::<second>(tau);

        let samples = (0..steps)
            .map(|k| {
                let time = duration * (k as f64 / (steps - 1) as f64);
                TransientSample {
                    time,
                    temperature: exponential_approach(
                        self.ambient_temp,
                        steady_state.conductor_temp,
                        time,
                        time_constant,
                    ),
                }
            })
            .collect();

        Ok(TransientResponse {
            capacitance,
            time_constant,
            ambient_temp: self.ambient_temp,
            steady_state,
            samples,
        })
    }
}
