//! Maximum continuous current for a conductor temperature limit.
//!
//! The conductor temperature rises monotonically with current, so the
//! ampacity is found by bisecting `T(I) - T_max` on `[0, search_max]`.

mod config;
mod error;
mod problem;

pub use config::AmpacityConfig;
pub use error::AmpacityError;

use tracing::debug;
use twine_core::Model;
use twine_solvers::equation::bisection;
use uom::si::{
    electric_current::ampere,
    f64::{ElectricCurrent, TemperatureInterval},
    temperature_interval::kelvin as delta_kelvin,
};

use crate::support::{constraint::StrictlyPositive, units::TemperatureDifference};

use super::{CableConfiguration, CableError, TemperatureSolution, temperature::ThermalCircuit};

use problem::{AmpacityModel, AmpacityProblem};

/// Result of an ampacity search.
#[derive(Debug, Clone, PartialEq)]
pub struct Ampacity {
    /// Largest current that keeps the conductor at its limit.
    pub current: ElectricCurrent,

    /// Converged temperature solution at that current.
    pub solution: TemperatureSolution,

    /// Bisection iterations performed.
    pub iters: usize,
}

impl CableConfiguration {
    /// Finds the current at which the conductor reaches
    /// [`max_conductor_temp`](CableConfiguration::max_conductor_temp).
    ///
    /// # Errors
    ///
    /// Returns [`AmpacityError`] if the configuration is invalid, ambient is
    /// within `temperature_tol` of the limit, the search bracket is too small,
    /// or the bisection does not converge.
    pub fn ampacity(&self, config: &AmpacityConfig) -> Result<Ampacity, AmpacityError> {
        let circuit = ThermalCircuit::new(self)?;

        if self.max_conductor_temp.minus(self.ambient_temp) <= config.temperature_tol {
            return Err(AmpacityError::AmbientAtLimit {
                ambient: self.ambient_temp,
                limit: self.max_conductor_temp,
            });
        }

        let search_max = StrictlyPositive::new(config.search_max)
            .map_err(|source| CableError::input("search_max", source))?
            .into_inner();

        let model = AmpacityModel::new(&circuit, self.ambient_temp, config.temperature);
        let top = model.call(&search_max)?;
        if top.conductor_temp < self.max_conductor_temp {
            return Err(AmpacityError::SearchBoundTooLow {
                current: search_max,
                temperature: top.conductor_temp,
            });
        }

        let problem = AmpacityProblem::new(self.max_conductor_temp);

        let solution = bisection::solve(
            &model,
            &problem,
            [0.0, search_max.get::<ampere>()],
            &config.bisection(),
            |event: &bisection::Event<'_, _, _>| {
                // A failed trial solve means the current is too high for the
                // iteration to settle.
                if event.result().is_err() {
                    return Some(bisection::Action::assume_positive());
                }
                None
            },
        )?;

        if solution.status != bisection::Status::Converged {
            return Err(AmpacityError::MaxIters {
                residual: TemperatureInterval::new::<delta_kelvin>(solution.residual),
                iters: solution.iters,
            });
        }

        let output = solution.snapshot.output.into_result()?;
        debug!(
            cable = %self.name,
            current = output.current.get::<ampere>(),
            iters = solution.iters,
            "ampacity found"
        );

        Ok(Ampacity {
            current: output.current,
            solution: output,
            iters: solution.iters,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::ThermodynamicTemperature,
        thermodynamic_temperature::{degree_celsius, kelvin},
    };

    use crate::models::thermal::cable::core::{
        TemperatureConfig,
        test_support::{hv_buried, mv_buried},
    };

    fn celsius(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(value)
    }

    #[test]
    fn mv_cable_in_warm_soil() {
        let cable = mv_buried().with_ambient_temp(celsius(25.0));
        let rating = cable.ampacity(&AmpacityConfig::default()).unwrap();

        let amps = rating.current.get::<ampere>();
        assert!(amps > 300.0 && amps < 1000.0, "ampacity {amps} A");
        assert!(rating.solution.is_converged());
    }

    #[test]
    fn hv_cable_carries_more() {
        let config = AmpacityConfig::default();
        let hv = hv_buried().ampacity(&config).unwrap();
        let mv = mv_buried().ampacity(&config).unwrap();

        let amps = hv.current.get::<ampere>();
        assert!(amps > 600.0 && amps < 1500.0, "ampacity {amps} A");
        assert!(hv.current > mv.current);
    }

    #[test]
    fn rated_current_reaches_the_limit() {
        let cable = mv_buried();
        let config = AmpacityConfig::default();
        let rating = cable.ampacity(&config).unwrap();

        let check = cable
            .temperature_at(rating.current, &config.temperature)
            .unwrap();
        assert_relative_eq!(
            check.conductor_temp.get::<kelvin>(),
            cable.max_conductor_temp.get::<kelvin>(),
            epsilon = config.temperature_tol.get::<delta_kelvin>()
        );
    }

    #[test]
    fn colder_ground_allows_more_current() {
        let config = AmpacityConfig::default();
        let cold = mv_buried().with_ambient_temp(celsius(10.0));
        let warm = mv_buried().with_ambient_temp(celsius(30.0));
        assert!(cold.ampacity(&config).unwrap().current > warm.ampacity(&config).unwrap().current);
    }

    #[test]
    fn ambient_at_limit_has_no_rating() {
        let cable = mv_buried().with_ambient_temp(celsius(90.0));
        assert!(matches!(
            cable.ampacity(&AmpacityConfig::default()),
            Err(AmpacityError::AmbientAtLimit { .. })
        ));
    }

    #[test]
    fn ambient_within_tolerance_of_limit_has_no_rating() {
        let cable = mv_buried().with_ambient_temp(celsius(89.9));
        assert!(matches!(
            cable.ampacity(&AmpacityConfig::default()),
            Err(AmpacityError::AmbientAtLimit { .. })
        ));

        let tight = AmpacityConfig {
            temperature_tol: TemperatureInterval::new::<delta_kelvin>(0.01),
            temperature: TemperatureConfig {
                max_iters: 50,
                tolerance: TemperatureInterval::new::<delta_kelvin>(1e-4),
                ..TemperatureConfig::default()
            },
            ..AmpacityConfig::default()
        };
        let rating = cable.ampacity(&tight).unwrap();
        assert!(rating.current.get::<ampere>() > 0.0);
    }

    #[test]
    fn search_bound_must_reach_the_limit() {
        let config = AmpacityConfig {
            search_max: ElectricCurrent::new::<ampere>(100.0),
            ..AmpacityConfig::default()
        };
        assert!(matches!(
            mv_buried().ampacity(&config),
            Err(AmpacityError::SearchBoundTooLow { .. })
        ));
    }

    #[test]
    fn invalid_cable_is_reported() {
        let cable = CableConfiguration::new("empty");
        assert!(matches!(
            cable.ampacity(&AmpacityConfig::default()),
            Err(AmpacityError::Cable(CableError::InvalidInput {
                field: "layers",
                ..
            }))
        ));
    }
}
