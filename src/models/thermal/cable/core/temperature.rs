//! Steady-state conductor temperature by fixed-point iteration.
//!
//! Conductor resistance and the in-air film coefficients both depend on
//! temperature, so the heat balance `T = T_amb + P(T)·R_th(T)` is solved by
//! repeated substitution, optionally damped.

mod config;

pub use config::{InitialGuess, TemperatureConfig};

use tracing::{debug, trace, warn};
use uom::si::{
    f64::{ElectricCurrent, Length, TemperatureInterval, ThermodynamicTemperature},
    electric_current::ampere,
    length::meter,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::{NonNegative, StrictlyPositive},
    units::{LinearThermalResistance, TemperatureDifference, linear_thermal_resistance},
};

use super::{
    CableConfiguration, CableError, ConductorProperties, LossModel, Losses, ThermalResistanceSet,
    environment::Environment, losses::ConductorGeometry,
};

/// Conductor temperatures above this are treated as thermal runaway.
pub(crate) const RUNAWAY_LIMIT_K: f64 = 5000.0;

/// How the temperature iteration ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterationStatus {
    /// The gap to the next candidate fell below the tolerance.
    Converged,

    /// The iteration limit was reached first.
    MaxIters,

    /// The iterate left the physical range.
    Diverged,
}

/// One point of the radial temperature profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfilePoint {
    /// `"conductor"`, the layer whose outer boundary this is, or `"ambient"`.
    pub label: String,

    /// Radius of the boundary; `None` for the far-field ambient.
    pub radius: Option<Length>,

    pub temperature: ThermodynamicTemperature,
}

/// Result of a steady-state temperature calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureSolution {
    pub current: ElectricCurrent,
    pub conductor_temp: ThermodynamicTemperature,
    pub ambient_temp: ThermodynamicTemperature,

    /// Loss breakdown at the final conductor temperature.
    pub losses: Losses,

    /// Resistance terms at the final conductor temperature.
    pub resistances: ThermalResistanceSet,

    /// Boundary temperatures from the conductor outward, ending at ambient.
    pub profile: Vec<ProfilePoint>,

    pub iters: usize,
    pub status: IterationStatus,

    /// Last undamped gap `|T_new − T|`.
    pub residual: TemperatureInterval,
}

impl TemperatureSolution {
    #[must_use]
    pub fn temperature_rise(&self) -> TemperatureInterval {
        self.conductor_temp.minus(self.ambient_temp)
    }

    /// Total thermal resistance from conductor to ambient.
    #[must_use]
    pub fn thermal_resistance(&self) -> LinearThermalResistance {
        self.resistances.total()
    }

    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == IterationStatus::Converged
    }

    /// Turns a non-converged solution into the matching error.
    pub(crate) fn into_result(self) -> Result<Self, CableError> {
        match self.status {
            IterationStatus::Converged => Ok(self),
            IterationStatus::MaxIters => Err(CableError::NonConvergence {
                temperature: self.conductor_temp,
                residual: self.residual,
                iters: self.iters,
            }),
            IterationStatus::Diverged => Err(CableError::Diverged { iters: self.iters }),
        }
    }
}

impl CableConfiguration {
    /// Steady-state conductor temperature at the configured current.
    ///
    /// # Errors
    ///
    /// Returns [`CableError::NonConvergence`] or [`CableError::Diverged`] if
    /// the iteration does not converge, and any validation error of the
    /// configuration.
    pub fn temperature(&self, config: &TemperatureConfig) -> Result<TemperatureSolution, CableError> {
        self.temperature_at(self.current(), config)
    }

    /// Steady-state conductor temperature at `current`.
    ///
    /// # Errors
    ///
    /// See [`CableConfiguration::temperature`].
    pub fn temperature_at(
        &self,
        current: ElectricCurrent,
        config: &TemperatureConfig,
    ) -> Result<TemperatureSolution, CableError> {
        self.estimate_temperature(current, config)?.into_result()
    }

    /// Like [`CableConfiguration::temperature_at`], but returns the last
    /// iterate with its [`IterationStatus`] instead of failing when the
    /// iteration does not converge.
    ///
    /// # Errors
    ///
    /// Returns a [`CableError`] only for invalid input.
    pub fn estimate_temperature(
        &self,
        current: ElectricCurrent,
        config: &TemperatureConfig,
    ) -> Result<TemperatureSolution, CableError> {
        let current = NonNegative::new(current)
            .map_err(|source| CableError::input("current", source))?
            .into_inner();
        let circuit = ThermalCircuit::new(self)?;
        circuit.solve(
            current.get::<ampere>(),
            self.ambient_temp.get::<kelvin>(),
            config,
        )
    }
}

/// A validated cable reduced to the numbers the iteration needs.
#[derive(Debug, Clone)]
pub(crate) struct ThermalCircuit<'a> {
    cable: &'a CableConfiguration,
    conductor: &'a ConductorProperties,
    geometry: ConductorGeometry,
    layers: Vec<LinearThermalResistance>,
    external: Vec<LinearThermalResistance>,
    conduction: f64,
    outer_radius: f64,
    grouping_factor: f64,
    installation_factor: f64,
}

impl<'a> ThermalCircuit<'a> {
    pub(crate) fn new(cable: &'a CableConfiguration) -> Result<Self, CableError> {
        cable.validate()?;
        let (core, conductor) = cable.conductor()?;

        let diameter = cable.cable_radius() * 2.0;
        let neighbours = cable
            .grouping
            .filter(|g| g.cables() > 1)
            .map(|g| (g.cables(), g.axis_spacing(diameter).get::<meter>()));
        let geometry = ConductorGeometry {
            area: core.cross_section().value,
            radius: core.outer_radius().get::<meter>(),
            neighbours,
        };

        let layers = cable
            .layers()
            .iter()
            .map(|layer| layer.thermal_resistance())
            .collect::<Result<Vec<_>, _>>()?;
        let external = cable
            .external_layers()
            .iter()
            .map(|layer| layer.thermal_resistance())
            .collect::<Result<Vec<_>, _>>()?;
        let conduction = layers.iter().chain(&external).map(|r| r.value).sum();

        Ok(Self {
            cable,
            conductor,
            geometry,
            layers,
            external,
            conduction,
            outer_radius: cable.outer_radius().get::<meter>(),
            grouping_factor: cable.grouping.map_or(1.0, |g| g.factor(diameter)),
            installation_factor: cable.installation.factor(),
        })
    }

    fn losses(&self) -> &LossModel {
        &self.cable.losses
    }

    fn environment(&self) -> &Environment {
        &self.cable.environment
    }

    /// Losses and resistances with the conductor at `temperature` (kelvin).
    pub(crate) fn evaluate(
        &self,
        current: f64,
        temperature: f64,
        ambient: f64,
    ) -> Result<(Losses, ThermalResistanceSet), CableError> {
        let losses = self
            .losses()
            .evaluate(self.conductor, &self.geometry, current, temperature);

        let surface = (temperature - losses.total.value * self.conduction).max(ambient);
        let environment = self
            .environment()
            .resistance(self.outer_radius, surface, ambient)?;

        let base = self.conduction + environment.map_or(0.0, |r| r.value().value);
        let penalty = base * (1.0 / self.grouping_factor - 1.0);

        Ok((
            losses,
            ThermalResistanceSet {
                layers: self.layers.clone(),
                external: self.external.clone(),
                environment,
                grouping: linear_thermal_resistance(penalty),
                installation_factor: self.installation_factor,
            },
        ))
    }

    /// Runs the fixed-point iteration at `current` (amperes) and `ambient` (kelvin).
    pub(crate) fn solve(
        &self,
        current: f64,
        ambient: f64,
        config: &TemperatureConfig,
    ) -> Result<TemperatureSolution, CableError> {
        let max_iters = StrictlyPositive::new(config.max_iters)
            .map_err(|source| CableError::input("max_iters", source))?
            .into_inner();
        let tolerance = StrictlyPositive::new(config.tolerance)
            .map_err(|source| CableError::input("tolerance", source))?
            .into_inner()
            .get::<delta_kelvin>();
        let relaxation = config.relaxation.into_inner();

        let mut temperature = match config.initial {
            InitialGuess::MaxConductorTemp => self.cable.max_conductor_temp.get::<kelvin>(),
            InitialGuess::AboveAmbient(rise) => ambient + rise.get::<delta_kelvin>(),
            InitialGuess::Fixed(start) => start.get::<kelvin>(),
        };

        let mut iters = 0;
        let (status, residual) = loop {
            iters += 1;
            let (losses, resistances) = self.evaluate(current, temperature, ambient)?;
            let target = ambient + losses.total.value * resistances.total().value;

            if target.is_nan() || target > RUNAWAY_LIMIT_K {
                let gap = (RUNAWAY_LIMIT_K - temperature).abs();
                temperature = RUNAWAY_LIMIT_K;
                break (IterationStatus::Diverged, gap);
            }

            // Convergence is judged on the undamped gap to the new candidate.
            let gap = (target - temperature).abs();
            trace!(iter = iters, temperature, target, gap, "temperature iterate");

            if gap < tolerance {
                temperature = target;
                break (IterationStatus::Converged, gap);
            }
            temperature += relaxation * (target - temperature);
            if iters >= max_iters {
                break (IterationStatus::MaxIters, gap);
            }
        };

        let (losses, resistances) = self.evaluate(current, temperature, ambient)?;

        match status {
            IterationStatus::Converged => debug!(
                cable = %self.cable.name,
                current,
                conductor_temp = temperature,
                iters,
                "steady-state temperature solved"
            ),
            IterationStatus::MaxIters => warn!(
                cable = %self.cable.name,
                current,
                conductor_temp = temperature,
                residual,
                iters,
                "temperature iteration hit iteration limit"
            ),
            IterationStatus::Diverged => warn!(
                cable = %self.cable.name,
                current,
                iters,
                "temperature iteration diverged"
            ),
        }

        Ok(TemperatureSolution {
            current: ElectricCurrent::new::<ampere>(current),
            conductor_temp: ThermodynamicTemperature::new::<kelvin>(temperature),
            ambient_temp: ThermodynamicTemperature::new::<kelvin>(ambient),
            profile: self.profile(&resistances, temperature, ambient),
            losses,
            resistances,
            iters,
            status,
            residual: TemperatureInterval::new::<delta_kelvin>(residual),
        })
    }

    /// Boundary temperatures scaled so the profile runs from the conductor
    /// temperature down to ambient along the outward resistance sums.
    fn profile(
        &self,
        resistances: &ThermalResistanceSet,
        conductor: f64,
        ambient: f64,
    ) -> Vec<ProfilePoint> {
        let sums = resistances.outward_sums();
        let total = sums[0];
        let at = |k: usize| {
            let share = if total > 0.0 { sums[k] / total } else { 0.0 };
            ThermodynamicTemperature::new::<kelvin>(ambient + (conductor - ambient) * share)
        };

        let all_layers: Vec<_> = self
            .cable
            .layers()
            .iter()
            .chain(self.cable.external_layers())
            .collect();

        let mut profile = Vec::with_capacity(all_layers.len() + 2);
        profile.push(ProfilePoint {
            label: "conductor".to_owned(),
            radius: all_layers.first().map(|layer| layer.inner_radius()),
            temperature: ThermodynamicTemperature::new::<kelvin>(conductor),
        });
        for (index, layer) in all_layers.iter().enumerate() {
            profile.push(ProfilePoint {
                label: layer.name().to_owned(),
                radius: Some(layer.outer_radius()),
                temperature: at(index + 1),
            });
        }
        profile.push(ProfilePoint {
            label: "ambient".to_owned(),
            radius: None,
            temperature: ThermodynamicTemperature::new::<kelvin>(ambient),
        });
        profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Frequency, Length, ThermalConductivity},
        frequency::hertz,
        length::millimeter,
        thermal_conductivity::watt_per_meter_kelvin,
        thermodynamic_temperature::degree_celsius,
    };

    use crate::models::thermal::cable::core::{
        EnvironmentResistance, Grouping, InstallationMethod,
        test_support::{mv_buried, mv_in_air},
    };

    fn amps(value: f64) -> ElectricCurrent {
        ElectricCurrent::new::<ampere>(value)
    }

    #[test]
    fn buried_mv_cable_at_400_amps() {
        let solution = mv_buried().temperature(&TemperatureConfig::default()).unwrap();

        let t = solution.conductor_temp.get::<degree_celsius>();
        let r = solution.thermal_resistance().value;
        assert!(t > 25.0 && t < 60.0, "conductor at {t} °C");
        assert!(r > 0.5 && r < 3.0, "R_th = {r}");
        assert!(solution.is_converged());
        assert!(solution.iters <= 10);

        let balance = solution.ambient_temp.get::<kelvin>() + solution.losses.total.value * r;
        assert_relative_eq!(
            solution.conductor_temp.get::<kelvin>(),
            balance,
            epsilon = 0.2
        );
    }

    #[test]
    fn repeated_solves_agree() {
        let cable = mv_buried();
        let a = cable.temperature(&TemperatureConfig::default()).unwrap();
        let b = cable.temperature(&TemperatureConfig::default()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn profile_falls_outward_to_ambient() {
        let solution = mv_buried().temperature(&TemperatureConfig::default()).unwrap();
        let profile = &solution.profile;

        assert_eq!(profile.first().unwrap().label, "conductor");
        assert_eq!(profile.last().unwrap().label, "ambient");
        assert!(profile.last().unwrap().radius.is_none());
        assert_eq!(profile[0].temperature, solution.conductor_temp);
        assert!(
            profile
                .windows(2)
                .all(|w| w[0].temperature.value >= w[1].temperature.value)
        );
    }

    #[test]
    fn zero_current_sits_at_ambient() {
        let cable = mv_buried();
        let solution = cable
            .temperature_at(amps(0.0), &TemperatureConfig::default())
            .unwrap();
        assert_relative_eq!(
            solution.conductor_temp.get::<kelvin>(),
            cable.ambient_temp.get::<kelvin>(),
            epsilon = 1e-9
        );
        assert_eq!(solution.losses.total.value, 0.0);
    }

    #[test]
    fn single_iteration_does_not_converge() {
        let config = TemperatureConfig {
            max_iters: 1,
            ..TemperatureConfig::default()
        };
        let cable = mv_buried();
        assert!(matches!(
            cable.temperature(&config),
            Err(CableError::NonConvergence { iters: 1, .. })
        ));

        let estimate = cable.estimate_temperature(cable.current(), &config).unwrap();
        assert_eq!(estimate.status, IterationStatus::MaxIters);
    }

    #[test]
    fn damped_convergence_uses_the_undamped_gap() {
        let cable = mv_buried();
        let exact = cable
            .temperature(&TemperatureConfig {
                max_iters: 200,
                tolerance: TemperatureInterval::new::<delta_kelvin>(1e-9),
                ..TemperatureConfig::default()
            })
            .unwrap()
            .conductor_temp
            .get::<kelvin>();

        let start_at = |offset: f64| TemperatureConfig {
            max_iters: 1,
            initial: InitialGuess::Fixed(ThermodynamicTemperature::new::<kelvin>(exact + offset)),
            ..TemperatureConfig::damped()
        };

        // Half the gap is below 0.05 K, the gap itself is not.
        let far = cable
            .estimate_temperature(cable.current(), &start_at(0.08))
            .unwrap();
        assert_eq!(far.status, IterationStatus::MaxIters);
        let gap = far.residual.get::<delta_kelvin>();
        assert!(gap > 0.05 && gap < 0.1, "gap {gap} K");

        let near = cable
            .estimate_temperature(cable.current(), &start_at(0.03))
            .unwrap();
        assert_eq!(near.status, IterationStatus::Converged);
        assert!(near.residual.get::<delta_kelvin>() < 0.05);
    }

    #[test]
    fn runaway_is_reported_as_divergence() {
        let cable = mv_buried();
        assert!(matches!(
            cable.temperature_at(amps(20_000.0), &TemperatureConfig::default()),
            Err(CableError::Diverged { .. })
        ));

        let estimate = cable
            .estimate_temperature(amps(20_000.0), &TemperatureConfig::default())
            .unwrap();
        assert_eq!(estimate.status, IterationStatus::Diverged);
        assert_eq!(estimate.conductor_temp.get::<kelvin>(), RUNAWAY_LIMIT_K);
    }

    #[test]
    fn cable_in_air_converges_with_damping() {
        let solution = mv_in_air().temperature(&TemperatureConfig::damped()).unwrap();
        let t = solution.conductor_temp.get::<degree_celsius>();
        assert!(t > 25.0 && t < 90.0, "conductor at {t} °C");
        assert!(matches!(
            solution.resistances.environment,
            Some(EnvironmentResistance::Surface { .. })
        ));
        assert!(solution.losses.shield.value > 0.0);
    }

    #[test]
    fn grouping_runs_hotter() {
        let single = mv_buried();
        let grouped = single
            .clone()
            .with_grouping(Grouping::new(3, Length::new::<millimeter>(5.0)).unwrap());

        let config = TemperatureConfig::default();
        let t1 = single.temperature(&config).unwrap();
        let t3 = grouped.temperature(&config).unwrap();
        assert!(t3.conductor_temp > t1.conductor_temp);
        assert!(t3.resistances.grouping.value > 0.0);
    }

    #[test]
    fn installation_method_scales_the_circuit() {
        let buried = mv_buried();
        let config = TemperatureConfig::default();
        let reference = buried.temperature(&config).unwrap();

        let in_duct = buried
            .clone()
            .with_installation(InstallationMethod::InDuct)
            .temperature(&config)
            .unwrap();
        assert!(in_duct.conductor_temp > reference.conductor_temp);
        assert_relative_eq!(in_duct.resistances.installation_factor, 0.85);

        let in_water = buried
            .with_installation(InstallationMethod::InWater)
            .temperature(&config)
            .unwrap();
        assert!(in_water.conductor_temp < reference.conductor_temp);
        assert!(
            in_water
                .profile
                .windows(2)
                .all(|w| w[0].temperature.value >= w[1].temperature.value)
        );
    }

    #[test]
    fn ac_losses_run_hotter_than_dc() {
        let dc = mv_buried();
        let ac = dc
            .clone()
            .with_losses(LossModel::ac(Frequency::new::<hertz>(50.0)).unwrap());

        let config = TemperatureConfig::default();
        let t_dc = dc.temperature(&config).unwrap();
        let t_ac = ac.temperature(&config).unwrap();
        assert!(t_ac.conductor_temp > t_dc.conductor_temp);
        assert!(t_ac.losses.skin_factor > 0.0);
    }

    #[test]
    fn zero_tolerance_is_invalid_input() {
        let config = TemperatureConfig {
            tolerance: TemperatureInterval::new::<delta_kelvin>(0.0),
            ..TemperatureConfig::default()
        };
        assert!(matches!(
            mv_buried().temperature(&config),
            Err(CableError::InvalidInput {
                field: "tolerance",
                ..
            })
        ));
    }

    #[test]
    fn conductor_without_resistivity_is_rejected() {
        let mut cable = CableConfiguration::new("bare");
        cable
            .push_layer(
                "Conductor",
                Length::new::<millimeter>(8.7),
                ThermalConductivity::new::<watt_per_meter_kelvin>(380.0),
            )
            .unwrap();
        assert!(matches!(
            cable.temperature(&TemperatureConfig::default()),
            Err(CableError::MissingConductorProperties { .. })
        ));
    }
}
