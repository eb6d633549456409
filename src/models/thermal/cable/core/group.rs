//! Mutual heating between cables buried in the same trench.
//!
//! Each cable sees its neighbours' losses as a rise of its own ambient
//! temperature through the image-source mutual resistance. The coupled
//! system is solved by Gauss–Seidel sweeps, re-solving one cable at a time
//! with the latest neighbour losses.

mod config;
mod error;

pub use config::GroupConfig;
pub use error::GroupError;

use std::f64::consts::PI;

use tracing::{debug, trace, warn};
use uom::si::{
    electric_current::ampere,
    f64::{ElectricCurrent, Length, TemperatureInterval, ThermodynamicTemperature},
    length::meter,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::{Constrained, StrictlyPositive, UnitInterval},
    units::{
        LinearThermalResistance, TemperatureGradient, ThermalResistivity,
        linear_thermal_resistance, temperature_gradient,
    },
};

use super::{
    CableConfiguration, CableError, GeometryError, Losses, TemperatureSolution,
    temperature::ThermalCircuit,
};

/// Geothermal gradient used unless one is set explicitly, K/m.
const DEFAULT_GRADIENT: f64 = 0.03;

/// A cable at a position in the trench cross-section.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedCable {
    /// Horizontal position of the cable axis.
    pub x: Length,

    /// Depth of the cable axis below the surface.
    pub depth: Length,

    pub cable: CableConfiguration,
    load_factor: Constrained<f64, UnitInterval>,
}

impl PositionedCable {
    /// A fully loaded cable.
    #[must_use]
    pub fn new(cable: CableConfiguration, x: Length, depth: Length) -> Self {
        Self {
            x,
            depth,
            cable,
            load_factor: UnitInterval::one(),
        }
    }

    /// Scales the cable's configured current by `load_factor`.
    ///
    /// # Errors
    ///
    /// Returns [`CableError::InvalidInput`] if the factor is outside `[0, 1]`.
    pub fn with_load_factor(mut self, load_factor: f64) -> Result<Self, CableError> {
        self.load_factor = UnitInterval::new(load_factor)
            .map_err(|source| CableError::input("load_factor", source))?;
        Ok(self)
    }

    #[must_use]
    pub fn load_factor(&self) -> f64 {
        self.load_factor.into_inner()
    }

    /// The current the cable carries in the group.
    #[must_use]
    pub fn current(&self) -> ElectricCurrent {
        self.cable.current() * self.load_factor()
    }

    fn distance_to(&self, other: &Self) -> f64 {
        let dx = (self.x - other.x).get::<meter>();
        let dy = (self.depth - other.depth).get::<meter>();
        dx.hypot(dy)
    }
}

/// A set of cables sharing one body of soil.
#[derive(Debug, Clone, PartialEq)]
pub struct CableGroup {
    soil_resistivity: Constrained<ThermalResistivity, StrictlyPositive>,
    surface_temp: ThermodynamicTemperature,
    gradient: TemperatureGradient,
    cables: Vec<PositionedCable>,
}

/// Steady state of one cable in its group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedCable {
    pub conductor_temp: ThermodynamicTemperature,

    /// Undisturbed soil temperature at the cable's depth.
    pub ambient_temp: ThermodynamicTemperature,

    /// Temperature rise caused by the neighbours' losses.
    pub mutual_heating: TemperatureInterval,

    pub losses: Losses,
}

/// Result of the mutual-heating iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSolution {
    /// One entry per cable, in insertion order.
    pub cables: Vec<GroupedCable>,
    pub iters: usize,

    /// Largest conductor temperature change in the final sweep.
    pub residual: TemperatureInterval,
}

impl GroupSolution {
    /// Index and state of the hottest conductor.
    #[must_use]
    pub fn hottest(&self) -> Option<(usize, &GroupedCable)> {
        self.cables
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.conductor_temp.value.total_cmp(&b.conductor_temp.value))
    }
}

/// Hottest conductor of the group at one spacing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpacingResult {
    /// Centre-to-centre distance between neighbouring cables.
    pub spacing: Length,
    pub hottest: ThermodynamicTemperature,

    /// Limit minus hottest conductor temperature; negative when exceeded.
    pub margin: TemperatureInterval,
}

impl CableGroup {
    /// An empty group in soil of the given resistivity.
    ///
    /// The ambient at depth `z` is `surface_temp + gradient·z`, with a
    /// default gradient of 0.03 K/m.
    ///
    /// # Errors
    ///
    /// Returns [`CableError::InvalidInput`] if the resistivity is not positive.
    pub fn new(
        soil_resistivity: ThermalResistivity,
        surface_temp: ThermodynamicTemperature,
    ) -> Result<Self, CableError> {
        Ok(Self {
            soil_resistivity: StrictlyPositive::new(soil_resistivity)
                .map_err(|source| CableError::input("soil_resistivity", source))?,
            surface_temp,
            gradient: temperature_gradient(DEFAULT_GRADIENT),
            cables: Vec::new(),
        })
    }

    #[must_use]
    pub fn with_gradient(mut self, gradient: TemperatureGradient) -> Self {
        self.gradient = gradient;
        self
    }

    pub fn push(&mut self, cable: PositionedCable) -> &mut Self {
        self.cables.push(cable);
        self
    }

    #[must_use]
    pub fn cables(&self) -> &[PositionedCable] {
        &self.cables
    }

    #[must_use]
    pub fn soil_resistivity(&self) -> ThermalResistivity {
        self.soil_resistivity.into_inner()
    }

    /// Undisturbed soil temperature at `depth`.
    #[must_use]
    pub fn ambient_at(&self, depth: Length) -> ThermodynamicTemperature {
        let rise = self.gradient.value * depth.get::<meter>();
        self.surface_temp + TemperatureInterval::new::<delta_kelvin>(rise)
    }

    /// Mutual resistances `ρ/(2π)·ln(2·depth_i/d_ij)`, clamped at zero.
    ///
    /// Row `i` holds the resistances seen by cable `i`; the diagonal is zero.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::CoincidentCables`] if two cable axes coincide.
    pub fn mutual_resistances(&self) -> Result<Vec<Vec<LinearThermalResistance>>, CableError> {
        let rho = self.soil_resistivity().value;
        let n = self.cables.len();
        let mut matrix = vec![vec![linear_thermal_resistance(0.0); n]; n];

        for (i, row) in matrix.iter_mut().enumerate() {
            let depth = self.cables[i].depth.get::<meter>();
            for (j, entry) in row.iter_mut().enumerate() {
                if i == j {
                    continue;
                }
                let distance = self.cables[i].distance_to(&self.cables[j]);
                if distance <= 0.0 {
                    return Err(GeometryError::CoincidentCables {
                        first: i.min(j),
                        second: i.max(j),
                    }
                    .into());
                }
                let r = rho / (2.0 * PI) * (2.0 * depth / distance).ln();
                *entry = linear_thermal_resistance(r.max(0.0));
            }
        }
        Ok(matrix)
    }

    /// Solves every cable's conductor temperature including mutual heating.
    ///
    /// Sweeps start from each cable solved alone, so a cable without
    /// neighbouring heat settles in a single sweep.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::TooFewCables`] for an empty group,
    /// [`GroupError::Cable`] if a cable is invalid or its own solve fails,
    /// and [`GroupError::MaxIters`] if the sweeps do not settle.
    pub fn solve(&self, config: &GroupConfig) -> Result<GroupSolution, GroupError> {
        if self.cables.is_empty() {
            return Err(GroupError::TooFewCables {
                required: 1,
                found: 0,
            });
        }
        let max_iters = StrictlyPositive::new(config.max_iters)
            .map_err(|source| CableError::input("max_iters", source))?
            .into_inner();
        let tolerance = StrictlyPositive::new(config.tolerance)
            .map_err(|source| CableError::input("tolerance", source))?
            .into_inner()
            .get::<delta_kelvin>();

        let circuits = self
            .cables
            .iter()
            .enumerate()
            .map(|(index, placed)| {
                self.check_burial(placed).map_err(GroupError::cable(index))?;
                ThermalCircuit::new(&placed.cable).map_err(GroupError::cable(index))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let mutual = self.mutual_resistances()?;

        let ambient: Vec<f64> = self
            .cables
            .iter()
            .map(|placed| self.ambient_at(placed.depth).get::<kelvin>())
            .collect();
        let currents: Vec<f64> = self
            .cables
            .iter()
            .map(|placed| placed.current().get::<ampere>())
            .collect();

        let n = self.cables.len();

        // Each cable starts from its own solve without neighbours.
        let mut states = circuits
            .iter()
            .enumerate()
            .map(|(i, circuit)| {
                let alone = circuit
                    .solve(currents[i], ambient[i], &config.temperature)
                    .and_then(TemperatureSolution::into_result)
                    .map_err(GroupError::cable(i))?;
                Ok((alone.conductor_temp.get::<kelvin>(), 0.0, alone.losses))
            })
            .collect::<Result<Vec<(f64, f64, Losses)>, GroupError>>()?;
        let mut heat: Vec<f64> = states.iter().map(|(_, _, losses)| losses.total.value).collect();

        let mut iters = 0;
        let mut residual;
        loop {
            iters += 1;
            residual = 0.0_f64;

            for i in 0..n {
                let rise: f64 = (0..n)
                    .filter(|&j| j != i)
                    .map(|j| heat[j] * mutual[i][j].value)
                    .sum();

                let solution = circuits[i]
                    .solve(currents[i], ambient[i] + rise, &config.temperature)
                    .and_then(TemperatureSolution::into_result)
                    .map_err(GroupError::cable(i))?;

                let temperature = solution.conductor_temp.get::<kelvin>();
                residual = residual.max((temperature - states[i].0).abs());
                heat[i] = solution.losses.total.value;
                states[i] = (temperature, rise, solution.losses);
            }

            trace!(iter = iters, residual, "mutual heating sweep");

            if residual < tolerance {
                break;
            }
            if iters >= max_iters {
                warn!(iters, residual, "mutual heating iteration hit iteration limit");
                return Err(GroupError::MaxIters {
                    residual: TemperatureInterval::new::<delta_kelvin>(residual),
                    iters,
                });
            }
        }

        let cables = states
            .into_iter()
            .zip(&ambient)
            .map(|((temperature, rise, losses), &ambient)| GroupedCable {
                conductor_temp: ThermodynamicTemperature::new::<kelvin>(temperature),
                ambient_temp: ThermodynamicTemperature::new::<kelvin>(ambient),
                mutual_heating: TemperatureInterval::new::<delta_kelvin>(rise),
                losses,
            })
            .collect();

        debug!(cables = n, iters, residual, "cable group solved");
        Ok(GroupSolution {
            cables,
            iters,
            residual: TemperatureInterval::new::<delta_kelvin>(residual),
        })
    }

    /// A copy of the group with the cables evenly re-spaced in a row at the
    /// first cable's depth, `spacing` apart centre to centre.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::TooFewCables`] for an empty group and
    /// [`CableError::InvalidInput`] for a non-positive spacing.
    pub fn respaced(&self, spacing: Length) -> Result<Self, GroupError> {
        let depth = self
            .cables
            .first()
            .map(|placed| placed.depth)
            .ok_or(GroupError::TooFewCables {
                required: 1,
                found: 0,
            })?;
        let spacing = StrictlyPositive::new(spacing)
            .map_err(|source| CableError::input("spacing", source))?
            .into_inner();

        let mut group = self.clone();
        for (index, placed) in group.cables.iter_mut().enumerate() {
            placed.x = spacing * index as f64;
            placed.depth = depth;
        }
        Ok(group)
    }

    /// Hottest conductor and margin to `limit` for each spacing.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`CableGroup::respaced`] and
    /// [`CableGroup::solve`].
    pub fn spacing_scan(
        &self,
        spacings: &[Length],
        limit: ThermodynamicTemperature,
        config: &GroupConfig,
    ) -> Result<Vec<SpacingResult>, GroupError> {
        spacings
            .iter()
            .map(|&spacing| {
                let solution = self.respaced(spacing)?.solve(config)?;
                let hottest = solution
                    .hottest()
                    .map_or(self.surface_temp, |(_, cable)| cable.conductor_temp);
                Ok(SpacingResult {
                    spacing,
                    hottest,
                    margin: TemperatureInterval::new::<delta_kelvin>(
                        limit.get::<kelvin>() - hottest.get::<kelvin>(),
                    ),
                })
            })
            .collect()
    }

    /// Smallest of `spacings` that keeps every conductor at or below `limit`.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`CableGroup::spacing_scan`].
    pub fn min_spacing(
        &self,
        spacings: &[Length],
        limit: ThermodynamicTemperature,
        config: &GroupConfig,
    ) -> Result<Option<Length>, GroupError> {
        let scan = self.spacing_scan(spacings, limit, config)?;
        Ok(scan
            .into_iter()
            .filter(|result| result.margin.value >= 0.0)
            .map(|result| result.spacing)
            .min_by(|a, b| a.value.total_cmp(&b.value)))
    }

    /// Group derating factor `sqrt(ΔT_single/ΔT_group)`.
    ///
    /// `ΔT_group` is the largest conductor rise above its own ambient in the
    /// group and `ΔT_single` the largest rise of the same cables solved in
    /// isolation. A factor below one is the share of its isolated ampacity a
    /// cable can carry in the group.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::TooFewCables`] for fewer than two cables and the
    /// errors of [`CableGroup::solve`].
    pub fn derating_factor(&self, config: &GroupConfig) -> Result<f64, GroupError> {
        if self.cables.len() < 2 {
            return Err(GroupError::TooFewCables {
                required: 2,
                found: self.cables.len(),
            });
        }

        let grouped = self.solve(config)?;
        let rise_group = grouped
            .cables
            .iter()
            .map(|cable| cable.conductor_temp.value - cable.ambient_temp.value)
            .fold(0.0, f64::max);

        let mut rise_single = 0.0_f64;
        for (index, placed) in self.cables.iter().enumerate() {
            let ambient = self.ambient_at(placed.depth).get::<kelvin>();
            let alone = ThermalCircuit::new(&placed.cable)
                .and_then(|circuit| {
                    circuit.solve(
                        placed.current().get::<ampere>(),
                        ambient,
                        &config.temperature,
                    )
                })
                .and_then(TemperatureSolution::into_result)
                .map_err(GroupError::cable(index))?;
            rise_single = rise_single.max(alone.conductor_temp.get::<kelvin>() - ambient);
        }

        if rise_group <= 0.0 {
            return Ok(1.0);
        }
        Ok((rise_single / rise_group).sqrt().min(1.0))
    }

    fn check_burial(&self, placed: &PositionedCable) -> Result<(), CableError> {
        StrictlyPositive::new(placed.depth - placed.cable.cable_radius()).map_err(|_| {
            GeometryError::BurialTooShallow {
                depth: placed.depth,
                outer_radius: placed.cable.cable_radius(),
            }
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{length::millimeter, thermodynamic_temperature::degree_celsius};

    use crate::{
        models::thermal::cable::core::{TemperatureConfig, test_support::mv_buried},
        support::units::thermal_resistivity,
    };

    fn m(value: f64) -> Length {
        Length::new::<meter>(value)
    }

    fn celsius(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(value)
    }

    fn trefoil_row(spacing: f64) -> CableGroup {
        let mut group = CableGroup::new(thermal_resistivity(1.0), celsius(20.0))
            .unwrap()
            .with_gradient(temperature_gradient(0.0));
        for i in 0..3 {
            group.push(PositionedCable::new(mv_buried(), m(spacing * f64::from(i)), m(1.0)));
        }
        group
    }

    #[test]
    fn ambient_follows_geothermal_gradient() {
        let group = CableGroup::new(thermal_resistivity(1.0), celsius(10.0)).unwrap();
        assert_relative_eq!(
            group.ambient_at(m(2.0)).get::<degree_celsius>(),
            10.06,
            max_relative = 1e-12
        );
    }

    #[test]
    fn mutual_resistance_falls_with_distance() {
        let near = trefoil_row(0.2).mutual_resistances().unwrap();
        let far = trefoil_row(0.4).mutual_resistances().unwrap();

        let expected = 1.0 / (2.0 * PI) * (2.0 / 0.2_f64).ln();
        assert_relative_eq!(near[0][1].value, expected, max_relative = 1e-12);
        assert_eq!(near[1][1].value, 0.0);
        assert!(near[0][1].value > far[0][1].value);
        assert!(near[0][1].value > near[0][2].value);
    }

    #[test]
    fn distant_cables_do_not_interact() {
        let r = trefoil_row(3.0).mutual_resistances().unwrap();
        assert_eq!(r[0][1].value, 0.0);
    }

    #[test]
    fn coincident_cables_are_rejected() {
        assert!(matches!(
            trefoil_row(0.0).mutual_resistances(),
            Err(CableError::InvalidGeometry(GeometryError::CoincidentCables {
                first: 0,
                second: 1
            }))
        ));
    }

    #[test]
    fn middle_cable_runs_hottest() {
        let solution = trefoil_row(0.2).solve(&GroupConfig::default()).unwrap();

        let (index, _) = solution.hottest().unwrap();
        assert_eq!(index, 1);
        assert!(solution.cables.iter().all(|c| c.mutual_heating.value > 0.0));
        assert_relative_eq!(
            solution.cables[0].conductor_temp.value,
            solution.cables[2].conductor_temp.value,
            epsilon = 0.2
        );
    }

    #[test]
    fn single_cable_matches_standalone_solve() {
        let mut group = CableGroup::new(thermal_resistivity(1.0), celsius(20.0))
            .unwrap()
            .with_gradient(temperature_gradient(0.0));
        group.push(PositionedCable::new(mv_buried(), m(0.0), m(1.0)));

        let grouped = group.solve(&GroupConfig::default()).unwrap();
        let alone = mv_buried().temperature(&TemperatureConfig::default()).unwrap();
        assert_relative_eq!(
            grouped.cables[0].conductor_temp.get::<kelvin>(),
            alone.conductor_temp.get::<kelvin>(),
            epsilon = 1e-9
        );
        assert_eq!(grouped.cables[0].mutual_heating.value, 0.0);

        let one_sweep = GroupConfig {
            max_iters: 1,
            ..GroupConfig::default()
        };
        let grouped = group.solve(&one_sweep).unwrap();
        assert_eq!(grouped.iters, 1);
        assert_eq!(grouped.residual.value, 0.0);
    }

    #[test]
    fn unloaded_neighbours_add_no_heat() {
        let mut group = CableGroup::new(thermal_resistivity(1.0), celsius(20.0)).unwrap();
        group.push(PositionedCable::new(mv_buried(), m(0.0), m(1.0)));
        group.push(
            PositionedCable::new(mv_buried(), m(0.2), m(1.0))
                .with_load_factor(0.0)
                .unwrap(),
        );

        let solution = group.solve(&GroupConfig::default()).unwrap();
        assert_eq!(solution.cables[0].mutual_heating.value, 0.0);
        assert!(solution.cables[1].mutual_heating.value > 0.0);
        assert!(PositionedCable::new(mv_buried(), m(0.0), m(1.0)).with_load_factor(1.5).is_err());
    }

    #[test]
    fn empty_group_has_nothing_to_solve() {
        let group = CableGroup::new(thermal_resistivity(1.0), celsius(20.0)).unwrap();
        assert!(matches!(
            group.solve(&GroupConfig::default()),
            Err(GroupError::TooFewCables { required: 1, found: 0 })
        ));
    }

    #[test]
    fn shallow_cable_is_reported_by_index() {
        let mut group = trefoil_row(0.2);
        group.push(PositionedCable::new(mv_buried(), m(0.8), Length::new::<millimeter>(10.0)));
        assert!(matches!(
            group.solve(&GroupConfig::default()),
            Err(GroupError::Cable { index: 3, .. })
        ));
    }

    #[test]
    fn wider_spacing_runs_cooler() {
        let group = trefoil_row(0.1);
        let spacings = [m(0.1), m(0.3), m(0.6)];
        let scan = group
            .spacing_scan(&spacings, celsius(90.0), &GroupConfig::default())
            .unwrap();

        assert_eq!(scan.len(), 3);
        assert!(scan.windows(2).all(|w| w[0].hottest > w[1].hottest));
        assert!(scan.iter().all(|r| r.margin.value > 0.0));

        let min = group
            .min_spacing(&spacings, celsius(90.0), &GroupConfig::default())
            .unwrap();
        assert_eq!(min, Some(m(0.1)));

        let none = group
            .min_spacing(&spacings, celsius(25.0), &GroupConfig::default())
            .unwrap();
        assert_eq!(none, None);
    }

    #[test]
    fn derating_factor_is_below_one() {
        let factor = trefoil_row(0.2)
            .derating_factor(&GroupConfig::default())
            .unwrap();
        assert!(factor > 0.5 && factor < 1.0, "factor {factor}");

        let mut single = trefoil_row(0.2);
        single.cables.truncate(1);
        assert!(matches!(
            single.derating_factor(&GroupConfig::default()),
            Err(GroupError::TooFewCables { required: 2, found: 1 })
        ));
    }
}
