//! One-dimensional steady conduction through planar walls.
//!
//! Cable trenches and duct banks are often assessed alongside the building
//! elements they pass through. This module covers the planar counterpart of
//! the cylindrical cable model: Fourier conduction through a single slab,
//! series resistances of a layered wall (U-value), the temperature profile
//! through the wall, and the lumped heat capacity of a volume of material.
//!
//! ```
//! use cable_thermal::support::planar::PlanarWall;
//! use uom::si::{
//!     f64::{Length, ThermalConductivity},
//!     heat_transfer::watt_per_square_meter_kelvin,
//!     length::meter,
//!     thermal_conductivity::watt_per_meter_kelvin,
//! };
//!
//! let mut wall = PlanarWall::new();
//! wall.push_layer(
//!     "Concrete",
//!     Length::new::<meter>(0.20),
//!     ThermalConductivity::new::<watt_per_meter_kelvin>(2.1),
//! )
//! .unwrap();
//! wall.push_layer(
//!     "EPS",
//!     Length::new::<meter>(0.12),
//!     ThermalConductivity::new::<watt_per_meter_kelvin>(0.035),
//! )
//! .unwrap();
//!
//! let u = wall.u_value().unwrap();
//! assert!((u.u_value.get::<watt_per_square_meter_kelvin>() - 0.27).abs() < 0.01);
//! ```

use thiserror::Error;
use uom::si::{
    area::square_meter,
    f64::{
        Area, HeatCapacity, HeatFluxDensity, HeatTransfer, Length, Power, Ratio,
        TemperatureInterval, ThermalConductance, ThermalConductivity, ThermodynamicTemperature,
        Time, Volume,
    },
    heat_capacity::joule_per_kelvin,
    heat_flux_density::watt_per_square_meter,
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    power::watt,
    ratio::ratio,
    temperature_interval::kelvin as delta_kelvin,
    thermal_conductance::watt_per_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
    time::second,
    volume::cubic_meter,
};

use crate::support::{
    constraint::{Constrained, ConstraintError, StrictlyPositive, UnitIntervalLowerOpen},
    materials::{Material, MaterialDatabase, MaterialError},
    units::{AreaThermalResistance, TemperatureDifference, area_thermal_resistance},
};

/// Inside surface resistance for horizontal heat flow, m²·K/W.
const R_SI: f64 = 0.13;

/// Outside surface resistance, m²·K/W.
const R_SE: f64 = 0.04;

/// Errors from planar conduction calculations.
#[derive(Debug, Error)]
pub enum PlanarError {
    /// An input is outside its physical range.
    #[error("invalid {field}")]
    InvalidInput {
        field: &'static str,
        #[source]
        source: ConstraintError,
    },

    /// A material lookup failed.
    #[error(transparent)]
    Material(#[from] MaterialError),

    /// The wall has no layers.
    #[error("wall has no layers")]
    EmptyWall,
}

fn positive<T>(field: &'static str, value: T) -> Result<T, PlanarError>
where
    T: PartialOrd + num_traits::Zero,
{
    StrictlyPositive::new(value)
        .map(Constrained::into_inner)
        .map_err(|source| PlanarError::InvalidInput { field, source })
}

/// Steady heat flow through a single homogeneous slab.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatFlow {
    /// Heat flow rate `Q = λ·A·ΔT/d`.
    pub heat_rate: Power,

    /// Heat flux `Q/A`.
    pub heat_flux: HeatFluxDensity,

    /// Conductance `λ·A/d` of the slab.
    pub conductance: ThermalConductance,

    /// Area-specific resistance `d/λ`.
    pub resistance: AreaThermalResistance,
}

/// Computes the steady heat flow through a slab by Fourier's law.
///
/// # Errors
///
/// Returns [`PlanarError::InvalidInput`] if the conductivity, area or
/// thickness is not strictly positive.
pub fn fourier_heat_flow(
    conductivity: ThermalConductivity,
    area: Area,
    thickness: Length,
    delta_t: TemperatureInterval,
) -> Result<HeatFlow, PlanarError> {
    let lambda = positive("thermal conductivity", conductivity)?.get::<watt_per_meter_kelvin>();
    let a = positive("area", area)?.get::<square_meter>();
    let d = positive("thickness", thickness)?.get::<meter>();
    let dt = delta_t.get::<delta_kelvin>();

    let q = lambda * a * dt / d;

    Ok(HeatFlow {
        heat_rate: Power::new::<watt>(q),
        heat_flux: HeatFluxDensity::new::<watt_per_square_meter>(q / a),
        conductance: ThermalConductance::new::<watt_per_kelvin>(lambda * a / d),
        resistance: area_thermal_resistance(d / lambda),
    })
}

/// Lumped heat capacity `ρ·c·V` of a volume of material.
///
/// # Errors
///
/// Returns [`PlanarError::InvalidInput`] if the volume is not strictly positive.
pub fn thermal_mass(material: &Material, volume: Volume) -> Result<HeatCapacity, PlanarError> {
    let v = positive("volume", volume)?.get::<cubic_meter>();
    Ok(HeatCapacity::new::<joule_per_kelvin>(
        material.volumetric_heat_capacity() * v,
    ))
}

/// Time to change the temperature of a volume of material at constant power.
///
/// Computed as `C·ΔT/P` with `C` from [`thermal_mass`]; losses to the
/// surroundings are ignored.
///
/// # Errors
///
/// Returns [`PlanarError::InvalidInput`] if the volume or power is not strictly positive.
pub fn heating_time(
    material: &Material,
    volume: Volume,
    delta_t: TemperatureInterval,
    power: Power,
) -> Result<Time, PlanarError> {
    let c = thermal_mass(material, volume)?.get::<joule_per_kelvin>();
    let p = positive("power", power)?.get::<watt>();
    Ok(Time::new::<second>(c * delta_t.get::<delta_kelvin>().abs() / p))
}

/// A homogeneous layer of a planar wall.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanarLayer {
    pub name: String,
    thickness: Constrained<Length, StrictlyPositive>,
    conductivity: Constrained<ThermalConductivity, StrictlyPositive>,
}

impl PlanarLayer {
    #[must_use]
    pub fn thickness(&self) -> Length {
        self.thickness.into_inner()
    }

    #[must_use]
    pub fn conductivity(&self) -> ThermalConductivity {
        self.conductivity.into_inner()
    }

    /// Area-specific resistance `d/λ` in m²·K/W.
    fn resistance(&self) -> f64 {
        self.thickness().get::<meter>() / self.conductivity().get::<watt_per_meter_kelvin>()
    }
}

/// A multi-layer planar wall, ordered from inside to outside.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanarWall {
    layers: Vec<PlanarLayer>,
    inside_resistance: AreaThermalResistance,
    outside_resistance: AreaThermalResistance,
}

impl Default for PlanarWall {
    fn default() -> Self {
        Self {
            layers: Vec::new(),
            inside_resistance: area_thermal_resistance(R_SI),
            outside_resistance: area_thermal_resistance(R_SE),
        }
    }
}

/// Resistance breakdown of one wall layer.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerResistance {
    pub name: String,
    pub thickness: Length,
    pub conductivity: ThermalConductivity,
    pub resistance: AreaThermalResistance,
}

/// Result of [`PlanarWall::u_value`].
#[derive(Debug, Clone, PartialEq)]
pub struct UValue {
    /// Thermal transmittance `1/R_total`.
    pub u_value: HeatTransfer,

    /// `R_si + Σ d/λ + R_se`.
    pub total_resistance: AreaThermalResistance,

    /// Per-layer resistances, inside to outside.
    pub layers: Vec<LayerResistance>,
}

/// A point of a wall temperature profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallPoint {
    /// Distance from the inside surface.
    pub position: Length,
    pub temperature: ThermodynamicTemperature,
}

/// Result of [`PlanarWall::temperature_distribution`].
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureDistribution {
    /// Inside air, inside surface, points through each layer, outside air.
    ///
    /// The last point within the final layer is the outside surface.
    pub points: Vec<WallPoint>,
    pub heat_flux: HeatFluxDensity,
    pub u_value: HeatTransfer,
}

/// Result of [`PlanarWall::condensation_risk`].
#[derive(Debug, Clone, PartialEq)]
pub struct CondensationRisk {
    pub dew_point_inside: ThermodynamicTemperature,
    pub dew_point_outside: ThermodynamicTemperature,

    /// Profile points colder than the inside dew point.
    pub at_risk: Vec<WallPoint>,
    pub distribution: TemperatureDistribution,
}

impl CondensationRisk {
    #[must_use]
    pub fn has_risk(&self) -> bool {
        !self.at_risk.is_empty()
    }
}

impl PlanarWall {
    /// Creates an empty wall with the standard surface resistances
    /// (`R_si = 0.13`, `R_se = 0.04` m²·K/W).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the surface resistances.
    ///
    /// # Errors
    ///
    /// Returns [`PlanarError::InvalidInput`] if either resistance is negative.
    pub fn with_surface_resistances(
        mut self,
        inside: AreaThermalResistance,
        outside: AreaThermalResistance,
    ) -> Result<Self, PlanarError> {
        for (field, r) in [("inside resistance", inside), ("outside resistance", outside)] {
            if r.value.is_nan() {
                return Err(PlanarError::InvalidInput {
                    field,
                    source: ConstraintError::NotANumber,
                });
            }
            if r.value < 0.0 {
                return Err(PlanarError::InvalidInput {
                    field,
                    source: ConstraintError::Negative,
                });
            }
        }
        self.inside_resistance = inside;
        self.outside_resistance = outside;
        Ok(self)
    }

    /// Appends a layer on the outside.
    ///
    /// # Errors
    ///
    /// Returns [`PlanarError::InvalidInput`] if the thickness or conductivity
    /// is not strictly positive.
    pub fn push_layer(
        &mut self,
        name: impl Into<String>,
        thickness: Length,
        conductivity: ThermalConductivity,
    ) -> Result<(), PlanarError> {
        let thickness = StrictlyPositive::new(thickness).map_err(|source| {
            PlanarError::InvalidInput {
                field: "thickness",
                source,
            }
        })?;
        let conductivity = StrictlyPositive::new(conductivity).map_err(|source| {
            PlanarError::InvalidInput {
                field: "thermal conductivity",
                source,
            }
        })?;

        self.layers.push(PlanarLayer {
            name: name.into(),
            thickness,
            conductivity,
        });
        Ok(())
    }

    /// Appends a layer of a named database material.
    ///
    /// # Errors
    ///
    /// Returns [`PlanarError::Material`] for unknown materials and
    /// [`PlanarError::InvalidInput`] for a non-positive thickness.
    pub fn push_material(
        &mut self,
        db: &MaterialDatabase,
        material: &str,
        thickness: Length,
    ) -> Result<(), PlanarError> {
        let lambda = db.get(material)?.thermal_conductivity();
        self.push_layer(material, thickness, lambda)
    }

    #[must_use]
    pub fn layers(&self) -> &[PlanarLayer] {
        &self.layers
    }

    /// Total wall thickness.
    #[must_use]
    pub fn thickness(&self) -> Length {
        Length::new::<meter>(self.layers.iter().map(|l| l.thickness().get::<meter>()).sum())
    }

    /// Computes the thermal transmittance `U = 1/(R_si + Σ d/λ + R_se)`.
    ///
    /// # Errors
    ///
    /// Returns [`PlanarError::EmptyWall`] if the wall has no layers.
    pub fn u_value(&self) -> Result<UValue, PlanarError> {
        if self.layers.is_empty() {
            return Err(PlanarError::EmptyWall);
        }

        let layers: Vec<_> = self
            .layers
            .iter()
            .map(|l| LayerResistance {
                name: l.name.clone(),
                thickness: l.thickness(),
                conductivity: l.conductivity(),
                resistance: area_thermal_resistance(l.resistance()),
            })
            .collect();

        let r_total = self.inside_resistance.value
            + layers.iter().map(|l| l.resistance.value).sum::<f64>()
            + self.outside_resistance.value;

        Ok(UValue {
            u_value: HeatTransfer::new::<watt_per_square_meter_kelvin>(1.0 / r_total),
            total_resistance: area_thermal_resistance(r_total),
            layers,
        })
    }

    /// Computes the steady temperature profile through the wall.
    ///
    /// Each layer is sampled at `points_per_layer` evenly spaced positions,
    /// the last of which is the layer's outer face.
    ///
    /// # Errors
    ///
    /// Returns [`PlanarError::EmptyWall`] if the wall has no layers and
    /// [`PlanarError::InvalidInput`] if `points_per_layer` is zero.
    pub fn temperature_distribution(
        &self,
        inside: ThermodynamicTemperature,
        outside: ThermodynamicTemperature,
        points_per_layer: usize,
    ) -> Result<TemperatureDistribution, PlanarError> {
        let points_per_layer = positive("points per layer", points_per_layer)?;
        let u = self.u_value()?.u_value.get::<watt_per_square_meter_kelvin>();

        let q = u * inside.minus(outside).get::<delta_kelvin>();
        let point = |x: f64, t: f64| WallPoint {
            position: Length::new::<meter>(x),
            temperature: ThermodynamicTemperature::new::<degree_celsius>(t),
        };

        let t_inside = inside.get::<degree_celsius>();
        let mut points = Vec::with_capacity(self.layers.len() * points_per_layer + 3);
        points.push(point(0.0, t_inside));

        let mut x0 = 0.0;
        let mut t0 = t_inside - q * self.inside_resistance.value;
        points.push(point(x0, t0));

        #[allow(clippy::cast_precision_loss)]
        let n = points_per_layer as f64;
        for layer in &self.layers {
            let d = layer.thickness().get::<meter>();
            let lambda = layer.conductivity().get::<watt_per_meter_kelvin>();
            for i in 1..=points_per_layer {
                #[allow(clippy::cast_precision_loss)]
                let dx = d * i as f64 / n;
                points.push(point(x0 + dx, t0 - q * dx / lambda));
            }
            x0 += d;
            t0 -= q * d / lambda;
        }

        points.push(point(x0, outside.get::<degree_celsius>()));

        Ok(TemperatureDistribution {
            points,
            heat_flux: HeatFluxDensity::new::<watt_per_square_meter>(q),
            u_value: HeatTransfer::new::<watt_per_square_meter_kelvin>(u),
        })
    }

    /// Checks the temperature profile against the inside dew point.
    ///
    /// A simplified Glaser assessment: any profile point colder than the
    /// dew point of the inside air is reported as at risk. Saturation
    /// pressure follows the Magnus formula.
    ///
    /// # Errors
    ///
    /// Returns [`PlanarError::InvalidInput`] if a relative humidity is not in
    /// `(0, 1]`, plus the errors of [`PlanarWall::temperature_distribution`].
    pub fn condensation_risk(
        &self,
        inside: ThermodynamicTemperature,
        outside: ThermodynamicTemperature,
        humidity_inside: Ratio,
        humidity_outside: Ratio,
        points_per_layer: usize,
    ) -> Result<CondensationRisk, PlanarError> {
        let rh = |field: &'static str, value: Ratio| {
            UnitIntervalLowerOpen::new(value.get::<ratio>())
                .map(Constrained::into_inner)
                .map_err(|source| PlanarError::InvalidInput { field, source })
        };
        let rh_inside = rh("inside humidity", humidity_inside)?;
        let rh_outside = rh("outside humidity", humidity_outside)?;

        let distribution = self.temperature_distribution(inside, outside, points_per_layer)?;

        let dew_inside = dew_point(inside.get::<degree_celsius>(), rh_inside);
        let dew_outside = dew_point(outside.get::<degree_celsius>(), rh_outside);

        let at_risk = distribution
            .points
            .iter()
            .filter(|p| p.temperature.get::<degree_celsius>() < dew_inside)
            .copied()
            .collect();

        Ok(CondensationRisk {
            dew_point_inside: ThermodynamicTemperature::new::<degree_celsius>(dew_inside),
            dew_point_outside: ThermodynamicTemperature::new::<degree_celsius>(dew_outside),
            at_risk,
            distribution,
        })
    }
}

/// Saturation vapour pressure over water in Pa (Magnus), for `t` in °C.
fn saturation_pressure(t: f64) -> f64 {
    610.7 * ((17.27 * t) / (237.3 + t)).exp()
}

/// Dew point in °C of air at `t` °C and relative humidity `rh` in `(0, 1]`.
fn dew_point(t: f64, rh: f64) -> f64 {
    let g = (saturation_pressure(t) * rh / 610.7).ln();
    237.3 * g / (17.27 - g)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::ratio::percent;

    fn lambda(value: f64) -> ThermalConductivity {
        ThermalConductivity::new::<watt_per_meter_kelvin>(value)
    }

    fn concrete_eps_wall() -> PlanarWall {
        let mut wall = PlanarWall::new();
        wall.push_layer("Concrete", Length::new::<meter>(0.20), lambda(2.1))
            .unwrap();
        wall.push_layer("EPS", Length::new::<meter>(0.12), lambda(0.035))
            .unwrap();
        wall
    }

    #[test]
    fn fourier_round_trip() {
        let (k, a, d, dt) = (0.8, 12.5, 0.24, 18.0);
        let flow = fourier_heat_flow(
            lambda(k),
            Area::new::<square_meter>(a),
            Length::new::<meter>(d),
            TemperatureInterval::new::<delta_kelvin>(dt),
        )
        .unwrap();

        let resistance = d / (k * a);
        assert_relative_eq!(
            flow.heat_rate.get::<watt>(),
            dt / resistance,
            max_relative = 1e-10
        );
        assert_relative_eq!(
            flow.heat_flux.get::<watt_per_square_meter>(),
            k * dt / d,
            max_relative = 1e-12
        );
        assert_relative_eq!(flow.resistance.value, d / k);
        assert_relative_eq!(
            flow.conductance.get::<watt_per_kelvin>() * resistance,
            1.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn fourier_rejects_degenerate_slabs() {
        let area = Area::new::<square_meter>(1.0);
        let dt = TemperatureInterval::new::<delta_kelvin>(10.0);

        assert!(matches!(
            fourier_heat_flow(lambda(1.0), area, Length::new::<meter>(0.0), dt),
            Err(PlanarError::InvalidInput {
                field: "thickness",
                ..
            })
        ));
        assert!(matches!(
            fourier_heat_flow(lambda(0.0), area, Length::new::<meter>(0.1), dt),
            Err(PlanarError::InvalidInput {
                field: "thermal conductivity",
                ..
            })
        ));
        assert!(
            fourier_heat_flow(
                lambda(1.0),
                Area::new::<square_meter>(-1.0),
                Length::new::<meter>(0.1),
                dt
            )
            .is_err()
        );
    }

    #[test]
    fn u_value_is_inverse_series_resistance() {
        let u = concrete_eps_wall().u_value().unwrap();

        let expected_r = 0.13 + 0.20 / 2.1 + 0.12 / 0.035 + 0.04;
        assert_relative_eq!(u.total_resistance.value, expected_r, max_relative = 1e-12);
        assert_relative_eq!(
            u.u_value.get::<watt_per_square_meter_kelvin>(),
            1.0 / expected_r,
            max_relative = 1e-12
        );

        // Hand-calculation reference: R ≈ 3.66 m²K/W, U ≈ 0.273 W/(m²K).
        assert!((u.total_resistance.value - 3.66).abs() < 0.05);
        assert!((u.u_value.get::<watt_per_square_meter_kelvin>() - 0.273).abs() < 0.005);

        assert_eq!(u.layers.len(), 2);
        assert_relative_eq!(u.layers[1].resistance.value, 0.12 / 0.035);
    }

    #[test]
    fn empty_wall_is_an_error() {
        assert!(matches!(
            PlanarWall::new().u_value(),
            Err(PlanarError::EmptyWall)
        ));
    }

    #[test]
    fn database_layers() {
        let db = MaterialDatabase::builtin();
        let mut wall = PlanarWall::new();
        wall.push_material(&db, "Concrete (normal)", Length::new::<meter>(0.20))
            .unwrap();
        wall.push_material(&db, "Polystyrene (EPS)", Length::new::<meter>(0.12))
            .unwrap();

        assert_relative_eq!(
            wall.u_value().unwrap().total_resistance.value,
            concrete_eps_wall().u_value().unwrap().total_resistance.value
        );
        assert!(matches!(
            wall.push_material(&db, "Adamantium", Length::new::<meter>(0.1)),
            Err(PlanarError::Material(MaterialError::Unknown { .. }))
        ));
    }

    #[test]
    fn temperature_profile_is_monotonic_and_closes() {
        let wall = concrete_eps_wall();
        let inside = ThermodynamicTemperature::new::<degree_celsius>(20.0);
        let outside = ThermodynamicTemperature::new::<degree_celsius>(-10.0);

        let dist = wall.temperature_distribution(inside, outside, 4).unwrap();
        assert_eq!(dist.points.len(), 2 * 4 + 3);

        let temps: Vec<f64> = dist
            .points
            .iter()
            .map(|p| p.temperature.get::<degree_celsius>())
            .collect();
        assert!(temps.windows(2).all(|w| w[0] >= w[1]));

        let q = dist.heat_flux.get::<watt_per_square_meter>();
        let outer_surface = temps[temps.len() - 2];
        assert_relative_eq!(outer_surface, -10.0 + q * 0.04, epsilon = 1e-9);
        assert_relative_eq!(temps[1], 20.0 - q * 0.13, epsilon = 1e-9);

        let last = dist.points.last().unwrap();
        assert_relative_eq!(last.position.get::<meter>(), 0.32, epsilon = 1e-12);
        assert_relative_eq!(wall.thickness().get::<meter>(), 0.32, epsilon = 1e-12);
    }

    #[test]
    fn zero_points_per_layer_is_rejected() {
        let t = ThermodynamicTemperature::new::<degree_celsius>(20.0);
        assert!(matches!(
            concrete_eps_wall().temperature_distribution(t, t, 0),
            Err(PlanarError::InvalidInput { .. })
        ));
    }

    #[test]
    fn thermal_mass_and_heating_time() {
        let db = MaterialDatabase::builtin();
        let concrete = db.get("Concrete (normal)").unwrap();

        let c = thermal_mass(concrete, Volume::new::<cubic_meter>(2.0)).unwrap();
        assert_relative_eq!(c.get::<joule_per_kelvin>(), 2400.0 * 1000.0 * 2.0);

        let t = heating_time(
            concrete,
            Volume::new::<cubic_meter>(2.0),
            TemperatureInterval::new::<delta_kelvin>(5.0),
            Power::new::<watt>(2000.0),
        )
        .unwrap();
        assert_relative_eq!(t.get::<second>(), 4.8e6 * 5.0 / 2000.0);

        assert!(
            heating_time(
                concrete,
                Volume::new::<cubic_meter>(2.0),
                TemperatureInterval::new::<delta_kelvin>(5.0),
                Power::new::<watt>(0.0),
            )
            .is_err()
        );
    }

    #[test]
    fn dew_point_of_saturated_air_is_air_temperature() {
        assert_relative_eq!(dew_point(15.0, 1.0), 15.0, epsilon = 1e-9);
        assert!(dew_point(20.0, 0.5) < 10.0);
    }

    #[test]
    fn cold_uninsulated_wall_condenses() {
        let mut wall = PlanarWall::new();
        wall.push_layer("Glass", Length::new::<meter>(0.004), lambda(1.0))
            .unwrap();

        let risk = wall
            .condensation_risk(
                ThermodynamicTemperature::new::<degree_celsius>(20.0),
                ThermodynamicTemperature::new::<degree_celsius>(-10.0),
                Ratio::new::<percent>(60.0),
                Ratio::new::<percent>(80.0),
                2,
            )
            .unwrap();
        assert!(risk.has_risk());

        let insulated = concrete_eps_wall()
            .condensation_risk(
                ThermodynamicTemperature::new::<degree_celsius>(20.0),
                ThermodynamicTemperature::new::<degree_celsius>(5.0),
                Ratio::new::<percent>(50.0),
                Ratio::new::<percent>(80.0),
                2,
            )
            .unwrap();
        // Only the outside air and the outer layers fall below the dew point.
        assert!(
            insulated
                .at_risk
                .iter()
                .all(|p| p.position.get::<meter>() > 0.2)
        );
    }
}
