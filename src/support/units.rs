//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., temperature, length, power).
//! This module provides extensions that are useful for cable rating but aren't included in [`uom`].
//!
//! ## Per-length quantities
//!
//! Cable ratings are expressed per metre of cable, so several quantities carry
//! an extra `1/m` compared to their `uom` counterparts. See [`quantities`] for
//! the aliases and their SI constructors:
//!
//! ```
//! use cable_thermal::support::units::{LinearThermalResistance, linear_thermal_resistance};
//!
//! let r: LinearThermalResistance = linear_thermal_resistance(0.25);
//! assert_eq!(r.value, 0.25); // K·m/W
//! ```
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait provides a [`minus`](TemperatureDifference::minus) method
//! for subtracting one absolute temperature from another to get a temperature interval:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::degree_celsius;
//! use cable_thermal::support::units::TemperatureDifference;
//!
//! let conductor = ThermodynamicTemperature::new::<degree_celsius>(90.0);
//! let ambient = ThermodynamicTemperature::new::<degree_celsius>(20.0);
//! let rise = conductor.minus(ambient);
//! // rise is a TemperatureInterval, not a ThermodynamicTemperature
//! ```
//!
//! This extension trait is currently needed due to limitations in [`uom`].
//! See [`TemperatureDifference`] for details.

pub mod quantities;
mod temperature_difference;

pub use quantities::{
    AreaThermalResistance, ElectricalResistivity, LinearElectricalResistance, LinearHeatCapacity,
    LinearHeatRate, LinearThermalResistance, TemperatureCoefficient, TemperatureGradient,
    ThermalResistivity, area_thermal_resistance, electrical_resistivity,
    linear_electrical_resistance, linear_heat_capacity, linear_heat_rate,
    linear_thermal_resistance, temperature_coefficient, temperature_gradient, thermal_resistivity,
};
pub use temperature_difference::TemperatureDifference;
