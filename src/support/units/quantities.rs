//! Quantity aliases for per-length cable quantities.
//!
//! Each alias is paired with a constructor taking the value in coherent SI
//! units. Read values back through the public `value` field, which is always
//! in SI.

use std::marker::PhantomData;

use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, N3, P1, P3, Z0},
};

/// Thermal resistance of one metre of cable, K·m/W in SI.
pub type LinearThermalResistance = Quantity<ISQ<N1, N1, P3, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Thermal resistivity of a medium (e.g., soil), K·m/W in SI.
///
/// Dimensionally identical to [`LinearThermalResistance`].
pub type ThermalResistivity = LinearThermalResistance;

/// Heat dissipated per metre of cable, W/m in SI.
pub type LinearHeatRate = Quantity<ISQ<P1, P1, N3, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Electrical resistance of one metre of conductor, Ω/m in SI.
pub type LinearElectricalResistance = Quantity<ISQ<P1, P1, N3, N2, Z0, Z0, Z0>, SI<f64>, f64>;

/// Electrical resistivity, Ω·m in SI.
pub type ElectricalResistivity = Quantity<ISQ<P3, P1, N3, N2, Z0, Z0, Z0>, SI<f64>, f64>;

/// Temperature coefficient of resistance, 1/K in SI.
pub type TemperatureCoefficient = Quantity<ISQ<Z0, Z0, Z0, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Thermal resistance of a unit area of planar wall, m²·K/W in SI.
pub type AreaThermalResistance = Quantity<ISQ<Z0, N1, P3, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Heat capacity of one metre of cable, J/(K·m) in SI.
pub type LinearHeatCapacity = Quantity<ISQ<P1, P1, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Temperature change per unit depth, K/m in SI.
pub type TemperatureGradient = Quantity<ISQ<N1, Z0, Z0, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Creates a [`LinearThermalResistance`] from K·m/W.
#[must_use]
pub fn linear_thermal_resistance(kelvin_meter_per_watt: f64) -> LinearThermalResistance {
    LinearThermalResistance {
        dimension: PhantomData,
        units: PhantomData,
        value: kelvin_meter_per_watt,
    }
}

/// Creates a [`ThermalResistivity`] from K·m/W.
#[must_use]
pub fn thermal_resistivity(kelvin_meter_per_watt: f64) -> ThermalResistivity {
    linear_thermal_resistance(kelvin_meter_per_watt)
}

/// Creates a [`LinearHeatRate`] from W/m.
#[must_use]
pub fn linear_heat_rate(watt_per_meter: f64) -> LinearHeatRate {
    LinearHeatRate {
        dimension: PhantomData,
        units: PhantomData,
        value: watt_per_meter,
    }
}

/// Creates a [`LinearElectricalResistance`] from Ω/m.
#[must_use]
pub fn linear_electrical_resistance(ohm_per_meter: f64) -> LinearElectricalResistance {
    LinearElectricalResistance {
        dimension: PhantomData,
        units: PhantomData,
        value: ohm_per_meter,
    }
}

/// Creates an [`ElectricalResistivity`] from Ω·m.
///
/// Conductor data sheets usually quote Ω·mm²/m, which is `1e-6` Ω·m.
#[must_use]
pub fn electrical_resistivity(ohm_meter: f64) -> ElectricalResistivity {
    ElectricalResistivity {
        dimension: PhantomData,
        units: PhantomData,
        value: ohm_meter,
    }
}

/// Creates a [`TemperatureCoefficient`] from 1/K.
#[must_use]
pub fn temperature_coefficient(per_kelvin: f64) -> TemperatureCoefficient {
    TemperatureCoefficient {
        dimension: PhantomData,
        units: PhantomData,
        value: per_kelvin,
    }
}

/// Creates an [`AreaThermalResistance`] from m²·K/W.
#[must_use]
pub fn area_thermal_resistance(square_meter_kelvin_per_watt: f64) -> AreaThermalResistance {
    AreaThermalResistance {
        dimension: PhantomData,
        units: PhantomData,
        value: square_meter_kelvin_per_watt,
    }
}

/// Creates a [`LinearHeatCapacity`] from J/(K·m).
#[must_use]
pub fn linear_heat_capacity(joule_per_kelvin_meter: f64) -> LinearHeatCapacity {
    LinearHeatCapacity {
        dimension: PhantomData,
        units: PhantomData,
        value: joule_per_kelvin_meter,
    }
}

/// Creates a [`TemperatureGradient`] from K/m.
#[must_use]
pub fn temperature_gradient(kelvin_per_meter: f64) -> TemperatureGradient {
    TemperatureGradient {
        dimension: PhantomData,
        units: PhantomData,
        value: kelvin_per_meter,
    }
}
