use uom::si::{f64::ThermalConductivity, thermal_conductivity::watt_per_meter_kelvin};

use crate::support::units::{
    ElectricalResistivity, TemperatureCoefficient, electrical_resistivity, temperature_coefficient,
};

/// Electrical and thermal data for a conductor metal at 20 °C.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConductorMaterial {
    /// Display name.
    pub name: &'static str,
    resistivity: f64,
    temperature_coefficient: f64,
    thermal_conductivity: f64,
}

impl ConductorMaterial {
    /// Annealed copper: 0.0175 Ω·mm²/m, α = 0.00393 1/K.
    pub const COPPER: Self = Self {
        name: "Copper",
        resistivity: 1.75e-8,
        temperature_coefficient: 0.00393,
        thermal_conductivity: 380.0,
    };

    /// Hard-drawn aluminium: 0.0283 Ω·mm²/m, α = 0.00403 1/K.
    pub const ALUMINIUM: Self = Self {
        name: "Aluminium",
        resistivity: 2.83e-8,
        temperature_coefficient: 0.00403,
        thermal_conductivity: 230.0,
    };

    /// Electrical resistivity at 20 °C.
    #[must_use]
    pub fn resistivity(&self) -> ElectricalResistivity {
        electrical_resistivity(self.resistivity)
    }

    /// Temperature coefficient of resistance at 20 °C.
    #[must_use]
    pub fn temperature_coefficient(&self) -> TemperatureCoefficient {
        temperature_coefficient(self.temperature_coefficient)
    }

    #[must_use]
    pub fn thermal_conductivity(&self) -> ThermalConductivity {
        ThermalConductivity::new::<watt_per_meter_kelvin>(self.thermal_conductivity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn aluminium_is_more_resistive_than_copper() {
        let cu = ConductorMaterial::COPPER;
        let al = ConductorMaterial::ALUMINIUM;

        assert!(al.resistivity().value > cu.resistivity().value);
        assert!(al.thermal_conductivity() < cu.thermal_conductivity());

        // Data sheets quote Ω·mm²/m.
        assert_relative_eq!(cu.resistivity().value * 1e6, 0.0175);
        assert_relative_eq!(al.temperature_coefficient().value, 0.00403);
    }
}
