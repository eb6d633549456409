use uom::si::{
    f64::{ThermalConductivity, ThermodynamicTemperature},
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use super::{Material, MaterialDatabase, MaterialError};

/// Polymeric insulation grades with their IEC temperature limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Insulation {
    /// Cross-linked polyethylene.
    Xlpe,
    /// Ethylene propylene rubber.
    Epr,
    /// Polyvinyl chloride.
    Pvc,
}

impl Insulation {
    #[must_use]
    pub fn thermal_conductivity(self) -> ThermalConductivity {
        let lambda = match self {
            Self::Xlpe => 0.286,
            Self::Epr => 0.4,
            Self::Pvc => 0.16,
        };
        ThermalConductivity::new::<watt_per_meter_kelvin>(lambda)
    }

    /// Maximum conductor temperature for continuous operation.
    #[must_use]
    pub fn max_continuous_temp(self) -> ThermodynamicTemperature {
        let celsius = match self {
            Self::Xlpe | Self::Epr => 90.0,
            Self::Pvc => 70.0,
        };
        ThermodynamicTemperature::new::<degree_celsius>(celsius)
    }

    /// Maximum conductor temperature during a short emergency overload.
    #[must_use]
    pub fn max_emergency_temp(self) -> ThermodynamicTemperature {
        let celsius = match self {
            Self::Xlpe | Self::Epr => 130.0,
            Self::Pvc => 100.0,
        };
        ThermodynamicTemperature::new::<degree_celsius>(celsius)
    }

    /// Name of this grade in [`MaterialDatabase::builtin`].
    #[must_use]
    pub fn material_name(self) -> &'static str {
        match self {
            Self::Xlpe => "XLPE",
            Self::Epr => "EPR",
            Self::Pvc => "PVC",
        }
    }

    /// Looks up this grade's full material data.
    ///
    /// # Errors
    ///
    /// Returns [`MaterialError::Unknown`] if the database lacks the entry.
    pub fn material(self, db: &MaterialDatabase) -> Result<&Material, MaterialError> {
        db.get(self.material_name())
    }
}
