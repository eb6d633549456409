use uom::si::{f64::Ratio, ratio::ratio};

use crate::{
    models::thermal::cable::core::CableError,
    support::{
        constraint::{Constrained, StrictlyPositive, UnitInterval},
        units::{ThermalResistivity, thermal_resistivity},
    },
};

/// Soil classes with a typical dry-ish thermal resistivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoilKind {
    Sand,
    Clay,
    Gravel,
    Rock,
    Peat,
}

impl SoilKind {
    /// Base thermal resistivity before moisture correction, K·m/W.
    #[must_use]
    pub fn base_resistivity(self) -> ThermalResistivity {
        thermal_resistivity(match self {
            Self::Sand => 1.2,
            Self::Clay => 1.0,
            Self::Gravel => 1.5,
            Self::Rock => 2.5,
            Self::Peat => 2.0,
        })
    }
}

/// Thermal resistivity of the soil around a buried cable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Soil {
    /// A measured or assumed resistivity.
    Resistivity(Constrained<ThermalResistivity, StrictlyPositive>),

    /// A soil class with a moisture ratio in `[0, 1]`.
    Kind {
        kind: SoilKind,
        moisture: Constrained<Ratio, UnitInterval>,
    },
}

impl Soil {
    /// # Errors
    ///
    /// Returns [`CableError::InvalidMaterial`] if the resistivity is not positive.
    pub fn from_resistivity(resistivity: ThermalResistivity) -> Result<Self, CableError> {
        StrictlyPositive::new(resistivity)
            .map(Self::Resistivity)
            .map_err(|source| CableError::material(Some("soil"), "thermal resistivity", source))
    }

    /// # Errors
    ///
    /// Returns [`CableError::InvalidInput`] if the moisture is outside `[0, 1]`.
    pub fn from_kind(kind: SoilKind, moisture: Ratio) -> Result<Self, CableError> {
        let moisture =
            UnitInterval::new(moisture).map_err(|source| CableError::input("moisture", source))?;
        Ok(Self::Kind { kind, moisture })
    }

    /// Effective resistivity; moisture lowers it linearly to half the base value.
    #[must_use]
    pub fn thermal_resistivity(&self) -> ThermalResistivity {
        match self {
            Self::Resistivity(rho) => rho.into_inner(),
            Self::Kind { kind, moisture } => {
                let wet = moisture.into_inner().get::<ratio>();
                kind.base_resistivity() * (1.0 - 0.5 * wet)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn moisture_halves_resistivity_at_saturation() {
        let dry = Soil::from_kind(SoilKind::Sand, Ratio::new::<ratio>(0.0)).unwrap();
        let wet = Soil::from_kind(SoilKind::Sand, Ratio::new::<ratio>(1.0)).unwrap();
        assert_relative_eq!(dry.thermal_resistivity().value, 1.2);
        assert_relative_eq!(wet.thermal_resistivity().value, 0.6);
    }

    #[test]
    fn clay_at_half_moisture() {
        let soil = Soil::from_kind(SoilKind::Clay, Ratio::new::<ratio>(0.5)).unwrap();
        assert_relative_eq!(soil.thermal_resistivity().value, 0.75);
    }

    #[test]
    fn rejects_invalid_soil() {
        assert!(Soil::from_resistivity(thermal_resistivity(0.0)).is_err());
        assert!(Soil::from_kind(SoilKind::Rock, Ratio::new::<ratio>(1.5)).is_err());
    }
}
