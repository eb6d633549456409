//! How heat leaves the outer surface of the cable.
//!
//! The base model ends at the last external layer, which is usually an
//! equivalent soil cylinder whose outer boundary is at ambient temperature.
//! The other two variants add a closed-form term outside the layer stack:
//! the image-source soil resistance of a buried cable, or a surface film of
//! convection and radiation in parallel for a cable in free air.

mod convection;
mod grouping;
mod installation;
mod radiation;
mod soil;

pub use convection::{AirProperties, Convection, nusselt_forced, nusselt_natural};
pub use grouping::{Grouping, grouping_factor};
pub use installation::InstallationMethod;
pub use radiation::Radiation;
pub use soil::{Soil, SoilKind};

use std::f64::consts::PI;

use uom::si::{f64::Length, length::meter};

use crate::support::{
    constraint::{ConstraintError, StrictlyPositive},
    units::linear_thermal_resistance,
};

use super::{CableError, EnvironmentResistance, GeometryError, parallel};

/// Installation environment outside the cable's layer stack.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Environment {
    /// Only the configured external layers (duct, backfill, soil cylinder).
    #[default]
    Layers,

    /// Directly buried in uniform soil with its axis at `depth`.
    Buried { depth: Length, soil: Soil },

    /// Exposed to air, cooled by convection and/or radiation.
    InAir {
        convection: Option<Convection>,
        radiation: Option<Radiation>,
    },
}

impl Environment {
    /// Checks the environment against a cable of the given outer radius.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::BurialTooShallow`] if a buried cable does not
    /// clear the ground surface, and [`CableError::InvalidInput`] for an
    /// in-air installation with neither convection nor radiation.
    pub fn validate(&self, outer_radius: Length) -> Result<(), CableError> {
        match self {
            Self::Layers => Ok(()),
            Self::Buried { depth, .. } => {
                StrictlyPositive::new(*depth - outer_radius).map_err(|_| {
                    GeometryError::BurialTooShallow {
                        depth: *depth,
                        outer_radius,
                    }
                })?;
                Ok(())
            }
            Self::InAir {
                convection: None,
                radiation: None,
            } => Err(CableError::input("environment", ConstraintError::Zero)),
            Self::InAir { .. } => Ok(()),
        }
    }

    /// Resistance between the outer surface and ambient, if any.
    ///
    /// All temperatures are in kelvin and the radius in metres. The surface
    /// temperature only matters for the in-air film coefficients.
    pub(crate) fn resistance(
        &self,
        outer_radius: f64,
        surface: f64,
        ambient: f64,
    ) -> Result<Option<EnvironmentResistance>, CableError> {
        match self {
            Self::Layers => Ok(None),
            Self::Buried { depth, soil } => {
                let rho = soil.thermal_resistivity().value;
                let r = rho / (2.0 * PI) * (2.0 * depth.get::<meter>() / outer_radius).ln();
                Ok(Some(EnvironmentResistance::Soil(linear_thermal_resistance(r))))
            }
            Self::InAir {
                convection,
                radiation,
            } => {
                let diameter = 2.0 * outer_radius;
                let perimeter = PI * diameter;

                let film =
                    |h: f64| (h > 0.0).then(|| linear_thermal_resistance(1.0 / (h * perimeter)));
                let r_conv = convection
                    .as_ref()
                    .and_then(|c| film(c.coefficient_si(diameter, surface, ambient)));
                let r_rad = radiation.as_ref().and_then(|r| {
                    film(r.coefficient_si(surface, r.surroundings_or(ambient)))
                });

                let combined = match (r_conv, r_rad) {
                    (Some(a), Some(b)) => parallel(a, b),
                    (Some(a), None) | (None, Some(a)) => a,
                    (None, None) => {
                        return Err(CableError::input("environment", ConstraintError::Zero));
                    }
                };

                Ok(Some(EnvironmentResistance::Surface {
                    convection: r_conv,
                    radiation: r_rad,
                    combined,
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::ThermodynamicTemperature, length::millimeter, thermodynamic_temperature::kelvin,
    };

    use crate::support::units::thermal_resistivity;

    #[test]
    fn buried_cable_uses_image_source_formula() {
        let env = Environment::Buried {
            depth: Length::new::<meter>(1.0),
            soil: Soil::from_resistivity(thermal_resistivity(1.0)).unwrap(),
        };

        let r = env.resistance(0.0196, 300.0, 293.15).unwrap().unwrap();
        let expected = 1.0 / (2.0 * PI) * (2.0 / 0.0196_f64).ln();
        assert_relative_eq!(r.value().value, expected, max_relative = 1e-12);
    }

    #[test]
    fn shallow_burial_is_rejected() {
        let env = Environment::Buried {
            depth: Length::new::<millimeter>(15.0),
            soil: Soil::from_resistivity(thermal_resistivity(1.0)).unwrap(),
        };
        assert!(matches!(
            env.validate(Length::new::<millimeter>(19.6)),
            Err(CableError::InvalidGeometry(GeometryError::BurialTooShallow { .. }))
        ));
    }

    #[test]
    fn air_without_heat_path_is_rejected() {
        let env = Environment::InAir {
            convection: None,
            radiation: None,
        };
        assert!(env.validate(Length::new::<millimeter>(25.0)).is_err());

        let dark = Environment::InAir {
            convection: None,
            radiation: Some(Radiation::new(0.0).unwrap()),
        };
        assert!(dark.resistance(0.025, 320.0, 298.15).is_err());
    }

    #[test]
    fn surface_film_is_parallel_combination() {
        let env = Environment::InAir {
            convection: Some(Convection::natural()),
            radiation: Some(Radiation::new(0.9).unwrap()),
        };

        let surface = ThermodynamicTemperature::new::<kelvin>(320.0);
        let ambient = ThermodynamicTemperature::new::<kelvin>(298.15);
        let Some(EnvironmentResistance::Surface {
            convection: Some(r_conv),
            radiation: Some(r_rad),
            combined,
        }) = env
            .resistance(0.025, surface.get::<kelvin>(), ambient.get::<kelvin>())
            .unwrap()
        else {
            panic!("expected a surface resistance with both paths");
        };

        assert!(combined.value < r_conv.value);
        assert!(combined.value < r_rad.value);
        assert_relative_eq!(
            1.0 / combined.value,
            1.0 / r_conv.value + 1.0 / r_rad.value,
            max_relative = 1e-12
        );
    }

    #[test]
    fn layers_only_adds_nothing() {
        let r = Environment::Layers.resistance(0.02, 300.0, 293.15).unwrap();
        assert!(r.is_none());
    }
}
