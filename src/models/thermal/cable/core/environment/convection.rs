//! Convective film coefficient on a horizontal cylinder.

use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{
        DynamicViscosity, HeatTransfer, Length, MassDensity, ThermalConductivity,
        ThermodynamicTemperature, Velocity,
    },
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::{
    models::thermal::cable::core::CableError,
    support::constraint::{Constrained, NonNegative},
};

const GRAVITY: f64 = 9.81;

/// Below this air speed only natural convection is considered, m/s.
const STILL_AIR_VELOCITY: f64 = 0.1;

/// Properties of the cooling air, taken as constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirProperties {
    pub density: MassDensity,
    pub dynamic_viscosity: DynamicViscosity,
    pub thermal_conductivity: ThermalConductivity,
    pub prandtl: f64,
}

/// Dry air at 20 °C.
impl Default for AirProperties {
    fn default() -> Self {
        Self {
            density: MassDensity::new::<kilogram_per_cubic_meter>(1.2),
            dynamic_viscosity: DynamicViscosity::new::<pascal_second>(1.81e-5),
            thermal_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.026),
            prandtl: 0.71,
        }
    }
}

/// Natural or mixed convection from the cable surface.
///
/// The characteristic length is the cable's outer diameter. Natural
/// convection uses the Morgan correlation for a horizontal cylinder; with a
/// cross wind the larger of the forced (Hilpert) and natural Nusselt numbers
/// is taken.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Convection {
    air_velocity: Constrained<Velocity, NonNegative>,
    air: AirProperties,
}

impl Convection {
    /// Convection in still air.
    #[must_use]
    pub fn natural() -> Self {
        Self {
            air_velocity: NonNegative::zero(),
            air: AirProperties::default(),
        }
    }

    /// Convection in a cross wind of the given speed.
    ///
    /// # Errors
    ///
    /// Returns [`CableError::InvalidInput`] if the velocity is negative.
    pub fn forced(air_velocity: Velocity) -> Result<Self, CableError> {
        Ok(Self {
            air_velocity: NonNegative::new(air_velocity)
                .map_err(|source| CableError::input("air_velocity", source))?,
            air: AirProperties::default(),
        })
    }

    #[must_use]
    pub fn with_air(mut self, air: AirProperties) -> Self {
        self.air = air;
        self
    }

    #[must_use]
    pub fn air_velocity(&self) -> Velocity {
        self.air_velocity.into_inner()
    }

    #[must_use]
    pub fn air(&self) -> &AirProperties {
        &self.air
    }

    /// Film coefficient for a cylinder of the given diameter.
    #[must_use]
    pub fn coefficient(
        &self,
        diameter: Length,
        surface: ThermodynamicTemperature,
        air: ThermodynamicTemperature,
    ) -> HeatTransfer {
        HeatTransfer::new::<watt_per_square_meter_kelvin>(self.coefficient_si(
            diameter.get::<meter>(),
            surface.get::<kelvin>(),
            air.get::<kelvin>(),
        ))
    }

    pub(crate) fn coefficient_si(&self, diameter: f64, surface: f64, air: f64) -> f64 {
        let rho = self.air.density.get::<kilogram_per_cubic_meter>();
        let mu = self.air.dynamic_viscosity.get::<pascal_second>();
        let k = self.air.thermal_conductivity.get::<watt_per_meter_kelvin>();
        let pr = self.air.prandtl;
        let velocity = self.air_velocity().get::<meter_per_second>();

        let film = 0.5 * (surface + air);
        let nu = mu / rho;
        let grashof = GRAVITY / film * (surface - air).abs() * diameter.powi(3) / (nu * nu);
        let natural = nusselt_natural(grashof, pr);

        let nusselt = if velocity < STILL_AIR_VELOCITY {
            natural
        } else {
            let reynolds = rho * velocity * diameter / mu;
            nusselt_forced(reynolds, pr).max(natural)
        };

        nusselt * k / diameter
    }
}

/// Nusselt number for natural convection around a horizontal cylinder.
///
/// Piecewise in the Rayleigh number `Ra = Gr·Pr`; bounded below by 0.4 for a
/// vanishing temperature difference.
#[must_use]
pub fn nusselt_natural(grashof: f64, prandtl: f64) -> f64 {
    let rayleigh = grashof * prandtl;
    if rayleigh < 1e-4 {
        0.4
    } else if rayleigh < 1e4 {
        0.675 * rayleigh.powf(0.058)
    } else if rayleigh < 1e9 {
        0.54 * rayleigh.powf(0.25)
    } else {
        0.135 * rayleigh.cbrt()
    }
}

/// Nusselt number for forced cross-flow over a cylinder.
#[must_use]
pub fn nusselt_forced(reynolds: f64, prandtl: f64) -> f64 {
    let (c, m) = if reynolds < 4.0 {
        (0.989, 0.330)
    } else if reynolds < 40.0 {
        (0.911, 0.385)
    } else if reynolds < 4000.0 {
        (0.683, 0.466)
    } else if reynolds < 40_000.0 {
        (0.193, 0.618)
    } else {
        (0.027, 0.805)
    };
    c * reynolds.powf(m) * prandtl.cbrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn still_air_has_a_floor() {
        assert_relative_eq!(nusselt_natural(0.0, 0.71), 0.4);

        let h = Convection::natural().coefficient_si(0.05, 293.15, 293.15);
        assert_relative_eq!(h, 0.4 * 0.026 / 0.05);
    }

    #[test]
    fn natural_convection_grows_with_temperature_difference() {
        let convection = Convection::natural();
        let warm = convection.coefficient_si(0.05, 313.15, 293.15);
        let hot = convection.coefficient_si(0.05, 353.15, 293.15);
        assert!(hot > warm);
    }

    #[test]
    fn forced_correlation_in_laminar_band() {
        // Re ≈ 3420 for a 51.6 mm cable in a 1 m/s wind.
        let convection =
            Convection::forced(Velocity::new::<meter_per_second>(1.0)).unwrap();
        let d: f64 = 0.05158;
        let re = 1.2 * d / 1.81e-5;
        let expected = 0.683 * re.powf(0.466) * 0.71_f64.cbrt() * 0.026 / d;

        let h = convection.coefficient_si(d, 313.15, 298.15);
        assert_relative_eq!(h, expected, max_relative = 1e-12);
        assert_relative_eq!(h, 13.6, epsilon = 0.2);
    }

    #[test]
    fn wind_never_cools_less_than_still_air() {
        let still = Convection::natural().coefficient_si(0.05, 333.15, 293.15);
        let breeze = Convection::forced(Velocity::new::<meter_per_second>(0.2))
            .unwrap()
            .coefficient_si(0.05, 333.15, 293.15);
        assert!(breeze >= still);
    }

    #[test]
    fn negative_velocity_is_rejected() {
        assert!(Convection::forced(Velocity::new::<meter_per_second>(-1.0)).is_err());
    }
}
