//! Long-wave radiation from the cable surface.

use uom::si::{
    f64::{HeatFluxDensity, HeatTransfer, ThermodynamicTemperature},
    heat_flux_density::watt_per_square_meter,
    heat_transfer::watt_per_square_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::{
    models::thermal::cable::core::CableError,
    support::constraint::{Constrained, UnitInterval},
};

/// Stefan–Boltzmann constant, W/(m²·K⁴).
const STEFAN_BOLTZMANN: f64 = 5.670_374_419e-8;

/// Grey-body radiation exchange with the surroundings.
///
/// The exchange is linearised around the mean of surface and surroundings
/// temperature, `h_rad = 4·ε·σ·F·T_m³`, so it can be placed in parallel with
/// convection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Radiation {
    emissivity: Constrained<f64, UnitInterval>,
    view_factor: Constrained<f64, UnitInterval>,
    surroundings: Option<ThermodynamicTemperature>,
}

impl Radiation {
    /// Radiation with full view of surroundings at ambient temperature.
    ///
    /// # Errors
    ///
    /// Returns [`CableError::InvalidInput`] if the emissivity is outside `[0, 1]`.
    pub fn new(emissivity: f64) -> Result<Self, CableError> {
        Ok(Self {
            emissivity: UnitInterval::new(emissivity)
                .map_err(|source| CableError::input("emissivity", source))?,
            view_factor: UnitInterval::one(),
            surroundings: None,
        })
    }

    /// # Errors
    ///
    /// Returns [`CableError::InvalidInput`] if the view factor is outside `[0, 1]`.
    pub fn with_view_factor(mut self, view_factor: f64) -> Result<Self, CableError> {
        self.view_factor = UnitInterval::new(view_factor)
            .map_err(|source| CableError::input("view_factor", source))?;
        Ok(self)
    }

    /// Uses a fixed surroundings temperature instead of the ambient.
    #[must_use]
    pub fn with_surroundings(mut self, surroundings: ThermodynamicTemperature) -> Self {
        self.surroundings = Some(surroundings);
        self
    }

    #[must_use]
    pub fn emissivity(&self) -> f64 {
        self.emissivity.into_inner()
    }

    #[must_use]
    pub fn view_factor(&self) -> f64 {
        self.view_factor.into_inner()
    }

    #[must_use]
    pub fn surroundings(&self) -> Option<ThermodynamicTemperature> {
        self.surroundings
    }

    /// Linearised radiation coefficient.
    #[must_use]
    pub fn coefficient(
        &self,
        surface: ThermodynamicTemperature,
        surroundings: ThermodynamicTemperature,
    ) -> HeatTransfer {
        HeatTransfer::new::<watt_per_square_meter_kelvin>(
            self.coefficient_si(surface.get::<kelvin>(), surroundings.get::<kelvin>()),
        )
    }

    /// Net radiated flux `ε·σ·F·(T_s⁴ − T_sur⁴)`, positive when the surface is hotter.
    #[must_use]
    pub fn net_flux(
        &self,
        surface: ThermodynamicTemperature,
        surroundings: ThermodynamicTemperature,
    ) -> HeatFluxDensity {
        let ts = surface.get::<kelvin>();
        let tsur = surroundings.get::<kelvin>();
        let exchange = self.emissivity() * STEFAN_BOLTZMANN * self.view_factor();
        HeatFluxDensity::new::<watt_per_square_meter>(exchange * (ts.powi(4) - tsur.powi(4)))
    }

    pub(crate) fn coefficient_si(&self, surface: f64, surroundings: f64) -> f64 {
        let mean = 0.5 * (surface + surroundings);
        4.0 * self.emissivity() * STEFAN_BOLTZMANN * self.view_factor() * mean.powi(3)
    }

    pub(crate) fn surroundings_or(&self, ambient: f64) -> f64 {
        self.surroundings.map_or(ambient, |t| t.get::<kelvin>())
    }
}
