//! Power cable thermal models.
//!
//! This module provides [`twine_core::Model`] implementations for single-core
//! cables: the steady-state conductor temperature at a given load, and the
//! ampacity at a given ambient temperature. The computational core is in the
//! internal [`core`] module; its configuration types and solvers are
//! re-exported here.

pub(crate) mod core;

pub use self::core::{
    AirProperties, Ampacity, AmpacityConfig, AmpacityError, CableConfiguration, CableError,
    CableGroup, CableLayer, ConductorProperties, Convection, Environment, EnvironmentResistance,
    GeometryError, GroupConfig, GroupError, GroupSolution, GroupedCable, Grouping, HeatStorage,
    InitialGuess, InstallationMethod, IterationStatus, LossModel, Losses, PositionedCable,
    ProfilePoint, Radiation, Shield, Soil, SoilKind, SpacingResult, TemperatureConfig,
    TemperatureSolution, ThermalResistanceSet, TransientResponse, TransientSample,
    exponential_approach, grouping_factor, layer_resistance, library, nusselt_forced,
    nusselt_natural, parallel, proximity_effect_factor, skin_effect_factor,
};

use twine_core::Model;
use uom::si::f64::{ElectricCurrent, ThermodynamicTemperature};

/// Steady-state conductor temperature of a cable as a function of load.
///
/// The input is the load current; ambient and every other parameter come
/// from the wrapped configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CableTemperature {
    cable: CableConfiguration,
    config: TemperatureConfig,
}

impl CableTemperature {
    /// Wraps a validated cable configuration.
    ///
    /// # Errors
    ///
    /// Returns the first [`CableError`] reported by
    /// [`CableConfiguration::validate`].
    pub fn new(cable: CableConfiguration, config: TemperatureConfig) -> Result<Self, CableError> {
        cable.validate()?;
        Ok(Self { cable, config })
    }

    #[must_use]
    pub fn cable(&self) -> &CableConfiguration {
        &self.cable
    }
}

impl Model for CableTemperature {
    type Input = ElectricCurrent;
    type Output = TemperatureSolution;
    type Error = CableError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.cable.temperature_at(*input, &self.config)
    }
}

/// Ampacity of a cable as a function of ambient temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct CableAmpacity {
    cable: CableConfiguration,
    config: AmpacityConfig,
}

impl CableAmpacity {
    /// Wraps a validated cable configuration.
    ///
    /// # Errors
    ///
    /// Returns the first [`CableError`] reported by
    /// [`CableConfiguration::validate`].
    pub fn new(cable: CableConfiguration, config: AmpacityConfig) -> Result<Self, CableError> {
        cable.validate()?;
        Ok(Self { cable, config })
    }

    #[must_use]
    pub fn cable(&self) -> &CableConfiguration {
        &self.cable
    }
}

impl Model for CableAmpacity {
    type Input = ThermodynamicTemperature;
    type Output = Ampacity;
    type Error = AmpacityError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.cable
            .clone()
            .with_ambient_temp(*input)
            .ampacity(&self.config)
    }
}
