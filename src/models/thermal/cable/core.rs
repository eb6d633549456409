//! Steady-state, transient and group thermal models of power cables.
//!
//! A cable is a stack of concentric layers around its conductor. Heat
//! generated in the conductor (and a bonded screen) flows radially outward
//! through the series of layer resistances `ln(r_o/r_i)/(2πλ)`, any external
//! layers, and finally the installation environment. The solvers in this
//! module close the loop between temperature-dependent losses and that
//! thermal circuit.

mod ampacity;
mod configuration;
mod environment;
mod error;
mod group;
mod layer;
mod losses;
mod resistance;
mod temperature;
mod transient;

pub mod library;

#[cfg(test)]
mod test_support;

pub use ampacity::{Ampacity, AmpacityConfig, AmpacityError};
pub use configuration::CableConfiguration;
pub use environment::{
    AirProperties, Convection, Environment, Grouping, InstallationMethod, Radiation, Soil,
    SoilKind, grouping_factor, nusselt_forced, nusselt_natural,
};
pub use error::{CableError, GeometryError};
pub use group::{
    CableGroup, GroupConfig, GroupError, GroupSolution, GroupedCable, PositionedCable,
    SpacingResult,
};
pub use layer::{CableLayer, ConductorProperties, HeatStorage, layer_resistance};
pub use losses::{LossModel, Losses, Shield, proximity_effect_factor, skin_effect_factor};
pub use resistance::{EnvironmentResistance, ThermalResistanceSet, parallel};
pub use temperature::{
    InitialGuess, IterationStatus, ProfilePoint, TemperatureConfig, TemperatureSolution,
};
pub use transient::{TransientResponse, TransientSample, exponential_approach};
