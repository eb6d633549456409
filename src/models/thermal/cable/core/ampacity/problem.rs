//! Problem formulation for the ampacity search.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    electric_current::ampere,
    f64::{ElectricCurrent, ThermodynamicTemperature},
    thermodynamic_temperature::kelvin,
};

use crate::models::thermal::cable::core::{
    CableError, TemperatureConfig, TemperatureSolution, temperature::ThermalCircuit,
};

/// Model adapter exposing the load current as the sole input.
///
/// Each call runs the temperature iteration and returns its last iterate
/// even when it did not converge, so a runaway trial current still yields
/// a (large, positive) residual.
pub(super) struct AmpacityModel<'a> {
    circuit: &'a ThermalCircuit<'a>,
    ambient: f64,
    config: TemperatureConfig,
}

impl<'a> AmpacityModel<'a> {
    pub(super) fn new(
        circuit: &'a ThermalCircuit<'a>,
        ambient: ThermodynamicTemperature,
        config: TemperatureConfig,
    ) -> Self {
        Self {
            circuit,
            ambient: ambient.get::<kelvin>(),
            config,
        }
    }
}

impl Model for AmpacityModel<'_> {
    type Input = ElectricCurrent;
    type Output = TemperatureSolution;
    type Error = CableError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.circuit
            .solve(input.get::<ampere>(), self.ambient, &self.config)
    }
}

/// Equation problem for the ampacity search.
///
/// Computes the residual as `conductor_temp - limit` in kelvin.
pub(super) struct AmpacityProblem {
    limit: ThermodynamicTemperature,
}

impl AmpacityProblem {
    pub(super) fn new(limit: ThermodynamicTemperature) -> Self {
        Self { limit }
    }
}

impl EquationProblem<1> for AmpacityProblem {
    type Input = ElectricCurrent;
    type Output = TemperatureSolution;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(ElectricCurrent::new::<ampere>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        let achieved = output.conductor_temp.get::<kelvin>();
        let limit = self.limit.get::<kelvin>();
        Ok([achieved - limit])
    }
}
