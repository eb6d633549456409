//! A cable's layer stack, installation and operating point.

use uom::si::{
    f64::{ElectricCurrent, Length, ThermalConductivity, ThermodynamicTemperature},
    length::meter,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::{
    constraint::{Constrained, ConstraintError, NonNegative, StrictlyPositive},
    materials::Material,
};

use super::{
    CableError, CableLayer, ConductorProperties, Environment, GeometryError, Grouping,
    InstallationMethod, LossModel,
};

/// Relative tolerance when checking that adjacent layers touch.
const CONTINUITY_TOL: f64 = 1e-9;

/// A single-core cable with its installation.
///
/// Layers are ordered from the conductor outward and must be contiguous:
/// each layer starts where its predecessor ends. External layers (duct,
/// backfill, an equivalent soil cylinder) continue outward from the cable
/// surface. The configuration exclusively owns its layers.
///
/// # Example
///
/// ```
/// use cable_thermal::models::thermal::cable::{CableConfiguration, TemperatureConfig};
/// use cable_thermal::support::materials::ConductorMaterial;
/// use uom::si::{
///     electric_current::ampere,
///     f64::{ElectricCurrent, Length, ThermalConductivity},
///     length::millimeter,
///     thermal_conductivity::watt_per_meter_kelvin,
///     thermodynamic_temperature::degree_celsius,
/// };
///
/// let mm = |v| Length::new::<millimeter>(v);
/// let w_mk = |v| ThermalConductivity::new::<watt_per_meter_kelvin>(v);
///
/// let mut cable = CableConfiguration::new("240 mm² Cu/XLPE");
/// cable
///     .push_layer("Conductor", mm(8.7), w_mk(380.0))
///     .unwrap()
///     .set_conductor(ConductorMaterial::COPPER);
/// cable.push_layer("Insulation", mm(6.2), w_mk(0.286)).unwrap();
/// cable.push_layer("Sheath", mm(2.5), w_mk(0.4)).unwrap();
/// cable.push_external_layer("Soil", mm(980.0), w_mk(1.0)).unwrap();
///
/// let cable = cable.with_current(ElectricCurrent::new::<ampere>(300.0)).unwrap();
/// let solution = cable.temperature(&TemperatureConfig::default()).unwrap();
/// assert!(solution.conductor_temp.get::<degree_celsius>() > 20.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CableConfiguration {
    pub name: String,
    layers: Vec<CableLayer>,
    external_layers: Vec<CableLayer>,
    pub environment: Environment,
    pub losses: LossModel,
    pub grouping: Option<Grouping>,
    pub installation: InstallationMethod,
    current: Constrained<ElectricCurrent, NonNegative>,
    pub ambient_temp: ThermodynamicTemperature,
    pub max_conductor_temp: ThermodynamicTemperature,
}

impl CableConfiguration {
    /// An empty, directly buried cable at 0 A in 20 °C ambient with a 90 °C
    /// conductor limit.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            layers: Vec::new(),
            external_layers: Vec::new(),
            environment: Environment::default(),
            losses: LossModel::default(),
            grouping: None,
            installation: InstallationMethod::default(),
            current: NonNegative::zero(),
            ambient_temp: ThermodynamicTemperature::new::<degree_celsius>(20.0),
            max_conductor_temp: ThermodynamicTemperature::new::<degree_celsius>(90.0),
        }
    }

    /// # Errors
    ///
    /// Returns [`CableError::InvalidInput`] if the current is negative.
    pub fn with_current(mut self, current: ElectricCurrent) -> Result<Self, CableError> {
        self.set_current(current)?;
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns [`CableError::InvalidInput`] if the current is negative.
    pub fn set_current(&mut self, current: ElectricCurrent) -> Result<(), CableError> {
        self.current =
            NonNegative::new(current).map_err(|source| CableError::input("current", source))?;
        Ok(())
    }

    #[must_use]
    pub fn current(&self) -> ElectricCurrent {
        self.current.into_inner()
    }

    #[must_use]
    pub fn with_ambient_temp(mut self, ambient: ThermodynamicTemperature) -> Self {
        self.ambient_temp = ambient;
        self
    }

    #[must_use]
    pub fn with_max_conductor_temp(mut self, limit: ThermodynamicTemperature) -> Self {
        self.max_conductor_temp = limit;
        self
    }

    #[must_use]
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    #[must_use]
    pub fn with_losses(mut self, losses: LossModel) -> Self {
        self.losses = losses;
        self
    }

    #[must_use]
    pub fn with_grouping(mut self, grouping: Grouping) -> Self {
        self.grouping = Some(grouping);
        self
    }

    #[must_use]
    pub fn with_installation(mut self, installation: InstallationMethod) -> Self {
        self.installation = installation;
        self
    }

    /// Appends an existing layer to the cable.
    ///
    /// External layers move outward by the new layer's thickness.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Discontinuous`] if the layer does not start at
    /// the current cable radius.
    pub fn push(&mut self, layer: CableLayer) -> Result<&mut CableLayer, CableError> {
        if let Some(previous) = self.layers.last() {
            check_contact(self.layers.len(), previous.outer_radius(), layer.inner_radius())?;
        }
        self.layers.push(layer);
        Ok(self.appended())
    }

    /// Appends a layer of the given thickness at the current cable radius.
    ///
    /// The first layer starts on the axis and forms the conductor core.
    /// External layers move outward and keep their thickness.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonPositiveThickness`] or
    /// [`CableError::InvalidMaterial`] for invalid input.
    pub fn push_layer(
        &mut self,
        name: impl Into<String>,
        thickness: Length,
        conductivity: ThermalConductivity,
    ) -> Result<&mut CableLayer, CableError> {
        let inner = self.cable_radius();
        let layer = CableLayer::new(name, inner, inner + positive(thickness)?, conductivity)?;
        self.layers.push(layer);
        Ok(self.appended())
    }

    /// Appends a layer whose properties come from a database material.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonPositiveThickness`] for invalid thickness.
    pub fn push_material(
        &mut self,
        name: impl Into<String>,
        thickness: Length,
        material: &Material,
    ) -> Result<&mut CableLayer, CableError> {
        let inner = self.cable_radius();
        let outer = inner + positive(thickness)?;
        let layer = CableLayer::from_material(name, inner, outer, material)?;
        self.layers.push(layer);
        Ok(self.appended())
    }

    /// Inserts a layer at `index` and moves every later layer outward.
    ///
    /// Later layers keep their thickness; external layers move with the
    /// cable surface.
    ///
    /// # Errors
    ///
    /// Returns [`CableError::InvalidInput`] if `index` is past the end, and
    /// the errors of [`CableConfiguration::push_layer`].
    pub fn insert_layer(
        &mut self,
        index: usize,
        name: impl Into<String>,
        thickness: Length,
        conductivity: ThermalConductivity,
    ) -> Result<&mut CableLayer, CableError> {
        if index > self.layers.len() {
            return Err(CableError::input("index", ConstraintError::AboveMaximum));
        }
        let inner = match index {
            0 => self.start_radius(),
            _ => self.layers[index - 1].outer_radius(),
        };
        let layer = CableLayer::new(name, inner, inner + positive(thickness)?, conductivity)?;
        self.layers.insert(index, layer);
        self.restack(index + 1);
        Ok(&mut self.layers[index])
    }

    /// Removes the layer at `index` and closes the gap.
    ///
    /// # Errors
    ///
    /// Returns [`CableError::InvalidInput`] if `index` is out of range.
    pub fn remove_layer(&mut self, index: usize) -> Result<CableLayer, CableError> {
        if index >= self.layers.len() {
            return Err(CableError::input("index", ConstraintError::AboveMaximum));
        }
        let start = self.start_radius();
        let removed = self.layers.remove(index);
        if index == 0 {
            if let Some(first) = self.layers.first_mut() {
                first.move_to(start);
            }
        }
        self.restack(index.max(1));
        Ok(removed)
    }

    /// Appends an external layer at the current outer radius.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonPositiveThickness`] or
    /// [`CableError::InvalidMaterial`] for invalid input.
    pub fn push_external_layer(
        &mut self,
        name: impl Into<String>,
        thickness: Length,
        conductivity: ThermalConductivity,
    ) -> Result<&mut CableLayer, CableError> {
        let inner = self.outer_radius();
        let layer = CableLayer::new(name, inner, inner + positive(thickness)?, conductivity)?;
        self.external_layers.push(layer);
        let last = self.external_layers.len() - 1;
        Ok(&mut self.external_layers[last])
    }

    /// Appends an existing external layer.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Discontinuous`] if it does not start at the
    /// current outer radius.
    pub fn push_external(&mut self, layer: CableLayer) -> Result<&mut CableLayer, CableError> {
        check_contact(
            self.layers.len() + self.external_layers.len(),
            self.outer_radius(),
            layer.inner_radius(),
        )?;
        self.external_layers.push(layer);
        let last = self.external_layers.len() - 1;
        Ok(&mut self.external_layers[last])
    }

    #[must_use]
    pub fn layers(&self) -> &[CableLayer] {
        &self.layers
    }

    #[must_use]
    pub fn external_layers(&self) -> &[CableLayer] {
        &self.external_layers
    }

    /// The conductor layer and its electrical data.
    ///
    /// # Errors
    ///
    /// Returns [`CableError::InvalidInput`] for an empty cable and
    /// [`CableError::MissingConductorProperties`] if the first layer has no
    /// resistivity.
    pub fn conductor(&self) -> Result<(&CableLayer, &ConductorProperties), CableError> {
        let layer = self
            .layers
            .first()
            .ok_or_else(|| CableError::input("layers", ConstraintError::Zero))?;
        let properties = layer
            .conductor()
            .ok_or_else(|| CableError::MissingConductorProperties {
                layer: layer.name().to_owned(),
            })?;
        Ok((layer, properties))
    }

    /// Radius of the cable surface, excluding external layers.
    #[must_use]
    pub fn cable_radius(&self) -> Length {
        self.layers
            .last()
            .map_or(Length::new::<meter>(0.0), CableLayer::outer_radius)
    }

    /// Radius of the outermost modelled boundary, including external layers.
    #[must_use]
    pub fn outer_radius(&self) -> Length {
        self.external_layers
            .last()
            .map_or_else(|| self.cable_radius(), CableLayer::outer_radius)
    }

    /// Checks the whole configuration before any solve.
    ///
    /// # Errors
    ///
    /// Returns the first [`CableError`] found: an empty or discontinuous
    /// stack, a hollow layer on the axis, a conductor without electrical
    /// data, a non-physical temperature, or an invalid environment.
    pub fn validate(&self) -> Result<(), CableError> {
        self.conductor()?;

        let mut previous: Option<Length> = None;
        for (index, layer) in self.layers.iter().chain(&self.external_layers).enumerate() {
            if index > 0 {
                StrictlyPositive::new(layer.inner_radius()).map_err(|_| {
                    GeometryError::NonPositiveInnerRadius {
                        inner: layer.inner_radius(),
                    }
                })?;
            }
            if let Some(previous_outer) = previous {
                check_contact(index, previous_outer, layer.inner_radius())?;
            }
            previous = Some(layer.outer_radius());
        }

        for (field, temperature) in [
            ("ambient_temp", self.ambient_temp),
            ("max_conductor_temp", self.max_conductor_temp),
        ] {
            StrictlyPositive::new(temperature.value)
                .map_err(|source| CableError::input(field, source))?;
        }

        self.environment.validate(self.outer_radius())
    }

    fn start_radius(&self) -> Length {
        self.layers
            .first()
            .map_or(Length::new::<meter>(0.0), CableLayer::inner_radius)
    }

    /// Moves the external layers out past a newly pushed layer and returns it.
    fn appended(&mut self) -> &mut CableLayer {
        let last = self.layers.len() - 1;
        self.restack(last + 1);
        &mut self.layers[last]
    }

    /// Re-seats layers from `from` onward so each starts at its predecessor's
    /// outer radius, then moves the external layers to the new surface.
    fn restack(&mut self, from: usize) {
        for index in from..self.layers.len() {
            let inner = self.layers[index - 1].outer_radius();
            self.layers[index].move_to(inner);
        }
        let mut inner = self.cable_radius();
        for layer in &mut self.external_layers {
            layer.move_to(inner);
            inner = layer.outer_radius();
        }
    }
}

fn positive(thickness: Length) -> Result<Length, CableError> {
    StrictlyPositive::new(thickness)
        .map(Constrained::into_inner)
        .map_err(|_| GeometryError::NonPositiveThickness { thickness }.into())
}

fn check_contact(index: usize, previous_outer: Length, inner: Length) -> Result<(), CableError> {
    let a = previous_outer.get::<meter>();
    let b = inner.get::<meter>();
    if (a - b).abs() <= CONTINUITY_TOL * a.abs().max(b.abs()) {
        Ok(())
    } else {
        Err(GeometryError::Discontinuous {
            index,
            inner,
            previous_outer,
        }
        .into())
    }
}
