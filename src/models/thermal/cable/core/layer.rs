//! Concentric cylindrical shells and their radial thermal resistance.

use std::f64::consts::PI;

use uom::si::{
    area::square_meter,
    f64::{
        Area, Length, MassDensity, SpecificHeatCapacity, ThermalConductivity,
        ThermodynamicTemperature,
    },
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::{Constrained, NonNegative, StrictlyPositive},
    materials::{ConductorMaterial, Material},
    units::{
        ElectricalResistivity, LinearElectricalResistance, LinearThermalResistance,
        TemperatureCoefficient, linear_electrical_resistance, linear_thermal_resistance,
    },
};

use super::{CableError, GeometryError};

/// Reference temperature for conductor resistivity, 20 °C.
pub(crate) const REFERENCE_TEMP_K: f64 = 293.15;

/// Radial thermal resistance of a cylindrical shell per metre of length.
///
/// Computes `ln(outer / inner) / (2π·λ)`.
///
/// # Errors
///
/// Returns [`CableError::InvalidGeometry`] if `inner` is not positive or
/// `outer` does not exceed `inner`, and [`CableError::InvalidMaterial`] if the
/// conductivity is not positive.
///
/// # Example
///
/// ```
/// use cable_thermal::models::thermal::cable::layer_resistance;
/// use uom::si::{
///     f64::{Length, ThermalConductivity},
///     length::millimeter,
///     thermal_conductivity::watt_per_meter_kelvin,
/// };
///
/// let r = layer_resistance(
///     Length::new::<millimeter>(10.0),
///     Length::new::<millimeter>(20.0),
///     ThermalConductivity::new::<watt_per_meter_kelvin>(1.0),
/// )
/// .unwrap();
/// assert!((r.value - 0.1103).abs() < 1e-4);
/// ```
pub fn layer_resistance(
    inner: Length,
    outer: Length,
    conductivity: ThermalConductivity,
) -> Result<LinearThermalResistance, CableError> {
    StrictlyPositive::new(inner).map_err(|_| GeometryError::NonPositiveInnerRadius { inner })?;
    StrictlyPositive::new(outer - inner)
        .map_err(|_| GeometryError::OuterNotBeyondInner { inner, outer })?;
    let conductivity = StrictlyPositive::new(conductivity)
        .map_err(|source| CableError::material(None, "thermal conductivity", source))?
        .into_inner();

    let ratio = outer.get::<meter>() / inner.get::<meter>();
    let lambda = conductivity.get::<watt_per_meter_kelvin>();
    Ok(linear_thermal_resistance(ratio.ln() / (2.0 * PI * lambda)))
}

/// Electrical data of a current-carrying layer, referred to 20 °C.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConductorProperties {
    resistivity: Constrained<ElectricalResistivity, StrictlyPositive>,
    temperature_coefficient: Constrained<TemperatureCoefficient, NonNegative>,
}

impl ConductorProperties {
    /// Creates conductor properties from resistivity and its temperature coefficient.
    ///
    /// # Errors
    ///
    /// Returns [`CableError::InvalidMaterial`] if the resistivity is not
    /// positive or the coefficient is negative.
    pub fn new(
        resistivity: ElectricalResistivity,
        temperature_coefficient: TemperatureCoefficient,
    ) -> Result<Self, CableError> {
        Ok(Self {
            resistivity: StrictlyPositive::new(resistivity)
                .map_err(|source| CableError::material(None, "resistivity", source))?,
            temperature_coefficient: NonNegative::new(temperature_coefficient).map_err(
                |source| CableError::material(None, "temperature coefficient", source),
            )?,
        })
    }

    #[must_use]
    pub fn resistivity(&self) -> ElectricalResistivity {
        self.resistivity.into_inner()
    }

    #[must_use]
    pub fn temperature_coefficient(&self) -> TemperatureCoefficient {
        self.temperature_coefficient.into_inner()
    }

    /// DC resistance per metre of a conductor with the given cross-section.
    ///
    /// Uses the linear law `R(T) = R₂₀·(1 + α·(T − 20 °C))`.
    #[must_use]
    pub fn resistance(
        &self,
        cross_section: Area,
        temperature: ThermodynamicTemperature,
    ) -> LinearElectricalResistance {
        linear_electrical_resistance(self.resistance_si(
            cross_section.get::<square_meter>(),
            temperature.get::<kelvin>(),
        ))
    }

    pub(crate) fn resistance_si(&self, area: f64, temperature: f64) -> f64 {
        let r20 = self.resistivity().value / area;
        r20 * (1.0 + self.temperature_coefficient().value * (temperature - REFERENCE_TEMP_K))
    }
}

impl From<ConductorMaterial> for ConductorProperties {
    fn from(material: ConductorMaterial) -> Self {
        Self {
            resistivity: Constrained::new_unchecked(material.resistivity()),
            temperature_coefficient: Constrained::new_unchecked(
                material.temperature_coefficient(),
            ),
        }
    }
}

/// Density and specific heat of a layer, needed for transient analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatStorage {
    density: Constrained<MassDensity, StrictlyPositive>,
    specific_heat: Constrained<SpecificHeatCapacity, StrictlyPositive>,
}

impl HeatStorage {
    /// # Errors
    ///
    /// Returns [`CableError::InvalidMaterial`] if either property is not positive.
    pub fn new(
        density: MassDensity,
        specific_heat: SpecificHeatCapacity,
    ) -> Result<Self, CableError> {
        Ok(Self {
            density: StrictlyPositive::new(density)
                .map_err(|source| CableError::material(None, "density", source))?,
            specific_heat: StrictlyPositive::new(specific_heat)
                .map_err(|source| CableError::material(None, "specific heat", source))?,
        })
    }

    #[must_use]
    pub fn density(&self) -> MassDensity {
        self.density.into_inner()
    }

    #[must_use]
    pub fn specific_heat(&self) -> SpecificHeatCapacity {
        self.specific_heat.into_inner()
    }

    /// Volumetric heat capacity `ρ·c` in J/(m³·K).
    pub(crate) fn volumetric(&self) -> f64 {
        self.density().get::<kilogram_per_cubic_meter>()
            * self.specific_heat().get::<joule_per_kilogram_kelvin>()
    }
}

impl From<&Material> for HeatStorage {
    fn from(material: &Material) -> Self {
        Self {
            density: Constrained::new_unchecked(material.density()),
            specific_heat: Constrained::new_unchecked(material.specific_heat()),
        }
    }
}

/// A single concentric shell of a cable or its surroundings.
///
/// The innermost layer of a cable may start on the axis (`inner_radius == 0`);
/// such a solid core contributes no radial resistance because its heat is
/// generated inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct CableLayer {
    name: String,
    inner_radius: Length,
    outer_radius: Length,
    thermal_conductivity: Constrained<ThermalConductivity, StrictlyPositive>,
    conductor: Option<ConductorProperties>,
    heat_storage: Option<HeatStorage>,
}

impl CableLayer {
    /// Creates a layer between two radii.
    ///
    /// # Errors
    ///
    /// Returns [`CableError::InvalidGeometry`] if `inner` is negative or
    /// `outer` does not exceed `inner`, and [`CableError::InvalidMaterial`]
    /// if the conductivity is not positive.
    pub fn new(
        name: impl Into<String>,
        inner: Length,
        outer: Length,
        thermal_conductivity: ThermalConductivity,
    ) -> Result<Self, CableError> {
        let name = name.into();
        NonNegative::new(inner).map_err(|_| GeometryError::NonPositiveInnerRadius { inner })?;
        StrictlyPositive::new(outer - inner)
            .map_err(|_| GeometryError::OuterNotBeyondInner { inner, outer })?;
        let thermal_conductivity = StrictlyPositive::new(thermal_conductivity)
            .map_err(|source| CableError::material(Some(&name), "thermal conductivity", source))?;

        Ok(Self {
            name,
            inner_radius: inner,
            outer_radius: outer,
            thermal_conductivity,
            conductor: None,
            heat_storage: None,
        })
    }

    /// Creates a layer whose conductivity and heat storage come from `material`.
    ///
    /// # Errors
    ///
    /// Returns [`CableError::InvalidGeometry`] for invalid radii.
    pub fn from_material(
        name: impl Into<String>,
        inner: Length,
        outer: Length,
        material: &Material,
    ) -> Result<Self, CableError> {
        Ok(Self::new(name, inner, outer, material.thermal_conductivity())?
            .with_heat_storage(HeatStorage::from(material)))
    }

    #[must_use]
    pub fn with_conductor(mut self, conductor: impl Into<ConductorProperties>) -> Self {
        self.conductor = Some(conductor.into());
        self
    }

    #[must_use]
    pub fn with_heat_storage(mut self, heat_storage: HeatStorage) -> Self {
        self.heat_storage = Some(heat_storage);
        self
    }

    pub fn set_conductor(&mut self, conductor: impl Into<ConductorProperties>) -> &mut Self {
        self.conductor = Some(conductor.into());
        self
    }

    pub fn set_heat_storage(&mut self, heat_storage: HeatStorage) -> &mut Self {
        self.heat_storage = Some(heat_storage);
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn inner_radius(&self) -> Length {
        self.inner_radius
    }

    #[must_use]
    pub fn outer_radius(&self) -> Length {
        self.outer_radius
    }

    #[must_use]
    pub fn thickness(&self) -> Length {
        self.outer_radius - self.inner_radius
    }

    #[must_use]
    pub fn thermal_conductivity(&self) -> ThermalConductivity {
        self.thermal_conductivity.into_inner()
    }

    #[must_use]
    pub fn conductor(&self) -> Option<&ConductorProperties> {
        self.conductor.as_ref()
    }

    #[must_use]
    pub fn heat_storage(&self) -> Option<&HeatStorage> {
        self.heat_storage.as_ref()
    }

    /// Returns `true` for a solid layer that starts on the cable axis.
    #[must_use]
    pub fn is_core(&self) -> bool {
        self.inner_radius.get::<meter>() == 0.0
    }

    /// Annular cross-section `π·(r_o² − r_i²)`.
    #[must_use]
    pub fn cross_section(&self) -> Area {
        let ri = self.inner_radius.get::<meter>();
        let ro = self.outer_radius.get::<meter>();
        Area::new::<square_meter>(PI * (ro * ro - ri * ri))
    }

    /// Radial thermal resistance of this layer; zero for a solid core.
    ///
    /// # Errors
    ///
    /// Propagates the checks of [`layer_resistance`].
    pub fn thermal_resistance(&self) -> Result<LinearThermalResistance, CableError> {
        if self.is_core() {
            return Ok(linear_thermal_resistance(0.0));
        }
        layer_resistance(
            self.inner_radius,
            self.outer_radius,
            self.thermal_conductivity(),
        )
        .map_err(|err| match err {
            CableError::InvalidMaterial {
                property, source, ..
            } => CableError::material(Some(&self.name), property, source),
            other => other,
        })
    }

    /// Moves the layer so it starts at `inner`, keeping its thickness.
    pub(super) fn move_to(&mut self, inner: Length) {
        let thickness = self.thickness();
        self.inner_radius = inner;
        self.outer_radius = inner + thickness;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        length::millimeter, thermodynamic_temperature::degree_celsius,
    };

    fn mm(value: f64) -> Length {
        Length::new::<millimeter>(value)
    }

    fn lambda(value: f64) -> ThermalConductivity {
        ThermalConductivity::new::<watt_per_meter_kelvin>(value)
    }

    #[test]
    fn logarithmic_resistance_is_exact() {
        let r = layer_resistance(mm(10.0), mm(20.0), lambda(1.0)).unwrap();
        assert_relative_eq!(r.value, 2.0_f64.ln() / (2.0 * PI), max_relative = 1e-15);
        assert_relative_eq!(r.value, 0.1103, epsilon = 1e-4);
    }

    #[test]
    fn zero_thickness_is_a_geometry_error() {
        let result = layer_resistance(mm(10.0), mm(10.0), lambda(1.0));
        assert!(matches!(
            result,
            Err(CableError::InvalidGeometry(
                GeometryError::OuterNotBeyondInner { .. }
            ))
        ));

        let result = CableLayer::new("Sheath", mm(12.0), mm(11.0), lambda(0.4));
        assert!(matches!(result, Err(CableError::InvalidGeometry(_))));
    }

    #[test]
    fn zero_conductivity_is_a_material_error() {
        let result = layer_resistance(mm(10.0), mm(20.0), lambda(0.0));
        assert!(matches!(result, Err(CableError::InvalidMaterial { .. })));

        let result = CableLayer::new("Insulation", mm(10.0), mm(20.0), lambda(0.0));
        match result {
            Err(CableError::InvalidMaterial { layer, .. }) => {
                assert_eq!(layer.as_deref(), Some("Insulation"));
            }
            other => panic!("Expected InvalidMaterial, got: {other:?}"),
        }
    }

    #[test]
    fn axis_is_only_valid_for_a_core() {
        let result = layer_resistance(mm(0.0), mm(8.7), lambda(380.0));
        assert!(matches!(
            result,
            Err(CableError::InvalidGeometry(
                GeometryError::NonPositiveInnerRadius { .. }
            ))
        ));

        let core = CableLayer::new("Conductor", mm(0.0), mm(8.7), lambda(380.0)).unwrap();
        assert!(core.is_core());
        assert_eq!(core.thermal_resistance().unwrap().value, 0.0);
    }

    #[test]
    fn copper_resistance_follows_linear_law() {
        let core = CableLayer::new("Conductor", mm(0.0), mm(8.7), lambda(380.0))
            .unwrap()
            .with_conductor(ConductorMaterial::COPPER);
        let props = core.conductor().unwrap();

        let r20 = props.resistance(
            core.cross_section(),
            ThermodynamicTemperature::new::<degree_celsius>(20.0),
        );
        let r90 = props.resistance(
            core.cross_section(),
            ThermodynamicTemperature::new::<degree_celsius>(90.0),
        );

        assert_relative_eq!(r20.value, 1.75e-8 / (PI * 0.0087 * 0.0087), max_relative = 1e-12);
        assert_relative_eq!(r90.value / r20.value, 1.0 + 0.00393 * 70.0, max_relative = 1e-9);
    }

    #[test]
    fn move_keeps_thickness() {
        let mut layer = CableLayer::new("Sheath", mm(17.1), mm(19.6), lambda(0.4)).unwrap();
        layer.move_to(mm(20.0));
        assert_relative_eq!(layer.inner_radius().get::<millimeter>(), 20.0, max_relative = 1e-12);
        assert_relative_eq!(layer.thickness().get::<millimeter>(), 2.5, max_relative = 1e-9);
    }

    #[test]
    fn rejects_invalid_conductor_data() {
        use crate::support::units::{electrical_resistivity, temperature_coefficient};

        assert!(
            ConductorProperties::new(electrical_resistivity(0.0), temperature_coefficient(0.004))
                .is_err()
        );
        assert!(
            ConductorProperties::new(electrical_resistivity(1.7e-8), temperature_coefficient(-1.0))
                .is_err()
        );
    }
}
