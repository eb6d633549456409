//! Thermophysical material data.
//!
//! Material properties are looked up by name in a [`MaterialDatabase`].
//! The database is an ordinary value: callers start from
//! [`MaterialDatabase::builtin`], extend an owned copy with
//! [`MaterialDatabase::insert`] or a TOML table, and pass it by reference to
//! whatever needs it.
//!
//! ```
//! use cable_thermal::support::materials::MaterialDatabase;
//! use uom::si::thermal_conductivity::watt_per_meter_kelvin;
//!
//! let mut db = MaterialDatabase::builtin();
//! db.merge(MaterialDatabase::from_toml_str(r#"
//!     [[material]]
//!     name = "Bentonite backfill"
//!     thermal_conductivity = 1.3
//!     density = 1900.0
//!     specific_heat = 900.0
//!     category = "soil"
//! "#).unwrap());
//!
//! let xlpe = db.get("XLPE").unwrap();
//! assert_eq!(xlpe.thermal_conductivity().get::<watt_per_meter_kelvin>(), 0.286);
//! assert!(db.get("Bentonite backfill").is_ok());
//! ```

mod conductor;
mod insulation;

use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;
use uom::si::{
    f64::{MassDensity, SpecificHeatCapacity, ThermalConductivity},
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::support::constraint::{Constrained, ConstraintError, StrictlyPositive};

pub use conductor::ConductorMaterial;
pub use insulation::Insulation;

/// Errors that can occur while looking up or loading material data.
#[derive(Debug, Error)]
pub enum MaterialError {
    /// No material with this name exists in the database.
    #[error("unknown material `{name}`")]
    Unknown { name: String },

    /// A material property violates its physical bound.
    #[error("invalid {property} for material `{name}`")]
    Invalid {
        name: String,
        property: &'static str,
        #[source]
        source: ConstraintError,
    },

    /// A material table could not be parsed.
    #[error("failed to parse material table")]
    Parse(#[from] toml::de::Error),
}

/// Broad material family, used to group entries for display and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Concrete,
    Masonry,
    Insulation,
    Wood,
    Metal,
    Glass,
    CableInsulation,
    Duct,
    Soil,
    #[default]
    Other,
}

/// Thermophysical properties of a homogeneous material.
///
/// All properties are strictly positive; [`Material::new`] enforces this.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    thermal_conductivity: Constrained<ThermalConductivity, StrictlyPositive>,
    density: Constrained<MassDensity, StrictlyPositive>,
    specific_heat: Constrained<SpecificHeatCapacity, StrictlyPositive>,
    category: Category,
}

impl Material {
    /// Creates a material from its conductivity, density and specific heat.
    ///
    /// # Errors
    ///
    /// Returns [`MaterialError::Invalid`] naming the offending property if any
    /// value is zero, negative or NaN. The `name` is only used for reporting.
    pub fn new(
        name: &str,
        thermal_conductivity: ThermalConductivity,
        density: MassDensity,
        specific_heat: SpecificHeatCapacity,
    ) -> Result<Self, MaterialError> {
        let invalid = |property: &'static str| {
            move |source: ConstraintError| MaterialError::Invalid {
                name: name.to_owned(),
                property,
                source,
            }
        };

        Ok(Self {
            thermal_conductivity: StrictlyPositive::new(thermal_conductivity)
                .map_err(invalid("thermal conductivity"))?,
            density: StrictlyPositive::new(density).map_err(invalid("density"))?,
            specific_heat: StrictlyPositive::new(specific_heat)
                .map_err(invalid("specific heat"))?,
            category: Category::Other,
        })
    }

    /// Sets the material's category.
    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Thermal conductivity λ.
    #[must_use]
    pub fn thermal_conductivity(&self) -> ThermalConductivity {
        self.thermal_conductivity.into_inner()
    }

    /// Density ρ.
    #[must_use]
    pub fn density(&self) -> MassDensity {
        self.density.into_inner()
    }

    /// Specific heat capacity c.
    #[must_use]
    pub fn specific_heat(&self) -> SpecificHeatCapacity {
        self.specific_heat.into_inner()
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Volumetric heat capacity ρ·c in J/(m³·K).
    pub(crate) fn volumetric_heat_capacity(&self) -> f64 {
        self.density().get::<kilogram_per_cubic_meter>()
            * self.specific_heat().get::<joule_per_kilogram_kelvin>()
    }
}

/// A read-only name-to-material lookup table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaterialDatabase {
    materials: BTreeMap<String, Material>,
}

impl MaterialDatabase {
    /// Returns an empty database.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the built-in table of building, cable, duct and soil materials.
    #[must_use]
    pub fn builtin() -> Self {
        let materials = BUILTIN
            .iter()
            .map(|&(name, category, lambda, rho, c)| {
                let material = Material {
                    thermal_conductivity: Constrained::new_unchecked(
                        ThermalConductivity::new::<watt_per_meter_kelvin>(lambda),
                    ),
                    density: Constrained::new_unchecked(
                        MassDensity::new::<kilogram_per_cubic_meter>(rho),
                    ),
                    specific_heat: Constrained::new_unchecked(
                        SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(c),
                    ),
                    category,
                };
                (name.to_owned(), material)
            })
            .collect();

        Self { materials }
    }

    /// Parses a TOML table of `[[material]]` entries.
    ///
    /// Each entry needs `name`, `thermal_conductivity` in W/(m·K), `density`
    /// in kg/m³ and `specific_heat` in J/(kg·K); `category` is optional.
    ///
    /// # Errors
    ///
    /// Returns [`MaterialError::Parse`] for malformed TOML and
    /// [`MaterialError::Invalid`] for non-positive properties.
    pub fn from_toml_str(s: &str) -> Result<Self, MaterialError> {
        let file: MaterialFile = toml::from_str(s)?;

        let mut db = Self::new();
        for record in file.materials {
            let material = Material::new(
                &record.name,
                ThermalConductivity::new::<watt_per_meter_kelvin>(record.thermal_conductivity),
                MassDensity::new::<kilogram_per_cubic_meter>(record.density),
                SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(record.specific_heat),
            )?
            .with_category(record.category);
            db.insert(record.name, material);
        }

        Ok(db)
    }

    /// Looks up a material by its exact name.
    ///
    /// # Errors
    ///
    /// Returns [`MaterialError::Unknown`] if no such material exists.
    pub fn get(&self, name: &str) -> Result<&Material, MaterialError> {
        self.materials.get(name).ok_or_else(|| MaterialError::Unknown {
            name: name.to_owned(),
        })
    }

    /// Material names in lexical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.materials.keys().map(String::as_str)
    }

    /// Names of all materials in a category, in lexical order.
    pub fn names_in(&self, category: Category) -> impl Iterator<Item = &str> {
        self.materials
            .iter()
            .filter(move |(_, m)| m.category == category)
            .map(|(name, _)| name.as_str())
    }

    /// Adds or replaces a material, returning the previous entry if any.
    pub fn insert(&mut self, name: impl Into<String>, material: Material) -> Option<Material> {
        self.materials.insert(name.into(), material)
    }

    /// Adds every entry of `other`, replacing entries with the same name.
    pub fn merge(&mut self, other: MaterialDatabase) {
        self.materials.extend(other.materials);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct MaterialFile {
    #[serde(default, rename = "material")]
    materials: Vec<MaterialRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MaterialRecord {
    name: String,
    thermal_conductivity: f64,
    density: f64,
    specific_heat: f64,
    #[serde(default)]
    category: Category,
}

/// Name, category, λ in W/(m·K), ρ in kg/m³, c in J/(kg·K).
const BUILTIN: &[(&str, Category, f64, f64, f64)] = &[
    ("Concrete (normal)", Category::Concrete, 2.1, 2400.0, 1000.0),
    ("Concrete (lightweight)", Category::Concrete, 0.8, 1800.0, 1000.0),
    ("Reinforced concrete", Category::Concrete, 2.5, 2500.0, 1000.0),
    ("Mortar", Category::Concrete, 1.2, 1900.0, 1000.0),
    ("Brick (solid)", Category::Masonry, 0.8, 1800.0, 1000.0),
    ("Brick (perforated)", Category::Masonry, 0.35, 800.0, 1000.0),
    ("Aerated concrete", Category::Masonry, 0.16, 500.0, 1000.0),
    ("Sand-lime brick", Category::Masonry, 0.8, 1800.0, 1000.0),
    ("Mineral wool", Category::Insulation, 0.04, 100.0, 840.0),
    ("Polystyrene (EPS)", Category::Insulation, 0.035, 30.0, 1500.0),
    ("Polystyrene (XPS)", Category::Insulation, 0.032, 35.0, 1500.0),
    ("Polyurethane (PUR)", Category::Insulation, 0.025, 40.0, 1400.0),
    ("Rock wool", Category::Insulation, 0.045, 150.0, 840.0),
    ("Glass wool", Category::Insulation, 0.04, 100.0, 840.0),
    ("Wood (soft)", Category::Wood, 0.13, 500.0, 1600.0),
    ("Wood (hard)", Category::Wood, 0.18, 700.0, 1600.0),
    ("Plywood", Category::Wood, 0.15, 600.0, 1600.0),
    ("Chipboard", Category::Wood, 0.12, 650.0, 1600.0),
    ("Steel", Category::Metal, 50.0, 7850.0, 460.0),
    ("Aluminium", Category::Metal, 160.0, 2700.0, 880.0),
    ("Copper", Category::Metal, 380.0, 8900.0, 380.0),
    ("Zinc", Category::Metal, 110.0, 7200.0, 380.0),
    ("Copper conductor", Category::Metal, 380.0, 8900.0, 380.0),
    ("Aluminium conductor", Category::Metal, 230.0, 2700.0, 880.0),
    ("Glass", Category::Glass, 1.0, 2500.0, 840.0),
    ("Double glazing", Category::Glass, 0.3, 2500.0, 840.0),
    ("Triple glazing", Category::Glass, 0.2, 2500.0, 840.0),
    ("Gypsum", Category::Other, 0.35, 1200.0, 1000.0),
    ("Plasterboard", Category::Other, 0.25, 900.0, 1000.0),
    ("Clay", Category::Other, 0.8, 1600.0, 1000.0),
    ("Cork", Category::Other, 0.045, 200.0, 1800.0),
    ("Bitumen", Category::Other, 0.17, 1050.0, 1000.0),
    ("Plastic (PE)", Category::Other, 0.4, 950.0, 2300.0),
    ("XLPE", Category::CableInsulation, 0.286, 920.0, 2400.0),
    ("EPR", Category::CableInsulation, 0.4, 1100.0, 2000.0),
    ("PVC", Category::CableInsulation, 0.16, 1400.0, 1000.0),
    ("PE", Category::CableInsulation, 0.4, 950.0, 2300.0),
    ("Semiconducting XLPE", Category::CableInsulation, 0.286, 920.0, 2400.0),
    ("PE duct", Category::Duct, 0.4, 950.0, 2300.0),
    ("PVC duct", Category::Duct, 0.16, 1400.0, 1000.0),
    ("Steel pipe", Category::Duct, 50.0, 7850.0, 460.0),
    ("Soil (dry)", Category::Soil, 0.5, 1600.0, 1000.0),
    ("Soil (moist)", Category::Soil, 2.0, 1800.0, 1000.0),
    ("Sand (dry)", Category::Soil, 0.4, 1500.0, 800.0),
    ("Sand (moist)", Category::Soil, 1.5, 1700.0, 1000.0),
    ("Still air", Category::Other, 0.026, 1.2, 1000.0),
];
