//! Ready-made single-core cable configurations.
//!
//! Layer properties come from the supplied [`MaterialDatabase`], so the
//! layers carry heat storage data for transient analysis. Presets start at
//! 0 A; set a current before solving for a temperature.

use uom::si::{
    f64::{Frequency, Length, ThermalConductivity, ThermodynamicTemperature, Velocity},
    frequency::hertz,
    length::millimeter,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
    velocity::meter_per_second,
};

use crate::support::{
    materials::{ConductorMaterial, Insulation, MaterialDatabase},
    units::{electrical_resistivity, linear_electrical_resistance, temperature_coefficient},
};

use super::{
    CableConfiguration, CableError, ConductorProperties, Convection, Environment, LossModel,
    InstallationMethod, Radiation, Shield,
};

/// Radial build of a single-core XLPE cable, in millimetres.
struct Build {
    conductor: f64,
    conductor_screen: f64,
    insulation: f64,
    insulation_screen: f64,
    metallic_screen: f64,
    sheath: f64,
}

fn mm(value: f64) -> Length {
    Length::new::<millimeter>(value)
}

fn xlpe_cable(
    name: &str,
    build: &Build,
    sheath_material: &str,
    conductor: ConductorProperties,
    db: &MaterialDatabase,
) -> Result<CableConfiguration, CableError> {
    let semicon = db.get("Semiconducting XLPE")?;
    let xlpe = Insulation::Xlpe.material(db)?;

    let mut cable = CableConfiguration::new(name)
        .with_max_conductor_temp(Insulation::Xlpe.max_continuous_temp());
    cable
        .push_material(
            "Conductor (Cu)",
            mm(build.conductor),
            db.get("Copper conductor")?,
        )?
        .set_conductor(conductor);
    cable.push_material("Conductor Screen", mm(build.conductor_screen), semicon)?;
    cable.push_material("Insulation (XLPE)", mm(build.insulation), xlpe)?;
    cable.push_material("Insulation Screen", mm(build.insulation_screen), semicon)?;
    cable.push_material(
        "Metallic Screen (Cu)",
        mm(build.metallic_screen),
        db.get("Copper")?,
    )?;
    cable.push_material(
        format!("Outer Sheath ({sheath_material})"),
        mm(build.sheath),
        db.get(sheath_material)?,
    )?;
    Ok(cable)
}

/// Pushes an equivalent soil cylinder out to `outer_radius` millimetres.
fn soil_cylinder(cable: &mut CableConfiguration, outer_radius: f64) -> Result<(), CableError> {
    let thickness = mm(outer_radius) - cable.cable_radius();
    cable.push_external_layer(
        "Soil (Earth)",
        thickness,
        ThermalConductivity::new::<watt_per_meter_kelvin>(1.0),
    )?;
    Ok(())
}

/// 20 kV single-core 240 mm² Cu/XLPE cable, directly buried.
///
/// Conductor radius 8.7 mm, PE sheath to 19.6 mm, and a 1 m equivalent
/// soil cylinder of 1.0 W/(m·K).
///
/// # Errors
///
/// Returns [`CableError::Material`] if `db` lacks one of the layer materials.
pub fn mv_240_cu_xlpe_buried(db: &MaterialDatabase) -> Result<CableConfiguration, CableError> {
    let build = Build {
        conductor: 8.7,
        conductor_screen: 0.7,
        insulation: 5.5,
        insulation_screen: 0.7,
        metallic_screen: 1.5,
        sheath: 2.5,
    };
    let mut cable = xlpe_cable(
        "MV 240 mm² Cu/XLPE 20 kV",
        &build,
        "PE",
        ConductorMaterial::COPPER.into(),
        db,
    )?;
    soil_cylinder(&mut cable, 1000.0)?;
    Ok(cable)
}

/// 110 kV single-core 630 mm² Cu/XLPE cable, directly buried.
///
/// Conductor radius 14.2 mm, PE sheath to 40.2 mm, and a 1.5 m equivalent
/// soil cylinder of 1.0 W/(m·K).
///
/// # Errors
///
/// Returns [`CableError::Material`] if `db` lacks one of the layer materials.
pub fn hv_630_cu_xlpe_buried(db: &MaterialDatabase) -> Result<CableConfiguration, CableError> {
    let build = Build {
        conductor: 14.2,
        conductor_screen: 1.0,
        insulation: 18.0,
        insulation_screen: 1.0,
        metallic_screen: 2.0,
        sheath: 4.0,
    };
    let mut cable = xlpe_cable(
        "HV 630 mm² Cu/XLPE 110 kV",
        &build,
        "PE",
        ConductorMaterial::COPPER.into(),
        db,
    )?;
    soil_cylinder(&mut cable, 1500.0)?;
    Ok(cable)
}

/// 20 kV single-core 240 mm² Cu/XLPE cable with PVC sheath in free air.
///
/// 25 °C ambient, 1 m/s cross wind and emissivity 0.9, laid in air. AC
/// losses at 50 Hz include a bonded copper screen.
///
/// # Errors
///
/// Returns [`CableError::Material`] if `db` lacks one of the layer materials.
pub fn mv_240_cu_xlpe_in_air(db: &MaterialDatabase) -> Result<CableConfiguration, CableError> {
    let build = Build {
        conductor: 9.79,
        conductor_screen: 1.5,
        insulation: 9.5,
        insulation_screen: 1.5,
        metallic_screen: 1.0,
        sheath: 2.5,
    };
    let conductor = ConductorProperties::new(
        electrical_resistivity(1.724e-8),
        temperature_coefficient(0.00393),
    )?;
    let cable = xlpe_cable("MV 240 mm² Cu/XLPE in air", &build, "PVC", conductor, db)?;

    let shield = Shield::new(linear_electrical_resistance(1e-4), mm(23.29))?;
    let losses = LossModel::ac(Frequency::new::<hertz>(50.0))?.with_shield(shield);
    let environment = Environment::InAir {
        convection: Some(Convection::forced(Velocity::new::<meter_per_second>(1.0))?),
        radiation: Some(Radiation::new(0.9)?),
    };

    Ok(cable
        .with_ambient_temp(ThermodynamicTemperature::new::<degree_celsius>(25.0))
        .with_environment(environment)
        .with_installation(InstallationMethod::InAir)
        .with_losses(losses))
}
