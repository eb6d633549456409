use uom::si::{electric_current::ampere, f64::ElectricCurrent};

use crate::support::materials::MaterialDatabase;

use super::{CableConfiguration, library};

fn loaded(cable: CableConfiguration, amps: f64) -> CableConfiguration {
    cable
        .with_current(ElectricCurrent::new::<ampere>(amps))
        .expect("test current is non-negative")
}

/// MV 240 mm² buried preset carrying 400 A in 20 °C ground.
pub(super) fn mv_buried() -> CableConfiguration {
    let cable = library::mv_240_cu_xlpe_buried(&MaterialDatabase::builtin())
        .expect("builtin database has every preset material");
    loaded(cable, 400.0)
}

/// HV 630 mm² buried preset carrying 800 A in 20 °C ground.
pub(super) fn hv_buried() -> CableConfiguration {
    let cable = library::hv_630_cu_xlpe_buried(&MaterialDatabase::builtin())
        .expect("builtin database has every preset material");
    loaded(cable, 800.0)
}

/// MV 240 mm² in-air preset carrying 400 A in 25 °C air.
pub(super) fn mv_in_air() -> CableConfiguration {
    let cable = library::mv_240_cu_xlpe_in_air(&MaterialDatabase::builtin())
        .expect("builtin database has every preset material");
    loaded(cable, 400.0)
}
