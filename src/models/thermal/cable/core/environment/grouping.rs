use uom::si::{f64::Length, length::meter};

use crate::{
    models::thermal::cable::core::CableError,
    support::constraint::{Constrained, NonNegative, StrictlyPositive},
};

/// Several identical cables laid side by side.
///
/// `spacing` is the clear distance between neighbouring cable surfaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grouping {
    cables: Constrained<usize, StrictlyPositive>,
    spacing: Constrained<Length, NonNegative>,
}

impl Grouping {
    /// # Errors
    ///
    /// Returns [`CableError::InvalidInput`] for zero cables or a negative spacing.
    pub fn new(cables: usize, spacing: Length) -> Result<Self, CableError> {
        Ok(Self {
            cables: StrictlyPositive::new(cables)
                .map_err(|source| CableError::input("cables", source))?,
            spacing: NonNegative::new(spacing)
                .map_err(|source| CableError::input("spacing", source))?,
        })
    }

    #[must_use]
    pub fn cables(&self) -> usize {
        self.cables.into_inner()
    }

    #[must_use]
    pub fn spacing(&self) -> Length {
        self.spacing.into_inner()
    }

    /// Centre-to-centre distance for cables of the given outer diameter.
    #[must_use]
    pub fn axis_spacing(&self, diameter: Length) -> Length {
        self.spacing() + diameter
    }

    /// Tabulated derating factor for cables of the given outer diameter.
    #[must_use]
    pub fn factor(&self, diameter: Length) -> f64 {
        grouping_factor(
            self.cables(),
            self.spacing().get::<meter>() / diameter.get::<meter>(),
        )
    }
}

/// Derating factor for a group of cables, `1.0` for a single cable.
///
/// `spacing_ratio` is the clear spacing divided by the cable diameter. Only
/// 2, 3, 4 and 6 cables are tabulated; any other count uses 0.5.
#[must_use]
pub fn grouping_factor(cables: usize, spacing_ratio: f64) -> f64 {
    let row = if spacing_ratio < 0.25 {
        [0.75, 0.65, 0.60, 0.55]
    } else if spacing_ratio < 0.5 {
        [0.80, 0.70, 0.65, 0.60]
    } else {
        [0.85, 0.75, 0.70, 0.65]
    };

    match cables {
        0 | 1 => 1.0,
        2 => row[0],
        3 => row[1],
        4 => row[2],
        6 => row[3],
        _ => 0.5,
    }
}
