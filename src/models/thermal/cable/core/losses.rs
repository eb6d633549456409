//! Joule losses in the conductor and its metallic screen.

use std::f64::consts::PI;

use uom::si::{
    f64::{Frequency, Length},
    frequency::hertz,
    length::meter,
};

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    units::{
        LinearElectricalResistance, LinearHeatRate, linear_electrical_resistance,
        linear_heat_rate,
    },
};

use super::{CableError, ConductorProperties};

/// Which loss mechanisms to include.
///
/// The default is DC: conductor losses `I²·R(T)` only.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LossModel {
    frequency: Option<Constrained<Frequency, StrictlyPositive>>,
    shield: Option<Shield>,
}

impl LossModel {
    #[must_use]
    pub fn dc() -> Self {
        Self::default()
    }

    /// AC losses with skin and, for grouped cables, proximity effect.
    ///
    /// # Errors
    ///
    /// Returns [`CableError::InvalidInput`] if the frequency is not positive.
    pub fn ac(frequency: Frequency) -> Result<Self, CableError> {
        Ok(Self {
            frequency: Some(
                StrictlyPositive::new(frequency)
                    .map_err(|source| CableError::input("frequency", source))?,
            ),
            shield: None,
        })
    }

    /// Adds circulating-current losses in a bonded screen.
    #[must_use]
    pub fn with_shield(mut self, shield: Shield) -> Self {
        self.shield = Some(shield);
        self
    }

    #[must_use]
    pub fn frequency(&self) -> Option<Frequency> {
        self.frequency.map(Constrained::into_inner)
    }

    #[must_use]
    pub fn shield(&self) -> Option<&Shield> {
        self.shield.as_ref()
    }

    /// Evaluates all losses for one conductor at `temperature` (kelvin).
    pub(crate) fn evaluate(
        &self,
        conductor: &ConductorProperties,
        geometry: &ConductorGeometry,
        current: f64,
        temperature: f64,
    ) -> Losses {
        let r_dc = conductor.resistance_si(geometry.area, temperature);
        let i2 = current * current;

        let (skin, proximity) = match self.frequency() {
            Some(f) => {
                let f = f.get::<hertz>();
                let skin = skin_si(f, r_dc);
                let proximity = geometry.neighbours.map_or(0.0, |(cables, spacing)| {
                    proximity_si(f, r_dc, 2.0 * geometry.radius, spacing, cables)
                });
                (skin, proximity)
            }
            None => (0.0, 0.0),
        };
        let r_ac = r_dc * (1.0 + skin + proximity);

        let shield = match (self.frequency(), self.shield) {
            (Some(f), Some(shield)) => {
                i2 * shield.loss_factor_si(f.get::<hertz>(), geometry.radius)
            }
            _ => 0.0,
        };

        Losses {
            dc_resistance: linear_electrical_resistance(r_dc),
            ac_resistance: linear_electrical_resistance(r_ac),
            skin_factor: skin,
            proximity_factor: proximity,
            dc: linear_heat_rate(i2 * r_dc),
            ac: linear_heat_rate(i2 * r_ac),
            shield: linear_heat_rate(shield),
            total: linear_heat_rate(i2 * r_ac + shield),
        }
    }
}

/// Conductor data the loss evaluation needs, in SI.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ConductorGeometry {
    pub area: f64,
    pub radius: f64,
    /// Cable count and axis spacing when cables are grouped.
    pub neighbours: Option<(usize, f64)>,
}

/// A metallic screen bonded at both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shield {
    resistance: Constrained<LinearElectricalResistance, StrictlyPositive>,
    radius: Constrained<Length, StrictlyPositive>,
}

impl Shield {
    /// # Errors
    ///
    /// Returns [`CableError::InvalidInput`] if either value is not positive.
    pub fn new(resistance: LinearElectricalResistance, radius: Length) -> Result<Self, CableError> {
        Ok(Self {
            resistance: StrictlyPositive::new(resistance)
                .map_err(|source| CableError::input("shield_resistance", source))?,
            radius: StrictlyPositive::new(radius)
                .map_err(|source| CableError::input("shield_radius", source))?,
        })
    }

    #[must_use]
    pub fn resistance(&self) -> LinearElectricalResistance {
        self.resistance.into_inner()
    }

    #[must_use]
    pub fn radius(&self) -> Length {
        self.radius.into_inner()
    }

    /// Screen loss per ampere squared of conductor current, Ω/m.
    ///
    /// `R_s·X²/(R_s² + X²)` with the screen reactance
    /// `X = ω·(μ₀/2π)·ln(r_s/r_c)`; zero if the screen is not outside the conductor.
    fn loss_factor_si(&self, frequency: f64, conductor_radius: f64) -> f64 {
        let rs = self.radius().get::<meter>();
        if rs <= conductor_radius {
            return 0.0;
        }
        let r = self.resistance().value;
        let x = 2.0 * PI * frequency * 2e-7 * (rs / conductor_radius).ln();
        r * x * x / (r * r + x * x)
    }
}

/// Loss breakdown at one conductor temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Losses {
    /// DC resistance at the conductor temperature.
    pub dc_resistance: LinearElectricalResistance,

    /// AC resistance `R_dc·(1 + y_s + y_p)`.
    pub ac_resistance: LinearElectricalResistance,

    pub skin_factor: f64,
    pub proximity_factor: f64,

    /// `I²·R_dc`.
    pub dc: LinearHeatRate,

    /// `I²·R_ac`, the conductor loss.
    pub ac: LinearHeatRate,

    /// Circulating-current loss in the screen.
    pub shield: LinearHeatRate,

    /// Conductor plus screen loss.
    pub total: LinearHeatRate,
}

/// IEC 60287-1-1 skin-effect factor `y_s` for a round solid conductor.
#[must_use]
pub fn skin_effect_factor(frequency: Frequency, dc_resistance: LinearElectricalResistance) -> f64 {
    skin_si(frequency.get::<hertz>(), dc_resistance.value)
}

/// IEC 60287-1-1 proximity-effect factor `y_p`.
///
/// Zero for a single cable. Two cables use the two-core form, three or more
/// the three-core form. The axis spacing is clamped to at least one
/// conductor diameter.
#[must_use]
pub fn proximity_effect_factor(
    frequency: Frequency,
    dc_resistance: LinearElectricalResistance,
    conductor_diameter: Length,
    axis_spacing: Length,
    cables: usize,
) -> f64 {
    proximity_si(
        frequency.get::<hertz>(),
        dc_resistance.value,
        conductor_diameter.get::<meter>(),
        axis_spacing.get::<meter>(),
        cables,
    )
}

/// `x⁴/(192 + 0.8·x⁴)` with `x² = 8πf·10⁻⁷/R'`.
fn skin_si(frequency: f64, dc_resistance: f64) -> f64 {
    let x2 = 8.0 * PI * frequency * 1e-7 / dc_resistance;
    let x4 = x2 * x2;
    x4 / (192.0 + 0.8 * x4)
}

fn proximity_si(
    frequency: f64,
    dc_resistance: f64,
    diameter: f64,
    spacing: f64,
    cables: usize,
) -> f64 {
    if cables < 2 {
        return 0.0;
    }
    let f = skin_si(frequency, dc_resistance);
    let ratio = diameter / spacing.max(diameter);
    let r2 = ratio * ratio;
    if cables == 2 {
        f * r2 * 2.9
    } else {
        f * r2 * (0.312 * r2 + 1.18 / (f + 0.27))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::length::millimeter;

    use crate::support::materials::ConductorMaterial;

    fn copper_240() -> (ConductorProperties, ConductorGeometry) {
        let radius: f64 = 0.0087;
        (
            ConductorProperties::from(ConductorMaterial::COPPER),
            ConductorGeometry {
                area: PI * radius * radius,
                radius,
                neighbours: None,
            },
        )
    }

    #[test]
    fn dc_losses_are_joule_heating() {
        let (conductor, geometry) = copper_240();
        let losses = LossModel::dc().evaluate(&conductor, &geometry, 400.0, 293.15);

        let r20 = 1.75e-8 / geometry.area;
        assert_relative_eq!(losses.dc_resistance.value, r20, max_relative = 1e-12);
        assert_relative_eq!(losses.total.value, 160_000.0 * r20, max_relative = 1e-12);
        assert_eq!(losses.skin_factor, 0.0);
        assert_eq!(losses.shield.value, 0.0);
    }

    #[test]
    fn skin_factor_matches_closed_form() {
        let r: f64 = 6.4e-5;
        let x2 = 8.0 * PI * 50.0 * 1e-7 / r;
        let expected = x2.powi(2) / (192.0 + 0.8 * x2.powi(2));

        let ys = skin_effect_factor(
            Frequency::new::<hertz>(50.0),
            linear_electrical_resistance(r),
        );
        assert_relative_eq!(ys, expected, max_relative = 1e-12);
        assert!(ys > 0.01 && ys < 0.03);
    }

    #[test]
    fn proximity_needs_neighbours_and_fades_with_spacing() {
        let f = Frequency::new::<hertz>(50.0);
        let r = linear_electrical_resistance(7.4e-5);
        let d = Length::new::<millimeter>(17.4);

        assert_eq!(
            proximity_effect_factor(f, r, d, Length::new::<millimeter>(40.0), 1),
            0.0
        );

        let close = proximity_effect_factor(f, r, d, Length::new::<millimeter>(40.0), 3);
        let far = proximity_effect_factor(f, r, d, Length::new::<millimeter>(200.0), 3);
        assert!(close > far && far > 0.0);

        let touching = proximity_effect_factor(f, r, d, Length::new::<millimeter>(1.0), 3);
        let clamped = proximity_effect_factor(f, r, d, d, 3);
        assert_relative_eq!(touching, clamped);
    }

    #[test]
    fn shield_loss_uses_screen_reactance() {
        let (conductor, geometry) = copper_240();
        let shield = Shield::new(
            linear_electrical_resistance(1e-4),
            Length::new::<millimeter>(16.35),
        )
        .unwrap();
        let model = LossModel::ac(Frequency::new::<hertz>(50.0))
            .unwrap()
            .with_shield(shield);

        let losses = model.evaluate(&conductor, &geometry, 400.0, 343.15);

        let x = 2.0 * PI * 50.0 * 2e-7 * (0.01635_f64 / 0.0087).ln();
        let expected = 160_000.0 * 1e-4 * x * x / (1e-8 + x * x);
        assert_relative_eq!(losses.shield.value, expected, max_relative = 1e-9);
        assert_relative_eq!(
            losses.total.value,
            losses.ac.value + losses.shield.value,
            max_relative = 1e-12
        );
        assert!(losses.ac.value > losses.dc.value);
    }

    #[test]
    fn shield_without_frequency_is_lossless() {
        let (conductor, geometry) = copper_240();
        let shield = Shield::new(
            linear_electrical_resistance(1e-4),
            Length::new::<millimeter>(16.35),
        )
        .unwrap();
        let losses = LossModel::dc()
            .with_shield(shield)
            .evaluate(&conductor, &geometry, 400.0, 343.15);
        assert_eq!(losses.shield.value, 0.0);
    }
}
