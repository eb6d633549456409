use crate::support::units::{LinearThermalResistance, linear_thermal_resistance};

/// Thermal resistance between the cable surface and ambient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnvironmentResistance {
    /// Image-source resistance of the surrounding soil.
    Soil(LinearThermalResistance),

    /// Convection and radiation films acting in parallel.
    ///
    /// A path is `None` when it carries no heat.
    Surface {
        convection: Option<LinearThermalResistance>,
        radiation: Option<LinearThermalResistance>,
        combined: LinearThermalResistance,
    },
}

impl EnvironmentResistance {
    /// The resistance in series with the layer stack.
    #[must_use]
    pub fn value(&self) -> LinearThermalResistance {
        match self {
            Self::Soil(r) => *r,
            Self::Surface { combined, .. } => *combined,
        }
    }
}

/// The series thermal circuit of one cable, per metre of length.
///
/// `layers` is parallel to the cable's layers; a solid conductor core
/// contributes zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ThermalResistanceSet {
    pub layers: Vec<LinearThermalResistance>,
    pub external: Vec<LinearThermalResistance>,
    pub environment: Option<EnvironmentResistance>,

    /// Extra resistance from the grouping derating factor.
    pub grouping: LinearThermalResistance,

    /// Installation-method factor dividing the series sum.
    pub installation_factor: f64,
}

impl ThermalResistanceSet {
    /// Series sum of every term divided by the installation factor.
    #[must_use]
    pub fn total(&self) -> LinearThermalResistance {
        let sums = self.outward_sums();
        linear_thermal_resistance(sums.first().copied().unwrap_or(0.0) / self.installation_factor)
    }

    /// Sum over layers and external layers only.
    #[must_use]
    pub fn conduction(&self) -> LinearThermalResistance {
        let sum = self
            .external
            .iter()
            .rev()
            .chain(self.layers.iter().rev())
            .fold(0.0, |sum, r| sum + r.value);
        linear_thermal_resistance(sum)
    }

    /// Resistance from each layer boundary to ambient, in SI.
    ///
    /// Entry `k` is the resistance outward of the inner boundary of layer `k`
    /// (counting external layers after cable layers); the last entry is the
    /// resistance outward of the last external boundary. Sums are accumulated
    /// from the outside in, so entries never increase.
    pub(crate) fn outward_sums(&self) -> Vec<f64> {
        let mut outside = self.grouping.value;
        if let Some(env) = &self.environment {
            outside += env.value().value;
        }

        let terms: Vec<f64> = self
            .layers
            .iter()
            .chain(&self.external)
            .map(|r| r.value)
            .collect();
        let mut sums = vec![0.0; terms.len() + 1];
        sums[terms.len()] = outside;
        for k in (0..terms.len()).rev() {
            sums[k] = sums[k + 1] + terms[k];
        }
        sums
    }
}

/// Parallel combination `1/(1/a + 1/b)` of two resistances.
#[must_use]
pub fn parallel(a: LinearThermalResistance, b: LinearThermalResistance) -> LinearThermalResistance {
    let sum = a.value + b.value;
    if sum == 0.0 {
        return linear_thermal_resistance(0.0);
    }
    linear_thermal_resistance(a.value * b.value / sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn r(value: f64) -> LinearThermalResistance {
        linear_thermal_resistance(value)
    }

    fn sample() -> ThermalResistanceSet {
        ThermalResistanceSet {
            layers: vec![r(0.0), r(0.3), r(0.05)],
            external: vec![r(0.6)],
            environment: Some(EnvironmentResistance::Soil(r(0.2))),
            grouping: r(0.1),
            installation_factor: 1.0,
        }
    }

    #[test]
    fn total_is_series_sum() {
        assert_relative_eq!(sample().total().value, 1.25, max_relative = 1e-12);
        assert_relative_eq!(sample().conduction().value, 0.95, max_relative = 1e-12);
    }

    #[test]
    fn outward_sums_never_increase() {
        let sums = sample().outward_sums();
        assert_eq!(sums.len(), 5);
        assert!(sums.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(sums[0], sample().total().value);
        assert_relative_eq!(sums[4], 0.3, max_relative = 1e-12);
    }

    #[test]
    fn installation_factor_scales_the_total() {
        let in_duct = ThermalResistanceSet {
            installation_factor: 0.85,
            ..sample()
        };
        assert_relative_eq!(in_duct.total().value, 1.25 / 0.85, max_relative = 1e-12);
        assert_eq!(in_duct.outward_sums(), sample().outward_sums());
    }

    #[test]
    fn parallel_resistors() {
        assert_relative_eq!(parallel(r(2.0), r(2.0)).value, 1.0);
        assert_relative_eq!(parallel(r(0.4), r(1.2)).value, 0.3, max_relative = 1e-12);
        assert_eq!(parallel(r(0.0), r(0.0)).value, 0.0);
    }
}
