/// How the cable is laid.
///
/// Each method carries a factor relative to direct burial that divides the
/// total thermal resistance: ducts trap heat, free air and water carry it
/// away more readily.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InstallationMethod {
    #[default]
    DirectBuried,
    InDuct,
    InAir,
    InWater,
    InTunnel,
}

impl InstallationMethod {
    /// Factor applied as `R_total / factor`.
    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            Self::DirectBuried => 1.0,
            Self::InDuct => 0.85,
            Self::InAir => 1.2,
            Self::InWater => 1.15,
            Self::InTunnel => 0.90,
        }
    }
}
