use thiserror::Error;
use uom::si::f64::{Length, TemperatureInterval, ThermodynamicTemperature};

use crate::support::{constraint::ConstraintError, materials::MaterialError};

/// A cable or installation geometry that cannot carry heat radially.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// A layer's outer radius does not exceed its inner radius.
    #[error("outer radius {outer:?} must exceed inner radius {inner:?}")]
    OuterNotBeyondInner { inner: Length, outer: Length },

    /// A layer other than the conductor core starts at or below the axis.
    #[error("inner radius {inner:?} must be positive outside the conductor core")]
    NonPositiveInnerRadius { inner: Length },

    /// A layer was requested with a zero or negative thickness.
    #[error("layer thickness {thickness:?} must be positive")]
    NonPositiveThickness { thickness: Length },

    /// A layer does not start where its predecessor ends.
    #[error("layer {index} starts at {inner:?} but the previous layer ends at {previous_outer:?}")]
    Discontinuous {
        index: usize,
        inner: Length,
        previous_outer: Length,
    },

    /// The burial depth does not clear the cable's outer radius.
    #[error("burial depth {depth:?} must exceed the outer radius {outer_radius:?}")]
    BurialTooShallow { depth: Length, outer_radius: Length },

    /// Two cables of a group share the same axis position.
    #[error("cables {first} and {second} occupy the same position")]
    CoincidentCables { first: usize, second: usize },
}

/// Errors that can occur while building or solving a cable model.
#[derive(Debug, Error)]
pub enum CableError {
    /// The layer stack or installation geometry is invalid.
    #[error("invalid geometry")]
    InvalidGeometry(#[from] GeometryError),

    /// A material property violates its physical bound.
    #[error("invalid {property} for {}", .layer.as_deref().unwrap_or("cable"))]
    InvalidMaterial {
        layer: Option<String>,
        property: &'static str,
        #[source]
        source: ConstraintError,
    },

    /// The innermost layer carries no resistivity data.
    #[error("conductor layer `{layer}` has no electrical properties")]
    MissingConductorProperties { layer: String },

    /// A material lookup failed.
    #[error("material lookup failed")]
    Material(#[from] MaterialError),

    /// A scalar input is out of range.
    #[error("invalid input `{field}`")]
    InvalidInput {
        field: &'static str,
        #[source]
        source: ConstraintError,
    },

    /// The temperature iteration reached its iteration limit.
    #[error("temperature iteration hit iteration limit: residual={residual:?}")]
    NonConvergence {
        /// Last conductor temperature iterate.
        temperature: ThermodynamicTemperature,

        /// Change between the last two iterates.
        residual: TemperatureInterval,

        /// Iteration count performed by the solver.
        iters: usize,
    },

    /// The temperature iteration left the physical range (thermal runaway).
    #[error("temperature iteration diverged after {iters} iterations")]
    Diverged { iters: usize },
}

impl CableError {
    pub(crate) fn input(field: &'static str, source: ConstraintError) -> Self {
        Self::InvalidInput { field, source }
    }

    pub(crate) fn material(
        layer: Option<&str>,
        property: &'static str,
        source: ConstraintError,
    ) -> Self {
        Self::InvalidMaterial {
            layer: layer.map(str::to_owned),
            property,
            source,
        }
    }
}
