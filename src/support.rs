//! Supporting utilities shared by the cable models.
//!
//! - [`constraint`]: Numeric invariants enforced at construction time.
//! - [`materials`]: Thermophysical material data and the injectable database.
//! - [`planar`]: One-dimensional conduction through planar walls.
//! - [`units`]: Quantity aliases and extensions to [`uom`].

pub mod constraint;
pub mod materials;
pub mod planar;
pub mod units;
