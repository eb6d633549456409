//! # Cable Thermal
//!
//! Steady-state and transient thermal rating models for power cables,
//! following the simplified IEC 60287 approach of concentric cylindrical
//! layers in a series thermal circuit.
//!
//! ## Crate layout
//!
//! - [`models`]: Cable rating models, including the [`twine_core::Model`] adapters.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Quick start
//!
//! ```
//! use cable_thermal::models::thermal::cable::{AmpacityConfig, library};
//! use cable_thermal::support::materials::MaterialDatabase;
//! use uom::si::electric_current::ampere;
//!
//! let db = MaterialDatabase::builtin();
//! let cable = library::mv_240_cu_xlpe_buried(&db).unwrap();
//!
//! let rating = cable.ampacity(&AmpacityConfig::default()).unwrap();
//! assert!(rating.current.get::<ampere>() > 300.0);
//! ```
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code starts in a model's internal `core` module and moves to
//! [`support`] once it's useful across models.

pub mod models;
pub mod support;
