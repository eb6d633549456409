//! Cable rating models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation and domain logic lives. The `core` types that
//! callers need (configurations, results, errors) are re-exported by the model
//! module; the rest stays private.
//!
//! The [`twine_core::Model`] implementations are thin adapters that
//! delegate to the model-specific core API.

pub mod thermal;
