//! Thermal models.
//!
//! This module contains thermal rating models for power cables: layered
//! conduction, the surrounding environment, and the iterative solvers built
//! on top of them.

pub mod cable;
