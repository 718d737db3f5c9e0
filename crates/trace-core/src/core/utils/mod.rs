//! Numerical helpers shared by the models and the engine.

pub mod angles;
pub mod geometry;
