//! Utility types for the engine.
//!
//! Currently holds the sampling abstraction through which the selector obtains raw feature
//! vectors, together with pool-backed samplers for replaying pre-generated output.

pub mod sampling;
