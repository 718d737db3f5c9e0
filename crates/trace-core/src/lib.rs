//! # Carbon Trace Core Library
//!
//! A library for reconstructing three-dimensional C-alpha protein backbone traces from the
//! internal-coordinate feature vectors emitted by a generative model.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture with a clear separation of concerns.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`FeatureVector`, `AtomChain`),
//!   the geometry primitives for placing atoms from internal coordinates, feature vector
//!   input and secondary-structure statistics.
//!
//! - **[`engine`]: The Logic Core.** The `ChainReconstructor` that decodes one vector into
//!   a chain, and the `CandidateSelector` that reconstructs a population of sampled vectors
//!   and keeps the one whose end-to-end span best matches a target.
//!
//! - **[`workflows`]: The Public API.** High-level entry points tying `engine` and `core`
//!   together: decoding a single vector, selecting a candidate and gathering angle
//!   statistics.

pub mod core;
pub mod engine;
pub mod workflows;
