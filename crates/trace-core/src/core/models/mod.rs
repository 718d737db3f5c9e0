//! # Core Models Module
//!
//! This module contains the data structures that flow through the reconstruction pipeline.
//!
//! ## Key Components
//!
//! - [`features`] - The flat feature vector emitted by the generative model, with typed
//!   per-residue access to bending and dihedral angles
//! - [`chain`] - The immutable chain of carbon positions produced by a reconstruction
//!
//! ## Usage
//!
//! ```ignore
//! use carbontrace::core::models::features::FeatureVector;
//!
//! let features = FeatureVector::new(raw_output)?;
//! let span = features.compute_r1n();
//! let dihedrals = features.theta()?;
//! ```

pub mod chain;
pub mod features;
