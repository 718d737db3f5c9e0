//! # Engine Module
//!
//! This module turns feature vectors into Cartesian C-alpha chains and chooses among
//! independently generated candidates.
//!
//! ## Overview
//!
//! Reconstruction is a sequential NeRF extension: three atoms are seeded in a canonical
//! frame, then every following atom is placed from the previous three using one bond length,
//! one bend angle and one dihedral angle. Selection wraps reconstruction in a
//! generate-and-choose loop driven by an injected [`utils::sampling::FeatureSampler`].
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Bond length, final-bond mode, population and failure policy
//! - **Reconstruction** ([`reconstruct`]) - The deterministic feature vector to chain decoder
//! - **Selection** ([`selection`]) - Candidate generation, parallel reconstruction and ranking
//! - **Progress Monitoring** ([`progress`]) - Progress reporting for front ends
//! - **Error Handling** ([`error`]) - Engine-wide error type
//!
//! ## Key Capabilities
//!
//! - **Deterministic decoding**: identical input and configuration yield identical chains
//! - **Parallel candidate evaluation** behind the `parallel` feature
//! - **Reproducible sampling** through seeded samplers

pub mod config;
pub mod error;
pub mod progress;
pub mod reconstruct;
pub mod selection;
pub mod utils;
