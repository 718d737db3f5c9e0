//! # Core Module
//!
//! This module provides the stateless building blocks of C-alpha backbone reconstruction.
//!
//! ## Overview
//!
//! A generative model describes a backbone fragment in internal coordinates: an end-to-end
//! displacement vector plus, per residue, a bending angle and a dihedral angle stored as an
//! unnormalised sine/cosine pair. The core module owns the representation of that encoding,
//! the geometry needed to turn internal coordinates into Cartesian positions, and the
//! resulting chain type.
//!
//! ## Architecture
//!
//! - **Data Models** ([`models`]) - Feature vectors, per-residue angle records and atom chains
//! - **Geometry** ([`utils`]) - Dihedral decoding and the NeRF atom placement primitive
//! - **Input** ([`io`]) - Reading generated feature vectors from delimited files
//! - **Statistics** ([`statistics`]) - Angle distributions grouped by secondary structure
//!
//! ## Conventions
//!
//! - Coordinates are in Angstroms, stored as `nalgebra::Point3<f64>`
//! - Angles are exposed in degrees; geometry primitives take radians
//! - The bend angle is the interior angle at the atom being extended from, and dihedral
//!   angles follow the IUPAC sign convention

pub mod io;
pub mod models;
pub mod statistics;
pub mod utils;
