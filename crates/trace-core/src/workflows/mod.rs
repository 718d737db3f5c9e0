//! # Workflows Module
//!
//! High-level entry points that tie the engine and core layers together.
//!
//! ## Overview
//!
//! Each workflow validates its configuration, runs one complete procedure and returns a
//! plain result value. Front ends (the command-line tool, notebooks, services) are expected
//! to call these functions rather than the engine types directly.
//!
//! ## Architecture
//!
//! - **Decode Workflow** ([`decode`]) - Reconstructs the chain encoded by a single vector
//! - **Selection Workflow** ([`select`]) - Samples a population and keeps the candidate whose
//!   span is closest to a target
//! - **Statistics Workflow** ([`statistics`]) - Gathers helix, strand and coil angle
//!   distributions over many vectors

pub mod decode;
pub mod select;
pub mod statistics;
