//! Provides input and output for the data exchanged with the outside world.
//!
//! The generative model runs outside this crate and dumps its raw output vectors to
//! delimited text files, one vector per row. [`vectors`] reads those files back so the
//! vectors can be fed to the reconstruction engine, and [`pdb`] writes reconstructed chains
//! as C-alpha only PDB records.

pub mod pdb;
pub mod vectors;
