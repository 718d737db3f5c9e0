//! Configuration loading for the command-line tool.
//!
//! Values are resolved with the precedence command line > configuration file > defaults,
//! then handed to the library builders for validation.

mod builder;
mod defaults;
mod file;
mod models;

pub use builder::{build_decode_config, build_select_config};
pub use models::{DecodeAppConfig, OutputConfig, SamplingMode, SelectAppConfig};
