use carbontrace::engine::config::{ReconstructionConfig, SelectionConfig};
use serde::Deserialize;
use std::path::PathBuf;

/// How the `select` command draws candidates from the input pool.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SamplingMode {
    /// Uniformly at random, with replacement.
    #[default]
    Random,
    /// In file order, wrapping around.
    Sequential,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutputConfig {
    pub path: Option<PathBuf>,
    pub sequence: Option<String>,
    pub chain_id: char,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DecodeAppConfig {
    pub input_path: PathBuf,
    /// 0-based row index into the input file.
    pub row: usize,
    pub show_original: bool,
    pub reconstruction: ReconstructionConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectAppConfig {
    pub input_path: PathBuf,
    pub selection: SelectionConfig,
    pub sampling: SamplingMode,
    pub seed: Option<u64>,
    pub output: OutputConfig,
}
