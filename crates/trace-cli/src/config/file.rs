use super::models::SamplingMode;
use crate::error::{CliError, Result};
use carbontrace::engine::config::{FailurePolicy, FinalBond};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    pub reconstruction: Option<FileReconstructionConfig>,
    pub selection: Option<FileSelectionConfig>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileReconstructionConfig {
    pub bond_length: Option<f64>,
    pub final_bond: Option<FinalBond>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileSelectionConfig {
    pub population: Option<usize>,
    pub failure_policy: Option<FailurePolicy>,
    pub seed: Option<u64>,
    pub sampling: Option<SamplingMode>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Reading configuration file {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
