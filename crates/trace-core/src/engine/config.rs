use serde::Deserialize;
use thiserror::Error;

/// Default C-alpha to C-alpha virtual bond length, in Angstroms.
pub const DEFAULT_BOND_LENGTH: f64 = 3.8;
/// Default number of candidates generated per selection.
pub const DEFAULT_POPULATION: usize = 10;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Bond length must be a positive finite distance, got {0}")]
    InvalidBondLength(f64),

    #[error("Target span must be a positive finite distance, got {0}")]
    InvalidTargetSpan(f64),

    #[error("Population must contain at least one candidate")]
    EmptyPopulation,
}

/// How the length of the last bond of a chain is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FinalBond {
    /// The last bond is as long as the encoded displacement norm.
    #[default]
    DisplacementNorm,
    /// The last bond is stretched or shrunk so that the first-to-last distance equals the
    /// encoded displacement norm.
    SpanClosure,
}

/// What the candidate selector does when a single candidate cannot be reconstructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Abort the whole selection on the first failing candidate.
    #[default]
    FailFast,
    /// Drop failing candidates and select among the rest.
    SkipFailed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReconstructionConfig {
    pub bond_length: f64,
    pub final_bond: FinalBond,
}

impl Default for ReconstructionConfig {
    fn default() -> Self {
        Self {
            bond_length: DEFAULT_BOND_LENGTH,
            final_bond: FinalBond::default(),
        }
    }
}

impl ReconstructionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.bond_length.is_finite() || self.bond_length <= 0.0 {
            return Err(ConfigError::InvalidBondLength(self.bond_length));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct ReconstructionConfigBuilder {
    bond_length: Option<f64>,
    final_bond: Option<FinalBond>,
}

impl ReconstructionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bond_length(mut self, length: f64) -> Self {
        self.bond_length = Some(length);
        self
    }
    pub fn final_bond(mut self, mode: FinalBond) -> Self {
        self.final_bond = Some(mode);
        self
    }

    pub fn build(self) -> Result<ReconstructionConfig, ConfigError> {
        let config = ReconstructionConfig {
            bond_length: self.bond_length.unwrap_or(DEFAULT_BOND_LENGTH),
            final_bond: self.final_bond.unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionConfig {
    pub target_span: f64,
    pub population: usize,
    pub failure_policy: FailurePolicy,
    pub reconstruction: ReconstructionConfig,
}

impl SelectionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.target_span.is_finite() || self.target_span <= 0.0 {
            return Err(ConfigError::InvalidTargetSpan(self.target_span));
        }
        if self.population == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        self.reconstruction.validate()
    }
}

#[derive(Default)]
pub struct SelectionConfigBuilder {
    target_span: Option<f64>,
    population: Option<usize>,
    failure_policy: Option<FailurePolicy>,
    reconstruction: Option<ReconstructionConfig>,
}

impl SelectionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target_span(mut self, span: f64) -> Self {
        self.target_span = Some(span);
        self
    }
    pub fn population(mut self, population: usize) -> Self {
        self.population = Some(population);
        self
    }
    pub fn failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = Some(policy);
        self
    }
    pub fn reconstruction(mut self, config: ReconstructionConfig) -> Self {
        self.reconstruction = Some(config);
        self
    }

    pub fn build(self) -> Result<SelectionConfig, ConfigError> {
        let config = SelectionConfig {
            target_span: self
                .target_span
                .ok_or(ConfigError::MissingParameter("target_span"))?,
            population: self.population.unwrap_or(DEFAULT_POPULATION),
            failure_policy: self.failure_policy.unwrap_or_default(),
            reconstruction: self.reconstruction.unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }
}
