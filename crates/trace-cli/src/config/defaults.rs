use super::models::SamplingMode;
use carbontrace::engine::config::{
    DEFAULT_BOND_LENGTH, DEFAULT_POPULATION, FailurePolicy, FinalBond,
};

pub struct DefaultsConfig {
    pub bond_length: f64,
    pub final_bond: FinalBond,
    pub population: usize,
    pub failure_policy: FailurePolicy,
    pub sampling: SamplingMode,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            bond_length: DEFAULT_BOND_LENGTH,
            final_bond: FinalBond::DisplacementNorm,
            population: DEFAULT_POPULATION,
            failure_policy: FailurePolicy::FailFast,
            sampling: SamplingMode::Random,
        }
    }
}
