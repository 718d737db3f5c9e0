use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};
use thiserror::Error;
use tracing::instrument;

#[derive(Debug, Error)]
pub enum SamplingError {
    #[error("Sample pool is empty, cannot draw feature vectors")]
    EmptyPool,
    #[error("Sampler backend failed: {0}")]
    Backend(String),
}

/// A source of raw feature vectors, one independent draw per call.
///
/// The generative model is the natural implementor. Any
/// `FnMut() -> Result<Vec<f64>, SamplingError>` closure is a sampler as well.
pub trait FeatureSampler {
    fn sample(&mut self) -> Result<Vec<f64>, SamplingError>;
}

impl<F> FeatureSampler for F
where
    F: FnMut() -> Result<Vec<f64>, SamplingError>,
{
    fn sample(&mut self) -> Result<Vec<f64>, SamplingError> {
        self()
    }
}

/// Draws vectors uniformly at random, with replacement, from a pre-generated pool.
#[derive(Debug, Clone)]
pub struct PoolSampler<R> {
    pool: Vec<Vec<f64>>,
    rng: R,
}

impl<R: rand::Rng> PoolSampler<R> {
    pub fn new(pool: Vec<Vec<f64>>, rng: R) -> Result<Self, SamplingError> {
        if pool.is_empty() {
            return Err(SamplingError::EmptyPool);
        }
        Ok(Self { pool, rng })
    }

    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }
}

impl PoolSampler<StdRng> {
    /// A reproducible sampler: the same seed and pool always yield the same draws.
    pub fn seeded(pool: Vec<Vec<f64>>, seed: u64) -> Result<Self, SamplingError> {
        Self::new(pool, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(pool: Vec<Vec<f64>>) -> Result<Self, SamplingError> {
        Self::new(pool, StdRng::from_entropy())
    }
}

impl<R: rand::Rng> FeatureSampler for PoolSampler<R> {
    #[instrument(level = "trace", skip_all, fields(pool_size = self.pool.len()))]
    fn sample(&mut self) -> Result<Vec<f64>, SamplingError> {
        self.pool
            .choose(&mut self.rng)
            .cloned()
            .ok_or(SamplingError::EmptyPool)
    }
}

/// Replays a pool in order, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct SequentialSampler {
    pool: Vec<Vec<f64>>,
    cursor: usize,
}

impl SequentialSampler {
    pub fn new(pool: Vec<Vec<f64>>) -> Result<Self, SamplingError> {
        if pool.is_empty() {
            return Err(SamplingError::EmptyPool);
        }
        Ok(Self { pool, cursor: 0 })
    }
}

impl FeatureSampler for SequentialSampler {
    fn sample(&mut self) -> Result<Vec<f64>, SamplingError> {
        let vector = self
            .pool
            .get(self.cursor)
            .cloned()
            .ok_or(SamplingError::EmptyPool)?;
        self.cursor = (self.cursor + 1) % self.pool.len();
        Ok(vector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> Vec<Vec<f64>> {
        (0..5).map(|i| vec![i as f64, 0.0, 0.0]).collect()
    }

    #[test]
    fn seeded_pool_sampler_is_reproducible() {
        let mut a = PoolSampler::seeded(pool(), 7).unwrap();
        let mut b = PoolSampler::seeded(pool(), 7).unwrap();

        for _ in 0..20 {
            assert_eq!(a.sample().unwrap(), b.sample().unwrap());
        }
    }

    #[test]
    fn pool_sampler_only_returns_pool_members() {
        let members = pool();
        let mut sampler = PoolSampler::seeded(members.clone(), 11).unwrap();

        for _ in 0..50 {
            let drawn = sampler.sample().unwrap();
            assert!(members.contains(&drawn));
        }
        assert_eq!(sampler.pool_size(), 5);
    }

    #[test]
    fn empty_pools_are_rejected() {
        assert!(matches!(
            PoolSampler::seeded(Vec::new(), 1),
            Err(SamplingError::EmptyPool)
        ));
        assert!(matches!(
            SequentialSampler::new(Vec::new()),
            Err(SamplingError::EmptyPool)
        ));
    }

    #[test]
    fn sequential_sampler_replays_in_order_and_wraps() {
        let mut sampler = SequentialSampler::new(pool()).unwrap();

        let firsts: Vec<f64> = (0..7).map(|_| sampler.sample().unwrap()[0]).collect();

        assert_eq!(firsts, vec![0.0, 1.0, 2.0, 3.0, 4.0, 0.0, 1.0]);
    }

    #[test]
    fn closures_are_samplers() {
        let mut calls = 0;
        let mut sampler = || {
            calls += 1;
            Ok::<_, SamplingError>(vec![calls as f64, 0.0, 0.0])
        };

        assert_eq!(FeatureSampler::sample(&mut sampler).unwrap()[0], 1.0);
        assert_eq!(FeatureSampler::sample(&mut sampler).unwrap()[0], 2.0);
    }
}
