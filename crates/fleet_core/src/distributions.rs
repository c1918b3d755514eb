//! Random draws consumed by the simulation: package distances, loading times
//! and package inter-arrival gaps.

use std::ops::{Deref, DerefMut};

use bevy_ecs::prelude::Resource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Exp};

/// Source of the random draws the domain logic needs.
pub trait Sampler: Send + Sync + std::fmt::Debug {
    /// Uniform draw in `[0, 1)`.
    fn uniform01(&mut self) -> f64;

    /// Uniform draw in `[low, high)`. Returns `low` when the range is empty.
    fn uniform(&mut self, low: f64, high: f64) -> f64;

    /// Exponential draw with the given rate (events per minute).
    /// A non-positive rate never fires and yields `f64::INFINITY`.
    fn exponential(&mut self, rate: f64) -> f64;
}

/// [`Sampler`] backed by a seeded [`StdRng`].
#[derive(Debug, Clone)]
pub struct SeededSampler {
    rng: StdRng,
}

impl SeededSampler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Sampler for SeededSampler {
    fn uniform01(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if !(high > low) {
            return low;
        }
        self.rng.gen_range(low..high)
    }

    fn exponential(&mut self, rate: f64) -> f64 {
        if rate <= 0.0 {
            return f64::INFINITY;
        }
        match Exp::new(rate) {
            Ok(dist) => dist.sample(&mut self.rng),
            Err(_) => f64::INFINITY,
        }
    }
}

/// Resource wrapper for the sampler trait object.
#[derive(Resource)]
pub struct SamplerResource(pub Box<dyn Sampler>);

impl SamplerResource {
    pub fn new(sampler: Box<dyn Sampler>) -> Self {
        Self(sampler)
    }

    pub fn seeded(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(Box::new(SeededSampler::new(seed))),
            None => Self::new(Box::new(SeededSampler::from_entropy())),
        }
    }
}

impl Deref for SamplerResource {
    type Target = dyn Sampler;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl DerefMut for SamplerResource {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.0.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform01_stays_in_unit_interval() {
        let mut sampler = SeededSampler::new(7);
        for _ in 0..1000 {
            let u = sampler.uniform01();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn uniform_respects_bounds_and_empty_range() {
        let mut sampler = SeededSampler::new(7);
        for _ in 0..1000 {
            let x = sampler.uniform(3.0, 4.0);
            assert!((3.0..4.0).contains(&x));
        }
        assert_eq!(sampler.uniform(2.0, 2.0), 2.0);
        assert_eq!(sampler.uniform(5.0, 1.0), 5.0);
    }

    #[test]
    fn exponential_is_positive_with_plausible_mean() {
        let mut sampler = SeededSampler::new(42);
        let n = 20_000;
        let total: f64 = (0..n).map(|_| sampler.exponential(1.0)).sum();
        let mean = total / n as f64;
        assert!(mean > 0.9 && mean < 1.1, "mean was {mean}");
    }

    #[test]
    fn exponential_zero_rate() {
        let mut sampler = SeededSampler::new(42);
        assert_eq!(sampler.exponential(0.0), f64::INFINITY);
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = SeededSampler::new(123);
        let mut b = SeededSampler::new(123);
        for _ in 0..10 {
            assert_eq!(a.uniform01(), b.uniform01());
        }
    }
}
