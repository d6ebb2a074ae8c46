//! # Owned Random Source
//!
//! A `RandomSource` is plain owned state: whoever holds `&mut` may draw from
//! it, nobody else can. That makes it the building block for the
//! thread-local and shared policies, and the right choice when a caller
//! needs a reproducible stream.
//!
//! The generator is ChaCha8. Seeded streams are stable across releases.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use axiom_shared::{DomainError, DomainResult};

/// An owned uniform random generator.
#[derive(Clone, Debug)]
pub struct RandomSource {
    rng: ChaCha8Rng,
}

impl RandomSource {
    /// Creates a generator seeded from the operating system's entropy source.
    ///
    /// # Panics
    ///
    /// Panics if the operating system cannot provide entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self { rng: ChaCha8Rng::from_entropy() }
    }

    /// Creates a generator with a fixed seed. Same seed, same stream.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Uniform integer in the closed range `[min, max]`.
    ///
    /// # Errors
    ///
    /// [`DomainError::InvalidIntRange`] if `min > max`.
    pub fn int(&mut self, min: i32, max: i32) -> DomainResult<i32> {
        if min > max {
            return Err(DomainError::InvalidIntRange { min: i64::from(min), max: i64::from(max) });
        }
        Ok(self.rng.gen_range(min..=max))
    }

    /// Uniform real in the half-open range `[min, max)`.
    ///
    /// `min == max` is accepted and returns `min`.
    ///
    /// # Errors
    ///
    /// [`DomainError::InvalidRealRange`] if `min > max`, if either bound is
    /// NaN, or if `max - min` is not finite.
    pub fn double(&mut self, min: f64, max: f64) -> DomainResult<f64> {
        // A NaN bound makes the width NaN.
        if min > max || !(max - min).is_finite() {
            return Err(DomainError::InvalidRealRange { min, max });
        }
        if min == max {
            return Ok(min);
        }
        Ok(self.rng.gen_range(min..max))
    }
}

impl RngCore for RandomSource {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest);
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = RandomSource::from_seed(42);
        let mut b = RandomSource::from_seed(42);
        for _ in 0..100 {
            assert_eq!(a.int(-1000, 1000), b.int(-1000, 1000));
            assert_eq!(a.double(0.0, 1.0), b.double(0.0, 1.0));
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut a = RandomSource::from_seed(1);
        let mut b = RandomSource::from_seed(2);
        let xs: Vec<i32> = (0..32).map(|_| a.int(i32::MIN, i32::MAX).unwrap()).collect();
        let ys: Vec<i32> = (0..32).map(|_| b.int(i32::MIN, i32::MAX).unwrap()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn test_int_bounds_are_inclusive() {
        let mut rng = RandomSource::from_seed(7);
        let mut seen = [false; 4];
        for _ in 0..1_000 {
            let v = rng.int(1, 4).unwrap();
            assert!((1..=4).contains(&v));
            seen[(v - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_degenerate_and_invalid_int_ranges() {
        let mut rng = RandomSource::from_seed(7);
        assert_eq!(rng.int(5, 5), Ok(5));
        assert_eq!(rng.int(5, 1), Err(DomainError::InvalidIntRange { min: 5, max: 1 }));
        assert!(rng.int(i32::MIN, i32::MAX).is_ok());
    }

    #[test]
    fn test_double_is_half_open() {
        let mut rng = RandomSource::from_seed(9);
        for _ in 0..10_000 {
            let v = rng.double(-2.0, 3.0).unwrap();
            assert!((-2.0..3.0).contains(&v));
        }
    }

    #[test]
    fn test_degenerate_and_invalid_real_ranges() {
        let mut rng = RandomSource::from_seed(9);
        assert_eq!(rng.double(1.5, 1.5), Ok(1.5));
        assert_eq!(
            rng.double(2.0, 1.0),
            Err(DomainError::InvalidRealRange { min: 2.0, max: 1.0 })
        );
        assert!(rng.double(f64::NAN, 1.0).is_err());
        assert!(rng.double(0.0, f64::INFINITY).is_err());
        assert!(rng.double(-f64::MAX, f64::MAX).is_err());
    }

    #[test]
    fn test_int_is_roughly_uniform() {
        let mut rng = RandomSource::from_seed(12345);
        let mut buckets = [0_u32; 10];
        for _ in 0..10_000 {
            buckets[rng.int(0, 9).unwrap() as usize] += 1;
        }
        for count in buckets {
            assert!((800..=1200).contains(&count), "{buckets:?}");
        }
    }

    #[test]
    fn test_entropy_sources_are_independent() {
        let mut a = RandomSource::from_entropy();
        let mut b = RandomSource::from_entropy();
        assert_ne!(a.next_u64(), b.next_u64());
    }
}
