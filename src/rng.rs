//! Random source plumbing shared by the built-in distributions.

use parking_lot::Mutex;

use crate::config::Config;
use crate::error::Result;
use crate::sample::SampleFrom;

/// Generate a random `f64` in the range `[low, high)`.
#[inline]
pub(crate) fn f64_range(rng: &mut fastrand::Rng, low: f64, high: f64) -> f64 {
    low + rng.f64() * (high - low)
}

/// Sample a value from the standard normal distribution using Box-Muller transform.
pub(crate) fn standard_normal(rng: &mut fastrand::Rng) -> f64 {
    // Box-Muller transform; u1 is kept away from zero so ln stays finite
    let u1 = f64::EPSILON + rng.f64() * (1.0 - f64::EPSILON);
    let u2 = rng.f64() * core::f64::consts::TAU;
    (-2.0 * u1.ln()).sqrt() * u2.cos()
}

/// A seedable random source that serializes access across trial generators.
///
/// Samplers themselves carry no generator state, so concurrent callers need
/// either per-call generators or one shared source behind a lock. This is the
/// shared option: a mutex-wrapped [`fastrand::Rng`] that any number of
/// threads can draw from.
///
/// # Examples
///
/// ```
/// use samplespace::{uniform, Config, SharedRng};
///
/// let x = uniform(0.0, 1.0);
/// let rng = SharedRng::with_seed(42);
/// let value = rng.sample(&x, &Config::new()).unwrap();
/// assert!((0.0..1.0).contains(&value));
/// ```
pub struct SharedRng {
    rng: Mutex<fastrand::Rng>,
}

impl SharedRng {
    /// Creates a shared source with a random seed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::new()),
        }
    }

    /// Creates a shared source with a fixed seed for reproducibility.
    ///
    /// Using the same seed will produce the same sequence of sampled values.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::with_seed(seed)),
        }
    }

    /// Draws a value from the given sampler using this source.
    ///
    /// The lock is held only for the duration of the single sampling call.
    ///
    /// # Errors
    ///
    /// Returns whatever error the sampler's stored function returns, unchanged.
    pub fn sample<T>(&self, sampler: &SampleFrom<T>, config: &Config) -> Result<T> {
        let mut rng = self.rng.lock();
        sampler.sample_with(config, &mut rng)
    }
}

impl Default for SharedRng {
    fn default() -> Self {
        Self::new()
    }
}
