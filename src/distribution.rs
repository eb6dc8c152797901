//! Built-in distribution constructors.
//!
//! Each constructor returns a pre-configured [`SampleFrom`] whose sampling
//! function closes over the constructor-time parameters and ignores the
//! configuration argument. Validation stays where the original primitive
//! would fail: only the log-uniform constructors can fail at construction
//! (the log transform is taken eagerly); everything else surfaces errors at
//! sampling time.

use core::fmt::Debug;

use crate::error::{Error, Result};
use crate::rng::{f64_range, standard_normal};
use crate::sample::SampleFrom;

/// A value drawn uniformly from `[low, high)`.
///
/// No bounds validation is performed; reversed bounds inherit the underlying
/// arithmetic's behavior, as the original primitive would.
///
/// # Examples
///
/// ```
/// use samplespace::{uniform, Config};
///
/// let momentum = uniform(0.1, 0.9);
/// let value = momentum.sample(&Config::new()).unwrap();
/// assert!((0.1..0.9).contains(&value));
/// ```
#[must_use]
pub fn uniform(low: f64, high: f64) -> SampleFrom<f64> {
    SampleFrom::new(format!("uniform({low}, {high})"), move |_config, rng| {
        Ok(f64_range(rng, low, high))
    })
}

/// A positive value drawn uniformly in base-10 log space.
///
/// Sugar for sampling across orders of magnitude:
/// `loguniform(1e-4, 1e-2)` spends as much probability mass on
/// `[1e-4, 1e-3]` as on `[1e-3, 1e-2]`.
///
/// # Errors
///
/// Returns [`Error::InvalidLogBounds`] if either bound is not positive.
pub fn loguniform(min_bound: f64, max_bound: f64) -> Result<SampleFrom<f64>> {
    loguniform_base(min_bound, max_bound, 10.0)
}

/// A positive value drawn uniformly in log space with the given base.
///
/// The log-domain bounds are computed once, at construction; each call
/// samples uniformly between them and exponentiates back with `base`.
///
/// # Errors
///
/// Returns [`Error::InvalidLogBounds`] if either bound or the base is not
/// positive (the logarithm is undefined there).
pub fn loguniform_base(min_bound: f64, max_bound: f64, base: f64) -> Result<SampleFrom<f64>> {
    if min_bound <= 0.0 || max_bound <= 0.0 || base <= 0.0 {
        return Err(Error::InvalidLogBounds);
    }
    let logmin = min_bound.ln() / base.ln();
    let logmax = max_bound.ln() / base.ln();

    Ok(SampleFrom::new(
        format!("loguniform({min_bound}, {max_bound}, base={base})"),
        move |_config, rng| Ok(base.powf(f64_range(rng, logmin, logmax))),
    ))
}

/// One element selected uniformly at random from the given candidates.
///
/// The candidate list is stored as-is; an empty list only fails when sampled,
/// with [`Error::EmptyChoices`].
///
/// # Examples
///
/// ```
/// use samplespace::{choice, Config};
///
/// let batch = choice(vec![32, 64, 128]);
/// let value = batch.sample(&Config::new()).unwrap();
/// assert!([32, 64, 128].contains(&value));
/// ```
#[must_use]
pub fn choice<T>(choices: Vec<T>) -> SampleFrom<T>
where
    T: Clone + Debug + Send + Sync + 'static,
{
    let label = format!("choice({choices:?})");
    SampleFrom::new(label, move |_config, rng| {
        rng.choice(choices.iter()).cloned().ok_or(Error::EmptyChoices)
    })
}

/// An integer drawn uniformly from `[0, high)`.
///
/// A non-positive `high` makes the range empty; sampling then fails with
/// [`Error::InvalidBounds`].
#[must_use]
pub fn randint(high: i64) -> SampleFrom<i64> {
    int_range(format!("randint({high})"), 0, high)
}

/// An integer drawn uniformly from the half-open range `[low, high)`.
///
/// An empty range (`low >= high`) fails at sampling time with
/// [`Error::InvalidBounds`].
#[must_use]
pub fn randint_range(low: i64, high: i64) -> SampleFrom<i64> {
    int_range(format!("randint({low}, {high})"), low, high)
}

#[allow(clippy::cast_precision_loss)]
fn int_range(label: String, low: i64, high: i64) -> SampleFrom<i64> {
    SampleFrom::new(label, move |_config, rng| {
        if low >= high {
            return Err(Error::InvalidBounds {
                low: low as f64,
                high: high as f64,
            });
        }
        Ok(rng.i64(low..high))
    })
}

/// A value drawn from the standard normal distribution.
#[must_use]
pub fn randn() -> SampleFrom<f64> {
    SampleFrom::new("randn()", move |_config, rng| Ok(standard_normal(rng)))
}

/// A vector of `len` independent standard-normal draws.
///
/// `randn_vec(0)` yields an empty vector.
#[must_use]
pub fn randn_vec(len: usize) -> SampleFrom<Vec<f64>> {
    SampleFrom::new(format!("randn({len})"), move |_config, rng| {
        Ok((0..len).map(|_| standard_normal(rng)).collect())
    })
}
