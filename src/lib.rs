#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::std_instead_of_core)]

//! Deferred-sampling primitives for describing hyperparameter search spaces.
//!
//! A search space maps parameter names to *distributions* rather than
//! concrete values: "this learning rate is log-uniform between 1e-4 and
//! 1e-2". This crate provides the value object behind that idea —
//! [`SampleFrom`], a deferred sampler that pairs a sampling function with a
//! printable label — plus the built-in distributions search spaces are
//! usually made of. Define once, sample once per trial, as many trials as
//! the search needs.
//!
//! # Getting Started
//!
//! ```
//! use samplespace::{choice, loguniform, uniform, Config, SharedRng};
//!
//! let lr = loguniform(1e-4, 1e-2).unwrap();
//! let batch = choice(vec![32, 64, 128]);
//! let momentum = uniform(0.1, 0.9);
//!
//! // The trial generator passes the in-progress configuration as context
//! // (the built-ins ignore it) and draws from a seedable shared source.
//! let rng = SharedRng::with_seed(42);
//! let config = Config::new();
//!
//! let value = rng.sample(&lr, &config).unwrap();
//! assert!((1e-4..=1e-2).contains(&value));
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`SampleFrom`] | A deferred sampler: an immutable, shareable pairing of sampling function and label. |
//! | [`Config`] | The context argument every sampling call accepts — the in-progress configuration. |
//! | [`ParamValue`] | Uniform storage for sampled values in a [`Config`]. |
//! | [`SharedRng`] | A seedable random source serialized behind a lock for concurrent trial generators. |
//!
//! # Built-in distributions
//!
//! | Constructor | Draws |
//! |-------------|-------|
//! | [`uniform`] | a real uniformly from `[low, high)` |
//! | [`loguniform`] / [`loguniform_base`] | a positive real uniformly in log space |
//! | [`choice`] | one element of a candidate list |
//! | [`randint`] / [`randint_range`] | an integer from a half-open range |
//! | [`randn`] / [`randn_vec`] | standard-normal reals, scalar or shaped |
//!
//! Sampling is synchronous and stateless on the sampler side: randomness
//! comes from the generator each call uses, either one forked per call
//! ([`SampleFrom::sample`]), one the caller threads through explicitly
//! ([`SampleFrom::sample_with`]), or a [`SharedRng`].

mod config;
mod distribution;
mod error;
mod param;
mod rng;
mod sample;

pub use config::Config;
pub use distribution::{
    choice, loguniform, loguniform_base, randint, randint_range, randn, randn_vec, uniform,
};
pub use error::{Error, Result};
pub use param::ParamValue;
pub use rng::SharedRng;
#[allow(deprecated)]
pub use sample::function;
pub use sample::{SampleFn, SampleFrom};

/// Convenient wildcard import for the most common types.
///
/// ```
/// use samplespace::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::distribution::{
        choice, loguniform, loguniform_base, randint, randint_range, randn, randn_vec, uniform,
    };
    pub use crate::error::{Error, Result};
    pub use crate::param::ParamValue;
    pub use crate::rng::SharedRng;
    pub use crate::sample::{SampleFn, SampleFrom};
}
