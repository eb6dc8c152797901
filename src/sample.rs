//! The deferred sampler value object.
//!
//! A [`SampleFrom`] pairs a sampling function with a printable label. It is
//! built once at search-space definition time and invoked arbitrarily many
//! times by the external trial generator, once per trial per parameter.

use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;

/// The stored sampling function: maps the in-progress configuration and a
/// random source to a sampled value.
pub type SampleFn<T> = dyn Fn(&Config, &mut fastrand::Rng) -> Result<T> + Send + Sync;

/// Specifies that a configuration value should be sampled from a function.
///
/// The sampler itself is immutable: it holds the sampling function behind an
/// [`Arc`] and a label used for rendering, nothing else. Cloning is cheap and
/// clones share the underlying function, so a `SampleFrom` can be stored in a
/// search-space mapping and sampled from any number of threads. Randomness
/// comes entirely from the generator each call uses, never from sampler state.
///
/// # Examples
///
/// ```
/// use samplespace::{Config, SampleFrom};
///
/// let halved = SampleFrom::new("halved", |_config, rng| Ok(rng.f64() / 2.0));
/// let value = halved.sample(&Config::new()).unwrap();
/// assert!((0.0..0.5).contains(&value));
/// assert_eq!(halved.to_string(), "sample_from(halved)");
/// ```
pub struct SampleFrom<T> {
    func: Arc<SampleFn<T>>,
    label: String,
}

impl<T> SampleFrom<T> {
    /// Creates a sampler from a label and a sampling function.
    ///
    /// The function is stored unconditionally; nothing about it is validated
    /// until it is invoked. The label stands in for the function's printed
    /// form (closures have no runtime representation) and is what
    /// [`Display`](core::fmt::Display) and [`Debug`](core::fmt::Debug) embed.
    #[must_use]
    pub fn new<F>(label: impl Into<String>, func: F) -> Self
    where
        F: Fn(&Config, &mut fastrand::Rng) -> Result<T> + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
            label: label.into(),
        }
    }

    /// Draws a value using a generator forked from the thread-local source.
    ///
    /// This is the default path for callers that do not manage generator
    /// state themselves. Use [`sample_with`](Self::sample_with) to supply a
    /// seeded generator instead.
    ///
    /// # Errors
    ///
    /// Returns whatever error the stored sampling function returns, unchanged.
    pub fn sample(&self, config: &Config) -> Result<T> {
        let mut rng = fastrand::Rng::new();
        (self.func)(config, &mut rng)
    }

    /// Draws a value using the given generator.
    ///
    /// The configuration is passed through to the stored function verbatim
    /// and its result is returned verbatim.
    ///
    /// # Errors
    ///
    /// Returns whatever error the stored sampling function returns, unchanged.
    pub fn sample_with(&self, config: &Config, rng: &mut fastrand::Rng) -> Result<T> {
        (self.func)(config, rng)
    }

    /// Returns the label this sampler renders with.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl<T> Clone for SampleFrom<T> {
    fn clone(&self) -> Self {
        Self {
            func: Arc::clone(&self.func),
            label: self.label.clone(),
        }
    }
}

impl<T> core::fmt::Display for SampleFrom<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "sample_from({})", self.label)
    }
}

impl<T> core::fmt::Debug for SampleFrom<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "sample_from({})", self.label)
    }
}

/// Returns the given callable unchanged, warning that wrapping is obsolete.
///
/// Older search-space definitions wrapped their sampling functions before
/// handing them over. The wrapping was never needed; this shim keeps those
/// definitions working while emitting one WARN event per call through
/// [`tracing`].
#[deprecated(note = "wrapping a sampling function is no longer needed; pass it directly")]
pub fn function<F>(func: F) -> F {
    tracing::warn!(
        callable = core::any::type_name::<F>(),
        "wrapping a sampling function with `function()` is no longer needed"
    );
    func
}
