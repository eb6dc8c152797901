//! Parameter value storage types.

/// Represents a sampled parameter value.
///
/// This enum stores different parameter value types uniformly so that the
/// external search-space aggregator can record heterogeneous sampled values
/// under parameter names. For categorical parameters, the `Categorical`
/// variant stores the index into the choices array.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    /// A floating-point parameter value.
    Float(f64),
    /// An integer parameter value.
    Int(i64),
    /// A categorical parameter value, stored as an index into the choices array.
    Categorical(usize),
    /// A vector of floating-point values, e.g. shaped standard-normal draws.
    FloatVec(Vec<f64>),
}
