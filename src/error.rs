#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when an integer range is empty at sampling time.
    #[error("invalid bounds: low ({low}) must be less than high ({high})")]
    InvalidBounds {
        /// The lower bound value.
        low: f64,
        /// The upper bound value.
        high: f64,
    },

    /// Returned when a log-space bound or base is not positive.
    #[error("invalid log bounds: bounds and base must be positive for log-space sampling")]
    InvalidLogBounds,

    /// Returned when sampling from an empty candidate list.
    #[error("categorical choices cannot be empty")]
    EmptyChoices,
}

pub type Result<T> = core::result::Result<T, Error>;
