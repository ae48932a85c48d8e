use thiserror::Error;

use crate::constants::Weight;

/// Errors raised by graph construction and label lookup.
///
/// "No route exists" is not an error: the searches report it as `None`.
#[derive(Error, Debug)]
pub enum Error {
    /// A query referenced a city that was never added to the graph.
    #[error("unknown city: {0:?}")]
    UnknownCity(String),

    /// A city label was empty after normalization.
    #[error("empty city name in edge list")]
    EmptyCityName,

    /// An edge connects a city to itself.
    #[error("self loop on city {0:?}")]
    SelfLoop(String),

    /// An edge weight is negative, NaN or infinite.
    #[error("invalid weight {weight} on edge {from:?} - {target:?}")]
    InvalidWeight {
        from: String,
        target: String,
        weight: Weight,
    },

    #[error("failed to read edge list")]
    Csv(#[from] csv::Error),
}
