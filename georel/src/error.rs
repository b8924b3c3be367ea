//! Error type used by the crate.

use thiserror::Error;

use crate::not_implemented::Term;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeorelError {
    /// Geometry conversion error.
    #[error("invalid input geometry: {0}")]
    Conversion(String),
    /// The operands of an algorithm have different number of dimensions.
    #[error("dimension mismatch: {first} and {second}")]
    DimensionMismatch {
        /// Dimensions of the first operand.
        first: usize,
        /// Dimensions of the second operand.
        second: usize,
    },
    /// The algorithm does not support the given combination of geometries.
    #[error("{algorithm} is not implemented for the given parameters ({})", join_terms(.terms))]
    NotImplemented {
        /// Name of the algorithm.
        algorithm: &'static str,
        /// Kinds (and dimensions) of the geometries the algorithm was called with.
        terms: Vec<Term>,
    },
}

fn join_terms(terms: &[Term]) -> String {
    terms
        .iter()
        .map(Term::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
