use thiserror::Error;

/// Error types for the carbonlog engine
///
/// Validation failures a user can recover from (empty rules, unsupported unit combinations)
/// are values, not errors. The variants here are contract violations by the caller or
/// failures at the serialization boundary.
#[derive(Debug, Error)]
pub enum CarbonError {
    /// A range was requested between quantities whose units differ
    #[error("Incompatible units: cannot form a range from '{left}' to '{right}'")]
    IncompatibleUnits { left: String, right: String },

    /// `set_unit` was called for an attribute that has no binding yet
    #[error("No unit binding registered for attribute {0}")]
    UnknownAttribute(String),

    /// A unit type declaration encodes a division, which is not supported
    #[error("Unit type '{0}' describes a quotient; only two-factor products are supported")]
    QuotientUnitType(String),

    /// A composed unit type refers to a factor the registry does not know
    #[error("Unknown unit type '{0}'")]
    UnknownUnitType(String),

    /// A unit symbol or name could not be resolved
    #[error("Unknown unit: '{unit}'. {suggestion}")]
    UnknownUnit { unit: String, suggestion: String },

    /// `combine` was called with a different number of weights than dimensions
    #[error("Expected {dims} weights, got {weights}")]
    WeightCountMismatch { dims: usize, weights: usize },

    /// Combining dimensions pushed an exponent out of the `i32` range
    #[error("Exponent of {0} out of range")]
    ExponentOverflow(String),

    /// The external factor catalog failed
    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
