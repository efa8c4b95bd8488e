//! # Error Types
//!
//! Structured error types for area_core. Two kinds describe contract
//! violations in the measurement model itself:
//!
//! - [`AreaError::InvalidShapeParameter`] - a shape was built with a
//!   non-positive (or non-finite) dimension
//! - [`AreaError::InvalidShapeElement`] - an element handed to an aggregator
//!   lacks the capability being summed
//!
//! [`AreaError::SerializationError`] covers input that is not JSON, or not
//! an array of elements, at the decoding boundary.
//!
//! ## Example
//!
//! ```rust
//! use area_core::errors::{AreaError, AreaResult};
//!
//! fn validate_length(length: f64) -> AreaResult<()> {
//!     if length <= 0.0 {
//!         return Err(AreaError::invalid_parameter(
//!             "Square",
//!             "length",
//!             length.to_string(),
//!             "Length must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_length(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for area_core operations
pub type AreaResult<T> = Result<T, AreaError>;

/// Structured error type for shape and aggregation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum AreaError {
    /// A geometric attribute is non-positive or otherwise unusable
    #[error("Invalid {shape} parameter '{field}': {value} - {reason}")]
    InvalidShapeParameter {
        shape: String,
        field: String,
        value: String,
        reason: String,
    },

    /// An aggregated element does not satisfy the measured capability
    #[error("Invalid shape element at index {index}: {reason}")]
    InvalidShapeElement { index: usize, reason: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl AreaError {
    /// Create an InvalidShapeParameter error
    pub fn invalid_parameter(
        shape: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        AreaError::InvalidShapeParameter {
            shape: shape.into(),
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidShapeElement error
    pub fn invalid_element(index: usize, reason: impl Into<String>) -> Self {
        AreaError::InvalidShapeElement {
            index,
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        AreaError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            AreaError::InvalidShapeParameter { .. } => "INVALID_SHAPE_PARAMETER",
            AreaError::InvalidShapeElement { .. } => "INVALID_SHAPE_ELEMENT",
            AreaError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for AreaError {
    fn from(e: serde_json::Error) -> Self {
        AreaError::serialization(e.to_string())
    }
}
