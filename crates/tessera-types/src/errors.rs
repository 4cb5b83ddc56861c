//! Error types for Tessera model contracts

use crate::Capability;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Tessera operations
#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
pub enum TesseraError {
    /// A model claims a capability but never overrode the required operation.
    ///
    /// This is a programming-contract violation: it surfaces straight to the
    /// caller and is never retried.
    #[error("Capability not implemented: {model} does not implement {capability}")]
    CapabilityNotImplemented {
        capability: Capability,
        model: String,
    },

    /// Tensor shape disagrees with what a contract guarantees
    #[error("Shape mismatch: {message}")]
    ShapeMismatch { message: String },

    /// Two inputs of a pairwise call have different batch sizes
    #[error("Batch mismatch: left batch {left}, right batch {right}")]
    BatchMismatch { left: usize, right: usize },

    /// Tensor runtime errors
    #[error("Backend error: {message}")]
    Backend { message: String },

    /// Device errors
    #[error("Device error: {message}")]
    Device { message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Invalid parameters or configuration values
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// Unsupported operation errors
    #[error("Unsupported operation: {message}")]
    Unsupported { message: String },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl TesseraError {
    /// Create a capability error naming the offending model type
    pub fn not_implemented<T: ?Sized>(capability: Capability) -> Self {
        Self::CapabilityNotImplemented {
            capability,
            model: std::any::type_name::<T>().to_string(),
        }
    }

    /// Create a shape mismatch error
    pub fn shape_mismatch(message: impl Into<String>) -> Self {
        Self::ShapeMismatch {
            message: message.into(),
        }
    }

    /// Create a batch mismatch error
    pub fn batch_mismatch(left: usize, right: usize) -> Self {
        Self::BatchMismatch { left, right }
    }

    /// Create a backend error
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    /// Create a device error
    pub fn device(message: impl Into<String>) -> Self {
        Self::Device {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Create an unsupported operation error
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// The capability a contract violation refers to, if any
    pub fn capability(&self) -> Option<Capability> {
        match self {
            Self::CapabilityNotImplemented { capability, .. } => Some(*capability),
            _ => None,
        }
    }

    /// Check if this error signals structural misuse of a capability contract
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::CapabilityNotImplemented { .. })
    }

    /// Check if the failing call is worth repeating.
    ///
    /// Nothing produced at this layer is transient, so this is always false.
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// Check if this error was caused by the caller's data rather than the model
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::BatchMismatch { .. } | Self::InvalidParameter { .. } | Self::Config { .. }
        )
    }
}

/// Conversion from serde_json::Error
impl From<serde_json::Error> for TesseraError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("{}", err))
    }
}
