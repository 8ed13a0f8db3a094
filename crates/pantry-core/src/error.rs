//! Core error types for pantry-core.
//!
//! This module defines the error hierarchy using thiserror. Leaf errors
//! (`ConversionError`, `ValidationError`, `ConfigError`) are returned by the
//! operations that raise them; `CoreError` wraps all of them for callers that
//! run the whole pipeline.

use thiserror::Error;

use crate::ingredient::Unit;

/// Core error type for pantry-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Unit conversion errors
    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Unit conversion errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// The pair of units is neither identical nor in the conversion table
    #[error("Cannot convert {from} to {to}")]
    Unsupported { from: Unit, to: Unit },
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A recipe must serve at least one person
    #[error("Base servings must be greater than zero")]
    ZeroServings,

    /// Negative or non-finite quantity
    #[error("Invalid quantity {quantity} for '{name}': must be finite and non-negative")]
    InvalidQuantity { name: String, quantity: f64 },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(#[from] toml::de::Error),

    /// Failed to serialize configuration
    #[error("Failed to serialize configuration: {0}")]
    SerializeFailed(#[from] toml::ser::Error),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
