//! Storefront error types.

use crate::ids::ProductId;
use thiserror::Error;

/// Errors surfaced by catalog and cart operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorefrontError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// A supplied field is outside its allowed bounds.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Configuration could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl StorefrontError {
    /// Shorthand for a validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        StorefrontError::Validation(message.into())
    }
}

impl From<serde_json::Error> for StorefrontError {
    fn from(e: serde_json::Error) -> Self {
        StorefrontError::Config(e.to_string())
    }
}

impl From<toml::de::Error> for StorefrontError {
    fn from(e: toml::de::Error) -> Self {
        StorefrontError::Config(e.to_string())
    }
}
