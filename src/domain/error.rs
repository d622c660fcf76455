//! Error types for MediDex.
//!
//! This module defines the centralized error type [`MedidexError`] and a type alias
//! [`Result`] for convenient error handling throughout the application. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for MediDex operations.
///
/// This enum consolidates all error conditions that can occur during startup and
/// operation, from dataset loading to I/O failures and configuration issues. Most
/// runtime paths cannot fail at all (filtering and aggregation are pure and total);
/// errors are concentrated in the loading phase.
///
/// # Examples
///
/// ```
/// use medidex::domain::MedidexError;
///
/// fn validate_dataset() -> Result<(), MedidexError> {
///     Err(MedidexError::Dataset("duplicate provider id 3".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum MedidexError {
    /// Dataset loading or validation failed.
    ///
    /// Occurs when the provider dataset cannot be parsed or violates an
    /// invariant (for example a duplicate provider id). The string contains
    /// a description of what went wrong.
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Filesystem or terminal I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations, including crossterm
    /// terminal setup. Automatically converts from `std::io::Error` using the
    /// `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    ///
    /// Occurs when a theme file cannot be read or its TOML cannot be parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when an explicitly supplied config file cannot be read or parsed.
    /// A missing default config file is not an error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for MediDex operations.
///
/// This is a type alias for `std::result::Result<T, MedidexError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, MedidexError>;
