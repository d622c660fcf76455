//! Domain layer for MediDex.
//!
//! This module contains the core domain types for the directory, independent of
//! any terminal or widget concerns. It keeps the record model and error types
//! isolated from the rendering and event-handling layers.
//!
//! # Organization
//!
//! - [`error`]: Error types and result alias
//! - [`provider`]: Provider record model and operations
//!
//! # Examples
//!
//! ```
//! use medidex::domain::{Provider, Result};
//!
//! fn mappable(provider: &Provider) -> bool {
//!     provider.coordinates().is_some()
//! }
//! ```

pub mod error;
pub mod provider;

pub use error::{MedidexError, Result};
pub use provider::{Provider, ProviderId};
