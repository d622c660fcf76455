//! Dataset layer for the fixed provider directory.
//!
//! This module loads and validates the read-only provider dataset and computes
//! the derived specialty data the chart needs. There is no write path: the
//! directory is fixed for the lifetime of the process.
//!
//! # Modules
//!
//! - `source`: [`ProviderSource`] trait with embedded and file-backed loaders
//! - `aggregate`: specialty discovery and per-specialty counting

pub mod aggregate;
pub mod source;

pub use aggregate::{aggregate_by_specialty, specialty_order};
pub use source::{parse_providers, validate, EmbeddedDataset, JsonDataset, ProviderSource};
