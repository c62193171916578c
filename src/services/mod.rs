//! External service interactions
//!
//! This module contains services for the data that lives outside the view:
//! - Dataset loading (embedded, JSON, YAML, CSV) and validation

pub mod dataset;

pub use dataset::{load_with_fallback, DatasetError};
