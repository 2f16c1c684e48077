//! Utility functions shared by the domain layer.
//!
//! - [`url_normalizer`] - Protocol inference, slash cleanup and re-serialization

pub mod url_normalizer;
