//! The RDoC taxonomy matrix: domains → constructs → evidence records.
//!
//! Loaded once at process start from a JSON document, validated during the
//! load, and read-only for the lifetime of the process. Iteration order is
//! always the document's insertion order; it determines display and
//! recommendation-row ordering downstream.

pub mod loader;
pub mod matrix;
pub mod record;

pub use matrix::{ConstructEntry, DomainEntry, TaxonomyMatrix};
pub use record::ConstructRecord;
