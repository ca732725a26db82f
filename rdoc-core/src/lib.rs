//! # rdoc-core
//!
//! Foundation crate for the RDoC clinical matching system.
//! Defines the taxonomy matrix and its loader, the analysis models,
//! alias configuration, errors, and the external-search trait boundary.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod models;
pub mod taxonomy;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{AliasConfig, AliasEntry, SearchConfig};
pub use errors::{LoadError, RdocError, RdocResult};
pub use models::{
    AnalysisResult, DomainFindings, Finding, RecommendationRow, Relevance, SearchResult,
    UnitCategory, UnitEvidence,
};
pub use taxonomy::{ConstructEntry, ConstructRecord, DomainEntry, TaxonomyMatrix};
pub use traits::IEvidenceSearch;
