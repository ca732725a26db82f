//! Data models produced and consumed by the matching engine.

pub mod finding;
pub mod recommendation;
pub mod search_result;

pub use finding::{AnalysisResult, DomainFindings, Finding, Relevance, UnitCategory, UnitEvidence};
pub use recommendation::RecommendationRow;
pub use search_result::SearchResult;
