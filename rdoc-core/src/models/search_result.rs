use serde::{Deserialize, Serialize};

/// One hit from the external evidence-search collaborator.
///
/// Supplementary material for the display layer only; never merged into an
/// [`AnalysisResult`](crate::models::AnalysisResult).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub excerpt: String,
    /// Confidence label as reported by the index (e.g. "HIGH", "MEDIUM").
    pub confidence: String,
}
