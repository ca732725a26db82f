use serde::{Deserialize, Serialize};

/// A flat projection of one finding for display or export.
///
/// Serialized field names match the legacy recommendation-table columns so
/// exported tables stay compatible with existing downstream tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRow {
    #[serde(rename = "Domain")]
    pub domain: String,
    #[serde(rename = "Construct")]
    pub construct: String,
    /// Unit evidence formatted as `"category: a, b; category: c"`.
    #[serde(rename = "Units_of_Analysis")]
    pub units_of_analysis: String,
    /// Recommended tests, comma-joined.
    #[serde(rename = "Recommended_Tests")]
    pub recommended_tests: String,
    #[serde(rename = "Relevance")]
    pub relevance: String,
}
