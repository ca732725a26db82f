//! Flat recommendation-table projection of an analysis result.

use rdoc_core::models::{AnalysisResult, Finding, RecommendationRow, UnitEvidence};

/// One row per finding, domain order then finding order within domain.
pub fn recommendation_rows(result: &AnalysisResult) -> Vec<RecommendationRow> {
    let mut rows = Vec::with_capacity(result.total_findings());
    for domain in result.iter() {
        for finding in &domain.findings {
            rows.push(row_for(&domain.domain, finding));
        }
    }
    rows
}

fn row_for(domain: &str, finding: &Finding) -> RecommendationRow {
    RecommendationRow {
        domain: domain.to_string(),
        construct: finding.construct.clone(),
        units_of_analysis: format_units(&finding.units),
        recommended_tests: finding.tests.join(", "),
        relevance: finding.relevance.to_string(),
    }
}

/// `"category: a, b; category: c"`, skipping categories with no markers.
pub fn format_units(units: &[UnitEvidence]) -> String {
    units
        .iter()
        .filter(|u| !u.markers.is_empty())
        .map(|u| format!("{}: {}", u.category, u.markers.join(", ")))
        .collect::<Vec<_>>()
        .join("; ")
}
