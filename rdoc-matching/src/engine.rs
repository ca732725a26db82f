//! MatchingEngine: analysis assembly over the taxonomy matrix.
//!
//! Failure policy (whole-call granularity): `analyze` and
//! `recommendation_table` never propagate errors. Any internal failure is
//! logged and collapsed to the all-empty-domains result / empty table, so a
//! long-running interactive caller can never be crashed by a match. Callers
//! that want the error use the `try_*` variants.

use std::sync::Arc;

use rdoc_core::config::AliasConfig;
use rdoc_core::errors::RdocResult;
use rdoc_core::models::{
    AnalysisResult, Finding, RecommendationRow, Relevance, UnitCategory, UnitEvidence,
};
use rdoc_core::taxonomy::{ConstructEntry, TaxonomyMatrix};
use tracing::{debug, error, info};

use crate::projection;
use crate::relevance;

/// The symptom-to-construct matching engine.
///
/// Holds the shared read-only matrix and the alias table; no interior
/// mutability, so one engine serves unlimited concurrent callers.
pub struct MatchingEngine {
    matrix: Arc<TaxonomyMatrix>,
    aliases: AliasConfig,
}

impl MatchingEngine {
    pub fn new(matrix: Arc<TaxonomyMatrix>) -> Self {
        Self {
            matrix,
            aliases: AliasConfig::default(),
        }
    }

    /// Replace the keyword alias table used by relevance rule 4.
    pub fn with_aliases(mut self, aliases: AliasConfig) -> Self {
        self.aliases = aliases;
        self
    }

    pub fn matrix(&self) -> &TaxonomyMatrix {
        &self.matrix
    }

    /// Map free-text snippets onto the taxonomy.
    ///
    /// Never fails: on an internal error the whole call collapses to every
    /// domain mapped to an empty sequence, and the error is logged.
    pub fn analyze<S: AsRef<str>>(&self, snippets: &[S]) -> AnalysisResult {
        match self.try_analyze(snippets) {
            Ok(result) => result,
            Err(err) => {
                error!(error = %err, "analysis failed, returning empty result");
                AnalysisResult::empty_for(&self.matrix)
            }
        }
    }

    /// Fallible variant of [`analyze`](Self::analyze) for callers that want
    /// the error instead of the empty-result collapse.
    pub fn try_analyze<S: AsRef<str>>(&self, snippets: &[S]) -> RdocResult<AnalysisResult> {
        let mut result = AnalysisResult::empty_for(&self.matrix);

        // Snippet by snippet, domain by domain, construct by construct, all
        // in stable order. Findings accumulate; repeat matches across
        // snippets are appended, never deduplicated.
        for snippet in snippets {
            let snippet_lower = snippet.as_ref().to_lowercase();
            for domain in self.matrix.domain_entries() {
                for construct in &domain.constructs {
                    if let Some(signal) = relevance::match_signal(
                        &snippet_lower,
                        &construct.name,
                        &construct.record,
                        &self.aliases,
                    ) {
                        debug!(
                            domain = %domain.name,
                            construct = %construct.name,
                            ?signal,
                            "construct matched"
                        );
                        result.push(&domain.name, build_finding(construct));
                    }
                }
            }
        }

        info!(
            snippets = snippets.len(),
            findings = result.total_findings(),
            "analysis complete"
        );
        Ok(result)
    }

    /// Project an analysis result into a flat recommendation table.
    ///
    /// Never fails: an internal error yields an empty table, mirroring
    /// [`analyze`](Self::analyze).
    pub fn recommendation_table(&self, result: &AnalysisResult) -> Vec<RecommendationRow> {
        match self.try_recommendation_table(result) {
            Ok(rows) => rows,
            Err(err) => {
                error!(error = %err, "recommendation projection failed, returning empty table");
                Vec::new()
            }
        }
    }

    /// Fallible variant of [`recommendation_table`](Self::recommendation_table).
    pub fn try_recommendation_table(
        &self,
        result: &AnalysisResult,
    ) -> RdocResult<Vec<RecommendationRow>> {
        Ok(projection::recommendation_rows(result))
    }
}

/// Assemble one finding from a matched construct: the present unit
/// categories in canonical order, then the recommended tests.
fn build_finding(construct: &ConstructEntry) -> Finding {
    let units = UnitCategory::ALL
        .iter()
        .filter_map(|&category| {
            construct.record.unit(category).map(|markers| UnitEvidence {
                category,
                markers: markers.to_vec(),
            })
        })
        .collect();

    Finding {
        construct: construct.name.clone(),
        units,
        tests: construct.record.recommended_tests(),
        relevance: Relevance::DirectMatch,
    }
}
