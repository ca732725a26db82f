use std::fmt;

use serde::{Deserialize, Serialize};

use crate::taxonomy::TaxonomyMatrix;

/// One evidence category attached to a construct.
///
/// The declaration order here is the canonical ordering used when projecting
/// finding evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitCategory {
    Molecules,
    Cells,
    Circuits,
    Behavior,
}

impl UnitCategory {
    /// All unit-of-analysis categories, in canonical order.
    pub const ALL: [UnitCategory; 4] = [
        UnitCategory::Molecules,
        UnitCategory::Cells,
        UnitCategory::Circuits,
        UnitCategory::Behavior,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitCategory::Molecules => "molecules",
            UnitCategory::Cells => "cells",
            UnitCategory::Circuits => "circuits",
            UnitCategory::Behavior => "behavior",
        }
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The evidence for one unit category on a matched construct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitEvidence {
    pub category: UnitCategory,
    pub markers: Vec<String>,
}

/// Classification label attached to a finding. Currently a single constant
/// tag; kept as an enum so richer labels can be added without reshaping
/// the finding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Relevance {
    #[default]
    #[serde(rename = "Direct Match")]
    DirectMatch,
}

impl fmt::Display for Relevance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relevance::DirectMatch => f.write_str("Direct Match"),
        }
    }
}

/// One matched (snippet, construct) result: the construct's unit-of-analysis
/// evidence subset plus its recommended tests. Ephemeral; owned by the
/// caller of the analysis that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub construct: String,
    /// Unit categories present on the matched record, in canonical order.
    pub units: Vec<UnitEvidence>,
    /// Assessment paradigms followed by self-report instruments.
    pub tests: Vec<String>,
    pub relevance: Relevance,
}

/// Findings for one domain, in match order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainFindings {
    pub domain: String,
    pub findings: Vec<Finding>,
}

/// One analysis call's output: an ordered mapping from domain name to its
/// findings. Domain keys are always exactly the matrix's domains, in matrix
/// order, regardless of input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    domains: Vec<DomainFindings>,
}

impl AnalysisResult {
    /// A result with every matrix domain mapped to an empty sequence.
    pub fn empty_for(matrix: &TaxonomyMatrix) -> Self {
        Self {
            domains: matrix
                .domains()
                .map(|name| DomainFindings {
                    domain: name.to_string(),
                    findings: Vec::new(),
                })
                .collect(),
        }
    }

    /// Append a finding to the named domain's sequence.
    ///
    /// The domain must be one of the keys this result was created with;
    /// unknown domains are ignored (the key set never grows after creation).
    pub fn push(&mut self, domain: &str, finding: Finding) {
        if let Some(entry) = self.domains.iter_mut().find(|d| d.domain == domain) {
            entry.findings.push(finding);
        }
    }

    /// Domain entries in matrix order.
    pub fn iter(&self) -> impl Iterator<Item = &DomainFindings> {
        self.domains.iter()
    }

    /// Findings for one domain, or `None` if the domain is not a key.
    pub fn findings_for(&self, domain: &str) -> Option<&[Finding]> {
        self.domains
            .iter()
            .find(|d| d.domain == domain)
            .map(|d| d.findings.as_slice())
    }

    /// Total finding count across all domains.
    pub fn total_findings(&self) -> usize {
        self.domains.iter().map(|d| d.findings.len()).sum()
    }

    pub fn has_findings(&self) -> bool {
        self.domains.iter().any(|d| !d.findings.is_empty())
    }

    pub fn domain_count(&self) -> usize {
        self.domains.len()
    }
}
