use std::path::Path;

use serde::{Deserialize, Serialize};

use super::loader;
use super::record::ConstructRecord;
use crate::errors::{LoadError, RdocError, RdocResult};

/// One named construct and its evidence record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructEntry {
    pub name: String,
    pub record: ConstructRecord,
}

/// One taxonomy domain and its constructs, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainEntry {
    pub name: String,
    pub constructs: Vec<ConstructEntry>,
}

/// The full RDoC-style matrix. Immutable after load; safe to share across
/// threads behind an `Arc` with no further coordination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyMatrix {
    domains: Vec<DomainEntry>,
}

impl TaxonomyMatrix {
    pub(crate) fn from_domains(domains: Vec<DomainEntry>) -> Self {
        Self { domains }
    }

    /// Load and validate the matrix from a JSON file on disk.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let raw = std::fs::read_to_string(path)?;
        Self::load_from_str(&raw)
    }

    /// Load and validate the matrix from a JSON string.
    pub fn load_from_str(raw: &str) -> Result<Self, LoadError> {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        Self::from_value(value)
    }

    /// Validate an already-parsed JSON document into the matrix shape.
    pub fn from_value(value: serde_json::Value) -> Result<Self, LoadError> {
        loader::validate(value)
    }

    /// Domain names in load order.
    pub fn domains(&self) -> impl Iterator<Item = &str> {
        self.domains.iter().map(|d| d.name.as_str())
    }

    /// Domain entries in load order.
    pub fn domain_entries(&self) -> &[DomainEntry] {
        &self.domains
    }

    /// Constructs for one domain, in load order.
    pub fn constructs(&self, domain: &str) -> RdocResult<&[ConstructEntry]> {
        self.domains
            .iter()
            .find(|d| d.name == domain)
            .map(|d| d.constructs.as_slice())
            .ok_or_else(|| RdocError::DomainNotFound {
                domain: domain.to_string(),
            })
    }

    pub fn domain_count(&self) -> usize {
        self.domains.len()
    }

    pub fn construct_count(&self) -> usize {
        self.domains.iter().map(|d| d.constructs.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}
