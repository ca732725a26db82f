use serde::{Deserialize, Serialize};

/// Address of the external evidence-search collaborator.
///
/// How the values are discovered (environment, deployment stack outputs) is
/// the caller's concern; the core only carries them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Identifier of the document index to query.
    pub index_id: String,
    /// Region or location the index lives in.
    pub region: String,
}
