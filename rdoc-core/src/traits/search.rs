use crate::errors::RdocResult;
use crate::models::SearchResult;

/// External keyword/document search against a managed index.
///
/// The matching engine never calls this. Implementations are queried by the
/// surrounding application as a separate enrichment step, and their results
/// belong to the display layer. Implementations may block or perform I/O;
/// keep them out of the synchronous analysis path.
pub trait IEvidenceSearch: Send + Sync {
    /// Run a free-text query, returning zero or more document hits.
    fn search(&self, query: &str) -> RdocResult<Vec<SearchResult>>;
}
