//! Trait boundaries to external collaborators.

mod search;

pub use search::IEvidenceSearch;
