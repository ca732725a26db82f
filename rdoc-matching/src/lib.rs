//! # rdoc-matching
//!
//! Deterministic symptom-to-construct matching over the RDoC taxonomy.
//!
//! Given free-text clinical snippets, the engine decides which taxonomy
//! constructs each snippet is relevant to (case-insensitive substring rules
//! plus a keyword alias table, no tokenization or stemming), assembles
//! per-construct evidence into findings, and projects findings into a flat
//! recommendation table.
//!
//! Both entry points are pure functions of their inputs plus the read-only
//! matrix: no I/O, no internal state, safe for concurrent callers.

pub mod engine;
pub mod projection;
pub mod relevance;

pub use engine::MatchingEngine;
pub use relevance::MatchSignal;
