//! The relevance predicate: does a snippet implicate a construct?
//!
//! Four rules, evaluated in a fixed order on the lowercased snippet, each a
//! plain substring test. The first rule that fires names the signal; the
//! boolean outcome is the same regardless of order since the rules are
//! independent ORs.

use rdoc_core::config::AliasConfig;
use rdoc_core::taxonomy::ConstructRecord;

/// Which rule established relevance. Surfaced in trace output only;
/// findings always carry the constant `Direct Match` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchSignal {
    /// The construct's name (underscores as spaces) appears in the snippet.
    ConstructName,
    /// One of the construct's molecular markers appears in the snippet.
    Molecule,
    /// One of the construct's behavioral markers appears in the snippet.
    Behavior,
    /// A clinical keyword in the snippet aliases to a domain family named
    /// in the construct's own name.
    Alias,
}

/// Evaluate the predicate, reporting which rule fired.
///
/// `snippet_lower` must already be lowercased; the engine lowercases each
/// snippet once rather than per construct.
pub fn match_signal(
    snippet_lower: &str,
    construct_name: &str,
    record: &ConstructRecord,
    aliases: &AliasConfig,
) -> Option<MatchSignal> {
    let construct_lower = construct_name.to_lowercase().replace('_', " ");

    if !construct_lower.is_empty() && snippet_lower.contains(&construct_lower) {
        return Some(MatchSignal::ConstructName);
    }

    if contains_any(snippet_lower, record.molecules.as_deref()) {
        return Some(MatchSignal::Molecule);
    }

    if contains_any(snippet_lower, record.behavior.as_deref()) {
        return Some(MatchSignal::Behavior);
    }

    if let Some(families) = aliases.families_for(snippet_lower) {
        if families
            .iter()
            .any(|family| construct_lower.contains(family.to_lowercase().as_str()))
        {
            return Some(MatchSignal::Alias);
        }
    }

    None
}

/// True when relevant by any rule.
pub fn is_relevant(
    snippet_lower: &str,
    construct_name: &str,
    record: &ConstructRecord,
    aliases: &AliasConfig,
) -> bool {
    match_signal(snippet_lower, construct_name, record, aliases).is_some()
}

fn contains_any(snippet_lower: &str, markers: Option<&[String]>) -> bool {
    markers.is_some_and(|markers| {
        markers
            .iter()
            .any(|m| !m.is_empty() && snippet_lower.contains(m.to_lowercase().as_str()))
    })
}
