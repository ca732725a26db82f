use serde::{Deserialize, Serialize};

/// One clinical keyword and the domain-family tokens it maps to.
///
/// Family tokens are compared against construct names lowercased with
/// underscores replaced by spaces, so a token of `"acute threat"` matches
/// the construct `acute_threat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasEntry {
    pub keyword: String,
    pub family_tokens: Vec<String>,
}

/// Keyword-to-domain-family alias table used by relevance rule 4.
///
/// Injectable at engine construction so alternate tables can be tested; the
/// default is the curated legacy table, deliberately small, and not to be
/// expanded without a product decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasConfig {
    pub entries: Vec<AliasEntry>,
}

impl AliasConfig {
    /// A table with no entries (disables rule 4 entirely).
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Family tokens for the first keyword found in the (lowercased)
    /// snippet, if any.
    pub fn families_for(&self, snippet_lower: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|e| snippet_lower.contains(e.keyword.as_str()))
            .map(|e| e.family_tokens.as_slice())
    }
}

impl Default for AliasConfig {
    fn default() -> Self {
        let entry = |keyword: &str, families: &[&str]| AliasEntry {
            keyword: keyword.to_string(),
            family_tokens: families.iter().map(|f| f.to_string()).collect(),
        };
        Self {
            entries: vec![
                entry("depression", &["negative valence", "reward"]),
                entry("anxiety", &["negative valence", "acute threat"]),
                entry("adhd", &["attention", "working memory"]),
                entry("headache", &["negative valence", "cognitive"]),
            ],
        }
    }
}
