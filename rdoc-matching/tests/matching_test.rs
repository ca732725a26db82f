use std::sync::Arc;

use proptest::prelude::*;
use rdoc_core::config::{AliasConfig, AliasEntry};
use rdoc_core::models::{Relevance, UnitCategory};
use rdoc_core::taxonomy::TaxonomyMatrix;
use rdoc_matching::MatchingEngine;

const SAMPLE: &str = r#"{
    "negative_valence_systems": {
        "acute_threat": {
            "circuits": ["amygdala"],
            "paradigms": ["fear conditioning"],
            "self_report": ["STAI", "GAD-7"]
        },
        "loss": {
            "molecules": ["cortisol"],
            "behavior": ["rumination"],
            "self_report": ["PHQ-9"]
        }
    },
    "positive_valence_systems": {
        "reward_responsiveness": {
            "molecules": ["dopamine"],
            "behavior": ["anhedonia"],
            "paradigms": ["monetary incentive delay"]
        }
    },
    "cognitive_systems": {
        "working_memory": {
            "circuits": ["dlPFC"],
            "paradigms": ["n-back"],
            "self_report": ["BRIEF-A"]
        }
    }
}"#;

fn engine() -> MatchingEngine {
    let matrix = Arc::new(TaxonomyMatrix::load_from_str(SAMPLE).unwrap());
    MatchingEngine::new(matrix)
}

fn domains_of(result: &rdoc_core::models::AnalysisResult) -> Vec<&str> {
    result.iter().map(|d| d.domain.as_str()).collect()
}

const ALL_DOMAINS: [&str; 3] = [
    "negative_valence_systems",
    "positive_valence_systems",
    "cognitive_systems",
];

#[test]
fn result_keys_are_matrix_domains_in_order() {
    let engine = engine();
    let result = engine.analyze(&["patient reports anxiety and anhedonia"]);
    assert_eq!(domains_of(&result), ALL_DOMAINS);
}

#[test]
fn empty_snippet_list_yields_all_empty_domains() {
    let engine = engine();
    let result = engine.analyze::<&str>(&[]);
    assert_eq!(domains_of(&result), ALL_DOMAINS);
    assert_eq!(result.total_findings(), 0);
}

#[test]
fn empty_snippet_string_matches_nothing() {
    let engine = engine();
    let result = engine.analyze(&[""]);
    assert_eq!(result.total_findings(), 0);
}

#[test]
fn no_match_scenario_yields_all_empty_domains() {
    let engine = engine();
    let result = engine.analyze(&["the weather is pleasant today"]);
    assert_eq!(domains_of(&result), ALL_DOMAINS);
    assert!(!result.has_findings());
}

#[test]
fn analyze_is_idempotent() {
    let engine = engine();
    let snippets = ["depression with rumination", "elevated cortisol"];
    let first = engine.analyze(&snippets);
    let second = engine.analyze(&snippets);
    assert_eq!(first, second);
}

#[test]
fn findings_accumulate_monotonically_across_snippets() {
    let engine = engine();
    let base = engine.analyze(&["rumination for weeks"]);
    let extended = engine.analyze(&["rumination for weeks", "impaired working memory"]);

    for (prefix, full) in base.iter().zip(extended.iter()) {
        assert_eq!(prefix.domain, full.domain);
        assert!(full.findings.len() >= prefix.findings.len());
        assert_eq!(&full.findings[..prefix.findings.len()], &prefix.findings[..]);
    }
    assert_eq!(extended.total_findings(), base.total_findings() + 1);
}

#[test]
fn repeat_matches_are_never_deduplicated() {
    let engine = engine();
    let result = engine.analyze(&["notable anhedonia", "persistent anhedonia"]);
    let findings = result.findings_for("positive_valence_systems").unwrap();
    assert_eq!(findings.len(), 2);
    assert_eq!(findings[0], findings[1]);
}

#[test]
fn matching_is_case_insensitive() {
    let engine = engine();
    let upper = engine.analyze(&["ANXIETY"]);
    let lower = engine.analyze(&["anxiety"]);
    assert_eq!(upper, lower);
    assert!(upper.has_findings());
}

#[test]
fn direct_name_rule_matches_working_memory() {
    let engine = engine();
    let result = engine.analyze(&["impaired working memory noted"]);
    let findings = result.findings_for("cognitive_systems").unwrap();
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].construct, "working_memory");
    assert_eq!(findings[0].relevance, Relevance::DirectMatch);
}

#[test]
fn alias_rule_matches_acute_threat_for_anxiety() {
    // acute_threat has no molecule or behavior markers, so only the
    // anxiety → acute threat alias can explain this match.
    let engine = engine();
    let result = engine.analyze(&["patient reports anxiety"]);
    let findings = result.findings_for("negative_valence_systems").unwrap();

    let acute = findings
        .iter()
        .find(|f| f.construct == "acute_threat")
        .expect("acute_threat should match via alias");
    assert_eq!(acute.tests, vec!["fear conditioning", "STAI", "GAD-7"]);
    assert_eq!(acute.units.len(), 1);
    assert_eq!(acute.units[0].category, UnitCategory::Circuits);
}

#[test]
fn finding_units_are_restricted_to_present_categories() {
    let engine = engine();
    let result = engine.analyze(&["persistent rumination"]);
    let findings = result.findings_for("negative_valence_systems").unwrap();
    assert_eq!(findings.len(), 1);

    let categories: Vec<UnitCategory> = findings[0].units.iter().map(|u| u.category).collect();
    // "loss" carries molecules and behavior only; paradigms/self_report are
    // tests, and absent unit categories are omitted.
    assert_eq!(categories, vec![UnitCategory::Molecules, UnitCategory::Behavior]);
}

#[test]
fn injected_alias_table_replaces_the_default() {
    let matrix = Arc::new(TaxonomyMatrix::load_from_str(SAMPLE).unwrap());
    let aliases = AliasConfig {
        entries: vec![AliasEntry {
            keyword: "insomnia".to_string(),
            family_tokens: vec!["working memory".to_string()],
        }],
    };
    let engine = MatchingEngine::new(matrix).with_aliases(aliases);

    let result = engine.analyze(&["chronic insomnia"]);
    let findings = result.findings_for("cognitive_systems").unwrap();
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].construct, "working_memory");

    // The default anxiety alias is gone with the replacement table.
    let result = engine.analyze(&["patient reports anxiety"]);
    assert!(!result.has_findings());
}

#[test]
fn recommendation_table_has_one_row_per_finding_in_order() {
    let engine = engine();
    let result = engine.analyze(&["anxiety with anhedonia and poor working memory"]);
    let rows = engine.recommendation_table(&result);

    assert_eq!(rows.len(), result.total_findings());

    let expected: Vec<(String, String)> = result
        .iter()
        .flat_map(|d| {
            d.findings
                .iter()
                .map(|f| (d.domain.clone(), f.construct.clone()))
        })
        .collect();
    let actual: Vec<(String, String)> = rows
        .iter()
        .map(|r| (r.domain.clone(), r.construct.clone()))
        .collect();
    assert_eq!(actual, expected);
}

#[test]
fn recommendation_table_of_empty_result_is_empty() {
    let engine = engine();
    let result = engine.analyze::<&str>(&[]);
    assert!(engine.recommendation_table(&result).is_empty());
}

#[test]
fn recommendation_rows_format_units_and_tests() {
    let engine = engine();
    let result = engine.analyze(&["persistent rumination"]);
    let rows = engine.recommendation_table(&result);
    assert_eq!(rows.len(), 1);

    let row = &rows[0];
    assert_eq!(row.domain, "negative_valence_systems");
    assert_eq!(row.construct, "loss");
    assert_eq!(
        row.units_of_analysis,
        "molecules: cortisol; behavior: rumination"
    );
    assert_eq!(row.recommended_tests, "PHQ-9");
    assert_eq!(row.relevance, "Direct Match");
}

proptest! {
    // Domain keys are exactly the matrix's domains, in matrix order, for
    // arbitrary snippet lists.
    #[test]
    fn domain_keys_invariant_for_arbitrary_snippets(
        snippets in proptest::collection::vec(".*", 0..8)
    ) {
        let engine = engine();
        let result = engine.analyze(&snippets);
        prop_assert_eq!(domains_of(&result), ALL_DOMAINS.to_vec());
    }

    // Row count always equals total finding count.
    #[test]
    fn table_row_count_matches_findings(
        snippets in proptest::collection::vec(".*", 0..8)
    ) {
        let engine = engine();
        let result = engine.analyze(&snippets);
        let rows = engine.recommendation_table(&result);
        prop_assert_eq!(rows.len(), result.total_findings());
    }
}
