use serde::{Deserialize, Serialize};

use crate::models::UnitCategory;

/// Evidence attached to one construct. Every field is an explicitly
/// optional sequence of strings; absent and present-but-empty are distinct
/// (an absent unit category is omitted from findings entirely).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub molecules: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cells: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub circuits: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub behavior: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paradigms: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_report: Option<Vec<String>>,
}

impl ConstructRecord {
    /// The evidence sequence for one unit-of-analysis category, if present.
    pub fn unit(&self, category: UnitCategory) -> Option<&[String]> {
        match category {
            UnitCategory::Molecules => self.molecules.as_deref(),
            UnitCategory::Cells => self.cells.as_deref(),
            UnitCategory::Circuits => self.circuits.as_deref(),
            UnitCategory::Behavior => self.behavior.as_deref(),
        }
    }

    /// Recommended tests: assessment paradigms followed by self-report
    /// instruments, concatenated in that order.
    pub fn recommended_tests(&self) -> Vec<String> {
        let mut tests = Vec::new();
        if let Some(paradigms) = &self.paradigms {
            tests.extend(paradigms.iter().cloned());
        }
        if let Some(self_report) = &self.self_report {
            tests.extend(self_report.iter().cloned());
        }
        tests
    }
}
