//! Plain-text rendering of analysis results and recommendation tables.

use rdoc_core::models::{AnalysisResult, RecommendationRow};

const NO_UNITS: &str = "No specific units identified";
const NO_TESTS: &str = "No specific tests recommended";

/// Per-domain findings, domains with no findings skipped.
pub fn findings(result: &AnalysisResult) {
    if !result.has_findings() {
        println!("No findings.");
        return;
    }

    for domain in result.iter() {
        if domain.findings.is_empty() {
            continue;
        }
        println!("\n{}", domain.domain);
        for finding in &domain.findings {
            println!("  Construct: {}", finding.construct);
            println!("  Units of analysis:");
            let mut printed = 0;
            for unit in &finding.units {
                if unit.markers.is_empty() {
                    continue;
                }
                println!("    - {}: {}", unit.category, unit.markers.join(", "));
                printed += 1;
            }
            if printed == 0 {
                println!("    - {NO_UNITS}");
            }
            if finding.tests.is_empty() {
                println!("  Recommended tests: {NO_TESTS}");
            } else {
                println!("  Recommended tests: {}", finding.tests.join(", "));
            }
        }
    }
}

/// The flat recommendation table, column-aligned.
pub fn recommendation_table(rows: &[RecommendationRow]) {
    if rows.is_empty() {
        return;
    }

    let headers = [
        "Domain",
        "Construct",
        "Units of Analysis",
        "Recommended Tests",
        "Relevance",
    ];
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    let cells: Vec<[&str; 5]> = rows
        .iter()
        .map(|r| {
            [
                r.domain.as_str(),
                r.construct.as_str(),
                r.units_of_analysis.as_str(),
                r.recommended_tests.as_str(),
                r.relevance.as_str(),
            ]
        })
        .collect();
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }

    let line = |cols: &[&str; 5]| {
        cols.iter()
            .zip(widths.iter().copied())
            .map(|(c, w)| format!("{c:<w$}"))
            .collect::<Vec<_>>()
            .join("  ")
    };

    println!("\n{}", line(&headers));
    println!("{}", "-".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1)));
    for row in &cells {
        println!("{}", line(row));
    }
}
