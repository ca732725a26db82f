//! `rdoc session` — interactive loop over an accumulating transcript.
//!
//! Implements the caller-managed conversational state: each user line is
//! appended as a turn, the full transcript is concatenated into one combined
//! snippet, and the engine re-analyzes it from scratch. Nothing is
//! persisted; state dies with the process.

use std::io::{BufRead, Write};
use std::sync::Arc;

use rdoc_core::taxonomy::TaxonomyMatrix;
use rdoc_matching::MatchingEngine;

use crate::render;
use crate::transcript::{Role, Transcript};

pub fn run(matrix: Arc<TaxonomyMatrix>) -> anyhow::Result<()> {
    let engine = MatchingEngine::new(matrix);
    let mut transcript = Transcript::new();

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    println!("Describe the clinical presentation. Empty line or `quit` ends the session.");
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() || line == "quit" || line == "exit" {
            break;
        }

        transcript.push_user(line);
        let combined = transcript.combined();
        let result = engine.analyze(&[combined]);
        let rows = engine.recommendation_table(&result);

        render::findings(&result);
        render::recommendation_table(&rows);

        let summary = format!(
            "Identified {} findings across {} domains.",
            result.total_findings(),
            result.iter().filter(|d| !d.findings.is_empty()).count()
        );
        println!("{summary}\n");
        transcript.push_assistant(&summary);
    }

    if !transcript.turns().is_empty() {
        println!("\nConversation history:");
        for turn in transcript.turns() {
            let role = match turn.role {
                Role::User => "user",
                Role::Assistant => "assistant",
            };
            println!("  [{role}] {}", turn.text);
        }
    }

    Ok(())
}
