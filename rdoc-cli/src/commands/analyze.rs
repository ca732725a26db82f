//! `rdoc analyze` — one-shot analysis of snippets given on the command line.

use std::sync::Arc;

use clap::Args;
use rdoc_core::taxonomy::TaxonomyMatrix;
use rdoc_matching::MatchingEngine;

use crate::render;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Free-text clinical snippets to analyze
    #[arg(required = true)]
    pub snippets: Vec<String>,

    /// Emit the analysis result and recommendation rows as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(matrix: Arc<TaxonomyMatrix>, args: AnalyzeArgs) -> anyhow::Result<()> {
    let engine = MatchingEngine::new(matrix);
    let result = engine.analyze(&args.snippets);
    let rows = engine.recommendation_table(&result);

    if args.json {
        let payload = serde_json::json!({
            "analysis": result,
            "recommendations": rows,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    render::findings(&result);
    render::recommendation_table(&rows);
    Ok(())
}
