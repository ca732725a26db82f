//! `rdoc domains` — sanity-check listing of the loaded taxonomy.

use rdoc_core::models::UnitCategory;
use rdoc_core::taxonomy::TaxonomyMatrix;

pub fn run(matrix: &TaxonomyMatrix) -> anyhow::Result<()> {
    for domain in matrix.domain_entries() {
        println!("{}", domain.name);
        for construct in &domain.constructs {
            let unit_markers: usize = UnitCategory::ALL
                .iter()
                .filter_map(|&c| construct.record.unit(c))
                .map(<[String]>::len)
                .sum();
            let tests = construct.record.recommended_tests().len();
            println!(
                "  {} ({} unit markers, {} tests)",
                construct.name, unit_markers, tests
            );
        }
    }
    println!(
        "\n{} domains, {} constructs",
        matrix.domain_count(),
        matrix.construct_count()
    );
    Ok(())
}
