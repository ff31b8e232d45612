//! Validate a Boxtally catalog bundle.

use std::path::PathBuf;

pub fn run(path: PathBuf) -> anyhow::Result<()> {
    println!("Validating catalog at: {}", path.display());

    let loaded = super::load_catalog(&path)?;

    println!("  Name: {}", loaded.catalog.name);
    println!("  Version: {}", loaded.catalog.version);
    println!("  Directors: {}", loaded.catalog.director_count());
    println!("  Movies: {}", loaded.catalog.movie_count());

    let problems = loaded.validate();
    if problems.is_empty() {
        println!("\nCatalog is valid.");
    } else {
        println!("\nValidation issues:");
        for problem in &problems {
            println!("  - {problem}");
        }
        println!(
            "\n{} issue(s) found. Totals may group movies under the unknown studio.",
            problems.len()
        );
    }

    Ok(())
}
