//! Show catalog information.

use std::path::PathBuf;

pub fn run(path: PathBuf) -> anyhow::Result<()> {
    let loaded = super::load_catalog(&path)?;

    let c = &loaded.catalog;

    println!("Catalog: {}", c.name);
    println!("  ID: {}", c.id);
    println!("  Version: {}", c.version);
    println!("  Created: {}", c.created_at);
    println!("  Modified: {}", c.modified_at);
    println!();

    println!(
        "Dataset: {} director(s), {} movie(s)",
        c.director_count(),
        c.movie_count()
    );
    for director in &c.directors {
        let gross: u64 = director.movies.iter().map(|m| m.worldwide_gross).sum();
        println!(
            "  {}: {} movie(s), {} gross",
            director.name,
            director.movies.len(),
            gross
        );
    }

    Ok(())
}
