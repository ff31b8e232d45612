//! Initialize a new Boxtally catalog bundle.

use std::path::PathBuf;

use boxtally_catalog_model::LoadedCatalog;
use boxtally_common::error::BoxtallyError;

pub fn run(name: String, output: PathBuf) -> anyhow::Result<()> {
    let catalog_dir = output.join(&name);
    println!("Creating catalog '{}' at {}", name, catalog_dir.display());

    let catalog = LoadedCatalog::create(&catalog_dir, &name)
        .map_err(|e| BoxtallyError::catalog(e.to_string()))?;

    println!("Catalog created successfully:");
    println!("  Directory: {}", catalog.root.display());
    println!("  ID: {}", catalog.catalog.id);
    println!();
    println!("Directory structure:");
    println!("  {}/", name);
    println!("  ├── meta/        (catalog.json)");
    println!("  └── reports/     (generated totals)");
    println!();
    println!("Add directors and movies to meta/catalog.json, then run:");
    println!("  boxtally totals {}", catalog_dir.display());

    Ok(())
}
