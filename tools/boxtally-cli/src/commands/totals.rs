//! Compute and print per-studio gross totals.

use std::path::{Path, PathBuf};

use boxtally_common::config::ReportDefaults;
use boxtally_common::error::BoxtallyResult;
use boxtally_reporting_core::{studio_totals, StudioTotals};

pub fn run(path: PathBuf, json: bool, save: bool, report: &ReportDefaults) -> anyhow::Result<()> {
    let loaded = super::load_catalog(&path)?;

    tracing::debug!(
        directors = loaded.catalog.director_count(),
        movies = loaded.catalog.movie_count(),
        "computing studio totals"
    );

    let totals = studio_totals(&loaded.catalog.directors);

    if save {
        let report_path = save_report(&loaded.root, &totals)
            .map_err(|e| anyhow::anyhow!("Failed to save report: {e}"))?;
        println!("Report saved to: {}", report_path.display());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&totals)?);
        return Ok(());
    }

    println!("Studio totals for '{}':", loaded.catalog.name);
    if totals.is_empty() {
        println!("  (no movies)");
        return Ok(());
    }

    let name_width = totals.keys().map(String::len).max().unwrap_or(0);
    for (studio, gross) in &totals {
        println!(
            "  {:<name_width$}  {:>18}",
            studio,
            group_digits(*gross, report.thousands_separator)
        );
    }

    let grand_total: u64 = totals.values().sum();
    println!(
        "  {:<name_width$}  {:>18}",
        "TOTAL",
        group_digits(grand_total, report.thousands_separator)
    );

    Ok(())
}

/// Write the totals into the bundle's `reports/` directory.
fn save_report(root: &Path, totals: &StudioTotals) -> BoxtallyResult<PathBuf> {
    let reports_dir = root.join("reports");
    std::fs::create_dir_all(&reports_dir)?;

    let report_path = reports_dir.join("studio-totals.json");
    let json = serde_json::to_string_pretty(totals)?;
    std::fs::write(&report_path, json)?;
    Ok(report_path)
}

/// Format a gross figure with a thousands separator, e.g. `1,540,000,000`.
fn group_digits(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_report_writes_json() {
        let dir = std::env::temp_dir().join("boxtally_test_report");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();

        let mut totals = StudioTotals::new();
        totals.insert("Alpha Films".to_string(), 40);

        let path = save_report(&dir, &totals).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: StudioTotals = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, totals);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits(0, ','), "0");
        assert_eq!(group_digits(999, ','), "999");
        assert_eq!(group_digits(1_000, ','), "1,000");
        assert_eq!(group_digits(1_540_000_000, ','), "1,540,000,000");
        assert_eq!(group_digits(12_345, '.'), "12.345");
    }
}
