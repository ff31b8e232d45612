//! Boxtally Reporting Core — Studio Totals
//!
//! Reshapes a director-keyed catalog into a per-studio gross ledger:
//! - **Crediting:** Copy each director's name onto their films
//! - **Flattening:** Merge the per-director film lists into one sequence
//! - **Totals:** Sum worldwide gross per studio
//!
//! This crate is pure computation — no I/O, no platform dependencies.
//! All inputs are data; all outputs are data.

pub mod credit;
pub mod flatten;
pub mod totals;

pub use credit::{attach_director, attach_director_to_all, credit_by_director};
pub use flatten::flatten;
pub use totals::{gross_by_studio, StudioTotals, UNKNOWN_STUDIO};

use boxtally_catalog_model::Director;

/// Run the full pipeline: credit, flatten, then total per studio.
///
/// This is the composed entry point; each stage is a public function and
/// independently testable.
pub fn studio_totals(directors: &[Director]) -> StudioTotals {
    let credited = credit::credit_by_director(directors);
    let movies = flatten::flatten(credited);
    tracing::debug!(
        directors = directors.len(),
        movies = movies.len(),
        "summing gross per studio"
    );
    totals::gross_by_studio(&movies)
}
