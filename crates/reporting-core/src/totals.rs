//! Per-studio gross aggregation.

use std::collections::BTreeMap;

use boxtally_catalog_model::CreditedMovie;

/// Sentinel key for movies whose catalog record carries no studio.
pub const UNKNOWN_STUDIO: &str = "(unknown)";

/// Mapping from studio name to summed worldwide gross.
///
/// A `BTreeMap` keeps report output and test assertions deterministic;
/// the totals themselves do not depend on any ordering.
pub type StudioTotals = BTreeMap<String, u64>;

/// Sum worldwide gross per studio in a single pass.
///
/// The first movie seen for a studio initializes its accumulator; later
/// movies add to it. Studio names are compared exactly (case-sensitive,
/// no normalization). Empty studio names group under [`UNKNOWN_STUDIO`].
pub fn gross_by_studio(movies: &[CreditedMovie]) -> StudioTotals {
    let mut totals = StudioTotals::new();

    for movie in movies {
        let studio = if movie.studio.is_empty() {
            UNKNOWN_STUDIO
        } else {
            movie.studio.as_str()
        };

        match totals.get_mut(studio) {
            Some(sum) => *sum += movie.worldwide_gross,
            None => {
                totals.insert(studio.to_string(), movie.worldwide_gross);
            }
        }
    }

    totals
}
