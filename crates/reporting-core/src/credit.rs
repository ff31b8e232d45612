//! Director crediting.
//!
//! Catalog files key movies by director; the reporting stages want the
//! director's name on every film so the flat list is self-describing.
//! Crediting never merges across directors — flattening is a separate
//! stage so the per-director grouping stays independently testable.

use boxtally_catalog_model::{CreditedMovie, Director, Movie};

/// Copy one movie with the given director credit attached.
///
/// The input is untouched; all other fields carry over verbatim.
pub fn attach_director(name: &str, movie: &Movie) -> CreditedMovie {
    movie.with_director(name)
}

/// Credit every movie in a director's filmography.
///
/// The output has the same length and order as the input; an empty
/// filmography yields an empty output.
pub fn attach_director_to_all(name: &str, movies: &[Movie]) -> Vec<CreditedMovie> {
    movies
        .iter()
        .map(|movie| attach_director(name, movie))
        .collect()
}

/// Credit the whole dataset, one inner list per director.
///
/// Outer order follows the directors' order, inner order each director's
/// filmography order.
pub fn credit_by_director(directors: &[Director]) -> Vec<Vec<CreditedMovie>> {
    directors
        .iter()
        .map(|director| attach_director_to_all(&director.name, &director.movies))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_director_to_all_credits_every_movie() {
        let movies = vec![
            Movie::new("TestA", 1, 2010, "S"),
            Movie::new("TestB", 2, 2011, "S"),
        ];

        let credited = attach_director_to_all("Byron Poodle", &movies);
        assert_eq!(credited.len(), movies.len());
        for (before, after) in movies.iter().zip(&credited) {
            assert_eq!(after.director_name, "Byron Poodle");
            assert_eq!(after.title, before.title);
            assert_eq!(after.worldwide_gross, before.worldwide_gross);
            assert_eq!(after.release_year, before.release_year);
            assert_eq!(after.studio, before.studio);
        }
    }

    #[test]
    fn test_attach_director_to_all_empty_is_empty() {
        assert!(attach_director_to_all("Anyone", &[]).is_empty());
    }

    #[test]
    fn test_credit_by_director_distributes_names_in_order() {
        let directors = vec![
            Director::new(
                "Byron Poodle",
                vec![
                    Movie::new("At the park", 5, 2014, "X"),
                    Movie::new("On the couch", 3, 2015, "X"),
                ],
            ),
            Director::new("Nancy Drew", vec![Movie::new("Biting", 7, 2016, "X")]),
        ];

        let grouped = credit_by_director(&directors);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].len(), 2);
        assert_eq!(grouped[0][0].director_name, "Byron Poodle");
        assert_eq!(grouped[0][0].title, "At the park");
        assert_eq!(grouped[1].len(), 1);
        assert_eq!(grouped[1][0].director_name, "Nancy Drew");
    }

    #[test]
    fn test_credit_by_director_keeps_groups_separate() {
        let directors = vec![
            Director::new("A", vec![Movie::new("One", 1, 2000, "S")]),
            Director::new("B", vec![]),
        ];

        let grouped = credit_by_director(&directors);
        assert_eq!(grouped.len(), 2);
        assert!(grouped[1].is_empty());
    }
}
