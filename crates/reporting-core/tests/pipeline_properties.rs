use boxtally_catalog_model::{CreditedMovie, Director, Movie};
use boxtally_reporting_core::{
    attach_director_to_all, credit_by_director, flatten, gross_by_studio,
};
use proptest::prelude::*;

fn movie_strategy() -> impl Strategy<Value = Movie> {
    (
        "[a-z ]{1,16}",
        0u64..1_000_000_000,
        1950i32..2030,
        prop_oneof![
            Just("Alpha Films".to_string()),
            Just("Omega Films".to_string()),
            Just("Delta".to_string()),
            Just(String::new()),
        ],
    )
        .prop_map(|(title, gross, year, studio)| Movie::new(title, gross, year, studio))
}

fn director_strategy() -> impl Strategy<Value = Director> {
    ("[A-Z][a-z]{1,10}", prop::collection::vec(movie_strategy(), 0..8))
        .prop_map(|(name, movies)| Director::new(name, movies))
}

fn credited_movies_strategy() -> impl Strategy<Value = Vec<CreditedMovie>> {
    prop::collection::vec(
        (movie_strategy(), "[A-Z][a-z]{1,10}")
            .prop_map(|(movie, name)| movie.with_director(name)),
        0..32,
    )
}

proptest! {
    #[test]
    fn crediting_preserves_length_and_fields(
        name in "[A-Z][a-z]{1,10}",
        movies in prop::collection::vec(movie_strategy(), 0..16),
    ) {
        let credited = attach_director_to_all(&name, &movies);

        prop_assert_eq!(credited.len(), movies.len());
        for (before, after) in movies.iter().zip(&credited) {
            prop_assert_eq!(&after.director_name, &name);
            prop_assert_eq!(&after.title, &before.title);
            prop_assert_eq!(after.worldwide_gross, before.worldwide_gross);
            prop_assert_eq!(after.release_year, before.release_year);
            prop_assert_eq!(&after.studio, &before.studio);
        }
    }

    #[test]
    fn grouping_then_flattening_preserves_movie_count(
        directors in prop::collection::vec(director_strategy(), 0..8),
    ) {
        let expected: usize = directors.iter().map(|d| d.movies.len()).sum();
        let movies = flatten(credit_by_director(&directors));
        prop_assert_eq!(movies.len(), expected);
    }

    #[test]
    fn totals_are_invariant_under_input_order(
        (movies, shuffled) in credited_movies_strategy()
            .prop_flat_map(|movies| {
                let shuffled = Just(movies.clone()).prop_shuffle();
                (Just(movies), shuffled)
            }),
    ) {
        prop_assert_eq!(gross_by_studio(&movies), gross_by_studio(&shuffled));
    }

    #[test]
    fn totals_grand_total_matches_input_sum(
        movies in credited_movies_strategy(),
    ) {
        let input_sum: u64 = movies.iter().map(|m| m.worldwide_gross).sum();
        let totals_sum: u64 = gross_by_studio(&movies).values().sum();
        prop_assert_eq!(totals_sum, input_sum);
    }
}
