//! Movie record types.
//!
//! `Movie` is the shape a catalog file carries: no director attribution,
//! because the director is implied by the `Director` record that owns it.
//! `CreditedMovie` is the shape the reporting pipeline works with: the
//! director name has been copied onto every film, so a flat list of
//! credited movies is self-describing.

use serde::{Deserialize, Serialize};

/// One film release as stored in a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Film title.
    pub title: String,

    /// Worldwide gross in whole currency units.
    ///
    /// Required: a record without a gross fails catalog parsing rather
    /// than reaching the summation stage.
    pub worldwide_gross: u64,

    /// Year of first release.
    pub release_year: i32,

    /// Distributing studio. Legacy records may omit it; the reporting
    /// stage groups an empty studio under its `"(unknown)"` sentinel key.
    #[serde(default)]
    pub studio: String,
}

/// A film with its director's name attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditedMovie {
    /// Film title.
    pub title: String,

    /// Worldwide gross in whole currency units.
    pub worldwide_gross: u64,

    /// Year of first release.
    pub release_year: i32,

    /// Distributing studio.
    pub studio: String,

    /// Name of the director credited for this film.
    pub director_name: String,
}

impl Movie {
    /// Build a movie record.
    pub fn new(
        title: impl Into<String>,
        worldwide_gross: u64,
        release_year: i32,
        studio: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            worldwide_gross,
            release_year,
            studio: studio.into(),
        }
    }

    /// Copy this movie with a director credit attached.
    ///
    /// The input is untouched; every field other than the credit carries
    /// over verbatim.
    pub fn with_director(&self, director_name: impl Into<String>) -> CreditedMovie {
        CreditedMovie {
            title: self.title.clone(),
            worldwide_gross: self.worldwide_gross,
            release_year: self.release_year,
            studio: self.studio.clone(),
            director_name: director_name.into(),
        }
    }
}
