//! Director records.

use serde::{Deserialize, Serialize};

use crate::movie::Movie;

/// A director paired with their ordered filmography.
///
/// Film order is meaningful and preserved through every reporting stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Director {
    /// Director's name as credited.
    pub name: String,

    /// Films credited to this director, in catalog order.
    #[serde(default)]
    pub movies: Vec<Movie>,
}

impl Director {
    /// Build a director record.
    pub fn new(name: impl Into<String>, movies: Vec<Movie>) -> Self {
        Self {
            name: name.into(),
            movies,
        }
    }
}
