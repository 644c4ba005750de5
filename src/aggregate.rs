use serde::Serialize;

use crate::genre::{classify, GenreCategory};
use crate::pipeline::TrackRecord;

pub const ROOT_LABEL: &str = "All Genres";

/// One (track, broad genre) pair for the two-level genre chart.
///
/// Tracks spanning several categories get a synthetic parent named after
/// all of them (e.g. "Pop music, Hip hop music") instead of "All Genres",
/// so sibling categories are encoded in the parent's name rather than in a
/// deeper tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreRow {
    pub parent: String,
    pub label: GenreCategory,
    pub count: u32,
}

/// Distinct broad categories of one track, in the order their genres appear.
///
/// A track whose artist lists no genres classifies as a single empty genre,
/// i.e. `Other`.
pub fn track_categories(genres: &[String]) -> Vec<GenreCategory> {
    let mut categories: Vec<GenreCategory> = Vec::new();

    if genres.is_empty() {
        categories.push(classify(""));
    }
    for genre in genres {
        let category = classify(genre);
        if !categories.contains(&category) {
            categories.push(category);
        }
    }

    categories
}

pub fn genre_rows(records: &[TrackRecord]) -> Vec<GenreRow> {
    let mut rows = Vec::new();

    for record in records {
        let categories = track_categories(&record.genres);
        let parent = if categories.len() == 1 {
            ROOT_LABEL.to_string()
        } else {
            categories
                .iter()
                .map(|c| c.label())
                .collect::<Vec<_>>()
                .join(", ")
        };

        rows.extend(categories.into_iter().map(|label| GenreRow {
            parent: parent.clone(),
            label,
            count: 1,
        }));
    }

    rows
}
