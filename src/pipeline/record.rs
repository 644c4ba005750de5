use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::features::FeatureSet;
use crate::spotify::ArtistRef;

/// One fully enriched playlist row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackRecord {
    pub id: String,
    pub name: String,
    pub album: String,
    pub release_date: Option<NaiveDate>,
    pub popularity: u32,
    pub duration_ms: u64,
    pub duration_min: f64,
    pub artists: Vec<ArtistRef>,
    /// Genres of the primary artist, as reported by the catalog.
    pub genres: Vec<String>,
    /// Follower count of the primary artist.
    pub artist_followers: u64,
    pub album_image_url: Option<String>,
    pub features: FeatureSet,
}

impl TrackRecord {
    /// All credited artists, comma separated.
    pub fn artist_names(&self) -> String {
        self.artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn primary_artist(&self) -> Option<&ArtistRef> {
        self.artists.first()
    }
}
