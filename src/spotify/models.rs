use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistRef {
    /// `None` for local files, which have no catalog entry.
    pub id: Option<String>,
    pub name: String,
}

/// A playlist entry as listed by the catalog, before enrichment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogTrack {
    pub id: String,
    pub name: String,
    pub album: String,
    pub release_date: Option<String>,
    pub popularity: u32,
    pub duration_ms: u64,
    pub artists: Vec<ArtistRef>,
    /// Album cover URLs, largest first.
    pub album_images: Vec<String>,
}

impl CatalogTrack {
    pub fn primary_artist(&self) -> Option<&ArtistRef> {
        self.artists.first()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistProfile {
    pub id: String,
    pub name: String,
    pub genres: Vec<String>,
    pub followers: u64,
}

/// Audio-feature scores as reported for one track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawFeatures {
    pub danceability: f64,
    pub energy: f64,
    pub key: i32,
    pub loudness: f64,
    pub speechiness: f64,
    pub mode: i32,
    pub acousticness: f64,
    pub instrumentalness: f64,
    pub liveness: f64,
    pub valence: f64,
    pub tempo: f64,
}

#[cfg(test)]
impl CatalogTrack {
    pub fn mock(id: &str, name: &str, artist_id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            album: "Mock Album".to_string(),
            release_date: Some("2020-05-01".to_string()),
            popularity: 50,
            duration_ms: 180000,
            artists: vec![ArtistRef {
                id: Some(artist_id.to_string()),
                name: format!("Artist {}", artist_id),
            }],
            album_images: vec!["https://i.scdn.co/image/mock".to_string()],
        }
    }
}

#[cfg(test)]
impl RawFeatures {
    pub fn mock() -> Self {
        Self {
            danceability: 0.7,
            energy: 0.6,
            key: 5,
            loudness: -6.5,
            speechiness: 0.05,
            mode: 1,
            acousticness: 0.2,
            instrumentalness: 0.0,
            liveness: 0.1,
            valence: 0.8,
            tempo: 120.0,
        }
    }
}
