use std::collections::{HashMap, HashSet};

use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::{debug, info};

use crate::error::{AppError, Result};
use crate::features::FeatureSet;
use crate::pipeline::dates::{ms_to_minutes, parse_release_date};
use crate::pipeline::record::TrackRecord;
use crate::spotify::{ArtistProfile, Catalog, CatalogTrack, RawFeatures};

pub const DEFAULT_CONCURRENCY: usize = 8;

/// Turns a playlist ID into enriched track rows.
///
/// Artist lookups are de-duplicated for the duration of one `enrich` call,
/// and both artist and feature lookups run with at most `max_concurrency`
/// requests in flight. Output order always follows playlist order.
pub struct TrackEnricher<'a, C: Catalog + ?Sized> {
    catalog: &'a C,
    max_concurrency: usize,
}

impl<'a, C: Catalog + ?Sized> TrackEnricher<'a, C> {
    pub fn new(catalog: &'a C) -> Self {
        Self {
            catalog,
            max_concurrency: DEFAULT_CONCURRENCY,
        }
    }

    pub fn with_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }

    pub async fn enrich(&self, playlist_id: &str) -> Result<Vec<TrackRecord>> {
        let tracks = self.catalog.playlist_tracks(playlist_id).await?;
        info!("Enriching {} tracks from playlist {}", tracks.len(), playlist_id);

        let artists = self.fetch_artists(&tracks).await?;
        let features = self.fetch_features(&tracks).await?;

        let records = tracks
            .into_iter()
            .zip(features)
            .map(|(track, raw)| build_record(track, raw.as_ref(), &artists))
            .collect::<Result<Vec<_>>>()?;

        info!("Enriched {} tracks", records.len());
        Ok(records)
    }

    async fn fetch_artists(&self, tracks: &[CatalogTrack]) -> Result<HashMap<String, ArtistProfile>> {
        let mut seen = HashSet::new();
        let mut artist_ids = Vec::new();
        for track in tracks {
            let artist_id = primary_artist_id(track)?;
            if seen.insert(artist_id) {
                artist_ids.push(artist_id.to_string());
            }
        }

        debug!(
            "Looking up {} distinct artists for {} tracks",
            artist_ids.len(),
            tracks.len()
        );

        stream::iter(artist_ids)
            .map(|artist_id| async move {
                let profile = self.catalog.artist(&artist_id).await?;
                Ok::<_, AppError>((artist_id, profile))
            })
            .buffered(self.max_concurrency)
            .try_collect()
            .await
    }

    async fn fetch_features(&self, tracks: &[CatalogTrack]) -> Result<Vec<Option<RawFeatures>>> {
        let track_ids: Vec<String> = tracks.iter().map(|t| t.id.clone()).collect();

        stream::iter(track_ids)
            .map(|track_id| async move { self.catalog.audio_features(&track_id).await })
            .buffered(self.max_concurrency)
            .try_collect()
            .await
    }
}

fn primary_artist_id(track: &CatalogTrack) -> Result<&str> {
    track
        .primary_artist()
        .and_then(|artist| artist.id.as_deref())
        .ok_or_else(|| AppError::MissingData(format!("track {} has no primary artist ID", track.name)))
}

fn build_record(
    track: CatalogTrack,
    raw_features: Option<&RawFeatures>,
    artists: &HashMap<String, ArtistProfile>,
) -> Result<TrackRecord> {
    let features = FeatureSet::extract(&track.name, raw_features)?;

    let artist_id = primary_artist_id(&track)?;
    let artist = artists
        .get(artist_id)
        .ok_or_else(|| AppError::MissingData(format!("artist {} was not resolved", artist_id)))?;
    let genres = artist.genres.clone();
    let artist_followers = artist.followers;

    let release_date = track.release_date.as_deref().and_then(parse_release_date);
    if release_date.is_none() {
        debug!("No usable release date for {}: {:?}", track.name, track.release_date);
    }

    Ok(TrackRecord {
        release_date,
        duration_min: ms_to_minutes(track.duration_ms),
        album_image_url: track.album_images.into_iter().next(),
        id: track.id,
        name: track.name,
        album: track.album,
        popularity: track.popularity,
        duration_ms: track.duration_ms,
        artists: track.artists,
        genres,
        artist_followers,
        features,
    })
}
