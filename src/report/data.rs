//! Chart inputs derived from the enriched table.
//!
//! Everything here is plain data with a deterministic order, so the same
//! playlist always serializes to the same bytes regardless of how the
//! figures are later formatted.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::aggregate::GenreRow;
use crate::pipeline::TrackRecord;

pub const TABLE_PREVIEW_ROWS: usize = 7;
pub const DURATION_BINS: usize = 20;
pub const RADAR_AXES: [&str; 6] = [
    "Danceability",
    "Energy",
    "Acousticness",
    "Instrumentalness",
    "Liveness",
    "Valence",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub name: String,
    pub album: String,
    pub artist: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SunburstNode {
    pub id: String,
    pub label: String,
    /// Empty for top-level nodes.
    pub parent: String,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarSeries {
    pub name: String,
    pub values: [f64; 6],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopularityPoint {
    pub name: String,
    pub release_date: Option<NaiveDate>,
    pub popularity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistBar {
    pub label: String,
    pub followers: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportData {
    pub table: Vec<TableRow>,
    pub genres: Vec<SunburstNode>,
    pub radar: Vec<RadarSeries>,
    pub danceability_energy: Vec<ScatterPoint>,
    pub popularity: Vec<PopularityPoint>,
    pub durations: Vec<HistogramBin>,
    pub artists: Vec<ArtistBar>,
    pub loudness_valence: Vec<ScatterPoint>,
}

impl ReportData {
    pub fn build(records: &[TrackRecord], genre_rows: &[GenreRow]) -> Self {
        let durations: Vec<f64> = records.iter().map(|r| r.duration_min).collect();

        Self {
            table: table_preview(records),
            genres: sunburst_nodes(genre_rows),
            radar: records.iter().map(radar_series).collect(),
            danceability_energy: scatter(records, |r| (r.features.danceability, r.features.energy)),
            popularity: popularity_timeline(records),
            durations: histogram(&durations, DURATION_BINS),
            artists: artist_bars(records),
            loudness_valence: scatter(records, |r| (r.features.loudness, r.features.valence)),
        }
    }
}

fn table_preview(records: &[TrackRecord]) -> Vec<TableRow> {
    records
        .iter()
        .take(TABLE_PREVIEW_ROWS)
        .map(|r| TableRow {
            name: r.name.clone(),
            album: r.album.clone(),
            artist: r.artist_names(),
        })
        .collect()
}

/// Top-level nodes carry the sum of their children; repeated
/// (parent, label) pairs are merged.
pub fn sunburst_nodes(rows: &[GenreRow]) -> Vec<SunburstNode> {
    let mut parents: Vec<SunburstNode> = Vec::new();
    let mut children: Vec<SunburstNode> = Vec::new();
    let mut parent_index: HashMap<&str, usize> = HashMap::new();
    let mut child_index: HashMap<(&str, &str), usize> = HashMap::new();

    for row in rows {
        let label = row.label.label();

        match parent_index.get(row.parent.as_str()) {
            Some(&i) => parents[i].value += row.count,
            None => {
                parent_index.insert(row.parent.as_str(), parents.len());
                parents.push(SunburstNode {
                    id: row.parent.clone(),
                    label: row.parent.clone(),
                    parent: String::new(),
                    value: row.count,
                });
            }
        }

        match child_index.get(&(row.parent.as_str(), label)) {
            Some(&i) => children[i].value += row.count,
            None => {
                child_index.insert((row.parent.as_str(), label), children.len());
                children.push(SunburstNode {
                    id: format!("{}/{}", row.parent, label),
                    label: label.to_string(),
                    parent: row.parent.clone(),
                    value: row.count,
                });
            }
        }
    }

    parents.extend(children);
    parents
}

fn radar_series(record: &TrackRecord) -> RadarSeries {
    let f = &record.features;
    RadarSeries {
        name: record.name.clone(),
        values: [
            f.danceability,
            f.energy,
            f.acousticness,
            f.instrumentalness,
            f.liveness,
            f.valence,
        ],
    }
}

fn scatter(records: &[TrackRecord], axes: impl Fn(&TrackRecord) -> (f64, f64)) -> Vec<ScatterPoint> {
    records
        .iter()
        .map(|r| {
            let (x, y) = axes(r);
            ScatterPoint {
                name: r.name.clone(),
                x,
                y,
            }
        })
        .collect()
}

/// Sorted by release date, oldest first. Undated tracks go last and keep
/// their playlist order.
pub fn popularity_timeline(records: &[TrackRecord]) -> Vec<PopularityPoint> {
    let mut points: Vec<PopularityPoint> = records
        .iter()
        .map(|r| PopularityPoint {
            name: r.name.clone(),
            release_date: r.release_date,
            popularity: r.popularity,
        })
        .collect();

    points.sort_by_key(|p| (p.release_date.is_none(), p.release_date));
    points
}

/// Equal-width bins spanning the observed range. A zero-width range is
/// widened by half a unit on each side.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let (lo, hi) = if max > min { (min, max) } else { (min - 0.5, max + 0.5) };
    let width = (hi - lo) / bins as f64;

    let mut result: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            start: lo + width * i as f64,
            end: if i + 1 == bins { hi } else { lo + width * (i + 1) as f64 },
            count: 0,
        })
        .collect();

    for value in values {
        let index = (((value - lo) / width).floor() as usize).min(bins - 1);
        result[index].count += 1;
    }

    result
}

/// One bar per distinct primary artist, in playlist order. Different
/// artists that share a display name get a numeric suffix so their bars
/// stay separate.
pub fn artist_bars(records: &[TrackRecord]) -> Vec<ArtistBar> {
    let mut bars = Vec::new();
    let mut seen_artists: Vec<&str> = Vec::new();
    let mut name_uses: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let Some(artist) = record.primary_artist() else {
            continue;
        };
        let key = artist.id.as_deref().unwrap_or(artist.name.as_str());
        if seen_artists.contains(&key) {
            continue;
        }
        seen_artists.push(key);

        let uses = name_uses.entry(artist.name.as_str()).or_insert(0);
        *uses += 1;
        let label = if *uses == 1 {
            artist.name.clone()
        } else {
            format!("{} ({})", artist.name, uses)
        };

        bars.push(ArtistBar {
            label,
            followers: record.artist_followers,
        });
    }

    bars
}
