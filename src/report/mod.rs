pub mod charts;
pub mod data;
pub mod html;
pub mod page;

use serde::Serialize;

use crate::aggregate::GenreRow;
use crate::error::Result;
use crate::pipeline::TrackRecord;

pub use data::ReportData;

/// The fixed set of report sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ChartKind {
    Table,
    GenreDistribution,
    FeatureRadar,
    DanceabilityEnergy,
    PopularityOverTime,
    DurationDistribution,
    ArtistPopularity,
    LoudnessValence,
}

impl ChartKind {
    pub const ALL: [ChartKind; 8] = [
        ChartKind::Table,
        ChartKind::GenreDistribution,
        ChartKind::FeatureRadar,
        ChartKind::DanceabilityEnergy,
        ChartKind::PopularityOverTime,
        ChartKind::DurationDistribution,
        ChartKind::ArtistPopularity,
        ChartKind::LoudnessValence,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ChartKind::Table => "Table",
            ChartKind::GenreDistribution => "Genre Distribution",
            ChartKind::FeatureRadar => "Track Features Radar Chart",
            ChartKind::DanceabilityEnergy => "Danceability vs. Energy",
            ChartKind::PopularityOverTime => "Track Popularity Over Time",
            ChartKind::DurationDistribution => "Track Duration Distribution",
            ChartKind::ArtistPopularity => "Artist Popularity",
            ChartKind::LoudnessValence => "Loudness vs. Valence",
        }
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone)]
pub struct ReportSection {
    pub kind: ChartKind,
    pub html: String,
}

/// Rendered report: one embeddable fragment per [`ChartKind`].
#[derive(Debug, Clone)]
pub struct Report {
    sections: Vec<ReportSection>,
}

impl Report {
    pub fn assemble(records: &[TrackRecord], genre_rows: &[GenreRow]) -> Result<Self> {
        Self::render(&ReportData::build(records, genre_rows))
    }

    pub fn render(data: &ReportData) -> Result<Self> {
        let mut sections = Vec::with_capacity(ChartKind::ALL.len());

        for (index, kind) in ChartKind::ALL.into_iter().enumerate() {
            let div_id = format!("chart-{}", index);
            let html = match kind {
                ChartKind::Table => html::render_table(&data.table),
                ChartKind::GenreDistribution => {
                    html::render_chart(&div_id, &charts::genre_sunburst(&data.genres))?
                }
                ChartKind::FeatureRadar => {
                    html::render_chart(&div_id, &charts::feature_radar(&data.radar))?
                }
                ChartKind::DanceabilityEnergy => html::render_chart(
                    &div_id,
                    &charts::scatter(kind, &data.danceability_energy, "Danceability", "Energy"),
                )?,
                ChartKind::PopularityOverTime => {
                    html::render_chart(&div_id, &charts::popularity_line(&data.popularity))?
                }
                ChartKind::DurationDistribution => {
                    html::render_chart(&div_id, &charts::duration_histogram(&data.durations))?
                }
                ChartKind::ArtistPopularity => {
                    html::render_chart(&div_id, &charts::artist_popularity(&data.artists))?
                }
                ChartKind::LoudnessValence => html::render_chart(
                    &div_id,
                    &charts::scatter(kind, &data.loudness_valence, "Loudness", "Valence"),
                )?,
            };
            sections.push(ReportSection { kind, html });
        }

        Ok(Self { sections })
    }

    pub fn sections(&self) -> &[ReportSection] {
        &self.sections
    }

    pub fn get(&self, kind: ChartKind) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.kind == kind)
            .map(|s| s.html.as_str())
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
