use std::sync::Arc;

use tracing::info;

use crate::aggregate::{genre_rows, GenreRow};
use crate::config::Config;
use crate::error::Result;
use crate::pipeline::{TrackEnricher, TrackRecord};
use crate::report::{page, Report, ReportData};
use crate::spotify::{Catalog, SpotifyCatalog};

/// Everything produced for one analyzed playlist.
pub struct PlaylistAnalysis {
    pub playlist_id: String,
    pub records: Vec<TrackRecord>,
    pub genre_rows: Vec<GenreRow>,
    pub data: ReportData,
    pub report: Report,
}

impl PlaylistAnalysis {
    pub fn to_html(&self) -> String {
        page::results_page(&self.playlist_id, self.records.len(), &self.report)
    }
}

/// Runs the playlist URL -> report pipeline against an injected catalog.
/// Holds no per-request state, so one instance serves concurrent requests.
#[derive(Clone)]
pub struct PlaylistAnalyzer {
    catalog: Arc<dyn Catalog>,
    max_concurrency: usize,
}

impl PlaylistAnalyzer {
    pub fn new(catalog: Arc<dyn Catalog>, max_concurrency: usize) -> Self {
        Self {
            catalog,
            max_concurrency,
        }
    }

    pub async fn connect(config: &Config) -> Result<Self> {
        let catalog = SpotifyCatalog::new(config).await?;
        Ok(Self::new(Arc::new(catalog), config.max_concurrency))
    }

    pub async fn analyze(&self, playlist_url: &str) -> Result<PlaylistAnalysis> {
        let playlist_id = SpotifyCatalog::parse_playlist_url(playlist_url)?;
        info!("Analyzing playlist {}", playlist_id);

        let records = TrackEnricher::new(self.catalog.as_ref())
            .with_concurrency(self.max_concurrency)
            .enrich(&playlist_id)
            .await?;

        let genre_rows = genre_rows(&records);
        let data = ReportData::build(&records, &genre_rows);
        let report = Report::render(&data)?;

        info!(
            "Built report for playlist {}: {} tracks, {} genre rows",
            playlist_id,
            records.len(),
            genre_rows.len()
        );

        Ok(PlaylistAnalysis {
            playlist_id,
            records,
            genre_rows,
            data,
            report,
        })
    }
}
