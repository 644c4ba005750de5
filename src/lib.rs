pub mod aggregate;
pub mod analyzer;
pub mod config;
pub mod error;
pub mod features;
pub mod genre;
pub mod pipeline;
pub mod report;
pub mod spotify;
pub mod web;

pub use aggregate::{genre_rows, GenreRow};
pub use analyzer::{PlaylistAnalysis, PlaylistAnalyzer};
pub use config::Config;
pub use error::{AppError, Result};
pub use features::{FeatureSet, Mode};
pub use genre::{classify, GenreCategory};
pub use pipeline::{TrackEnricher, TrackRecord};
pub use report::{ChartKind, Report, ReportData};
pub use spotify::{ArtistProfile, ArtistRef, Catalog, CatalogTrack, RawFeatures, SpotifyCatalog};
