pub mod client;
pub mod models;

pub use client::{Catalog, SpotifyCatalog};
pub use models::{ArtistProfile, ArtistRef, CatalogTrack, RawFeatures};
