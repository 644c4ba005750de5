use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::spotify::RawFeatures;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    Major,
    Minor,
}

impl Mode {
    /// The catalog encodes major as 1; every other value reads as minor.
    pub fn from_raw(mode: i32) -> Self {
        if mode == 1 { Mode::Major } else { Mode::Minor }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Major => write!(f, "Major"),
            Mode::Minor => write!(f, "Minor"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureSet {
    pub danceability: f64,
    pub energy: f64,
    pub key: i32,
    pub loudness: f64,
    pub speechiness: f64,
    pub mode: Mode,
    pub acousticness: f64,
    pub instrumentalness: f64,
    pub liveness: f64,
    pub valence: f64,
    pub tempo: f64,
}

impl FeatureSet {
    pub fn from_raw(raw: &RawFeatures) -> Self {
        Self {
            danceability: raw.danceability,
            energy: raw.energy,
            key: raw.key,
            loudness: raw.loudness,
            speechiness: raw.speechiness,
            mode: Mode::from_raw(raw.mode),
            acousticness: raw.acousticness,
            instrumentalness: raw.instrumentalness,
            liveness: raw.liveness,
            valence: raw.valence,
            tempo: raw.tempo,
        }
    }

    /// Like [`FeatureSet::from_raw`], but for a lookup that may have come back
    /// empty. A missing record is an error, never a zeroed default.
    pub fn extract(track_name: &str, raw: Option<&RawFeatures>) -> Result<Self> {
        raw.map(Self::from_raw)
            .ok_or_else(|| AppError::MissingFeatures(track_name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_one_is_major() {
        assert_eq!(Mode::from_raw(1), Mode::Major);
        assert_eq!(Mode::Major.to_string(), "Major");
    }

    #[test]
    fn test_other_modes_are_minor() {
        for raw in [0, -1, 2, i32::MAX] {
            assert_eq!(Mode::from_raw(raw), Mode::Minor, "mode {}", raw);
        }
        assert_eq!(Mode::Minor.to_string(), "Minor");
    }

    #[test]
    fn test_fields_pass_through() {
        let raw = RawFeatures::mock();
        let features = FeatureSet::from_raw(&raw);

        assert_eq!(features.danceability, raw.danceability);
        assert_eq!(features.energy, raw.energy);
        assert_eq!(features.key, raw.key);
        assert_eq!(features.loudness, raw.loudness);
        assert_eq!(features.speechiness, raw.speechiness);
        assert_eq!(features.acousticness, raw.acousticness);
        assert_eq!(features.instrumentalness, raw.instrumentalness);
        assert_eq!(features.liveness, raw.liveness);
        assert_eq!(features.valence, raw.valence);
        assert_eq!(features.tempo, raw.tempo);
        assert_eq!(features.mode, Mode::Major);
    }

    #[test]
    fn test_missing_record_is_an_error() {
        let err = FeatureSet::extract("Lost Song", None).unwrap_err();
        assert!(matches!(err, AppError::MissingFeatures(ref name) if name == "Lost Song"));
        assert!(FeatureSet::extract("Found", Some(&RawFeatures::mock())).is_ok());
    }
}
