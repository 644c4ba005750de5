use serde::{Deserialize, Serialize};

/// Broad genre buckets used for the genre distribution chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GenreCategory {
    #[serde(rename = "Pop music")]
    Pop,
    #[serde(rename = "Hip hop music")]
    HipHop,
    #[serde(rename = "Rock music")]
    Rock,
    #[serde(rename = "Rhythm and blues")]
    RhythmAndBlues,
    #[serde(rename = "Soul music")]
    Soul,
    #[serde(rename = "Reggae")]
    Reggae,
    #[serde(rename = "Country")]
    Country,
    #[serde(rename = "Funk")]
    Funk,
    #[serde(rename = "Folk music")]
    Folk,
    #[serde(rename = "Middle Eastern music")]
    MiddleEastern,
    #[serde(rename = "Jazz")]
    Jazz,
    #[serde(rename = "Disco")]
    Disco,
    #[serde(rename = "Classical music")]
    Classical,
    #[serde(rename = "Electronic music")]
    Electronic,
    #[serde(rename = "Music of Latin America")]
    LatinAmerica,
    #[serde(rename = "Blues")]
    Blues,
    #[serde(rename = "Music for children")]
    Children,
    #[serde(rename = "New-age music")]
    NewAge,
    #[serde(rename = "Vocal music")]
    Vocal,
    #[serde(rename = "Music of Africa")]
    Africa,
    #[serde(rename = "Christian music")]
    Christian,
    #[serde(rename = "Music of Asia")]
    Asia,
    #[serde(rename = "Ska")]
    Ska,
    #[serde(rename = "Traditional music")]
    Traditional,
    #[serde(rename = "Independent music")]
    Independent,
    #[serde(rename = "Other")]
    Other,
}

/// Keyword table, searched top to bottom. Some keywords appear under more
/// than one category ("soul", "folk"); the earlier row wins.
pub const GENRE_TABLE: &[(GenreCategory, &[&str])] = &[
    (GenreCategory::Pop, &["pop", "bedroom pop", "australian pop"]),
    (GenreCategory::HipHop, &["hip hop", "rap", "trap"]),
    (GenreCategory::Rock, &["rock", "alternative rock", "indie rock"]),
    (GenreCategory::RhythmAndBlues, &["r&b", "soul"]),
    (GenreCategory::Soul, &["soul"]),
    (GenreCategory::Reggae, &["reggae", "dancehall"]),
    (GenreCategory::Country, &["country", "folk"]),
    (GenreCategory::Funk, &["funk"]),
    (GenreCategory::Folk, &["folk"]),
    (GenreCategory::MiddleEastern, &["middle eastern"]),
    (GenreCategory::Jazz, &["jazz", "smooth jazz"]),
    (GenreCategory::Disco, &["disco"]),
    (GenreCategory::Classical, &["classical"]),
    (GenreCategory::Electronic, &["electronic", "dance", "edm"]),
    (GenreCategory::LatinAmerica, &["latin", "salsa", "tango"]),
    (GenreCategory::Blues, &["blues"]),
    (GenreCategory::Children, &["children"]),
    (GenreCategory::NewAge, &["new-age"]),
    (GenreCategory::Vocal, &["vocal"]),
    (GenreCategory::Africa, &["africa"]),
    (GenreCategory::Christian, &["christian"]),
    (GenreCategory::Asia, &["asian"]),
    (GenreCategory::Ska, &["ska"]),
    (GenreCategory::Traditional, &["traditional"]),
    (GenreCategory::Independent, &["indie"]),
];

impl GenreCategory {
    pub fn label(&self) -> &'static str {
        match self {
            GenreCategory::Pop => "Pop music",
            GenreCategory::HipHop => "Hip hop music",
            GenreCategory::Rock => "Rock music",
            GenreCategory::RhythmAndBlues => "Rhythm and blues",
            GenreCategory::Soul => "Soul music",
            GenreCategory::Reggae => "Reggae",
            GenreCategory::Country => "Country",
            GenreCategory::Funk => "Funk",
            GenreCategory::Folk => "Folk music",
            GenreCategory::MiddleEastern => "Middle Eastern music",
            GenreCategory::Jazz => "Jazz",
            GenreCategory::Disco => "Disco",
            GenreCategory::Classical => "Classical music",
            GenreCategory::Electronic => "Electronic music",
            GenreCategory::LatinAmerica => "Music of Latin America",
            GenreCategory::Blues => "Blues",
            GenreCategory::Children => "Music for children",
            GenreCategory::NewAge => "New-age music",
            GenreCategory::Vocal => "Vocal music",
            GenreCategory::Africa => "Music of Africa",
            GenreCategory::Christian => "Christian music",
            GenreCategory::Asia => "Music of Asia",
            GenreCategory::Ska => "Ska",
            GenreCategory::Traditional => "Traditional music",
            GenreCategory::Independent => "Independent music",
            GenreCategory::Other => "Other",
        }
    }
}

impl std::fmt::Display for GenreCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Map a raw Spotify genre string to its broad category.
///
/// Matching is exact after lower-casing; no trimming or substring search.
pub fn classify(genre: &str) -> GenreCategory {
    let genre = genre.to_lowercase();

    GENRE_TABLE
        .iter()
        .find(|(_, keywords)| keywords.contains(&genre.as_str()))
        .map(|(category, _)| *category)
        .unwrap_or(GenreCategory::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_keywords() {
        assert_eq!(classify("pop"), GenreCategory::Pop);
        assert_eq!(classify("bedroom pop"), GenreCategory::Pop);
        assert_eq!(classify("trap"), GenreCategory::HipHop);
        assert_eq!(classify("edm"), GenreCategory::Electronic);
        assert_eq!(classify("new-age"), GenreCategory::NewAge);
        assert_eq!(classify("indie"), GenreCategory::Independent);
        assert_eq!(classify("indie rock"), GenreCategory::Rock);
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(classify("Hip Hop"), GenreCategory::HipHop);
        assert_eq!(classify("R&B"), GenreCategory::RhythmAndBlues);
        assert_eq!(classify("SMOOTH JAZZ"), GenreCategory::Jazz);
    }

    #[test]
    fn test_shared_keywords_resolve_to_earlier_category() {
        // "soul" is listed under both Rhythm and blues and Soul music
        assert_eq!(classify("soul"), GenreCategory::RhythmAndBlues);
        assert_eq!(classify("soul").label(), "Rhythm and blues");
        // "folk" is listed under both Country and Folk music
        assert_eq!(classify("folk"), GenreCategory::Country);
    }

    #[test]
    fn test_unlisted_genres_fall_back_to_other() {
        assert_eq!(classify(""), GenreCategory::Other);
        assert_eq!(classify("modern alternative rock"), GenreCategory::Other);
        assert_eq!(classify(" pop"), GenreCategory::Other);
        assert_eq!(classify("k-pop"), GenreCategory::Other);
    }

    #[test]
    fn test_classify_is_deterministic() {
        for input in ["soul", "Folk", "dance", "unknown genre", ""] {
            assert_eq!(classify(input), classify(input));
        }
    }

    #[test]
    fn test_table_lists_every_category_once() {
        let mut seen = std::collections::HashSet::new();
        for (category, keywords) in GENRE_TABLE {
            assert!(seen.insert(*category), "{} listed twice", category);
            assert!(!keywords.is_empty());
            assert_ne!(*category, GenreCategory::Other);
        }
        assert_eq!(seen.len(), 25);
    }

    #[test]
    fn test_labels_match_serialized_names() {
        for (category, _) in GENRE_TABLE {
            let json = serde_json::to_string(category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.label()));
        }
    }
}
