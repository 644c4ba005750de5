pub mod dates;
pub mod enricher;
pub mod record;

pub use dates::{ms_to_minutes, parse_release_date};
pub use enricher::TrackEnricher;
pub use record::TrackRecord;
